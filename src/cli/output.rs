//! Output formatting for CLI commands.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::args::{KeyspellArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::corrector::{Correction, Suggestion};
use crate::spelling::source::SourceKind;

/// Results that know how to print themselves for people.
pub trait HumanOutput {
    /// Print the result to stdout.
    fn print_human(&self);
}

/// Result structure for the correct command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionOutput {
    pub query: String,
    pub correction: Correction,
}

/// Result structure for the suggest command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionsOutput {
    pub query: String,
    pub suggestions: Vec<Suggestion>,
}

/// Result structure for the build command.
#[derive(Debug, Serialize, Deserialize)]
pub struct BuildOutput {
    pub corpus: String,
    pub snapshot: String,
    pub unique_words: usize,
    pub total_tokens: u64,
    pub duration_ms: u64,
}

/// Result structure for the stats command.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsOutput {
    pub source: String,
    pub kind: SourceKind,
    pub unique_words: usize,
    pub total_tokens: u64,
    pub min_frequency: u64,
    pub correction_words: usize,
    pub top_words: Vec<(String, u64)>,
}

impl HumanOutput for CorrectionOutput {
    fn print_human(&self) {
        match &self.correction {
            Correction::Correct { .. } => println!("Word is spelled correctly!"),
            Correction::Suggested(suggestion) => println!(
                "Suggested correction for \"{}\": {} (distance {})",
                self.query, suggestion.word, suggestion.distance
            ),
        }
    }
}

impl HumanOutput for SuggestionsOutput {
    fn print_human(&self) {
        if self.suggestions.is_empty() {
            println!("No suggestions for \"{}\"", self.query);
            return;
        }

        println!("Suggestions for \"{}\":", self.query);
        println!("═══════════════");
        for (i, suggestion) in self.suggestions.iter().enumerate() {
            println!(
                "{:>2}. {:<20} distance {}  frequency {}",
                i + 1,
                suggestion.word,
                suggestion.distance,
                suggestion.frequency
            );
        }
    }
}

impl HumanOutput for BuildOutput {
    fn print_human(&self) {
        println!("Corpus: {}", self.corpus);
        println!("Snapshot: {}", self.snapshot);
        println!("Unique words: {}", self.unique_words);
        println!("Total tokens: {}", self.total_tokens);
        println!("Build time: {}ms", self.duration_ms);
    }
}

impl HumanOutput for StatsOutput {
    fn print_human(&self) {
        println!("Dictionary Statistics:");
        println!("══════════════════════");
        println!("Source: {} ({:?})", self.source, self.kind);
        println!("Unique words: {}", self.unique_words);
        println!("Total tokens: {}", self.total_tokens);
        println!(
            "Words seen at least {} times: {}",
            self.min_frequency, self.correction_words
        );

        if !self.top_words.is_empty() {
            println!();
            println!("Most frequent words:");
            println!("───────────────────");
            for (word, count) in &self.top_words {
                println!("  {word} ({count})");
            }
        }
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &KeyspellArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human();
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &KeyspellArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Render a path for output.
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

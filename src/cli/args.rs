//! Command line argument parsing for Keyspell CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::spelling::snapshot::SnapshotFormat;

/// Keyspell - keyboard-aware spelling correction
#[derive(Parser, Debug, Clone)]
#[command(name = "keyspell")]
#[command(about = "Suggest corrections for misspelled words from a corpus-derived dictionary")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct KeyspellArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE", env = "KEYSPELL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl KeyspellArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check a word and suggest the best correction
    Correct(CorrectArgs),

    /// List the best-ranked corrections for a word
    Suggest(SuggestArgs),

    /// Count a corpus and write a dictionary snapshot
    Build(BuildArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),
}

/// Options controlling how a dictionary source is loaded.
#[derive(Args, Debug, Clone, Default)]
pub struct DictionaryOptions {
    /// Minimum word frequency for a word to be offered as a correction
    #[arg(long)]
    pub min_frequency: Option<u64>,

    /// Where to persist counts when the source is a corpus
    #[arg(long, value_name = "SNAPSHOT_FILE")]
    pub snapshot: Option<PathBuf>,

    /// Do not persist counts when the source is a corpus
    #[arg(long, conflicts_with = "snapshot")]
    pub no_snapshot: bool,
}

/// Options controlling the dictionary scan.
#[derive(Args, Debug, Clone, Default)]
pub struct ScanOptions {
    /// Maximum edit distance for a suggestion
    #[arg(short = 'd', long)]
    pub max_distance: Option<usize>,

    /// Scan the dictionary in parallel
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for correcting a word
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Word to check
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Corpus text or dictionary snapshot
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    #[command(flatten)]
    pub dictionary: DictionaryOptions,

    #[command(flatten)]
    pub scan: ScanOptions,
}

/// Arguments for listing suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Word to check
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Corpus text or dictionary snapshot
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Maximum number of suggestions to return
    #[arg(short, long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    pub dictionary: DictionaryOptions,

    #[command(flatten)]
    pub scan: ScanOptions,
}

/// Arguments for building a snapshot
#[derive(Parser, Debug, Clone)]
pub struct BuildArgs {
    /// Corpus text file
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Snapshot file to write
    #[arg(short, long, value_name = "SNAPSHOT_FILE")]
    pub output: Option<PathBuf>,

    /// Snapshot encoding (default: inferred from the output extension)
    #[arg(long)]
    pub snapshot_format: Option<SnapshotFormat>,
}

/// Arguments for showing statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Corpus text or dictionary snapshot
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Number of most frequent words to show
    #[arg(short, long, default_value = "10")]
    pub top: usize,

    /// Minimum word frequency for the filtered view
    #[arg(long)]
    pub min_frequency: Option<u64>,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

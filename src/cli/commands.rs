//! Command implementations for Keyspell CLI.

use std::path::{Path, PathBuf};
use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::KeyspellConfig;
use crate::error::Result;
use crate::spelling::corrector::{CorrectorConfig, SpellingCorrector};
use crate::spelling::dictionary::{DictionaryBuilder, DictionaryConfig};
use crate::spelling::snapshot::{DEFAULT_SNAPSHOT_NAME, SnapshotFormat, save_snapshot_as};
use crate::spelling::source::DictionarySource;

/// Execute a CLI command.
pub fn execute_command(args: KeyspellArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Correct(correct_args) => correct_word(correct_args.clone(), &config, &args),
        Command::Suggest(suggest_args) => suggest_words(suggest_args.clone(), &config, &args),
        Command::Build(build_args) => build_snapshot(build_args.clone(), &config, &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &config, &args),
    }
}

/// Load the configuration file, if one was given.
fn load_config(args: &KeyspellArgs) -> Result<KeyspellConfig> {
    match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            KeyspellConfig::load(path)
        }
        None => Ok(KeyspellConfig::default()),
    }
}

/// Check a word against the dictionary and report the best correction.
fn correct_word(args: CorrectArgs, config: &KeyspellConfig, cli_args: &KeyspellArgs) -> Result<()> {
    let corrector = load_corrector(&args.source, &args.dictionary, &args.scan, config)?;
    let correction = corrector.correct(&args.word)?;

    output_result(
        "Correction",
        &CorrectionOutput {
            query: args.word,
            correction,
        },
        cli_args,
    )
}

/// List the best-ranked corrections for a word.
fn suggest_words(args: SuggestArgs, config: &KeyspellConfig, cli_args: &KeyspellArgs) -> Result<()> {
    let mut corrector = load_corrector(&args.source, &args.dictionary, &args.scan, config)?;
    if let Some(limit) = args.limit {
        let mut corrector_config = corrector.config().clone();
        corrector_config.max_suggestions = limit;
        corrector.set_config(corrector_config);
    }

    let suggestions = corrector.suggest(&args.word)?;

    output_result(
        "Suggestions",
        &SuggestionsOutput {
            query: args.word,
            suggestions,
        },
        cli_args,
    )
}

/// Count a corpus and persist the full dictionary.
fn build_snapshot(args: BuildArgs, config: &KeyspellConfig, cli_args: &KeyspellArgs) -> Result<()> {
    let output = args
        .output
        .or_else(|| config.dictionary.snapshot_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_NAME));
    let format = SnapshotFormat::resolve(
        &output,
        args.snapshot_format.or(config.dictionary.snapshot_format),
    )?;

    let start_time = Instant::now();
    let builder = DictionaryBuilder::with_config(config.dictionary.clone());
    let full = builder.count_file(&args.corpus)?;
    save_snapshot_as(&full, &output, format)?;
    let duration = start_time.elapsed();

    info!(
        "Written dictionary of {} word counts to {}",
        full.len(),
        output.display()
    );

    output_result(
        "Snapshot written",
        &BuildOutput {
            corpus: display_path(&args.corpus),
            snapshot: display_path(&output),
            unique_words: full.len(),
            total_tokens: full.total_frequency(),
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Show dictionary statistics without persisting anything.
fn show_stats(args: StatsArgs, config: &KeyspellConfig, cli_args: &KeyspellArgs) -> Result<()> {
    let min_frequency = args
        .min_frequency
        .unwrap_or(config.dictionary.min_frequency);
    let builder = DictionaryBuilder::with_config(DictionaryConfig {
        min_frequency,
        snapshot_path: None,
        snapshot_format: None,
    });

    let source = DictionarySource::open(&args.source)?;
    let full = source.load_full(&builder)?;
    let filtered = full.filtered(min_frequency);

    output_result(
        "Dictionary statistics",
        &StatsOutput {
            source: display_path(source.path()),
            kind: source.kind(),
            unique_words: full.len(),
            total_tokens: full.total_frequency(),
            min_frequency,
            correction_words: filtered.len(),
            top_words: full.most_frequent_words(args.top),
        },
        cli_args,
    )
}

/// Open a dictionary source and wrap it in a configured corrector.
fn load_corrector(
    source_path: &Path,
    options: &DictionaryOptions,
    scan: &ScanOptions,
    config: &KeyspellConfig,
) -> Result<SpellingCorrector> {
    let builder = DictionaryBuilder::with_config(dictionary_config(options, config));
    let source = DictionarySource::open(source_path)?;
    let dictionary = source.load(&builder)?;

    Ok(SpellingCorrector::with_config(
        dictionary,
        corrector_config(scan, config),
    ))
}

/// Apply command line overrides to the configured dictionary settings.
fn dictionary_config(options: &DictionaryOptions, config: &KeyspellConfig) -> DictionaryConfig {
    let mut dictionary = config.dictionary.clone();

    if let Some(min_frequency) = options.min_frequency {
        dictionary.min_frequency = min_frequency;
    }
    if options.no_snapshot {
        dictionary.snapshot_path = None;
    } else if let Some(snapshot) = &options.snapshot {
        dictionary.snapshot_path = Some(snapshot.clone());
    }

    dictionary
}

/// Apply command line overrides to the configured corrector settings.
fn corrector_config(scan: &ScanOptions, config: &KeyspellConfig) -> CorrectorConfig {
    let mut corrector = config.corrector.clone();

    if let Some(max_distance) = scan.max_distance {
        corrector.max_distance = max_distance;
    }
    if scan.parallel {
        corrector.parallel = true;
    }

    corrector
}

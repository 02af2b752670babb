use std::fs;
use std::io::Write;

use keyspell::error::KeyspellError;
use keyspell::spelling::{
    Correction, CorrectorConfig, DictionaryBuilder, DictionaryConfig, DictionarySource,
    FrequencyDictionary, SnapshotFormat, SourceKind, SpellingCorrector, load_snapshot,
    save_snapshot_as,
};

use tempfile::tempdir;

const CORPUS: &str = "\
The quick brown fox jumps over the lazy dog.
Dr. Watson receives the letter from Mr. Holmes (in London).
";

fn write_corpus(dir: &std::path::Path, repeat: usize) -> std::path::PathBuf {
    let path = dir.join("corpus.txt");
    let mut file = fs::File::create(&path).unwrap();
    for _ in 0..repeat {
        file.write_all(CORPUS.as_bytes()).unwrap();
    }
    writeln!(file, "A single Zanzibar appearance.").unwrap();
    path
}

#[test]
fn test_frequency_counts_from_text() {
    let dict = DictionaryBuilder::new().count_lines(["the cat sat. the cat ran."]);

    let expected = FrequencyDictionary::from_entries([("the", 2), ("cat", 2), ("sat", 1), ("ran", 1)]);
    assert_eq!(dict, expected);
}

#[test]
fn test_corpus_to_correction() {
    let dir = tempdir().unwrap();
    let corpus = write_corpus(dir.path(), 12);
    let snapshot = dir.path().join("word_dict.bin");

    let builder = DictionaryBuilder::with_config(DictionaryConfig {
        min_frequency: 10,
        snapshot_path: Some(snapshot.clone()),
        ..Default::default()
    });
    let dictionary = DictionarySource::open(&corpus).unwrap().load(&builder).unwrap();

    assert_eq!(dictionary.frequency("the"), 36);
    assert_eq!(dictionary.frequency("dr."), 12);
    assert_eq!(dictionary.frequency("london"), 12);
    assert!(!dictionary.contains("zanzibar"));

    let corrector = SpellingCorrector::new(dictionary);

    assert_eq!(
        corrector.correct("receives").unwrap(),
        Correction::Correct {
            word: "receives".to_string()
        }
    );
    assert_eq!(corrector.correct("weceives").unwrap().word(), "receives");
    assert_eq!(corrector.correct("quivk").unwrap().word(), "quick");
    assert_eq!(corrector.correct("Lomdon").unwrap().word(), "london");
    assert!(matches!(
        corrector.correct("zanzibar"),
        Err(KeyspellError::NoSuggestion(_))
    ));
}

#[test]
fn test_snapshot_and_corpus_are_interchangeable() {
    let dir = tempdir().unwrap();
    let corpus = write_corpus(dir.path(), 10);
    let snapshot = dir.path().join("word_dict.bin");

    let builder = DictionaryBuilder::with_config(DictionaryConfig {
        min_frequency: 10,
        snapshot_path: Some(snapshot.clone()),
        ..Default::default()
    });

    let from_corpus = DictionarySource::open(&corpus).unwrap().load(&builder).unwrap();

    let source = DictionarySource::open(&snapshot).unwrap();
    assert_eq!(source.kind(), SourceKind::Snapshot(SnapshotFormat::Binary));
    let from_snapshot = source.load(&builder).unwrap();

    assert_eq!(from_corpus, from_snapshot);

    let full = load_snapshot(&snapshot).unwrap();
    assert_eq!(full, builder.count_file(&corpus).unwrap());
    assert_eq!(full.frequency("zanzibar"), 1);
}

#[test]
fn test_filtered_view_is_subset_of_full() {
    let dir = tempdir().unwrap();
    let corpus = write_corpus(dir.path(), 10);

    let builder = DictionaryBuilder::with_config(DictionaryConfig {
        min_frequency: 10,
        snapshot_path: None,
        ..Default::default()
    });
    let full = builder.count_file(&corpus).unwrap();
    let filtered = builder.build(&corpus).unwrap();

    assert!(!filtered.is_empty());
    assert!(filtered.len() < full.len());
    for (word, &count) in filtered.words() {
        assert!(count >= 10, "{word} has count {count}");
        assert_eq!(full.frequency(word), count);
    }
}

#[test]
fn test_snapshot_round_trip_in_both_formats() {
    let dir = tempdir().unwrap();
    let corpus = write_corpus(dir.path(), 3);
    let full = DictionaryBuilder::new().count_file(&corpus).unwrap();

    for (name, format) in [
        ("words.bin", SnapshotFormat::Binary),
        ("words.json", SnapshotFormat::Json),
    ] {
        let path = dir.path().join(name);
        save_snapshot_as(&full, &path, format).unwrap();
        assert_eq!(load_snapshot(&path).unwrap(), full, "{name}");
    }
}

#[test]
fn test_garbage_snapshot_is_a_format_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("words.bin");
    fs::write(&path, b"KSPD\0\0\0\0garbage").unwrap();

    let source = DictionarySource::open(&path).unwrap();
    let result = source.load(&DictionaryBuilder::new());
    assert!(matches!(result, Err(KeyspellError::Format(_))));
}

#[test]
fn test_missing_sources_are_not_found() {
    let dir = tempdir().unwrap();

    let result = DictionarySource::open(dir.path().join("missing.txt"));
    assert!(matches!(result, Err(KeyspellError::NotFound(_))));

    let result = DictionaryBuilder::new().build(dir.path().join("missing.txt"));
    assert!(matches!(result, Err(KeyspellError::NotFound(_))));
}

#[test]
fn test_parallel_corrector_on_corpus_dictionary() {
    let dir = tempdir().unwrap();
    let corpus = write_corpus(dir.path(), 10);
    let dictionary = DictionaryBuilder::new().count_file(&corpus).unwrap().filtered(10);

    let serial = SpellingCorrector::new(dictionary.clone());
    let parallel = SpellingCorrector::with_config(
        dictionary,
        CorrectorConfig {
            parallel: true,
            ..Default::default()
        },
    );

    for query in ["teh", "jumsp", "holmez", "Watson", "dgo", "letterr"] {
        assert_eq!(
            serial.correct(query).ok(),
            parallel.correct(query).ok(),
            "{query}"
        );
        assert_eq!(serial.suggest(query).unwrap(), parallel.suggest(query).unwrap());
    }
}

use std::fs;
use wordpie::error::LexiconError;
use wordpie::lexicon::{FrequencyTable, Lexicon};
use wordpie::wordlists::{FileSource, WORDS_COUNT};

fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_embedded_lexicon_loads() {
    let lexicon = Lexicon::embedded().unwrap();
    assert_eq!(lexicon.len(), WORDS_COUNT);
    assert!(lexicon.contains("crane"));
}

#[test]
fn test_missing_word_file_is_data_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Lexicon::build(
        FileSource::new(dir.path().join("missing.txt")),
        FrequencyTable::embedded().unwrap(),
    );
    assert!(matches!(result, Err(LexiconError::DataLoad { .. })));
}

#[test]
fn test_bad_line_names_line_number() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "words.txt", "CRANE\n\nSL4TE\nIRATE\n");

    let err = Lexicon::build(FileSource::new(&path), FrequencyTable::embedded().unwrap())
        .unwrap_err();
    match err {
        LexiconError::DataLoad { reason, .. } => assert!(reason.starts_with("line 3"), "{reason}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_frequency_file_with_missing_letters_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write(&dir, "freq.csv", "A,0.08\nE,0.12\n");
    let words = write(&dir, "words.txt", "CRANE\n");

    let frequencies = FrequencyTable::from_file(&csv).unwrap();
    assert!(!frequencies.is_complete());

    let result = Lexicon::build(FileSource::new(&words), frequencies);
    assert!(matches!(result, Err(LexiconError::DataLoad { .. })));
}

#[test]
fn test_custom_frequencies_change_scores() {
    let dir = tempfile::tempdir().unwrap();
    let csv: String = (b'A'..=b'Z')
        .map(|letter| {
            let weight = if letter == b'Z' { 1.0 } else { 0.01 };
            format!("{},{weight}\n", char::from(letter))
        })
        .collect();
    let csv = write(&dir, "freq.csv", &csv);
    let words = write(&dir, "words.txt", "CRANE\nFUZZY\n");

    let lexicon = Lexicon::build(
        FileSource::new(&words),
        FrequencyTable::from_file(&csv).unwrap(),
    )
    .unwrap();

    assert!(lexicon.score("FUZZY").unwrap() > lexicon.score("CRANE").unwrap());
}

#[test]
fn test_added_word_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    // No trailing newline: the append must not glue words together
    let path = write(&dir, "words.txt", "CRANE\nSLATE");

    let mut lexicon =
        Lexicon::build(FileSource::new(&path), FrequencyTable::embedded().unwrap()).unwrap();
    lexicon.add_word("irate").unwrap();
    assert!(matches!(
        lexicon.add_word("irate"),
        Err(LexiconError::Validation { .. })
    ));

    assert_eq!(fs::read_to_string(&path).unwrap(), "CRANE\nSLATE\nIRATE\n");
    let reloaded =
        Lexicon::build(FileSource::new(&path), FrequencyTable::embedded().unwrap()).unwrap();
    assert_eq!(reloaded.len(), 3);
}

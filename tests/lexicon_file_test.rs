// Dictionary file loading tests for the startup path.
// WHY: the loader must read real files and fail hard on unreadable paths,
// so these run against the filesystem instead of in-memory strings.

use adverbial::lexicon::Lexicon;
use adverbial::matcher::AdverbMatcher;
use tempfile::TempDir;

#[tokio::test]
async fn test_load_dictionary_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let dict_path = temp_dir.path().join("adverbs.txt");
    tokio::fs::write(&dict_path, "Quickly\n\nall of a sudden\n  softly  \n")
        .await
        .expect("Failed to write dictionary file");

    let lexicon = Lexicon::from_file(&dict_path)
        .await
        .expect("Failed to load dictionary");

    assert_eq!(lexicon.word_count(), 2);
    assert_eq!(lexicon.phrase_count(), 1);
    assert!(lexicon.contains_word("quickly"));
    assert!(lexicon.contains_word("softly"));
}

#[tokio::test]
async fn test_missing_dictionary_file_is_fatal() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("does-not-exist.txt");

    let result = Lexicon::from_file(&missing).await;
    assert!(result.is_err(), "loading a missing dictionary must fail");

    let message = format!("{:#}", result.unwrap_err());
    assert!(
        message.contains("does-not-exist.txt"),
        "error should name the path: {message}"
    );
}

#[tokio::test]
async fn test_loaded_dictionary_drives_matching() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let dict_path = temp_dir.path().join("custom.txt");
    tokio::fs::write(&dict_path, "zigzaggedly\nround the houses\n")
        .await
        .expect("Failed to write dictionary file");

    let lexicon = Lexicon::from_file(&dict_path)
        .await
        .expect("Failed to load dictionary");
    let matcher = AdverbMatcher::new(lexicon).expect("Failed to build matcher");

    let result = matcher.check("He went round the houses, zigzaggedly.");
    assert_eq!(result.adverbs, vec!["round the houses", "zigzaggedly."]);
    assert_eq!(result.count, 2);
}

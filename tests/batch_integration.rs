// Batch translation integration tests through real temp files

use igpay::{BatchConfig, BatchStats, BatchTranslator, SentenceTranslator};
use tempfile::TempDir;

#[tokio::test]
async fn test_file_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("sentences.txt");
    let output_path = temp_dir.path().join("translated.txt");

    tokio::fs::write(&input_path, "pig latin\n\neat sky\n")
        .await
        .expect("Failed to write input file");

    let translator = SentenceTranslator::with_default_rules();
    let batch = BatchTranslator::new(BatchConfig::default());
    let stats = batch
        .translate_file(&translator, &input_path, Some(&output_path))
        .await
        .expect("Batch translation should succeed");

    let output = tokio::fs::read_to_string(&output_path)
        .await
        .expect("Failed to read output file");
    assert_eq!(output, "igpay atinlay\n\neatway skyay\n");

    assert_eq!(stats.lines_translated, 2);
    assert_eq!(stats.lines_passed_through, 1, "Empty line should pass through");
    assert_eq!(stats.chars_processed, 16);
    assert!(stats.read_error.is_none());
}

#[tokio::test]
async fn test_casing_and_punctuation_survive_batch_mode() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("greeting.txt");
    let output_path = temp_dir.path().join("greeting_translated.txt");

    tokio::fs::write(&input_path, "Hello, World!\n")
        .await
        .expect("Failed to write input file");

    let translator = SentenceTranslator::with_default_rules();
    let batch = BatchTranslator::new(BatchConfig::default());
    batch
        .translate_file(&translator, &input_path, Some(&output_path))
        .await
        .expect("Batch translation should succeed");

    let output = tokio::fs::read_to_string(&output_path)
        .await
        .expect("Failed to read output file");
    assert_eq!(output, "elloHay, orldWay!\n");
}

#[tokio::test]
async fn test_missing_input_records_error_by_default() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("does-not-exist.txt");

    let translator = SentenceTranslator::with_default_rules();
    let batch = BatchTranslator::new(BatchConfig::default());
    let stats = batch
        .translate_file(&translator, &missing, None)
        .await
        .expect("Default config records the error instead of failing");

    assert_eq!(stats.lines_translated, 0);
    assert!(stats.read_error.is_some(), "Open failure should be recorded");
}

#[tokio::test]
async fn test_missing_input_fails_fast_when_configured() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("does-not-exist.txt");

    let translator = SentenceTranslator::with_default_rules();
    let batch = BatchTranslator::new(BatchConfig {
        fail_fast: true,
        ..BatchConfig::default()
    });
    let result = batch.translate_file(&translator, &missing, None).await;

    assert!(result.is_err(), "fail_fast should turn the open failure into an error");
}

#[tokio::test]
async fn test_stats_json_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("input.txt");
    let stats_path = temp_dir.path().join("run_stats.json");

    tokio::fs::write(&input_path, "pig\nlatin\n")
        .await
        .expect("Failed to write input file");

    let translator = SentenceTranslator::with_default_rules();
    let batch = BatchTranslator::new(BatchConfig::default());
    let stats = batch
        .translate_file(&translator, &input_path, Some(&temp_dir.path().join("out.txt")))
        .await
        .expect("Batch translation should succeed");

    igpay::batch::write_stats(&stats, &stats_path)
        .await
        .expect("Failed to write stats");

    let json = tokio::fs::read_to_string(&stats_path)
        .await
        .expect("Failed to read stats file");
    let parsed: BatchStats = serde_json::from_str(&json).expect("Stats should parse back");

    assert_eq!(parsed.lines_translated, 2);
    assert_eq!(parsed.lines_passed_through, 0);
    assert_eq!(parsed.chars_processed, 8);
    assert_eq!(parsed.input_path, stats.input_path);
}

/// Integration tests for the text analyzer
///
/// These tests verify that the main functionality of the text analyzer works correctly,
/// from reading a file through counting to report export.

use std::path::Path;

use text_analyzer::app::run_analyzer;
use text_analyzer::utils::output_formatter;
use text_analyzer::{
    analyze_file, analyze_text, count_basics, AnalyzerConfig, AnalyzerError, BasicCounts,
    TextAnalyzer, SAMPLE_TEXT,
};

#[test]
fn test_analyze_test_file() {
    let analysis = analyze_file(Path::new("tests/sample_text.txt")).expect("Failed to analyze test file");

    assert_eq!(
        analysis.basic,
        BasicCounts {
            letters: 151,
            words: 40,
            spaces: 37,
            newlines: 4,
            special_symbols: 6,
        }
    );

    let pronouns = analysis.vocabulary("pronouns").expect("No pronoun table");
    assert_eq!(pronouns.get("it"), Some(2));
    assert_eq!(pronouns.get("its"), Some(1));
    assert_eq!(pronouns.get("she"), Some(1));
    assert_eq!(pronouns.get("they"), Some(1));
    assert_eq!(pronouns.get("them"), Some(1));
    assert_eq!(pronouns.get("this"), Some(1));
    assert_eq!(pronouns.get("these"), Some(1));
    assert_eq!(pronouns.total(), 8);

    let prepositions = analysis.vocabulary("prepositions").expect("No preposition table");
    assert_eq!(prepositions.total(), 5);
    assert_eq!(prepositions.get("above"), Some(1));

    let articles = analysis.vocabulary("articles").expect("No article table");
    assert_eq!(articles.get("a"), Some(1));
    assert_eq!(articles.get("an"), Some(1));
}

#[test]
fn test_empty_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let empty_file_path = temp_dir.path().join("empty.txt");
    std::fs::write(&empty_file_path, "  \n").expect("Failed to write empty file");

    let result = analyze_file(&empty_file_path);
    assert!(matches!(result, Err(AnalyzerError::EmptyInput)));
}

#[test]
fn test_missing_file() {
    let result = analyze_file("tests/does_not_exist.txt");
    assert!(matches!(result, Err(AnalyzerError::Io { .. })));
}

#[test]
fn test_sample_text() {
    let analysis = analyze_text(SAMPLE_TEXT).expect("Sample text should analyze");
    assert_eq!(analysis.basic, count_basics(SAMPLE_TEXT));
    assert!(analysis.vocabulary("pronouns").unwrap().get("you").unwrap() > 0);
    assert!(analysis.vocabulary("articles").unwrap().get("an").unwrap() > 0);
    // Repeated analysis gives the same answer
    assert_eq!(analysis, analyze_text(SAMPLE_TEXT).unwrap());
}

#[test]
fn test_run_analyzer_keeps_order_and_failures() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let first = temp_dir.path().join("first.txt");
    let blank = temp_dir.path().join("blank.txt");
    let last = temp_dir.path().join("last.txt");
    std::fs::write(&first, "I am here.").unwrap();
    std::fs::write(&blank, "").unwrap();
    std::fs::write(&last, "We went to an inn.").unwrap();

    let files = vec![first.clone(), blank.clone(), last.clone()];
    let done = std::sync::atomic::AtomicUsize::new(0);
    let results = run_analyzer(&files, &TextAnalyzer::default(), |_| {
        done.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    });

    assert_eq!(done.into_inner(), 3);
    let paths: Vec<_> = results.iter().map(|(p, _)| p.clone()).collect();
    assert_eq!(paths, files);
    assert!(results[0].1.is_ok());
    assert!(results[1].1.is_err());
    let last_analysis = results[2].1.as_ref().unwrap();
    assert_eq!(last_analysis.vocabulary("articles").unwrap().get("an"), Some(1));
    assert_eq!(last_analysis.vocabulary("prepositions").unwrap().get("to"), Some(1));
}

#[test]
fn test_config_file_drives_analysis() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.json");
    std::fs::write(
        &config_path,
        r#"{ "vocabularies": [ { "name": "conjunctions", "title": "Conjunctions", "words": ["and", "but", "or"] } ] }"#,
    )
    .unwrap();

    let analyzer = AnalyzerConfig::load(&config_path).unwrap().build_analyzer().unwrap();
    let analysis = analyzer.analyze_file(Path::new("tests/sample_text.txt")).unwrap();

    assert_eq!(analysis.vocabularies.len(), 1);
    let conjunctions = analysis.vocabulary("conjunctions").unwrap();
    assert_eq!(conjunctions.get("and"), Some(3));
    assert_eq!(conjunctions.get("but"), Some(1));
    assert_eq!(conjunctions.get("or"), Some(0));
}

#[test]
fn test_reports_written() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let analysis = analyze_text("An apple a day.").unwrap();

    let json_path = temp_dir.path().join("out.json");
    let html_path = temp_dir.path().join("out.html");
    let csv_path = temp_dir.path().join("out.csv");

    output_formatter::export_results_json(&analysis, &json_path).unwrap();
    output_formatter::create_html_report(&analysis, "inline", &html_path).unwrap();
    output_formatter::create_csv_report(&analysis, &csv_path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["basic"]["words"], 4);

    let html = std::fs::read_to_string(&html_path).unwrap();
    assert!(html.contains("Total indefinite articles found: 2"));

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.contains("Indefinite Articles,an,1"));
}

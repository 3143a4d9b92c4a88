/// Output formatter for analysis results
///
/// This module handles formatting and exporting analysis results in various formats,
/// including console output, JSON, HTML, and CSV. Results are only read here.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use handlebars::Handlebars;
use serde_json::{json, Value};

use crate::core::analyzer::{TextAnalysis, VocabularyCounts};

/// Column header for a vocabulary table: the title without its plural `s`
pub fn singular(title: &str) -> &str {
    title.strip_suffix('s').unwrap_or(title)
}

/// Line describing how many words of a vocabulary were found
pub fn found_message(vocabulary: &VocabularyCounts) -> String {
    let total = vocabulary.counts.total();
    let label = vocabulary.title.to_lowercase();
    if total == 0 {
        format!("No {} found in the text.", label)
    } else {
        format!("Total {} found: {}", label, total)
    }
}

/// Format analysis results for console output
///
/// # Arguments
///
/// * `analysis` - Analysis results for one input
/// * `use_markdown` - Whether to wrap output in markdown triple backticks
///
/// # Returns
///
/// Formatted string for console output
pub fn format_results(analysis: &TextAnalysis, use_markdown: bool) -> String {
    let mut output = String::new();

    if use_markdown {
        output.push_str("```\n");
    }

    output.push_str(&format!("{}\n", "Basic Text Statistics".yellow().bold()));
    for (label, count) in analysis.basic.rows() {
        output.push_str(&format!("  {:<20}{:>10}\n", label, count));
    }

    for vocabulary in &analysis.vocabularies {
        output.push('\n');
        output.push_str(&format!("{}\n", format!("{} Count", vocabulary.title).yellow().bold()));
        output.push_str(&format!("  {}\n", found_message(vocabulary)));

        let found = vocabulary.counts.non_zero_sorted();
        if found.is_empty() {
            continue;
        }

        output.push_str(&format!(
            "  {}\n",
            format!("{:<20}{:>10}", singular(&vocabulary.title), "Count").cyan().bold()
        ));
        for entry in found {
            output.push_str(&format!("  {:<20}{:>10}\n", entry.word, entry.count));
        }
    }

    if use_markdown {
        output.push_str("```\n");
    }

    output
}

/// Export results to a JSON file
///
/// Frequency tables are written in full, zero counts included.
///
/// # Arguments
///
/// * `analysis` - Analysis results for one input
/// * `output_path` - Path where the JSON file will be written
///
/// # Returns
///
/// Result indicating success or failure
pub fn export_results_json(analysis: &TextAnalysis, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create JSON output file: {}", output_path.display()))?;

    serde_json::to_writer_pretty(file, analysis).context("Failed to write JSON data")?;

    Ok(())
}

const HTML_TEMPLATE: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Text Analysis Report</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            line-height: 1.6;
            color: #eee;
            background-color: #111;
            max-width: 1000px;
            margin: 0 auto;
            padding: 20px;
        }
        h1 {
            border-bottom: 2px solid #00cccc;
            padding-bottom: 10px;
        }
        .timestamp {
            color: #999;
            font-size: 0.9em;
            margin-bottom: 30px;
        }
        .result-section {
            margin-bottom: 20px;
            padding: 15px;
            background-color: rgba(255,255,255,0.05);
            border-radius: 5px;
        }
        table {
            width: 100%;
            border-collapse: collapse;
            margin-top: 10px;
        }
        th {
            background-color: rgba(0,204,204,0.1);
            padding: 8px;
            border-bottom: 1px solid #444;
        }
        td {
            padding: 8px;
            border-bottom: 1px solid #333;
        }
        tr:nth-child(odd) td {
            background-color: rgba(0,0,0,0.2);
        }
        .name { text-align: left; }
        .count { text-align: right; }
    </style>
</head>
<body>
    <h1>Text Analysis Report</h1>
    <div class="timestamp">Source: {{source}}<br>Generated on: {{timestamp}}</div>

    <div class="result-section">
        <h3>Basic Text Statistics</h3>
        <table>
            <tr><th class="name">Element</th><th class="count">Count</th></tr>
            {{#each basic}}
            <tr><td class="name">{{label}}</td><td class="count">{{count}}</td></tr>
            {{/each}}
        </table>
    </div>

    {{#each vocabularies}}
    <div class="result-section">
        <h3>{{title}} Count</h3>
        <p>{{message}}</p>
        {{#if entries}}
        <table>
            <tr><th class="name">{{column}}</th><th class="count">Count</th></tr>
            {{#each entries}}
            <tr><td class="name">{{word}}</td><td class="count">{{count}}</td></tr>
            {{/each}}
        </table>
        {{/if}}
    </div>
    {{/each}}
</body>
</html>
"#;

/// Render the HTML report for one input
///
/// # Arguments
///
/// * `analysis` - Analysis results for one input
/// * `source` - Name of the analyzed input, shown in the report header
///
/// # Returns
///
/// The rendered HTML document
pub fn render_html_report(analysis: &TextAnalysis, source: &str) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars
        .register_template_string("report", HTML_TEMPLATE)
        .context("Failed to register HTML template")?;

    let basic: Vec<Value> = analysis
        .basic
        .rows()
        .iter()
        .map(|(label, count)| json!({ "label": label, "count": count }))
        .collect();

    let vocabularies: Vec<Value> = analysis
        .vocabularies
        .iter()
        .map(|vocabulary| {
            let entries: Vec<Value> = vocabulary
                .counts
                .non_zero_sorted()
                .into_iter()
                .map(|entry| json!({ "word": entry.word, "count": entry.count }))
                .collect();
            json!({
                "title": vocabulary.title,
                "column": singular(&vocabulary.title),
                "message": found_message(vocabulary),
                "entries": entries,
            })
        })
        .collect();

    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let template_data = json!({
        "source": source,
        "timestamp": timestamp,
        "basic": basic,
        "vocabularies": vocabularies,
    });

    handlebars
        .render("report", &template_data)
        .context("Failed to render HTML template")
}

/// Create an HTML report from analysis results
///
/// # Arguments
///
/// * `analysis` - Analysis results for one input
/// * `source` - Name of the analyzed input
/// * `output_path` - Path where the HTML file will be written
///
/// # Returns
///
/// Result indicating success or failure
pub fn create_html_report(analysis: &TextAnalysis, source: &str, output_path: &Path) -> Result<()> {
    let html = render_html_report(analysis, source)?;

    let mut file = File::create(output_path)
        .context(format!("Failed to create HTML output file: {}", output_path.display()))?;

    file.write_all(html.as_bytes())
        .context("Failed to write HTML data")?;

    Ok(())
}

/// Create a CSV report from analysis results
///
/// One row per basic count and one per vocabulary word, zero counts included.
///
/// # Arguments
///
/// * `analysis` - Analysis results for one input
/// * `output_path` - Path where the CSV file will be written
///
/// # Returns
///
/// Result indicating success or failure
pub fn create_csv_report(analysis: &TextAnalysis, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create CSV output file: {}", output_path.display()))?;

    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(["Section", "Item", "Count"])
        .context("Failed to write CSV header")?;

    for (label, count) in analysis.basic.rows() {
        let count = count.to_string();
        writer.write_record(["Basic", label, count.as_str()])
            .context("Failed to write CSV record")?;
    }

    for vocabulary in &analysis.vocabularies {
        for entry in vocabulary.counts.iter() {
            let count = entry.count.to_string();
            writer.write_record([vocabulary.title.as_str(), entry.word.as_str(), count.as_str()])
                .context("Failed to write CSV record")?;
        }
    }

    writer.flush().context("Failed to flush CSV writer")?;

    Ok(())
}

/// Create a summary of results for multiple inputs
///
/// # Arguments
///
/// * `all_results` - Results for multiple inputs, keyed by input name
///
/// # Returns
///
/// Summary string
pub fn create_summary(all_results: &[(String, TextAnalysis)]) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n\n", "Analysis Summary".yellow().bold()));
    output.push_str(&format!("Inputs analyzed: {}\n", all_results.len()));

    let total_words: usize = all_results.iter().map(|(_, a)| a.basic.words).sum();
    output.push_str(&format!("Total words: {}\n", total_words));

    // Per-vocabulary totals, in the order vocabularies first appear
    let mut totals: Vec<(String, usize)> = Vec::new();
    for (_, analysis) in all_results {
        for vocabulary in &analysis.vocabularies {
            let count = vocabulary.counts.total();
            match totals.iter_mut().find(|(title, _)| *title == vocabulary.title) {
                Some((_, total)) => *total += count,
                None => totals.push((vocabulary.title.clone(), count)),
            }
        }
    }

    for (title, total) in totals {
        output.push_str(&format!("Total {}: {}\n", title.to_lowercase(), total));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analyzer::TextAnalyzer;

    fn analysis(text: &str) -> TextAnalysis {
        TextAnalyzer::default().analyze(text)
    }

    #[test]
    fn test_singular() {
        assert_eq!(singular("Pronouns"), "Pronoun");
        assert_eq!(singular("Indefinite Articles"), "Indefinite Article");
        assert_eq!(singular("Stuff"), "Stuff");
    }

    #[test]
    fn test_format_results_omits_zero_counts() {
        let output = format_results(&analysis("It is what it is, to me."), false);
        assert!(output.contains("Total pronouns found: 3"));
        assert!(output.contains("No indefinite articles found in the text."));
        // `she` never occurs, so it has no row
        assert!(!output.contains("she"));
    }

    #[test]
    fn test_format_results_markdown() {
        let output = format_results(&analysis("a b"), true);
        assert!(output.starts_with("```\n"));
        assert!(output.ends_with("```\n"));
    }

    #[test]
    fn test_format_does_not_mutate() {
        let result = analysis("He and she went to the shop with a dog.");
        let before = result.clone();
        let _ = format_results(&result, false);
        let _ = render_html_report(&result, "inline").unwrap();
        assert_eq!(result, before);
    }

    #[test]
    fn test_html_report() {
        let html = render_html_report(&analysis("An owl sat on a branch."), "owl.txt").unwrap();
        assert!(html.contains("Source: owl.txt"));
        assert!(html.contains("Indefinite Articles Count"));
        assert!(html.contains("Total indefinite articles found: 2"));
        assert!(html.contains("<th class=\"name\">Preposition</th>"));
        assert!(html.contains("No pronouns found in the text."));
    }

    #[test]
    fn test_csv_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        create_csv_report(&analysis("a b"), &path).unwrap();

        let csv = std::fs::read_to_string(&path).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Section,Item,Count"));
        assert!(csv.contains("Basic,Letters,2\n"));
        assert!(csv.contains("Indefinite Articles,a,1\n"));
        assert!(csv.contains("Pronouns,i,0\n"));
    }

    #[test]
    fn test_json_export_keeps_order_and_zeros() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        create_json_and_read(&analysis("an"), &path);
    }

    fn create_json_and_read(result: &TextAnalysis, path: &Path) {
        export_results_json(result, path).unwrap();
        let value: Value = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["basic"]["letters"], 2);
        let articles = &value["vocabularies"][2];
        assert_eq!(articles["name"], "articles");
        assert_eq!(articles["counts"][0], json!({ "word": "a", "count": 0 }));
        assert_eq!(articles["counts"][1], json!({ "word": "an", "count": 1 }));
    }

    #[test]
    fn test_summary() {
        let results = vec![
            ("one".to_string(), analysis("I saw a cat.")),
            ("two".to_string(), analysis("You saw an owl in a tree.")),
        ];
        let summary = create_summary(&results);
        assert!(summary.contains("Inputs analyzed: 2"));
        assert!(summary.contains("Total words: 11"));
        assert!(summary.contains("Total pronouns: 2"));
        assert!(summary.contains("Total prepositions: 1"));
        assert!(summary.contains("Total indefinite articles: 3"));
    }
}

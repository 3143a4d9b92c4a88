/// Text Analyzer - counts characters, words and closed-class vocabulary in text
///
/// The main entry point for the text analyzer application. It parses command-line
/// arguments, gathers the inputs and coordinates analysis and reporting.

use anyhow::{Context, Result};
use clap::{ArgAction, ArgGroup, Parser};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, LevelFilter};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use text_analyzer::app::run_analyzer;
use text_analyzer::utils::file_utils::{self, FileSelection};
use text_analyzer::utils::output_formatter;
use text_analyzer::{AnalyzerConfig, AnalyzerError, TextAnalysis, TextAnalyzer, SAMPLE_TEXT};

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "text_analyzer",
    version,
    about = "Counts characters and words and tallies pronouns, prepositions and articles",
    long_about = "This tool analyzes text and reports:
- Letters, words, spaces, newlines and special symbols
- Occurrences of each pronoun
- Occurrences of each preposition
- Occurrences of each indefinite article
Word lists can be replaced or extended with a JSON configuration file."
)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .multiple(true)
        .args(["file_paths", "dir", "stdin", "sample"]),
))]
struct Args {
    /// Path(s) to the text file(s) to analyze
    file_paths: Vec<PathBuf>,

    /// Analyze all files in directory (recursively)
    #[arg(long = "dir")]
    dir: Option<PathBuf>,

    /// Read text from standard input
    #[arg(long = "stdin", action = ArgAction::SetTrue)]
    stdin: bool,

    /// Analyze the bundled sample text
    #[arg(long = "sample", action = ArgAction::SetTrue)]
    sample: bool,

    /// Exclude file pattern (glob syntax, can be used multiple times)
    #[arg(long = "exclude", action = ArgAction::Append)]
    exclude: Option<Vec<String>>,

    /// Include only file pattern (glob syntax, can be used multiple times)
    #[arg(long = "include", action = ArgAction::Append)]
    include: Option<Vec<String>>,

    /// Maximum file size to analyze in MB (default: 50)
    #[arg(long = "max-size", default_value = "50")]
    max_size: u64,

    /// Maximum number of files to analyze (default: 1000)
    #[arg(long = "max-files", default_value = "1000")]
    max_files: usize,

    /// Output in markdown format (wrapped in triple backticks)
    #[arg(long = "md", action = ArgAction::SetTrue)]
    md: bool,

    /// Export results to JSON file
    #[arg(long = "json")]
    json: Option<PathBuf>,

    /// Export results to HTML report
    #[arg(long = "html")]
    html: Option<PathBuf>,

    /// Export results to CSV file
    #[arg(long = "csv")]
    csv: Option<PathBuf>,

    /// Directory to store all output files
    #[arg(long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Suppress terminal output
    #[arg(long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,

    /// Show only summary information
    #[arg(long = "summary-only", action = ArgAction::SetTrue)]
    summary_only: bool,

    /// Path to configuration file (JSON)
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Number of parallel workers (0=auto, default: auto)
    #[arg(long = "parallel", default_value = "0")]
    parallel: usize,

    /// Set logging level (default: INFO)
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,

    /// Log file path (default: text_analyzer.log)
    #[arg(long = "log-file", default_value = "text_analyzer.log")]
    log_file: PathBuf,
}

/// Main entry point function
fn main() -> Result<()> {
    let start_time = Instant::now();

    let args = Args::parse();

    setup_logging(&args);

    let analyzer = load_analyzer(args.config.as_deref())?;

    let all_results = analyze_inputs(&analyzer, &args)?;

    if all_results.is_empty() {
        eprintln!("{}", "Error: No files specified or found for analysis".red());
        eprintln!("Run with --help for usage information");
        process::exit(1);
    }

    let succeeded: Vec<(String, TextAnalysis)> = all_results
        .iter()
        .filter_map(|(name, result)| match result {
            Ok(analysis) => Some((name.clone(), analysis.clone())),
            Err(_) => None,
        })
        .collect();

    export_all_results(&succeeded, &args)?;

    if !args.quiet {
        println!("\n{}", "Analysis Complete".bold());
        println!("{} {}", "Inputs analyzed:".green(), succeeded.len());
        println!(
            "{} {:.2} seconds",
            "Time elapsed:".green(),
            start_time.elapsed().as_secs_f64()
        );

        for (name, result) in &all_results {
            if let Err(e) = result {
                eprintln!("{} {}: {}", "Skipped".red(), name, e);
            }
        }

        if args.summary_only || succeeded.len() > 1 {
            println!("\n{}", output_formatter::create_summary(&succeeded));
        }

        if !args.summary_only {
            for (name, analysis) in &succeeded {
                println!("\n{}", "=".repeat(80).bold());
                println!("{} {}", "Results for:".cyan(), name);
                println!("{}", "=".repeat(80).bold());
                println!("{}", output_formatter::format_results(analysis, args.md));
            }
        }
    }

    if succeeded.is_empty() {
        process::exit(1);
    }

    Ok(())
}

/// Set up logging to the log file, falling back to stderr
fn setup_logging(args: &Args) {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(args.log_level);

    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Ok(file) = File::create(&args.log_file) {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
}

/// Build the analyzer from the configuration file, or the built-in lists
fn load_analyzer(config_path: Option<&Path>) -> Result<TextAnalyzer> {
    let config = match config_path {
        Some(path) => AnalyzerConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };

    let analyzer = config.build_analyzer().context("Invalid vocabulary configuration")?;
    info!(
        "Configured {} vocabularies",
        analyzer.vocabularies().len()
    );
    Ok(analyzer)
}

/// Analyze every requested input, keeping per-input failures
fn analyze_inputs(
    analyzer: &TextAnalyzer,
    args: &Args,
) -> Result<Vec<(String, Result<TextAnalysis>)>> {
    let mut all_results = Vec::new();

    if args.sample {
        all_results.push(("sample text".to_string(), Ok(analyzer.analyze(SAMPLE_TEXT))));
    }

    if args.stdin {
        let text = file_utils::read_stdin().context("Failed to read standard input")?;
        let result = analyzer.analyze_input(&text).map_err(|e| {
            if let AnalyzerError::EmptyInput = e {
                error!("Standard input is empty");
            }
            anyhow::Error::new(e)
        });
        all_results.push(("stdin".to_string(), result));
    }

    let selection = FileSelection {
        max_size: args.max_size * 1024 * 1024,
        max_files: args.max_files,
        include: args.include.clone().unwrap_or_else(|| vec!["*".to_string()]),
        exclude: args.exclude.clone().unwrap_or_default(),
    };
    let files = file_utils::collect_files(&args.file_paths, args.dir.as_deref(), &selection);
    if files.is_empty() {
        return Ok(all_results);
    }

    let num_workers = if args.parallel == 0 {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    } else {
        args.parallel
    };

    if !args.quiet {
        println!(
            "\n{} {} files with {} workers...",
            "Analyzing".bold(),
            files.len(),
            num_workers
        );
    }

    let progress_bar = if !args.quiet {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({eta})")
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_workers)
        .build()
        .context("Failed to build thread pool")?;

    let file_results = pool.install(|| {
        run_analyzer(&files, analyzer, |_| {
            if let Some(pb) = &progress_bar {
                pb.inc(1);
            }
        })
    });

    if let Some(pb) = progress_bar {
        pb.finish_with_message("Analysis complete");
    }

    all_results.extend(
        file_results
            .into_iter()
            .map(|(path, result)| (path.to_string_lossy().to_string(), result)),
    );

    Ok(all_results)
}

/// Export results for all analyzed inputs based on command line arguments
fn export_all_results(all_results: &[(String, TextAnalysis)], args: &Args) -> Result<()> {
    if let Some(output_dir) = &args.output_dir {
        std::fs::create_dir_all(output_dir)?;
    }

    let several = all_results.len() > 1;

    for (name, analysis) in all_results {
        let source = Path::new(name);

        if let Some(json_path) = &args.json {
            let path = output_path(args, json_path, source, "json", several);
            output_formatter::export_results_json(analysis, &path)?;
            info!("Wrote JSON report to {}", path.display());
        }

        if let Some(html_path) = &args.html {
            let path = output_path(args, html_path, source, "html", several);
            output_formatter::create_html_report(analysis, name, &path)?;
            info!("Wrote HTML report to {}", path.display());
        }

        if let Some(csv_path) = &args.csv {
            let path = output_path(args, csv_path, source, "csv", several);
            output_formatter::create_csv_report(analysis, &path)?;
            info!("Wrote CSV report to {}", path.display());
        }
    }

    Ok(())
}

/// Output path for one input's report
///
/// A single input writes to the requested path (inside `--output-dir` when
/// given). Several inputs each get `<stem>_analysis.<ext>`.
fn output_path(args: &Args, requested: &Path, source: &Path, extension: &str, several: bool) -> PathBuf {
    let file_name = if several {
        let file_stem = source.file_stem().unwrap_or_default();
        PathBuf::from(format!("{}_analysis.{}", file_stem.to_string_lossy(), extension))
    } else {
        requested.to_path_buf()
    };

    match &args.output_dir {
        Some(output_dir) if file_name.is_relative() => output_dir.join(file_name),
        _ => file_name,
    }
}

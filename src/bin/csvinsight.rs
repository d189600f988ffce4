use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use csv_insight::{
    Analysis, AnalyzeOptions, ParseWarning, Session, TemplateFormatter, analyze_file, write_table,
};
use tracing_subscriber::EnvFilter;

const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Parser)]
#[command(
    name = "csvinsight",
    version,
    about = "Profile a CSV file: schema, numeric columns, business domain"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a CSV file and print its analysis.
    Analyze(AnalyzeArgs),
    /// Answer a free-text question about a CSV file.
    Ask(AskArgs),
}

#[derive(Debug, Args)]
struct AnalyzeArgs {
    /// Input CSV path.
    #[arg(short, long)]
    input: PathBuf,

    /// Field separator character.
    #[arg(long, default_value = ",")]
    delimiter: char,

    /// Print the analysis as JSON instead of the human report.
    #[arg(long)]
    json: bool,

    /// Data rows retained as a display sample.
    #[arg(long, default_value_t = 5)]
    sample_rows: usize,

    /// Re-export the normalized table as properly quoted CSV.
    #[arg(long)]
    export: Option<PathBuf>,

    /// Print every parse warning in detail.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Args)]
struct AskArgs {
    /// Input CSV path.
    #[arg(short, long)]
    input: PathBuf,

    /// Question to route through the insight formatter.
    #[arg(short, long)]
    question: String,

    /// Field separator character.
    #[arg(long, default_value = ",")]
    delimiter: char,
}

/// Upload rules of the presentation layer: a `.csv` name and at most 10 MB,
/// checked before any parsing happens.
fn validate_upload(path: &Path) -> Result<()> {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    if !name.ends_with(".csv") {
        bail!("'{name}' is not a CSV file; only .csv files are supported");
    }

    let size = std::fs::metadata(path)
        .with_context(|| format!("cannot read '{}'", path.display()))?
        .len();
    if size > MAX_FILE_SIZE_BYTES {
        bail!("file is {size} bytes; the limit is 10 MB");
    }

    Ok(())
}

fn analyze_options(delimiter: char, sample_rows: usize) -> Result<AnalyzeOptions> {
    if !delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character");
    }
    Ok(AnalyzeOptions {
        delimiter,
        sample_rows,
    })
}

fn log_warnings(warnings: &[ParseWarning], verbose: bool) {
    if warnings.is_empty() {
        return;
    }

    eprintln!("warning: {} issue(s) detected", warnings.len());
    if verbose {
        for warning in warnings {
            eprintln!(
                "  - {:?} line={:?} column={:?}: {}",
                warning.code, warning.line, warning.column, warning.message
            );
        }
    }
}

fn print_report(analysis: &Analysis) {
    let result = &analysis.result;
    println!("rows:                {}", result.row_count);
    println!("columns:             {}", result.column_count);
    println!("column names:        {}", result.columns.join(", "));
    println!("numeric columns:     {}", result.numeric_columns.join(", "));
    println!("datetime columns:    {}", result.datetime_columns.join(", "));
    println!("categorical columns: {}", result.categorical_columns.join(", "));
    println!(
        "domain:              {} (confidence {:.2})",
        result.domain, result.confidence
    );
}

fn run_analyze(args: &AnalyzeArgs) -> Result<Analysis> {
    validate_upload(&args.input)?;
    let options = analyze_options(args.delimiter, args.sample_rows)?;

    let analysis = analyze_file(&args.input, &options)
        .with_context(|| format!("failed to analyze '{}'", args.input.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis.result)?);
    } else {
        print_report(&analysis);
    }

    if let Some(export) = &args.export {
        if analysis.table.columns.is_empty() {
            bail!("nothing to export: the input has no header line");
        }
        #[allow(clippy::cast_possible_truncation)]
        write_table(export, &analysis.table, args.delimiter as u8)
            .with_context(|| format!("failed to export '{}'", export.display()))?;
    }

    Ok(analysis)
}

fn run_ask(args: &AskArgs) -> Result<String> {
    validate_upload(&args.input)?;
    let options = analyze_options(args.delimiter, 5)?;

    let analysis = analyze_file(&args.input, &options)
        .with_context(|| format!("failed to analyze '{}'", args.input.display()))?;

    let mut session = Session::new();
    session.load(analysis.table, analysis.result);
    session
        .ask(&TemplateFormatter, &args.question)
        .context("no dataset loaded")
}

fn main() -> ExitCode {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("csv_insight=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze(args) => match run_analyze(&args) {
            Ok(analysis) => {
                log_warnings(&analysis.warnings, args.verbose);
                if analysis.result.row_count > 0 {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::from(2)
                }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                ExitCode::from(1)
            }
        },
        Commands::Ask(args) => match run_ask(&args) {
            Ok(answer) => {
                println!("{answer}");
                ExitCode::SUCCESS
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                ExitCode::from(1)
            }
        },
    }
}

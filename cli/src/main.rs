mod formatter;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use formatter::Formatter;
use std::path::{Path, PathBuf};
use unitify::{
    parse_expression, Evaluator, FileProcessor, Measurement, ReportGenerator, ResourceLimits,
    UnitConverter, UnitRegistry,
};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "unitify")]
#[command(about = "Measurement arithmetic with dimensional analysis.")]
#[command(
    long_about = "Unitify evaluates measurement expressions like '100 g / 2 L' with full dimensional analysis.\nThe CLI processes measurement files, evaluates single expressions, and converts between units."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ReportFormat {
    Text,
    Csv,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Process measurement files and display results
    ///
    /// Each line of a file is one expression. Malformed lines are reported
    /// individually and do not stop the batch. With no files given, all .txt
    /// files under the working directory are processed.
    Run {
        /// Measurement files to process
        files: Vec<PathBuf>,
        /// Directory to scan for .txt files when no files are given
        #[arg(short = 'd', long = "dir", default_value = ".")]
        workdir: PathBuf,
        /// Output format for the results report
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: ReportFormat,
        /// Show per-line outcomes, sorted measurements, and statistics
        #[arg(short = 'v', long)]
        verbose: bool,
    },
    /// Evaluate a single measurement expression
    ///
    /// Examples:
    ///   unitify eval "10 g * 5 g + 2 g"
    ///   unitify eval "100 g / 2 L"
    Eval {
        /// Expression to evaluate
        expression: String,
    },
    /// Convert a measurement to its base unit
    ///
    /// Examples:
    ///   unitify convert "72 km / hr"
    ///   unitify convert "1.5 kg"
    Convert {
        /// Measurement to convert
        measurement: String,
    },
    /// List all recognized units
    Units,
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Run {
            files,
            workdir,
            format,
            verbose,
        } => run_command(files, workdir, *format, *verbose),
        Commands::Eval { expression } => eval_command(expression),
        Commands::Convert { measurement } => convert_command(measurement),
        Commands::Units => units_command(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_command(
    files: &[PathBuf],
    workdir: &Path,
    format: ReportFormat,
    verbose: bool,
) -> Result<()> {
    let files = if files.is_empty() {
        find_measurement_files(workdir)?
    } else {
        files.to_vec()
    };
    if files.is_empty() {
        anyhow::bail!("no measurement files found in {}", workdir.display());
    }

    let mut processor = FileProcessor::new();
    for file in &files {
        processor.load_file(file)?;
    }

    let results = processor.results();
    match format {
        ReportFormat::Text => print!("{}", ReportGenerator::text_report(&results)),
        ReportFormat::Csv => print!("{}", ReportGenerator::csv_report(&results)),
        ReportFormat::Json => println!("{}", ReportGenerator::json_report(&results)?),
    }

    if verbose {
        let formatter = Formatter::default();
        println!("{}", formatter.format_line_outcomes(processor.line_results()));
        println!(
            "{}",
            formatter.format_measurements("Measurements (sorted)", &processor.sorted_measurements())
        );
        println!("{}", formatter.format_statistics(&results));
    }

    Ok(())
}

fn eval_command(expression: &str) -> Result<()> {
    let limits = ResourceLimits::default();
    let (operands, operators) = parse_expression(expression, &limits)?;
    let result = Evaluator::new().evaluate(&operands, &operators)?;
    println!("{}", result);
    Ok(())
}

fn convert_command(measurement: &str) -> Result<()> {
    let parsed: Measurement = measurement.parse()?;
    let base = UnitConverter::convert_to_base_unit(&parsed);
    let factor = UnitConverter::conversion_factor(parsed.unit(), base.unit());
    println!("{}", base);
    println!("(1 {} = {} {})", parsed.unit(), factor, base.unit());
    Ok(())
}

fn units_command() -> Result<()> {
    let formatter = Formatter::default();
    print!("{}", formatter.format_unit_table(UnitRegistry::entries()));
    Ok(())
}

/// Collect all .txt files under the working directory
fn find_measurement_files(workdir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(workdir) {
        let entry = entry?;
        if entry.path().extension().and_then(|s| s.to_str()) == Some("txt") {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

//! CLI entry point for the waste accuracy tool.
//!
//! Provides subcommands for classifying a waste-collection export, building a
//! single aggregated view, and listing the domain values present in the data.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use waste_accuracy::{
    catalog::Catalog,
    classifier::Classifier,
    config::VocabularyConfig,
    ingest::read_records,
    output::{print_json, print_pretty, write_csv},
    record::ClassifiedRecord,
    views::{Dimension, DisplayMode, Metric, ViewParams, YearRange, build_view},
};

#[derive(Parser)]
#[command(name = "waste_accuracy")]
#[command(about = "A tool to classify and aggregate waste audit data", long_about = None)]
struct Cli {
    /// CSV export to read (defaults to $WASTE_DATA_PATH)
    #[arg(short, long, global = true)]
    input: Option<String>,

    /// JSON file listing known waste categories (defaults to $WASTE_VOCABULARY)
    #[arg(long, global = true)]
    vocabulary: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify every record and write the result as CSV
    Classify {
        /// CSV file to write classified records to
        #[arg(short, long, default_value = "classified.csv")]
        output: String,
    },
    /// Build one aggregated view
    View {
        /// Metric to aggregate: weight or volume
        #[arg(short, long, default_value = "weight")]
        metric: Metric,

        /// Display mode: percent or value
        #[arg(short, long, default_value = "percent")]
        display: DisplayMode,

        /// Grouping dimension: building, waste (or stream), substream
        #[arg(short = 'g', long, default_value = "building")]
        dimension: Dimension,

        /// First year to include (defaults to the earliest year in the data)
        #[arg(long)]
        from_year: Option<i32>,

        /// Last year to include (defaults to the latest year in the data)
        #[arg(long)]
        to_year: Option<i32>,

        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// CSV file to write rows to when the format is csv
        #[arg(short, long, default_value = "view.csv")]
        output: String,
    },
    /// List waste categories, substreams, buildings, and the year span
    Summary,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Pretty,
    Csv,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/waste_accuracy.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("waste_accuracy.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let records = load(cli.input, cli.vocabulary)?;

    match cli.command {
        Commands::Classify { output } => {
            write_csv(&output, &records)?;
            info!(output = %output, records = records.len(), "Classified records written");
        }
        Commands::View {
            metric,
            display,
            dimension,
            from_year,
            to_year,
            format,
            output,
        } => {
            let bounds = Catalog::from_records(&records).years;
            let year_range = YearRange::resolve(bounds, from_year, to_year)?;
            let params = ViewParams::new(metric, display, dimension, year_range);
            let view = build_view(&records, &params);

            if view.is_empty() {
                info!(
                    from = year_range.min(),
                    to = year_range.max(),
                    "No records in year range"
                );
            }

            match format {
                Format::Json => print_json(&view)?,
                Format::Pretty => print_pretty(&view),
                Format::Csv => {
                    write_csv(&output, &view.rows)?;
                    info!(output = %output, rows = view.len(), "View written");
                }
            }
        }
        Commands::Summary => {
            let catalog = Catalog::from_records(&records);

            info!(
                records = records.len(),
                wastes = ?catalog.wastes,
                buildings = ?catalog.buildings,
                "Catalog"
            );
            info!(substreams = ?catalog.substreams, "Substreams");
            if let (Some(years), Some((first, last))) = (catalog.years, catalog.dates) {
                info!(
                    from_year = years.min(),
                    to_year = years.max(),
                    first_date = %first,
                    last_date = %last,
                    "Date span"
                );
            }
        }
    }

    Ok(())
}

/// Reads and classifies the input CSV, applying a vocabulary when one is configured.
#[tracing::instrument]
fn load(input: Option<String>, vocabulary: Option<String>) -> Result<Vec<ClassifiedRecord>> {
    let input = match input.or_else(|| std::env::var("WASTE_DATA_PATH").ok()) {
        Some(path) => path,
        None => bail!("no input CSV given; pass --input or set WASTE_DATA_PATH"),
    };

    let classifier = match vocabulary.or_else(|| std::env::var("WASTE_VOCABULARY").ok()) {
        Some(path) => {
            info!(path = %path, "Using waste vocabulary");
            VocabularyConfig::load(&path)?.classifier()?
        }
        None => Classifier::default(),
    };

    let raws = read_records(&input)?;
    Ok(classifier.classify_all(&raws)?)
}

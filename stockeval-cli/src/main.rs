//! stockeval CLI: summarize, show, and list commands.
//!
//! Commands:
//! - `summarize`: join both sources, write the coverage summary, print it
//! - `show`: print one record's display line
//! - `list`: print every (ticker, company name) pair in the registry
//!
//! Sources come from a TOML config (`--config`), from `--metadata`/`--prices`,
//! or both, in which case the flags win.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use stockeval_runner::{
    load_from_config, render_table, summarize, write_summary, LoadedData, OutputFormat, RunConfig,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "stockeval",
    about = "stockeval: price-history coverage per ticker"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Join metadata with prices and write the coverage summary.
    Summarize {
        #[command(flatten)]
        sources: SourceArgs,

        /// Summary output path. Defaults to the config value or ./summary.csv.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Summary format: csv or json.
        #[arg(long)]
        format: Option<OutputFormat>,
    },
    /// Print one record, or exit with status 1 if the ticker is not loaded.
    Show {
        /// Ticker to look up (case-sensitive).
        ticker: String,

        #[command(flatten)]
        sources: SourceArgs,
    },
    /// Print the registry listing.
    List {
        #[command(flatten)]
        sources: SourceArgs,
    },
}

#[derive(Args, Debug, Default)]
struct SourceArgs {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Metadata CSV (Ticker, CompanyName).
    #[arg(long)]
    metadata: Option<PathBuf>,

    /// Prices CSV (Ticker, TradeDate, Price).
    #[arg(long)]
    prices: Option<PathBuf>,

    /// Field delimiter for both sources, e.g. ';' or a tab.
    #[arg(long)]
    delimiter: Option<char>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Summarize {
            sources,
            output,
            format,
        } => run_summarize(&sources, output, format),
        Commands::Show { ticker, sources } => run_show(&sources, &ticker),
        Commands::List { sources } => run_list(&sources),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Build the run config from the file (if any), then apply flag overrides.
fn resolve_config(args: &SourceArgs) -> Result<RunConfig> {
    let mut config = match (&args.config, &args.metadata, &args.prices) {
        (Some(path), _, _) => RunConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        (None, Some(metadata), Some(prices)) => RunConfig::new(metadata, prices),
        (None, _, _) => bail!("pass --config, or both --metadata and --prices"),
    };

    if let Some(metadata) = &args.metadata {
        config.sources.metadata = metadata.clone();
    }
    if let Some(prices) = &args.prices {
        config.sources.prices = prices.clone();
    }
    if let Some(delimiter) = args.delimiter {
        config.sources.delimiter = delimiter;
    }
    Ok(config)
}

fn load(args: &SourceArgs) -> Result<(RunConfig, LoadedData)> {
    let config = resolve_config(args)?;
    debug!(?config, "resolved run config");
    let loaded = load_from_config(&config).context("failed to load sources")?;
    Ok((config, loaded))
}

fn run_summarize(
    args: &SourceArgs,
    output: Option<PathBuf>,
    format: Option<OutputFormat>,
) -> Result<()> {
    let (mut config, loaded) = load(args)?;
    if let Some(output) = output {
        config.output.summary = output;
    }
    if let Some(format) = format {
        config.output.format = format;
    }

    let rows = summarize(&loaded.registry);
    write_summary(&config.output.summary, &rows, config.output.format)?;

    print!("{}", render_table(&rows));
    println!();
    println!("Records:     {}", rows.len());
    if !loaded.report.missing_prices.is_empty() {
        println!("No prices:   {}", loaded.report.missing_prices.join(", "));
    }
    if !loaded.report.missing_metadata.is_empty() {
        println!("No metadata: {}", loaded.report.missing_metadata.join(", "));
    }
    println!("Fingerprint: {}", loaded.fingerprint);
    println!("Summary:     {}", config.output.summary.display());

    Ok(())
}

fn run_show(args: &SourceArgs, ticker: &str) -> Result<()> {
    let (_, loaded) = load(args)?;

    match loaded.registry.get(ticker) {
        Some(record) => {
            println!("{record}");
            if let (Some(first), Some(last)) = (record.first_date(), record.last_date()) {
                println!("  {first} .. {last}");
            }
            Ok(())
        }
        None => {
            eprintln!("{ticker}: not found");
            std::process::exit(1);
        }
    }
}

fn run_list(args: &SourceArgs) -> Result<()> {
    let (_, loaded) = load(args)?;
    print!("{}", loaded.registry);
    Ok(())
}

//! Joining metadata and prices into a registry.
//!
//! The join is an inner join driven by the metadata table:
//! 1. For each metadata ticker that also has prices → build a record
//! 2. Metadata tickers without prices → dropped, listed in the report
//! 3. Price tickers without metadata → never considered, listed in the report
//!
//! Inputs are borrowed and never mutated; each record gets its own copy of
//! the price history.

use stockeval_core::{
    read_metadata, read_prices, registry_fingerprint, MetadataTable, PriceTable, RecordError,
    SourceError, StockRecord, StockRegistry,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{ConfigError, RunConfig};

/// Errors from the loading layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid record for '{ticker}': {source}")]
    InvalidRecord {
        ticker: String,
        #[source]
        source: RecordError,
    },
}

/// What the join kept and what it left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records added to the registry.
    pub joined: usize,
    /// Metadata tickers with no price history.
    pub missing_prices: Vec<String>,
    /// Price tickers with no metadata entry.
    pub missing_metadata: Vec<String>,
}

/// Result of loading both sources from disk.
#[derive(Debug)]
pub struct LoadedData {
    pub registry: StockRegistry,
    pub report: LoadReport,
    /// Registry content hash (BLAKE3).
    pub fingerprint: String,
    /// Price rows accepted by the reader.
    pub price_rows: usize,
    /// Price rows that overwrote an earlier (ticker, date) observation.
    pub overwritten: usize,
}

/// Join metadata and prices into a new registry.
pub fn load(metadata: &MetadataTable, prices: &PriceTable) -> Result<StockRegistry, LoadError> {
    load_with_report(metadata, prices).map(|(registry, _)| registry)
}

/// Join metadata and prices, also reporting which tickers were left out.
pub fn load_with_report(
    metadata: &MetadataTable,
    prices: &PriceTable,
) -> Result<(StockRegistry, LoadReport), LoadError> {
    let mut registry = StockRegistry::new();
    let mut report = LoadReport::default();

    for (ticker, company_name) in metadata {
        let Some(history) = prices.get(ticker) else {
            debug!(ticker = %ticker, "no prices for ticker; dropped from registry");
            report.missing_prices.push(ticker.clone());
            continue;
        };

        let record = StockRecord::new(ticker.as_str(), company_name.as_str(), history.clone())
            .map_err(|source| LoadError::InvalidRecord {
                ticker: ticker.clone(),
                source,
            })?;
        registry.add(record);
        report.joined += 1;
    }

    report.missing_metadata = prices
        .keys()
        .filter(|ticker| !metadata.contains_key(*ticker))
        .cloned()
        .collect();
    for ticker in &report.missing_metadata {
        debug!(ticker = %ticker, "prices without metadata; ignored");
    }

    info!(
        joined = report.joined,
        missing_prices = report.missing_prices.len(),
        missing_metadata = report.missing_metadata.len(),
        "joined metadata with prices"
    );
    if registry.is_empty() {
        warn!("metadata and prices share no tickers; registry is empty");
    }

    Ok((registry, report))
}

/// Read both sources named by `config` and join them.
pub fn load_from_config(config: &RunConfig) -> Result<LoadedData, LoadError> {
    let opts = config.read_options()?;
    let metadata = read_metadata(&config.sources.metadata, &opts)?;
    let price_load = read_prices(&config.sources.prices, &opts)?;

    let (registry, report) = load_with_report(&metadata, &price_load.prices)?;
    let fingerprint = registry_fingerprint(&registry);

    Ok(LoadedData {
        registry,
        report,
        fingerprint,
        price_rows: price_load.rows,
        overwritten: price_load.overwritten,
    })
}

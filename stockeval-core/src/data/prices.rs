//! Price reader: ticker → trade date → price.
//!
//! Trade dates are normalized to calendar dates; any time-of-day component is
//! discarded. A later row for the same (ticker, date) overwrites the earlier
//! one and is counted in [`PriceLoad::overwritten`].

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::io;
use std::path::Path;
use tracing::{debug, info};

use super::schema::resolve_columns;
use super::source::{ReadOptions, SourceError, SourceKind};
use crate::domain::PriceHistory;

/// Price history per ticker, ordered by ticker.
pub type PriceTable = BTreeMap<String, PriceHistory>;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Result of reading a price source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceLoad {
    pub prices: PriceTable,
    /// Data rows accepted (skipped blank-ticker rows excluded).
    pub rows: usize,
    /// Rows that replaced an earlier observation for the same ticker and date.
    pub overwritten: usize,
}

/// Read a price file.
///
/// Missing required columns, unparseable dates and non-positive prices are
/// fatal; nothing is returned for a partially valid file.
pub fn read_prices(path: &Path, opts: &ReadOptions) -> Result<PriceLoad, SourceError> {
    let reader = opts
        .reader_builder()
        .from_path(path)
        .map_err(|source| SourceError::Open {
            kind: SourceKind::Prices,
            path: path.to_path_buf(),
            source,
        })?;

    let load = parse_prices(reader, opts)?;
    info!(
        path = %path.display(),
        tickers = load.prices.len(),
        rows = load.rows,
        overwritten = load.overwritten,
        "read prices"
    );
    Ok(load)
}

/// Read prices from any byte stream (header line first).
pub fn read_prices_from_reader<R: io::Read>(
    rdr: R,
    opts: &ReadOptions,
) -> Result<PriceLoad, SourceError> {
    parse_prices(opts.reader_builder().from_reader(rdr), opts)
}

/// Normalize a trade date cell to a calendar date.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD` and `MM/DD/YYYY`, optionally followed by
/// a time separated by whitespace or `T`.
pub fn parse_trade_date(raw: &str) -> Option<NaiveDate> {
    let day = raw
        .trim()
        .split(|c: char| c.is_whitespace() || c == 'T')
        .next()?;
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(day, fmt).ok())
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p > 0.0)
}

fn parse_prices<R: io::Read>(
    mut reader: csv::Reader<R>,
    opts: &ReadOptions,
) -> Result<PriceLoad, SourceError> {
    let kind = SourceKind::Prices;
    let headers = reader
        .headers()
        .map_err(|e| SourceError::malformed(kind, e))?
        .clone();
    let [ticker_col, date_col, price_col] = resolve_columns(
        kind,
        &headers,
        [
            opts.columns.ticker.as_str(),
            opts.columns.trade_date.as_str(),
            opts.columns.price.as_str(),
        ],
    )?;

    let mut load = PriceLoad::default();
    for result in reader.records() {
        let record = result.map_err(|e| SourceError::malformed(kind, e))?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let ticker = record.get(ticker_col).unwrap_or_default();
        if ticker.is_empty() || ticker == opts.columns.ticker {
            debug!(line, "skipping price row without a ticker");
            continue;
        }

        let raw_date = record.get(date_col).unwrap_or_default();
        let date = parse_trade_date(raw_date).ok_or_else(|| SourceError::InvalidDate {
            line,
            value: raw_date.to_string(),
        })?;

        let raw_price = record.get(price_col).unwrap_or_default();
        let price = parse_price(raw_price).ok_or_else(|| SourceError::InvalidPrice {
            line,
            value: raw_price.to_string(),
        })?;

        load.rows += 1;
        let history = load.prices.entry(ticker.to_string()).or_default();
        if let Some(previous) = history.insert(date, price) {
            load.overwritten += 1;
            debug!(ticker, %date, previous, price, line, "duplicate trade date; later row wins");
        }
    }

    Ok(load)
}

//! Metadata reader: ticker → company name.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;
use tracing::{debug, info};

use super::schema::resolve_columns;
use super::source::{ReadOptions, SourceError, SourceKind};

/// Company name per ticker, ordered by ticker.
pub type MetadataTable = BTreeMap<String, String>;

/// Read a metadata file.
///
/// Requires the ticker and company-name columns; other columns are ignored.
/// Blank tickers and repeated header lines are skipped. When a ticker appears
/// more than once the last row wins.
pub fn read_metadata(path: &Path, opts: &ReadOptions) -> Result<MetadataTable, SourceError> {
    let reader = opts
        .reader_builder()
        .from_path(path)
        .map_err(|source| SourceError::Open {
            kind: SourceKind::Metadata,
            path: path.to_path_buf(),
            source,
        })?;

    let table = parse_metadata(reader, opts)?;
    info!(path = %path.display(), tickers = table.len(), "read metadata");
    Ok(table)
}

/// Read metadata from any byte stream (header line first).
pub fn read_metadata_from_reader<R: io::Read>(
    rdr: R,
    opts: &ReadOptions,
) -> Result<MetadataTable, SourceError> {
    parse_metadata(opts.reader_builder().from_reader(rdr), opts)
}

fn parse_metadata<R: io::Read>(
    mut reader: csv::Reader<R>,
    opts: &ReadOptions,
) -> Result<MetadataTable, SourceError> {
    let kind = SourceKind::Metadata;
    let headers = reader
        .headers()
        .map_err(|e| SourceError::malformed(kind, e))?
        .clone();
    let [ticker_col, name_col] = resolve_columns(
        kind,
        &headers,
        [
            opts.columns.ticker.as_str(),
            opts.columns.company_name.as_str(),
        ],
    )?;

    let mut table = MetadataTable::new();
    for result in reader.records() {
        let record = result.map_err(|e| SourceError::malformed(kind, e))?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let ticker = record.get(ticker_col).unwrap_or_default();
        if ticker.is_empty() || ticker == opts.columns.ticker {
            debug!(line, "skipping metadata row without a ticker");
            continue;
        }

        let company_name = record.get(name_col).unwrap_or_default();
        if let Some(previous) = table.insert(ticker.to_string(), company_name.to_string()) {
            debug!(ticker, %previous, line, "ticker repeated in metadata; last row wins");
        }
    }

    Ok(table)
}

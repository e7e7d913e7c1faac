//! stockeval core: domain types and source readers.
//!
//! This crate contains the data side of the coverage pipeline:
//! - `StockRecord`: one ticker's identity and its date-keyed price history
//! - `StockRegistry`: the owning, ticker-keyed collection of records
//! - Metadata and price readers for row-oriented CSV sources
//! - A content fingerprint over a registry

pub mod data;
pub mod domain;
pub mod fingerprint;

pub use data::{
    parse_trade_date, read_metadata, read_metadata_from_reader, read_prices,
    read_prices_from_reader, ColumnNames, MetadataTable, PriceLoad, PriceTable, ReadOptions,
    SourceError, SourceKind,
};
pub use domain::{PriceHistory, RecordError, StockRecord, StockRegistry};
pub use fingerprint::registry_fingerprint;

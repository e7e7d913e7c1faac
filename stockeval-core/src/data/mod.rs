//! Source readers for the metadata and price tables.

pub mod metadata;
pub mod prices;
pub mod schema;
pub mod source;

pub use metadata::{read_metadata, read_metadata_from_reader, MetadataTable};
pub use prices::{parse_trade_date, read_prices, read_prices_from_reader, PriceLoad, PriceTable};
pub use schema::ColumnNames;
pub use source::{ReadOptions, SourceError, SourceKind};

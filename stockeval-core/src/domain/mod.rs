//! Domain types: stock records and the registry that owns them.

pub mod record;
pub mod registry;

pub use record::{PriceHistory, RecordError, StockRecord};
pub use registry::StockRegistry;

//! Content fingerprint of a registry.
//!
//! BLAKE3 over every record in ticker order, so two registries holding the
//! same data hash identically regardless of insertion order.

use crate::domain::{StockRecord, StockRegistry};

pub fn registry_fingerprint(registry: &StockRegistry) -> String {
    let mut records: Vec<&StockRecord> = registry.all().collect();
    records.sort_by(|a, b| a.ticker().cmp(b.ticker()));

    let mut hasher = blake3::Hasher::new();
    for record in records {
        hasher.update(record.ticker().as_bytes());
        hasher.update(&[0]);
        hasher.update(record.company_name().as_bytes());
        hasher.update(&[0]);
        for (date, price) in record.price_history() {
            hasher.update(date.to_string().as_bytes());
            hasher.update(&price.to_le_bytes());
        }
        hasher.update(&[0xff]);
    }

    hasher.finalize().to_hex().to_string()
}

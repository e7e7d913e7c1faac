//! Ticker-keyed collection of stock records.
//!
//! The registry owns its records and enumerates them in first-insertion order.
//! Replacing a ticker keeps its slot; removing one closes the gap.

use std::collections::HashMap;
use std::fmt;

use super::record::StockRecord;

/// Owning collection of [`StockRecord`]s, at most one per ticker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockRegistry {
    records: Vec<StockRecord>,
    /// ticker → position in `records`
    index: HashMap<String, usize>,
}

impl StockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its own ticker, replacing any existing record.
    pub fn add(&mut self, record: StockRecord) {
        match self.index.get(record.ticker()) {
            Some(&slot) => self.records[slot] = record,
            None => {
                self.index
                    .insert(record.ticker().to_string(), self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Remove the record for `ticker`.
    ///
    /// Absent tickers are a no-op and yield `None`.
    pub fn remove(&mut self, ticker: &str) -> Option<StockRecord> {
        let slot = self.index.remove(ticker)?;
        let removed = self.records.remove(slot);
        for position in self.index.values_mut() {
            if *position > slot {
                *position -= 1;
            }
        }
        Some(removed)
    }

    pub fn get(&self, ticker: &str) -> Option<&StockRecord> {
        self.index.get(ticker).map(|&slot| &self.records[slot])
    }

    pub fn contains(&self, ticker: &str) -> bool {
        self.index.contains_key(ticker)
    }

    /// All records in insertion order.
    pub fn all(&self) -> std::slice::Iter<'_, StockRecord> {
        self.records.iter()
    }

    pub fn tickers(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(StockRecord::ticker)
    }

    /// `(ticker, company_name)` for every record.
    pub fn listing(&self) -> Vec<(&str, &str)> {
        self.records
            .iter()
            .map(|r| (r.ticker(), r.company_name()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Display for StockRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (ticker, company_name) in self.listing() {
            writeln!(f, "({ticker}, {company_name})")?;
        }
        Ok(())
    }
}

impl Extend<StockRecord> for StockRegistry {
    fn extend<I: IntoIterator<Item = StockRecord>>(&mut self, iter: I) {
        for record in iter {
            self.add(record);
        }
    }
}

impl FromIterator<StockRecord> for StockRegistry {
    fn from_iter<I: IntoIterator<Item = StockRecord>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl IntoIterator for StockRegistry {
    type Item = StockRecord;
    type IntoIter = std::vec::IntoIter<StockRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a StockRegistry {
    type Item = &'a StockRecord;
    type IntoIter = std::slice::Iter<'a, StockRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

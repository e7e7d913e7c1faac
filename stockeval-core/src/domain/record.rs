use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Date-keyed price observations for a single ticker.
///
/// Keys are unique by construction; inserting an existing date replaces the
/// earlier price (last write wins).
pub type PriceHistory = BTreeMap<NaiveDate, f64>;

/// Errors from constructing a [`StockRecord`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("ticker must not be empty")]
    EmptyTicker,

    #[error("invalid price {price} for {ticker} on {date}: prices must be positive")]
    InvalidPrice {
        ticker: String,
        date: NaiveDate,
        price: f64,
    },
}

/// One ticker's identity paired with its price history.
///
/// Fields are private so the ticker cannot change after construction, and the
/// record owns its history outright.
#[derive(Debug, Clone, PartialEq)]
pub struct StockRecord {
    ticker: String,
    company_name: String,
    price_history: PriceHistory,
}

impl StockRecord {
    /// Create a record, validating the ticker and every price.
    pub fn new(
        ticker: impl Into<String>,
        company_name: impl Into<String>,
        price_history: PriceHistory,
    ) -> Result<Self, RecordError> {
        let ticker = ticker.into();
        if ticker.trim().is_empty() {
            return Err(RecordError::EmptyTicker);
        }

        if let Some((date, price)) = price_history
            .iter()
            .find(|(_, price)| !(price.is_finite() && **price > 0.0))
        {
            return Err(RecordError::InvalidPrice {
                ticker,
                date: *date,
                price: *price,
            });
        }

        Ok(Self {
            ticker,
            company_name: company_name.into(),
            price_history,
        })
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn price_history(&self) -> &PriceHistory {
        &self.price_history
    }

    /// Number of distinct dates with a price observation.
    pub fn coverage_count(&self) -> usize {
        self.price_history.len()
    }

    /// Price observed on `date`, if any.
    pub fn price_on(&self, date: NaiveDate) -> Option<f64> {
        self.price_history.get(&date).copied()
    }

    /// Earliest observed date.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.price_history.keys().next().copied()
    }

    /// Latest observed date.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.price_history.keys().next_back().copied()
    }
}

impl fmt::Display for StockRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} {} price entries",
            self.ticker,
            self.company_name,
            self.coverage_count()
        )
    }
}

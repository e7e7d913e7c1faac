//! Configurable header names and required-column resolution.

use csv::StringRecord;
use serde::{Deserialize, Serialize};

use super::source::{SourceError, SourceKind};

/// Header names of the columns the readers require.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub ticker: String,
    pub company_name: String,
    pub trade_date: String,
    pub price: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            ticker: "Ticker".into(),
            company_name: "CompanyName".into(),
            trade_date: "TradeDate".into(),
            price: "Price".into(),
        }
    }
}

/// Locate each required column in `headers`, failing with every missing name.
pub(crate) fn resolve_columns<const N: usize>(
    kind: SourceKind,
    headers: &StringRecord,
    required: [&str; N],
) -> Result<[usize; N], SourceError> {
    let mut positions = [0usize; N];
    let mut missing = Vec::new();

    for (slot, name) in required.iter().enumerate() {
        // Spreadsheet exports often prefix the first header with a BOM.
        match headers
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}').trim() == *name)
        {
            Some(position) => positions[slot] = position,
            None => missing.push((*name).to_string()),
        }
    }

    if missing.is_empty() {
        Ok(positions)
    } else {
        Err(SourceError::MissingColumns { kind, missing })
    }
}

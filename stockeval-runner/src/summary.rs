//! Coverage summary: one row per record, ranked by coverage.

use serde::{Deserialize, Serialize};
use stockeval_core::{StockRecord, StockRegistry};

/// One line of the coverage summary.
///
/// Serialized names match the summary file header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    #[serde(rename = "Ticker")]
    pub ticker: String,

    #[serde(rename = "Company Name")]
    pub company_name: String,

    #[serde(rename = "Number of Days")]
    pub number_of_days: usize,
}

impl From<&StockRecord> for SummaryRow {
    fn from(record: &StockRecord) -> Self {
        Self {
            ticker: record.ticker().to_string(),
            company_name: record.company_name().to_string(),
            number_of_days: record.coverage_count(),
        }
    }
}

/// Summarize `registry`, ascending by coverage.
///
/// The sort is stable: records with equal coverage keep registry order.
pub fn summarize(registry: &StockRegistry) -> Vec<SummaryRow> {
    let mut rows: Vec<SummaryRow> = registry.all().map(SummaryRow::from).collect();
    rows.sort_by_key(|row| row.number_of_days);
    rows
}

/// Fixed-width text table for terminal output.
pub fn render_table(rows: &[SummaryRow]) -> String {
    let ticker_width = rows
        .iter()
        .map(|r| r.ticker.chars().count())
        .chain(std::iter::once("Ticker".len()))
        .max()
        .unwrap_or_default();
    let name_width = rows
        .iter()
        .map(|r| r.company_name.chars().count())
        .chain(std::iter::once("Company Name".len()))
        .max()
        .unwrap_or_default();

    let mut out = format!(
        "{:<tw$}  {:<nw$}  {:>14}\n",
        "Ticker",
        "Company Name",
        "Number of Days",
        tw = ticker_width,
        nw = name_width
    );
    out.push_str(&"-".repeat(ticker_width + name_width + 18));
    out.push('\n');
    for row in rows {
        out.push_str(&format!(
            "{:<tw$}  {:<nw$}  {:>14}\n",
            row.ticker,
            row.company_name,
            row.number_of_days,
            tw = ticker_width,
            nw = name_width
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stockeval_core::PriceHistory;

    fn record(ticker: &str, days: u32) -> StockRecord {
        let history: PriceHistory = (1..=days)
            .map(|day| (NaiveDate::from_ymd_opt(2021, 1, day).unwrap(), 10.0))
            .collect();
        StockRecord::new(ticker, format!("{ticker} Corp."), history).unwrap()
    }

    #[test]
    fn sorted_ascending_by_coverage() {
        let registry: StockRegistry = vec![record("AAA", 3), record("BBB", 1), record("CCC", 2)]
            .into_iter()
            .collect();
        let rows = summarize(&registry);
        let days: Vec<usize> = rows.iter().map(|r| r.number_of_days).collect();
        assert_eq!(days, vec![1, 2, 3]);
        assert_eq!(rows[0].ticker, "BBB");
        assert_eq!(rows[0].company_name, "BBB Corp.");
    }

    #[test]
    fn ties_keep_insertion_order() {
        let registry: StockRegistry = vec![record("FIVE", 5), record("TWO_A", 2), record("TWO_B", 2)]
            .into_iter()
            .collect();
        let tickers: Vec<String> = summarize(&registry).into_iter().map(|r| r.ticker).collect();
        assert_eq!(tickers, vec!["TWO_A", "TWO_B", "FIVE"]);
    }

    #[test]
    fn empty_registry_summarizes_to_nothing() {
        assert!(summarize(&StockRegistry::new()).is_empty());
    }

    #[test]
    fn summary_does_not_touch_registry() {
        let registry: StockRegistry = vec![record("B", 2), record("A", 1)].into_iter().collect();
        let before = registry.clone();
        let _ = summarize(&registry);
        assert_eq!(registry, before);
    }

    #[test]
    fn table_width_counts_chars_not_bytes() {
        let history: PriceHistory = [(NaiveDate::from_ymd_opt(2021, 1, 4).unwrap(), 10.0)]
            .into_iter()
            .collect();
        let registry: StockRegistry = vec![
            StockRecord::new("ÅÄÖÜÉÆØ", "Nordisk Ærø", history.clone()).unwrap(),
            StockRecord::new("AB", "Plain Name", history).unwrap(),
        ]
        .into_iter()
        .collect();
        let table = render_table(&summarize(&registry));

        // 7-char ticker column, 12-char name column, two gaps, 14-char days column
        for line in table.lines() {
            assert_eq!(line.chars().count(), 7 + 2 + 12 + 2 + 14, "line: {line:?}");
        }
    }

    #[test]
    fn table_has_header_and_rows() {
        let registry: StockRegistry = vec![record("AAPL", 3)].into_iter().collect();
        let table = render_table(&summarize(&registry));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Ticker"));
        assert!(lines[0].contains("Company Name"));
        assert!(lines[0].ends_with("Number of Days"));
        assert!(lines[2].starts_with("AAPL"));
        assert!(lines[2].ends_with('3'));
    }
}

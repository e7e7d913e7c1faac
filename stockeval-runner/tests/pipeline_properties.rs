//! Property tests for the join and the summary ordering.
//!
//! 1. Join: registry tickers are exactly the intersection of both inputs
//! 2. Idempotence: joining the same inputs twice gives equal registries
//! 3. Sort law: summary coverage is non-decreasing
//! 4. Tie-break: equal coverage keeps registry order

use chrono::NaiveDate;
use proptest::prelude::*;
use std::collections::BTreeSet;
use stockeval_core::{
    registry_fingerprint, MetadataTable, PriceHistory, PriceTable, StockRecord, StockRegistry,
};
use stockeval_runner::{load, summarize};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_ticker() -> impl Strategy<Value = String> {
    "[A-F]{1,2}"
}

fn arb_history() -> impl Strategy<Value = PriceHistory> {
    prop::collection::btree_map(0u16..120, 1.0..500.0_f64, 0..15).prop_map(|days| {
        let base = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        days.into_iter()
            .map(|(offset, price)| (base + chrono::Duration::days(offset as i64), price))
            .collect()
    })
}

fn arb_metadata() -> impl Strategy<Value = MetadataTable> {
    prop::collection::btree_map(arb_ticker(), "[A-Za-z ]{1,12}", 0..12)
}

fn arb_prices() -> impl Strategy<Value = PriceTable> {
    prop::collection::btree_map(arb_ticker(), arb_history(), 0..12)
}

fn record(ticker: &str, days: u32) -> StockRecord {
    let history: PriceHistory = (1..=days)
        .map(|day| (NaiveDate::from_ymd_opt(2021, 1, day).unwrap(), 50.0))
        .collect();
    StockRecord::new(ticker, format!("{ticker} Holdings"), history).unwrap()
}

// ── 1-2. Join ────────────────────────────────────────────────────────

proptest! {
    /// Exactly the shared tickers make it into the registry, never more.
    #[test]
    fn join_is_an_intersection(metadata in arb_metadata(), prices in arb_prices()) {
        let registry = load(&metadata, &prices).unwrap();

        let expected: BTreeSet<&str> = metadata
            .keys()
            .filter(|t| prices.contains_key(*t))
            .map(String::as_str)
            .collect();
        let actual: BTreeSet<&str> = registry.tickers().collect();
        prop_assert_eq!(actual, expected);

        for stock in registry.all() {
            prop_assert_eq!(stock.company_name(), metadata[stock.ticker()].as_str());
            prop_assert_eq!(stock.price_history(), &prices[stock.ticker()]);
        }
    }

    /// Joining the same inputs twice yields identical registries.
    #[test]
    fn join_is_idempotent(metadata in arb_metadata(), prices in arb_prices()) {
        let a = load(&metadata, &prices).unwrap();
        let b = load(&metadata, &prices).unwrap();
        prop_assert_eq!(registry_fingerprint(&a), registry_fingerprint(&b));
        prop_assert_eq!(a, b);
    }
}

// ── 3. Sort law ──────────────────────────────────────────────────────

proptest! {
    /// Coverage never decreases from one summary row to the next, and every
    /// record appears exactly once.
    #[test]
    fn summary_is_non_decreasing(metadata in arb_metadata(), prices in arb_prices()) {
        let registry = load(&metadata, &prices).unwrap();
        let rows = summarize(&registry);

        prop_assert_eq!(rows.len(), registry.len());
        for pair in rows.windows(2) {
            prop_assert!(pair[0].number_of_days <= pair[1].number_of_days);
        }
        for row in &rows {
            let stock = registry.get(&row.ticker).unwrap();
            prop_assert_eq!(row.number_of_days, stock.coverage_count());
        }
    }

    /// Rows with equal coverage appear in registry order.
    #[test]
    fn ties_follow_registry_order(days in prop::collection::vec(0u32..4, 0..20)) {
        let registry: StockRegistry = days
            .iter()
            .enumerate()
            .map(|(i, d)| record(&format!("T{i:02}"), *d))
            .collect();
        let rows = summarize(&registry);

        let position = |ticker: &str| registry.tickers().position(|t| t == ticker).unwrap();
        for pair in rows.windows(2) {
            if pair[0].number_of_days == pair[1].number_of_days {
                prop_assert!(position(&pair[0].ticker) < position(&pair[1].ticker));
            }
        }
    }
}

// ── 4. Tie-break scenario ────────────────────────────────────────────

#[test]
fn five_two_two_scenario() {
    let mut registry = StockRegistry::new();
    registry.add(record("FIRST", 5));
    registry.add(record("SECOND", 2));
    registry.add(record("THIRD", 2));

    let rows = summarize(&registry);
    let order: Vec<(&str, usize)> = rows
        .iter()
        .map(|r| (r.ticker.as_str(), r.number_of_days))
        .collect();
    assert_eq!(order, vec![("SECOND", 2), ("THIRD", 2), ("FIRST", 5)]);
}

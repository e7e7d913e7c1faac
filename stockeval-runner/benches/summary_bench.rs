//! Criterion benchmarks for the load/summarize path.
//!
//! Benchmarks:
//! 1. Price CSV parsing (reader over an in-memory source)
//! 2. Metadata/prices join
//! 3. Coverage summary
//! 4. Registry fingerprint

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use stockeval_core::{
    read_prices_from_reader, registry_fingerprint, MetadataTable, PriceHistory, PriceTable,
    ReadOptions,
};
use stockeval_runner::{load, summarize};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_metadata(tickers: usize) -> MetadataTable {
    (0..tickers)
        .map(|i| (format!("T{i:04}"), format!("Company {i}")))
        .collect()
}

/// Ticker `i` gets `days - (i % 50)` observations so coverage varies.
fn make_prices(tickers: usize, days: usize) -> PriceTable {
    let base_date = chrono::NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
    (0..tickers)
        .map(|i| {
            let n = days.saturating_sub(i % 50);
            let history: PriceHistory = (0..n)
                .map(|d| {
                    let price = 100.0 + (d as f64 * 0.1).sin() * 10.0;
                    (base_date + chrono::Duration::days(d as i64), price)
                })
                .collect();
            (format!("T{i:04}"), history)
        })
        .collect()
}

fn make_price_csv(tickers: usize, days: usize) -> String {
    let mut out = String::from("Ticker,TradeDate,Price\n");
    for (ticker, history) in make_prices(tickers, days) {
        for (date, price) in history {
            out.push_str(&format!("{ticker},{date} 00:00:00,{price:.2}\n"));
        }
    }
    out
}

// ── 1. Price parsing ─────────────────────────────────────────────────

fn bench_read_prices(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_prices");
    let opts = ReadOptions::default();

    for tickers in [50, 500] {
        let csv = make_price_csv(tickers, 250);
        group.bench_with_input(BenchmarkId::from_parameter(tickers), &csv, |b, csv| {
            b.iter(|| read_prices_from_reader(black_box(csv.as_bytes()), &opts).unwrap())
        });
    }
    group.finish();
}

// ── 2. Join ──────────────────────────────────────────────────────────

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    for tickers in [50, 500] {
        let metadata = make_metadata(tickers);
        // Every tenth metadata ticker has no prices.
        let mut prices = make_prices(tickers, 250);
        prices.retain(|ticker, _| !ticker.ends_with('0'));

        group.bench_with_input(
            BenchmarkId::from_parameter(tickers),
            &(metadata, prices),
            |b, (metadata, prices)| b.iter(|| load(black_box(metadata), black_box(prices)).unwrap()),
        );
    }
    group.finish();
}

// ── 3-4. Summary and fingerprint ─────────────────────────────────────

fn bench_summarize(c: &mut Criterion) {
    let registry = load(&make_metadata(500), &make_prices(500, 250)).unwrap();

    c.bench_function("summarize_500", |b| {
        b.iter(|| summarize(black_box(&registry)))
    });
    c.bench_function("fingerprint_500", |b| {
        b.iter(|| registry_fingerprint(black_box(&registry)))
    });
}

criterion_group!(benches, bench_read_prices, bench_load, bench_summarize);
criterion_main!(benches);

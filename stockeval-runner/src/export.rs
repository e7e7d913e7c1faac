//! Summary sinks: CSV and JSON.
//!
//! The CSV sink is the canonical output: a `Ticker,Company Name,Number of Days`
//! header followed by one row per summary line, in summary order. Written
//! files can be read back into the same rows.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::config::OutputFormat;
use crate::summary::SummaryRow;

/// Header row of the summary file, in column order.
pub const SUMMARY_HEADER: [&str; 3] = ["Ticker", "Company Name", "Number of Days"];

// ─── CSV ────────────────────────────────────────────────────────────

/// Render the summary as CSV. The header is written even when `rows` is empty.
pub fn export_summary_csv(rows: &[SummaryRow]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(SUMMARY_HEADER)?;

    for row in rows {
        let days = row.number_of_days.to_string();
        wtr.write_record([row.ticker.as_str(), row.company_name.as_str(), days.as_str()])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Parse summary CSV, rejecting any header other than [`SUMMARY_HEADER`].
pub fn import_summary_csv(csv_text: &str) -> Result<Vec<SummaryRow>> {
    let mut rdr = csv::Reader::from_reader(csv_text.as_bytes());
    let headers = rdr.headers().context("failed to read summary header")?;
    if headers.iter().ne(SUMMARY_HEADER) {
        bail!(
            "unexpected summary header '{}' (expected '{}')",
            headers.iter().collect::<Vec<_>>().join(","),
            SUMMARY_HEADER.join(",")
        );
    }

    rdr.deserialize()
        .collect::<Result<Vec<SummaryRow>, _>>()
        .context("failed to parse summary rows")
}

// ─── JSON ───────────────────────────────────────────────────────────

pub fn export_summary_json(rows: &[SummaryRow]) -> Result<String> {
    serde_json::to_string_pretty(rows).context("failed to serialize summary to JSON")
}

pub fn import_summary_json(json: &str) -> Result<Vec<SummaryRow>> {
    serde_json::from_str(json).context("failed to deserialize summary from JSON")
}

// ─── Files ──────────────────────────────────────────────────────────

/// Write the summary to `path` in `format`, creating parent directories.
pub fn write_summary(path: &Path, rows: &[SummaryRow], format: OutputFormat) -> Result<()> {
    let body = match format {
        OutputFormat::Csv => export_summary_csv(rows)?,
        OutputFormat::Json => export_summary_json(rows)?,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output dir: {}", parent.display()))?;
    }
    std::fs::write(path, body)
        .with_context(|| format!("failed to write summary {}", path.display()))?;

    info!(path = %path.display(), rows = rows.len(), %format, "wrote summary");
    Ok(())
}

pub fn write_summary_csv(path: &Path, rows: &[SummaryRow]) -> Result<()> {
    write_summary(path, rows, OutputFormat::Csv)
}

/// Read a summary file written by [`write_summary`].
pub fn read_summary(path: &Path, format: OutputFormat) -> Result<Vec<SummaryRow>> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read summary {}", path.display()))?;
    match format {
        OutputFormat::Csv => import_summary_csv(&body),
        OutputFormat::Json => import_summary_json(&body),
    }
}

pub fn read_summary_csv(path: &Path) -> Result<Vec<SummaryRow>> {
    read_summary(path, OutputFormat::Csv)
}

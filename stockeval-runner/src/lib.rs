//! stockeval runner: join, summarize, export.
//!
//! This crate builds on `stockeval-core` to provide:
//! - Run configuration loaded from TOML
//! - The metadata/prices inner join that populates a registry
//! - The coverage summary, ranked by number of days
//! - CSV and JSON summary sinks that round-trip

pub mod config;
pub mod data_loader;
pub mod export;
pub mod summary;

pub use config::{ConfigError, OutputConfig, OutputFormat, RunConfig, SourcesConfig};
pub use data_loader::{load, load_from_config, load_with_report, LoadError, LoadReport, LoadedData};
pub use export::{
    export_summary_csv, export_summary_json, import_summary_csv, import_summary_json,
    read_summary, read_summary_csv, write_summary, write_summary_csv, SUMMARY_HEADER,
};
pub use summary::{render_table, summarize, SummaryRow};

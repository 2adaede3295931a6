//! CSV export module
//!
//! Serializes the full loaded row set (never just the visible page, and
//! always in load order) to CSV and writes it to disk.

mod csv;

pub use csv::{escape_cell, export_file_name, to_csv, write_csv, ExportSummary};

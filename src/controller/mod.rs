//! Load controller module
//!
//! Drives a dataset viewer through `Idle -> Loading -> {Loaded, Failed}`.
//!
//! # Overview
//!
//! Loads start when the viewer becomes visible with an identifier, when the
//! identifier or dataset kind changes while visible, or on explicit reload.
//! Each load is tagged with a generation number, and results from older
//! generations are discarded so a slow stale response never replaces newer
//! data. Failures are never retried automatically.

mod state;
mod viewer;

pub use state::{LoadRequest, LoadState, LOAD_FAILED_MESSAGE};
pub use viewer::DataViewer;

#[cfg(test)]
mod tests;

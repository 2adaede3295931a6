// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # tourney-view
//!
//! Sortable, paginated, exportable views over negotiation tournament
//! datasets served as JSON by a REST backend.
//!
//! ## Features
//!
//! - **Column Inference**: number/boolean/object/text typing from the first row
//! - **Sort & Paginate**: client-side stable sort with nulls last, fixed page sizes
//! - **CSV Export**: full dataset in load order with proper quoting
//! - **Load Controller**: visibility/identifier driven loads, stale responses dropped
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tourney_view::controller::DataViewer;
//! use tourney_view::dataset::{DatasetKind, HttpDataSource};
//!
//! #[tokio::main]
//! async fn main() -> tourney_view::Result<()> {
//!     let source = HttpDataSource::new("http://localhost:8000")?;
//!     let mut viewer = DataViewer::new(DatasetKind::AllScores).with_identifier("t42");
//!
//!     viewer.load(&source).await?;
//!     viewer.table_mut().sort_by("score");
//!     for row in viewer.table().page_rows() {
//!         println!("{row:?}");
//!     }
//!     viewer.export_csv(".")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  DataViewer (controller)                  │
//! │  set_visible / set_identifier / reload → LoadRequest      │
//! │  complete(request, body) → Loaded | Failed                │
//! └──────────────────────────────────────────────────────────┘
//!           │                 │                 │
//! ┌─────────┴──────┬──────────┴───────┬─────────┴────────┐
//! │    Dataset     │      Column      │      Table       │
//! ├────────────────┼──────────────────┼──────────────────┤
//! │ Endpoints      │ Type inference   │ Sort state       │
//! │ HTTP source    │ Formatting       │ Page state       │
//! │ Row extraction │ Ordering         │ CSV export       │
//! └────────────────┴──────────────────┴──────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Row and cell types
pub mod types;

/// Column inference and formatting
pub mod column;

/// Sort and pagination
pub mod table;

/// CSV export
pub mod export;

/// HTTP client
pub mod http;

/// Dataset kinds, endpoints and sources
pub mod dataset;

/// Load controller
pub mod controller;

/// Viewer configuration
pub mod config;

/// Text rendering
pub mod render;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use controller::{DataViewer, LoadRequest, LoadState};
pub use dataset::{DataSource, DatasetKind, HttpDataSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

//! Sort/paginate engine
//!
//! Client-side total-order sort over loaded rows followed by page slicing.
//!
//! # Overview
//!
//! - `SortState` toggles direction when the same field is picked twice
//! - Nulls sort last in both directions
//! - `PageState` slices the sorted rows into pages of 25, 50, 100 or 250

mod sort;
mod types;
mod view;

pub use sort::{compare_cells, sorted_indices};
pub use types::{PageSize, PageState, SortDirection, SortState};
pub use view::TableView;

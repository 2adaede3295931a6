//! Column inference module
//!
//! Derives display columns from the first row of a freshly loaded dataset.
//!
//! # Rules
//!
//! - **Number**: numeric sample value, or a field name containing a numeric hint
//! - **Boolean**: field name in the known boolean set, rendered Yes/No
//! - **Object**: object or array sample, rendered as compact JSON
//! - **Text**: everything else

mod inference;
mod types;

pub use inference::{infer_columns, ColumnInferrer, DEFAULT_BOOLEAN_FIELDS, DEFAULT_NUMERIC_HINTS};
pub use types::{display_name_for, format_cell, format_number, Alignment, Column, ColumnType};

#[cfg(test)]
mod tests;

//! Column inference from the first row of a dataset

use super::types::{Column, ColumnType};
use crate::types::Row;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

/// Field-name substrings that mark a column as numeric
pub static DEFAULT_NUMERIC_HINTS: Lazy<Vec<String>> = Lazy::new(|| {
    [
        "step",
        "time",
        "utility",
        "count",
        "score",
        "advantage",
        "welfare",
        "round",
        "duration",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
});

/// Field names that are always rendered as Yes/No
pub static DEFAULT_BOOLEAN_FIELDS: Lazy<HashSet<String>> = Lazy::new(|| {
    [
        "broken",
        "timedout",
        "has_error",
        "erred",
        "failed",
        "running",
        "started",
        "completed",
        "ended",
        "agreement_reached",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
});

/// Column inferrer with configurable name hints
#[derive(Debug, Clone)]
pub struct ColumnInferrer {
    /// Lowercase substrings that make a field numeric
    numeric_hints: Vec<String>,
    /// Exact field names that are boolean
    boolean_fields: HashSet<String>,
}

impl Default for ColumnInferrer {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnInferrer {
    /// Create an inferrer with the default hint sets
    pub fn new() -> Self {
        Self {
            numeric_hints: DEFAULT_NUMERIC_HINTS.clone(),
            boolean_fields: DEFAULT_BOOLEAN_FIELDS.clone(),
        }
    }

    /// Replace the numeric name hints
    #[must_use]
    pub fn with_numeric_hints<I, S>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.numeric_hints = hints
            .into_iter()
            .map(|h| h.into().to_lowercase())
            .collect();
        self
    }

    /// Replace the boolean field names
    #[must_use]
    pub fn with_boolean_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.boolean_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Numeric hints in use
    pub fn numeric_hints(&self) -> &[String] {
        &self.numeric_hints
    }

    /// Whether `field` is one of the known boolean names
    pub fn is_boolean_field(&self, field: &str) -> bool {
        self.boolean_fields.contains(field)
    }

    /// Infer the display type of one field from its name and a sample value.
    ///
    /// Checked in order: a numeric sample, an exact boolean field name, a
    /// numeric name hint, an object or array sample, then text. The boolean
    /// name is tested before the hints so that `timedout` stays Boolean even
    /// though it contains the `time` hint.
    pub fn infer_type(&self, field: &str, sample: &Value) -> ColumnType {
        if sample.is_number() {
            return ColumnType::Number;
        }
        if self.is_boolean_field(field) {
            return ColumnType::Boolean;
        }
        let lower = field.to_lowercase();
        if self.numeric_hints.iter().any(|h| lower.contains(h.as_str())) {
            return ColumnType::Number;
        }
        if sample.is_object() || sample.is_array() {
            return ColumnType::Object;
        }
        ColumnType::Text
    }

    /// Build one column per key of `first_row`.
    ///
    /// Fields listed in `default_columns` come first, in that order, when the
    /// row has them. The remaining keys follow in row order. Keys that only
    /// appear in later rows never become columns.
    pub fn infer(&self, first_row: &Row, default_columns: &[String]) -> Vec<Column> {
        let mut ordered: Vec<&str> = Vec::with_capacity(first_row.len());

        for field in default_columns {
            if first_row.contains_key(field) && !ordered.contains(&field.as_str()) {
                ordered.push(field);
            }
        }
        for field in first_row.keys() {
            if !ordered.contains(&field.as_str()) {
                ordered.push(field);
            }
        }

        let columns: Vec<Column> = ordered
            .into_iter()
            .map(|field| {
                let sample = first_row.get(field).unwrap_or(&Value::Null);
                Column::new(field, self.infer_type(field, sample))
            })
            .collect();

        debug!(count = columns.len(), "Inferred columns");
        columns
    }
}

/// Infer columns with the default hint sets
pub fn infer_columns(first_row: &Row, default_columns: &[String]) -> Vec<Column> {
    ColumnInferrer::new().infer(first_row, default_columns)
}

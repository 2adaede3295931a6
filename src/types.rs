//! Common types used throughout tourney-view
//!
//! This module contains the row representation shared by inference,
//! sorting and export, plus the string coercion rules they all agree on.

use serde_json::Value;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type. Key order follows the response body.
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// One record of a loaded dataset, keyed by field name
pub type Row = JsonObject;

// ============================================================================
// Cell
// ============================================================================

/// Borrowed, tagged view over a single field of a [`Row`]
///
/// An absent key and an explicit JSON `null` are both [`Cell::Null`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    /// JSON number
    Number(f64),
    /// JSON boolean
    Bool(bool),
    /// JSON string
    Text(&'a str),
    /// Null or missing
    Null,
    /// Object or array
    Composite(&'a Value),
}

impl<'a> Cell<'a> {
    /// Look up `field` in `row`
    pub fn of(row: &'a Row, field: &str) -> Self {
        row.get(field).map_or(Cell::Null, Cell::from)
    }

    /// Whether this cell is null or missing
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Default string coercion.
    ///
    /// Numbers print without a trailing `.0` when integral, booleans as
    /// `true`/`false`, composites as compact JSON and null as empty.
    pub fn coerce_string(&self) -> String {
        match self {
            Cell::Number(n) => number_to_string(*n),
            Cell::Bool(b) => b.to_string(),
            Cell::Text(s) => (*s).to_string(),
            Cell::Null => String::new(),
            Cell::Composite(v) => v.to_string(),
        }
    }
}

impl<'a> From<&'a Value> for Cell<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => Cell::Null,
            Value::Bool(b) => Cell::Bool(*b),
            Value::Number(n) => n.as_f64().map_or(Cell::Null, Cell::Number),
            Value::String(s) => Cell::Text(s),
            Value::Array(_) | Value::Object(_) => Cell::Composite(value),
        }
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Print a number the way a browser's `String(n)` would for the values a
/// JSON body can carry: integral values have no fractional part.
pub fn number_to_string(n: f64) -> String {
    if n == 0.0 {
        // -0 prints as 0
        return "0".to_string();
    }
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{n:.0}")
    } else {
        n.to_string()
    }
}

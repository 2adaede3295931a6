//! Column descriptor types

use crate::types::{number_to_string, Cell, Row};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display type inferred for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Number,
    Boolean,
    Object,
    Text,
}

impl ColumnType {
    /// Horizontal alignment used when rendering this type
    pub fn alignment(self) -> Alignment {
        match self {
            ColumnType::Number => Alignment::Right,
            ColumnType::Boolean => Alignment::Center,
            ColumnType::Object | ColumnType::Text => Alignment::Left,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Number => "number",
            ColumnType::Boolean => "boolean",
            ColumnType::Object => "object",
            ColumnType::Text => "text",
        };
        f.pad(name)
    }
}

/// Horizontal cell alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Display and formatting descriptor for one field of a dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Field name in the row
    pub field: String,
    /// Header label
    pub display_name: String,
    /// Inferred display type
    pub column_type: ColumnType,
    /// Whether clicking the header sorts by this column
    pub sortable: bool,
    /// Cell alignment
    pub alignment: Alignment,
}

impl Column {
    /// Create a sortable column of the given type
    pub fn new(field: impl Into<String>, column_type: ColumnType) -> Self {
        let field = field.into();
        Self {
            display_name: display_name_for(&field),
            field,
            column_type,
            sortable: true,
            alignment: column_type.alignment(),
        }
    }

    /// Render this column's cell of `row` as display text
    pub fn format(&self, row: &Row) -> String {
        format_cell(self.column_type, Cell::of(row, &self.field))
    }
}

/// Render a cell according to a column type.
///
/// Values whose runtime type does not match the column fall back to their
/// plain string form.
pub fn format_cell(column_type: ColumnType, cell: Cell<'_>) -> String {
    match (column_type, cell) {
        (_, Cell::Null) => String::new(),
        (ColumnType::Number, Cell::Number(n)) => format_number(n),
        (ColumnType::Boolean, Cell::Bool(b)) => (if b { "Yes" } else { "No" }).to_string(),
        (_, other) => other.coerce_string(),
    }
}

/// Integers are shown bare, everything else to four decimals
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        number_to_string(n)
    } else {
        format!("{n:.4}")
    }
}

/// Turn `n_steps` into `N Steps`
pub fn display_name_for(field: &str) -> String {
    field
        .split(['_', '-'])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

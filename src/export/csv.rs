//! CSV serialization of a loaded dataset

use crate::column::Column;
use crate::dataset::DatasetKind;
use crate::error::{Error, Result, ResultExt};
use crate::types::{Cell, Row};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Escape one cell for CSV output.
///
/// Composite values are always quoted. Text is quoted only when it holds a
/// delimiter, quote or line break. Null becomes an empty field.
pub fn escape_cell(cell: Cell<'_>) -> String {
    match cell {
        Cell::Null => String::new(),
        Cell::Composite(value) => quote(&value.to_string()),
        Cell::Text(s) if needs_quoting(s) => quote(s),
        other => other.coerce_string(),
    }
}

fn needs_quoting(s: &str) -> bool {
    s.contains([',', '"', '\n', '\r'])
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Serialize `rows` in load order under a header of column field names
pub fn to_csv(columns: &[Column], rows: &[Row]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);

    lines.push(
        columns
            .iter()
            .map(|c| escape_cell(Cell::Text(&c.field)))
            .collect::<Vec<_>>()
            .join(","),
    );

    for row in rows {
        lines.push(
            columns
                .iter()
                .map(|c| escape_cell(Cell::of(row, &c.field)))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    lines.join("\n")
}

/// Download file name for a dataset, `{identifier}_{dataset_type}.csv`
pub fn export_file_name(identifier: &str, kind: DatasetKind) -> String {
    format!("{identifier}_{}.csv", kind.as_str())
}

/// Result of writing an export file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Path of the written file
    pub path: PathBuf,
    /// Number of data rows (header excluded)
    pub rows_written: usize,
}

/// Write the CSV export for `identifier` into `dir`
pub fn write_csv(
    dir: impl AsRef<Path>,
    identifier: &str,
    kind: DatasetKind,
    columns: &[Column],
    rows: &[Row],
) -> Result<ExportSummary> {
    if columns.is_empty() {
        return Err(Error::export("No columns to export"));
    }

    let dir = dir.as_ref();
    fs::create_dir_all(dir).with_context(|| format!("Failed to create '{}'", dir.display()))?;

    let path = dir.join(export_file_name(identifier, kind));
    fs::write(&path, to_csv(columns, rows))
        .with_context(|| format!("Failed to write '{}'", path.display()))?;

    info!(path = %path.display(), rows = rows.len(), "Exported CSV");
    Ok(ExportSummary {
        path,
        rows_written: rows.len(),
    })
}

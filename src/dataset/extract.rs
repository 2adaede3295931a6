//! Row extraction from response bodies

use super::types::DatasetKind;
use crate::types::{JsonValue, Row};
use tracing::{debug, warn};

/// Pull the row array for `kind` out of a response body.
///
/// A missing key, or a key that is not an array, yields no rows. Array
/// entries that are not objects are skipped.
pub fn extract_rows(body: &JsonValue, kind: DatasetKind) -> Vec<Row> {
    let key = kind.response_key();
    let Some(items) = body.get(key).and_then(JsonValue::as_array) else {
        debug!(key, "Response has no row array");
        return Vec::new();
    };

    let rows: Vec<Row> = items
        .iter()
        .filter_map(|item| item.as_object().cloned())
        .collect();

    let skipped = items.len() - rows.len();
    if skipped > 0 {
        warn!(key, skipped, "Skipped non-object entries in response");
    }
    rows
}

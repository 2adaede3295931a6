//! Row ordering

use super::types::SortDirection;
use crate::types::{Cell, Row};
use std::cmp::Ordering;

/// Compare two cells for a sort in `direction`.
///
/// Null sorts after every defined value in both directions; only the
/// comparison between two defined values is reversed for descending.
/// Two numbers compare numerically, any other pair by string coercion.
pub fn compare_cells(a: Cell<'_>, b: Cell<'_>, direction: SortDirection) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    let ordering = match (a, b) {
        (Cell::Number(x), Cell::Number(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.coerce_string().cmp(&b.coerce_string()),
    };

    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Indices of `rows` ordered by `field`. Stable for equal keys.
pub fn sorted_indices(rows: &[Row], field: &str, direction: SortDirection) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..rows.len()).collect();
    indices.sort_by(|&i, &j| {
        compare_cells(
            Cell::of(&rows[i], field),
            Cell::of(&rows[j], field),
            direction,
        )
    });
    indices
}

//! Dataset module
//!
//! Names the tournament datasets, resolves their endpoints and extracts
//! row arrays from response bodies.
//!
//! | Kind         | Type tag     | Response key |
//! |--------------|--------------|--------------|
//! | `Details`    | `details`    | `details`    |
//! | `AllScores`  | `all_scores` | `scores`     |

mod extract;
mod source;
mod types;

pub use extract::extract_rows;
pub use source::{DataSource, HttpDataSource};
pub use types::{DatasetKind, Endpoints, IDENTIFIER_PLACEHOLDER};

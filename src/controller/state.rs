//! Load state machine types

use crate::dataset::DatasetKind;
use serde::Serialize;

/// Message shown for every kind of load failure
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load data";

/// Where a viewer is in its load cycle
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// The latest request succeeded; may hold zero rows
    Loaded,
    /// The latest request failed
    Failed {
        /// User-facing message
        message: String,
    },
}

impl LoadState {
    /// Whether a request is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Whether the latest request succeeded
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded)
    }

    /// Error message of a failed load
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Ticket for one issued load.
///
/// Only the ticket with the latest generation may complete a load; results
/// carried by older tickets are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    /// Monotonic request number
    pub generation: u64,
    /// Dataset identifier to fetch
    pub identifier: String,
    /// Dataset kind to fetch
    pub kind: DatasetKind,
}

//! Data viewer: inputs, load lifecycle and the table it feeds

use super::state::{LoadRequest, LoadState, LOAD_FAILED_MESSAGE};
use crate::column::ColumnInferrer;
use crate::dataset::{extract_rows, DataSource, DatasetKind};
use crate::error::{Error, Result};
use crate::export::{self, ExportSummary};
use crate::table::{PageSize, TableView};
use crate::types::JsonValue;
use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::{debug, error, info, warn};

/// One tabular dataset viewer instance
#[derive(Debug, Clone)]
pub struct DataViewer {
    title: String,
    identifier: Option<String>,
    kind: DatasetKind,
    default_columns: Vec<String>,
    inferrer: ColumnInferrer,
    visible: bool,
    state: LoadState,
    generation: u64,
    table: TableView,
    loaded_at: Option<DateTime<Utc>>,
    /// Request whose response filled the table
    loaded_from: Option<LoadRequest>,
}

impl DataViewer {
    /// Create a hidden, idle viewer for `kind`
    pub fn new(kind: DatasetKind) -> Self {
        Self {
            title: String::new(),
            identifier: None,
            kind,
            default_columns: Vec::new(),
            inferrer: ColumnInferrer::new(),
            visible: false,
            state: LoadState::Idle,
            generation: 0,
            table: TableView::new(PageSize::default()),
            loaded_at: None,
            loaded_from: None,
        }
    }

    /// Set the title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial identifier without triggering a load
    #[must_use]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Set the preferred leading columns
    #[must_use]
    pub fn with_default_columns(mut self, columns: Vec<String>) -> Self {
        self.default_columns = columns;
        self
    }

    /// Set the column inferrer
    #[must_use]
    pub fn with_inferrer(mut self, inferrer: ColumnInferrer) -> Self {
        self.inferrer = inferrer;
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.table.set_page_size(size);
        self
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current identifier
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Dataset kind
    pub fn kind(&self) -> DatasetKind {
        self.kind
    }

    /// Whether the viewer is shown
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Load state
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// User-facing error of a failed load
    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    /// Whether the latest load succeeded with zero rows
    pub fn has_no_data(&self) -> bool {
        self.state.is_loaded() && self.table.is_empty()
    }

    /// Generation of the most recently issued request
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Time the current rows were loaded
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// Identifier and kind the current rows were loaded for. May differ
    /// from [`identifier`](Self::identifier) after a change while hidden.
    pub fn loaded_from(&self) -> Option<&LoadRequest> {
        self.loaded_from.as_ref()
    }

    /// Table view over the loaded rows
    pub fn table(&self) -> &TableView {
        &self.table
    }

    /// Mutable table view for sort and page changes
    pub fn table_mut(&mut self) -> &mut TableView {
        &mut self.table
    }

    // ------------------------------------------------------------------------
    // Triggers
    // ------------------------------------------------------------------------

    /// Show or hide the viewer. Becoming visible with an identifier set
    /// starts a load; hiding cancels nothing.
    pub fn set_visible(&mut self, visible: bool) -> Option<LoadRequest> {
        let became_visible = visible && !self.visible;
        self.visible = visible;
        if became_visible {
            self.begin_load()
        } else {
            None
        }
    }

    /// Change the identifier. A different value while visible starts a load.
    pub fn set_identifier(&mut self, identifier: impl Into<String>) -> Option<LoadRequest> {
        let identifier = identifier.into();
        if self.identifier.as_deref() == Some(identifier.as_str()) {
            return None;
        }
        self.identifier = Some(identifier);
        if self.visible {
            self.begin_load()
        } else {
            None
        }
    }

    /// Forget the identifier. Loaded rows stay until the next load.
    pub fn clear_identifier(&mut self) {
        self.identifier = None;
    }

    /// Change the dataset kind. A different kind while visible starts a load.
    pub fn set_dataset_kind(&mut self, kind: DatasetKind) -> Option<LoadRequest> {
        if self.kind == kind {
            return None;
        }
        self.kind = kind;
        if self.visible {
            self.begin_load()
        } else {
            None
        }
    }

    /// Explicit reload of the current identifier
    pub fn reload(&mut self) -> Option<LoadRequest> {
        self.begin_load()
    }

    /// Enter Loading: drop rows, columns and error, reset sort and page,
    /// and issue a new generation.
    fn begin_load(&mut self) -> Option<LoadRequest> {
        let identifier = self.identifier.clone()?;

        self.generation += 1;
        self.table.clear();
        self.loaded_at = None;
        self.loaded_from = None;
        self.state = LoadState::Loading;

        debug!(
            generation = self.generation,
            identifier = %identifier,
            kind = %self.kind,
            "Starting load"
        );

        Some(LoadRequest {
            generation: self.generation,
            identifier,
            kind: self.kind,
        })
    }

    // ------------------------------------------------------------------------
    // Completion
    // ------------------------------------------------------------------------

    /// Apply the result of `request`.
    ///
    /// Returns `false` and leaves the viewer untouched when a newer request
    /// has been issued since.
    pub fn complete(&mut self, request: &LoadRequest, result: Result<JsonValue>) -> bool {
        if request.generation != self.generation {
            warn!(
                stale = request.generation,
                latest = self.generation,
                identifier = %request.identifier,
                "Discarding stale response"
            );
            return false;
        }

        match result {
            Ok(body) => {
                let rows = extract_rows(&body, request.kind);
                let columns = rows
                    .first()
                    .map(|first| self.inferrer.infer(first, &self.default_columns))
                    .unwrap_or_default();

                info!(
                    identifier = %request.identifier,
                    kind = %request.kind,
                    rows = rows.len(),
                    columns = columns.len(),
                    "Loaded dataset"
                );

                self.table.set_data(rows, columns);
                self.loaded_at = Some(Utc::now());
                self.loaded_from = Some(request.clone());
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                error!(
                    identifier = %request.identifier,
                    kind = %request.kind,
                    error = %e,
                    "Failed to load dataset"
                );
                self.table.clear();
                self.state = LoadState::Failed {
                    message: LOAD_FAILED_MESSAGE.to_string(),
                };
            }
        }
        true
    }

    /// Fetch `request` from `source` and apply the result
    pub async fn fetch<S>(&mut self, source: &S, request: LoadRequest) -> bool
    where
        S: DataSource + ?Sized,
    {
        let result = source.fetch(&request.identifier, request.kind).await;
        self.complete(&request, result)
    }

    /// Reload the current identifier from `source` and wait for it
    pub async fn load<S>(&mut self, source: &S) -> Result<()>
    where
        S: DataSource + ?Sized,
    {
        let request = self.reload().ok_or(Error::MissingIdentifier)?;
        self.fetch(source, request).await;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------------

    /// Write every loaded row, in load order, as `{identifier}_{kind}.csv`
    /// under `dir`. The name follows the request that loaded the rows, not
    /// the viewer's current inputs.
    pub fn export_csv(&self, dir: impl AsRef<Path>) -> Result<ExportSummary> {
        let source = self
            .loaded_from
            .as_ref()
            .ok_or_else(|| Error::export("No loaded dataset to export"))?;
        export::write_csv(
            dir,
            &source.identifier,
            source.kind,
            self.table.columns(),
            self.table.rows(),
        )
    }
}

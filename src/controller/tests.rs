//! Load controller tests

use super::*;
use crate::column::ColumnType;
use crate::dataset::{DataSource, DatasetKind};
use crate::error::{Error, Result};
use crate::table::{PageSize, SortDirection};
use crate::types::JsonValue;
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Serves a fixed body and records what was asked for
struct StaticSource {
    body: JsonValue,
    calls: AtomicUsize,
    requested: Mutex<Vec<(String, DatasetKind)>>,
}

impl StaticSource {
    fn new(body: JsonValue) -> Self {
        Self {
            body,
            calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataSource for StaticSource {
    async fn fetch(&self, identifier: &str, kind: DatasetKind) -> Result<JsonValue> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested
            .lock()
            .unwrap()
            .push((identifier.to_string(), kind));
        Ok(self.body.clone())
    }
}

struct FailingSource;

#[async_trait]
impl DataSource for FailingSource {
    async fn fetch(&self, _identifier: &str, _kind: DatasetKind) -> Result<JsonValue> {
        Err(Error::http_status(500, "boom"))
    }
}

fn details_body(n: usize) -> JsonValue {
    let rows: Vec<JsonValue> = (0..n)
        .map(|i| json!({"negotiator": format!("n{i}"), "n_steps": i, "broken": i % 2 == 0}))
        .collect();
    json!({ "details": rows })
}

fn loaded_viewer(n: usize) -> DataViewer {
    let mut viewer = DataViewer::new(DatasetKind::Details)
        .with_identifier("t1")
        .with_page_size(PageSize::Size25);
    let request = viewer.set_visible(true).unwrap();
    assert!(viewer.complete(&request, Ok(details_body(n))));
    viewer
}

// ============================================================================
// Triggers
// ============================================================================

#[test]
fn test_initial_state() {
    let viewer = DataViewer::new(DatasetKind::AllScores).with_title("Scores");
    assert_eq!(viewer.state(), &LoadState::Idle);
    assert_eq!(viewer.title(), "Scores");
    assert_eq!(viewer.kind(), DatasetKind::AllScores);
    assert!(!viewer.is_visible());
    assert!(viewer.identifier().is_none());
    assert!(viewer.error().is_none());
}

#[test]
fn test_visible_without_identifier_does_not_load() {
    let mut viewer = DataViewer::new(DatasetKind::Details);
    assert!(viewer.set_visible(true).is_none());
    assert_eq!(viewer.state(), &LoadState::Idle);
}

#[test]
fn test_becoming_visible_starts_load() {
    let mut viewer = DataViewer::new(DatasetKind::Details).with_identifier("t1");
    let request = viewer.set_visible(true).unwrap();

    assert_eq!(request.identifier, "t1");
    assert_eq!(request.kind, DatasetKind::Details);
    assert_eq!(request.generation, 1);
    assert!(viewer.state().is_loading());

    // Already visible: no second load
    assert!(viewer.set_visible(true).is_none());
}

#[test]
fn test_identifier_change_loads_only_when_visible() {
    let mut viewer = DataViewer::new(DatasetKind::Details);
    assert!(viewer.set_identifier("t1").is_none());
    assert_eq!(viewer.identifier(), Some("t1"));

    viewer.set_visible(true).unwrap();
    let request = viewer.set_identifier("t2").unwrap();
    assert_eq!(request.identifier, "t2");
    assert_eq!(request.generation, 2);

    // Same identifier again is not a change
    assert!(viewer.set_identifier("t2").is_none());
}

#[test]
fn test_dataset_kind_change_loads_when_visible() {
    let mut viewer = DataViewer::new(DatasetKind::Details).with_identifier("t1");
    viewer.set_visible(true).unwrap();

    let request = viewer.set_dataset_kind(DatasetKind::AllScores).unwrap();
    assert_eq!(request.kind, DatasetKind::AllScores);
    assert!(viewer.set_dataset_kind(DatasetKind::AllScores).is_none());
}

#[test]
fn test_visibility_toggle_refetches_once_and_resets_navigation() {
    let mut viewer = loaded_viewer(60);
    viewer.table_mut().sort_by("n_steps");
    viewer.table_mut().next_page();
    assert_eq!(viewer.table().page().current_page, 2);

    assert!(viewer.set_visible(false).is_none());
    let request = viewer.set_visible(true).unwrap();
    assert_eq!(request.generation, 2);
    assert_eq!(request.identifier, "t1");

    // Loading clears everything before the response arrives
    assert!(viewer.table().is_empty());
    assert!(viewer.table().columns().is_empty());
    assert_eq!(viewer.table().page().current_page, 1);
    assert!(!viewer.table().sort().is_active());

    assert!(viewer.complete(&request, Ok(details_body(60))));
    assert_eq!(viewer.table().page().current_page, 1);
    assert!(viewer.table().sort().field.is_none());
    assert_eq!(viewer.table().page().page_size, PageSize::Size25);
}

// ============================================================================
// Completion
// ============================================================================

#[test]
fn test_successful_load_infers_columns() {
    let mut viewer = DataViewer::new(DatasetKind::Details)
        .with_identifier("t1")
        .with_default_columns(vec!["broken".to_string()]);
    let request = viewer.set_visible(true).unwrap();
    viewer.complete(&request, Ok(details_body(3)));

    assert!(viewer.state().is_loaded());
    assert!(viewer.loaded_at().is_some());
    assert_eq!(viewer.table().total_rows(), 3);

    let columns: Vec<_> = viewer
        .table()
        .columns()
        .iter()
        .map(|c| (c.field.as_str(), c.column_type))
        .collect();
    assert_eq!(
        columns,
        vec![
            ("broken", ColumnType::Boolean),
            ("negotiator", ColumnType::Text),
            ("n_steps", ColumnType::Number),
        ]
    );
}

#[test]
fn test_empty_dataset_is_not_an_error() {
    let mut viewer = DataViewer::new(DatasetKind::Details).with_identifier("t1");
    let request = viewer.set_visible(true).unwrap();
    viewer.complete(&request, Ok(json!({"details": []})));

    assert!(viewer.state().is_loaded());
    assert!(viewer.has_no_data());
    assert!(viewer.error().is_none());
    assert!(viewer.table().columns().is_empty());
}

#[test]
fn test_missing_key_yields_no_data() {
    let mut viewer = DataViewer::new(DatasetKind::AllScores).with_identifier("t1");
    let request = viewer.set_visible(true).unwrap();
    viewer.complete(&request, Ok(json!({"details": [{"a": 1}]})));

    assert!(viewer.has_no_data());
}

#[test]
fn test_failure_sets_generic_message_and_discards_rows() {
    let mut viewer = loaded_viewer(5);
    let request = viewer.reload().unwrap();
    viewer.complete(&request, Err(Error::http_status(404, "no such tournament")));

    assert_eq!(viewer.error(), Some(LOAD_FAILED_MESSAGE));
    assert!(viewer.table().is_empty());
    assert!(!viewer.has_no_data());
    assert!(viewer.loaded_at().is_none());
}

#[test]
fn test_stale_response_is_discarded() {
    let mut viewer = DataViewer::new(DatasetKind::Details).with_identifier("old");
    let first = viewer.set_visible(true).unwrap();
    let second = viewer.set_identifier("new").unwrap();

    // Newer response arrives first
    assert!(viewer.complete(&second, Ok(details_body(2))));
    // Older response arrives late and must not win
    assert!(!viewer.complete(&first, Ok(details_body(9))));

    assert_eq!(viewer.table().total_rows(), 2);
    assert_eq!(viewer.identifier(), Some("new"));
}

#[test]
fn test_stale_failure_does_not_override_loading() {
    let mut viewer = DataViewer::new(DatasetKind::Details).with_identifier("a");
    let first = viewer.set_visible(true).unwrap();
    let _second = viewer.set_identifier("b").unwrap();

    assert!(!viewer.complete(&first, Err(Error::Timeout { timeout_ms: 10 })));
    assert!(viewer.state().is_loading());
    assert!(viewer.error().is_none());
}

#[test]
fn test_reload_requires_identifier() {
    let mut viewer = DataViewer::new(DatasetKind::Details);
    assert!(viewer.reload().is_none());

    let mut viewer = viewer.with_identifier("t1");
    assert!(viewer.reload().is_some());
    viewer.clear_identifier();
    assert!(viewer.reload().is_none());
}

#[test]
fn test_sorting_after_load() {
    let mut viewer = loaded_viewer(4);
    viewer.table_mut().sort_by("n_steps");
    viewer.table_mut().sort_by("n_steps");
    assert_eq!(viewer.table().sort().direction, SortDirection::Desc);

    let first = viewer.table().page_rows()[0];
    assert_eq!(first["n_steps"], json!(3));
}

// ============================================================================
// Sources
// ============================================================================

#[tokio::test]
async fn test_load_from_source() {
    let source = StaticSource::new(details_body(3));
    let mut viewer = DataViewer::new(DatasetKind::Details).with_identifier("t9");

    viewer.load(&source).await.unwrap();

    assert_eq!(source.calls(), 1);
    assert_eq!(
        source.requested.lock().unwrap()[0],
        ("t9".to_string(), DatasetKind::Details)
    );
    assert_eq!(viewer.table().total_rows(), 3);
}

#[tokio::test]
async fn test_load_without_identifier_fails() {
    let source = StaticSource::new(details_body(1));
    let mut viewer = DataViewer::new(DatasetKind::Details);

    let err = viewer.load(&source).await.unwrap_err();
    assert!(matches!(err, Error::MissingIdentifier));
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn test_fetch_failure_is_not_retried() {
    let mut viewer = DataViewer::new(DatasetKind::Details).with_identifier("t1");
    let request = viewer.set_visible(true).unwrap();

    assert!(viewer.fetch(&FailingSource, request).await);
    assert_eq!(viewer.error(), Some(LOAD_FAILED_MESSAGE));
}

#[tokio::test]
async fn test_dyn_source() {
    let source: Box<dyn DataSource> = Box::new(StaticSource::new(json!({"scores": [{"score": 1}]})));
    let mut viewer = DataViewer::new(DatasetKind::AllScores).with_identifier("t1");

    viewer.load(source.as_ref()).await.unwrap();
    assert_eq!(viewer.table().total_rows(), 1);
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn test_export_csv_from_viewer() {
    let dir = tempfile::tempdir().unwrap();
    let mut viewer = loaded_viewer(30);
    viewer.table_mut().sort_by("n_steps");
    viewer.table_mut().sort_by("n_steps");

    let summary = viewer.export_csv(dir.path()).unwrap();
    assert_eq!(summary.rows_written, 30);
    assert!(summary.path.ends_with("t1_details.csv"));

    let content = std::fs::read_to_string(&summary.path).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines[0], "negotiator,n_steps,broken");
    assert_eq!(lines[1], "n0,0,true");
}

#[test]
fn test_export_after_hidden_input_change_keeps_loaded_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut viewer = loaded_viewer(3);

    viewer.set_visible(false);
    assert!(viewer.set_identifier("t2").is_none());
    assert!(viewer.set_dataset_kind(DatasetKind::AllScores).is_none());

    let loaded = viewer.loaded_from().unwrap();
    assert_eq!(loaded.identifier, "t1");
    assert_eq!(loaded.kind, DatasetKind::Details);

    let summary = viewer.export_csv(dir.path()).unwrap();
    assert!(summary.path.ends_with("t1_details.csv"));
    assert_eq!(summary.rows_written, 3);
    assert!(!dir.path().join("t2_all_scores.csv").exists());
}

#[test]
fn test_export_requires_loaded_rows() {
    let dir = tempfile::tempdir().unwrap();
    let mut viewer = DataViewer::new(DatasetKind::Details).with_identifier("t1");
    assert!(matches!(
        viewer.export_csv(dir.path()).unwrap_err(),
        Error::Export { .. }
    ));

    let request = viewer.set_visible(true).unwrap();
    viewer.complete(&request, Err(Error::http_status(500, "boom")));
    assert!(viewer.loaded_from().is_none());
    assert!(viewer.export_csv(dir.path()).is_err());
}

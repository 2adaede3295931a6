//! Column inference tests

use super::*;
use crate::types::{Cell, Row};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

fn row(value: Value) -> Row {
    value.as_object().cloned().unwrap()
}

fn types_of(columns: &[Column]) -> Vec<(&str, ColumnType)> {
    columns
        .iter()
        .map(|c| (c.field.as_str(), c.column_type))
        .collect()
}

#[test]
fn test_infer_mixed_row_with_preferred_column() {
    let first = row(json!({
        "broken": false,
        "agreement": {"item": 1},
        "label": "x",
        "n_steps": 10
    }));

    let columns = infer_columns(&first, &["n_steps".to_string()]);

    assert_eq!(
        types_of(&columns),
        vec![
            ("n_steps", ColumnType::Number),
            ("broken", ColumnType::Boolean),
            ("agreement", ColumnType::Object),
            ("label", ColumnType::Text),
        ]
    );
}

#[test]
fn test_infer_keeps_row_order_without_defaults() {
    let first = row(json!({
        "n_steps": 10,
        "broken": false,
        "agreement": {"item": 1},
        "label": "x"
    }));

    let columns = infer_columns(&first, &[]);

    assert_eq!(
        types_of(&columns),
        vec![
            ("n_steps", ColumnType::Number),
            ("broken", ColumnType::Boolean),
            ("agreement", ColumnType::Object),
            ("label", ColumnType::Text),
        ]
    );
}

#[test]
fn test_defaults_absent_from_row_are_skipped() {
    let first = row(json!({"b": 1, "a": 2}));
    let defaults = vec!["missing".to_string(), "a".to_string(), "a".to_string()];

    let columns = infer_columns(&first, &defaults);
    let fields: Vec<_> = columns.iter().map(|c| c.field.as_str()).collect();

    assert_eq!(fields, vec!["a", "b"]);
}

#[test]
fn test_keys_only_in_later_rows_are_not_columns() {
    // Inference looks at the first row only; later extra keys stay hidden.
    let rows = [row(json!({"a": 1})), row(json!({"a": 2, "extra": "x"}))];

    let columns = infer_columns(&rows[0], &[]);

    assert_eq!(columns.len(), 1);
    assert!(columns.iter().all(|c| c.field != "extra"));
}

#[test_case("n_steps", json!("10") ; "step hint on string")]
#[test_case("relative_time", json!(null) ; "time hint on null")]
#[test_case("Utility", json!("high") ; "hint is case insensitive")]
#[test_case("agent_count", json!(null) ; "count hint")]
#[test_case("label", json!(3.5) ; "numeric sample")]
fn test_numeric_inference(field: &str, sample: Value) {
    assert_eq!(
        ColumnInferrer::new().infer_type(field, &sample),
        ColumnType::Number
    );
}

#[test_case("broken", json!(false) ; "bool sample")]
#[test_case("timedout", json!(null) ; "exact name beats time hint")]
#[test_case("has_error", json!("true") ; "string sample")]
fn test_boolean_inference(field: &str, sample: Value) {
    assert_eq!(
        ColumnInferrer::new().infer_type(field, &sample),
        ColumnType::Boolean
    );
}

#[test]
fn test_bool_sample_with_unknown_name_is_text() {
    let inferrer = ColumnInferrer::new();
    assert_eq!(inferrer.infer_type("is_cool", &json!(true)), ColumnType::Text);
}

#[test]
fn test_object_and_text_inference() {
    let inferrer = ColumnInferrer::new();
    assert_eq!(
        inferrer.infer_type("agreement", &json!([1, 2])),
        ColumnType::Object
    );
    assert_eq!(
        inferrer.infer_type("agreement", &json!({"price": 3})),
        ColumnType::Object
    );
    assert_eq!(inferrer.infer_type("agreement", &json!(null)), ColumnType::Text);
    assert_eq!(inferrer.infer_type("partner", &json!("bob")), ColumnType::Text);
}

#[test]
fn test_custom_hints() {
    let inferrer = ColumnInferrer::new()
        .with_numeric_hints(["Price"])
        .with_boolean_fields(["done"]);

    assert_eq!(inferrer.numeric_hints(), &["price".to_string()]);
    assert_eq!(inferrer.infer_type("unit_price", &json!("3")), ColumnType::Number);
    assert_eq!(inferrer.infer_type("n_steps", &json!("3")), ColumnType::Text);
    assert_eq!(inferrer.infer_type("done", &json!(null)), ColumnType::Boolean);
    assert_eq!(inferrer.infer_type("broken", &json!(null)), ColumnType::Text);
}

#[test]
fn test_column_alignment_and_display_name() {
    let number = Column::new("n_steps", ColumnType::Number);
    assert_eq!(number.display_name, "N Steps");
    assert_eq!(number.alignment, Alignment::Right);
    assert!(number.sortable);

    assert_eq!(
        Column::new("broken", ColumnType::Boolean).alignment,
        Alignment::Center
    );
    assert_eq!(
        Column::new("agreement", ColumnType::Object).alignment,
        Alignment::Left
    );
    assert_eq!(display_name_for("agent-type_name"), "Agent Type Name");
    assert_eq!(display_name_for("__x"), "X");
}

#[test]
fn test_format_number() {
    assert_eq!(format_number(10.0), "10");
    assert_eq!(format_number(-3.0), "-3");
    assert_eq!(format_number(0.12345), "0.1235");
    assert_eq!(format_number(2.5), "2.5000");
}

#[test]
fn test_format_cells() {
    let r = row(json!({
        "n_steps": 10,
        "utility": 0.5,
        "broken": true,
        "timedout": false,
        "agreement": {"item": 1},
        "label": "x",
        "time": "n/a",
        "none": null
    }));

    let fmt = |field: &str, ty: ColumnType| Column::new(field, ty).format(&r);

    assert_eq!(fmt("n_steps", ColumnType::Number), "10");
    assert_eq!(fmt("utility", ColumnType::Number), "0.5000");
    assert_eq!(fmt("broken", ColumnType::Boolean), "Yes");
    assert_eq!(fmt("timedout", ColumnType::Boolean), "No");
    assert_eq!(fmt("agreement", ColumnType::Object), r#"{"item":1}"#);
    assert_eq!(fmt("label", ColumnType::Text), "x");
    // Mismatched runtime type falls back to plain text
    assert_eq!(fmt("time", ColumnType::Number), "n/a");
    assert_eq!(fmt("none", ColumnType::Number), "");
    assert_eq!(fmt("absent", ColumnType::Text), "");
}

#[test]
fn test_format_cell_directly() {
    assert_eq!(format_cell(ColumnType::Text, Cell::Number(1.5)), "1.5");
    assert_eq!(format_cell(ColumnType::Boolean, Cell::Text("maybe")), "maybe");
}

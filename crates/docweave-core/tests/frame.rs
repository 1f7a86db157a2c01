use docweave_core::{CellValue, CoreError, DataFrame};
use serde_json::json;

#[test]
fn ragged_rows_are_rejected() {
    let err = DataFrame::new(
        vec!["a".to_string(), "b".to_string()],
        vec![vec![CellValue::Int(1)]],
    )
    .unwrap_err();
    assert!(matches!(err, CoreError::InvalidTable(_)));
}

#[test]
fn reset_index_adds_leading_column() {
    let frame = DataFrame::new(
        vec!["value".to_string()],
        vec![vec![CellValue::Int(10)], vec![CellValue::Int(20)]],
    )
    .unwrap();

    let reset = frame.reset_index();
    assert_eq!(reset.num_columns(), frame.num_columns() + 1);
    assert_eq!(reset.columns()[0], "index");
    assert_eq!(reset.rows()[1], vec![CellValue::Int(1), CellValue::Int(20)]);
}

#[test]
fn named_index_keeps_its_name() {
    let frame = DataFrame::new(vec!["value".to_string()], vec![vec![CellValue::Int(10)]])
        .unwrap()
        .with_index(Some("month".to_string()), vec![CellValue::from("Jan")])
        .unwrap();

    let reset = frame.reset_index();
    assert_eq!(reset.columns(), &["month".to_string(), "value".to_string()]);
    assert_eq!(reset.rows()[0][0], CellValue::from("Jan"));
}

#[test]
fn index_length_must_match_rows() {
    let frame = DataFrame::new(vec!["value".to_string()], vec![vec![CellValue::Int(10)]]).unwrap();
    assert!(frame.with_index(None, vec![]).is_err());
}

#[test]
fn json_tables_map_cell_kinds() {
    let frame = DataFrame::from_json(&json!({
        "columns": ["n", "x", "flag", "name", "gap"],
        "data": [[3, 2.5, true, "a", null]],
        "index": ["r1"],
        "index_name": "row"
    }))
    .unwrap();

    assert_eq!(
        frame.rows()[0],
        vec![
            CellValue::Int(3),
            CellValue::Float(2.5),
            CellValue::Bool(true),
            CellValue::Text("a".to_string()),
            CellValue::Missing,
        ]
    );
    assert_eq!(frame.index().name.as_deref(), Some("row"));
}

#[test]
fn nan_counts_as_missing() {
    assert!(CellValue::Float(f64::NAN).is_missing());
    assert!(CellValue::Missing.is_missing());
    assert!(!CellValue::Float(0.0).is_missing());
    assert!(CellValue::from(None::<i64>).is_missing());
}

use std::sync::Arc;

use docweave_core::{
    chart_section, table_section, text_section, CellValue, Content, ContentType, CoreError,
    DataFrame, Figure, Orientation, RasterFigure, SectionDescriptor, StyleOptions,
};
use serde_json::json;

fn sample_frame() -> DataFrame {
    DataFrame::new(
        vec!["region".to_string(), "sales".to_string()],
        vec![
            vec![CellValue::from("north"), CellValue::from(1200)],
            vec![CellValue::from("south"), CellValue::from(980)],
        ],
    )
    .unwrap()
}

#[test]
fn string_payload_infers_text() {
    let section = SectionDescriptor::from_value(json!("Quarterly summary."), None).unwrap();
    assert_eq!(section.content_type(), ContentType::Text);
}

#[test]
fn tabular_payload_infers_table() {
    let value = json!({
        "columns": ["region", "sales"],
        "data": [["north", 1200], ["south", 980.5]]
    });
    let section = SectionDescriptor::from_value(value, None).unwrap();
    assert_eq!(section.content_type(), ContentType::Table);

    let Content::Table(frame) = section.content() else {
        panic!("expected a table");
    };
    assert_eq!(frame.num_rows(), 2);
    assert_eq!(frame.rows()[1][1], CellValue::Float(980.5));
}

#[test]
fn figure_payload_infers_chart() {
    let figure: Arc<dyn Figure> = Arc::new(RasterFigure::new(vec![1, 2, 3], 1, 1));
    assert_eq!(SectionDescriptor::new(figure).content_type(), ContentType::Chart);
}

#[test]
fn typed_constructors_tag_their_payload() {
    assert_eq!(text_section("hi").content_type(), ContentType::Text);
    assert_eq!(table_section(sample_frame()).content_type(), ContentType::Table);
    assert_eq!(
        chart_section(RasterFigure::new(vec![0], 1, 1)).content_type(),
        ContentType::Chart
    );
}

#[test]
fn unrecognized_payloads_are_undetermined() {
    for value in [json!(42), json!(null), json!([1, 2, 3]), json!({"rows": []}), json!(true)] {
        let err = SectionDescriptor::from_value(value, None).unwrap_err();
        assert!(matches!(err, CoreError::UndeterminedContentType));
        assert!(err.to_string().contains("specify content_type explicitly"));
    }
}

#[test]
fn invalid_content_type_lists_valid_values() {
    for tag in ["image", "TEXT", "", "markdown"] {
        let err = SectionDescriptor::from_value(json!("hello"), Some(tag)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidContentType { .. }));

        let message = err.to_string();
        for valid in ContentType::ALL {
            assert!(message.contains(valid.as_str()), "{message}");
        }
    }
}

#[test]
fn plot_is_accepted_as_chart_alias() {
    assert_eq!("plot".parse::<ContentType>().unwrap(), ContentType::Chart);
}

#[test]
fn explicit_type_must_match_payload() {
    let err = SectionDescriptor::from_value(json!(12), Some("text")).unwrap_err();
    assert!(matches!(err, CoreError::PayloadMismatch { expected: "text", .. }));

    let err = SectionDescriptor::from_value(json!("a"), Some("chart")).unwrap_err();
    assert!(matches!(err, CoreError::PayloadMismatch { expected: "chart", .. }));
}

#[test]
fn defaults_and_builders() {
    let section = text_section("body");
    assert_eq!(section.header_text(), None);
    assert_eq!(section.description_text(), "");
    assert_eq!(section.options(), &StyleOptions::default());
    assert!(section.options().include_index);
    assert_eq!(section.options().width, 6.0);
    assert!(!section.breaks_page());
    assert_eq!(section.page_orientation(), Orientation::Portrait);

    let section = section
        .header("Intro")
        .description("Short overview")
        .page_break_before(true)
        .orientation(Orientation::Landscape)
        .style_options(StyleOptions::default().width(4.5));
    assert_eq!(section.header_text(), Some("Intro"));
    assert_eq!(section.description_text(), "Short overview");
    assert!(section.breaks_page());
    assert_eq!(section.page_orientation(), Orientation::Landscape);
    assert_eq!(section.options().width, 4.5);
}

#[test]
fn style_options_keep_unknown_keys() {
    let options: StyleOptions =
        serde_json::from_value(json!({"include_index": false, "caption": "Totals"})).unwrap();
    assert!(!options.include_index);
    assert_eq!(options.width, 6.0);
    assert_eq!(options.extra.get("caption"), Some(&json!("Totals")));
}

use docweave_core::{chart_section, table_section, text_section, CellValue, DataFrame, StyleOptions};
use docweave_export::display::{section_blocks, TABLE_CAPTION};
use docweave_export::{DisplayBlock, DisplaySurface, MarkdownPreview};
use docweave_plot::{BarChart, ChartStyle};

fn preview(blocks: &[DisplayBlock]) -> String {
    let mut surface = MarkdownPreview::new(Vec::new()).unwrap();
    for block in blocks {
        surface.show(block).unwrap();
    }
    String::from_utf8(surface.into_inner()).unwrap()
}

fn frame() -> DataFrame {
    DataFrame::new(
        vec!["region".to_string(), "sales".to_string()],
        vec![
            vec![CellValue::from("north|east"), CellValue::Int(1200)],
            vec![CellValue::from("south"), CellValue::Missing],
        ],
    )
    .unwrap()
}

#[test]
fn text_section_blocks() {
    let blocks = section_blocks(&text_section("Body text").header("Intro").description("Summary"));
    let out = preview(&blocks);

    let header = out.find("## Intro").unwrap();
    let description = out.find("*Summary*").unwrap();
    let body = out.find("Body text").unwrap();
    let rule = out.find("<br><hr><br>").unwrap();
    assert!(header < description && description < body && body < rule);
}

#[test]
fn header_and_description_are_optional() {
    let blocks = section_blocks(&text_section("plain"));
    assert_eq!(blocks.len(), 3);
    assert!(matches!(&blocks[0], DisplayBlock::Html(h) if h == "<br>"));
}

#[test]
fn tables_render_as_markdown() {
    let out = preview(&section_blocks(&table_section(frame())));

    assert!(out.contains(&format!("**{TABLE_CAPTION}**")));
    assert!(out.contains("| index | region | sales |"));
    assert!(out.contains("| --- | --- | --- |"));
    assert!(out.contains("| 0 | north\\|east | 1,200 |"));
    assert!(out.contains("| 1 | south | \u{2014} |"));
}

#[test]
fn table_preview_respects_include_index() {
    let section =
        table_section(frame()).style_options(StyleOptions::default().include_index(false));
    let out = preview(&section_blocks(&section));
    assert!(out.contains("| region | sales |"));
    assert!(!out.contains("index"));
}

#[test]
fn figures_render_as_placeholder() {
    let chart = BarChart::new(["a"], [1.0], ChartStyle::default()).with_title("Totals");
    let out = preview(&section_blocks(&chart_section(chart)));
    assert!(out.contains("[figure: Totals]"));

    let untitled = BarChart::new(["a"], [1.0], ChartStyle::default());
    let out = preview(&section_blocks(&chart_section(untitled)));
    assert!(out.contains("[figure: untitled]"));
}

use docweave_core::{
    Figure, FigureError, Rgb, RenderRequest, Theme, VisualizationSettings,
};
use docweave_plot::{BarChart, ChartStyle, LineChart, Series};

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

fn small_request() -> RenderRequest {
    RenderRequest::new((4.0, 2.5), 40)
}

fn revenue_chart() -> LineChart {
    LineChart::new(ChartStyle::default())
        .with_title("Revenue")
        .axis_labels("month", "usd")
        .add_series(Series::new("2024", vec![(1.0, 10.0), (2.0, 14.5), (3.0, 12.0)]))
        .add_series(Series::new("2025", vec![(1.0, 11.0), (2.0, 15.0), (3.0, 18.0)]))
}

#[test]
fn line_chart_renders_png_at_requested_size() {
    let image = revenue_chart().render_png(&small_request()).unwrap();

    assert_eq!(&image.png[..8], &PNG_MAGIC);
    assert_eq!((image.width_px, image.height_px), (160, 100));
}

#[test]
fn background_is_white() {
    let image = revenue_chart().render_png(&small_request()).unwrap();
    let decoded = image::load_from_memory(&image.png).unwrap().to_rgb8();
    assert_eq!(decoded.get_pixel(0, 0).0, [255, 255, 255]);
}

#[test]
fn border_draws_a_frame() {
    let request = RenderRequest {
        border: true,
        ..small_request()
    };
    let image = revenue_chart().render_png(&request).unwrap();
    let decoded = image::load_from_memory(&image.png).unwrap().to_rgb8();
    assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0]);
}

#[test]
fn empty_line_chart_is_an_error() {
    let err = LineChart::new(ChartStyle::default())
        .render_png(&small_request())
        .unwrap_err();
    assert!(matches!(err, FigureError::Empty));
}

#[test]
fn bar_chart_renders_with_negative_values() {
    let chart = BarChart::new(["north", "south", "east"], [120.0, -30.0, 75.5], ChartStyle::default())
        .with_title("Margin by region");
    let image = chart.render_png(&small_request()).unwrap();
    assert_eq!(&image.png[..8], &PNG_MAGIC);
    assert_eq!(Figure::title(&chart), Some("Margin by region"));
}

#[test]
fn bar_chart_pairs_categories_and_values() {
    let chart = BarChart::new(["a", "b", "c"], [1.0, 2.0], ChartStyle::default());
    assert_eq!(chart.categories, vec!["a", "b"]);
    assert!(BarChart::new(Vec::<String>::new(), [], ChartStyle::default())
        .render_png(&small_request())
        .is_err());
}

#[test]
fn style_follows_settings() {
    let theme = Theme::new().with_primary_color(Rgb(10, 20, 30));
    let viz = VisualizationSettings {
        show_grid: false,
        ..VisualizationSettings::default()
    };
    let style = ChartStyle::from_settings(&theme.clone().with_font_family("Inter"), &viz);
    assert_eq!(style.font_families[0], "Inter");
    assert_eq!(style.font_families[1..], theme.available_fonts()[..]);
    let family = style.resolved_family();
    assert!(family == "sans-serif" || style.font_families.iter().any(|f| f == family));
    assert!(!style.show_grid);
    assert_eq!(style.text_color, Rgb(10, 20, 30));
    assert_eq!(style.title_size, 14);

    let chart = LineChart::new(style)
        .size(3.0, 2.0)
        .add_series(Series::new("flat", vec![(0.0, 5.0), (1.0, 5.0)]));
    assert_eq!(chart.size_inches(), Some((3.0, 2.0)));
    assert!(chart.render_png(&small_request()).is_ok());
}

#[cfg(feature = "fonts")]
#[test]
fn labelled_charts_draw_text() {
    assert!(docweave_plot::style::DRAWS_TEXT);

    let plain = LineChart::new(ChartStyle::default())
        .add_series(Series::new("2024", vec![(1.0, 10.0), (2.0, 14.5), (3.0, 12.0)]));
    let labelled = plain.clone().with_title("Revenue").axis_labels("month", "usd");

    let request = RenderRequest::new((4.0, 2.5), 100);
    let plain = plain.render_png(&request).unwrap();
    let labelled = labelled.render_png(&request).unwrap();
    assert_ne!(plain.png, labelled.png);
}

#[test]
fn tight_render_crops_to_content() {
    let request = RenderRequest {
        tight: true,
        ..RenderRequest::new((6.0, 4.0), 40)
    };
    let chart = BarChart::new(["a", "b"], [3.0, 4.0], ChartStyle::default())
        .size(6.0, 4.0);
    let image = chart.render_png(&request).unwrap();

    assert!(image.width_px <= 240 && image.height_px <= 160);
    let decoded = image::load_from_memory(&image.png).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (image.width_px, image.height_px));
}

#[test]
fn tight_render_keeps_a_framed_canvas() {
    let request = RenderRequest {
        tight: true,
        border: true,
        ..small_request()
    };
    let image = revenue_chart().render_png(&request).unwrap();
    assert_eq!((image.width_px, image.height_px), (160, 100));
}

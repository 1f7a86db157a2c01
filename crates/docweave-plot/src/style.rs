use docweave_core::{Rgb, Theme, VisualizationSettings};
use plotters::style::{FontDesc, FontFamily, FontStyle, RGBColor};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Used when none of the preferred families can be loaded.
pub const GENERIC_FAMILY: &str = "sans-serif";

/// Whether this build can rasterize text. Without a font backend plotters
/// panics on the first glyph, so charts skip every text element instead.
pub const DRAWS_TEXT: bool = cfg!(feature = "fonts");

/// Series colors, cycled in order.
pub const SERIES_COLORS: [RGBColor; 6] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
];

/// Fonts, sizes and grid appearance for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Preferred font families, most preferred first.
    pub font_families: Vec<String>,
    /// Sizes in points; scaled by dpi at render time.
    pub title_size: u32,
    pub label_size: u32,
    pub tick_size: u32,
    pub show_grid: bool,
    pub grid_alpha: f64,
    pub show_values: bool,
    pub value_format: String,
    pub text_color: Rgb,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::from_settings(&Theme::default(), &VisualizationSettings::default())
    }
}

impl ChartStyle {
    pub fn from_settings(theme: &Theme, viz: &VisualizationSettings) -> Self {
        Self {
            font_families: font_families(theme),
            title_size: viz.plot_settings.title_size,
            label_size: viz.plot_settings.label_size,
            tick_size: viz.plot_settings.tick_size,
            show_grid: viz.show_grid,
            grid_alpha: viz.grid_alpha,
            show_values: viz.plot_settings.show_values,
            value_format: viz.plot_settings.value_format.clone(),
            text_color: theme.primary_color(),
        }
    }

    /// The first preferred family the font backend can load.
    pub fn resolved_family(&self) -> &str {
        self.font_families
            .iter()
            .map(String::as_str)
            .find(|name| font_loads(name))
            .unwrap_or(GENERIC_FAMILY)
    }

    pub(crate) fn format_value(&self, value: f64) -> String {
        docweave_core::PlotSettings {
            value_format: self.value_format.clone(),
            ..Default::default()
        }
        .format_value(value)
    }
}

/// The `font.sans-serif` list of the theme's plotting font settings.
fn font_families(theme: &Theme) -> Vec<String> {
    theme
        .plot_font_settings()
        .get("font.sans-serif")
        .and_then(Value::as_array)
        .map(|fonts| fonts.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_else(|| theme.available_fonts().to_vec())
}

fn font_loads(name: &str) -> bool {
    DRAWS_TEXT
        && FontDesc::new(FontFamily::from(name), 12.0, FontStyle::Normal)
            .box_size("0")
            .is_ok()
}

/// Points to pixels at the given resolution.
pub(crate) fn pt_to_px(points: u32, dpi: u32) -> f64 {
    points as f64 * dpi as f64 / 72.0
}

pub(crate) fn series_color(i: usize) -> RGBColor {
    SERIES_COLORS[i % SERIES_COLORS.len()]
}

pub(crate) fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

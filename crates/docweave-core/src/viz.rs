use serde::{Deserialize, Serialize};

/// Appearance of rendered charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationSettings {
    /// Default figure size in inches, `(width, height)`.
    pub figure_size: (f64, f64),

    /// Render resolution in dots per inch.
    pub dpi: u32,

    pub show_grid: bool,

    /// Grid line opacity, 0.0 to 1.0.
    pub grid_alpha: f64,

    pub plot_settings: PlotSettings,
}

impl Default for VisualizationSettings {
    fn default() -> Self {
        Self {
            figure_size: (10.0, 6.0),
            dpi: 300,
            show_grid: true,
            grid_alpha: 0.3,
            plot_settings: PlotSettings::default(),
        }
    }
}

/// Label sizes and value formatting for plots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotSettings {
    pub title_size: u32,
    pub label_size: u32,
    pub tick_size: u32,
    pub show_values: bool,
    /// Precision spec for value labels, e.g. `.1f` for one decimal.
    pub value_format: String,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            title_size: 14,
            label_size: 12,
            tick_size: 10,
            show_values: true,
            value_format: ".1f".to_string(),
        }
    }
}

impl PlotSettings {
    /// Format a value label using `value_format`.
    ///
    /// Only the fixed-precision form `.Nf` is understood; anything else
    /// falls back to the default float display.
    pub fn format_value(&self, value: f64) -> String {
        let precision = self
            .value_format
            .strip_prefix('.')
            .and_then(|s| s.strip_suffix('f'))
            .and_then(|digits| digits.parse::<usize>().ok());

        match precision {
            Some(p) => format!("{value:.p$}"),
            None => value.to_string(),
        }
    }
}

use std::path::{Path, PathBuf};

use docweave_core::{Theme, VisualizationSettings};
use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// Everything a [`crate::DocumentGenerator`] is built from.
///
/// Every field is optional in JSON:
///
/// ```json
/// {
///   "theme": { "font_family": "Georgia", "body_size": 10 },
///   "viz_settings": { "dpi": 150 },
///   "output_dir": "reports",
///   "default_subdirectory": "weekly",
///   "default_filename": "summary.docx",
///   "display_output": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub theme: Theme,
    pub viz_settings: VisualizationSettings,
    /// Relative paths resolve against the working directory; `None` means the
    /// working directory itself.
    pub output_dir: Option<PathBuf>,
    pub default_subdirectory: Option<String>,
    pub default_filename: Option<String>,
    /// Mirror sections to the display surface while generating.
    pub display_output: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            viz_settings: VisualizationSettings::default(),
            output_dir: None,
            default_subdirectory: None,
            default_filename: None,
            display_output: true,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn default_subdirectory(mut self, dir: impl Into<String>) -> Self {
        self.default_subdirectory = Some(dir.into());
        self
    }

    pub fn default_filename(mut self, name: impl Into<String>) -> Self {
        self.default_filename = Some(name.into());
        self
    }

    pub fn display_output(mut self, display: bool) -> Self {
        self.display_output = display;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn viz_settings(mut self, viz: VisualizationSettings) -> Self {
        self.viz_settings = viz;
        self
    }
}

pub fn load_config(path: &Path) -> Result<GeneratorConfig, ExportError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ExportError::Config(format!("failed to read config at {}: {e}", path.display()))
    })?;
    let config = GeneratorConfig::from_json(&contents)?;
    tracing::debug!(path = %path.display(), "generator config loaded");
    Ok(config)
}

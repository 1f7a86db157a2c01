use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Sentinel font family meaning "use the cross-platform fallback list".
pub const DEFAULT_FONT_FAMILY: &str = "DEFAULT";

/// Ordered sans-serif fonts tried when no family (or an unavailable one) is requested.
pub const FALLBACK_FONTS: [&str; 5] = ["Calibri", "Arial", "DejaVu Sans", "Helvetica", "sans-serif"];

/// An RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Uppercase hex without the leading `#`, as OOXML expects.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Visual style applied to generated text and headings.
///
/// Inputs are taken as-is; sizes and spacing are not range checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ThemeFields", into = "ThemeFields")]
pub struct Theme {
    font_family: String,
    heading1_size: usize,
    heading2_size: usize,
    body_size: usize,
    primary_color: Rgb,
    /// Points of space after each paragraph.
    paragraph_spacing: u32,
    line_spacing: f64,
    using_default_fonts: bool,
    available_fonts: Vec<String>,
}

/// The stored (non-derived) fields of a [`Theme`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct ThemeFields {
    font_family: String,
    heading1_size: usize,
    heading2_size: usize,
    body_size: usize,
    primary_color: Rgb,
    paragraph_spacing: u32,
    line_spacing: f64,
}

impl Default for ThemeFields {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            heading1_size: 14,
            heading2_size: 13,
            body_size: 11,
            primary_color: Rgb::BLACK,
            paragraph_spacing: 6,
            line_spacing: 1.15,
        }
    }
}

impl From<ThemeFields> for Theme {
    fn from(f: ThemeFields) -> Self {
        let using_default_fonts = f.font_family == DEFAULT_FONT_FAMILY;
        let mut available_fonts = Vec::with_capacity(FALLBACK_FONTS.len() + 1);
        if !using_default_fonts {
            available_fonts.push(f.font_family.clone());
        }
        available_fonts.extend(FALLBACK_FONTS.iter().map(|s| s.to_string()));

        Self {
            font_family: f.font_family,
            heading1_size: f.heading1_size,
            heading2_size: f.heading2_size,
            body_size: f.body_size,
            primary_color: f.primary_color,
            paragraph_spacing: f.paragraph_spacing,
            line_spacing: f.line_spacing,
            using_default_fonts,
            available_fonts,
        }
    }
}

impl From<Theme> for ThemeFields {
    fn from(t: Theme) -> Self {
        Self {
            font_family: t.font_family,
            heading1_size: t.heading1_size,
            heading2_size: t.heading2_size,
            body_size: t.body_size,
            primary_color: t.primary_color,
            paragraph_spacing: t.paragraph_spacing,
            line_spacing: t.line_spacing,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        ThemeFields::default().into()
    }
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    // Setters rebuild through `ThemeFields` to recompute the derived fields.
    fn rebuild(self, edit: impl FnOnce(&mut ThemeFields)) -> Self {
        let mut fields = ThemeFields::from(self);
        edit(&mut fields);
        fields.into()
    }

    pub fn with_font_family(self, family: impl Into<String>) -> Self {
        let family = family.into();
        self.rebuild(|f| f.font_family = family)
    }

    pub fn with_heading_sizes(self, heading1: usize, heading2: usize) -> Self {
        self.rebuild(|f| {
            f.heading1_size = heading1;
            f.heading2_size = heading2;
        })
    }

    pub fn with_body_size(self, size: usize) -> Self {
        self.rebuild(|f| f.body_size = size)
    }

    pub fn with_primary_color(self, color: Rgb) -> Self {
        self.rebuild(|f| f.primary_color = color)
    }

    pub fn with_spacing(self, paragraph_spacing: u32, line_spacing: f64) -> Self {
        self.rebuild(|f| {
            f.paragraph_spacing = paragraph_spacing;
            f.line_spacing = line_spacing;
        })
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn heading1_size(&self) -> usize {
        self.heading1_size
    }

    pub fn heading2_size(&self) -> usize {
        self.heading2_size
    }

    pub fn body_size(&self) -> usize {
        self.body_size
    }

    pub fn primary_color(&self) -> Rgb {
        self.primary_color
    }

    pub fn primary_color_hex(&self) -> String {
        self.primary_color.hex()
    }

    pub fn paragraph_spacing(&self) -> u32 {
        self.paragraph_spacing
    }

    pub fn line_spacing(&self) -> f64 {
        self.line_spacing
    }

    pub fn using_default_fonts(&self) -> bool {
        self.using_default_fonts
    }

    pub fn available_fonts(&self) -> &[String] {
        &self.available_fonts
    }

    /// The first font in [`Theme::available_fonts`].
    pub fn primary_font(&self) -> &str {
        self.available_fonts
            .first()
            .map(String::as_str)
            .unwrap_or(FALLBACK_FONTS[0])
    }

    /// Font configuration in the key vocabulary plotting libraries use.
    pub fn plot_font_settings(&self) -> BTreeMap<String, Value> {
        BTreeMap::from([
            ("font.family".to_string(), json!("sans-serif")),
            ("font.sans-serif".to_string(), json!(self.available_fonts)),
            ("font.size".to_string(), json!(self.body_size)),
            ("axes.titlesize".to_string(), json!(self.heading2_size)),
            ("axes.labelsize".to_string(), json!(self.body_size)),
        ])
    }
}

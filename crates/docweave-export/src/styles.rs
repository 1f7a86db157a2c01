use docweave_core::Theme;
use serde::{Deserialize, Serialize};

/// Twips per point.
const TWIPS_PER_POINT: u32 = 20;

/// Line height of single spacing, in 240ths of a line.
const SINGLE_LINE: f64 = 240.0;

/// Theme values resolved into the units OOXML expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Font for body text and table cells.
    pub body_font: String,

    /// Font for headings and the title block.
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Heading 1 font size in points.
    pub heading1_size: usize,

    /// Text color as a 6-digit hex string.
    pub color: String,

    /// Space after each paragraph, in twips.
    pub space_after: u32,

    /// Line height in 240ths of a line (240 = single spacing).
    pub line: u32,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

impl DocumentStyles {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            body_font: theme.primary_font().to_string(),
            heading_font: theme.primary_font().to_string(),
            body_size: theme.body_size(),
            heading1_size: theme.heading1_size(),
            color: theme.primary_color_hex(),
            space_after: theme.paragraph_spacing() * TWIPS_PER_POINT,
            line: (theme.line_spacing() * SINGLE_LINE).round() as u32,
        }
    }
}

//! The "render a figure to a raster buffer" capability.
//!
//! Chart construction and layout belong to whoever implements [`Figure`];
//! the generator only asks for PNG bytes at a given size and resolution.

use std::fmt;

use crate::error::FigureError;
use crate::theme::Rgb;

/// Parameters for a single rasterization.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
    pub background: Rgb,
    /// Draw a frame around the whole image.
    pub border: bool,
    /// Crop the result to the drawn content, keeping a 0.1 inch pad.
    pub tight: bool,
}

impl RenderRequest {
    /// White background, no border, full canvas.
    pub fn new(size_in: (f64, f64), dpi: u32) -> Self {
        Self {
            width_in: size_in.0,
            height_in: size_in.1,
            dpi,
            background: Rgb::WHITE,
            border: false,
            tight: false,
        }
    }

    /// Pixel dimensions, never smaller than 1x1.
    pub fn pixel_size(&self) -> (u32, u32) {
        let px = |inches: f64| ((inches * self.dpi as f64).round() as u32).max(1);
        (px(self.width_in), px(self.height_in))
    }
}

/// A PNG image plus its pixel dimensions.
#[derive(Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub png: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
}

impl fmt::Debug for RenderedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderedImage")
            .field("bytes", &self.png.len())
            .field("width_px", &self.width_px)
            .field("height_px", &self.height_px)
            .finish()
    }
}

impl RenderedImage {
    /// Height over width; 1.0 for degenerate images.
    pub fn aspect_ratio(&self) -> f64 {
        if self.width_px == 0 {
            1.0
        } else {
            self.height_px as f64 / self.width_px as f64
        }
    }
}

/// Something that can rasterize itself.
pub trait Figure: fmt::Debug + Send + Sync {
    fn render_png(&self, request: &RenderRequest) -> Result<RenderedImage, FigureError>;

    fn title(&self) -> Option<&str> {
        None
    }

    /// Preferred size in inches; `None` uses the visualization settings.
    fn size_inches(&self) -> Option<(f64, f64)> {
        None
    }
}

/// An image rendered elsewhere, passed through unchanged.
#[derive(Debug, Clone)]
pub struct RasterFigure {
    image: RenderedImage,
    title: Option<String>,
}

impl RasterFigure {
    pub fn new(png: Vec<u8>, width_px: u32, height_px: u32) -> Self {
        Self {
            image: RenderedImage {
                png,
                width_px,
                height_px,
            },
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl Figure for RasterFigure {
    fn render_png(&self, _request: &RenderRequest) -> Result<RenderedImage, FigureError> {
        if self.image.png.is_empty() {
            return Err(FigureError::Empty);
        }
        Ok(self.image.clone())
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

use std::fmt::Display;
use std::io::Cursor;

use docweave_core::{FigureError, RenderRequest, RenderedImage};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::style::rgb;

pub(crate) type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

pub(crate) fn draw_err(e: impl Display) -> FigureError {
    FigureError::Draw(e.to_string())
}

/// Pad kept around the content of a tight render.
const TIGHT_PAD_IN: f64 = 0.1;

/// Allocate an RGB buffer at the request's pixel size, let `draw` paint
/// into it, then encode the result as PNG. Tight requests are cropped to
/// the non-background pixels first.
pub(crate) fn render_with<F>(request: &RenderRequest, draw: F) -> Result<RenderedImage, FigureError>
where
    F: FnOnce(&Area<'_>) -> Result<(), FigureError>,
{
    let (width_px, height_px) = request.pixel_size();
    let mut buffer = vec![0u8; width_px as usize * height_px as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width_px, height_px)).into_drawing_area();
        root.fill(&rgb(request.background)).map_err(draw_err)?;

        draw(&root)?;

        if request.border {
            root.draw(&Rectangle::new(
                [(0, 0), (width_px as i32 - 1, height_px as i32 - 1)],
                BLACK.stroke_width(1),
            ))
            .map_err(draw_err)?;
        }
        root.present().map_err(draw_err)?;
    }

    let img = image::RgbImage::from_raw(width_px, height_px, buffer)
        .ok_or_else(|| FigureError::Encode("pixel buffer size mismatch".to_string()))?;
    let img = if request.tight {
        let pad = (TIGHT_PAD_IN * request.dpi as f64).round() as u32;
        crop_to_content(img, rgb_pixel(request), pad)
    } else {
        img
    };
    let (width_px, height_px) = img.dimensions();

    let png = encode_png(&img)?;
    tracing::debug!(width_px, height_px, bytes = png.len(), "chart rasterized");

    Ok(RenderedImage {
        png,
        width_px,
        height_px,
    })
}

fn rgb_pixel(request: &RenderRequest) -> image::Rgb<u8> {
    let bg = request.background;
    image::Rgb([bg.0, bg.1, bg.2])
}

/// Bounding box of every pixel that differs from `background`, grown by
/// `pad` and clamped to the image. A blank image is returned unchanged.
fn crop_to_content(img: image::RgbImage, background: image::Rgb<u8>, pad: u32) -> image::RgbImage {
    let (width, height) = img.dimensions();
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, pixel) in img.enumerate_pixels() {
        if *pixel == background {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }

    let Some((x0, y0, x1, y1)) = bounds else {
        return img;
    };
    let left = x0.saturating_sub(pad);
    let top = y0.saturating_sub(pad);
    let right = (x1 + pad).min(width - 1);
    let bottom = (y1 + pad).min(height - 1);

    image::imageops::crop_imm(&img, left, top, right - left + 1, bottom - top + 1).to_image()
}

fn encode_png(img: &image::RgbImage) -> Result<Vec<u8>, FigureError> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .map_err(|e| FigureError::Encode(e.to_string()))?;
    Ok(out.into_inner())
}

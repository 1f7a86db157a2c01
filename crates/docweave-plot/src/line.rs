use std::ops::Range;

use docweave_core::{Figure, FigureError, RenderRequest, RenderedImage};
use plotters::prelude::*;
use serde::{Deserialize, Serialize};

use crate::raster::{draw_err, render_with, Area};
use crate::style::{pt_to_px, rgb, series_color, ChartStyle, DRAWS_TEXT};

/// A named sequence of `(x, y)` points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(name: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// One or more series drawn as lines on shared axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub series: Vec<Series>,
    pub size_in: Option<(f64, f64)>,
    pub style: ChartStyle,
}

impl LineChart {
    pub fn new(style: ChartStyle) -> Self {
        Self {
            title: None,
            x_label: None,
            y_label: None,
            series: Vec::new(),
            size_in: None,
            style,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn axis_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = Some(x.into());
        self.y_label = Some(y.into());
        self
    }

    pub fn add_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn size(mut self, width_in: f64, height_in: f64) -> Self {
        self.size_in = Some((width_in, height_in));
        self
    }

    fn bounds(&self) -> Option<(Range<f64>, Range<f64>)> {
        let mut points = self.series.iter().flat_map(|s| s.points.iter().copied());
        let (x0, y0) = points.next()?;
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (x0, x0, y0, y0);
        for (x, y) in points {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
        Some((pad(min_x, max_x), pad(min_y, max_y)))
    }

    fn draw(&self, root: &Area<'_>, dpi: u32) -> Result<(), FigureError> {
        let (x_range, y_range) = self.bounds().ok_or(FigureError::Empty)?;
        let style = &self.style;
        let family = style.resolved_family();
        let text_color = rgb(style.text_color);
        let label_area = (pt_to_px(style.label_size, dpi) * 3.0) as u32;

        let mut builder = ChartBuilder::on(root);
        builder
            .margin((pt_to_px(style.tick_size, dpi)) as u32)
            .x_label_area_size(label_area)
            .y_label_area_size(label_area);
        if let Some(title) = self.title.as_ref().filter(|_| DRAWS_TEXT) {
            builder.caption(title, (family, pt_to_px(style.title_size, dpi)));
        }
        let mut chart = builder
            .build_cartesian_2d(x_range, y_range)
            .map_err(draw_err)?;

        let mut mesh = chart.configure_mesh();
        mesh.label_style((family, pt_to_px(style.tick_size, dpi)))
            .axis_desc_style((family, pt_to_px(style.label_size, dpi)))
            .bold_line_style(text_color.mix(style.grid_alpha))
            .light_line_style(WHITE.mix(0.0));
        if DRAWS_TEXT {
            if let Some(x) = &self.x_label {
                mesh.x_desc(x.as_str());
            }
            if let Some(y) = &self.y_label {
                mesh.y_desc(y.as_str());
            }
        } else {
            mesh.x_labels(0).y_labels(0);
        }
        if !style.show_grid {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(draw_err)?;

        let stroke = (dpi / 100).max(1);
        let value_style = TextStyle::from((family, pt_to_px(style.tick_size, dpi)).into_font());
        for (i, series) in self.series.iter().enumerate() {
            let color = series_color(i);
            chart
                .draw_series(LineSeries::new(
                    series.points.iter().copied(),
                    color.stroke_width(stroke),
                ))
                .map_err(draw_err)?
                .label(series.name.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

            if style.show_values && DRAWS_TEXT {
                chart
                    .draw_series(series.points.iter().map(|&(x, y)| {
                        Text::new(style.format_value(y), (x, y), value_style.clone())
                    }))
                    .map_err(draw_err)?;
            }
        }

        if self.series.len() > 1 && DRAWS_TEXT {
            chart
                .configure_series_labels()
                .label_font((family, pt_to_px(style.tick_size, dpi)))
                .background_style(WHITE.mix(0.8))
                .border_style(text_color)
                .draw()
                .map_err(draw_err)?;
        }

        Ok(())
    }
}

/// Widen a degenerate range and add a 5% margin.
pub(crate) fn pad(min: f64, max: f64) -> Range<f64> {
    if (max - min).abs() < f64::EPSILON {
        return (min - 1.0)..(max + 1.0);
    }
    let margin = (max - min) * 0.05;
    (min - margin)..(max + margin)
}

impl Figure for LineChart {
    fn render_png(&self, request: &RenderRequest) -> Result<RenderedImage, FigureError> {
        render_with(request, |root| self.draw(root, request.dpi))
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn size_inches(&self) -> Option<(f64, f64)> {
        self.size_in
    }
}

use docweave_core::{Figure, FigureError, RenderRequest, RenderedImage};
use plotters::prelude::*;
use serde::{Deserialize, Serialize};

use crate::line::pad;
use crate::raster::{draw_err, render_with, Area};
use crate::style::{pt_to_px, rgb, series_color, ChartStyle, DRAWS_TEXT};

/// One bar per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    pub size_in: Option<(f64, f64)>,
    pub style: ChartStyle,
}

impl BarChart {
    /// Pairs categories with values; extra entries on either side are dropped.
    pub fn new(
        categories: impl IntoIterator<Item = impl Into<String>>,
        values: impl IntoIterator<Item = f64>,
        style: ChartStyle,
    ) -> Self {
        let (categories, values) = categories
            .into_iter()
            .map(Into::into)
            .zip(values)
            .unzip();

        Self {
            title: None,
            x_label: None,
            y_label: None,
            categories,
            values,
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

    pub fn size(mut self, width_in: f64, height_in: f64) -> Self {
        self.size_in = Some((width_in, height_in));
        self
    }

    fn draw(&self, root: &Area<'_>, dpi: u32) -> Result<(), FigureError> {
        if self.values.is_empty() {
            return Err(FigureError::Empty);
        }
        let style = &self.style;
        let family = style.resolved_family();
        let text_color = rgb(style.text_color);
        let label_area = (pt_to_px(style.label_size, dpi) * 3.0) as u32;

        // Bars always start from zero.
        let lo = self.values.iter().copied().fold(0.0, f64::min);
        let hi = self.values.iter().copied().fold(0.0, f64::max);
        let y_range = pad(lo, hi);

        let mut builder = ChartBuilder::on(root);
        builder
            .margin(pt_to_px(style.tick_size, dpi) as u32)
            .x_label_area_size(label_area)
            .y_label_area_size(label_area);
        if let Some(title) = self.title.as_ref().filter(|_| DRAWS_TEXT) {
            builder.caption(title, (family, pt_to_px(style.title_size, dpi)));
        }
        let mut chart = builder
            .build_cartesian_2d((0..self.values.len()).into_segmented(), y_range)
            .map_err(draw_err)?;

        let category_label = |v: &SegmentValue<usize>| match v {
            SegmentValue::CenterOf(i) => self.categories.get(*i).cloned().unwrap_or_default(),
            _ => String::new(),
        };

        let mut mesh = chart.configure_mesh();
        mesh.disable_x_mesh()
            .x_labels(self.values.len())
            .x_label_formatter(&category_label)
            .label_style((family, pt_to_px(style.tick_size, dpi)))
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
            mesh.disable_y_mesh();
        }
        mesh.draw().map_err(draw_err)?;

        let fill = series_color(0).filled();
        chart
            .draw_series(self.values.iter().enumerate().map(|(i, &v)| {
                let mut bar = Rectangle::new(
                    [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), v)],
                    fill,
                );
                bar.set_margin(0, 0, 5, 5);
                bar
            }))
            .map_err(draw_err)?;

        if style.show_values && DRAWS_TEXT {
            let value_style =
                TextStyle::from((family, pt_to_px(style.tick_size, dpi)).into_font());
            chart
                .draw_series(self.values.iter().enumerate().map(|(i, &v)| {
                    Text::new(
                        style.format_value(v),
                        (SegmentValue::CenterOf(i), v),
                        value_style.clone(),
                    )
                }))
                .map_err(draw_err)?;
        }

        Ok(())
    }
}

impl Figure for BarChart {
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

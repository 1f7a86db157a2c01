//! docweave-core
//!
//! Pure value objects shared by the generator: theme, visualization
//! settings, tabular frames, section descriptors and the figure capability.
//! No document or plotting library dependency lives here.

pub mod error;
pub mod figure;
pub mod frame;
pub mod section;
pub mod theme;
pub mod viz;

pub use error::{CoreError, FigureError};
pub use figure::{Figure, RasterFigure, RenderRequest, RenderedImage};
pub use frame::{CellValue, DataFrame, Index};
pub use section::{
    chart_section, table_section, text_section, Content, ContentType, Orientation,
    SectionDescriptor, StyleOptions,
};
pub use theme::{Rgb, Theme};
pub use viz::{PlotSettings, VisualizationSettings};

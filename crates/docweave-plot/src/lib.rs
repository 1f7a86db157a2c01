//! docweave-plot
//!
//! Line and bar charts drawn with `plotters` into an in-memory bitmap and
//! encoded as PNG. Both implement [`docweave_core::Figure`].
//!
//! Text is rasterized through the `fonts` feature (on by default). Builds
//! without it skip titles, labels and value annotations entirely.

pub mod bar;
pub mod line;
pub mod raster;
pub mod style;

pub use bar::BarChart;
pub use line::{LineChart, Series};
pub use style::ChartStyle;

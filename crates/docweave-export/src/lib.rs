//! docweave-export
//!
//! Turns an ordered list of sections into a DOCX file on disk, optionally
//! mirroring each section to a preview surface as it goes.

pub mod config;
pub mod display;
pub mod docx;
pub mod error;
pub mod format;
pub mod generator;
pub mod styles;

pub use config::{load_config, GeneratorConfig};
pub use display::{DisplayBlock, DisplaySurface, MarkdownPreview};
pub use error::ExportError;
pub use generator::{DocumentGenerator, GenerateOptions};

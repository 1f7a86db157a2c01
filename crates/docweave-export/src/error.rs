use std::path::PathBuf;

use docweave_core::{CoreError, FigureError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no filename provided and no default filename set")]
    MissingFilename,

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("chart rendering failed: {0}")]
    Figure(#[from] FigureError),

    #[error("DOCX generation failed: {0}")]
    Docx(String),

    #[error("failed to load document {}: {reason}", path.display())]
    DocxRead { path: PathBuf, reason: String },

    #[error("template rendering failed: {0}")]
    Template(String),

    #[error("display failed: {0}")]
    Display(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::Template(e.to_string())
    }
}

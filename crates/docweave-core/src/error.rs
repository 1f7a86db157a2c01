use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(
        "unable to automatically determine content type; \
         please specify content_type explicitly"
    )]
    UndeterminedContentType,

    #[error("invalid content type {given:?}; must be one of [\"text\", \"table\", \"chart\"]")]
    InvalidContentType { given: String },

    #[error("payload does not match content type {expected}: {reason}")]
    PayloadMismatch {
        expected: &'static str,
        reason: String,
    },

    #[error("invalid table: {0}")]
    InvalidTable(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failure while rasterizing a figure.
#[derive(Debug, Error)]
pub enum FigureError {
    #[error("figure has no data to draw")]
    Empty,

    #[error("drawing failed: {0}")]
    Draw(String),

    #[error("image encoding failed: {0}")]
    Encode(String),
}

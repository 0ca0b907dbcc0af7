//! Conversion errors

use thiserror::Error;

/// Errors raised while turning split S-parameter payloads into VSWR series
///
/// NaN and infinite intermediate values are never errors; they are handled
/// by sanitization.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("{file}: shape mismatch: {detail}")]
    ShapeMismatch { file: String, detail: String },

    #[error("{file}: malformed dataset: {detail}")]
    MalformedDataset { file: String, detail: String },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConversionError {
    pub(crate) fn shape(file: &str, detail: impl Into<String>) -> Self {
        ConversionError::ShapeMismatch {
            file: file.to_string(),
            detail: detail.into(),
        }
    }

    pub(crate) fn malformed(file: &str, detail: impl Into<String>) -> Self {
        ConversionError::MalformedDataset {
            file: file.to_string(),
            detail: detail.into(),
        }
    }

    /// Name of the dataset the error belongs to, if any
    pub fn file(&self) -> Option<&str> {
        match self {
            ConversionError::ShapeMismatch { file, .. }
            | ConversionError::MalformedDataset { file, .. } => Some(file),
            ConversionError::InvalidRequest(_) | ConversionError::Json(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;

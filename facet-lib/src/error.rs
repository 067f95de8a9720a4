//! Error types

use thiserror::Error;

/// Errors raised while reading or writing facet wire objects.
#[derive(Debug, Error)]
pub enum FacetError {
    #[error("invalid facet JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FacetError>;

//! The unified error type for all high-level operations.
//!
//! Three kinds of failure reach callers: validation errors (structured,
//! recoverable, shown per field), decode errors (soft, shown as a generic
//! invalid-input message), and generation errors (fatal for the one
//! operation, logged, never corrupting state). Everything converts into
//! `PipelineError` at this boundary.

use pardoc_record::ValidationErrors;
use pardoc_render_core::RenderError;
use pardoc_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Other pipeline error: {0}")]
    Other(String),
}

impl PipelineError {
    /// The per-field messages when this is a validation failure, for
    /// display next to the offending inputs.
    pub fn field_errors(&self) -> Option<Vec<String>> {
        match self {
            PipelineError::Validation(errors) => Some(errors.lines()),
            _ => None,
        }
    }
}

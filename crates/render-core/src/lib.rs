//! Core abstractions for document rendering.
//!
//! Each output format implements [`DocumentRenderer`] over the same block
//! sequence and theme, which is the seam that keeps formats visually
//! equivalent: everything a renderer may vary is what the trait passes in.

pub mod error;
pub mod traits;

pub use error::RenderError;
pub use traits::{export_file_name, DocumentRenderer, OutputFormat};

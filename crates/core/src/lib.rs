//! Integration layer for the Project Approval Request engine.
//!
//! Wires the record model, validator, document builder, renderers, share
//! codec, and draft store into the operations a front end calls: import a
//! JSON file, export a document, open a shared link, persist the draft.
//! All failures funnel into [`PipelineError`] at this boundary.

pub mod error;
pub mod export;
pub mod import;

pub use error::PipelineError;
pub use export::{export, export_with_date, ExportedFile};
pub use import::import_record;

// The operations below are thin re-exports so callers can depend on this
// crate alone.
pub use pardoc_builder::build;
pub use pardoc_record::{
    default_record, validate, validate_value, ParPatch, ParRecord, ValidationErrors,
};
pub use pardoc_render_core::OutputFormat;
pub use pardoc_share::{decode, encode, record_from_fragment, share_url};
pub use pardoc_store::{DraftStore, FileSlot, MemorySlot};
pub use pardoc_style::Theme;
pub use pardoc_types::Locale;

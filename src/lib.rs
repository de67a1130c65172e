//! # pardoc
//!
//! Project Approval Request document engine: one validated data model,
//! rendered into a word-processor document, a self-contained HTML
//! document, or raw JSON, with a URL share codec and a single-slot local
//! draft store.
//!
//! The workspace is layered the way the data flows:
//!
//! ```text
//! record (model + validation)
//!     └── builder (+ style) ──► idf blocks ──► render-docx / render-html
//!     ├── render-json (serializes the record itself)
//!     ├── share (URL-fragment codec)
//!     └── store (draft persistence)
//! ```
//!
//! Most callers only need [`pardoc_core`]'s surface, re-exported here.

pub use pardoc_core::{
    build, decode, default_record, encode, export, export_with_date, import_record,
    record_from_fragment, share_url, validate, validate_value, DraftStore, ExportedFile,
    FileSlot, Locale, MemorySlot, OutputFormat, ParPatch, ParRecord, PipelineError, Theme,
    ValidationErrors,
};

pub use pardoc_idf as idf;
pub use pardoc_record as record;
pub use pardoc_style as style;

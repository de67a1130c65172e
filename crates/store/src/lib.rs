//! # Draft storage
//!
//! One draft slot, one record. The [`DraftStore`] is the sole mutation
//! gateway for the in-memory record: every change goes through a named
//! method, and persistence is an explicit atomic replace-or-reject of the
//! whole serialized record.
//!
//! Storage is abstracted behind the [`DraftSlot`] trait:
//!
//! - [`FileSlot`]: production storage, a single JSON file under the
//!   platform data directory
//! - [`MemorySlot`]: in-memory storage for tests
//!
//! There is exactly one slot; no versioning, no multi-draft support.

pub mod draft;
pub mod slot;

pub use draft::{DraftStore, Prefs};
pub use slot::{DraftSlot, FileSlot, MemorySlot, StoreError};

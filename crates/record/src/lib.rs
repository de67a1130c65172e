//! The canonical Project Approval Request record.
//!
//! This crate owns the data model, its seeded defaults, the validator, and
//! the typed update surface. Everything downstream (document building,
//! rendering, sharing, persistence) consumes a `ParRecord` that has passed
//! through [`validate_value`] or [`validate`].

pub mod defaults;
pub mod model;
pub mod update;
pub mod validate;

pub use defaults::default_record;
pub use model::{
    ApprovalSignoff, ApprovedBudgetEntry, AttachmentRef, BudgetEntryKind, BudgetYear, ParRecord,
    Priority, RevisionItem, RiskItem, RiskLevel, TimelineItem, UploadedFile,
};
pub use update::{reorder, ParPatch};
pub use validate::{validate, validate_value, ValidationErrors, ValidationIssue};

//! The document theme registry.
//!
//! A single versioned configuration drives every renderer: page geometry,
//! per-locale typography, the color palette, table column layouts, and
//! localized section titles and field labels. All renderers read the same
//! static values, which is what keeps the three output formats visually
//! in agreement.

pub mod labels;
pub mod page;
pub mod palette;
pub mod sections;
pub mod tables;
pub mod theme;
pub mod typography;

pub use labels::Label;
pub use page::PageGeometry;
pub use palette::Palette;
pub use sections::{SectionKey, SECTION_ORDER};
pub use tables::{ColumnSpec, TableKind, TableStyle};
pub use theme::Theme;
pub use typography::{BaseTypography, HeadingLevel, HeadingStyle, ListStyle, ParagraphStyle, Typography};

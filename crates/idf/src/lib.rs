//! Intermediate Document Format (IDF)
//!
//! The in-memory representation of a document between the model builder
//! and the renderers: an ordered sequence of block-level elements.
//! Renderers consume this sequence without knowing anything about the
//! record it came from, which is what makes the output formats agree.

use pardoc_style::{HeadingLevel, SectionKey, TableKind};
use pardoc_types::Locale;

/// A styling role attached to a block, resolved by renderers against the
/// theme. Closed set: the template has exactly these special texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockClass {
    CoverTitle,
    CoverSubtitle,
    AbstractTitle,
    AbstractText,
    AttachmentTitle,
    AttachmentNote,
}

/// Common metadata for block-level elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockMeta {
    pub class: Option<BlockClass>,
    /// The section this block belongs to, for grouping and tests.
    pub section: Option<SectionKey>,
}

impl BlockMeta {
    pub fn in_section(section: SectionKey) -> Self {
        Self { class: None, section: Some(section) }
    }

    pub fn classed(section: SectionKey, class: BlockClass) -> Self {
        Self { class: Some(class), section: Some(section) }
    }
}

/// One resolved table column: the bilingual spec from the theme with its
/// title already picked for the active locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    pub key: String,
    pub title: String,
    pub width_pct: u8,
}

/// How a table lays out its header cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableLayout {
    /// Header column: the first cell of every row is a shaded label.
    KeyValue,
    /// Header row: column titles on top, data rows below.
    Columnar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
    /// Rendered bold (the budget total row).
    pub emphasis: bool,
}

impl TableRow {
    pub fn plain(cells: Vec<String>) -> Self {
        Self { cells, emphasis: false }
    }

    pub fn strong(cells: Vec<String>) -> Self {
        Self { cells, emphasis: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock {
    pub kind: Option<TableKind>,
    pub layout: TableLayout,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
}

/// A block-level element of the document.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { meta: BlockMeta, level: HeadingLevel, text: String },
    Paragraph { meta: BlockMeta, text: String },
    BulletList { meta: BlockMeta, items: Vec<String> },
    Table { meta: BlockMeta, table: TableBlock },
    PageBreak,
}

impl Block {
    pub fn heading(section: SectionKey, level: HeadingLevel, text: impl Into<String>) -> Self {
        Block::Heading { meta: BlockMeta::in_section(section), level, text: text.into() }
    }

    pub fn paragraph(section: SectionKey, text: impl Into<String>) -> Self {
        Block::Paragraph { meta: BlockMeta::in_section(section), text: text.into() }
    }

    pub fn classed_paragraph(
        section: SectionKey,
        class: BlockClass,
        text: impl Into<String>,
    ) -> Self {
        Block::Paragraph { meta: BlockMeta::classed(section, class), text: text.into() }
    }

    pub fn bullets(section: SectionKey, items: Vec<String>) -> Self {
        Block::BulletList { meta: BlockMeta::in_section(section), items }
    }

    pub fn table(section: SectionKey, table: TableBlock) -> Self {
        Block::Table { meta: BlockMeta::in_section(section), table }
    }

    pub fn meta(&self) -> Option<&BlockMeta> {
        match self {
            Block::Heading { meta, .. }
            | Block::Paragraph { meta, .. }
            | Block::BulletList { meta, .. }
            | Block::Table { meta, .. } => Some(meta),
            Block::PageBreak => None,
        }
    }

    /// A string identifier for the block type, used in logs and tests.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::BulletList { .. } => "bullet-list",
            Block::Table { .. } => "table",
            Block::PageBreak => "page-break",
        }
    }
}

/// Per-block presentation derived from the locale: text alignment and
/// direction. Keeping this a pure function here means renderers never
/// sprinkle their own RTL conditionals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPresentation {
    pub align_end: bool,
    pub rtl: bool,
}

pub fn presentation(block: &Block, locale: Locale) -> BlockPresentation {
    let rtl = locale.is_rtl();
    // Cover title and subtitle stay centered in both directions; everything
    // else follows the reading direction.
    let centered = matches!(
        block.meta().and_then(|m| m.class),
        Some(BlockClass::CoverTitle) | Some(BlockClass::CoverSubtitle)
    );
    BlockPresentation { align_end: rtl && !centered, rtl }
}

/// All visible text of a block sequence, in document order. This is the
/// reference stream the cross-format consistency tests compare renderer
/// outputs against.
pub fn visible_text(blocks: &[Block]) -> Vec<String> {
    let mut out = Vec::new();
    for block in blocks {
        match block {
            Block::Heading { text, .. } | Block::Paragraph { text, .. } => {
                out.push(text.clone());
            }
            Block::BulletList { items, .. } => out.extend(items.iter().cloned()),
            Block::Table { table, .. } => {
                if table.layout == TableLayout::Columnar {
                    out.extend(table.columns.iter().map(|c| c.title.clone()));
                }
                for row in &table.rows {
                    out.extend(row.cells.iter().cloned());
                }
            }
            Block::PageBreak => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_kind_names() {
        assert_eq!(Block::PageBreak.kind(), "page-break");
        let b = Block::paragraph(SectionKey::ProjectDetails, "x");
        assert_eq!(b.kind(), "paragraph");
    }

    #[test]
    fn test_presentation_flips_for_rtl() {
        let p = Block::paragraph(SectionKey::ProjectDetails, "x");
        assert!(!presentation(&p, Locale::En).align_end);
        assert!(presentation(&p, Locale::Ar).align_end);
    }

    #[test]
    fn test_cover_title_stays_centered_in_rtl() {
        let b = Block::classed_paragraph(SectionKey::TitlePage, BlockClass::CoverTitle, "t");
        let pres = presentation(&b, Locale::Ar);
        assert!(pres.rtl);
        assert!(!pres.align_end);
    }

    #[test]
    fn test_visible_text_covers_table_headers_and_cells() {
        let table = TableBlock {
            kind: None,
            layout: TableLayout::Columnar,
            columns: vec![TableColumn { key: "a".into(), title: "A".into(), width_pct: 100 }],
            rows: vec![TableRow::plain(vec!["cell".into()])],
        };
        let blocks = vec![Block::table(SectionKey::Timeline, table), Block::PageBreak];
        assert_eq!(visible_text(&blocks), vec!["A".to_string(), "cell".to_string()]);
    }
}

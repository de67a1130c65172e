//! Maps the block sequence onto the HTML page structure: a cover page
//! followed by one content division per page-break group.

use crate::css::stylesheet;
use crate::escape;
use pardoc_idf::{Block, BlockClass, TableBlock, TableLayout};
use pardoc_record::ParRecord;
use pardoc_render_core::{DocumentRenderer, OutputFormat, RenderError};
use pardoc_style::{HeadingLevel, Theme};
use pardoc_types::Locale;
use std::fmt::Write;

#[derive(Debug, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentRenderer for HtmlRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Html
    }

    fn render(
        &self,
        _record: &ParRecord,
        blocks: &[Block],
        theme: &Theme,
        locale: Locale,
    ) -> Result<Vec<u8>, RenderError> {
        let html = render_document(blocks, theme, locale)
            .map_err(|e| RenderError::Other(e.to_string()))?;
        Ok(html.into_bytes())
    }
}

fn render_document(
    blocks: &[Block],
    theme: &Theme,
    locale: Locale,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"{}\" dir=\"{}\">", locale.tag(), locale.dir())?;
    writeln!(out, "<head>")?;
    writeln!(out, "    <meta charset=\"UTF-8\">")?;
    writeln!(
        out,
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
    )?;
    writeln!(out, "    <title>Project Approval Request</title>")?;
    writeln!(out, "    <style>")?;
    writeln!(out, "{}", stylesheet(theme, locale))?;
    writeln!(out, "    </style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;

    // Page-break blocks delimit the page groups. The first group is the
    // cover; its page break is expressed by the cover's own CSS.
    let groups: Vec<&[Block]> = blocks
        .split(|b| matches!(b, Block::PageBreak))
        .filter(|g| !g.is_empty())
        .collect();

    for (i, group) in groups.iter().enumerate() {
        if i == 0 {
            render_cover(&mut out, group)?;
            continue;
        }
        let class = if i == 1 { "content-page" } else { "content-page page-break" };
        writeln!(out, "    <div class=\"{class}\">")?;
        for block in *group {
            render_block(&mut out, block)?;
        }
        writeln!(out, "    </div>")?;
    }

    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(out)
}

fn render_cover(out: &mut String, group: &[Block]) -> Result<(), std::fmt::Error> {
    writeln!(out, "    <div class=\"cover-page\">")?;
    writeln!(out, "        <div class=\"header-bar\"></div>")?;
    let mut in_abstract = false;
    for block in group {
        let Block::Paragraph { meta, text } = block else {
            render_block(out, block)?;
            continue;
        };
        match meta.class {
            Some(BlockClass::CoverTitle) => {
                writeln!(out, "        <h1 class=\"cover-title\">{}</h1>", escape(text))?;
            }
            Some(BlockClass::CoverSubtitle) => {
                writeln!(out, "        <h2 class=\"cover-subtitle\">{}</h2>", escape(text))?;
            }
            Some(BlockClass::AbstractTitle) => {
                writeln!(out, "        <div class=\"abstract-section\">")?;
                in_abstract = true;
                writeln!(out, "            <h3 class=\"abstract-title\">{}</h3>", escape(text))?;
            }
            Some(BlockClass::AbstractText) => {
                writeln!(out, "            <p class=\"abstract-text\">{}</p>", escape(text))?;
                if in_abstract {
                    writeln!(out, "        </div>")?;
                    in_abstract = false;
                }
            }
            _ => render_block(out, block)?,
        }
    }
    if in_abstract {
        writeln!(out, "        </div>")?;
    }
    writeln!(out, "    </div>")?;
    Ok(())
}

fn render_block(out: &mut String, block: &Block) -> Result<(), std::fmt::Error> {
    match block {
        Block::Heading { level, text, .. } => {
            let (tag, class) = match level {
                HeadingLevel::H1 => ("h1", "cover-title"),
                HeadingLevel::H2 => ("h2", "section-title"),
                HeadingLevel::H3 => ("h3", "subsection-title"),
            };
            writeln!(out, "        <{tag} class=\"{class}\">{}</{tag}>", escape(text))?;
        }
        Block::Paragraph { meta, text } => match meta.class {
            Some(BlockClass::AttachmentTitle) => {
                writeln!(
                    out,
                    "        <p class=\"paragraph\"><strong>{}</strong></p>",
                    escape(text)
                )?;
            }
            Some(BlockClass::AttachmentNote) => {
                writeln!(out, "        <p class=\"attachment-note\">{}</p>", escape(text))?;
            }
            _ => writeln!(out, "        <p class=\"paragraph\">{}</p>", escape(text))?,
        },
        Block::BulletList { items, .. } => {
            writeln!(out, "        <ul class=\"bullet-list\">")?;
            for item in items {
                writeln!(out, "            <li>{}</li>", escape(item))?;
            }
            writeln!(out, "        </ul>")?;
        }
        Block::Table { table, .. } => render_table(out, table)?,
        Block::PageBreak => {}
    }
    Ok(())
}

fn render_table(out: &mut String, table: &TableBlock) -> Result<(), std::fmt::Error> {
    writeln!(out, "        <table class=\"table\">")?;
    match table.layout {
        TableLayout::Columnar => {
            writeln!(out, "            <thead>")?;
            writeln!(out, "                <tr>")?;
            for column in &table.columns {
                writeln!(
                    out,
                    "                    <th style=\"width: {}%;\">{}</th>",
                    column.width_pct,
                    escape(&column.title)
                )?;
            }
            writeln!(out, "                </tr>")?;
            writeln!(out, "            </thead>")?;
            writeln!(out, "            <tbody>")?;
            for row in &table.rows {
                writeln!(out, "                <tr>")?;
                for cell in &row.cells {
                    writeln!(out, "                    <td>{}</td>", escape(cell))?;
                }
                writeln!(out, "                </tr>")?;
            }
            writeln!(out, "            </tbody>")?;
        }
        TableLayout::KeyValue => {
            let label_width = table.columns.first().map(|c| c.width_pct).unwrap_or(30);
            for row in &table.rows {
                writeln!(out, "            <tr>")?;
                for (i, cell) in row.cells.iter().enumerate() {
                    if i == 0 {
                        writeln!(
                            out,
                            "                <th style=\"width: {label_width}%;\">{}</th>",
                            escape(cell)
                        )?;
                    } else if row.emphasis {
                        writeln!(
                            out,
                            "                <td><strong>{}</strong></td>",
                            escape(cell)
                        )?;
                    } else {
                        writeln!(out, "                <td>{}</td>", escape(cell))?;
                    }
                }
                writeln!(out, "            </tr>")?;
            }
        }
    }
    writeln!(out, "        </table>")?;
    Ok(())
}

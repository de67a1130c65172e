//! Writes `word/document.xml` from the block sequence.
//!
//! Sizes follow WordprocessingML conventions: run sizes in half-points,
//! spacing and indents in twips, table cell widths in fiftieths of a
//! percent. All styling values come from the theme; this module only
//! translates units.

use pardoc_idf::{presentation, Block, BlockClass, TableBlock, TableLayout};
use pardoc_render_core::RenderError;
use pardoc_style::{HeadingLevel, Theme};
use pardoc_types::{Color, Locale};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

pub(crate) fn half_points(size_pt: f32) -> u32 {
    (size_pt * 2.0).round() as u32
}

pub(crate) fn twips(pt: f32) -> u32 {
    (pt * 20.0).round() as u32
}

#[derive(Debug, Clone)]
struct RunProps {
    font: String,
    size_pt: f32,
    bold: bool,
    color: Color,
    rtl: bool,
}

#[derive(Debug, Clone, Default)]
struct ParaProps {
    style: Option<&'static str>,
    jc: &'static str,
    spacing_before: u32,
    spacing_after: u32,
    line: Option<u32>,
    indent_start: Option<u32>,
    bidi: bool,
}

pub struct DocumentWriter<'a> {
    writer: Writer<Vec<u8>>,
    theme: &'a Theme,
    locale: Locale,
}

impl<'a> DocumentWriter<'a> {
    pub fn new(theme: &'a Theme, locale: Locale) -> Self {
        Self { writer: Writer::new(Vec::new()), theme, locale }
    }

    fn emit(&mut self, event: Event) -> Result<(), RenderError> {
        self.writer
            .write_event(event)
            .map_err(|e| RenderError::Xml(e.to_string()))
    }

    fn open(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), RenderError> {
        let mut el = BytesStart::new(name);
        for (key, value) in attrs {
            el.push_attribute((*key, *value));
        }
        self.emit(Event::Start(el))
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), RenderError> {
        let mut el = BytesStart::new(name);
        for (key, value) in attrs {
            el.push_attribute((*key, *value));
        }
        self.emit(Event::Empty(el))
    }

    fn close(&mut self, name: &str) -> Result<(), RenderError> {
        self.emit(Event::End(BytesEnd::new(name)))
    }

    fn text(&mut self, text: &str) -> Result<(), RenderError> {
        self.emit(Event::Text(BytesText::new(text)))
    }

    /// Serializes the whole document body plus the section properties.
    pub fn write(mut self, blocks: &[Block]) -> Result<Vec<u8>, RenderError> {
        self.emit(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        self.open("w:document", &[("xmlns:w", W_NS)])?;
        self.open("w:body", &[])?;

        for block in blocks {
            self.write_block(block)?;
        }

        self.write_sect_pr()?;
        self.close("w:body")?;
        self.close("w:document")?;
        Ok(self.writer.into_inner())
    }

    fn write_block(&mut self, block: &Block) -> Result<(), RenderError> {
        match block {
            Block::Heading { level, text, .. } => {
                let (pp, rp) = self.heading_props(*level, block);
                self.paragraph(text, &pp, &rp)
            }
            Block::Paragraph { meta, text } => {
                let (pp, rp) = self.paragraph_props(meta.class, block);
                self.paragraph(text, &pp, &rp)
            }
            Block::BulletList { items, .. } => {
                for item in items {
                    let (pp, rp) = self.bullet_props(block);
                    self.paragraph(&format!("\u{2022} {item}"), &pp, &rp)?;
                }
                Ok(())
            }
            Block::Table { table, .. } => self.write_table(table),
            Block::PageBreak => self.page_break(),
        }
    }

    fn base_run(&self) -> RunProps {
        let base = self.theme.typography.base(self.locale);
        RunProps {
            font: base.font.to_string(),
            size_pt: base.size_pt,
            bold: false,
            color: base.color,
            rtl: base.rtl,
        }
    }

    fn start_jc(&self, block: &Block) -> &'static str {
        if presentation(block, self.locale).align_end { "right" } else { "left" }
    }

    fn heading_props(&self, level: HeadingLevel, block: &Block) -> (ParaProps, RunProps) {
        let style = self.theme.typography.heading(level);
        let pp = ParaProps {
            style: Some(match level {
                HeadingLevel::H1 => "Heading1",
                HeadingLevel::H2 => "Heading2",
                HeadingLevel::H3 => "Heading3",
            }),
            jc: self.start_jc(block),
            spacing_before: twips(style.spacing_before_pt),
            spacing_after: twips(style.spacing_after_pt),
            line: None,
            indent_start: None,
            bidi: self.locale.is_rtl(),
        };
        let rp = RunProps {
            font: style.font(self.locale).to_string(),
            size_pt: style.size_pt,
            bold: style.bold,
            color: style.color,
            rtl: self.locale.is_rtl(),
        };
        (pp, rp)
    }

    fn paragraph_props(&self, class: Option<BlockClass>, block: &Block) -> (ParaProps, RunProps) {
        let palette = self.theme.colors();
        let paragraph = self.theme.typography.paragraph;
        let mut rp = self.base_run();
        let mut pp = ParaProps {
            style: None,
            jc: self.start_jc(block),
            spacing_before: twips(paragraph.spacing_before_pt),
            spacing_after: twips(paragraph.spacing_after_pt),
            line: Some((paragraph.line_spacing * 240.0).round() as u32),
            indent_start: None,
            bidi: self.locale.is_rtl(),
        };
        match class {
            Some(BlockClass::CoverTitle) => {
                pp.jc = "center";
                pp.spacing_before = 1440;
                pp.spacing_after = 240;
                rp.bold = true;
                rp.size_pt = 24.0;
                rp.color = palette.secondary;
            }
            Some(BlockClass::CoverSubtitle) => {
                pp.jc = "center";
                pp.spacing_after = 960;
                rp.size_pt = 16.0;
                rp.color = palette.muted_text;
            }
            Some(BlockClass::AbstractTitle) => {
                pp.spacing_before = 480;
                pp.spacing_after = 120;
                rp.bold = true;
                rp.size_pt = 14.0;
                rp.color = palette.secondary;
            }
            Some(BlockClass::AbstractText) => {
                pp.spacing_after = 240;
            }
            Some(BlockClass::AttachmentTitle) => {
                pp.spacing_after = 120;
                rp.bold = true;
            }
            Some(BlockClass::AttachmentNote) => {
                pp.spacing_after = 240;
                rp.color = palette.muted_text;
            }
            None => {}
        }
        (pp, rp)
    }

    fn bullet_props(&self, block: &Block) -> (ParaProps, RunProps) {
        let bullet = self.theme.typography.bullet;
        let (mut pp, rp) = self.paragraph_props(None, block);
        pp.spacing_after = twips(bullet.spacing_after_pt);
        pp.indent_start = Some(bullet.indent_twips);
        (pp, rp)
    }

    fn paragraph(&mut self, text: &str, pp: &ParaProps, rp: &RunProps) -> Result<(), RenderError> {
        self.open("w:p", &[])?;
        self.write_p_pr(pp)?;
        self.run(text, rp)?;
        self.close("w:p")
    }

    fn write_p_pr(&mut self, pp: &ParaProps) -> Result<(), RenderError> {
        self.open("w:pPr", &[])?;
        if let Some(style) = pp.style {
            self.empty("w:pStyle", &[("w:val", style)])?;
        }
        if pp.bidi {
            self.empty("w:bidi", &[])?;
        }
        let before = pp.spacing_before.to_string();
        let after = pp.spacing_after.to_string();
        let line = pp.line.map(|l| l.to_string());
        let mut spacing: Vec<(&str, &str)> =
            vec![("w:before", before.as_str()), ("w:after", after.as_str())];
        if let Some(line) = line.as_deref() {
            spacing.push(("w:line", line));
            spacing.push(("w:lineRule", "auto"));
        }
        self.empty("w:spacing", &spacing)?;
        if let Some(indent) = pp.indent_start {
            let value = indent.to_string();
            if pp.bidi {
                self.empty("w:ind", &[("w:right", value.as_str())])?;
            } else {
                self.empty("w:ind", &[("w:left", value.as_str())])?;
            }
        }
        self.empty("w:jc", &[("w:val", pp.jc)])?;
        self.close("w:pPr")
    }

    fn run(&mut self, text: &str, rp: &RunProps) -> Result<(), RenderError> {
        self.open("w:r", &[])?;
        self.write_r_pr(rp)?;
        self.open("w:t", &[("xml:space", "preserve")])?;
        self.text(text)?;
        self.close("w:t")?;
        self.close("w:r")
    }

    fn write_r_pr(&mut self, rp: &RunProps) -> Result<(), RenderError> {
        self.open("w:rPr", &[])?;
        self.empty(
            "w:rFonts",
            &[("w:ascii", rp.font.as_str()), ("w:hAnsi", rp.font.as_str()), ("w:cs", rp.font.as_str())],
        )?;
        if rp.bold {
            self.empty("w:b", &[])?;
        }
        if rp.rtl {
            self.empty("w:rtl", &[])?;
        }
        let color = rp.color.hex_bare();
        self.empty("w:color", &[("w:val", color.as_str())])?;
        let size = half_points(rp.size_pt).to_string();
        self.empty("w:sz", &[("w:val", size.as_str())])?;
        self.empty("w:szCs", &[("w:val", size.as_str())])?;
        self.close("w:rPr")
    }

    fn page_break(&mut self) -> Result<(), RenderError> {
        self.open("w:p", &[])?;
        self.open("w:r", &[])?;
        self.empty("w:br", &[("w:type", "page")])?;
        self.close("w:r")?;
        self.close("w:p")
    }

    fn content_width_twips(&self) -> u32 {
        let (width, _) = self.theme.page.dimensions_twips();
        width - self.theme.page.margins.left - self.theme.page.margins.right
    }

    fn write_table(&mut self, table: &TableBlock) -> Result<(), RenderError> {
        let chrome = self.theme.table;
        let border_color = chrome.border.hex_bare();
        let border_sz = (chrome.border_size_px as u32 * 4).to_string();

        self.open("w:tbl", &[])?;
        self.open("w:tblPr", &[])?;
        self.empty("w:tblW", &[("w:w", "5000"), ("w:type", "pct")])?;
        if self.locale.is_rtl() {
            self.empty("w:bidiVisual", &[])?;
        }
        self.open("w:tblBorders", &[])?;
        for side in ["w:top", "w:left", "w:bottom", "w:right", "w:insideH", "w:insideV"] {
            self.empty(
                side,
                &[
                    ("w:val", "single"),
                    ("w:sz", border_sz.as_str()),
                    ("w:space", "0"),
                    ("w:color", border_color.as_str()),
                ],
            )?;
        }
        self.close("w:tblBorders")?;
        let padding = twips(chrome.cell_padding_pt as f32).to_string();
        self.open("w:tblCellMar", &[])?;
        for side in ["w:top", "w:left", "w:bottom", "w:right"] {
            self.empty(side, &[("w:w", padding.as_str()), ("w:type", "dxa")])?;
        }
        self.close("w:tblCellMar")?;
        self.close("w:tblPr")?;

        self.open("w:tblGrid", &[])?;
        let content_width = self.content_width_twips();
        for column in &table.columns {
            let width = (content_width as u64 * column.width_pct as u64 / 100) as u32;
            let value = width.to_string();
            self.empty("w:gridCol", &[("w:w", value.as_str())])?;
        }
        self.close("w:tblGrid")?;

        if table.layout == TableLayout::Columnar {
            self.open("w:tr", &[])?;
            self.open("w:trPr", &[])?;
            self.empty("w:tblHeader", &[])?;
            self.close("w:trPr")?;
            for column in &table.columns {
                self.header_cell(&column.title, column.width_pct)?;
            }
            self.close("w:tr")?;
        }

        for row in &table.rows {
            self.open("w:tr", &[])?;
            for (i, cell) in row.cells.iter().enumerate() {
                let width_pct = table.columns.get(i).map(|c| c.width_pct).unwrap_or(0);
                let label_cell = table.layout == TableLayout::KeyValue && i == 0;
                if label_cell {
                    self.header_cell(cell, width_pct)?;
                } else {
                    self.body_cell(cell, width_pct, row.emphasis)?;
                }
            }
            self.close("w:tr")?;
        }

        self.close("w:tbl")
    }

    fn cell_width_attr(width_pct: u8) -> String {
        // Table cell widths are expressed in fiftieths of a percent.
        (width_pct as u32 * 50).to_string()
    }

    fn header_cell(&mut self, text: &str, width_pct: u8) -> Result<(), RenderError> {
        let chrome = self.theme.table;
        let fill = chrome.header_bg.hex_bare();
        self.open("w:tc", &[])?;
        self.open("w:tcPr", &[])?;
        let width = Self::cell_width_attr(width_pct);
        self.empty("w:tcW", &[("w:w", width.as_str()), ("w:type", "pct")])?;
        self.empty("w:shd", &[("w:val", "clear"), ("w:fill", fill.as_str())])?;
        self.close("w:tcPr")?;

        let mut rp = self.base_run();
        rp.bold = chrome.header_bold;
        rp.color = chrome.header_text;
        let pp = ParaProps {
            style: None,
            jc: "center",
            spacing_before: 0,
            spacing_after: 0,
            line: None,
            indent_start: None,
            bidi: self.locale.is_rtl(),
        };
        self.paragraph(text, &pp, &rp)?;
        self.close("w:tc")
    }

    fn body_cell(&mut self, text: &str, width_pct: u8, emphasis: bool) -> Result<(), RenderError> {
        self.open("w:tc", &[])?;
        self.open("w:tcPr", &[])?;
        let width = Self::cell_width_attr(width_pct);
        self.empty("w:tcW", &[("w:w", width.as_str()), ("w:type", "pct")])?;
        self.close("w:tcPr")?;

        let mut rp = self.base_run();
        rp.bold = emphasis;
        let pp = ParaProps {
            style: None,
            jc: if self.locale.is_rtl() { "right" } else { "left" },
            spacing_before: 0,
            spacing_after: 0,
            line: None,
            indent_start: None,
            bidi: self.locale.is_rtl(),
        };
        self.paragraph(text, &pp, &rp)?;
        self.close("w:tc")
    }

    fn write_sect_pr(&mut self) -> Result<(), RenderError> {
        let page = self.theme.page;
        let (width, height) = page.dimensions_twips();
        let w = width.to_string();
        let h = height.to_string();
        self.open("w:sectPr", &[])?;
        self.empty(
            "w:pgSz",
            &[("w:w", w.as_str()), ("w:h", h.as_str()), ("w:orient", "landscape")],
        )?;
        let top = page.margins.top.to_string();
        let right = page.margins.right.to_string();
        let bottom = page.margins.bottom.to_string();
        let left = page.margins.left.to_string();
        self.empty(
            "w:pgMar",
            &[
                ("w:top", top.as_str()),
                ("w:right", right.as_str()),
                ("w:bottom", bottom.as_str()),
                ("w:left", left.as_str()),
                ("w:header", "720"),
                ("w:footer", "720"),
                ("w:gutter", "0"),
            ],
        )?;
        self.close("w:sectPr")
    }
}

//! Assembles the OPC package from its parts.

use crate::document::DocumentWriter;
use crate::opc::{write_package, Part};
use crate::styles::styles_xml;
use pardoc_idf::Block;
use pardoc_record::ParRecord;
use pardoc_render_core::{DocumentRenderer, OutputFormat, RenderError};
use pardoc_style::Theme;
use pardoc_types::Locale;

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/></Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

#[derive(Debug, Default)]
pub struct DocxRenderer;

impl DocxRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentRenderer for DocxRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Docx
    }

    fn render(
        &self,
        _record: &ParRecord,
        blocks: &[Block],
        theme: &Theme,
        locale: Locale,
    ) -> Result<Vec<u8>, RenderError> {
        let document = DocumentWriter::new(theme, locale).write(blocks)?;
        let styles = styles_xml(theme, locale)?;

        let parts = vec![
            Part::new("[Content_Types].xml", CONTENT_TYPES_XML.as_bytes().to_vec()),
            Part::new("_rels/.rels", ROOT_RELS_XML.as_bytes().to_vec()),
            Part::new("word/document.xml", document),
            Part::new("word/_rels/document.xml.rels", DOCUMENT_RELS_XML.as_bytes().to_vec()),
            Part::new("word/styles.xml", styles),
        ];
        let package = write_package(&parts)?;
        log::debug!("packed {} parts into {} bytes", parts.len(), package.len());
        Ok(package)
    }
}

//! Writes `word/styles.xml`: document defaults plus the three heading
//! styles referenced from paragraph properties.

use crate::document::half_points;
use pardoc_render_core::RenderError;
use pardoc_style::{HeadingLevel, Theme};
use pardoc_types::Locale;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

struct StylesWriter {
    writer: Writer<Vec<u8>>,
}

impl StylesWriter {
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
}

pub fn styles_xml(theme: &Theme, locale: Locale) -> Result<Vec<u8>, RenderError> {
    let mut w = StylesWriter { writer: Writer::new(Vec::new()) };
    let base = theme.typography.base(locale);

    w.emit(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    w.open("w:styles", &[("xmlns:w", W_NS)])?;

    w.open("w:docDefaults", &[])?;
    w.open("w:rPrDefault", &[])?;
    w.open("w:rPr", &[])?;
    w.empty(
        "w:rFonts",
        &[("w:ascii", base.font), ("w:hAnsi", base.font), ("w:cs", base.font)],
    )?;
    let base_size = half_points(base.size_pt).to_string();
    w.empty("w:sz", &[("w:val", base_size.as_str())])?;
    w.empty("w:szCs", &[("w:val", base_size.as_str())])?;
    w.close("w:rPr")?;
    w.close("w:rPrDefault")?;
    w.close("w:docDefaults")?;

    w.open("w:style", &[("w:type", "paragraph"), ("w:styleId", "Normal"), ("w:default", "1")])?;
    w.empty("w:name", &[("w:val", "Normal")])?;
    w.close("w:style")?;

    for (level, id, name) in [
        (HeadingLevel::H1, "Heading1", "heading 1"),
        (HeadingLevel::H2, "Heading2", "heading 2"),
        (HeadingLevel::H3, "Heading3", "heading 3"),
    ] {
        let style = theme.typography.heading(level);
        w.open("w:style", &[("w:type", "paragraph"), ("w:styleId", id)])?;
        w.empty("w:name", &[("w:val", name)])?;
        w.empty("w:basedOn", &[("w:val", "Normal")])?;
        w.empty("w:next", &[("w:val", "Normal")])?;
        w.open("w:rPr", &[])?;
        let font = style.font(locale);
        w.empty("w:rFonts", &[("w:ascii", font), ("w:hAnsi", font), ("w:cs", font)])?;
        if style.bold {
            w.empty("w:b", &[])?;
        }
        let color = style.color.hex_bare();
        w.empty("w:color", &[("w:val", color.as_str())])?;
        let size = half_points(style.size_pt).to_string();
        w.empty("w:sz", &[("w:val", size.as_str())])?;
        w.empty("w:szCs", &[("w:val", size.as_str())])?;
        w.close("w:rPr")?;
        w.close("w:style")?;
    }

    w.close("w:styles")?;
    Ok(w.writer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_define_three_headings() {
        let xml =
            String::from_utf8(styles_xml(Theme::builtin(), Locale::En).unwrap()).unwrap();
        assert!(xml.contains("w:styleId=\"Heading1\""));
        assert!(xml.contains("w:styleId=\"Heading2\""));
        assert!(xml.contains("w:styleId=\"Heading3\""));
        assert!(xml.contains("Calibri Light"));
        assert!(xml.contains("w:sz w:val=\"40\""));
    }

    #[test]
    fn test_arabic_styles_use_tahoma() {
        let xml =
            String::from_utf8(styles_xml(Theme::builtin(), Locale::Ar).unwrap()).unwrap();
        assert!(xml.contains("Tahoma"));
        assert!(!xml.contains("Calibri Light"));
    }
}

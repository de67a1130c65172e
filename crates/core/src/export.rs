//! Export pipeline: validate, build the block sequence, render, name the
//! file. A renderer failure is logged and surfaced as an operation-failed
//! error; the record itself is never touched.

use crate::error::PipelineError;
use chrono::{Local, NaiveDate};
use pardoc_builder::build;
use pardoc_record::{validate, ParRecord};
use pardoc_render_core::{export_file_name, DocumentRenderer, OutputFormat};
use pardoc_render_docx::DocxRenderer;
use pardoc_render_html::HtmlRenderer;
use pardoc_render_json::JsonRenderer;
use pardoc_style::Theme;
use pardoc_types::Locale;

/// A finished export: bytes plus the metadata a download needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

fn renderer_for(format: OutputFormat) -> Box<dyn DocumentRenderer> {
    match format {
        OutputFormat::Docx => Box::new(DocxRenderer::new()),
        OutputFormat::Html => Box::new(HtmlRenderer::new()),
        OutputFormat::Json => Box::new(JsonRenderer::new()),
    }
}

/// Exports with an explicit date in the file name, for deterministic
/// callers and tests.
pub fn export_with_date(
    record: &ParRecord,
    format: OutputFormat,
    locale: Locale,
    date: NaiveDate,
) -> Result<ExportedFile, PipelineError> {
    validate(record)?;
    let theme = Theme::builtin();
    let blocks = build(record, locale, theme);
    let renderer = renderer_for(format);
    let bytes = renderer.render(record, &blocks, theme, locale).map_err(|e| {
        log::error!("{:?} export failed: {e}", format);
        e
    })?;
    Ok(ExportedFile {
        name: export_file_name(format, date),
        content_type: format.content_type(),
        bytes,
    })
}

/// Exports dated today — the interactive path.
pub fn export(
    record: &ParRecord,
    format: OutputFormat,
    locale: Locale,
) -> Result<ExportedFile, PipelineError> {
    export_with_date(record, format, locale, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pardoc_record::default_record;

    fn named_record() -> ParRecord {
        let mut record = default_record();
        record.project_name = "Network Upgrade".into();
        record
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_export_names_follow_the_convention() {
        let record = named_record();
        for (format, expected) in [
            (OutputFormat::Docx, "Project-Approval-Request-2024-03-09.docx"),
            (OutputFormat::Html, "Project-Approval-Request-2024-03-09.html"),
            (OutputFormat::Json, "Project-Approval-Request-2024-03-09.json"),
        ] {
            let file = export_with_date(&record, format, Locale::En, date()).unwrap();
            assert_eq!(file.name, expected);
            assert!(!file.bytes.is_empty());
        }
    }

    #[test]
    fn test_export_rejects_invalid_record() {
        let record = default_record();
        let err = export_with_date(&record, OutputFormat::Json, Locale::En, date()).unwrap_err();
        assert!(matches!(err, PipelineError::Validation(_)));
    }

    #[test]
    fn test_docx_export_is_a_zip() {
        let file =
            export_with_date(&named_record(), OutputFormat::Docx, Locale::En, date()).unwrap();
        assert_eq!(&file.bytes[0..2], b"PK");
        assert!(file.content_type.contains("wordprocessingml"));
    }

    #[test]
    fn test_html_export_is_a_document() {
        let file =
            export_with_date(&named_record(), OutputFormat::Html, Locale::En, date()).unwrap();
        let html = String::from_utf8(file.bytes).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}

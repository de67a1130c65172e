use crate::error::RenderError;
use chrono::NaiveDate;
use pardoc_idf::Block;
use pardoc_record::ParRecord;
use pardoc_style::Theme;
use pardoc_types::Locale;

/// The three supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Docx,
    Html,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Docx => "docx",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            OutputFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            OutputFormat::Html => "text/html",
            OutputFormat::Json => "application/json",
        }
    }
}

/// `Project-Approval-Request-<ISO date>.<ext>`, the fixed export name.
pub fn export_file_name(format: OutputFormat, date: NaiveDate) -> String {
    format!(
        "Project-Approval-Request-{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// A document renderer. Implementations are pure: same record, blocks,
/// theme, and locale always produce the same bytes.
pub trait DocumentRenderer {
    fn format(&self) -> OutputFormat;

    fn render(
        &self,
        record: &ParRecord,
        blocks: &[Block],
        theme: &Theme,
        locale: Locale,
    ) -> Result<Vec<u8>, RenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(
            export_file_name(OutputFormat::Docx, date),
            "Project-Approval-Request-2024-03-09.docx"
        );
        assert_eq!(
            export_file_name(OutputFormat::Json, date),
            "Project-Approval-Request-2024-03-09.json"
        );
    }

    #[test]
    fn test_content_types() {
        assert_eq!(OutputFormat::Html.content_type(), "text/html");
        assert!(OutputFormat::Docx.content_type().contains("wordprocessingml"));
    }
}

//! Shared fixtures and extraction helpers for the integration tests.

use pardoc::record::{ApprovalSignoff, ParRecord};
use pardoc::{default_record, Locale, OutputFormat};
use chrono::NaiveDate;

pub fn export_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
}

/// `RUST_LOG=debug cargo test` shows the builder and packer traces.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A valid record: the seeded defaults plus a project name.
pub fn named_record() -> ParRecord {
    let mut record = default_record();
    record.project_name = "Network Upgrade".into();
    record
}

/// A record exercising every conditional section.
pub fn full_record() -> ParRecord {
    let mut record = named_record();
    record.approval_decision = Some("Approved with conditions".into());
    record.approval_signoff = Some(ApprovalSignoff {
        approver_name: "Dana Haddad".into(),
        role: "Chief Information Officer".into(),
        sign_date: Some("2024-06-01".into()),
    });
    record.approved_budget_at_board = Some("$2,000,000".into());
    record
}

/// Renders one format and returns its text carrier: the document XML for
/// DOCX, the HTML source for HTML, the JSON text for JSON.
pub fn rendered_text(record: &ParRecord, format: OutputFormat, locale: Locale) -> String {
    init_logging();
    let file = pardoc::export_with_date(record, format, locale, export_date()).unwrap();
    match format {
        OutputFormat::Docx => {
            let xml = pardoc_render_docx::opc::read_part(&file.bytes, "word/document.xml")
                .unwrap()
                .expect("document part present");
            String::from_utf8(xml).unwrap()
        }
        _ => String::from_utf8(file.bytes).unwrap(),
    }
}

/// Asserts that every needle occurs in the haystack in the given order.
pub fn assert_in_order(haystack: &str, needles: &[String], context: &str) {
    let mut at = 0usize;
    for needle in needles {
        match haystack[at..].find(needle.as_str()) {
            Some(idx) => at += idx + needle.len(),
            None => panic!("{context}: expected {needle:?} after byte {at}"),
        }
    }
}

/// XML/HTML-escapes a text stream so it can be searched for inside
/// rendered markup.
pub fn escaped(texts: &[String]) -> Vec<String> {
    texts.iter().map(|t| pardoc_render_html::escape(t)).collect()
}

//! The cross-format consistency property: for a fixed record and locale,
//! the three renderers agree on section titles, table row counts, and
//! textual content, even though their markup differs.

mod common;

use common::{assert_in_order, escaped, full_record, named_record, rendered_text};
use pardoc::idf::visible_text;
use pardoc::{build, Locale, OutputFormat, Theme};

fn section_titles(locale: Locale) -> Vec<String> {
    use pardoc::style::SectionKey;
    [
        SectionKey::ProjectDetails,
        SectionKey::BenefitsImpact,
        SectionKey::RiskAnalysis,
        SectionKey::ContractingApproach,
        SectionKey::EstimatedBudget,
        SectionKey::Timeline,
        SectionKey::RevisionHistory,
        SectionKey::Attachments,
    ]
    .iter()
    .map(|k| k.title(locale).to_string())
    .collect()
}

#[test]
fn document_formats_carry_the_same_text_in_the_same_order() {
    let record = named_record();
    let blocks = build(&record, Locale::En, Theme::builtin());
    let reference = escaped(&visible_text(&blocks));

    for format in [OutputFormat::Docx, OutputFormat::Html] {
        let output = rendered_text(&record, format, Locale::En);
        assert_in_order(&output, &reference, &format!("{format:?}"));
    }
}

#[test]
fn arabic_documents_carry_the_same_text_in_the_same_order() {
    let record = named_record();
    let blocks = build(&record, Locale::Ar, Theme::builtin());
    let reference = escaped(&visible_text(&blocks));

    for format in [OutputFormat::Docx, OutputFormat::Html] {
        let output = rendered_text(&record, format, Locale::Ar);
        assert_in_order(&output, &reference, &format!("{format:?} (ar)"));
    }
}

#[test]
fn section_titles_appear_in_order_in_every_document_format() {
    let record = named_record();
    for locale in [Locale::En, Locale::Ar] {
        let titles = escaped(&section_titles(locale));
        for format in [OutputFormat::Docx, OutputFormat::Html] {
            let output = rendered_text(&record, format, locale);
            assert_in_order(&output, &titles, &format!("{format:?} {}", locale.tag()));
        }
    }
}

#[test]
fn table_row_counts_agree_across_document_formats() {
    let record = full_record();

    // details 5, risks 1+3, budget 2 (estimate + board), timeline 1+4,
    // signoff 3, revisions 1+1.
    let expected_rows = 5 + 4 + 2 + 5 + 3 + 2;

    let docx = rendered_text(&record, OutputFormat::Docx, Locale::En);
    let html = rendered_text(&record, OutputFormat::Html, Locale::En);

    let docx_rows = docx.matches("<w:tr>").count();
    let html_rows = html.matches("<tr>").count();
    assert_eq!(docx_rows, expected_rows);
    assert_eq!(html_rows, expected_rows);
}

#[test]
fn json_format_carries_the_source_fields() {
    let record = named_record();
    let json = rendered_text(&record, OutputFormat::Json, Locale::En);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["projectName"], "Network Upgrade");
    assert_eq!(value["risks"].as_array().unwrap().len(), record.risks.len());
    assert_eq!(value["timeline"].as_array().unwrap().len(), record.timeline.len());
}

#[test]
fn locale_changes_text_but_not_structure() {
    let record = named_record();
    let en = build(&record, Locale::En, Theme::builtin());
    let ar = build(&record, Locale::Ar, Theme::builtin());
    assert_eq!(en.len(), ar.len());
    assert_eq!(visible_text(&en).len(), visible_text(&ar).len());
}

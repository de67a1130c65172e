//! Document model builder: validated record + theme + locale in, ordered
//! block sequence out.
//!
//! Building is total over a validated record. Missing optional data means
//! omitted blocks, never an error, so the renderers downstream can treat
//! the sequence as trusted. Section order is fixed by the theme; the
//! locale only picks localized titles and labels.

use pardoc_idf::{Block, BlockClass, TableBlock, TableColumn, TableLayout, TableRow};
use pardoc_record::defaults::DEFAULT_ABSTRACT;
use pardoc_record::ParRecord;
use pardoc_style::{HeadingLevel, Label, SectionKey, TableKind, Theme};
use pardoc_types::Locale;

/// Builds the complete block sequence for one document.
pub fn build(record: &ParRecord, locale: Locale, theme: &Theme) -> Vec<Block> {
    let mut blocks = Vec::new();

    push_cover(&mut blocks, record, locale);

    blocks.push(Block::PageBreak);
    push_project_details(&mut blocks, record, locale, theme);

    blocks.push(Block::PageBreak);
    push_benefits_impact(&mut blocks, record, locale, theme);

    blocks.push(Block::PageBreak);
    push_risk_analysis(&mut blocks, record, locale, theme);

    blocks.push(Block::PageBreak);
    push_contracting(&mut blocks, record, locale, theme);

    blocks.push(Block::PageBreak);
    push_budget(&mut blocks, record, locale, theme);
    // The timeline shares the budget page.
    push_timeline(&mut blocks, record, locale, theme);

    if let Some(decision) = record.approval_decision_text() {
        blocks.push(Block::PageBreak);
        blocks.push(section_heading(SectionKey::ApprovalDecision, locale, theme));
        blocks.push(Block::paragraph(SectionKey::ApprovalDecision, decision));
    }

    // Signoff rides with the decision rather than opening a page of its own.
    if let Some(signoff) = &record.approval_signoff {
        blocks.push(section_heading(SectionKey::ApprovalSignoff, locale, theme));
        let mut rows = vec![
            TableRow::plain(vec![
                Label::ApproverName.text(locale).to_string(),
                signoff.approver_name.clone(),
            ]),
            TableRow::plain(vec![Label::Role.text(locale).to_string(), signoff.role.clone()]),
        ];
        if let Some(date) = signoff.sign_date.as_deref().filter(|d| !d.trim().is_empty()) {
            rows.push(TableRow::plain(vec![
                Label::SignDate.text(locale).to_string(),
                date.to_string(),
            ]));
        }
        blocks.push(Block::table(
            SectionKey::ApprovalSignoff,
            key_value_table(30, rows),
        ));
    }

    if !record.revisions.is_empty() {
        blocks.push(Block::PageBreak);
        push_revisions(&mut blocks, record, locale, theme);
    }

    if !record.attachments.is_empty() {
        blocks.push(Block::PageBreak);
        push_attachments(&mut blocks, record, locale, theme);
    }

    log::debug!(
        "built {} blocks for locale {} (theme {})",
        blocks.len(),
        locale.tag(),
        theme.version
    );
    blocks
}

fn section_heading(section: SectionKey, locale: Locale, theme: &Theme) -> Block {
    Block::heading(section, HeadingLevel::H2, theme.section_title(section, locale))
}

fn sub_heading(section: SectionKey, locale: Locale, label: Label) -> Block {
    Block::heading(section, HeadingLevel::H3, label.text(locale))
}

fn key_value_table(label_width_pct: u8, rows: Vec<TableRow>) -> TableBlock {
    TableBlock {
        kind: None,
        layout: TableLayout::KeyValue,
        columns: vec![
            TableColumn { key: "label".into(), title: String::new(), width_pct: label_width_pct },
            TableColumn {
                key: "value".into(),
                title: String::new(),
                width_pct: 100 - label_width_pct,
            },
        ],
        rows,
    }
}

fn themed_table(kind: TableKind, locale: Locale, theme: &Theme, rows: Vec<TableRow>) -> TableBlock {
    let columns = theme
        .table_columns(kind, locale)
        .iter()
        .map(|c| TableColumn {
            key: c.key.to_string(),
            title: c.title(locale).to_string(),
            width_pct: c.width_pct,
        })
        .collect();
    TableBlock { kind: Some(kind), layout: TableLayout::Columnar, columns, rows }
}

fn push_cover(blocks: &mut Vec<Block>, record: &ParRecord, locale: Locale) {
    blocks.push(Block::classed_paragraph(
        SectionKey::TitlePage,
        BlockClass::CoverTitle,
        SectionKey::TitlePage.title(locale),
    ));

    let subtitle = if record.project_name.trim().is_empty() {
        Label::FallbackProjectTitle.text(locale).to_string()
    } else {
        record.project_name.clone()
    };
    blocks.push(Block::classed_paragraph(
        SectionKey::TitlePage,
        BlockClass::CoverSubtitle,
        subtitle,
    ));

    blocks.push(Block::classed_paragraph(
        SectionKey::TitlePage,
        BlockClass::AbstractTitle,
        Label::Abstract.text(locale),
    ));

    // Fallback chain: abstract, then background, then the fixed sentence.
    let abstract_text = [record.abstract_text.as_str(), record.background.as_str()]
        .into_iter()
        .find(|s| !s.trim().is_empty())
        .unwrap_or(DEFAULT_ABSTRACT);
    blocks.push(Block::classed_paragraph(
        SectionKey::TitlePage,
        BlockClass::AbstractText,
        abstract_text,
    ));
}

fn push_project_details(blocks: &mut Vec<Block>, record: &ParRecord, locale: Locale, theme: &Theme) {
    let section = SectionKey::ProjectDetails;
    blocks.push(section_heading(section, locale, theme));

    let rows = vec![
        TableRow::plain(vec![
            Label::ProjectName.text(locale).to_string(),
            record.project_name.clone(),
        ]),
        TableRow::plain(vec![
            Label::ProgramName.text(locale).to_string(),
            record.program_name.clone(),
        ]),
        TableRow::plain(vec![
            Label::ProjectDuration.text(locale).to_string(),
            record.project_duration.clone(),
        ]),
        TableRow::plain(vec![
            Label::ExpectedStart.text(locale).to_string(),
            record.expected_start.clone(),
        ]),
        TableRow::plain(vec![
            Label::Priority.text(locale).to_string(),
            record.priority.as_str().to_string(),
        ]),
    ];
    blocks.push(Block::table(section, key_value_table(30, rows)));

    blocks.push(sub_heading(section, locale, Label::Background));
    blocks.push(Block::paragraph(section, record.background.clone()));

    blocks.push(sub_heading(section, locale, Label::ProblemStatement));
    blocks.push(Block::paragraph(section, record.problem_statement.clone()));

    blocks.push(sub_heading(section, locale, Label::Objectives));
    blocks.push(Block::bullets(section, record.objectives.clone()));

    blocks.push(sub_heading(section, locale, Label::InScope));
    blocks.push(Block::bullets(section, record.in_scope.clone()));

    blocks.push(sub_heading(section, locale, Label::OutOfScope));
    blocks.push(Block::bullets(section, record.out_of_scope.clone()));
}

fn push_benefits_impact(blocks: &mut Vec<Block>, record: &ParRecord, locale: Locale, theme: &Theme) {
    let section = SectionKey::BenefitsImpact;
    blocks.push(section_heading(section, locale, theme));

    blocks.push(sub_heading(section, locale, Label::OperationalBenefits));
    blocks.push(Block::bullets(section, record.operational_benefits.clone()));

    blocks.push(sub_heading(section, locale, Label::FinancialImpact));
    blocks.push(Block::bullets(section, record.financial_impact.clone()));

    blocks.push(sub_heading(section, locale, Label::DigitalAlignment));
    blocks.push(Block::bullets(section, record.digital_alignment.clone()));
}

fn push_risk_analysis(blocks: &mut Vec<Block>, record: &ParRecord, locale: Locale, theme: &Theme) {
    let section = SectionKey::RiskAnalysis;
    blocks.push(section_heading(section, locale, theme));

    // Required list: an empty table body still renders the section.
    let rows = record
        .risks
        .iter()
        .map(|risk| {
            TableRow::plain(vec![
                risk.name.clone(),
                risk.description.clone(),
                risk.analysis.clone(),
                risk.likelihood.as_str().to_string(),
                risk.impact.as_str().to_string(),
                risk.response_plan.clone(),
            ])
        })
        .collect();
    blocks.push(Block::table(section, themed_table(TableKind::Risks, locale, theme, rows)));
}

fn push_contracting(blocks: &mut Vec<Block>, record: &ParRecord, locale: Locale, theme: &Theme) {
    let section = SectionKey::ContractingApproach;
    blocks.push(section_heading(section, locale, theme));

    blocks.push(sub_heading(section, locale, Label::GovernanceAlignment));
    blocks.push(Block::bullets(section, record.governance_alignment.clone()));

    blocks.push(sub_heading(section, locale, Label::MarketResearch));
    blocks.push(Block::bullets(section, record.market_research.clone()));

    blocks.push(sub_heading(section, locale, Label::FinalSelection));
    blocks.push(Block::paragraph(section, record.final_selection.clone()));

    if let Some(notes) = record.contracting_notes_text() {
        blocks.push(sub_heading(section, locale, Label::ContractingNotes));
        blocks.push(Block::paragraph(section, notes));
    }
}

fn push_budget(blocks: &mut Vec<Block>, record: &ParRecord, locale: Locale, theme: &Theme) {
    let section = SectionKey::EstimatedBudget;
    blocks.push(section_heading(section, locale, theme));

    let mut rows = vec![TableRow::plain(vec![
        Label::EstimatedBudget.text(locale).to_string(),
        record.estimated_budget.clone(),
    ])];

    // The budget data sources are additive: multi-year breakdown, approved
    // entries, and the legacy board figure can all appear together.
    if record.is_multi_year {
        rows.push(TableRow::plain(vec![
            Label::MultiYearProject.text(locale).to_string(),
            Label::Yes.text(locale).to_string(),
        ]));
        for year in &record.budget_years {
            let amount = match year.description.as_deref().filter(|d| !d.trim().is_empty()) {
                Some(description) => format!("{} - {}", year.amount, description),
                None => year.amount.clone(),
            };
            rows.push(TableRow::plain(vec![
                format!("{} {}", Label::Budget.text(locale), year.year),
                amount,
            ]));
        }
        rows.push(TableRow::strong(vec![
            Label::TotalBudget.text(locale).to_string(),
            record.effective_total_budget(),
        ]));
    }

    for entry in &record.approved_budget_entries {
        rows.push(TableRow::plain(vec![
            format!("{} {} ({})", Label::Approved.text(locale), entry.year, entry.kind.as_str()),
            format!("{} - {}", entry.amount, entry.description),
        ]));
    }

    if let Some(board) = record.approved_budget_at_board_text() {
        rows.push(TableRow::plain(vec![
            Label::ApprovedBudgetAtBoard.text(locale).to_string(),
            board.to_string(),
        ]));
    }

    blocks.push(Block::table(section, key_value_table(50, rows)));
}

fn push_timeline(blocks: &mut Vec<Block>, record: &ParRecord, locale: Locale, theme: &Theme) {
    let section = SectionKey::Timeline;
    blocks.push(section_heading(section, locale, theme));

    let rows = record
        .timeline
        .iter()
        .map(|item| {
            TableRow::plain(vec![
                item.start_date.clone(),
                item.end_date.clone(),
                item.label.clone(),
            ])
        })
        .collect();
    blocks.push(Block::table(section, themed_table(TableKind::Timeline, locale, theme, rows)));
}

fn push_revisions(blocks: &mut Vec<Block>, record: &ParRecord, locale: Locale, theme: &Theme) {
    let section = SectionKey::RevisionHistory;
    blocks.push(section_heading(section, locale, theme));

    let rows = record
        .revisions
        .iter()
        .map(|revision| {
            TableRow::plain(vec![
                revision.version.clone(),
                revision.change.clone(),
                revision.by.clone(),
                revision.change_date.clone(),
            ])
        })
        .collect();
    blocks.push(Block::table(section, themed_table(TableKind::Revisions, locale, theme, rows)));
}

fn push_attachments(blocks: &mut Vec<Block>, record: &ParRecord, locale: Locale, theme: &Theme) {
    let section = SectionKey::Attachments;
    blocks.push(section_heading(section, locale, theme));

    for (i, attachment) in record.attachments.iter().enumerate() {
        blocks.push(Block::classed_paragraph(
            section,
            BlockClass::AttachmentTitle,
            format!("{} {}: {}", Label::Attachment.text(locale), i + 1, attachment.title),
        ));
        if let Some(note) = attachment.note.as_deref().filter(|n| !n.trim().is_empty()) {
            blocks.push(Block::classed_paragraph(section, BlockClass::AttachmentNote, note));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pardoc_record::default_record;
    use pardoc_record::{ApprovalSignoff, ApprovedBudgetEntry, BudgetEntryKind, BudgetYear};

    fn named_record() -> ParRecord {
        let mut record = default_record();
        record.project_name = "Network Upgrade".into();
        record
    }

    fn section_headings(blocks: &[Block]) -> Vec<SectionKey> {
        blocks
            .iter()
            .filter_map(|b| match b {
                Block::Heading { meta, level: HeadingLevel::H2, .. } => meta.section,
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_section_order_is_fixed() {
        let blocks = build(&named_record(), Locale::En, Theme::builtin());
        assert_eq!(
            section_headings(&blocks),
            vec![
                SectionKey::ProjectDetails,
                SectionKey::BenefitsImpact,
                SectionKey::RiskAnalysis,
                SectionKey::ContractingApproach,
                SectionKey::EstimatedBudget,
                SectionKey::Timeline,
                SectionKey::RevisionHistory,
                SectionKey::Attachments,
            ]
        );
    }

    #[test]
    fn test_locale_does_not_change_structure() {
        let record = named_record();
        let en = build(&record, Locale::En, Theme::builtin());
        let ar = build(&record, Locale::Ar, Theme::builtin());
        assert_eq!(en.len(), ar.len());
        let kinds_en: Vec<_> = en.iter().map(|b| b.kind()).collect();
        let kinds_ar: Vec<_> = ar.iter().map(|b| b.kind()).collect();
        assert_eq!(kinds_en, kinds_ar);
    }

    #[test]
    fn test_cover_precedes_first_page_break() {
        let blocks = build(&named_record(), Locale::En, Theme::builtin());
        let first_break = blocks.iter().position(|b| matches!(b, Block::PageBreak)).unwrap();
        assert_eq!(first_break, 4, "cover is title, subtitle, abstract heading, abstract text");
        assert!(matches!(
            &blocks[0],
            Block::Paragraph { meta, .. } if meta.class == Some(BlockClass::CoverTitle)
        ));
    }

    #[test]
    fn test_subtitle_falls_back_when_unnamed() {
        let record = default_record();
        let blocks = build(&record, Locale::En, Theme::builtin());
        match &blocks[1] {
            Block::Paragraph { meta, text } => {
                assert_eq!(meta.class, Some(BlockClass::CoverSubtitle));
                assert_eq!(text, "IT Network & Data Center Design Modernization");
            }
            other => panic!("expected subtitle paragraph, got {}", other.kind()),
        }
    }

    #[test]
    fn test_abstract_fallback_chain() {
        let mut record = named_record();
        record.abstract_text = String::new();
        record.background = "From background".into();
        let blocks = build(&record, Locale::En, Theme::builtin());
        match &blocks[3] {
            Block::Paragraph { text, .. } => assert_eq!(text, "From background"),
            other => panic!("unexpected block {}", other.kind()),
        }

        record.background = String::new();
        let blocks = build(&record, Locale::En, Theme::builtin());
        match &blocks[3] {
            Block::Paragraph { text, .. } => assert_eq!(text, DEFAULT_ABSTRACT),
            other => panic!("unexpected block {}", other.kind()),
        }
    }

    #[test]
    fn test_conditional_sections_absent_by_default() {
        let blocks = build(&named_record(), Locale::En, Theme::builtin());
        let sections = section_headings(&blocks);
        assert!(!sections.contains(&SectionKey::ApprovalDecision));
        assert!(!sections.contains(&SectionKey::ApprovalSignoff));
    }

    #[test]
    fn test_empty_decision_text_omits_section() {
        let mut record = named_record();
        record.approval_decision = Some("   ".into());
        let blocks = build(&record, Locale::En, Theme::builtin());
        assert!(!section_headings(&blocks).contains(&SectionKey::ApprovalDecision));
    }

    #[test]
    fn test_signoff_section_contents() {
        let mut record = named_record();
        record.approval_signoff = Some(ApprovalSignoff {
            approver_name: "Dana".into(),
            role: "CIO".into(),
            sign_date: None,
        });
        let blocks = build(&record, Locale::En, Theme::builtin());
        let signoff_tables: Vec<_> = blocks
            .iter()
            .filter_map(|b| match b {
                Block::Table { meta, table } if meta.section == Some(SectionKey::ApprovalSignoff) => {
                    Some(table)
                }
                _ => None,
            })
            .collect();
        assert_eq!(signoff_tables.len(), 1);
        let table = signoff_tables[0];
        assert_eq!(table.rows.len(), 2, "no sign date row when the date is absent");
        assert_eq!(table.rows[0].cells[1], "Dana");
        assert_eq!(table.rows[1].cells[1], "CIO");

        record.approval_signoff.as_mut().unwrap().sign_date = Some("2024-06-01".into());
        let blocks = build(&record, Locale::En, Theme::builtin());
        let table = blocks
            .iter()
            .find_map(|b| match b {
                Block::Table { meta, table } if meta.section == Some(SectionKey::ApprovalSignoff) => {
                    Some(table)
                }
                _ => None,
            })
            .unwrap();
        assert_eq!(table.rows.len(), 3);
    }

    #[test]
    fn test_budget_rows_are_additive() {
        let mut record = named_record();
        record.is_multi_year = true;
        record.budget_years = vec![
            BudgetYear { year: "2024".into(), amount: "$1,000,000".into(), description: None },
            BudgetYear {
                year: "2025".into(),
                amount: "$1,500,000".into(),
                description: Some("Phase two".into()),
            },
        ];
        record.approved_budget_entries = vec![ApprovedBudgetEntry::new(
            "2024",
            "$800,000",
            BudgetEntryKind::Capex,
            "Core switches",
        )];
        record.approved_budget_at_board = Some("$2,000,000".into());

        let blocks = build(&record, Locale::En, Theme::builtin());
        let table = blocks
            .iter()
            .find_map(|b| match b {
                Block::Table { meta, table }
                    if meta.section == Some(SectionKey::EstimatedBudget) =>
                {
                    Some(table)
                }
                _ => None,
            })
            .unwrap();

        let labels: Vec<&str> = table.rows.iter().map(|r| r.cells[0].as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Estimated Budget",
                "Multi-Year Project",
                "Budget 2024",
                "Budget 2025",
                "Total Budget",
                "Approved 2024 (CAPEX)",
                "Approved Budget at Board",
            ]
        );
        assert_eq!(table.rows[3].cells[1], "$1,500,000 - Phase two");
        let total_row = &table.rows[4];
        assert!(total_row.emphasis);
        assert_eq!(total_row.cells[1], "$2,500,000", "derived from the yearly amounts");
    }

    #[test]
    fn test_single_year_budget_has_one_row() {
        let blocks = build(&named_record(), Locale::En, Theme::builtin());
        let table = blocks
            .iter()
            .find_map(|b| match b {
                Block::Table { meta, table }
                    if meta.section == Some(SectionKey::EstimatedBudget) =>
                {
                    Some(table)
                }
                _ => None,
            })
            .unwrap();
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_empty_required_table_still_renders_section() {
        let mut record = named_record();
        record.risks.clear();
        let blocks = build(&record, Locale::En, Theme::builtin());
        let table = blocks
            .iter()
            .find_map(|b| match b {
                Block::Table { meta, table } if meta.section == Some(SectionKey::RiskAnalysis) => {
                    Some(table)
                }
                _ => None,
            })
            .unwrap();
        assert!(table.rows.is_empty());
        assert_eq!(table.columns.len(), 6);
    }

    #[test]
    fn test_page_breaks_per_major_section() {
        let mut record = named_record();
        record.approval_decision = Some("Approved".into());
        let blocks = build(&record, Locale::En, Theme::builtin());
        let breaks = blocks.iter().filter(|b| matches!(b, Block::PageBreak)).count();
        // cover, benefits, risks, contracting, budget, decision, revisions,
        // attachments
        assert_eq!(breaks, 8);
    }

    #[test]
    fn test_attachment_titles_and_notes() {
        let blocks = build(&named_record(), Locale::En, Theme::builtin());
        let titles: Vec<&str> = blocks
            .iter()
            .filter_map(|b| match b {
                Block::Paragraph { meta, text }
                    if meta.class == Some(BlockClass::AttachmentTitle) =>
                {
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect();
        assert_eq!(titles.len(), 3);
        assert!(titles[0].starts_with("Attachment 1: "));
    }

    #[test]
    fn test_build_is_total_over_sparse_records() {
        // Even a heavily emptied record must build without panicking.
        let mut record = named_record();
        record.objectives.clear();
        record.risks.clear();
        record.timeline.clear();
        record.revisions.clear();
        record.attachments.clear();
        record.budget_years.clear();
        let blocks = build(&record, Locale::Ar, Theme::builtin());
        assert!(!blocks.is_empty());
        let sections = section_headings(&blocks);
        assert!(!sections.contains(&SectionKey::RevisionHistory));
        assert!(!sections.contains(&SectionKey::Attachments));
    }
}

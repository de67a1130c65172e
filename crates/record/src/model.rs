//! Record types, wire-compatible with the JSON interchange format: field
//! names are camelCase and enum variants keep their document spelling.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Priority {
    Strategic,
    High,
    #[default]
    Medium,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Strategic => "Strategic",
            Priority::High => "High",
            Priority::Medium => "Medium",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BudgetEntryKind {
    Capex,
    Opex,
}

impl BudgetEntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetEntryKind::Capex => "CAPEX",
            BudgetEntryKind::Opex => "OPEX",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskItem {
    pub name: String,
    pub description: String,
    pub analysis: String,
    pub likelihood: RiskLevel,
    pub impact: RiskLevel,
    pub response_plan: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    pub start_date: String,
    pub end_date: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionItem {
    pub version: String,
    pub change: String,
    pub by: String,
    pub change_date: String,
}

/// An uploaded file carried as opaque payload plus metadata. The payload is
/// a data URL; nothing in the engine interprets it. Ownership is exclusive
/// to the [`AttachmentRef`] holding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub id: String,
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime: String,
    pub url: String,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            size,
            mime: mime.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentRef {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<UploadedFile>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetYear {
    pub year: String,
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedBudgetEntry {
    pub id: String,
    pub year: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub kind: BudgetEntryKind,
    pub description: String,
}

impl ApprovedBudgetEntry {
    pub fn new(
        year: impl Into<String>,
        amount: impl Into<String>,
        kind: BudgetEntryKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            year: year.into(),
            amount: amount.into(),
            kind,
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalSignoff {
    pub approver_name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_date: Option<String>,
}

/// The whole Project Approval Request. Nested lists and objects are owned
/// by the record; nothing is shared between two records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParRecord {
    // Project details
    pub project_name: String,
    pub program_name: String,
    pub project_duration: String,
    pub expected_start: String,
    pub priority: Priority,
    pub background: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub problem_statement: String,
    pub objectives: Vec<String>,
    pub in_scope: Vec<String>,
    pub out_of_scope: Vec<String>,

    // Benefits & impact
    pub operational_benefits: Vec<String>,
    pub financial_impact: Vec<String>,
    pub digital_alignment: Vec<String>,

    // Risk analysis
    pub risks: Vec<RiskItem>,

    // Contracting approach
    pub governance_alignment: Vec<String>,
    pub market_research: Vec<String>,
    pub final_selection: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contracting_notes: Option<String>,

    // Budget
    pub estimated_budget: String,
    pub is_multi_year: bool,
    pub budget_years: Vec<BudgetYear>,
    pub total_budget: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_budget_at_board: Option<String>,
    pub approved_budget_entries: Vec<ApprovedBudgetEntry>,

    // Timeline; the first item is the overall project span by convention
    pub timeline: Vec<TimelineItem>,

    // Approval
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_decision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_signoff: Option<ApprovalSignoff>,

    // Revision history
    pub revisions: Vec<RevisionItem>,

    // Attachment references
    pub attachments: Vec<AttachmentRef>,
}

impl ParRecord {
    /// The total budget the document shows. When the project is multi-year
    /// and every yearly amount parses as a currency value, the total is
    /// recomputed from `budget_years`; otherwise the stored string stands.
    /// The stored field itself is never rewritten, so serialization stays
    /// an exact round-trip.
    pub fn effective_total_budget(&self) -> String {
        if self.is_multi_year && !self.budget_years.is_empty() {
            let amounts: Vec<Option<f64>> =
                self.budget_years.iter().map(|y| parse_amount(&y.amount)).collect();
            if amounts.iter().all(|a| a.is_some()) {
                let sum: f64 = amounts.into_iter().flatten().sum();
                let prefix = self
                    .budget_years
                    .first()
                    .and_then(|y| currency_prefix(&y.amount))
                    .unwrap_or_default();
                return format_amount(sum, prefix);
            }
        }
        self.total_budget.clone()
    }

    /// Non-empty optional accessor: the original treated empty optional
    /// strings as absent, and conditional sections follow the same rule.
    pub fn approval_decision_text(&self) -> Option<&str> {
        self.approval_decision.as_deref().filter(|s| !s.trim().is_empty())
    }

    pub fn approved_budget_at_board_text(&self) -> Option<&str> {
        self.approved_budget_at_board.as_deref().filter(|s| !s.trim().is_empty())
    }

    pub fn contracting_notes_text(&self) -> Option<&str> {
        self.contracting_notes.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Parses a currency string like `"$2,500,000"` or `"1 200"` into a number.
/// Returns `None` when no digits survive the stripping.
pub fn parse_amount(s: &str) -> Option<f64> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

fn currency_prefix(s: &str) -> Option<String> {
    let prefix: String = s
        .trim()
        .chars()
        .take_while(|c| !c.is_ascii_digit())
        .collect();
    let prefix = prefix.trim().to_string();
    if prefix.is_empty() { None } else { Some(prefix) }
}

/// Formats an amount with thousands separators, keeping the currency
/// prefix of the source values (e.g. `"$"`).
pub fn format_amount(value: f64, prefix: impl AsRef<str>) -> String {
    let whole = value.trunc() as i64;
    let mut digits = whole.abs().to_string();
    let mut grouped = String::new();
    while digits.len() > 3 {
        let split = digits.len() - 3;
        grouped = format!(",{}{}", &digits[split..], grouped);
        digits.truncate(split);
    }
    grouped = format!("{}{}", digits, grouped);

    let frac = value.fract().abs();
    let body = if frac > f64::EPSILON {
        format!("{}.{:02}", grouped, (frac * 100.0).round() as u32)
    } else {
        grouped
    };
    let sign = if whole < 0 { "-" } else { "" };
    format!("{}{}{}", sign, prefix.as_ref(), body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_record;

    #[test]
    fn test_parse_amount_strips_currency_noise() {
        assert_eq!(parse_amount("$2,500,000"), Some(2_500_000.0));
        assert_eq!(parse_amount("1 200"), Some(1200.0));
        assert_eq!(parse_amount("TBD"), None);
    }

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(2_500_000.0, "$"), "$2,500,000");
        assert_eq!(format_amount(950.0, ""), "950");
    }

    #[test]
    fn test_effective_total_single_year_uses_stored_value() {
        let record = default_record();
        assert!(!record.is_multi_year);
        assert_eq!(record.effective_total_budget(), record.total_budget);
    }

    #[test]
    fn test_effective_total_multi_year_is_derived() {
        let mut record = default_record();
        record.is_multi_year = true;
        record.budget_years = vec![
            BudgetYear { year: "2024".into(), amount: "$1,000,000".into(), description: None },
            BudgetYear { year: "2025".into(), amount: "$500,000".into(), description: None },
        ];
        record.total_budget = "$999".into();
        assert_eq!(record.effective_total_budget(), "$1,500,000");
    }

    #[test]
    fn test_effective_total_falls_back_on_unparseable_amount() {
        let mut record = default_record();
        record.is_multi_year = true;
        record.budget_years = vec![BudgetYear {
            year: "2024".into(),
            amount: "TBD".into(),
            description: None,
        }];
        record.total_budget = "$2,500,000".into();
        assert_eq!(record.effective_total_budget(), "$2,500,000");
    }

    #[test]
    fn test_empty_optional_strings_read_as_absent() {
        let mut record = default_record();
        record.approval_decision = Some(String::new());
        assert_eq!(record.approval_decision_text(), None);
        record.approval_decision = Some("Approved".into());
        assert_eq!(record.approval_decision_text(), Some("Approved"));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = ApprovedBudgetEntry::new("2024", "$1", BudgetEntryKind::Capex, "x");
        let b = ApprovedBudgetEntry::new("2024", "$1", BudgetEntryKind::Capex, "x");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_wire_field_names() {
        let record = default_record();
        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("projectName"));
        assert!(obj.contains_key("abstract"));
        assert!(obj.contains_key("isMultiYear"));
        assert!(!obj.contains_key("approvalSignoff"), "absent optional must be omitted");
    }
}

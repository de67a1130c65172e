//! Typed record updates.
//!
//! The original UI merged arbitrary `{ field: value }` maps into the
//! record. [`ParPatch`] replaces that with one variant per field, so a
//! misspelled field name is a compile error and every mutation is visible
//! at the call site.

use crate::model::{
    ApprovalSignoff, ApprovedBudgetEntry, AttachmentRef, BudgetYear, ParRecord, Priority,
    RevisionItem, RiskItem, TimelineItem,
};

#[derive(Debug, Clone, PartialEq)]
pub enum ParPatch {
    ProjectName(String),
    ProgramName(String),
    ProjectDuration(String),
    ExpectedStart(String),
    Priority(Priority),
    Background(String),
    Abstract(String),
    ProblemStatement(String),
    Objectives(Vec<String>),
    InScope(Vec<String>),
    OutOfScope(Vec<String>),
    OperationalBenefits(Vec<String>),
    FinancialImpact(Vec<String>),
    DigitalAlignment(Vec<String>),
    Risks(Vec<RiskItem>),
    GovernanceAlignment(Vec<String>),
    MarketResearch(Vec<String>),
    FinalSelection(String),
    ContractingNotes(Option<String>),
    EstimatedBudget(String),
    IsMultiYear(bool),
    BudgetYears(Vec<BudgetYear>),
    TotalBudget(String),
    ApprovedBudgetAtBoard(Option<String>),
    ApprovedBudgetEntries(Vec<ApprovedBudgetEntry>),
    Timeline(Vec<TimelineItem>),
    ApprovalDecision(Option<String>),
    ApprovalSignoff(Option<ApprovalSignoff>),
    Revisions(Vec<RevisionItem>),
    Attachments(Vec<AttachmentRef>),
}

impl ParPatch {
    pub fn apply(self, record: &mut ParRecord) {
        match self {
            ParPatch::ProjectName(v) => record.project_name = v,
            ParPatch::ProgramName(v) => record.program_name = v,
            ParPatch::ProjectDuration(v) => record.project_duration = v,
            ParPatch::ExpectedStart(v) => record.expected_start = v,
            ParPatch::Priority(v) => record.priority = v,
            ParPatch::Background(v) => record.background = v,
            ParPatch::Abstract(v) => record.abstract_text = v,
            ParPatch::ProblemStatement(v) => record.problem_statement = v,
            ParPatch::Objectives(v) => record.objectives = v,
            ParPatch::InScope(v) => record.in_scope = v,
            ParPatch::OutOfScope(v) => record.out_of_scope = v,
            ParPatch::OperationalBenefits(v) => record.operational_benefits = v,
            ParPatch::FinancialImpact(v) => record.financial_impact = v,
            ParPatch::DigitalAlignment(v) => record.digital_alignment = v,
            ParPatch::Risks(v) => record.risks = v,
            ParPatch::GovernanceAlignment(v) => record.governance_alignment = v,
            ParPatch::MarketResearch(v) => record.market_research = v,
            ParPatch::FinalSelection(v) => record.final_selection = v,
            ParPatch::ContractingNotes(v) => record.contracting_notes = v,
            ParPatch::EstimatedBudget(v) => record.estimated_budget = v,
            ParPatch::IsMultiYear(v) => record.is_multi_year = v,
            ParPatch::BudgetYears(v) => record.budget_years = v,
            ParPatch::TotalBudget(v) => record.total_budget = v,
            ParPatch::ApprovedBudgetAtBoard(v) => record.approved_budget_at_board = v,
            ParPatch::ApprovedBudgetEntries(v) => record.approved_budget_entries = v,
            ParPatch::Timeline(v) => record.timeline = v,
            ParPatch::ApprovalDecision(v) => record.approval_decision = v,
            ParPatch::ApprovalSignoff(v) => record.approval_signoff = v,
            ParPatch::Revisions(v) => record.revisions = v,
            ParPatch::Attachments(v) => record.attachments = v,
        }
    }
}

/// Moves the item at `from` so it lands at `to`, preserving the relative
/// order of everything else. Out-of-range indices leave the list untouched
/// and return `false`. This is the whole contract a drag-and-drop front
/// end needs; no UI library types leak in here.
pub fn reorder<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() {
        return false;
    }
    if from == to {
        return true;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_record;

    #[test]
    fn test_patch_sets_scalar_field() {
        let mut record = default_record();
        ParPatch::ProjectName("Network Upgrade".into()).apply(&mut record);
        assert_eq!(record.project_name, "Network Upgrade");
    }

    #[test]
    fn test_patch_replaces_list() {
        let mut record = default_record();
        ParPatch::Objectives(vec!["Only one".into()]).apply(&mut record);
        assert_eq!(record.objectives, vec!["Only one".to_string()]);
    }

    #[test]
    fn test_patch_clears_optional() {
        let mut record = default_record();
        record.approval_decision = Some("Approved".into());
        ParPatch::ApprovalDecision(None).apply(&mut record);
        assert!(record.approval_decision.is_none());
    }

    #[test]
    fn test_reorder_moves_forward_and_backward() {
        let mut items = vec!["a", "b", "c", "d"];
        assert!(reorder(&mut items, 0, 2));
        assert_eq!(items, vec!["b", "c", "a", "d"]);
        assert!(reorder(&mut items, 2, 0));
        assert_eq!(items, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_reorder_out_of_range_is_a_no_op() {
        let mut items = vec![1, 2, 3];
        assert!(!reorder(&mut items, 5, 0));
        assert!(!reorder(&mut items, 0, 3));
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_reorder_same_index() {
        let mut items = vec![1, 2];
        assert!(reorder(&mut items, 1, 1));
        assert_eq!(items, vec![1, 2]);
    }
}

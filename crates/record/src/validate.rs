//! Record validation.
//!
//! Two layers share one issue type: [`validate_value`] walks raw JSON and
//! checks structure (required keys, types, closed enum sets) before the
//! typed record exists, and [`validate`] checks content rules (non-empty
//! strings, minimum list lengths) on a typed record. Import runs both;
//! form-edit merges only need the second. Every issue is addressed by a
//! dotted field path such as `risks.0.likelihood`.

use crate::model::ParRecord;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

#[derive(Error, Debug)]
#[error("record validation failed with {} issue(s)", .issues.len())]
pub struct ValidationErrors {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    /// One `path: message` line per issue, for user-facing display.
    pub fn lines(&self) -> Vec<String> {
        self.issues
            .iter()
            .map(|i| {
                if i.path.is_empty() {
                    i.message.clone()
                } else {
                    format!("{}: {}", i.path, i.message)
                }
            })
            .collect()
    }

    pub fn mentions(&self, path: &str) -> bool {
        self.issues.iter().any(|i| i.path == path || i.path.starts_with(&format!("{path}.")))
    }
}

fn push(issues: &mut Vec<ValidationIssue>, path: impl Into<String>, message: impl Into<String>) {
    issues.push(ValidationIssue { path: path.into(), message: message.into() });
}

// --- Structural layer -------------------------------------------------------

const PRIORITY_VALUES: [&str; 3] = ["Strategic", "High", "Medium"];
const RISK_LEVEL_VALUES: [&str; 3] = ["Low", "Medium", "High"];
const BUDGET_KIND_VALUES: [&str; 2] = ["CAPEX", "OPEX"];

fn require_str(issues: &mut Vec<ValidationIssue>, obj: &Map<String, Value>, path: &str, key: &str) {
    match obj.get(key) {
        None | Some(Value::Null) => push(issues, join(path, key), "Required"),
        Some(Value::String(_)) => {}
        Some(_) => push(issues, join(path, key), "Expected a string"),
    }
}

fn optional_str(issues: &mut Vec<ValidationIssue>, obj: &Map<String, Value>, path: &str, key: &str) {
    if let Some(v) = obj.get(key) {
        if !matches!(v, Value::String(_) | Value::Null) {
            push(issues, join(path, key), "Expected a string");
        }
    }
}

fn require_bool(issues: &mut Vec<ValidationIssue>, obj: &Map<String, Value>, path: &str, key: &str) {
    match obj.get(key) {
        None | Some(Value::Null) => push(issues, join(path, key), "Required"),
        Some(Value::Bool(_)) => {}
        Some(_) => push(issues, join(path, key), "Expected a boolean"),
    }
}

fn require_enum(
    issues: &mut Vec<ValidationIssue>,
    obj: &Map<String, Value>,
    path: &str,
    key: &str,
    allowed: &[&str],
) {
    match obj.get(key) {
        None | Some(Value::Null) => push(issues, join(path, key), "Required"),
        Some(Value::String(s)) if allowed.contains(&s.as_str()) => {}
        Some(_) => push(
            issues,
            join(path, key),
            format!("Invalid enum value, expected one of: {}", allowed.join(", ")),
        ),
    }
}

/// Returns the array items, or records an issue and returns an empty slice.
fn require_array<'v>(
    issues: &mut Vec<ValidationIssue>,
    obj: &'v Map<String, Value>,
    path: &str,
    key: &str,
) -> &'v [Value] {
    match obj.get(key) {
        None | Some(Value::Null) => {
            push(issues, join(path, key), "Required");
            &[]
        }
        Some(Value::Array(items)) => items,
        Some(_) => {
            push(issues, join(path, key), "Expected an array");
            &[]
        }
    }
}

fn require_str_items(issues: &mut Vec<ValidationIssue>, items: &[Value], path: &str) {
    for (i, item) in items.iter().enumerate() {
        if !matches!(item, Value::String(_)) {
            push(issues, format!("{path}.{i}"), "Expected a string");
        }
    }
}

/// Returns the item as an object, or records an issue.
fn item_object<'v>(
    issues: &mut Vec<ValidationIssue>,
    item: &'v Value,
    path: &str,
) -> Option<&'v Map<String, Value>> {
    match item {
        Value::Object(obj) => Some(obj),
        _ => {
            push(issues, path, "Expected an object");
            None
        }
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() { key.to_string() } else { format!("{path}.{key}") }
}

fn check_structure(root: &Value) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let Some(obj) = root.as_object() else {
        push(&mut issues, "", "Expected an object");
        return issues;
    };

    for key in [
        "projectName",
        "programName",
        "projectDuration",
        "expectedStart",
        "background",
        "abstract",
        "problemStatement",
        "finalSelection",
        "estimatedBudget",
        "totalBudget",
    ] {
        require_str(&mut issues, obj, "", key);
    }
    require_enum(&mut issues, obj, "", "priority", &PRIORITY_VALUES);
    require_bool(&mut issues, obj, "", "isMultiYear");
    for key in ["contractingNotes", "approvedBudgetAtBoard", "approvalDecision"] {
        optional_str(&mut issues, obj, "", key);
    }

    for key in [
        "objectives",
        "inScope",
        "outOfScope",
        "operationalBenefits",
        "financialImpact",
        "digitalAlignment",
        "governanceAlignment",
        "marketResearch",
    ] {
        let items = require_array(&mut issues, obj, "", key);
        require_str_items(&mut issues, items, key);
    }

    for (i, item) in require_array(&mut issues, obj, "", "risks").iter().enumerate() {
        let path = format!("risks.{i}");
        if let Some(risk) = item_object(&mut issues, item, &path) {
            for key in ["name", "description", "analysis", "responsePlan"] {
                require_str(&mut issues, risk, &path, key);
            }
            require_enum(&mut issues, risk, &path, "likelihood", &RISK_LEVEL_VALUES);
            require_enum(&mut issues, risk, &path, "impact", &RISK_LEVEL_VALUES);
        }
    }

    for (i, item) in require_array(&mut issues, obj, "", "budgetYears").iter().enumerate() {
        let path = format!("budgetYears.{i}");
        if let Some(year) = item_object(&mut issues, item, &path) {
            require_str(&mut issues, year, &path, "year");
            require_str(&mut issues, year, &path, "amount");
            optional_str(&mut issues, year, &path, "description");
        }
    }

    for (i, item) in require_array(&mut issues, obj, "", "approvedBudgetEntries")
        .iter()
        .enumerate()
    {
        let path = format!("approvedBudgetEntries.{i}");
        if let Some(entry) = item_object(&mut issues, item, &path) {
            for key in ["id", "year", "amount", "description"] {
                require_str(&mut issues, entry, &path, key);
            }
            require_enum(&mut issues, entry, &path, "type", &BUDGET_KIND_VALUES);
        }
    }

    for (i, item) in require_array(&mut issues, obj, "", "timeline").iter().enumerate() {
        let path = format!("timeline.{i}");
        if let Some(entry) = item_object(&mut issues, item, &path) {
            for key in ["startDate", "endDate", "label"] {
                require_str(&mut issues, entry, &path, key);
            }
        }
    }

    for (i, item) in require_array(&mut issues, obj, "", "revisions").iter().enumerate() {
        let path = format!("revisions.{i}");
        if let Some(entry) = item_object(&mut issues, item, &path) {
            for key in ["version", "change", "by", "changeDate"] {
                require_str(&mut issues, entry, &path, key);
            }
        }
    }

    for (i, item) in require_array(&mut issues, obj, "", "attachments").iter().enumerate() {
        let path = format!("attachments.{i}");
        if let Some(entry) = item_object(&mut issues, item, &path) {
            require_str(&mut issues, entry, &path, "title");
            optional_str(&mut issues, entry, &path, "note");
            if let Some(files) = entry.get("files").filter(|v| !v.is_null()) {
                match files {
                    Value::Array(files) => {
                        for (j, file) in files.iter().enumerate() {
                            let path = format!("{path}.files.{j}");
                            if let Some(file) = item_object(&mut issues, file, &path) {
                                for key in ["id", "name", "type", "url"] {
                                    require_str(&mut issues, file, &path, key);
                                }
                                match file.get("size") {
                                    None | Some(Value::Null) => {
                                        push(&mut issues, join(&path, "size"), "Required")
                                    }
                                    Some(Value::Number(_)) => {}
                                    Some(_) => push(
                                        &mut issues,
                                        join(&path, "size"),
                                        "Expected a number",
                                    ),
                                }
                            }
                        }
                    }
                    _ => push(&mut issues, join(&path, "files"), "Expected an array"),
                }
            }
        }
    }

    if let Some(signoff) = obj.get("approvalSignoff").filter(|v| !v.is_null()) {
        if let Some(signoff) = item_object(&mut issues, signoff, "approvalSignoff") {
            require_str(&mut issues, signoff, "approvalSignoff", "approverName");
            require_str(&mut issues, signoff, "approvalSignoff", "role");
            optional_str(&mut issues, signoff, "approvalSignoff", "signDate");
        }
    }

    issues
}

// --- Content layer ----------------------------------------------------------

fn require_filled(issues: &mut Vec<ValidationIssue>, path: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        push(issues, path, message);
    }
}

fn require_filled_list(
    issues: &mut Vec<ValidationIssue>,
    path: &str,
    items: &[String],
    empty_message: &str,
    item_message: &str,
) {
    if items.is_empty() {
        push(issues, path, empty_message);
    }
    for (i, item) in items.iter().enumerate() {
        if item.trim().is_empty() {
            push(issues, format!("{path}.{i}"), item_message);
        }
    }
}

/// Content rules over a typed record. Total over any `ParRecord`.
pub fn validate(record: &ParRecord) -> Result<(), ValidationErrors> {
    let mut issues = Vec::new();

    require_filled(&mut issues, "projectName", &record.project_name, "Project name is required");
    require_filled(&mut issues, "programName", &record.program_name, "Program name is required");
    require_filled(
        &mut issues,
        "projectDuration",
        &record.project_duration,
        "Project duration is required",
    );
    require_filled(&mut issues, "expectedStart", &record.expected_start, "Expected start is required");
    require_filled(&mut issues, "background", &record.background, "Background is required");
    require_filled(&mut issues, "abstract", &record.abstract_text, "Abstract is required");
    require_filled(
        &mut issues,
        "problemStatement",
        &record.problem_statement,
        "Problem statement is required",
    );

    require_filled_list(
        &mut issues,
        "objectives",
        &record.objectives,
        "At least one objective is required",
        "Objective cannot be empty",
    );
    require_filled_list(
        &mut issues,
        "inScope",
        &record.in_scope,
        "At least one in-scope item is required",
        "In-scope item cannot be empty",
    );
    require_filled_list(
        &mut issues,
        "outOfScope",
        &record.out_of_scope,
        "At least one out-of-scope item is required",
        "Out-of-scope item cannot be empty",
    );
    require_filled_list(
        &mut issues,
        "operationalBenefits",
        &record.operational_benefits,
        "At least one operational benefit is required",
        "Benefit cannot be empty",
    );
    require_filled_list(
        &mut issues,
        "financialImpact",
        &record.financial_impact,
        "At least one financial impact is required",
        "Impact cannot be empty",
    );
    require_filled_list(
        &mut issues,
        "digitalAlignment",
        &record.digital_alignment,
        "At least one digital alignment is required",
        "Alignment cannot be empty",
    );
    require_filled_list(
        &mut issues,
        "governanceAlignment",
        &record.governance_alignment,
        "At least one governance alignment is required",
        "Alignment cannot be empty",
    );
    require_filled_list(
        &mut issues,
        "marketResearch",
        &record.market_research,
        "At least one market research item is required",
        "Research item cannot be empty",
    );

    if record.risks.is_empty() {
        push(&mut issues, "risks", "At least one risk is required");
    }
    for (i, risk) in record.risks.iter().enumerate() {
        require_filled(&mut issues, &format!("risks.{i}.name"), &risk.name, "Risk name is required");
        require_filled(
            &mut issues,
            &format!("risks.{i}.description"),
            &risk.description,
            "Risk description is required",
        );
        require_filled(
            &mut issues,
            &format!("risks.{i}.analysis"),
            &risk.analysis,
            "Risk analysis is required",
        );
        require_filled(
            &mut issues,
            &format!("risks.{i}.responsePlan"),
            &risk.response_plan,
            "Response plan is required",
        );
    }

    require_filled(
        &mut issues,
        "finalSelection",
        &record.final_selection,
        "Final selection is required",
    );
    require_filled(
        &mut issues,
        "estimatedBudget",
        &record.estimated_budget,
        "Estimated budget is required",
    );

    for (i, year) in record.budget_years.iter().enumerate() {
        require_filled(&mut issues, &format!("budgetYears.{i}.year"), &year.year, "Year is required");
        require_filled(
            &mut issues,
            &format!("budgetYears.{i}.amount"),
            &year.amount,
            "Amount is required",
        );
    }
    for (i, entry) in record.approved_budget_entries.iter().enumerate() {
        require_filled(
            &mut issues,
            &format!("approvedBudgetEntries.{i}.year"),
            &entry.year,
            "Year is required",
        );
        require_filled(
            &mut issues,
            &format!("approvedBudgetEntries.{i}.amount"),
            &entry.amount,
            "Amount is required",
        );
        require_filled(
            &mut issues,
            &format!("approvedBudgetEntries.{i}.description"),
            &entry.description,
            "Description is required",
        );
    }

    if record.timeline.is_empty() {
        push(&mut issues, "timeline", "At least one timeline item is required");
    }
    for (i, item) in record.timeline.iter().enumerate() {
        require_filled(
            &mut issues,
            &format!("timeline.{i}.startDate"),
            &item.start_date,
            "Start date is required",
        );
        require_filled(
            &mut issues,
            &format!("timeline.{i}.endDate"),
            &item.end_date,
            "End date is required",
        );
        require_filled(&mut issues, &format!("timeline.{i}.label"), &item.label, "Label is required");
    }

    if let Some(signoff) = &record.approval_signoff {
        require_filled(
            &mut issues,
            "approvalSignoff.approverName",
            &signoff.approver_name,
            "Approver name is required",
        );
        require_filled(&mut issues, "approvalSignoff.role", &signoff.role, "Role is required");
    }

    for (i, revision) in record.revisions.iter().enumerate() {
        require_filled(
            &mut issues,
            &format!("revisions.{i}.version"),
            &revision.version,
            "Version is required",
        );
        require_filled(
            &mut issues,
            &format!("revisions.{i}.change"),
            &revision.change,
            "Change description is required",
        );
        require_filled(&mut issues, &format!("revisions.{i}.by"), &revision.by, "Changed by is required");
        require_filled(
            &mut issues,
            &format!("revisions.{i}.changeDate"),
            &revision.change_date,
            "Change date is required",
        );
    }

    for (i, attachment) in record.attachments.iter().enumerate() {
        require_filled(
            &mut issues,
            &format!("attachments.{i}.title"),
            &attachment.title,
            "Title is required",
        );
    }

    if issues.is_empty() { Ok(()) } else { Err(ValidationErrors { issues }) }
}

/// Full validation of untrusted input: structure first, then content.
/// All-or-nothing — the typed record is produced only when both layers
/// pass, so a failed import can never leave a half-checked record behind.
pub fn validate_value(raw: &Value) -> Result<ParRecord, ValidationErrors> {
    let issues = check_structure(raw);
    if !issues.is_empty() {
        return Err(ValidationErrors { issues });
    }

    let record: ParRecord = serde_json::from_value(raw.clone()).map_err(|e| ValidationErrors {
        issues: vec![ValidationIssue { path: String::new(), message: e.to_string() }],
    })?;

    validate(&record)?;
    Ok(record)
}

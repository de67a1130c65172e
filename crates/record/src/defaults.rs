//! The seeded record a fresh session starts from. Every required field
//! except the project name is non-empty, so a new draft renders a complete
//! document immediately and validation points at exactly one gap.

use crate::model::{
    AttachmentRef, BudgetYear, ParRecord, Priority, RevisionItem, RiskItem, RiskLevel,
    TimelineItem,
};
use chrono::Local;

pub const DEFAULT_ABSTRACT: &str = "This document outlines the approval request for conducting a comprehensive assessment of network and data centers to modernize and optimize the infrastructure for future needs.";

pub fn default_record() -> ParRecord {
    let today = Local::now().date_naive();

    ParRecord {
        project_name: String::new(),
        program_name: "Infrastructure Modernization Program".into(),
        project_duration: "12 months".into(),
        expected_start: today.format("%Y-%m-%d").to_string(),
        priority: Priority::Medium,
        background: "The existing network and data center estate has grown organically and no longer matches current capacity, security, and resilience requirements.".into(),
        abstract_text: DEFAULT_ABSTRACT.into(),
        problem_statement: "Aging infrastructure limits scalability, increases operating risk, and blocks adoption of modern platform services.".into(),
        objectives: vec![
            "Evaluate network design and identify areas for improvement".into(),
            "Identify aging equipment and infrastructure components".into(),
            "Optimize space, power, and cooling requirements".into(),
            "Propose roadmap and costs for modernization".into(),
            "Develop warehouse network design and implementation plan".into(),
        ],
        in_scope: vec![
            "Network infrastructure assessment and design".into(),
            "Data center modernization planning".into(),
            "Equipment lifecycle analysis".into(),
            "Cost-benefit analysis".into(),
            "Implementation roadmap development".into(),
        ],
        out_of_scope: vec![
            "Actual equipment procurement".into(),
            "Physical infrastructure changes".into(),
            "Staff training and change management".into(),
            "Ongoing maintenance and support".into(),
        ],
        operational_benefits: vec![
            "Improved network performance and reliability".into(),
            "Enhanced security posture and compliance".into(),
            "Reduced operational overhead and maintenance costs".into(),
            "Better scalability for future growth".into(),
            "Streamlined IT operations and management".into(),
        ],
        financial_impact: vec![
            "Reduced total cost of ownership (TCO)".into(),
            "Lower energy consumption and utility costs".into(),
            "Decreased downtime and associated losses".into(),
            "Improved ROI on IT investments".into(),
            "Cost avoidance through proactive maintenance".into(),
        ],
        digital_alignment: vec![
            "Supports digital transformation initiatives".into(),
            "Enables cloud-first strategy implementation".into(),
            "Facilitates remote work capabilities".into(),
            "Aligns with cybersecurity best practices".into(),
            "Supports data analytics and AI initiatives".into(),
        ],
        risks: vec![
            RiskItem {
                name: "Budget Overrun".into(),
                description: "Project costs may exceed initial estimates due to unforeseen technical challenges".into(),
                analysis: "Medium likelihood with high impact on project timeline and budget".into(),
                likelihood: RiskLevel::Medium,
                impact: RiskLevel::High,
                response_plan: "Implement strict budget controls, regular cost reviews, and contingency planning".into(),
            },
            RiskItem {
                name: "Technical Complexity".into(),
                description: "Integration challenges with existing legacy systems".into(),
                analysis: "High likelihood with medium impact on implementation timeline".into(),
                likelihood: RiskLevel::High,
                impact: RiskLevel::Medium,
                response_plan: "Conduct thorough technical assessments and phased implementation approach".into(),
            },
            RiskItem {
                name: "Resource Availability".into(),
                description: "Key technical resources may not be available when needed".into(),
                analysis: "Low likelihood with high impact on project delivery".into(),
                likelihood: RiskLevel::Low,
                impact: RiskLevel::High,
                response_plan: "Secure resource commitments early and maintain backup resource plans".into(),
            },
        ],
        governance_alignment: vec![
            "Follows established procurement policies and procedures".into(),
            "Aligns with IT governance framework and standards".into(),
            "Ensures compliance with regulatory requirements".into(),
            "Maintains transparency and accountability".into(),
            "Supports strategic business objectives".into(),
        ],
        market_research: vec![
            "Evaluated leading network equipment vendors".into(),
            "Assessed cloud service provider capabilities".into(),
            "Analyzed industry best practices and benchmarks".into(),
            "Reviewed similar implementations in peer organizations".into(),
            "Considered total cost of ownership and lifecycle costs".into(),
        ],
        final_selection: "Selected vendor based on technical capability, cost-effectiveness, and proven track record in similar implementations. The chosen solution offers the best balance of performance, scalability, and long-term support.".into(),
        contracting_notes: Some("Contract includes performance guarantees, service level agreements, and clear escalation procedures.".into()),
        estimated_budget: "$2,500,000".into(),
        is_multi_year: false,
        budget_years: vec![BudgetYear {
            year: today.format("%Y").to_string(),
            amount: "$2,500,000".into(),
            description: Some("Initial project budget".into()),
        }],
        total_budget: "$2,500,000".into(),
        approved_budget_at_board: None,
        approved_budget_entries: Vec::new(),
        timeline: vec![
            TimelineItem {
                start_date: "2024-01-01".into(),
                end_date: "2024-12-31".into(),
                label: "Overall Project Duration".into(),
            },
            TimelineItem {
                start_date: "2024-01-01".into(),
                end_date: "2024-03-31".into(),
                label: "S1: Validation & Planning".into(),
            },
            TimelineItem {
                start_date: "2024-04-01".into(),
                end_date: "2024-08-31".into(),
                label: "S2: Design & Procurement".into(),
            },
            TimelineItem {
                start_date: "2024-09-01".into(),
                end_date: "2024-12-31".into(),
                label: "S3: Implementation & Testing".into(),
            },
        ],
        approval_decision: None,
        approval_signoff: None,
        revisions: vec![RevisionItem {
            version: "1.0".into(),
            change: "Initial version".into(),
            by: "Project Team".into(),
            change_date: today.format("%Y-%m-%d").to_string(),
        }],
        attachments: vec![
            AttachmentRef {
                title: "Attachment 1 – Vendor Evaluation Matrix".into(),
                note: Some("Detailed comparison of potential vendors and solutions".into()),
                files: Some(Vec::new()),
            },
            AttachmentRef {
                title: "Attachment 2 – Technical Architecture Diagram".into(),
                note: Some("High-level system architecture and integration points".into()),
                files: Some(Vec::new()),
            },
            AttachmentRef {
                title: "Attachment 3 – Cost-Benefit Analysis".into(),
                note: Some("Detailed financial analysis and ROI projections".into()),
                files: Some(Vec::new()),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_project_name_is_seeded_empty() {
        let record = default_record();
        assert!(record.project_name.is_empty());
        assert!(!record.program_name.is_empty());
        assert!(!record.background.is_empty());
        assert!(!record.problem_statement.is_empty());
        assert_eq!(record.objectives.len(), 5);
        assert_eq!(record.risks.len(), 3);
        assert_eq!(record.timeline.len(), 4);
    }

    #[test]
    fn test_conditional_sections_start_absent() {
        let record = default_record();
        assert!(record.approval_decision.is_none());
        assert!(record.approval_signoff.is_none());
        assert!(record.approved_budget_at_board.is_none());
    }

    #[test]
    fn test_expected_start_is_iso_date() {
        let record = default_record();
        assert_eq!(record.expected_start.len(), 10);
        assert!(record.expected_start.chars().nth(4) == Some('-'));
    }
}

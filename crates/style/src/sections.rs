use pardoc_types::Locale;

/// The eleven fixed document sections, in template order. Locale never
/// changes this order; the last four only appear when their data exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKey {
    TitlePage,
    ProjectDetails,
    BenefitsImpact,
    RiskAnalysis,
    ContractingApproach,
    EstimatedBudget,
    Timeline,
    ApprovalDecision,
    ApprovalSignoff,
    RevisionHistory,
    Attachments,
}

pub const SECTION_ORDER: [SectionKey; 11] = [
    SectionKey::TitlePage,
    SectionKey::ProjectDetails,
    SectionKey::BenefitsImpact,
    SectionKey::RiskAnalysis,
    SectionKey::ContractingApproach,
    SectionKey::EstimatedBudget,
    SectionKey::Timeline,
    SectionKey::ApprovalDecision,
    SectionKey::ApprovalSignoff,
    SectionKey::RevisionHistory,
    SectionKey::Attachments,
];

impl SectionKey {
    pub fn title(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (SectionKey::TitlePage, Locale::En) => "Project Approval Request",
            (SectionKey::TitlePage, Locale::Ar) => "طلب اعتماد مشروع",
            (SectionKey::ProjectDetails, Locale::En) => "Project Details",
            (SectionKey::ProjectDetails, Locale::Ar) => "تفاصيل المشروع",
            (SectionKey::BenefitsImpact, Locale::En) => "Benefits & Impact Analysis",
            (SectionKey::BenefitsImpact, Locale::Ar) => "الفوائد والأثر",
            (SectionKey::RiskAnalysis, Locale::En) => "Risk Analysis",
            (SectionKey::RiskAnalysis, Locale::Ar) => "تحليل المخاطر",
            (SectionKey::ContractingApproach, Locale::En) => "Contracting Approach",
            (SectionKey::ContractingApproach, Locale::Ar) => "نهج التعاقد",
            (SectionKey::EstimatedBudget, Locale::En) => "Estimated Budget",
            (SectionKey::EstimatedBudget, Locale::Ar) => "الميزانية التقديرية",
            (SectionKey::Timeline, Locale::En) => "High-level Timeline",
            (SectionKey::Timeline, Locale::Ar) => "الجدول الزمني العام",
            (SectionKey::ApprovalDecision, Locale::En) => "Approval Decision",
            (SectionKey::ApprovalDecision, Locale::Ar) => "قرار الاعتماد",
            (SectionKey::ApprovalSignoff, Locale::En) => "Approval Signoff",
            (SectionKey::ApprovalSignoff, Locale::Ar) => "التوقيع على الاعتماد",
            (SectionKey::RevisionHistory, Locale::En) => "Revision History",
            (SectionKey::RevisionHistory, Locale::Ar) => "سجل المراجعات",
            (SectionKey::Attachments, Locale::En) => "Attachments",
            (SectionKey::Attachments, Locale::Ar) => "المرفقات",
        }
    }
}

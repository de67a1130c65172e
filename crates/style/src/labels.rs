use pardoc_types::Locale;

/// Localized field labels used inside section bodies (table row headers,
/// subsection headings, cover strings). Section-level titles live in
/// [`crate::sections`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    ProjectName,
    ProgramName,
    ProjectDuration,
    ExpectedStart,
    Priority,
    Background,
    ProblemStatement,
    Objectives,
    InScope,
    OutOfScope,
    OperationalBenefits,
    FinancialImpact,
    DigitalAlignment,
    GovernanceAlignment,
    MarketResearch,
    FinalSelection,
    ContractingNotes,
    EstimatedBudget,
    MultiYearProject,
    Budget,
    TotalBudget,
    Approved,
    ApprovedBudgetAtBoard,
    ApproverName,
    Role,
    SignDate,
    Abstract,
    Attachment,
    Yes,
    FallbackProjectTitle,
}

impl Label {
    pub fn text(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en(),
            Locale::Ar => self.ar(),
        }
    }

    fn en(&self) -> &'static str {
        match self {
            Label::ProjectName => "Project Name",
            Label::ProgramName => "Program Name",
            Label::ProjectDuration => "Project Duration",
            Label::ExpectedStart => "Expected Start",
            Label::Priority => "Priority",
            Label::Background => "Background",
            Label::ProblemStatement => "Problem Statement",
            Label::Objectives => "Objectives",
            Label::InScope => "In Scope",
            Label::OutOfScope => "Out of Scope",
            Label::OperationalBenefits => "Operational Benefits",
            Label::FinancialImpact => "Financial Impact",
            Label::DigitalAlignment => "Digital Alignment",
            Label::GovernanceAlignment => "Governance Alignment",
            Label::MarketResearch => "Market Research",
            Label::FinalSelection => "Final Selection",
            Label::ContractingNotes => "Contracting Notes",
            Label::EstimatedBudget => "Estimated Budget",
            Label::MultiYearProject => "Multi-Year Project",
            Label::Budget => "Budget",
            Label::TotalBudget => "Total Budget",
            Label::Approved => "Approved",
            Label::ApprovedBudgetAtBoard => "Approved Budget at Board",
            Label::ApproverName => "Approver Name",
            Label::Role => "Role",
            Label::SignDate => "Sign Date",
            Label::Abstract => "Abstract",
            Label::Attachment => "Attachment",
            Label::Yes => "Yes",
            Label::FallbackProjectTitle => "IT Network & Data Center Design Modernization",
        }
    }

    fn ar(&self) -> &'static str {
        match self {
            Label::ProjectName => "اسم المشروع",
            Label::ProgramName => "اسم البرنامج",
            Label::ProjectDuration => "مدة المشروع",
            Label::ExpectedStart => "تاريخ البدء المتوقع",
            Label::Priority => "الأولوية",
            Label::Background => "الخلفية",
            Label::ProblemStatement => "بيان المشكلة",
            Label::Objectives => "الأهداف",
            Label::InScope => "ضمن النطاق",
            Label::OutOfScope => "خارج النطاق",
            Label::OperationalBenefits => "الفوائد التشغيلية",
            Label::FinancialImpact => "الأثر المالي",
            Label::DigitalAlignment => "التوافق الرقمي",
            Label::GovernanceAlignment => "التوافق مع الحوكمة",
            Label::MarketResearch => "دراسة السوق",
            Label::FinalSelection => "الاختيار النهائي",
            Label::ContractingNotes => "ملاحظات التعاقد",
            Label::EstimatedBudget => "الميزانية التقديرية",
            Label::MultiYearProject => "مشروع متعدد السنوات",
            Label::Budget => "ميزانية",
            Label::TotalBudget => "إجمالي الميزانية",
            Label::Approved => "المعتمد",
            Label::ApprovedBudgetAtBoard => "الميزانية المعتمدة من المجلس",
            Label::ApproverName => "اسم المعتمد",
            Label::Role => "الدور",
            Label::SignDate => "تاريخ التوقيع",
            Label::Abstract => "الملخص",
            Label::Attachment => "مرفق",
            Label::Yes => "نعم",
            Label::FallbackProjectTitle => "تحديث تصميم الشبكات ومراكز البيانات",
        }
    }
}

use super::domain::{Frequency, RiskSeverity, UseCaseRisk, ValidationEffort};

/// Highest answer value a question option can carry; the section maximum is
/// `MAX_OPTION_VALUE * question count`.
pub const MAX_OPTION_VALUE: u8 = 4;

/// One assessment section with its ordered question list.
#[derive(Debug)]
pub struct SectionTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub questions: Vec<QuestionTemplate>,
}

/// A single multiple-choice question. Options always carry the values 1-4,
/// each exactly once.
#[derive(Debug)]
pub struct QuestionTemplate {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: Vec<OptionTemplate>,
}

#[derive(Debug, Clone, Copy)]
pub struct OptionTemplate {
    pub value: u8,
    pub label: &'static str,
}

/// A catalog risk factor. Static until the user supplies a likelihood and
/// impact rating for it.
#[derive(Debug)]
pub struct RiskFactorTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub impact_areas: Vec<&'static str>,
    pub mitigation: &'static str,
    pub severity: RiskSeverity,
}

/// A use case the ROI engine projects savings for.
#[derive(Debug)]
pub struct RoiUseCaseTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub baseline_hours: f64,
    pub improvement_percent: f64,
    pub frequency: Frequency,
    pub risk_level: UseCaseRisk,
    /// `None` until the validation scope is defined; the ROI engine then
    /// falls back to the default cost multiplier.
    pub validation_effort: Option<ValidationEffort>,
}

/// Maps a regulatory requirement to the platform control addressing it and
/// the assessment section that probes the underlying capability.
#[derive(Debug)]
pub struct ComplianceMapEntry {
    pub framework: &'static str,
    pub requirement: &'static str,
    pub control: &'static str,
    pub section_id: &'static str,
}

/// Immutable definitions backing the whole assessment: sections and
/// questions with their scoring weights, risk factors, ROI use cases, and
/// the regulatory compliance mapping.
#[derive(Debug)]
pub struct AssessmentCatalog {
    sections: Vec<SectionTemplate>,
    risks: Vec<RiskFactorTemplate>,
    roi_use_cases: Vec<RoiUseCaseTemplate>,
    compliance_map: Vec<ComplianceMapEntry>,
}

impl AssessmentCatalog {
    pub fn standard() -> Self {
        Self {
            sections: standard_sections(),
            risks: standard_risk_factors(),
            roi_use_cases: standard_roi_use_cases(),
            compliance_map: standard_compliance_map(),
        }
    }

    pub fn sections(&self) -> &[SectionTemplate] {
        &self.sections
    }

    pub fn section(&self, id: &str) -> Option<&SectionTemplate> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn question(&self, id: &str) -> Option<&QuestionTemplate> {
        self.sections
            .iter()
            .flat_map(|section| section.questions.iter())
            .find(|question| question.id == id)
    }

    pub fn total_questions(&self) -> usize {
        self.sections
            .iter()
            .map(|section| section.questions.len())
            .sum()
    }

    pub fn risks(&self) -> &[RiskFactorTemplate] {
        &self.risks
    }

    pub fn risk(&self, id: &str) -> Option<&RiskFactorTemplate> {
        self.risks.iter().find(|risk| risk.id == id)
    }

    pub fn roi_use_cases(&self) -> &[RoiUseCaseTemplate] {
        &self.roi_use_cases
    }

    pub fn compliance_map(&self) -> &[ComplianceMapEntry] {
        &self.compliance_map
    }
}

fn options(labels: [&'static str; 4]) -> Vec<OptionTemplate> {
    // Labels are ordered strongest-first to match the questionnaire layout.
    labels
        .into_iter()
        .zip([4u8, 3, 2, 1])
        .map(|(label, value)| OptionTemplate { value, label })
        .collect()
}

fn standard_sections() -> Vec<SectionTemplate> {
    vec![
        SectionTemplate {
            id: "data_governance",
            title: "Data Governance & Security",
            questions: vec![
                QuestionTemplate {
                    id: "data_classification",
                    prompt: "Does your organization have a comprehensive data classification system with sensitivity labels?",
                    options: options([
                        "Fully implemented with GxP-specific labels",
                        "Basic system in place, needs GxP enhancement",
                        "Limited classification system",
                        "No formal data classification",
                    ]),
                },
                QuestionTemplate {
                    id: "access_controls",
                    prompt: "How mature are your Identity and Access Management (IAM) controls?",
                    options: options([
                        "Role-based access with regular audits and clean permissions",
                        "Role-based access with some permission sprawl",
                        "Basic access controls with known gaps",
                        "Minimal access controls, significant oversharing risks",
                    ]),
                },
                QuestionTemplate {
                    id: "dlp_policies",
                    prompt: "What is the current state of your Data Loss Prevention (DLP) policies?",
                    options: options([
                        "Comprehensive DLP with AI-specific policies",
                        "Basic DLP policies in place",
                        "Limited DLP implementation",
                        "No DLP policies implemented",
                    ]),
                },
                QuestionTemplate {
                    id: "audit_capabilities",
                    prompt: "How comprehensive are your audit trail and eDiscovery capabilities?",
                    options: options([
                        "Full audit trails with eDiscovery ready for AI interactions",
                        "Good audit capabilities, needs AI extension",
                        "Basic audit logging",
                        "Limited audit capabilities",
                    ]),
                },
            ],
        },
        SectionTemplate {
            id: "regulatory",
            title: "Regulatory & Compliance Maturity",
            questions: vec![
                QuestionTemplate {
                    id: "validation_approach",
                    prompt: "What is your current approach to system validation?",
                    options: options([
                        "Experienced with Computer Software Assurance (CSA)",
                        "Traditional CSV with some risk-based elements",
                        "Primarily traditional CSV approach",
                        "Limited validation experience",
                    ]),
                },
                QuestionTemplate {
                    id: "cfr_compliance",
                    prompt: "How well does your organization comply with 21 CFR Part 11?",
                    options: options([
                        "Full compliance with electronic records and signatures",
                        "Generally compliant with minor gaps",
                        "Partially compliant, working toward full compliance",
                        "Limited 21 CFR Part 11 compliance",
                    ]),
                },
                QuestionTemplate {
                    id: "gxp_processes",
                    prompt: "How mature are your GxP quality management processes?",
                    options: options([
                        "Mature QMS with digital transformation experience",
                        "Solid QMS processes, traditional approach",
                        "Basic QMS processes in place",
                        "Developing QMS processes",
                    ]),
                },
            ],
        },
        SectionTemplate {
            id: "technical",
            title: "Technical Infrastructure",
            questions: vec![
                QuestionTemplate {
                    id: "microsoft_365",
                    prompt: "What is your current Microsoft 365 deployment status?",
                    options: options([
                        "Enterprise-wide deployment with Purview governance",
                        "Widespread deployment, limited governance",
                        "Partial deployment across organization",
                        "Limited or no Microsoft 365 deployment",
                    ]),
                },
                QuestionTemplate {
                    id: "cloud_maturity",
                    prompt: "How mature is your cloud adoption and governance?",
                    options: options([
                        "Cloud-first with comprehensive governance",
                        "Significant cloud adoption with basic governance",
                        "Mixed on-premise and cloud environment",
                        "Primarily on-premise with limited cloud",
                    ]),
                },
                QuestionTemplate {
                    id: "it_security",
                    prompt: "How robust are your IT security practices?",
                    options: options([
                        "Zero-trust security model with advanced threat protection",
                        "Strong security practices with room for improvement",
                        "Basic security practices in place",
                        "Limited security practices",
                    ]),
                },
            ],
        },
        SectionTemplate {
            id: "organizational",
            title: "Organizational Readiness",
            questions: vec![
                QuestionTemplate {
                    id: "change_management",
                    prompt: "How experienced is your organization with large-scale technology changes?",
                    options: options([
                        "Proven change management with digital transformation success",
                        "Good change management capabilities",
                        "Some change management experience",
                        "Limited change management experience",
                    ]),
                },
                QuestionTemplate {
                    id: "ai_awareness",
                    prompt: "What is the current level of AI awareness and acceptance?",
                    options: options([
                        "High AI literacy with enthusiastic leadership support",
                        "Growing AI awareness with leadership buy-in",
                        "Basic AI awareness, mixed leadership support",
                        "Limited AI awareness and understanding",
                    ]),
                },
                QuestionTemplate {
                    id: "training_capacity",
                    prompt: "How strong are your training and development capabilities?",
                    options: options([
                        "Comprehensive training programs with digital delivery",
                        "Good training capabilities",
                        "Basic training programs",
                        "Limited training capabilities",
                    ]),
                },
            ],
        },
    ]
}

fn standard_risk_factors() -> Vec<RiskFactorTemplate> {
    vec![
        RiskFactorTemplate {
            id: "hallucination",
            name: "AI Hallucination",
            description: "Model generates factually incorrect information",
            impact_areas: vec!["Patient Safety", "Regulatory Submissions"],
            mitigation: "Human-in-the-Loop verification, grounded prompts",
            severity: RiskSeverity::Critical,
        },
        RiskFactorTemplate {
            id: "data_leakage",
            name: "Information Leakage",
            description: "Sensitive data shared inappropriately",
            impact_areas: vec!["Data Privacy", "Competitive Advantage"],
            mitigation: "DLP policies, sensitivity labels, access controls",
            severity: RiskSeverity::High,
        },
        RiskFactorTemplate {
            id: "bias",
            name: "Data Bias",
            description: "AI produces discriminatory or skewed outputs",
            impact_areas: vec!["Product Quality", "Regulatory Compliance"],
            mitigation: "Diverse training data, bias detection tools",
            severity: RiskSeverity::High,
        },
        RiskFactorTemplate {
            id: "non_determinism",
            name: "Inconsistent Output",
            description: "Different responses to similar prompts",
            impact_areas: vec!["Process Repeatability", "GxP Compliance"],
            mitigation: "Standardized prompts, validation testing",
            severity: RiskSeverity::Medium,
        },
        RiskFactorTemplate {
            id: "prompt_injection",
            name: "Prompt Injection",
            description: "Malicious content in grounded documents manipulates model behavior",
            impact_areas: vec!["Data Integrity", "Information Security"],
            mitigation: "Content filtering, restricted grounding sources, output review",
            severity: RiskSeverity::High,
        },
        RiskFactorTemplate {
            id: "model_drift",
            name: "Model Drift",
            description: "Platform model updates change output behavior between validations",
            impact_areas: vec!["Process Repeatability", "Validation Status"],
            mitigation: "Release monitoring, periodic revalidation, change control",
            severity: RiskSeverity::Medium,
        },
    ]
}

fn standard_roi_use_cases() -> Vec<RoiUseCaseTemplate> {
    vec![
        RoiUseCaseTemplate {
            id: "deviation_investigation",
            name: "Deviation Investigation",
            description: "AI-assisted analysis and summarization",
            baseline_hours: 25.0,
            improvement_percent: 30.0,
            frequency: Frequency::Weekly,
            risk_level: UseCaseRisk::Medium,
            validation_effort: Some(ValidationEffort::Moderate),
        },
        RoiUseCaseTemplate {
            id: "regulatory_submission",
            name: "Regulatory Submission Drafting",
            description: "Initial drafts of technical documentation",
            baseline_hours: 80.0,
            improvement_percent: 45.0,
            frequency: Frequency::Monthly,
            risk_level: UseCaseRisk::High,
            validation_effort: Some(ValidationEffort::Extensive),
        },
        RoiUseCaseTemplate {
            id: "audit_preparation",
            name: "Internal Audit Preparation",
            description: "Automated compliance checks and summaries",
            baseline_hours: 120.0,
            improvement_percent: 50.0,
            frequency: Frequency::Quarterly,
            risk_level: UseCaseRisk::Medium,
            validation_effort: Some(ValidationEffort::Moderate),
        },
        RoiUseCaseTemplate {
            id: "complaint_analysis",
            name: "Complaint Data Analysis",
            description: "Pattern identification and trend analysis",
            baseline_hours: 16.0,
            improvement_percent: 60.0,
            frequency: Frequency::Weekly,
            risk_level: UseCaseRisk::Low,
            validation_effort: Some(ValidationEffort::Minimal),
        },
        RoiUseCaseTemplate {
            id: "sop_drafting",
            name: "SOP Drafting & Revision",
            description: "First drafts and redline summaries for procedures",
            baseline_hours: 40.0,
            improvement_percent: 35.0,
            frequency: Frequency::Monthly,
            risk_level: UseCaseRisk::Low,
            validation_effort: Some(ValidationEffort::Moderate),
        },
        RoiUseCaseTemplate {
            id: "batch_record_review",
            name: "Batch Record Review",
            description: "Flagging anomalies in executed batch records",
            baseline_hours: 12.0,
            improvement_percent: 40.0,
            frequency: Frequency::BiWeekly,
            risk_level: UseCaseRisk::Medium,
            validation_effort: None,
        },
    ]
}

fn standard_compliance_map() -> Vec<ComplianceMapEntry> {
    vec![
        ComplianceMapEntry {
            framework: "21 CFR Part 11",
            requirement: "Audit trails for electronic records",
            control: "Microsoft Purview audit logging of Copilot interactions",
            section_id: "data_governance",
        },
        ComplianceMapEntry {
            framework: "21 CFR Part 11",
            requirement: "System access limited to authorized individuals",
            control: "Entra ID role-based access with periodic recertification",
            section_id: "data_governance",
        },
        ComplianceMapEntry {
            framework: "EU Annex 11",
            requirement: "Risk management over computerised systems",
            control: "Documented risk register with likelihood-impact scoring",
            section_id: "regulatory",
        },
        ComplianceMapEntry {
            framework: "GAMP 5 / CSA",
            requirement: "Risk-based validation of GxP systems",
            control: "Computer Software Assurance testing focused on high-risk use cases",
            section_id: "regulatory",
        },
        ComplianceMapEntry {
            framework: "ALCOA+",
            requirement: "Attributable, contemporaneous data records",
            control: "Sensitivity labels and DLP policies on AI-generated content",
            section_id: "data_governance",
        },
        ComplianceMapEntry {
            framework: "EU AI Act",
            requirement: "Human oversight of high-risk AI systems",
            control: "Human-in-the-loop review gates for regulated outputs",
            section_id: "organizational",
        },
    ]
}

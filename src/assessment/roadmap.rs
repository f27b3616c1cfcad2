use super::domain::Phase;
use super::scoring::SectionScore;

/// Below this completion percentage the only sensible recommendation is to
/// finish answering the questionnaire.
const MIN_PROGRESS_PERCENT: u8 = 25;

/// Overall score at which an organization can move straight into piloting.
const PILOT_READY_SCORE: u8 = 70;

/// Overall score at which scaled deployment becomes viable at all.
const DEPLOYMENT_READY_SCORE: u8 = 50;

/// Sections scoring below this percentage get their own remediation work in
/// the capability-development phase.
const CAPABILITY_GAP_SCORE: u8 = 60;

const COMPLETE_ASSESSMENT_ACTIVITIES: [&str; 4] = [
    "Answer the remaining assessment questions across all four sections",
    "Involve quality, IT, and business stakeholders for accurate scoring",
    "Rate each AI risk factor for your organization",
    "Return here to generate a tailored implementation roadmap",
];

const FOUNDATION_ACTIVITIES: [&str; 5] = [
    "Establish AI Council and governance framework",
    "Complete data hygiene assessment and remediation",
    "Implement Microsoft Purview controls and sensitivity labels",
    "Define acceptable-use policy for AI-assisted GxP work",
    "Train initial AI Champions",
];

const PILOT_ACTIVITIES: [&str; 5] = [
    "Launch pilot with the internal audit preparation use case",
    "Implement deviation investigation workflow in Quality Assurance",
    "Validate pilot use cases with CSA test protocols",
    "Measure baseline hours and report early ROI metrics",
    "Collect pilot feedback and refine prompt standards",
];

const INFRASTRUCTURE_ACTIVITIES: [&str; 5] = [
    "Strengthen technical infrastructure",
    "Enhance data governance practices",
    "Build change management capabilities",
    "Develop AI literacy training",
    "Prepare for broader deployment",
];

const SCALED_DEPLOYMENT_ACTIVITIES: [&str; 3] = [
    "Expand validated use cases across quality and regulatory teams",
    "Operationalize ROI tracking against baseline hours",
    "Standardize prompt libraries and grounded data sources",
];

const SCALE_OUT_ACTIVITIES: [&str; 2] = [
    "Scale to manufacturing and pharmacovigilance departments",
    "Automate compliance evidence collection for AI workflows",
];

const ENTERPRISE_ACTIVITIES: [&str; 4] = [
    "Enterprise-wide rollout across all departments",
    "Advanced use case implementation and optimization",
    "Continuous improvement with regular compliance assessments",
    "Innovation pipeline for new AI use cases",
];

/// Build the phased implementation plan from the readiness scores. Pure
/// function of its inputs: identical scores always produce an identical
/// phase list.
pub fn generate_roadmap(
    overall_score: u8,
    section_scores: &[SectionScore],
    progress_percent: u8,
) -> Vec<Phase> {
    if progress_percent < MIN_PROGRESS_PERCENT {
        return vec![Phase {
            number: 1,
            title: "Complete Assessment",
            duration: "1-2 weeks",
            activities: COMPLETE_ASSESSMENT_ACTIVITIES.to_vec(),
        }];
    }

    let mut phases = vec![Phase {
        number: 1,
        title: "Foundation & Governance",
        duration: "3 months",
        activities: FOUNDATION_ACTIVITIES.to_vec(),
    }];

    let second = if overall_score >= PILOT_READY_SCORE {
        Phase {
            number: 2,
            title: "Pilot Implementation",
            duration: "4 months",
            activities: PILOT_ACTIVITIES.to_vec(),
        }
    } else if overall_score >= DEPLOYMENT_READY_SCORE {
        Phase {
            number: 2,
            title: "Capability Development",
            duration: "6 months",
            activities: capability_development_activities(section_scores),
        }
    } else {
        Phase {
            number: 2,
            title: "Infrastructure & Capability Building",
            duration: "9 months",
            activities: INFRASTRUCTURE_ACTIVITIES.to_vec(),
        }
    };
    phases.push(second);

    if overall_score >= DEPLOYMENT_READY_SCORE {
        let mut activities = SCALED_DEPLOYMENT_ACTIVITIES.to_vec();
        let duration = if overall_score >= PILOT_READY_SCORE {
            activities.extend_from_slice(&SCALE_OUT_ACTIVITIES);
            "6 months"
        } else {
            "12 months"
        };
        phases.push(Phase {
            number: 3,
            title: "Scaled Deployment",
            duration,
            activities,
        });
    }

    if overall_score >= PILOT_READY_SCORE {
        phases.push(Phase {
            number: 4,
            title: "Enterprise Optimization",
            duration: "Ongoing",
            activities: ENTERPRISE_ACTIVITIES.to_vec(),
        });
    }

    phases
}

/// Each section still below the capability bar contributes its fixed pair of
/// remediation activities, in catalog order.
fn capability_development_activities(section_scores: &[SectionScore]) -> Vec<&'static str> {
    let mut activities = Vec::new();
    for entry in section_scores {
        if entry.score >= CAPABILITY_GAP_SCORE {
            continue;
        }
        if let Some(pair) = remediation_pair(entry.section_id) {
            activities.extend_from_slice(&pair);
        }
    }
    activities
}

fn remediation_pair(section_id: &str) -> Option<[&'static str; 2]> {
    match section_id {
        "data_governance" => Some([
            "Remediate data classification and sensitivity labeling gaps",
            "Extend DLP policies to cover AI prompts and outputs",
        ]),
        "regulatory" => Some([
            "Adopt Computer Software Assurance methods for AI validation",
            "Close 21 CFR Part 11 gaps for electronic records and signatures",
        ]),
        "technical" => Some([
            "Complete Microsoft 365 rollout with Purview governance enabled",
            "Harden identity and access management baselines",
        ]),
        "organizational" => Some([
            "Build change management capacity ahead of broad deployment",
            "Develop role-based AI literacy training",
        ]),
        _ => None,
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::catalog::AssessmentCatalog;
use super::domain::{AnswerMap, OrganizationInfo, Phase, ReadinessLevel, RiskInputs};
use super::roadmap::generate_roadmap;
use super::roi::{project_roi, total_annual_value, RoiProjection};
use super::scoring::{self, ProgressSnapshot};
use super::views::{self, RiskEvaluationView, SectionScoreView};

/// Minimum questionnaire completion before an export is meaningful.
const MIN_EXPORT_PROGRESS_PERCENT: u8 = 50;

/// Validation failures surfaced to the user instead of a document.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("organization setup incomplete: missing {}", missing.join(", "))]
    OrganizationIncomplete { missing: Vec<&'static str> },
    #[error(
        "assessment is only {percentage}% complete; answer at least {required}% of the questions before exporting"
    )]
    InsufficientProgress { percentage: u8, required: u8 },
}

/// The complete serialized assessment: inputs, derived scores, projections,
/// and the roadmap, stamped with its generation time.
#[derive(Debug, Clone, Serialize)]
pub struct ExportDocument {
    pub organization: OrganizationInfo,
    pub progress: ProgressSnapshot,
    pub section_scores: Vec<SectionScoreView>,
    pub overall_score: u8,
    pub readiness: ReadinessLevel,
    pub readiness_label: &'static str,
    pub risk_inputs: RiskInputs,
    pub risk_evaluations: Vec<RiskEvaluationView>,
    pub roi_projections: Vec<RoiProjection>,
    pub total_annual_value: f64,
    pub roadmap: Vec<Phase>,
    pub generated_at: DateTime<Utc>,
}

/// Assemble the export document, or refuse with a validation error when the
/// organization profile is incomplete or too little of the questionnaire is
/// answered. The timestamp is an input so assembly stays deterministic.
pub fn assemble(
    catalog: &AssessmentCatalog,
    organization: &OrganizationInfo,
    answers: &AnswerMap,
    risk_inputs: &RiskInputs,
    generated_at: DateTime<Utc>,
) -> Result<ExportDocument, ExportError> {
    let mut missing = Vec::new();
    if organization.name.trim().is_empty() {
        missing.push("organization name");
    }
    if organization.size.trim().is_empty() {
        missing.push("organization size");
    }
    if !(organization.hourly_rate > 0.0) {
        missing.push("hourly rate");
    }
    if !missing.is_empty() {
        return Err(ExportError::OrganizationIncomplete { missing });
    }

    let progress = scoring::assessment_progress(catalog.total_questions(), answers);
    if progress.percentage < MIN_EXPORT_PROGRESS_PERCENT {
        return Err(ExportError::InsufficientProgress {
            percentage: progress.percentage,
            required: MIN_EXPORT_PROGRESS_PERCENT,
        });
    }

    let section_scores = views::section_score_views(catalog, answers);
    let overall_score = scoring::overall_score(catalog, answers);
    let readiness = ReadinessLevel::from_score(overall_score);
    let roadmap = generate_roadmap(
        overall_score,
        &scoring::section_scores(catalog, answers),
        progress.percentage,
    );
    let roi_projections = project_roi(catalog.roi_use_cases(), organization.hourly_rate);
    let total_value = total_annual_value(&roi_projections);

    Ok(ExportDocument {
        organization: organization.clone(),
        progress,
        section_scores,
        overall_score,
        readiness,
        readiness_label: readiness.label(),
        risk_inputs: risk_inputs.clone(),
        risk_evaluations: views::risk_evaluation_views(catalog, risk_inputs),
        roi_projections,
        total_annual_value: total_value,
        roadmap,
        generated_at,
    })
}

/// Download-style file name: slugged organization name plus the date. Runs
/// of non-alphanumeric characters collapse to single dashes; an empty slug
/// falls back to a generic stem.
pub fn export_file_name(organization_name: &str, date: NaiveDate) -> String {
    let mut slug = String::with_capacity(organization_name.len());
    for ch in organization_name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    let slug = if slug.is_empty() { "organization" } else { slug };

    format!("copilot-assessment-{slug}-{}.json", date.format("%Y-%m-%d"))
}

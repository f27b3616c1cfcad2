use serde::Serialize;

use super::catalog::AssessmentCatalog;
use super::domain::{
    AnswerMap, OrganizationInfo, ReadinessLevel, RiskBand, RiskInputs, RiskSeverity,
};
use super::scoring::{self, ProgressSnapshot};

/// Per-section score with its readiness badge, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct SectionScoreView {
    pub section_id: &'static str,
    pub title: &'static str,
    pub score: u8,
    pub readiness: ReadinessLevel,
    pub readiness_label: &'static str,
}

/// A catalog risk factor combined with whatever rating the user has given
/// it. Unassessed risks surface with a zero score and the minimal band.
#[derive(Debug, Clone, Serialize)]
pub struct RiskEvaluationView {
    pub risk_id: &'static str,
    pub name: &'static str,
    pub severity: RiskSeverity,
    pub severity_label: &'static str,
    pub assessed: bool,
    pub score: u8,
    pub band: RiskBand,
    pub band_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Full readiness scorecard rendered by the CLI and embedded in exports.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSnapshot {
    pub organization: OrganizationInfo,
    pub progress: ProgressSnapshot,
    pub section_scores: Vec<SectionScoreView>,
    pub overall_score: u8,
    pub readiness: ReadinessLevel,
    pub readiness_label: &'static str,
    pub risk_evaluations: Vec<RiskEvaluationView>,
}

pub(crate) fn section_score_views(
    catalog: &AssessmentCatalog,
    answers: &AnswerMap,
) -> Vec<SectionScoreView> {
    scoring::section_scores(catalog, answers)
        .into_iter()
        .map(|entry| {
            let readiness = ReadinessLevel::from_score(entry.score);
            SectionScoreView {
                section_id: entry.section_id,
                title: entry.title,
                score: entry.score,
                readiness,
                readiness_label: readiness.label(),
            }
        })
        .collect()
}

pub(crate) fn risk_evaluation_views(
    catalog: &AssessmentCatalog,
    inputs: &RiskInputs,
) -> Vec<RiskEvaluationView> {
    catalog
        .risks()
        .iter()
        .map(|risk| {
            let score = scoring::risk_score(risk.id, inputs);
            let band = RiskBand::from_score(score);
            let input = inputs.get(risk.id);
            RiskEvaluationView {
                risk_id: risk.id,
                name: risk.name,
                severity: risk.severity,
                severity_label: risk.severity.label(),
                assessed: input.is_some(),
                score,
                band,
                band_label: band.label(),
                notes: input
                    .map(|value| value.notes.clone())
                    .filter(|notes| !notes.trim().is_empty()),
            }
        })
        .collect()
}

use serde::Serialize;

use super::catalog::{AssessmentCatalog, SectionTemplate, MAX_OPTION_VALUE};
use super::domain::{AnswerMap, RiskInputs};

/// Per-section score consumed by the roadmap generator and report views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionScore {
    pub section_id: &'static str,
    pub title: &'static str,
    pub score: u8,
}

/// How far through the questionnaire the user is. Only nonzero answer
/// values count as completed; an answer explicitly stored as 0 is still
/// unanswered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressSnapshot {
    pub completed: usize,
    pub total: usize,
    pub percentage: u8,
}

/// Percentage score for one section. Unanswered questions contribute 0; an
/// empty section scores 0 rather than dividing by zero.
pub fn section_score(section: &SectionTemplate, answers: &AnswerMap) -> u8 {
    if section.questions.is_empty() {
        return 0;
    }

    let total: u32 = section
        .questions
        .iter()
        .map(|question| u32::from(answers.get(question.id).copied().unwrap_or(0)))
        .sum();
    let max_possible = section.questions.len() as f64 * f64::from(MAX_OPTION_VALUE);

    ((f64::from(total) / max_possible) * 100.0).round() as u8
}

/// Scores for every catalog section, in catalog order.
pub fn section_scores(catalog: &AssessmentCatalog, answers: &AnswerMap) -> Vec<SectionScore> {
    catalog
        .sections()
        .iter()
        .map(|section| SectionScore {
            section_id: section.id,
            title: section.title,
            score: section_score(section, answers),
        })
        .collect()
}

/// Rounded mean of the section scores; 0 when the catalog carries no
/// sections.
pub fn overall_score(catalog: &AssessmentCatalog, answers: &AnswerMap) -> u8 {
    let scores = section_scores(catalog, answers);
    if scores.is_empty() {
        return 0;
    }

    let sum: u32 = scores.iter().map(|entry| u32::from(entry.score)).sum();
    (f64::from(sum) / scores.len() as f64).round() as u8
}

/// Likelihood times impact for a rated risk, in [0, 25]. A risk without an
/// input scores 0 so unassessed risks sort below every rated one.
pub fn risk_score(risk_id: &str, inputs: &RiskInputs) -> u8 {
    inputs
        .get(risk_id)
        .map(|input| input.likelihood.min(5) * input.impact.min(5))
        .unwrap_or(0)
}

/// Questionnaire completion snapshot. A total of zero questions yields 0%
/// rather than a division error.
pub fn assessment_progress(total_questions: usize, answers: &AnswerMap) -> ProgressSnapshot {
    let completed = answers.values().filter(|value| **value > 0).count();
    let percentage = if total_questions == 0 {
        0
    } else {
        ((completed as f64 / total_questions as f64) * 100.0).round() as u8
    };

    ProgressSnapshot {
        completed,
        total: total_questions,
        percentage,
    }
}

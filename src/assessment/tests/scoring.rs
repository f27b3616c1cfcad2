use super::common::*;
use crate::assessment::domain::{AnswerMap, ReadinessLevel, RiskBand, RiskInputs};
use crate::assessment::scoring::{
    assessment_progress, overall_score, risk_score, section_score, section_scores,
};

#[test]
fn unanswered_section_scores_zero() {
    let catalog = catalog();
    let answers = AnswerMap::new();

    for section in catalog.sections() {
        assert_eq!(section_score(section, &answers), 0);
    }
}

#[test]
fn fully_maxed_section_scores_one_hundred() {
    let catalog = catalog();
    let answers = answers_all(4);

    for section in catalog.sections() {
        assert_eq!(section_score(section, &answers), 100);
    }
    assert_eq!(overall_score(&catalog, &answers), 100);
}

#[test]
fn section_score_rounds_to_nearest_percent() {
    let catalog = catalog();
    let mut answers = AnswerMap::new();
    // One answer of 3 in a four-question section: 3/16 = 18.75%.
    answers.insert("data_classification".to_string(), 3);

    let section = catalog.section("data_governance").expect("section exists");
    assert_eq!(section_score(section, &answers), 19);
}

#[test]
fn overall_score_is_rounded_mean_of_sections() {
    let catalog = catalog();
    // Section scores 100, 50, 0, 75 -> mean 56.25 -> 56.
    let answers = answers_for_sections(&[
        ("data_governance", 4),
        ("regulatory", 2),
        ("organizational", 3),
    ]);

    let scores = section_scores(&catalog, &answers);
    let by_id: Vec<(&str, u8)> = scores
        .iter()
        .map(|entry| (entry.section_id, entry.score))
        .collect();
    assert_eq!(
        by_id,
        vec![
            ("data_governance", 100),
            ("regulatory", 50),
            ("technical", 0),
            ("organizational", 75),
        ]
    );
    assert_eq!(overall_score(&catalog, &answers), 56);
}

#[test]
fn readiness_level_boundaries_are_inclusive() {
    assert_eq!(ReadinessLevel::from_score(80), ReadinessLevel::High);
    assert_eq!(ReadinessLevel::from_score(79), ReadinessLevel::Medium);
    assert_eq!(ReadinessLevel::from_score(60), ReadinessLevel::Medium);
    assert_eq!(ReadinessLevel::from_score(59), ReadinessLevel::Low);
    assert_eq!(ReadinessLevel::from_score(0), ReadinessLevel::Low);
}

#[test]
fn risk_score_is_likelihood_times_impact() {
    let inputs = rated_risk(4, 5);

    assert_eq!(risk_score("hallucination", &inputs), 20);
    assert_eq!(
        RiskBand::from_score(risk_score("hallucination", &inputs)),
        RiskBand::Critical
    );
}

#[test]
fn unassessed_risk_scores_zero_not_one() {
    let inputs = RiskInputs::new();

    assert_eq!(risk_score("hallucination", &inputs), 0);
    assert_eq!(RiskBand::from_score(0), RiskBand::Minimal);
}

#[test]
fn risk_band_ladder_takes_highest_matching_threshold() {
    assert_eq!(RiskBand::from_score(25), RiskBand::Critical);
    assert_eq!(RiskBand::from_score(20), RiskBand::Critical);
    assert_eq!(RiskBand::from_score(19), RiskBand::High);
    assert_eq!(RiskBand::from_score(15), RiskBand::High);
    assert_eq!(RiskBand::from_score(10), RiskBand::Medium);
    assert_eq!(RiskBand::from_score(5), RiskBand::Low);
    assert_eq!(RiskBand::from_score(4), RiskBand::Minimal);
}

#[test]
fn progress_counts_only_nonzero_answers() {
    let catalog = catalog();
    let mut answers = AnswerMap::new();
    answers.insert("data_classification".to_string(), 4);
    answers.insert("access_controls".to_string(), 1);
    // An answer explicitly stored as 0 is still unanswered.
    answers.insert("dlp_policies".to_string(), 0);

    let progress = assessment_progress(catalog.total_questions(), &answers);
    assert_eq!(progress.completed, 2);
    assert_eq!(progress.total, 13);
    // 2/13 = 15.38% -> 15.
    assert_eq!(progress.percentage, 15);
}

#[test]
fn progress_with_zero_questions_is_zero_percent() {
    let progress = assessment_progress(0, &AnswerMap::new());
    assert_eq!(progress.completed, 0);
    assert_eq!(progress.percentage, 0);
}

#[test]
fn progress_percentage_rounds() {
    let catalog = catalog();
    let mut answers = AnswerMap::new();
    for question_id in [
        "data_classification",
        "access_controls",
        "dlp_policies",
        "audit_capabilities",
        "validation_approach",
        "cfr_compliance",
        "gxp_processes",
    ] {
        answers.insert(question_id.to_string(), 2);
    }

    // 7/13 = 53.85% -> 54.
    let progress = assessment_progress(catalog.total_questions(), &answers);
    assert_eq!(progress.completed, 7);
    assert_eq!(progress.percentage, 54);
}

use crate::assessment::catalog::AssessmentCatalog;
use crate::assessment::domain::{AnswerMap, OrganizationInfo, RiskInput, RiskInputs};
use crate::assessment::service::AssessmentService;
use crate::assessment::store::InMemoryStore;

pub(super) fn catalog() -> AssessmentCatalog {
    AssessmentCatalog::standard()
}

pub(super) fn service() -> AssessmentService<InMemoryStore> {
    AssessmentService::new(InMemoryStore::default())
}

pub(super) fn organization() -> OrganizationInfo {
    OrganizationInfo {
        name: "Acme Life Sciences".to_string(),
        size: "500-1000 employees".to_string(),
        hourly_rate: 150.0,
    }
}

/// Every question in every section answered with `value`.
pub(super) fn answers_all(value: u8) -> AnswerMap {
    answers_for_sections(&[
        ("data_governance", value),
        ("regulatory", value),
        ("technical", value),
        ("organizational", value),
    ])
}

/// Every question in the listed sections answered with the paired value;
/// sections not listed stay unanswered.
pub(super) fn answers_for_sections(values: &[(&str, u8)]) -> AnswerMap {
    let catalog = catalog();
    let mut answers = AnswerMap::new();
    for (section_id, value) in values {
        let section = catalog.section(section_id).expect("section exists");
        for question in &section.questions {
            answers.insert(question.id.to_string(), *value);
        }
    }
    answers
}

pub(super) fn rated_risk(likelihood: u8, impact: u8) -> RiskInputs {
    let mut inputs = RiskInputs::new();
    inputs.insert(
        "hallucination".to_string(),
        RiskInput {
            likelihood,
            impact,
            notes: String::new(),
        },
    );
    inputs
}

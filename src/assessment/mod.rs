//! Readiness assessment domain: the static catalog, the pure scoring, ROI,
//! and roadmap engines, the persistence adapter, and the export assembler.
//!
//! Everything user-visible flows through [`AssessmentService`]; the engine
//! modules stay pure functions over plain data so they can be exercised in
//! isolation.

pub mod catalog;
pub mod domain;
pub mod export;
pub mod intake;
pub mod roadmap;
pub mod roi;
pub mod scoring;
pub mod service;
pub mod store;
pub mod views;

#[cfg(test)]
mod tests;

pub use catalog::AssessmentCatalog;
pub use domain::{
    AnswerMap, Frequency, OrganizationInfo, Phase, ReadinessLevel, RiskBand, RiskInput,
    RiskInputs, RiskSeverity, UseCaseRisk, ValidationEffort,
};
pub use export::{export_file_name, ExportDocument, ExportError};
pub use intake::{parse_answer_records, AnswerRecord};
pub use roadmap::generate_roadmap;
pub use roi::{project_roi, total_annual_value, RoiProjection};
pub use scoring::{ProgressSnapshot, SectionScore};
pub use service::{AssessmentService, ServiceError};
pub use store::{AssessmentStore, InMemoryStore, JsonFileStore, StoreError};
pub use views::{AssessmentSnapshot, RiskEvaluationView, SectionScoreView};

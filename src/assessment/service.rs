use chrono::{DateTime, Utc};
use tracing::info;

use super::catalog::AssessmentCatalog;
use super::domain::{OrganizationInfo, Phase, ReadinessLevel, RiskInput};
use super::export::{self, ExportDocument, ExportError};
use super::intake::AnswerRecord;
use super::roadmap::generate_roadmap;
use super::roi::{project_roi, RoiProjection};
use super::scoring;
use super::store::{AssessmentStore, StoreError};
use super::views::{self, AssessmentSnapshot};

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("unknown question id '{0}'")]
    UnknownQuestion(String),
    #[error("answer {value} is not an option for question '{question_id}' (expected 1-4)")]
    InvalidAnswer { question_id: String, value: u8 },
    #[error("unknown risk id '{0}'")]
    UnknownRisk(String),
    #[error("{field} must be between 1 and 5, got {value}")]
    RatingOutOfRange { field: &'static str, value: u8 },
    #[error("hourly rate must be a positive number, got {0}")]
    InvalidHourlyRate(f64),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Service composing the static catalog with a persistence adapter. All
/// state flows through the store; the engines themselves stay pure.
pub struct AssessmentService<S> {
    catalog: AssessmentCatalog,
    store: S,
}

impl<S: AssessmentStore> AssessmentService<S> {
    pub fn new(store: S) -> Self {
        Self {
            catalog: AssessmentCatalog::standard(),
            store,
        }
    }

    pub fn catalog(&self) -> &AssessmentCatalog {
        &self.catalog
    }

    /// Record one answer. Unknown questions and values outside the option
    /// set are rejected so the stored map never carries garbage; the
    /// engines' missing-treated-as-zero contract is for sparse data, not
    /// invalid data.
    pub fn record_answer(&self, question_id: &str, value: u8) -> Result<(), ServiceError> {
        let question = self
            .catalog
            .question(question_id)
            .ok_or_else(|| ServiceError::UnknownQuestion(question_id.to_string()))?;
        if !question.options.iter().any(|option| option.value == value) {
            return Err(ServiceError::InvalidAnswer {
                question_id: question_id.to_string(),
                value,
            });
        }

        let mut answers = self.store.load_answers()?;
        answers.insert(question.id.to_string(), value);
        self.store.save_answers(&answers)?;
        info!(question_id, value, "answer recorded");
        Ok(())
    }

    /// Apply a batch of parsed answer records through the same validation
    /// as single answers. Nothing is persisted unless every record is
    /// valid; returns the number applied.
    pub fn import_answers(&self, records: &[AnswerRecord]) -> Result<usize, ServiceError> {
        let mut answers = self.store.load_answers()?;
        for record in records {
            let question = self
                .catalog
                .question(&record.question_id)
                .ok_or_else(|| ServiceError::UnknownQuestion(record.question_id.clone()))?;
            if !question.options.iter().any(|option| option.value == record.value) {
                return Err(ServiceError::InvalidAnswer {
                    question_id: record.question_id.clone(),
                    value: record.value,
                });
            }
            answers.insert(question.id.to_string(), record.value);
        }

        self.store.save_answers(&answers)?;
        info!(applied = records.len(), "answers imported");
        Ok(records.len())
    }

    pub fn set_organization(&self, info: OrganizationInfo) -> Result<(), ServiceError> {
        if !(info.hourly_rate.is_finite() && info.hourly_rate > 0.0) {
            return Err(ServiceError::InvalidHourlyRate(info.hourly_rate));
        }

        self.store.save_organization(&info)?;
        info!(name = %info.name, "organization profile saved");
        Ok(())
    }

    /// Rate a catalog risk factor on the 1-5 likelihood/impact scales.
    pub fn rate_risk(
        &self,
        risk_id: &str,
        likelihood: u8,
        impact: u8,
        notes: Option<String>,
    ) -> Result<(), ServiceError> {
        let risk = self
            .catalog
            .risk(risk_id)
            .ok_or_else(|| ServiceError::UnknownRisk(risk_id.to_string()))?;
        for (field, value) in [("likelihood", likelihood), ("impact", impact)] {
            if !(1..=5).contains(&value) {
                return Err(ServiceError::RatingOutOfRange { field, value });
            }
        }

        let mut inputs = self.store.load_risk_inputs()?;
        inputs.insert(
            risk.id.to_string(),
            RiskInput {
                likelihood,
                impact,
                notes: notes.unwrap_or_default(),
            },
        );
        self.store.save_risk_inputs(&inputs)?;
        info!(risk_id, likelihood, impact, "risk rated");
        Ok(())
    }

    /// Full readiness scorecard over the currently stored state.
    pub fn snapshot(&self) -> Result<AssessmentSnapshot, ServiceError> {
        let answers = self.store.load_answers()?;
        let organization = self.store.load_organization()?;
        let risk_inputs = self.store.load_risk_inputs()?;

        let overall_score = scoring::overall_score(&self.catalog, &answers);
        let readiness = ReadinessLevel::from_score(overall_score);

        Ok(AssessmentSnapshot {
            organization,
            progress: scoring::assessment_progress(self.catalog.total_questions(), &answers),
            section_scores: views::section_score_views(&self.catalog, &answers),
            overall_score,
            readiness,
            readiness_label: readiness.label(),
            risk_evaluations: views::risk_evaluation_views(&self.catalog, &risk_inputs),
        })
    }

    pub fn roadmap(&self) -> Result<Vec<Phase>, ServiceError> {
        let answers = self.store.load_answers()?;
        let overall_score = scoring::overall_score(&self.catalog, &answers);
        let section_scores = scoring::section_scores(&self.catalog, &answers);
        let progress = scoring::assessment_progress(self.catalog.total_questions(), &answers);
        Ok(generate_roadmap(
            overall_score,
            &section_scores,
            progress.percentage,
        ))
    }

    pub fn roi_projections(&self) -> Result<Vec<RoiProjection>, ServiceError> {
        let organization = self.store.load_organization()?;
        Ok(project_roi(
            self.catalog.roi_use_cases(),
            organization.hourly_rate,
        ))
    }

    /// Assemble the export document plus its download-style file name.
    /// Precondition failures (incomplete setup, not enough answers) come
    /// back as validation errors without a document.
    pub fn export(
        &self,
        generated_at: DateTime<Utc>,
    ) -> Result<(ExportDocument, String), ServiceError> {
        let answers = self.store.load_answers()?;
        let organization = self.store.load_organization()?;
        let risk_inputs = self.store.load_risk_inputs()?;

        let document = export::assemble(
            &self.catalog,
            &organization,
            &answers,
            &risk_inputs,
            generated_at,
        )?;
        let file_name = export::export_file_name(&organization.name, generated_at.date_naive());
        info!(%file_name, "export document assembled");
        Ok((document, file_name))
    }

    /// Drop all three stored aggregates.
    pub fn reset(&self) -> Result<(), ServiceError> {
        self.store.clear_answers()?;
        self.store.clear_organization()?;
        self.store.clear_risk_inputs()?;
        info!("assessment state cleared");
        Ok(())
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sparse answer map keyed by question identifier. A value of `0` (or an
/// absent key) means the question has not been answered yet.
pub type AnswerMap = BTreeMap<String, u8>;

/// Fully-burdened hourly rate applied when the organization has not supplied
/// its own figure.
pub const DEFAULT_HOURLY_RATE: f64 = 150.0;

/// Organization profile captured during setup and consumed by the ROI engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationInfo {
    pub name: String,
    pub size: String,
    pub hourly_rate: f64,
}

impl Default for OrganizationInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            size: String::new(),
            hourly_rate: DEFAULT_HOURLY_RATE,
        }
    }
}

impl OrganizationInfo {
    /// Setup is complete once both descriptive fields are filled and the
    /// hourly rate is positive.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.size.trim().is_empty() && self.hourly_rate > 0.0
    }
}

/// User-supplied rating for a catalog risk factor. Both factors live on a
/// 1-5 scale; a risk without an input is treated as unassessed, not as an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskInput {
    pub likelihood: u8,
    pub impact: u8,
    #[serde(default)]
    pub notes: String,
}

/// Risk ratings keyed by risk-factor identifier.
pub type RiskInputs = BTreeMap<String, RiskInput>;

/// Categorical readiness derived from a percentage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessLevel {
    High,
    Medium,
    Low,
}

impl ReadinessLevel {
    /// Thresholds are inclusive: 80 maps to `High`, 60 to `Medium`.
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::High
        } else if score >= 60 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Qualitative band for a likelihood-impact risk score. The ladder is
/// descending; the first threshold a score clears wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Critical,
    High,
    Medium,
    Low,
    Minimal,
}

impl RiskBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 20 => Self::Critical,
            s if s >= 15 => Self::High,
            s if s >= 10 => Self::Medium,
            s if s >= 5 => Self::Low,
            _ => Self::Minimal,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Minimal => "Minimal",
        }
    }
}

/// Inherent severity a risk factor carries before the user rates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskSeverity {
    Medium,
    High,
    Critical,
}

impl RiskSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

/// How often a use case recurs, mapped to annual instance counts for the
/// ROI projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    Weekly,
    BiWeekly,
    Monthly,
    Quarterly,
}

impl Frequency {
    pub const fn annual_instances(self) -> u32 {
        match self {
            Self::Weekly => 52,
            Self::BiWeekly => 26,
            Self::Monthly => 12,
            Self::Quarterly => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::BiWeekly => "bi-weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
        }
    }
}

/// Validation effort needed before a use case can run in a regulated
/// process, expressed as a multiplier of the hourly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationEffort {
    Minimal,
    Moderate,
    Extensive,
}

/// Multiplier applied when a use case has no validation effort scoped yet.
pub const DEFAULT_EFFORT_MULTIPLIER: f64 = 80.0;

impl ValidationEffort {
    pub const fn cost_multiplier(self) -> f64 {
        match self {
            Self::Minimal => 40.0,
            Self::Moderate => 120.0,
            Self::Extensive => 300.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Moderate => "moderate",
            Self::Extensive => "extensive",
        }
    }
}

/// Static risk classification of a ROI use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UseCaseRisk {
    Low,
    Medium,
    High,
}

impl UseCaseRisk {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// One roadmap phase: a named, timed bundle of recommended activities.
/// Produced transiently by the roadmap generator and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phase {
    pub number: u8,
    pub title: &'static str,
    pub duration: &'static str,
    pub activities: Vec<&'static str>,
}

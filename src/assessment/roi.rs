use serde::Serialize;

use super::catalog::RoiUseCaseTemplate;
use super::domain::{Frequency, UseCaseRisk, ValidationEffort, DEFAULT_EFFORT_MULTIPLIER};

/// Implementation cost is amortized over a nominal five-year horizon, so one
/// fifth of it is charged against each year's value.
const ANNUAL_COST_SHARE: f64 = 0.2;

/// Financial projection for a single catalog use case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoiProjection {
    pub use_case_id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub baseline_hours: f64,
    pub improvement_percent: f64,
    pub frequency: Frequency,
    pub risk_level: UseCaseRisk,
    pub time_saved_hours: f64,
    pub annual_instances: u32,
    pub annual_value: f64,
    pub implementation_cost: f64,
    pub net_annual_value: f64,
    pub roi_percent: f64,
}

/// Project savings for every use case at the given fully-burdened hourly
/// rate. Deterministic and side-effect free; an absent or non-positive rate
/// yields no projections at all.
pub fn project_roi(use_cases: &[RoiUseCaseTemplate], hourly_rate: f64) -> Vec<RoiProjection> {
    if !(hourly_rate.is_finite() && hourly_rate > 0.0) {
        return Vec::new();
    }

    use_cases
        .iter()
        .map(|use_case| {
            let time_saved_hours = use_case.baseline_hours * use_case.improvement_percent / 100.0;
            let annual_instances = use_case.frequency.annual_instances();
            let annual_value = time_saved_hours * hourly_rate * f64::from(annual_instances);

            let effort_multiplier = use_case
                .validation_effort
                .map_or(DEFAULT_EFFORT_MULTIPLIER, ValidationEffort::cost_multiplier);
            let implementation_cost = hourly_rate * effort_multiplier;
            let net_annual_value = annual_value - implementation_cost * ANNUAL_COST_SHARE;
            let roi_percent = if implementation_cost > 0.0 {
                net_annual_value / implementation_cost * 100.0
            } else {
                0.0
            };

            RoiProjection {
                use_case_id: use_case.id,
                name: use_case.name,
                description: use_case.description,
                baseline_hours: use_case.baseline_hours,
                improvement_percent: use_case.improvement_percent,
                frequency: use_case.frequency,
                risk_level: use_case.risk_level,
                time_saved_hours,
                annual_instances,
                annual_value,
                implementation_cost,
                net_annual_value,
                roi_percent,
            }
        })
        .collect()
}

/// Portfolio total across all projections.
pub fn total_annual_value(projections: &[RoiProjection]) -> f64 {
    projections
        .iter()
        .map(|projection| projection.annual_value)
        .sum()
}

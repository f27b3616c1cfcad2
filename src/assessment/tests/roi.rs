use super::common::*;
use crate::assessment::roi::{project_roi, total_annual_value, RoiProjection};

fn projection_for<'a>(projections: &'a [RoiProjection], id: &str) -> &'a RoiProjection {
    projections
        .iter()
        .find(|projection| projection.use_case_id == id)
        .expect("use case projected")
}

#[test]
fn regulatory_submission_projection_matches_worked_example() {
    let catalog = catalog();
    let projections = project_roi(catalog.roi_use_cases(), 150.0);

    // 80h baseline, 45% improvement, monthly, extensive validation:
    // 36h saved, 36*150*12 = 64,800 annual, cost 150*300 = 45,000,
    // net 64,800 - 9,000 = 55,800, ROI 124%.
    let projection = projection_for(&projections, "regulatory_submission");
    assert!((projection.time_saved_hours - 36.0).abs() < f64::EPSILON);
    assert_eq!(projection.annual_instances, 12);
    assert!((projection.annual_value - 64_800.0).abs() < 1e-9);
    assert!((projection.implementation_cost - 45_000.0).abs() < 1e-9);
    assert!((projection.net_annual_value - 55_800.0).abs() < 1e-9);
    assert!((projection.roi_percent - 124.0).abs() < 1e-9);
}

#[test]
fn missing_validation_effort_falls_back_to_default_multiplier() {
    let catalog = catalog();
    let projections = project_roi(catalog.roi_use_cases(), 100.0);

    let projection = projection_for(&projections, "batch_record_review");
    assert!((projection.implementation_cost - 8_000.0).abs() < 1e-9);
    // Bi-weekly frequency maps to 26 annual instances.
    assert_eq!(projection.annual_instances, 26);
}

#[test]
fn zero_or_invalid_hourly_rate_yields_no_projections() {
    let catalog = catalog();

    assert!(project_roi(catalog.roi_use_cases(), 0.0).is_empty());
    assert!(project_roi(catalog.roi_use_cases(), -25.0).is_empty());
    assert!(project_roi(catalog.roi_use_cases(), f64::NAN).is_empty());
}

#[test]
fn projections_cover_every_catalog_use_case() {
    let catalog = catalog();
    let projections = project_roi(catalog.roi_use_cases(), 150.0);

    assert_eq!(projections.len(), catalog.roi_use_cases().len());
}

#[test]
fn total_annual_value_sums_projections() {
    let catalog = catalog();
    let projections = project_roi(catalog.roi_use_cases(), 150.0);

    let expected: f64 = projections
        .iter()
        .map(|projection| projection.annual_value)
        .sum();
    assert!((total_annual_value(&projections) - expected).abs() < 1e-9);
    assert!(expected > 0.0);
}

#[test]
fn projection_is_deterministic() {
    let catalog = catalog();

    let first = project_roi(catalog.roi_use_cases(), 185.0);
    let second = project_roi(catalog.roi_use_cases(), 185.0);
    assert_eq!(first, second);
}

use std::fs;

use super::common::*;
use crate::assessment::domain::{AnswerMap, OrganizationInfo, RiskInput, RiskInputs};
use crate::assessment::store::{AssessmentStore, InMemoryStore, JsonFileStore, StoreError};

fn sample_answers() -> AnswerMap {
    let mut answers = AnswerMap::new();
    answers.insert("data_classification".to_string(), 4);
    answers.insert("cfr_compliance".to_string(), 2);
    answers
}

#[test]
fn in_memory_store_round_trips_each_key() {
    let store = InMemoryStore::default();

    store.save_answers(&sample_answers()).expect("answers saved");
    assert_eq!(store.load_answers().expect("answers load"), sample_answers());

    store
        .save_organization(&organization())
        .expect("organization saved");
    assert_eq!(
        store.load_organization().expect("organization loads"),
        organization()
    );

    let mut inputs = RiskInputs::new();
    inputs.insert(
        "bias".to_string(),
        RiskInput {
            likelihood: 2,
            impact: 3,
            notes: "training data review".to_string(),
        },
    );
    store.save_risk_inputs(&inputs).expect("risks saved");
    assert_eq!(store.load_risk_inputs().expect("risks load"), inputs);

    store.clear_answers().expect("answers cleared");
    store.clear_organization().expect("organization cleared");
    store.clear_risk_inputs().expect("risks cleared");
    assert!(store.load_answers().expect("answers load").is_empty());
    assert_eq!(
        store.load_organization().expect("organization loads"),
        OrganizationInfo::default()
    );
    assert!(store.load_risk_inputs().expect("risks load").is_empty());
}

#[test]
fn file_store_round_trips_and_defaults_missing_keys() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = JsonFileStore::open(dir.path()).expect("store opens");

    // Nothing written yet: every key loads its default.
    assert!(store.load_answers().expect("answers load").is_empty());
    assert_eq!(
        store.load_organization().expect("organization loads"),
        OrganizationInfo::default()
    );

    store.save_answers(&sample_answers()).expect("answers saved");
    store
        .save_organization(&organization())
        .expect("organization saved");

    // A second handle over the same directory sees the same state.
    let reopened = JsonFileStore::open(dir.path()).expect("store reopens");
    assert_eq!(
        reopened.load_answers().expect("answers load"),
        sample_answers()
    );
    assert_eq!(
        reopened.load_organization().expect("organization loads"),
        organization()
    );
}

#[test]
fn file_store_clear_is_idempotent() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = JsonFileStore::open(dir.path()).expect("store opens");

    store.save_answers(&sample_answers()).expect("answers saved");
    store.clear_answers().expect("first clear");
    store.clear_answers().expect("second clear of absent key");
    assert!(store.load_answers().expect("answers load").is_empty());
}

#[test]
fn file_store_surfaces_malformed_documents() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = JsonFileStore::open(dir.path()).expect("store opens");

    fs::write(dir.path().join("assessment-answers.json"), b"not json").expect("write garbage");

    let err = store.load_answers().expect_err("malformed document rejected");
    assert!(matches!(err, StoreError::Malformed { .. }));
}

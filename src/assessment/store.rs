use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::domain::{AnswerMap, OrganizationInfo, RiskInputs};

/// Storage keys mirror the browser revision's local-storage entries so an
/// exported data directory reads the same way.
const ANSWERS_KEY: &str = "assessment-answers";
const ORGANIZATION_KEY: &str = "organization-info";
const RISK_KEY: &str = "risk-assessment";

/// Error enumeration for persistence failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to prepare data directory {}: {source}", path.display())]
    Prepare { path: PathBuf, source: io::Error },
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to delete {}: {source}", path.display())]
    Delete { path: PathBuf, source: io::Error },
    #[error("malformed document at {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode '{key}' document: {source}")]
    Encode {
        key: &'static str,
        source: serde_json::Error,
    },
    #[error("in-memory store lock poisoned")]
    Poisoned,
}

/// Key-value persistence for the three assessment aggregates. Loads fall
/// back to the default value when a key has never been written; deletes of
/// absent keys succeed.
pub trait AssessmentStore: Send + Sync {
    fn load_answers(&self) -> Result<AnswerMap, StoreError>;
    fn save_answers(&self, answers: &AnswerMap) -> Result<(), StoreError>;
    fn clear_answers(&self) -> Result<(), StoreError>;

    fn load_organization(&self) -> Result<OrganizationInfo, StoreError>;
    fn save_organization(&self, info: &OrganizationInfo) -> Result<(), StoreError>;
    fn clear_organization(&self) -> Result<(), StoreError>;

    fn load_risk_inputs(&self) -> Result<RiskInputs, StoreError>;
    fn save_risk_inputs(&self, inputs: &RiskInputs) -> Result<(), StoreError>;
    fn clear_risk_inputs(&self) -> Result<(), StoreError>;
}

/// One pretty-printed JSON document per key under a data directory. Each
/// write replaces the whole file, so a reader never observes a partial
/// aggregate.
#[derive(Debug)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Open the store at `root`, creating the directory when missing.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StoreError::Prepare {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    fn read_or_default<T>(&self, key: &str) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|source| StoreError::Malformed { path, source }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(T::default()),
            Err(source) => Err(StoreError::Read { path, source }),
        }
    }

    fn write_document<T: Serialize>(&self, key: &'static str, value: &T) -> Result<(), StoreError> {
        let body =
            serde_json::to_vec_pretty(value).map_err(|source| StoreError::Encode { key, source })?;
        let path = self.path_for(key);
        fs::write(&path, body).map_err(|source| StoreError::Write { path, source })
    }

    fn remove_document(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Delete { path, source }),
        }
    }
}

impl AssessmentStore for JsonFileStore {
    fn load_answers(&self) -> Result<AnswerMap, StoreError> {
        self.read_or_default(ANSWERS_KEY)
    }

    fn save_answers(&self, answers: &AnswerMap) -> Result<(), StoreError> {
        self.write_document(ANSWERS_KEY, answers)
    }

    fn clear_answers(&self) -> Result<(), StoreError> {
        self.remove_document(ANSWERS_KEY)
    }

    fn load_organization(&self) -> Result<OrganizationInfo, StoreError> {
        self.read_or_default(ORGANIZATION_KEY)
    }

    fn save_organization(&self, info: &OrganizationInfo) -> Result<(), StoreError> {
        self.write_document(ORGANIZATION_KEY, info)
    }

    fn clear_organization(&self) -> Result<(), StoreError> {
        self.remove_document(ORGANIZATION_KEY)
    }

    fn load_risk_inputs(&self) -> Result<RiskInputs, StoreError> {
        self.read_or_default(RISK_KEY)
    }

    fn save_risk_inputs(&self, inputs: &RiskInputs) -> Result<(), StoreError> {
        self.write_document(RISK_KEY, inputs)
    }

    fn clear_risk_inputs(&self) -> Result<(), StoreError> {
        self.remove_document(RISK_KEY)
    }
}

/// Mutex-guarded store so services can be exercised without touching disk.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    answers: Mutex<AnswerMap>,
    organization: Mutex<Option<OrganizationInfo>>,
    risk_inputs: Mutex<RiskInputs>,
}

impl AssessmentStore for InMemoryStore {
    fn load_answers(&self) -> Result<AnswerMap, StoreError> {
        let guard = self.answers.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(guard.clone())
    }

    fn save_answers(&self, answers: &AnswerMap) -> Result<(), StoreError> {
        let mut guard = self.answers.lock().map_err(|_| StoreError::Poisoned)?;
        *guard = answers.clone();
        Ok(())
    }

    fn clear_answers(&self) -> Result<(), StoreError> {
        let mut guard = self.answers.lock().map_err(|_| StoreError::Poisoned)?;
        guard.clear();
        Ok(())
    }

    fn load_organization(&self) -> Result<OrganizationInfo, StoreError> {
        let guard = self.organization.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(guard.clone().unwrap_or_default())
    }

    fn save_organization(&self, info: &OrganizationInfo) -> Result<(), StoreError> {
        let mut guard = self.organization.lock().map_err(|_| StoreError::Poisoned)?;
        *guard = Some(info.clone());
        Ok(())
    }

    fn clear_organization(&self) -> Result<(), StoreError> {
        let mut guard = self.organization.lock().map_err(|_| StoreError::Poisoned)?;
        *guard = None;
        Ok(())
    }

    fn load_risk_inputs(&self) -> Result<RiskInputs, StoreError> {
        let guard = self.risk_inputs.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(guard.clone())
    }

    fn save_risk_inputs(&self, inputs: &RiskInputs) -> Result<(), StoreError> {
        let mut guard = self.risk_inputs.lock().map_err(|_| StoreError::Poisoned)?;
        *guard = inputs.clone();
        Ok(())
    }

    fn clear_risk_inputs(&self) -> Result<(), StoreError> {
        let mut guard = self.risk_inputs.lock().map_err(|_| StoreError::Poisoned)?;
        guard.clear();
        Ok(())
    }
}

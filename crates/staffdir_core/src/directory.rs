//! Wiring for one employee directory instance.
//!
//! # Responsibility
//! - Build the store and both pipelines from one `CoreConfig`.
//! - Optionally load the demo data set before the directory is handed out.
//!
//! # Invariants
//! - Configuration is validated before anything is seeded.
//! - All pipelines of one directory share the same store.

use crate::config::{ConfigError, CoreConfig};
use crate::model::employee::Employee;
use crate::repo::employee_repo::RepoError;
use crate::repo::seed::demo_employees;
use crate::repo::store::EmployeeStore;
use crate::service::read_service::EmployeeReadService;
use crate::service::write_service::EmployeeWriteService;
use crate::validation::employee_rules::EmployeeValidator;
use crate::validation::Validator;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Directory startup error.
#[derive(Debug)]
pub enum DirectoryError {
    Config(ConfigError),
    /// Demo data could not be loaded into the store.
    Seed(RepoError),
}

impl Display for DirectoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Seed(err) => write!(f, "cannot seed demo data: {err}"),
        }
    }
}

impl Error for DirectoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Seed(err) => Some(err),
        }
    }
}

impl From<ConfigError> for DirectoryError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<RepoError> for DirectoryError {
    fn from(value: RepoError) -> Self {
        Self::Seed(value)
    }
}

/// Store plus the pipelines operating on it.
#[derive(Clone)]
pub struct StaffDirectory {
    store: EmployeeStore,
    reader: EmployeeReadService,
    writer: EmployeeWriteService,
}

impl StaffDirectory {
    pub fn new(store: EmployeeStore, validator: Arc<dyn Validator<Employee>>) -> Self {
        Self {
            reader: EmployeeReadService::new(store.clone()),
            writer: EmployeeWriteService::new(store.clone(), validator),
            store,
        }
    }

    /// Empty store with the built-in validator.
    pub fn in_memory() -> Self {
        Self::new(EmployeeStore::new(), Arc::new(EmployeeValidator::new()))
    }

    pub fn from_config(config: &CoreConfig) -> Result<Self, DirectoryError> {
        Self::from_config_with_store(config, EmployeeStore::new())
    }

    /// Like [`StaffDirectory::from_config`], over a caller-provided store.
    ///
    /// Seeding fails with [`DirectoryError::Seed`] when the store already
    /// holds a demo id or email.
    pub fn from_config_with_store(
        config: &CoreConfig,
        store: EmployeeStore,
    ) -> Result<Self, DirectoryError> {
        config.validate()?;
        let validator = config.employee_validator()?;
        if config.seed_demo_data {
            let loaded = store.write().load(demo_employees())?;
            info!("event=directory_seed module=directory status=ok loaded={loaded}");
        }
        Ok(Self::new(store, Arc::new(validator)))
    }

    pub fn store(&self) -> &EmployeeStore {
        &self.store
    }

    pub fn reader(&self) -> &EmployeeReadService {
        &self.reader
    }

    pub fn writer(&self) -> &EmployeeWriteService {
        &self.writer
    }
}

//! Employee directory core.
//! This crate owns the record store and every rule applied before a write.

pub mod config;
pub mod directory;
pub mod logging;
pub mod model;
pub mod patch;
pub mod repo;
pub mod search;
pub mod service;
pub mod validation;

pub use config::{ConfigError, CoreConfig};
pub use directory::{DirectoryError, StaffDirectory};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::employee::{Address, Employee, EmployeeId, Gender, MaritalStatus};
pub use patch::{InvalidPatchOperation, PatchEngine, PatchKind, PatchOperation};
pub use repo::employee_repo::{EmployeeRepository, EmployeeTable, RepoError, RepoResult};
pub use repo::id_gen::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use repo::store::EmployeeStore;
pub use search::criteria::{Criteria, Criterion};
pub use service::error::{NotFoundTarget, ServiceError, ServiceResult};
pub use service::read_service::EmployeeReadService;
pub use service::write_service::EmployeeWriteService;
pub use validation::employee_rules::EmployeeValidator;
pub use validation::{Validator, Violation};

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

//! Error taxonomy shared by the read and write pipelines.

use crate::model::employee::EmployeeId;
use crate::patch::InvalidPatchOperation;
use crate::repo::employee_repo::RepoError;
use crate::search::criteria::Criteria;
use crate::validation::Violation;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// What a failed lookup was looking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundTarget {
    Id(EmployeeId),
    Criteria(Criteria),
    SurnamePrefix(String),
}

impl Display for NotFoundTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "no employee with id {id}"),
            Self::Criteria(criteria) => write!(f, "no employees match criteria {criteria}"),
            Self::SurnamePrefix(prefix) => write!(f, "no surnames start with `{prefix}`"),
        }
    }
}

/// Failure outcome of a pipeline call. Every variant is recoverable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Structural validation failed; carries every violated field.
    ConstraintViolation(Vec<Violation>),
    /// Another live record already uses this email.
    EmailExists(String),
    NotFound(NotFoundTarget),
    InvalidPatchOperation(InvalidPatchOperation),
    /// The store could not honor its identifier contract.
    Store(RepoError),
}

impl ServiceError {
    /// Violated fields for `ConstraintViolation`, empty otherwise.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::ConstraintViolation(violations) => violations,
            _ => &[],
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConstraintViolation(violations) => {
                let fields: Vec<String> = violations.iter().map(ToString::to_string).collect();
                write!(f, "constraints violated: {}", fields.join("; "))
            }
            Self::EmailExists(email) => write!(f, "email already exists: {email}"),
            Self::NotFound(target) => write!(f, "{target}"),
            Self::InvalidPatchOperation(err) => write!(f, "invalid patch operation: {err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidPatchOperation(err) => Some(err),
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Store(value)
    }
}

impl From<InvalidPatchOperation> for ServiceError {
    fn from(value: InvalidPatchOperation) -> Self {
        Self::InvalidPatchOperation(value)
    }
}

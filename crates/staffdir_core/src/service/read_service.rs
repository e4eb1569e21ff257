//! Read pipeline.
//!
//! # Responsibility
//! - Turn store absence into `NotFound` outcomes for callers.
//! - Route criteria searches through the resolver.
//!
//! # Invariants
//! - Reads only ever take the shared lock.
//! - An empty result is always reported as `NotFound`.

use crate::model::employee::{Employee, EmployeeId};
use crate::repo::employee_repo::EmployeeRepository;
use crate::repo::store::EmployeeStore;
use crate::search::criteria::{resolve, Criteria};
use crate::service::error::{NotFoundTarget, ServiceError, ServiceResult};
use log::debug;

/// Lookup and search entry points.
#[derive(Clone)]
pub struct EmployeeReadService {
    store: EmployeeStore,
}

impl EmployeeReadService {
    pub fn new(store: EmployeeStore) -> Self {
        Self { store }
    }

    /// Gets one employee by id.
    pub fn find_by_id(&self, id: EmployeeId) -> ServiceResult<Employee> {
        let employee = self
            .store
            .find_by_id(id)
            .ok_or(ServiceError::NotFound(NotFoundTarget::Id(id)))?;
        debug!("event=employee_find_by_id module=read_service status=ok id={id}");
        Ok(employee)
    }

    /// Searches by criteria; an empty criteria set lists everyone.
    pub fn find(&self, criteria: &Criteria) -> ServiceResult<Vec<Employee>> {
        let employees = resolve(&*self.store.read(), criteria);
        debug!(
            "event=employee_find module=read_service criteria={criteria} hits={}",
            employees.len()
        );
        if employees.is_empty() {
            return Err(ServiceError::NotFound(NotFoundTarget::Criteria(
                criteria.clone(),
            )));
        }
        Ok(employees)
    }

    /// Distinct surnames starting with `prefix`.
    pub fn find_surnames_by_prefix(&self, prefix: &str) -> ServiceResult<Vec<String>> {
        let surnames = self.store.read().find_surnames_by_prefix(prefix);
        if surnames.is_empty() {
            return Err(ServiceError::NotFound(NotFoundTarget::SurnamePrefix(
                prefix.to_string(),
            )));
        }
        Ok(surnames)
    }
}

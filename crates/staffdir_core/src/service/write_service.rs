//! Write pipeline.
//!
//! # Responsibility
//! - Validate candidates, enforce email uniqueness and commit to the store.
//! - Run the fetch, patch and update sequence for partial updates under
//!   a single write guard.
//!
//! # Invariants
//! - Structural validation runs before any lock is taken or store call made.
//! - Uniqueness check and insert/replace run under one write guard, so two
//!   writers can never both claim the same email.
//! - `update` only checks uniqueness when the email actually changes.
//! - `delete_by_id` is idempotent.

use crate::model::employee::{Employee, EmployeeId};
use crate::patch::{PatchEngine, PatchOperation};
use crate::repo::employee_repo::{EmployeeRepository, EmployeeTable};
use crate::repo::store::EmployeeStore;
use crate::service::error::{NotFoundTarget, ServiceError, ServiceResult};
use crate::validation::Validator;
use log::{debug, info};
use std::sync::Arc;

/// Create/update/delete entry points.
#[derive(Clone)]
pub struct EmployeeWriteService {
    store: EmployeeStore,
    validator: Arc<dyn Validator<Employee>>,
    patcher: PatchEngine,
}

impl EmployeeWriteService {
    pub fn new(store: EmployeeStore, validator: Arc<dyn Validator<Employee>>) -> Self {
        Self {
            store,
            validator,
            patcher: PatchEngine::new(),
        }
    }

    /// Stores a new employee and returns it with its generated id.
    ///
    /// # Errors
    /// - `ConstraintViolation` when the candidate is structurally invalid.
    /// - `EmailExists` when the email is already taken.
    pub fn create(&self, candidate: Employee) -> ServiceResult<Employee> {
        self.check_constraints("create", &candidate)?;

        let mut table = self.store.write();
        if table.exists_by_email(&candidate.email) {
            debug!("event=employee_create module=write_service status=rejected reason=email_exists");
            return Err(ServiceError::EmailExists(candidate.email));
        }
        let stored = table.insert(candidate)?;
        drop(table);

        if let Some(id) = stored.id {
            info!("event=employee_create module=write_service status=ok id={id}");
        }
        Ok(stored)
    }

    /// Replaces every field of employee `id` with the candidate's values.
    ///
    /// Whatever id the candidate carries is overridden with `id`.
    ///
    /// # Errors
    /// - `ConstraintViolation` when the candidate is structurally invalid.
    /// - `NotFound` when no employee has this id.
    /// - `EmailExists` when the candidate switches to a taken email.
    pub fn update(&self, candidate: Employee, id: EmployeeId) -> ServiceResult<Employee> {
        self.check_constraints("update", &candidate)?;

        let mut table = self.store.write();
        let stored = Self::commit_update(&mut table, candidate, id)?;
        drop(table);

        info!("event=employee_update module=write_service status=ok id={id}");
        Ok(stored)
    }

    /// Removes employee `id`; absence is not an error.
    pub fn delete_by_id(&self, id: EmployeeId) {
        let removed = self.store.delete_by_id(id);
        info!("event=employee_delete module=write_service status=ok id={id} removed={removed}");
    }

    /// Fetches employee `id`, applies `operations` to a private copy and
    /// commits the result with `update` semantics.
    ///
    /// Fetch, patch, validation and commit run under one write guard, so a
    /// concurrent writer can neither interleave nor be overwritten by a stale
    /// copy. A rejected batch never reaches the store.
    ///
    /// # Errors
    /// - `NotFound` when no employee has this id.
    /// - `InvalidPatchOperation` for an unsupported `replace` path.
    /// - `ConstraintViolation` or `EmailExists` for the patched record.
    pub fn patch(
        &self,
        id: EmployeeId,
        operations: &[PatchOperation],
    ) -> ServiceResult<Employee> {
        let mut table = self.store.write();
        let mut employee = table
            .find_by_id(id)
            .ok_or(ServiceError::NotFound(NotFoundTarget::Id(id)))?;
        self.patcher.apply(&mut employee, operations)?;
        self.check_constraints("patch", &employee)?;
        let stored = Self::commit_update(&mut table, employee, id)?;
        drop(table);

        info!(
            "event=employee_patch module=write_service status=ok id={id} ops={}",
            operations.len()
        );
        Ok(stored)
    }

    /// Existence and uniqueness checks plus `replace`, under the caller's guard.
    fn commit_update(
        table: &mut EmployeeTable,
        mut candidate: Employee,
        id: EmployeeId,
    ) -> ServiceResult<Employee> {
        let current = table
            .find_by_id(id)
            .ok_or(ServiceError::NotFound(NotFoundTarget::Id(id)))?;
        if candidate.email != current.email && table.exists_by_email(&candidate.email) {
            debug!(
                "event=employee_update module=write_service status=rejected reason=email_exists id={id}"
            );
            return Err(ServiceError::EmailExists(candidate.email));
        }

        candidate.id = Some(id);
        table.replace(candidate.clone());
        Ok(candidate)
    }

    fn check_constraints(&self, action: &str, candidate: &Employee) -> ServiceResult<()> {
        let violations = self.validator.validate(candidate);
        if violations.is_empty() {
            return Ok(());
        }

        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        debug!(
            "event=employee_{action} module=write_service status=rejected reason=constraints fields={}",
            fields.join(",")
        );
        Err(ServiceError::ConstraintViolation(violations))
    }
}

//! Shared handle over the employee table.
//!
//! # Responsibility
//! - Hand out read and write guards over one `EmployeeTable`.
//! - Offer single-call convenience wrappers for callers outside a pipeline.
//!
//! # Invariants
//! - All mutation goes through the write guard, so a check-then-act sequence
//!   run under one guard is atomic with respect to every other writer.
//! - Readers share the lock with each other, never with a writer.

use crate::model::employee::{Employee, EmployeeId};
use crate::repo::employee_repo::{EmployeeRepository, EmployeeTable, RepoResult};
use crate::repo::id_gen::{IdGenerator, RandomIdGenerator};
use crate::repo::seed::demo_employees;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Cloneable handle to the canonical employee collection.
#[derive(Clone)]
pub struct EmployeeStore {
    table: Arc<RwLock<EmployeeTable>>,
}

impl Default for EmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeStore {
    /// Creates an empty store issuing random UUIDs.
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(RandomIdGenerator))
    }

    pub fn with_id_generator(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            table: Arc::new(RwLock::new(EmployeeTable::new(ids))),
        }
    }

    /// Creates a store preloaded with the demo employee set.
    pub fn seeded() -> RepoResult<Self> {
        let store = Self::new();
        store.write().load(demo_employees())?;
        Ok(store)
    }

    /// Shared read access.
    pub fn read(&self) -> RwLockReadGuard<'_, EmployeeTable> {
        self.table.read()
    }

    /// Exclusive access for a whole check-then-act sequence.
    pub fn write(&self) -> RwLockWriteGuard<'_, EmployeeTable> {
        self.table.write()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn find_by_id(&self, id: EmployeeId) -> Option<Employee> {
        self.read().find_by_id(id)
    }

    pub fn find_all(&self) -> Vec<Employee> {
        self.read().find_all()
    }

    pub fn find_by_email(&self, email: &str) -> Option<Employee> {
        self.read().find_by_email(email)
    }

    pub fn exists_by_email(&self, email: &str) -> bool {
        self.read().exists_by_email(email)
    }

    pub fn find_by_surname_contains(&self, fragment: &str) -> Vec<Employee> {
        self.read().find_by_surname_contains(fragment)
    }

    pub fn find_surnames_by_prefix(&self, prefix: &str) -> Vec<String> {
        self.read().find_surnames_by_prefix(prefix)
    }

    /// Inserts without uniqueness checks. Use the write service for that.
    pub fn insert(&self, employee: Employee) -> RepoResult<Employee> {
        self.write().insert(employee)
    }

    pub fn replace(&self, employee: Employee) -> bool {
        self.write().replace(employee)
    }

    pub fn delete_by_id(&self, id: EmployeeId) -> bool {
        self.write().delete_by_id(id)
    }
}

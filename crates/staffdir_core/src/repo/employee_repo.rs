//! Employee repository contract and in-memory table.
//!
//! # Responsibility
//! - Own the canonical employee collection and its secondary indexes.
//! - Provide point lookup, linear-scan queries, insert, replace and delete.
//!
//! # Invariants
//! - `slots`, `emails` and `rows` always describe the same set of records.
//! - Identifiers are never reused, including identifiers of deleted records.
//! - Iteration order is insertion order; `replace` keeps the original slot.
//! - The table performs no structural or uniqueness validation on
//!   `insert`/`replace`; the write pipeline does that under the write lock.

use crate::model::employee::{Employee, EmployeeId};
use crate::repo::id_gen::IdGenerator;
use log::{debug, trace, warn};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// How often `insert` asks the generator again after a collision.
const MAX_ID_ATTEMPTS: usize = 3;

pub type RepoResult<T> = Result<T, RepoError>;

/// Store-level error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// The identifier generator kept producing issued identifiers.
    IdCollision(EmployeeId),
    /// A bulk-loaded record has no identifier.
    MissingId,
    /// A bulk-loaded record reuses an issued identifier.
    DuplicateId(EmployeeId),
    /// A bulk-loaded record reuses a live email.
    DuplicateEmail(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdCollision(id) => {
                write!(f, "identifier generator produced an issued id: {id}")
            }
            Self::MissingId => write!(f, "loaded employee has no id"),
            Self::DuplicateId(id) => write!(f, "employee id already issued: {id}"),
            Self::DuplicateEmail(email) => write!(f, "email already stored: {email}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface over the employee collection.
pub trait EmployeeRepository {
    /// Exact identifier match.
    fn find_by_id(&self, id: EmployeeId) -> Option<Employee>;
    /// Every live record in insertion order.
    fn find_all(&self) -> Vec<Employee>;
    /// Exact, case-sensitive email match.
    fn find_by_email(&self, email: &str) -> Option<Employee>;
    /// Email existence check without cloning a record.
    fn exists_by_email(&self, email: &str) -> bool;
    /// Case-sensitive substring match on surname.
    fn find_by_surname_contains(&self, fragment: &str) -> Vec<Employee>;
    /// Distinct surnames starting with `prefix`, first-seen order.
    fn find_surnames_by_prefix(&self, prefix: &str) -> Vec<String>;
    /// Assigns a fresh identifier and appends the record.
    ///
    /// Any identifier already set on `employee` is discarded.
    fn insert(&mut self, employee: Employee) -> RepoResult<Employee>;
    /// Overwrites the record with the embedded identifier in place.
    ///
    /// Returns `false` (and changes nothing) when no such record exists.
    fn replace(&mut self, employee: Employee) -> bool;
    /// Removes the record if present. Absence is not an error.
    fn delete_by_id(&mut self, id: EmployeeId) -> bool;
}

/// In-memory employee table keyed by insertion slot.
pub struct EmployeeTable {
    rows: BTreeMap<u64, Employee>,
    slots: HashMap<EmployeeId, u64>,
    emails: HashMap<String, BTreeSet<u64>>,
    retired: HashSet<EmployeeId>,
    next_slot: u64,
    ids: Arc<dyn IdGenerator>,
}

impl EmployeeTable {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            rows: BTreeMap::new(),
            slots: HashMap::new(),
            emails: HashMap::new(),
            retired: HashSet::new(),
            next_slot: 0,
            ids,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Bulk-loads records that already carry identifiers.
    ///
    /// Used for seed data. Unlike `insert`, this path keeps the given ids and
    /// rejects duplicate ids or emails. Records before the failing one stay
    /// loaded.
    pub fn load(&mut self, employees: impl IntoIterator<Item = Employee>) -> RepoResult<usize> {
        let mut loaded = 0;
        for employee in employees {
            let id = employee.id.ok_or(RepoError::MissingId)?;
            if self.is_issued(id) {
                return Err(RepoError::DuplicateId(id));
            }
            if self.exists_by_email(&employee.email) {
                return Err(RepoError::DuplicateEmail(employee.email));
            }
            self.append(employee);
            loaded += 1;
        }
        debug!("event=employee_load module=repo status=ok loaded={loaded}");
        Ok(loaded)
    }

    fn is_issued(&self, id: EmployeeId) -> bool {
        self.slots.contains_key(&id) || self.retired.contains(&id)
    }

    fn fresh_id(&self) -> RepoResult<EmployeeId> {
        let mut last = self.ids.next_id();
        for _ in 1..MAX_ID_ATTEMPTS {
            if !self.is_issued(last) {
                return Ok(last);
            }
            warn!("event=employee_id_collision module=repo status=retry id={last}");
            last = self.ids.next_id();
        }
        if self.is_issued(last) {
            return Err(RepoError::IdCollision(last));
        }
        Ok(last)
    }

    fn append(&mut self, employee: Employee) -> Employee {
        let slot = self.next_slot;
        self.next_slot += 1;
        if let Some(id) = employee.id {
            self.slots.insert(id, slot);
        }
        self.index_email(&employee.email, slot);
        self.rows.insert(slot, employee.clone());
        employee
    }

    fn index_email(&mut self, email: &str, slot: u64) {
        self.emails.entry(email.to_string()).or_default().insert(slot);
    }

    fn unindex_email(&mut self, email: &str, slot: u64) {
        if let Some(slots) = self.emails.get_mut(email) {
            slots.remove(&slot);
            if slots.is_empty() {
                self.emails.remove(email);
            }
        }
    }
}

impl EmployeeRepository for EmployeeTable {
    fn find_by_id(&self, id: EmployeeId) -> Option<Employee> {
        let found = self
            .slots
            .get(&id)
            .and_then(|slot| self.rows.get(slot))
            .cloned();
        trace!(
            "event=employee_find_by_id module=repo id={id} found={}",
            found.is_some()
        );
        found
    }

    fn find_all(&self) -> Vec<Employee> {
        self.rows.values().cloned().collect()
    }

    fn find_by_email(&self, email: &str) -> Option<Employee> {
        self.emails
            .get(email)
            .and_then(|slots| slots.iter().next())
            .and_then(|slot| self.rows.get(slot))
            .cloned()
    }

    fn exists_by_email(&self, email: &str) -> bool {
        self.emails.contains_key(email)
    }

    fn find_by_surname_contains(&self, fragment: &str) -> Vec<Employee> {
        let employees: Vec<Employee> = self
            .rows
            .values()
            .filter(|employee| employee.surname.contains(fragment))
            .cloned()
            .collect();
        trace!(
            "event=employee_find_by_surname module=repo hits={}",
            employees.len()
        );
        employees
    }

    fn find_surnames_by_prefix(&self, prefix: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.rows
            .values()
            .map(|employee| employee.surname.as_str())
            .filter(|surname| surname.starts_with(prefix))
            .filter(|surname| seen.insert(*surname))
            .map(str::to_string)
            .collect()
    }

    fn insert(&mut self, mut employee: Employee) -> RepoResult<Employee> {
        let id = self.fresh_id()?;
        employee.id = Some(id);
        let stored = self.append(employee);
        debug!(
            "event=employee_insert module=repo status=ok id={id} count={}",
            self.rows.len()
        );
        Ok(stored)
    }

    fn replace(&mut self, employee: Employee) -> bool {
        let Some(id) = employee.id else {
            return false;
        };
        let Some(&slot) = self.slots.get(&id) else {
            debug!("event=employee_replace module=repo status=skipped id={id}");
            return false;
        };

        let previous_email = self.rows.get(&slot).map(|row| row.email.clone());
        if let Some(previous_email) = previous_email {
            self.unindex_email(&previous_email, slot);
        }
        self.index_email(&employee.email, slot);
        self.rows.insert(slot, employee);
        debug!("event=employee_replace module=repo status=ok id={id}");
        true
    }

    fn delete_by_id(&mut self, id: EmployeeId) -> bool {
        let Some(slot) = self.slots.remove(&id) else {
            return false;
        };
        if let Some(removed) = self.rows.remove(&slot) {
            self.unindex_email(&removed.email, slot);
        }
        self.retired.insert(id);
        debug!(
            "event=employee_delete module=repo status=ok id={id} count={}",
            self.rows.len()
        );
        true
    }
}

//! Search criteria and the resolver that dispatches them.
//!
//! # Invariants
//! - An empty criteria set lists every record.
//! - The first entry in insertion order selects the query; later entries
//!   are ignored.
//! - An unrecognized first key yields an empty result, not an error.

use crate::model::employee::Employee;
use crate::repo::employee_repo::EmployeeRepository;
use log::debug;
use std::fmt::{Display, Formatter};

/// Recognized criterion names and the query each one selects.
const CRITERION_KEYS: [(&str, Criterion); 3] = [
    ("email", Criterion::Email),
    ("nachname", Criterion::Surname),
    ("surname", Criterion::Surname),
];

/// Query selected by a criterion key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    /// Exact email match, zero or one result.
    Email,
    /// Surname substring match.
    Surname,
}

impl Criterion {
    /// Maps a criterion name onto its query. Names are case-sensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        CRITERION_KEYS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, criterion)| *criterion)
    }

    fn query<R>(self, repo: &R, value: &str) -> Vec<Employee>
    where
        R: EmployeeRepository + ?Sized,
    {
        match self {
            Self::Email => repo.find_by_email(value).into_iter().collect(),
            Self::Surname => repo.find_by_surname_contains(value),
        }
    }
}

/// Ordered name/value search criteria.
///
/// Setting an existing name replaces its value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    entries: Vec<(String, String)>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `set`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Criteria {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut criteria = Self::new();
        for (key, value) in iter {
            criteria.set(key, value);
        }
        criteria
    }
}

/// Lists criteria names only; values may carry personal data.
impl Display for Criteria {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let keys: Vec<&str> = self.keys().collect();
        write!(f, "[{}]", keys.join(", "))
    }
}

/// Runs the store query selected by `criteria`.
pub fn resolve<R>(repo: &R, criteria: &Criteria) -> Vec<Employee>
where
    R: EmployeeRepository + ?Sized,
{
    let Some((key, value)) = criteria.iter().next() else {
        return repo.find_all();
    };

    match Criterion::from_key(key) {
        Some(criterion) => criterion.query(repo, value),
        None => {
            debug!("event=criteria_resolve module=search status=unrecognized key={key}");
            Vec::new()
        }
    }
}

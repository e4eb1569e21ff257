//! Employee domain model.
//!
//! # Responsibility
//! - Define the employee record shared by store, pipelines and patch engine.
//! - Provide candidate constructors for create/update flows.
//!
//! # Invariants
//! - `id` is `None` for unsaved candidates and fixed once the store assigns it.
//! - Structural constraints (name shape, email syntax, past birth date,
//!   address shape) are checked by a `Validator`, never by construction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier assigned by the store on insert.
pub type EmployeeId = Uuid;

/// Closed gender enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Diverse,
}

/// Closed marital status enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

/// Postal address. Either present and valid as a whole, or absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub postal_code: String,
    pub city: String,
}

impl Address {
    pub fn new(postal_code: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            postal_code: postal_code.into(),
            city: city.into(),
        }
    }
}

/// Canonical employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Assigned by the store; ignored on create and overridden on update.
    #[serde(default)]
    pub id: Option<EmployeeId>,
    pub surname: String,
    /// Unique across all live records.
    pub email: String,
    #[serde(default)]
    pub has_newsletter: bool,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub marital_status: Option<MaritalStatus>,
    #[serde(default)]
    pub address: Option<Address>,
}

impl Employee {
    /// Creates an unsaved candidate with only the required fields set.
    ///
    /// # Invariants
    /// - `id` starts as `None`.
    /// - `has_newsletter` starts as `false`.
    pub fn candidate(surname: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            surname: surname.into(),
            email: email.into(),
            has_newsletter: false,
            birth_date: None,
            gender: None,
            marital_status: None,
            address: None,
        }
    }

    /// Creates a record with a caller-provided identifier.
    ///
    /// Used by seed/import paths where identity already exists.
    pub fn with_id(id: EmployeeId, surname: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            ..Self::candidate(surname, email)
        }
    }

    pub fn born_on(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    pub fn living_at(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_marital_status(mut self, status: MaritalStatus) -> Self {
        self.marital_status = Some(status);
        self
    }

    pub fn subscribed(mut self, has_newsletter: bool) -> Self {
        self.has_newsletter = has_newsletter;
        self
    }

    /// Returns whether the store has assigned an identifier.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

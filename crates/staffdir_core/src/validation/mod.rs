//! Structural validation contracts.
//!
//! # Responsibility
//! - Define the pluggable `Validator` seam consumed by the write pipeline.
//! - Describe violated fields as plain, displayable descriptors.
//!
//! # Invariants
//! - Validators report every violated field, not just the first one.
//! - Validators are pure: they never touch the store.

pub mod employee_rules;

use std::fmt::{Display, Formatter};

/// One violated structural constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Violation {
    /// Dotted field path, e.g. `address.postal_code`.
    pub field: String,
    /// Human-readable reason.
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Externally supplied structural validator.
///
/// Returns an empty vector when `value` satisfies every constraint.
pub trait Validator<T: ?Sized>: Send + Sync {
    fn validate(&self, value: &T) -> Vec<Violation>;
}

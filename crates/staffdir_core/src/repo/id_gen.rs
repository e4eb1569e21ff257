//! Identifier generation for newly inserted employees.

use crate::model::employee::EmployeeId;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of opaque employee identifiers.
///
/// Implementations must be collision-free; the table still refuses ids it
/// has already issued.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> EmployeeId;
}

/// Random UUID v4 generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> EmployeeId {
        Uuid::new_v4()
    }
}

/// Deterministic counter-backed generator for tooling and tests.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> EmployeeId {
        Uuid::from_u128(u128::from(self.next.fetch_add(1, Ordering::Relaxed)))
    }
}

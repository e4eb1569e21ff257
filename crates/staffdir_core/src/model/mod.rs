//! Employee directory domain model.
//!
//! # Responsibility
//! - Define the canonical employee record and its closed enumerations.
//! - Keep identity handling in one place so every layer agrees on it.
//!
//! # Invariants
//! - Every stored employee carries a stable `EmployeeId`.
//! - Deletion removes records entirely; there are no tombstones.

pub mod employee;

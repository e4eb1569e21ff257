//! Criteria-based employee search.
//!
//! # Responsibility
//! - Map client-supplied criteria onto a single store query.
//!
//! # Invariants
//! - Criteria never combine with AND semantics; one entry decides.

pub mod criteria;

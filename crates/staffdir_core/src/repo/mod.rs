//! Record store: the in-memory employee table and its shared handle.
//!
//! # Responsibility
//! - Own the canonical employee collection exclusively.
//! - Serialize every mutation behind one lock.
//!
//! # Invariants
//! - No other module mutates the collection directly.
//! - Store operations report absence as `None`/`false`, never as errors.

pub mod employee_repo;
pub mod id_gen;
pub mod seed;
pub mod store;

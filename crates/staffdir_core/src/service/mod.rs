//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into read and write pipelines.
//! - Translate absence and rule breaks into named failure outcomes.
//!
//! # Invariants
//! - Services never bypass the store to touch the collection.

pub mod error;
pub mod read_service;
pub mod write_service;

//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define data access contracts for company storage.
//! - Isolate SQLite query details from the service boundary.
//!
//! # Invariants
//! - Repository APIs surface storage faults as `RepoError`, never panic.
//! - No statement outlives the call that prepared it.

pub mod company_repo;

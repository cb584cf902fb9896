//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the data access contract the service depends on.
//! - Keep storage details (currently process memory) behind that contract.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`DuplicateId`, `NotFound`).
//! - Observer failures surface as `RepoError::Observer` after commit.

pub mod student_repo;

//! Domain model for student records.
//!
//! # Responsibility
//! - Define the record shape shared by repository, service and shell.
//!
//! # Invariants
//! - Every record is identified by its caller-supplied `StudentId`.
//! - Deletion is a hard removal; there are no tombstones.

pub mod student;

//! Core domain logic for student records.
//! This crate is the single source of truth for record invariants.

pub mod logging;
pub mod model;
pub mod observer;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::student::{FormError, Student, StudentForm, StudentId};
pub use observer::{
    FaultPolicy, LoggingObserver, ObserverError, ObserverRegistry, ObserverResult,
    StudentObserver,
};
pub use repo::student_repo::{InMemoryStudentRepository, RepoError, RepoResult, StudentRepository};
pub use service::student_service::{ServiceResult, StudentService, StudentServiceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

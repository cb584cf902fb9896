//! Change notification contracts for student mutations.
//!
//! # Responsibility
//! - Define the observer capability the repository notifies.
//! - Keep side-effecting consumers (logging, UI refresh) decoupled from storage.
//!
//! # Invariants
//! - Notifications are delivered after the mutation has committed.
//! - Observers cannot veto a mutation.

use crate::model::student::Student;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod logging_observer;
pub mod registry;

pub use logging_observer::LoggingObserver;
pub use registry::{FaultPolicy, ObserverRegistry};

pub type ObserverResult = Result<(), ObserverError>;

/// Consumer of student mutation events.
///
/// Handlers run synchronously on the caller's thread.
pub trait StudentObserver: Send + Sync {
    /// Short stable name used in diagnostics.
    fn name(&self) -> &str;
    fn on_added(&self, student: &Student) -> ObserverResult;
    fn on_edited(&self, student: &Student) -> ObserverResult;
    fn on_deleted(&self, id: &str) -> ObserverResult;
}

/// Failure reported by one observer handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObserverError {
    pub observer: String,
    pub message: String,
}

impl ObserverError {
    pub fn new(observer: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            observer: observer.into(),
            message: message.into(),
        }
    }
}

impl Display for ObserverError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "observer `{}` failed: {}", self.observer, self.message)
    }
}

impl Error for ObserverError {}

//! Observer that writes mutation events to the core log.
//!
//! # Invariants
//! - Only ids and ages are logged; `names` never reach the log files.
//! - Logging never fails the mutation.

use crate::model::student::Student;
use crate::observer::{ObserverResult, StudentObserver};
use log::info;

#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingObserver;

impl LoggingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl StudentObserver for LoggingObserver {
    fn name(&self) -> &str {
        "logging"
    }

    fn on_added(&self, student: &Student) -> ObserverResult {
        info!(
            "event=student_added module=observer status=ok id={} age={}",
            student.id, student.age
        );
        Ok(())
    }

    fn on_edited(&self, student: &Student) -> ObserverResult {
        info!(
            "event=student_edited module=observer status=ok id={} age={}",
            student.id, student.age
        );
        Ok(())
    }

    fn on_deleted(&self, id: &str) -> ObserverResult {
        info!("event=student_deleted module=observer status=ok id={id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::LoggingObserver;
    use crate::model::student::Student;
    use crate::observer::StudentObserver;

    #[test]
    fn handlers_never_fail() {
        let observer = LoggingObserver::new();
        let student = Student::new("A1", "Ana Lopez", 20);
        assert_eq!(observer.name(), "logging");
        assert!(observer.on_added(&student).is_ok());
        assert!(observer.on_edited(&student).is_ok());
        assert!(observer.on_deleted("A1").is_ok());
    }
}

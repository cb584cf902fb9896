//! Ordered observer registry and synchronous fan-out.

use crate::model::student::Student;
use crate::observer::{ObserverError, ObserverResult, StudentObserver};
use log::warn;
use std::sync::Arc;

/// How delivery reacts to a failing observer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FaultPolicy {
    /// Stop at the first failure and surface it to the mutating caller.
    #[default]
    Propagate,
    /// Log each failure and keep delivering to the remaining observers.
    Isolate,
}

/// Registration-ordered set of observers.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Arc<dyn StudentObserver>>,
    policy: FaultPolicy,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: FaultPolicy) -> Self {
        Self {
            observers: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> FaultPolicy {
        self.policy
    }

    /// Appends one observer; registration order is delivery order.
    ///
    /// Subscribing the same `Arc` twice delivers to it twice.
    pub fn subscribe(&mut self, observer: Arc<dyn StudentObserver>) {
        self.observers.push(observer);
    }

    /// Removes the first registration of `observer` by pointer identity.
    ///
    /// Returns `false` when the observer was not registered.
    pub fn unsubscribe(&mut self, observer: &Arc<dyn StudentObserver>) -> bool {
        match self
            .observers
            .iter()
            .position(|registered| Arc::ptr_eq(registered, observer))
        {
            Some(index) => {
                self.observers.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn notify_added(&self, student: &Student) -> ObserverResult {
        self.deliver("added", |observer| observer.on_added(student))
    }

    pub fn notify_edited(&self, student: &Student) -> ObserverResult {
        self.deliver("edited", |observer| observer.on_edited(student))
    }

    pub fn notify_deleted(&self, id: &str) -> ObserverResult {
        self.deliver("deleted", |observer| observer.on_deleted(id))
    }

    fn deliver<F>(&self, event: &str, mut handler: F) -> ObserverResult
    where
        F: FnMut(&dyn StudentObserver) -> ObserverResult,
    {
        for observer in &self.observers {
            let Err(err) = handler(observer.as_ref()) else {
                continue;
            };
            match self.policy {
                FaultPolicy::Propagate => return Err(err),
                FaultPolicy::Isolate => log_isolated_fault(event, &err),
            }
        }
        Ok(())
    }
}

fn log_isolated_fault(event: &str, err: &ObserverError) {
    warn!(
        "event=observer_fault module=observer status=isolated kind={} observer={} message={}",
        event, err.observer, err.message
    );
}

#[cfg(test)]
mod tests {
    use super::{FaultPolicy, ObserverRegistry};
    use crate::model::student::Student;
    use crate::observer::{ObserverError, ObserverResult, StudentObserver};
    use std::sync::{Arc, Mutex};

    type Journal = Arc<Mutex<Vec<String>>>;

    struct Tracer {
        name: &'static str,
        fail: bool,
        journal: Journal,
    }

    impl Tracer {
        fn record(&self, line: String) -> ObserverResult {
            self.journal
                .lock()
                .expect("journal lock")
                .push(format!("{}:{line}", self.name));
            if self.fail {
                return Err(ObserverError::new(self.name, "boom"));
            }
            Ok(())
        }
    }

    impl StudentObserver for Tracer {
        fn name(&self) -> &str {
            self.name
        }

        fn on_added(&self, student: &Student) -> ObserverResult {
            self.record(format!("added {}", student.id))
        }

        fn on_edited(&self, student: &Student) -> ObserverResult {
            self.record(format!("edited {}", student.id))
        }

        fn on_deleted(&self, id: &str) -> ObserverResult {
            self.record(format!("deleted {id}"))
        }
    }

    fn tracer(name: &'static str, fail: bool, journal: &Journal) -> Arc<dyn StudentObserver> {
        Arc::new(Tracer {
            name,
            fail,
            journal: Arc::clone(journal),
        })
    }

    fn entries(journal: &Journal) -> Vec<String> {
        journal.lock().expect("journal lock").clone()
    }

    #[test]
    fn delivers_in_subscription_order() {
        let journal = Journal::default();
        let mut registry = ObserverRegistry::new();
        registry.subscribe(tracer("first", false, &journal));
        registry.subscribe(tracer("second", false, &journal));

        registry
            .notify_deleted("A1")
            .expect("healthy observers should not fail");

        assert_eq!(
            entries(&journal),
            vec!["first:deleted A1".to_string(), "second:deleted A1".to_string()]
        );
    }

    #[test]
    fn unsubscribe_uses_identity_and_is_noop_when_absent() {
        let journal = Journal::default();
        let mut registry = ObserverRegistry::new();
        let kept = tracer("kept", false, &journal);
        let removed = tracer("removed", false, &journal);
        registry.subscribe(Arc::clone(&kept));
        registry.subscribe(Arc::clone(&removed));

        assert!(registry.unsubscribe(&removed));
        assert!(!registry.unsubscribe(&removed));
        assert_eq!(registry.len(), 1);

        registry
            .notify_added(&Student::new("A1", "Ana", 20))
            .expect("delivery should succeed");
        assert_eq!(entries(&journal), vec!["kept:added A1".to_string()]);
    }

    #[test]
    fn propagate_policy_stops_at_first_failure() {
        let journal = Journal::default();
        let mut registry = ObserverRegistry::new();
        registry.subscribe(tracer("broken", true, &journal));
        registry.subscribe(tracer("after", false, &journal));

        let err = registry
            .notify_edited(&Student::new("A1", "Ana", 21))
            .expect_err("failure must propagate");
        assert_eq!(err.observer, "broken");
        assert_eq!(entries(&journal), vec!["broken:edited A1".to_string()]);
    }

    #[test]
    fn isolate_policy_keeps_delivering() {
        let journal = Journal::default();
        let mut registry = ObserverRegistry::with_policy(FaultPolicy::Isolate);
        registry.subscribe(tracer("broken", true, &journal));
        registry.subscribe(tracer("after", false, &journal));

        registry
            .notify_deleted("A1")
            .expect("isolated failures are not surfaced");
        assert_eq!(
            entries(&journal),
            vec!["broken:deleted A1".to_string(), "after:deleted A1".to_string()]
        );
    }

    #[test]
    fn empty_registry_is_a_noop() {
        let registry = ObserverRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.policy(), FaultPolicy::Propagate);
        registry
            .notify_deleted("missing")
            .expect("no observers means no failures");
    }
}

//! Student repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the authoritative collection of student records.
//! - Enforce id uniqueness and notify observers after each mutation.
//!
//! # Invariants
//! - No two stored records share an `id`.
//! - `edit` never changes the stored `id`.
//! - Field validation is the service's job; direct calls are not re-validated.
//! - Notifications fire only after the mutation has committed.

use crate::model::student::Student;
use crate::observer::{ObserverError, ObserverRegistry, StudentObserver};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for student mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// `add` refused because the id is already stored.
    DuplicateId(String),
    /// `edit`/`delete` target does not exist.
    NotFound(String),
    /// Mutation committed, but an observer failed during fan-out.
    Observer(ObserverError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "student id already stored: {id}"),
            Self::NotFound(id) => write!(f, "student not found: {id}"),
            Self::Observer(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Observer(err) => Some(err),
            Self::DuplicateId(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<ObserverError> for RepoError {
    fn from(value: ObserverError) -> Self {
        Self::Observer(value)
    }
}

/// Repository interface for student CRUD operations.
pub trait StudentRepository {
    fn add(&mut self, student: Student) -> RepoResult<()>;
    fn edit(&mut self, student: &Student) -> RepoResult<()>;
    fn delete(&mut self, id: &str) -> RepoResult<()>;
    fn list(&self) -> Vec<Student>;
    fn exists_by_id(&self, id: &str) -> bool;
    fn get_by_id(&self, id: &str) -> Option<Student>;
}

/// Insertion-ordered, process-memory student store.
#[derive(Default)]
pub struct InMemoryStudentRepository {
    students: Vec<Student>,
    observers: ObserverRegistry,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that notifies an already-populated registry.
    pub fn with_observers(observers: ObserverRegistry) -> Self {
        Self {
            students: Vec::new(),
            observers,
        }
    }

    pub fn subscribe(&mut self, observer: Arc<dyn StudentObserver>) {
        self.observers.subscribe(observer);
    }

    pub fn unsubscribe(&mut self, observer: &Arc<dyn StudentObserver>) -> bool {
        self.observers.unsubscribe(observer)
    }

    pub fn observers(&self) -> &ObserverRegistry {
        &self.observers
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        if id.is_empty() {
            return None;
        }
        self.students.iter().position(|student| student.id == id)
    }
}

impl StudentRepository for InMemoryStudentRepository {
    fn add(&mut self, student: Student) -> RepoResult<()> {
        // Raw equality: lookups ignore empty ids, uniqueness does not.
        if self.students.iter().any(|stored| stored.id == student.id) {
            return Err(RepoError::DuplicateId(student.id));
        }

        self.students.push(student);
        if let Some(stored) = self.students.last() {
            self.observers.notify_added(stored)?;
        }
        Ok(())
    }

    fn edit(&mut self, student: &Student) -> RepoResult<()> {
        let index = self
            .position_of(&student.id)
            .ok_or_else(|| RepoError::NotFound(student.id.clone()))?;

        let stored = &mut self.students[index];
        stored.names.clone_from(&student.names);
        stored.age = student.age;

        self.observers.notify_edited(&self.students[index])?;
        Ok(())
    }

    fn delete(&mut self, id: &str) -> RepoResult<()> {
        let index = self
            .position_of(id)
            .ok_or_else(|| RepoError::NotFound(id.to_string()))?;

        self.students.remove(index);
        self.observers.notify_deleted(id)?;
        Ok(())
    }

    fn list(&self) -> Vec<Student> {
        self.students.clone()
    }

    fn exists_by_id(&self, id: &str) -> bool {
        self.position_of(id).is_some()
    }

    fn get_by_id(&self, id: &str) -> Option<Student> {
        self.position_of(id).map(|index| self.students[index].clone())
    }
}

//! Student use-case service.
//!
//! # Responsibility
//! - Validate caller input before any repository mutation.
//! - Translate repository failures into stable, human-readable outcomes.
//!
//! # Invariants
//! - Rules are checked in a fixed order; the first failing rule wins.
//! - A rejected request never mutates the repository.
//! - `edit` does not check `names`; only `add` does.
//! - Outside callers reach the repository only through this service.

use crate::model::student::Student;
use crate::observer::ObserverError;
use crate::repo::student_repo::{RepoError, StudentRepository};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, StudentServiceError>;

/// Outcome of a rejected service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentServiceError {
    /// No record was supplied.
    NilRecord,
    IdRequired,
    NamesRequired,
    AgeNotPositive,
    IdAlreadyExists,
    /// The repository refused an add that passed every check.
    AddRejected,
    NotFound,
    /// The mutation committed but an observer failed during delivery.
    ObserverFailed(ObserverError),
}

impl StudentServiceError {
    /// Stable machine-readable code for this outcome.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NilRecord => "nil_record",
            Self::IdRequired => "id_required",
            Self::NamesRequired => "names_required",
            Self::AgeNotPositive => "age_not_positive",
            Self::IdAlreadyExists => "id_already_exists",
            Self::AddRejected => "add_rejected",
            Self::NotFound => "not_found",
            Self::ObserverFailed(_) => "observer_failed",
        }
    }
}

impl Display for StudentServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilRecord => write!(f, "nil record"),
            Self::IdRequired => write!(f, "id is required"),
            Self::NamesRequired => write!(f, "names are required"),
            Self::AgeNotPositive => write!(f, "age must be greater than 0"),
            Self::IdAlreadyExists => write!(f, "id already exists"),
            Self::AddRejected => write!(f, "error adding"),
            Self::NotFound => write!(f, "no student with that id"),
            Self::ObserverFailed(err) => write!(f, "observer failed: {err}"),
        }
    }
}

impl Error for StudentServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ObserverFailed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for StudentServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::DuplicateId(_) => Self::IdAlreadyExists,
            RepoError::NotFound(_) => Self::NotFound,
            RepoError::Observer(err) => Self::ObserverFailed(err),
        }
    }
}

/// Validating facade over a student repository.
pub struct StudentService<R: StudentRepository> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Read-only access for wiring code (observer inspection, diagnostics).
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Adds one new student.
    ///
    /// # Contract
    /// Checks, in order: record present, id non-blank, names non-blank,
    /// `age > 0`, id not stored yet. Only then delegates to the repository.
    pub fn add(&mut self, student: Option<&Student>) -> ServiceResult<()> {
        let result = self.try_add(student);
        log_outcome("student_add", &result);
        result
    }

    /// Overwrites `names` and `age` of an existing student.
    ///
    /// # Contract
    /// Checks, in order: record present with non-blank id, `age > 0`.
    /// `names` is stored as given, even when blank.
    pub fn edit(&mut self, student: Option<&Student>) -> ServiceResult<()> {
        let result = self.try_edit(student);
        log_outcome("student_edit", &result);
        result
    }

    /// Removes one student by id.
    pub fn delete(&mut self, id: &str) -> ServiceResult<()> {
        let result = if id.trim().is_empty() {
            Err(StudentServiceError::IdRequired)
        } else {
            self.repo.delete(id).map_err(StudentServiceError::from)
        };
        log_outcome("student_delete", &result);
        result
    }

    /// Returns a snapshot of all students in insertion order.
    pub fn list(&self) -> Vec<Student> {
        self.repo.list()
    }

    /// Looks up one student; blank ids never match.
    pub fn get(&self, id: &str) -> Option<Student> {
        self.repo.get_by_id(id)
    }

    fn try_add(&mut self, student: Option<&Student>) -> ServiceResult<()> {
        let student = match student {
            Some(student) => student,
            None => return Err(StudentServiceError::NilRecord),
        };
        validate_for_add(student)?;
        if self.repo.exists_by_id(&student.id) {
            return Err(StudentServiceError::IdAlreadyExists);
        }

        self.repo.add(student.clone()).map_err(|err| match err {
            RepoError::Observer(err) => StudentServiceError::ObserverFailed(err),
            RepoError::DuplicateId(_) | RepoError::NotFound(_) => {
                StudentServiceError::AddRejected
            }
        })
    }

    fn try_edit(&mut self, student: Option<&Student>) -> ServiceResult<()> {
        let student = match student {
            Some(student) if !student.has_blank_id() => student,
            _ => return Err(StudentServiceError::IdRequired),
        };
        if student.age <= 0 {
            return Err(StudentServiceError::AgeNotPositive);
        }

        self.repo.edit(student)?;
        Ok(())
    }
}

fn validate_for_add(student: &Student) -> ServiceResult<()> {
    if student.has_blank_id() {
        return Err(StudentServiceError::IdRequired);
    }
    if student.has_blank_names() {
        return Err(StudentServiceError::NamesRequired);
    }
    if student.age <= 0 {
        return Err(StudentServiceError::AgeNotPositive);
    }
    Ok(())
}

fn log_outcome(event: &str, result: &ServiceResult<()>) {
    match result {
        Ok(()) => debug!("event={event} module=service status=ok"),
        Err(err) => debug!(
            "event={event} module=service status=rejected code={}",
            err.code()
        ),
    }
}

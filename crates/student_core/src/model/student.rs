//! Student domain model.
//!
//! # Responsibility
//! - Define the single record type managed by the core.
//! - Convert raw form text into a typed record.
//!
//! # Invariants
//! - `id` is the lookup key and never changes once stored.
//! - An empty `id`/`names` string stands for an absent value.
//! - Form parsing only trims and parses; business rules live in the service.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Caller-supplied student identifier.
pub type StudentId = String;

/// Canonical student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique lookup key; immutable after the record is stored.
    pub id: StudentId,
    /// Full names as typed by the user.
    pub names: String,
    /// Age in years. Accepted values are strictly positive.
    pub age: i32,
}

impl Student {
    pub fn new(id: impl Into<StudentId>, names: impl Into<String>, age: i32) -> Self {
        Self {
            id: id.into(),
            names: names.into(),
            age,
        }
    }

    /// Returns whether `id` is empty or whitespace-only.
    pub fn has_blank_id(&self) -> bool {
        self.id.trim().is_empty()
    }

    /// Returns whether `names` is empty or whitespace-only.
    pub fn has_blank_names(&self) -> bool {
        self.names.trim().is_empty()
    }
}

impl Display for Student {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {} | {}", self.id, self.names, self.age)
    }
}

/// Raw text captured by an input form before conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub id: String,
    pub names: String,
    pub age: String,
}

impl StudentForm {
    pub fn new(id: impl Into<String>, names: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            names: names.into(),
            age: age.into(),
        }
    }

    /// Pre-fills form fields from a stored record (row selection).
    pub fn from_student(student: &Student) -> Self {
        Self {
            id: student.id.clone(),
            names: student.names.clone(),
            age: student.age.to_string(),
        }
    }

    /// Converts form text into a `Student`.
    ///
    /// # Contract
    /// - `id` and `names` are trimmed.
    /// - `age` must parse as a base-10 `i32` after trimming.
    /// - Blank fields and non-positive ages pass through unchanged.
    ///
    /// # Errors
    /// - Returns `FormError::InvalidAge` when the age text is not an integer.
    pub fn parse(&self) -> Result<Student, FormError> {
        let age_text = self.age.trim();
        let age = age_text
            .parse::<i32>()
            .map_err(|_| FormError::InvalidAge(age_text.to_string()))?;

        Ok(Student::new(self.id.trim(), self.names.trim(), age))
    }
}

/// Form conversion errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    InvalidAge(String),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAge(_) => write!(f, "invalid age"),
        }
    }
}

impl Error for FormError {}

//! Core use-case services.
//!
//! # Responsibility
//! - Gate every external call with input validation.
//! - Keep shell/UI layers decoupled from storage details.

pub mod student_service;

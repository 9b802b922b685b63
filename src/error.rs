//! Crate error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced before a search starts.
///
/// Running out of free slots, lecturers, or rooms during the search is
/// not an error: the affected session or mutation variant is omitted.
#[derive(Debug, Error)]
pub enum TimetableError {
    /// The input cannot be scheduled at all (see [`crate::validation`]).
    #[error("invalid timetable input ({} problem(s)): {}", .0.len(), summarize(.0))]
    Configuration(Vec<ValidationError>),

    /// The evolution parameters are inconsistent.
    #[error("invalid evolution config: {0}")]
    InvalidConfig(String),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

//! Student group model.

use serde::{Deserialize, Serialize};

/// A student group that attends sessions together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique group identifier.
    pub id: String,
    /// Headcount (must fit the room capacity).
    pub size: u32,
    /// Names of the subjects this group must take.
    pub subjects: Vec<String>,
}

impl Group {
    /// Creates a group with no subjects.
    pub fn new(id: impl Into<String>, size: u32) -> Self {
        Self {
            id: id.into(),
            size,
            subjects: Vec::new(),
        }
    }

    /// Adds a required subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subjects.push(subject.into());
        self
    }

    /// Whether the group takes the given subject.
    pub fn takes(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| s == subject)
    }
}

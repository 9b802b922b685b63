//! Lecturer model.
//!
//! A lecturer is qualified to teach specific session kinds of specific
//! subjects. Occupancy checks identify lecturers by `name`.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::SessionKind;

/// A lecturer and the (subject, kind) pairs they may teach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecturer {
    /// Unique lecturer identifier.
    pub id: String,
    /// Display name; also the identity used for double-booking checks.
    pub name: String,
    /// Subject name → kinds this lecturer is qualified for.
    pub qualifications: BTreeMap<String, BTreeSet<SessionKind>>,
}

impl Lecturer {
    /// Creates a lecturer with no qualifications.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            qualifications: BTreeMap::new(),
        }
    }

    /// Adds a qualification for one kind of a subject.
    pub fn with_qualification(mut self, subject: impl Into<String>, kind: SessionKind) -> Self {
        self.qualifications
            .entry(subject.into())
            .or_default()
            .insert(kind);
        self
    }

    /// Whether the lecturer can teach `kind` sessions of `subject`.
    pub fn can_teach(&self, subject: &str, kind: SessionKind) -> bool {
        self.qualifications
            .get(subject)
            .is_some_and(|kinds| kinds.contains(&kind))
    }
}

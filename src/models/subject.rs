//! Subject model.
//!
//! A subject requires a number of lecture hours and practice hours per
//! week. Hours are converted to sessions at a fixed quantum of
//! [`HOURS_PER_SESSION`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hours of required teaching covered by one scheduled session.
pub const HOURS_PER_SESSION: u32 = 5;

/// Teaching modality of a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum SessionKind {
    /// Lecture to the whole group.
    Lecture,
    /// Practice (lab, seminar) session.
    Practice,
}

impl SessionKind {
    /// Both kinds, lecture first.
    pub const ALL: [SessionKind; 2] = [SessionKind::Lecture, SessionKind::Practice];

    /// Display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKind::Lecture => "Lecture",
            SessionKind::Practice => "Practice",
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A subject with its weekly hour requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject name.
    pub name: String,
    /// Required lecture hours.
    pub lecture_hours: u32,
    /// Required practice hours.
    pub practice_hours: u32,
}

impl Subject {
    /// Creates a subject with no hours.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lecture_hours: 0,
            practice_hours: 0,
        }
    }

    /// Sets the lecture hours.
    pub fn with_lecture_hours(mut self, hours: u32) -> Self {
        self.lecture_hours = hours;
        self
    }

    /// Sets the practice hours.
    pub fn with_practice_hours(mut self, hours: u32) -> Self {
        self.practice_hours = hours;
        self
    }

    /// Required hours for a session kind.
    pub fn hours(&self, kind: SessionKind) -> u32 {
        match kind {
            SessionKind::Lecture => self.lecture_hours,
            SessionKind::Practice => self.practice_hours,
        }
    }

    /// Required number of sessions for a kind (`hours / HOURS_PER_SESSION`).
    #[inline]
    pub fn session_count(&self, kind: SessionKind) -> u32 {
        self.hours(kind) / HOURS_PER_SESSION
    }

    /// Kinds this subject requires hours in.
    pub fn kinds(&self) -> impl Iterator<Item = SessionKind> + '_ {
        SessionKind::ALL
            .into_iter()
            .filter(move |&kind| self.hours(kind) > 0)
    }
}

//! Room model.

use serde::{Deserialize, Serialize};

/// A teaching room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Seating capacity.
    pub capacity: u32,
}

impl Room {
    /// Creates a room.
    pub fn new(id: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            capacity,
        }
    }

    /// Whether a group of `headcount` students fits.
    #[inline]
    pub fn fits(&self, headcount: u32) -> bool {
        self.capacity >= headcount
    }
}

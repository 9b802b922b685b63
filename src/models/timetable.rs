//! Timetable (solution) model.
//!
//! A timetable maps (group, slot) coordinates to the session taught there.
//! A group can hold at most one session per slot by construction; lecturer
//! and room double-booking is detected by [`crate::constraints`].
//!
//! Entries are kept in a `BTreeMap` so iteration order is fixed, which
//! makes seeded runs reproducible.

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};

use super::{SessionKind, TimeSlot};

/// Coordinate of a timetable entry: one group at one slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotKey {
    /// Group identifier.
    pub group: String,
    /// Grid position.
    pub slot: TimeSlot,
}

impl SlotKey {
    /// Creates a key.
    pub fn new(group: impl Into<String>, slot: TimeSlot) -> Self {
        Self {
            group: group.into(),
            slot,
        }
    }
}

/// The session placed at one (group, slot) coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionAssignment {
    /// Subject name.
    pub subject: String,
    /// Lecturer name.
    pub lecturer: String,
    /// Room identifier.
    pub room: String,
    /// Lecture or practice.
    pub kind: SessionKind,
}

impl SessionAssignment {
    /// Creates an assignment.
    pub fn new(
        subject: impl Into<String>,
        lecturer: impl Into<String>,
        room: impl Into<String>,
        kind: SessionKind,
    ) -> Self {
        Self {
            subject: subject.into(),
            lecturer: lecturer.into(),
            room: room.into(),
            kind,
        }
    }
}

/// A candidate timetable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timetable {
    entries: BTreeMap<SlotKey, SessionAssignment>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a session, returning the one previously at that key.
    pub fn insert(&mut self, key: SlotKey, assignment: SessionAssignment) -> Option<SessionAssignment> {
        self.entries.insert(key, assignment)
    }

    /// Places a session only if the key is vacant. Returns whether it was placed.
    pub fn insert_if_vacant(&mut self, key: SlotKey, assignment: SessionAssignment) -> bool {
        match self.entries.entry(key) {
            btree_map::Entry::Vacant(v) => {
                v.insert(assignment);
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    /// Removes the session at a key.
    pub fn remove(&mut self, key: &SlotKey) -> Option<SessionAssignment> {
        self.entries.remove(key)
    }

    /// Session at a key.
    pub fn get(&self, key: &SlotKey) -> Option<&SessionAssignment> {
        self.entries.get(key)
    }

    /// Whether a key is occupied.
    pub fn contains(&self, key: &SlotKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of scheduled sessions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no session is scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&SlotKey, &SessionAssignment)> {
        self.entries.iter()
    }

    /// All keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &SlotKey> {
        self.entries.keys()
    }

    /// Entries belonging to one group, in slot order.
    pub fn entries_for_group<'a>(
        &'a self,
        group: &'a str,
    ) -> impl Iterator<Item = (&'a SlotKey, &'a SessionAssignment)> + 'a {
        self.entries.iter().filter(move |(k, _)| k.group == group)
    }

    /// Entries taught by one lecturer.
    pub fn entries_for_lecturer<'a>(
        &'a self,
        lecturer: &'a str,
    ) -> impl Iterator<Item = (&'a SlotKey, &'a SessionAssignment)> + 'a {
        self.entries.iter().filter(move |(_, a)| a.lecturer == lecturer)
    }

    /// Days that hold at least one session.
    pub fn days(&self) -> BTreeSet<u8> {
        self.entries.keys().map(|k| k.slot.day).collect()
    }

    /// Group ids that hold at least one session.
    pub fn groups_with_entries(&self) -> BTreeSet<&str> {
        self.entries.keys().map(|k| k.group.as_str()).collect()
    }

    /// Whether a new session for `group` with `lecturer` in `room` at
    /// `slot` would collide with nothing already placed.
    pub fn can_place(&self, group: &str, slot: TimeSlot, lecturer: &str, room: &str) -> bool {
        if self.contains(&SlotKey::new(group, slot)) {
            return false;
        }
        !self
            .entries
            .iter()
            .any(|(k, a)| k.slot == slot && (a.lecturer == lecturer || a.room == room))
    }
}

impl FromIterator<(SlotKey, SessionAssignment)> for Timetable {
    fn from_iter<I: IntoIterator<Item = (SlotKey, SessionAssignment)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Timetable {
    type Item = (&'a SlotKey, &'a SessionAssignment);
    type IntoIter = btree_map::Iter<'a, SlotKey, SessionAssignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

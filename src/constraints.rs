//! Hard-constraint checking.
//!
//! A timetable is usable only if no group, lecturer, or room is booked
//! twice in the same slot. [`count_violations`] is the single source of
//! truth for that property; the genetic operators call it before accepting
//! a candidate.
//!
//! [`Occupancy`] tracks the three (entity, slot) sets. The checker builds
//! one while scanning; the initializer owns one for the duration of a
//! construction call.

use std::collections::HashSet;

use crate::models::{TimeSlot, Timetable};

/// Booked (entity, slot) pairs for groups, lecturers, and rooms.
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    groups: HashSet<(String, TimeSlot)>,
    lecturers: HashSet<(String, TimeSlot)>,
    rooms: HashSet<(String, TimeSlot)>,
}

impl Occupancy {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tracker from every entry of a timetable.
    pub fn from_timetable(timetable: &Timetable) -> Self {
        let mut occupancy = Self::new();
        for (key, a) in timetable {
            occupancy.occupy(&key.group, &a.lecturer, &a.room, key.slot);
        }
        occupancy
    }

    /// Whether the group has nothing at `slot`.
    #[inline]
    pub fn group_free(&self, group: &str, slot: TimeSlot) -> bool {
        !self.groups.contains(&(group.to_string(), slot))
    }

    /// Whether the lecturer has nothing at `slot`.
    #[inline]
    pub fn lecturer_free(&self, lecturer: &str, slot: TimeSlot) -> bool {
        !self.lecturers.contains(&(lecturer.to_string(), slot))
    }

    /// Whether the room has nothing at `slot`.
    #[inline]
    pub fn room_free(&self, room: &str, slot: TimeSlot) -> bool {
        !self.rooms.contains(&(room.to_string(), slot))
    }

    /// Whether all three entities are free at `slot`.
    pub fn is_free(&self, group: &str, lecturer: &str, room: &str, slot: TimeSlot) -> bool {
        self.group_free(group, slot) && self.lecturer_free(lecturer, slot) && self.room_free(room, slot)
    }

    /// Marks all three entities busy at `slot`.
    ///
    /// Returns how many of the three were already booked there (0..=3).
    pub fn occupy(&mut self, group: &str, lecturer: &str, room: &str, slot: TimeSlot) -> usize {
        let mut collisions = 0;
        if !self.groups.insert((group.to_string(), slot)) {
            collisions += 1;
        }
        if !self.lecturers.insert((lecturer.to_string(), slot)) {
            collisions += 1;
        }
        if !self.rooms.insert((room.to_string(), slot)) {
            collisions += 1;
        }
        collisions
    }
}

/// Counts hard-constraint violations.
///
/// Every repeated (group, slot), (lecturer, slot), or (room, slot) pair
/// adds one. Never fails; zero means the timetable is valid.
pub fn count_violations(timetable: &Timetable) -> usize {
    let mut occupancy = Occupancy::new();
    timetable
        .iter()
        .map(|(key, a)| occupancy.occupy(&key.group, &a.lecturer, &a.room, key.slot))
        .sum()
}

/// Whether the timetable has no double bookings.
#[inline]
pub fn is_hard_valid(timetable: &Timetable) -> bool {
    count_violations(timetable) == 0
}

//! Weekly time grid.
//!
//! The timetable works on a fixed grid of 5 teaching days × 4 periods.
//! Every entity (group, lecturer, room) shares this 20-slot domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of teaching days per week.
pub const DAYS: u8 = 5;

/// Number of periods per teaching day.
pub const PERIODS: u8 = 4;

/// Total number of slots in the weekly grid.
pub const SLOT_COUNT: usize = DAYS as usize * PERIODS as usize;

/// Display names for the teaching days, indexed by `TimeSlot::day`.
pub const DAY_NAMES: [&str; DAYS as usize] =
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// A (day, period) coordinate in the weekly grid.
///
/// Ordered by day first, then period.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TimeSlot {
    /// Day index in `0..DAYS`.
    pub day: u8,
    /// Period index in `0..PERIODS`.
    pub period: u8,
}

impl TimeSlot {
    /// Creates a slot.
    ///
    /// Coordinates are not range-checked; use [`TimeSlot::is_in_grid`]
    /// when the values come from outside input.
    pub const fn new(day: u8, period: u8) -> Self {
        Self { day, period }
    }

    /// All 20 slots, day-major.
    pub fn all() -> Vec<TimeSlot> {
        (0..DAYS)
            .flat_map(|day| (0..PERIODS).map(move |period| TimeSlot::new(day, period)))
            .collect()
    }

    /// Whether the slot lies inside the weekly grid.
    #[inline]
    pub fn is_in_grid(&self) -> bool {
        self.day < DAYS && self.period < PERIODS
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match DAY_NAMES.get(self.day as usize) {
            Some(name) => write!(f, "{} P{}", name, self.period + 1),
            None => write!(f, "day {} P{}", self.day, self.period + 1),
        }
    }
}

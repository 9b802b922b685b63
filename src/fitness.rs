//! Timetable fitness (soft-constraint scoring).
//!
//! Fitness starts from [`BASELINE`] and subtracts three penalty terms.
//! Higher is better. Hard validity is not scored here; it is enforced by
//! the operators before a timetable enters the population.
//!
//! # Terms
//!
//! | Term | Scope | Penalty |
//! |------|-------|---------|
//! | Coverage | (group, subject, kind) with hours | 10·\|assigned − required\|⁴ |
//! | Group gaps | each group | 10·windows⁴ |
//! | Lecturer gaps | each lecturer in the timetable | 2·windows² |
//!
//! Coverage and group compactness use quartic penalties so that a single
//! missing session or idle period outweighs many lecturer gaps.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Group, SessionKind, Subject, TimeSlot, Timetable};

/// Score of a timetable with no soft violations.
pub const BASELINE: f64 = 1000.0;

const COVERAGE_WEIGHT: f64 = 10.0;
const COVERAGE_EXPONENT: i32 = 4;
const GROUP_GAP_WEIGHT: f64 = 10.0;
const GROUP_GAP_EXPONENT: i32 = 4;
const LECTURER_GAP_WEIGHT: f64 = 2.0;
const LECTURER_GAP_EXPONENT: i32 = 2;

/// Counts idle periods strictly between occupied periods of the same day.
///
/// Slots on different days never form a gap.
///
/// ```
/// use u_timetable::fitness::windows;
/// use u_timetable::models::TimeSlot;
///
/// let slots = [TimeSlot::new(0, 0), TimeSlot::new(0, 3), TimeSlot::new(1, 0)];
/// assert_eq!(windows(slots), 2);
/// ```
pub fn windows(slots: impl IntoIterator<Item = TimeSlot>) -> u32 {
    let mut by_day: BTreeMap<u8, Vec<u8>> = BTreeMap::new();
    for slot in slots {
        by_day.entry(slot.day).or_default().push(slot.period);
    }

    by_day
        .into_values()
        .map(|mut periods| {
            periods.sort_unstable();
            periods
                .windows(2)
                .map(|pair| u32::from(pair[1] - pair[0]).saturating_sub(1))
                .sum::<u32>()
        })
        .sum()
}

/// The three penalty terms of a timetable's fitness.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FitnessBreakdown {
    /// Penalty for assigned sessions differing from required sessions.
    pub coverage: f64,
    /// Penalty for idle periods in group days.
    pub group_gaps: f64,
    /// Penalty for idle periods in lecturer days.
    pub lecturer_gaps: f64,
}

impl FitnessBreakdown {
    /// Computes all penalty terms.
    ///
    /// # Arguments
    /// * `timetable` - The candidate to score.
    /// * `groups` - Every group of the problem.
    /// * `subjects` - Subjects by name. Group subjects missing here are
    ///   ignored (validation rejects them upstream).
    pub fn calculate(
        timetable: &Timetable,
        groups: &[Group],
        subjects: &BTreeMap<String, Subject>,
    ) -> Self {
        let mut assigned: BTreeMap<(&str, &str, SessionKind), i64> = BTreeMap::new();
        for (key, a) in timetable {
            *assigned
                .entry((key.group.as_str(), a.subject.as_str(), a.kind))
                .or_insert(0) += 1;
        }

        let mut coverage = 0.0;
        let mut group_gaps = 0.0;
        for group in groups {
            for name in &group.subjects {
                let Some(subject) = subjects.get(name) else {
                    continue;
                };
                for kind in subject.kinds() {
                    let required = i64::from(subject.session_count(kind));
                    let count = assigned
                        .get(&(group.id.as_str(), name.as_str(), kind))
                        .copied()
                        .unwrap_or(0);
                    let diff = (count - required).abs() as f64;
                    coverage += COVERAGE_WEIGHT * diff.powi(COVERAGE_EXPONENT);
                }
            }

            let w = windows(timetable.entries_for_group(&group.id).map(|(k, _)| k.slot));
            group_gaps += GROUP_GAP_WEIGHT * f64::from(w).powi(GROUP_GAP_EXPONENT);
        }

        let mut lecturer_slots: BTreeMap<&str, Vec<TimeSlot>> = BTreeMap::new();
        for (key, a) in timetable {
            lecturer_slots
                .entry(a.lecturer.as_str())
                .or_default()
                .push(key.slot);
        }
        let lecturer_gaps: f64 = lecturer_slots
            .into_values()
            .map(|slots| {
                let w = windows(slots);
                LECTURER_GAP_WEIGHT * f64::from(w).powi(LECTURER_GAP_EXPONENT)
            })
            .sum();

        Self {
            coverage,
            group_gaps,
            lecturer_gaps,
        }
    }

    /// Sum of all penalty terms.
    pub fn total_penalty(&self) -> f64 {
        self.coverage + self.group_gaps + self.lecturer_gaps
    }

    /// Fitness value: [`BASELINE`] minus the total penalty.
    pub fn score(&self) -> f64 {
        BASELINE - self.total_penalty()
    }
}

/// Ids of groups whose every (subject, kind) requirement is met exactly.
pub fn fully_covered_groups<'a>(
    timetable: &Timetable,
    groups: &'a [Group],
    subjects: &BTreeMap<String, Subject>,
) -> BTreeSet<&'a str> {
    groups
        .iter()
        .filter(|group| {
            group.subjects.iter().all(|name| {
                subjects.get(name).map_or(true, |subject| {
                    subject.kinds().all(|kind| {
                        let count = timetable
                            .entries_for_group(&group.id)
                            .filter(|(_, a)| a.subject == *name && a.kind == kind)
                            .count();
                        count == subject.session_count(kind) as usize
                    })
                })
            })
        })
        .map(|g| g.id.as_str())
        .collect()
}

//! Constraint-aware genetic operators for timetables.
//!
//! # Crossover
//!
//! [`crossover`] recombines two parents by partitioning days: the child
//! inherits parent 1's sessions on one half of parent 1's days and
//! parent 2's sessions on the remaining days. The child may double-book a
//! lecturer or room; callers check it with
//! [`crate::constraints::is_hard_valid`].
//!
//! # Mutation
//!
//! [`mutate`] returns the unchanged input followed by up to three local
//! edits ([`MutationVariant`]). Every edit is checked against the hard
//! constraints and silently left out if it fails or finds nothing to do.
//!
//! # Usage
//!
//! ```
//! use u_timetable::ga::operators::{MutationVariant, mutate_with};
//! use u_timetable::ga::TimetableProblem;
//! use u_timetable::models::{Group, Lecturer, Room, SessionKind, Subject};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let problem = TimetableProblem::new(
//!     vec![Group::new("G1", 20).with_subject("Math")],
//!     vec![Subject::new("Math").with_lecture_hours(10)],
//!     vec![Lecturer::new("L1", "Smith").with_qualification("Math", SessionKind::Lecture)],
//!     vec![Room::new("R1", 30)],
//! )
//! .unwrap();
//! let mut rng = StdRng::seed_from_u64(1);
//! let timetable = problem.generate_valid_schedule(&mut rng);
//!
//! let variants = mutate_with(&problem, &timetable, &[MutationVariant::Drop], &mut rng);
//! assert_eq!(variants.len(), 2);
//! assert_eq!(variants[0], timetable);
//! ```

use std::collections::BTreeSet;

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use super::TimetableProblem;
use crate::constraints::is_hard_valid;
use crate::models::{Group, SlotKey, Timetable, DAYS};

/// Local edit applied by [`mutate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationVariant {
    /// Remove one random session.
    Drop,
    /// Add one random session for a random group.
    Insert,
    /// Remove a session of one group, then add one for a different group.
    Swap,
}

impl MutationVariant {
    /// All variants in the order [`mutate`] tries them.
    pub const ALL: [MutationVariant; 3] = [
        MutationVariant::Drop,
        MutationVariant::Insert,
        MutationVariant::Swap,
    ];
}

/// Day-partition crossover.
///
/// Days used by `p1` (all days if `p1` is empty) are shuffled and split
/// in half; see [`split_days`] and [`combine_days`].
pub fn crossover<R: Rng + ?Sized>(p1: &Timetable, p2: &Timetable, rng: &mut R) -> Timetable {
    let (days_a, days_b) = split_days(p1, rng);
    combine_days(p1, p2, &days_a, &days_b)
}

/// Splits `parent`'s days into two disjoint sets.
///
/// The first set holds `len / 2` shuffled days (rounded down), the second
/// holds the rest.
pub fn split_days<R: Rng + ?Sized>(parent: &Timetable, rng: &mut R) -> (BTreeSet<u8>, BTreeSet<u8>) {
    let mut days: Vec<u8> = parent.days().into_iter().collect();
    if days.is_empty() {
        days = (0..DAYS).collect();
    }
    days.shuffle(rng);
    let split = days.len() / 2;
    let days_b = days.split_off(split);
    (days.into_iter().collect(), days_b.into_iter().collect())
}

/// Builds a child from `p1` on `days_a` and `p2` on `days_b`.
///
/// `p1` wins when both parents hold a session at the same key.
pub fn combine_days(
    p1: &Timetable,
    p2: &Timetable,
    days_a: &BTreeSet<u8>,
    days_b: &BTreeSet<u8>,
) -> Timetable {
    let mut child: Timetable = p1
        .iter()
        .filter(|(k, _)| days_a.contains(&k.slot.day))
        .map(|(k, a)| (k.clone(), a.clone()))
        .collect();

    for (k, a) in p2.iter().filter(|(k, _)| days_b.contains(&k.slot.day)) {
        child.insert_if_vacant(k.clone(), a.clone());
    }
    child
}

/// Produces the unchanged input plus every hard-valid variant.
///
/// Returns between 1 and 4 timetables; index 0 is always a copy of
/// `timetable`.
pub fn mutate<R: Rng + ?Sized>(
    problem: &TimetableProblem,
    timetable: &Timetable,
    rng: &mut R,
) -> Vec<Timetable> {
    mutate_with(problem, timetable, &MutationVariant::ALL, rng)
}

/// Like [`mutate`], restricted to the given variants (tried in order).
pub fn mutate_with<R: Rng + ?Sized>(
    problem: &TimetableProblem,
    timetable: &Timetable,
    variants: &[MutationVariant],
    rng: &mut R,
) -> Vec<Timetable> {
    let mut results = vec![timetable.clone()];
    for &variant in variants {
        let candidate = match variant {
            MutationVariant::Drop => drop_session(timetable, rng),
            MutationVariant::Insert => insert_session(problem, timetable, rng),
            MutationVariant::Swap => swap_session(problem, timetable, rng),
        };
        if let Some(candidate) = candidate.filter(is_hard_valid) {
            results.push(candidate);
        }
    }
    results
}

fn drop_session<R: Rng + ?Sized>(timetable: &Timetable, rng: &mut R) -> Option<Timetable> {
    let keys: Vec<&SlotKey> = timetable.keys().collect();
    let key = (*keys.choose(rng)?).clone();
    let mut dropped = timetable.clone();
    dropped.remove(&key);
    Some(dropped)
}

fn insert_session<R: Rng + ?Sized>(
    problem: &TimetableProblem,
    timetable: &Timetable,
    rng: &mut R,
) -> Option<Timetable> {
    let group = problem.groups().choose(rng)?;
    let mut inserted = timetable.clone();
    problem
        .try_insert_session(&mut inserted, group, rng)
        .then_some(inserted)
}

fn swap_session<R: Rng + ?Sized>(
    problem: &TimetableProblem,
    timetable: &Timetable,
    rng: &mut R,
) -> Option<Timetable> {
    let donors: Vec<&str> = timetable.groups_with_entries().into_iter().collect();
    let donor = *donors.choose(rng)?;
    let donor_keys: Vec<&SlotKey> = timetable
        .entries_for_group(donor)
        .map(|(k, _)| k)
        .collect();
    let key = (*donor_keys.choose(rng)?).clone();

    let receivers: Vec<&Group> = problem.groups().iter().filter(|g| g.id != donor).collect();
    let receiver = *receivers.choose(rng)?;

    let mut swapped = timetable.clone();
    swapped.remove(&key);
    problem
        .try_insert_session(&mut swapped, receiver, rng)
        .then_some(swapped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::count_violations;
    use crate::ga::testing::{department_problem, single_group_problem};
    use crate::models::{SessionAssignment, SessionKind, TimeSlot};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn entry(group: &str, day: u8, period: u8, lecturer: &str, room: &str) -> (SlotKey, SessionAssignment) {
        (
            SlotKey::new(group, TimeSlot::new(day, period)),
            SessionAssignment::new("Math", lecturer, room, SessionKind::Lecture),
        )
    }

    fn day_zero_parent() -> Timetable {
        vec![entry("G1", 0, 0, "Smith", "R1"), entry("G2", 0, 1, "Lee", "R2")]
            .into_iter()
            .collect()
    }

    fn later_days_parent() -> Timetable {
        vec![
            entry("G1", 1, 0, "Smith", "R1"),
            entry("G1", 2, 3, "Smith", "R1"),
            entry("G2", 4, 2, "Lee", "R2"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_split_days_partitions_parent_days() {
        let parent = later_days_parent();
        let mut rng = SmallRng::seed_from_u64(42);
        let (a, b) = split_days(&parent, &mut rng);
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 2);
        assert!(a.is_disjoint(&b));
        let union: BTreeSet<u8> = a.union(&b).copied().collect();
        assert_eq!(union, parent.days());
    }

    #[test]
    fn test_split_days_empty_parent_uses_full_week() {
        let mut rng = SmallRng::seed_from_u64(42);
        let (a, b) = split_days(&Timetable::new(), &mut rng);
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn test_crossover_disjoint_day_parents() {
        let p1 = day_zero_parent();
        let p2 = later_days_parent();
        let mut rng = SmallRng::seed_from_u64(7);
        let (days_a, days_b) = split_days(&p1, &mut rng);
        // a single parent-1 day rounds down to an empty first half
        assert!(days_a.is_empty());
        assert_eq!(days_b, BTreeSet::from([0]));

        let child = combine_days(&p1, &p2, &days_a, &days_b);
        let expected: Timetable = p1
            .iter()
            .filter(|(k, _)| days_a.contains(&k.slot.day))
            .chain(p2.iter().filter(|(k, _)| days_b.contains(&k.slot.day)))
            .map(|(k, a)| (k.clone(), a.clone()))
            .collect();
        assert_eq!(child, expected);
        assert!(child.is_empty());
    }

    #[test]
    fn test_combine_days_takes_each_parent_on_its_days() {
        let p1: Timetable = day_zero_parent()
            .iter()
            .map(|(k, a)| (k.clone(), a.clone()))
            .chain([entry("G1", 3, 0, "Kim", "R3")])
            .collect();
        let p2 = later_days_parent();

        let child = combine_days(&p1, &p2, &BTreeSet::from([0]), &BTreeSet::from([1, 2, 3, 4]));
        assert_eq!(child.len(), 5);
        assert!(child.contains(&SlotKey::new("G1", TimeSlot::new(0, 0))));
        assert!(child.contains(&SlotKey::new("G2", TimeSlot::new(4, 2))));
        // day 3 belongs to parent 2, which has nothing there
        assert!(!child.contains(&SlotKey::new("G1", TimeSlot::new(3, 0))));
    }

    #[test]
    fn test_combine_days_parent_one_wins_key_collisions() {
        let p1: Timetable = vec![entry("G1", 0, 0, "Smith", "R1")].into_iter().collect();
        let p2: Timetable = vec![entry("G1", 0, 0, "Lee", "R2")].into_iter().collect();
        let days = BTreeSet::from([0]);
        let child = combine_days(&p1, &p2, &days, &days);
        assert_eq!(child.len(), 1);
        assert_eq!(child.get(&SlotKey::new("G1", TimeSlot::new(0, 0))).unwrap().lecturer, "Smith");
    }

    #[test]
    fn test_crossover_can_produce_invalid_child() {
        // Smith teaches G1 on day 0 in p1 and G2 at the same slot in p2
        let p1: Timetable = vec![entry("G1", 0, 0, "Smith", "R1"), entry("G1", 1, 0, "Lee", "R2")]
            .into_iter()
            .collect();
        let p2: Timetable = vec![entry("G2", 0, 0, "Smith", "R2")].into_iter().collect();
        let child = combine_days(&p1, &p2, &BTreeSet::from([0]), &BTreeSet::from([0, 1]));
        assert_eq!(count_violations(&child), 1);
    }

    #[test]
    fn test_crossover_child_entries_come_from_parents() {
        let problem = department_problem();
        let mut rng = SmallRng::seed_from_u64(21);
        let p1 = problem.generate_valid_schedule(&mut rng);
        let p2 = problem.generate_valid_schedule(&mut rng);
        let child = crossover(&p1, &p2, &mut rng);
        for (k, a) in &child {
            assert!(p1.get(k) == Some(a) || p2.get(k) == Some(a));
        }
    }

    #[test]
    fn test_mutate_first_variant_is_input() {
        let problem = department_problem();
        let mut rng = SmallRng::seed_from_u64(5);
        let t = problem.generate_valid_schedule(&mut rng);
        for _ in 0..20 {
            let variants = mutate(&problem, &t, &mut rng);
            assert!((1..=4).contains(&variants.len()));
            assert_eq!(variants[0], t);
            assert!(variants.iter().all(is_hard_valid));
        }
    }

    #[test]
    fn test_drop_variant_always_present() {
        let problem = department_problem();
        let mut rng = SmallRng::seed_from_u64(13);
        for _ in 0..20 {
            let t = problem.generate_valid_schedule(&mut rng);
            let variants = mutate_with(&problem, &t, &[MutationVariant::Drop], &mut rng);
            assert_eq!(variants.len(), 2);
            assert_eq!(variants[1].len(), t.len() - 1);
        }
    }

    #[test]
    fn test_drop_on_empty_returns_only_input() {
        let problem = single_group_problem();
        let mut rng = SmallRng::seed_from_u64(0);
        let variants = mutate(&problem, &Timetable::new(), &mut rng);
        // insert may still succeed on an empty timetable; drop and swap cannot
        assert!(variants.len() <= 2);
        assert!(variants[0].is_empty());
    }

    #[test]
    fn test_insert_variant_adds_one_session() {
        let problem = single_group_problem();
        let mut rng = SmallRng::seed_from_u64(3);
        let t = Timetable::new();
        let variants = mutate_with(&problem, &t, &[MutationVariant::Insert], &mut rng);
        // empty timetable: every slot, lecturer, and room is free
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[1].len(), 1);
        let (key, a) = variants[1].iter().next().unwrap();
        assert_eq!(key.group, "G1");
        assert_eq!(a.lecturer, "Smith");
        assert_eq!(a.kind, SessionKind::Lecture);
    }

    #[test]
    fn test_swap_needs_another_group() {
        let problem = single_group_problem();
        let mut rng = SmallRng::seed_from_u64(9);
        let t = problem.generate_valid_schedule(&mut rng);
        let variants = mutate_with(&problem, &t, &[MutationVariant::Swap], &mut rng);
        assert_eq!(variants.len(), 1);
    }

    #[test]
    fn test_swap_moves_load_between_groups() {
        let problem = department_problem();
        let mut rng = SmallRng::seed_from_u64(17);
        let mut swapped_any = false;
        for _ in 0..50 {
            let t = problem.generate_valid_schedule(&mut rng);
            let variants = mutate_with(&problem, &t, &[MutationVariant::Swap], &mut rng);
            if let Some(s) = variants.get(1) {
                swapped_any = true;
                assert_eq!(s.len(), t.len());
                assert!(is_hard_valid(s));
                assert_ne!(s, &t);
            }
        }
        assert!(swapped_any);
    }
}

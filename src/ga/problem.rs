//! Timetabling problem definition and constructive initializer.
//!
//! [`TimetableProblem`] owns the validated domain input and provides the
//! lookups the genetic operators need: qualified lecturers per
//! (subject, kind), rooms per headcount, and fitness evaluation.
//!
//! # Initial schedules
//!
//! [`TimetableProblem::generate_valid_schedule`] is a randomized greedy
//! builder. For every (group, subject, kind) it draws a session count in
//! `1..=hours/5` and places each session at the first shuffled slot where
//! the group, a shuffled qualified lecturer, and a shuffled large-enough
//! room are all free. A session that finds no such triple is skipped;
//! there is no retry and no backtracking. Because the session count is
//! drawn below the requirement and skipped sessions are never retried,
//! initial timetables typically under-cover the required hours. Fitness
//! penalizes this and the mutation operators repair it over generations.

use std::collections::BTreeMap;

use log::trace;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::constraints::Occupancy;
use crate::fitness::FitnessBreakdown;
use crate::models::{
    Group, Lecturer, Room, SessionAssignment, SessionKind, SlotKey, Subject, TimeSlot, Timetable,
    DAYS, PERIODS,
};
use crate::validation::validate_input;
use crate::TimetableError;

/// Validated timetabling input.
///
/// # Example
/// ```
/// use u_timetable::ga::TimetableProblem;
/// use u_timetable::models::{Group, Lecturer, Room, SessionKind, Subject};
/// use u_timetable::constraints::is_hard_valid;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let problem = TimetableProblem::new(
///     vec![Group::new("G1", 20).with_subject("Math")],
///     vec![Subject::new("Math").with_lecture_hours(10)],
///     vec![Lecturer::new("L1", "Smith").with_qualification("Math", SessionKind::Lecture)],
///     vec![Room::new("R1", 30)],
/// )
/// .unwrap();
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let timetable = problem.generate_valid_schedule(&mut rng);
/// assert!(is_hard_valid(&timetable));
/// ```
#[derive(Debug, Clone)]
pub struct TimetableProblem {
    groups: Vec<Group>,
    subjects: BTreeMap<String, Subject>,
    lecturers: Vec<Lecturer>,
    rooms: Vec<Room>,
}

impl TimetableProblem {
    /// Creates a problem after validating the input.
    ///
    /// # Errors
    /// [`TimetableError::Configuration`] with every problem found by
    /// [`validate_input`], e.g. a subject whose hours cannot fill one
    /// session or a required (subject, kind) nobody may teach.
    pub fn new(
        groups: Vec<Group>,
        subjects: Vec<Subject>,
        lecturers: Vec<Lecturer>,
        rooms: Vec<Room>,
    ) -> Result<Self, TimetableError> {
        validate_input(&groups, &subjects, &lecturers, &rooms)
            .map_err(TimetableError::Configuration)?;

        Ok(Self {
            groups,
            subjects: subjects.into_iter().map(|s| (s.name.clone(), s)).collect(),
            lecturers,
            rooms,
        })
    }

    /// All groups, in input order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Subjects by name.
    pub fn subjects(&self) -> &BTreeMap<String, Subject> {
        &self.subjects
    }

    /// All lecturers, in input order.
    pub fn lecturers(&self) -> &[Lecturer] {
        &self.lecturers
    }

    /// All rooms, in input order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Looks up a group by id.
    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Looks up a subject by name.
    pub fn subject(&self, name: &str) -> Option<&Subject> {
        self.subjects.get(name)
    }

    /// Lecturers qualified for `kind` sessions of `subject`, in input order.
    pub fn qualified_lecturers(&self, subject: &str, kind: SessionKind) -> Vec<&Lecturer> {
        self.lecturers
            .iter()
            .filter(|l| l.can_teach(subject, kind))
            .collect()
    }

    /// Rooms that seat `headcount`, in input order.
    pub fn rooms_for(&self, headcount: u32) -> Vec<&Room> {
        self.rooms.iter().filter(|r| r.fits(headcount)).collect()
    }

    /// Fitness of a timetable (higher is better).
    pub fn fitness(&self, timetable: &Timetable) -> f64 {
        self.fitness_breakdown(timetable).score()
    }

    /// Per-term penalties of a timetable.
    pub fn fitness_breakdown(&self, timetable: &Timetable) -> FitnessBreakdown {
        FitnessBreakdown::calculate(timetable, &self.groups, &self.subjects)
    }

    /// Builds a random timetable with no double bookings.
    ///
    /// The result is always hard-valid: a session is committed only after
    /// its group, lecturer, and room are confirmed free at the slot.
    pub fn generate_valid_schedule<R: Rng + ?Sized>(&self, rng: &mut R) -> Timetable {
        let mut timetable = Timetable::new();
        let mut occupancy = Occupancy::new();
        let mut slots = TimeSlot::all();

        for group in &self.groups {
            let rooms = self.rooms_for(group.size);
            for name in &group.subjects {
                let Some(subject) = self.subjects.get(name) else {
                    continue;
                };
                for kind in subject.kinds() {
                    let max_sessions = subject.session_count(kind);
                    if max_sessions == 0 {
                        continue;
                    }
                    let lecturers = self.qualified_lecturers(name, kind);
                    let sessions = rng.random_range(1..=max_sessions);

                    for _ in 0..sessions {
                        slots.shuffle(rng);
                        match find_placement(&group.id, &lecturers, &rooms, &slots, &occupancy, rng) {
                            Some((slot, lecturer, room)) => {
                                occupancy.occupy(&group.id, &lecturer.name, &room.id, slot);
                                timetable.insert(
                                    SlotKey::new(group.id.clone(), slot),
                                    SessionAssignment::new(name.clone(), lecturer.name.clone(), room.id.clone(), kind),
                                );
                            }
                            None => trace!("no free slot for {} {} of group {}", name, kind, group.id),
                        }
                    }
                }
            }
        }

        timetable
    }

    /// Tries to add one random session for `group` to `timetable`.
    ///
    /// Picks a random required subject, a random kind it has hours in, and
    /// a random slot; then a random qualified lecturer and a random
    /// large-enough room free at that slot. Returns `false` (leaving the
    /// timetable untouched) if any pick finds nothing.
    pub fn try_insert_session<R: Rng + ?Sized>(
        &self,
        timetable: &mut Timetable,
        group: &Group,
        rng: &mut R,
    ) -> bool {
        let Some(subject) = group.subjects.choose(rng).and_then(|n| self.subjects.get(n)) else {
            return false;
        };
        let kinds: Vec<SessionKind> = subject.kinds().collect();
        let Some(&kind) = kinds.choose(rng) else {
            return false;
        };
        let slot = TimeSlot::new(rng.random_range(0..DAYS), rng.random_range(0..PERIODS));

        let occupancy = Occupancy::from_timetable(timetable);
        if !occupancy.group_free(&group.id, slot) {
            return false;
        }
        let lecturers: Vec<&Lecturer> = self
            .qualified_lecturers(&subject.name, kind)
            .into_iter()
            .filter(|l| occupancy.lecturer_free(&l.name, slot))
            .collect();
        let Some(lecturer) = lecturers.choose(rng) else {
            return false;
        };
        let rooms: Vec<&Room> = self
            .rooms_for(group.size)
            .into_iter()
            .filter(|r| occupancy.room_free(&r.id, slot))
            .collect();
        let Some(room) = rooms.choose(rng) else {
            return false;
        };

        timetable.insert_if_vacant(
            SlotKey::new(group.id.clone(), slot),
            SessionAssignment::new(subject.name.clone(), lecturer.name.clone(), room.id.clone(), kind),
        )
    }
}

/// First (slot, lecturer, room) in shuffled order where all three are free.
fn find_placement<'p, R: Rng + ?Sized>(
    group: &str,
    lecturers: &[&'p Lecturer],
    rooms: &[&'p Room],
    slots: &[TimeSlot],
    occupancy: &Occupancy,
    rng: &mut R,
) -> Option<(TimeSlot, &'p Lecturer, &'p Room)> {
    for &slot in slots {
        if !occupancy.group_free(group, slot) {
            continue;
        }
        let mut free_lecturers: Vec<&Lecturer> = lecturers
            .iter()
            .copied()
            .filter(|l| occupancy.lecturer_free(&l.name, slot))
            .collect();
        if free_lecturers.is_empty() {
            continue;
        }
        free_lecturers.shuffle(rng);

        let mut free_rooms: Vec<&Room> = rooms
            .iter()
            .copied()
            .filter(|r| occupancy.room_free(&r.id, slot))
            .collect();
        if free_rooms.is_empty() {
            continue;
        }
        free_rooms.shuffle(rng);

        return Some((slot, free_lecturers[0], free_rooms[0]));
    }
    None
}

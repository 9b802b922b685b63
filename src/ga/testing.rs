//! Shared problem fixtures for unit tests.

use super::TimetableProblem;
use crate::models::{Group, Lecturer, Room, SessionKind, Subject};

/// One group, one lecture-only subject worth two sessions.
pub(crate) fn single_group_problem() -> TimetableProblem {
    TimetableProblem::new(
        vec![Group::new("G1", 20).with_subject("Math")],
        vec![Subject::new("Math").with_lecture_hours(10)],
        vec![Lecturer::new("L1", "Smith").with_qualification("Math", SessionKind::Lecture)],
        vec![Room::new("R1", 30)],
    )
    .expect("valid fixture")
}

/// Three groups sharing three lecturers and three rooms.
///
/// EE-1 (45 students) fits only room B.
pub(crate) fn department_problem() -> TimetableProblem {
    TimetableProblem::new(
        vec![
            Group::new("CS-1", 30).with_subject("Math").with_subject("Programming"),
            Group::new("CS-2", 25).with_subject("Math").with_subject("Physics"),
            Group::new("EE-1", 45).with_subject("Physics").with_subject("Programming"),
        ],
        vec![
            Subject::new("Math").with_lecture_hours(10).with_practice_hours(10),
            Subject::new("Programming").with_lecture_hours(5).with_practice_hours(15),
            Subject::new("Physics").with_lecture_hours(10).with_practice_hours(5),
        ],
        vec![
            Lecturer::new("L1", "Smith")
                .with_qualification("Math", SessionKind::Lecture)
                .with_qualification("Math", SessionKind::Practice),
            Lecturer::new("L2", "Lee")
                .with_qualification("Programming", SessionKind::Lecture)
                .with_qualification("Programming", SessionKind::Practice)
                .with_qualification("Math", SessionKind::Practice),
            Lecturer::new("L3", "Garcia")
                .with_qualification("Physics", SessionKind::Lecture)
                .with_qualification("Physics", SessionKind::Practice),
        ],
        vec![Room::new("A", 30), Room::new("B", 50), Room::new("C", 25)],
    )
    .expect("valid fixture")
}

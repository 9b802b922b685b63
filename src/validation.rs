//! Input validation for timetabling problems.
//!
//! Checks that the loaded groups, subjects, lecturers, and rooms can be
//! scheduled at all before any search begins. Detects:
//! - Duplicate identifiers (lecturers are keyed by name)
//! - Groups requiring unknown subjects
//! - Subjects with no hours, or with hours below one session
//! - Required (subject, kind) pairs nobody is qualified to teach
//! - Groups larger than every room
//!
//! All problems are collected; the caller gets the full list at once.

use crate::models::{Group, HOURS_PER_SESSION, Lecturer, Room, SessionKind, Subject};
use std::collections::{BTreeSet, HashMap, HashSet};
use thiserror::Error;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same identifier.
    DuplicateId,
    /// A group requires a subject that was not loaded.
    UnknownSubject,
    /// A subject has neither lecture nor practice hours.
    EmptySubject,
    /// A subject's hours for some kind do not fill one session.
    InsufficientHours,
    /// No lecturer may teach a required (subject, kind).
    NoQualifiedLecturer,
    /// No room can seat a group.
    NoSuitableRoom,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a timetabling problem.
///
/// Checks:
/// 1. No duplicate group, subject, lecturer-name, or room identifiers
/// 2. Every subject has some hours, and each nonzero figure covers at
///    least one session of [`HOURS_PER_SESSION`] hours
/// 3. Every subject a group requires exists
/// 4. Every required (subject, kind) has a qualified lecturer
/// 5. Every group with subjects fits in at least one room
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    groups: &[Group],
    subjects: &[Subject],
    lecturers: &[Lecturer],
    rooms: &[Room],
) -> ValidationResult {
    let mut errors = Vec::new();

    check_unique(groups.iter().map(|g| g.id.as_str()), "group ID", &mut errors);
    check_unique(subjects.iter().map(|s| s.name.as_str()), "subject name", &mut errors);
    check_unique(lecturers.iter().map(|l| l.name.as_str()), "lecturer name", &mut errors);
    check_unique(rooms.iter().map(|r| r.id.as_str()), "room ID", &mut errors);

    for subject in subjects {
        if subject.lecture_hours == 0 && subject.practice_hours == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptySubject,
                format!("Subject '{}' has no lecture or practice hours", subject.name),
            ));
        }
        for kind in subject.kinds() {
            if subject.session_count(kind) < 1 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InsufficientHours,
                    format!(
                        "Subject '{}' has {} {} hour(s), fewer than one {}-hour session",
                        subject.name,
                        subject.hours(kind),
                        kind,
                        HOURS_PER_SESSION
                    ),
                ));
            }
        }
    }

    let subject_map: HashMap<&str, &Subject> =
        subjects.iter().map(|s| (s.name.as_str(), s)).collect();

    // (subject, kind) pairs some group requires
    let mut required: BTreeSet<(&str, SessionKind)> = BTreeSet::new();
    for group in groups {
        for name in &group.subjects {
            match subject_map.get(name.as_str()) {
                Some(subject) => {
                    required.extend(subject.kinds().map(|kind| (subject.name.as_str(), kind)));
                }
                None => errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSubject,
                    format!("Group '{}' requires unknown subject '{}'", group.id, name),
                )),
            }
        }

        if !group.subjects.is_empty() && !rooms.iter().any(|r| r.fits(group.size)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoSuitableRoom,
                format!("No room can seat group '{}' of size {}", group.id, group.size),
            ));
        }
    }

    for (subject, kind) in required {
        if !lecturers.iter().any(|l| l.can_teach(subject, kind)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoQualifiedLecturer,
                format!("No lecturer is qualified for {} sessions of '{}'", kind, subject),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_unique<'a>(
    ids: impl Iterator<Item = &'a str>,
    what: &str,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {what}: {id}"),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_subjects() -> Vec<Subject> {
        vec![
            Subject::new("Math").with_lecture_hours(10).with_practice_hours(5),
            Subject::new("Art").with_practice_hours(10),
        ]
    }

    fn sample_groups() -> Vec<Group> {
        vec![
            Group::new("G1", 20).with_subject("Math").with_subject("Art"),
            Group::new("G2", 35).with_subject("Math"),
        ]
    }

    fn sample_lecturers() -> Vec<Lecturer> {
        vec![
            Lecturer::new("L1", "Smith")
                .with_qualification("Math", SessionKind::Lecture)
                .with_qualification("Math", SessionKind::Practice),
            Lecturer::new("L2", "Lee").with_qualification("Art", SessionKind::Practice),
        ]
    }

    fn sample_rooms() -> Vec<Room> {
        vec![Room::new("R1", 30), Room::new("R2", 40)]
    }

    fn kinds_of(errors: &[ValidationError]) -> Vec<ValidationErrorKind> {
        errors.iter().map(|e| e.kind.clone()).collect()
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(
            &sample_groups(),
            &sample_subjects(),
            &sample_lecturers(),
            &sample_rooms()
        )
        .is_ok());
    }

    #[test]
    fn test_duplicate_ids() {
        let groups = vec![Group::new("G1", 10), Group::new("G1", 12)];
        let rooms = vec![Room::new("R1", 30), Room::new("R1", 20)];
        let errors = validate_input(&groups, &sample_subjects(), &sample_lecturers(), &rooms)
            .unwrap_err();
        assert_eq!(
            kinds_of(&errors),
            vec![ValidationErrorKind::DuplicateId, ValidationErrorKind::DuplicateId]
        );
        assert!(errors[1].message.contains("room"));
    }

    #[test]
    fn test_duplicate_lecturer_name() {
        let lecturers = vec![Lecturer::new("L1", "Smith"), Lecturer::new("L2", "Smith")];
        let errors =
            validate_input(&[], &sample_subjects(), &lecturers, &sample_rooms()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("lecturer")));
    }

    #[test]
    fn test_unknown_subject() {
        let groups = vec![Group::new("G1", 20).with_subject("Chemistry")];
        let errors = validate_input(&groups, &sample_subjects(), &sample_lecturers(), &sample_rooms())
            .unwrap_err();
        assert_eq!(kinds_of(&errors), vec![ValidationErrorKind::UnknownSubject]);
    }

    #[test]
    fn test_insufficient_hours() {
        let subjects = vec![Subject::new("Math").with_lecture_hours(4)];
        let errors = validate_input(&[], &subjects, &sample_lecturers(), &sample_rooms())
            .unwrap_err();
        assert_eq!(kinds_of(&errors), vec![ValidationErrorKind::InsufficientHours]);
    }

    #[test]
    fn test_empty_subject() {
        let subjects = vec![Subject::new("Nothing")];
        let errors = validate_input(&[], &subjects, &[], &[]).unwrap_err();
        assert_eq!(kinds_of(&errors), vec![ValidationErrorKind::EmptySubject]);
    }

    #[test]
    fn test_no_qualified_lecturer() {
        let lecturers = vec![Lecturer::new("L1", "Smith").with_qualification("Math", SessionKind::Lecture)];
        let groups = vec![Group::new("G1", 20).with_subject("Math")];
        let errors = validate_input(&groups, &sample_subjects(), &lecturers, &sample_rooms())
            .unwrap_err();
        assert_eq!(kinds_of(&errors), vec![ValidationErrorKind::NoQualifiedLecturer]);
        assert!(errors[0].message.contains("Practice"));
    }

    #[test]
    fn test_no_suitable_room() {
        let groups = vec![Group::new("Huge", 500).with_subject("Math")];
        let errors = validate_input(&groups, &sample_subjects(), &sample_lecturers(), &sample_rooms())
            .unwrap_err();
        assert_eq!(kinds_of(&errors), vec![ValidationErrorKind::NoSuitableRoom]);
    }

    #[test]
    fn test_multiple_errors() {
        let groups = vec![
            Group::new("G1", 20).with_subject("Unknown"),
            Group::new("G2", 20).with_subject("Math"),
        ];
        let errors = validate_input(&groups, &sample_subjects(), &[], &[]).unwrap_err();
        assert!(errors.len() >= 3);
    }
}

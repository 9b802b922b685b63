//! University timetabling for the U-Engine ecosystem.
//!
//! Assigns student groups, lecturers, and rooms to a weekly grid of
//! 5 days × 4 periods and searches for good timetables with a
//! constraint-aware genetic algorithm.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Group`, `Subject`, `Lecturer`, `Room`,
//!   `TimeSlot`, `Timetable`
//! - **`validation`**: Input integrity checks (duplicate IDs, unknown
//!   subjects, unteachable or unseatable requirements)
//! - **`constraints`**: Hard-constraint checks (no lecturer or room double-booking)
//! - **`fitness`**: Soft-constraint scoring (hour coverage, idle windows)
//! - **`ga`**: Problem definition, genetic operators, and the evolution loop
//! - **`report`**: Flat records and per-group grids of a timetable
//!
//! # Example
//!
//! ```
//! use u_timetable::ga::{EvolutionConfig, TimetableGa, TimetableProblem};
//! use u_timetable::models::{Group, Lecturer, Room, SessionKind, Subject};
//! use u_timetable::report::render_group_grid;
//!
//! let problem = TimetableProblem::new(
//!     vec![Group::new("CS-1", 25).with_subject("Math")],
//!     vec![Subject::new("Math").with_lecture_hours(10).with_practice_hours(5)],
//!     vec![Lecturer::new("L1", "Smith")
//!         .with_qualification("Math", SessionKind::Lecture)
//!         .with_qualification("Math", SessionKind::Practice)],
//!     vec![Room::new("101", 30)],
//! )
//! .unwrap();
//!
//! let config = EvolutionConfig::default()
//!     .with_population_size(10)
//!     .with_elite_count(2)
//!     .with_crossover_pairs(2)
//!     .with_mutation_samples(3)
//!     .with_generations(10)
//!     .with_seed(1);
//! let result = TimetableGa::new(problem, config).unwrap().run();
//! println!("{}", render_group_grid(&result.best, "CS-1"));
//! ```
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"

pub mod constraints;
mod error;
pub mod fitness;
pub mod ga;
pub mod models;
pub mod report;
pub mod validation;

pub use error::TimetableError;

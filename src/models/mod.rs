//! Timetabling domain models.
//!
//! Input entities (`Group`, `Subject`, `Lecturer`, `Room`) are immutable
//! once loaded. `Timetable` is the mutable solution aggregate built by the
//! initializer and edited by the genetic operators.
//!
//! # Domain Mappings
//!
//! | u-timetable | University | School | Training Center |
//! |-------------|------------|--------|-----------------|
//! | Group | Student cohort | Class | Course intake |
//! | Subject | Course | Subject | Module |
//! | Lecturer | Faculty member | Teacher | Trainer |
//! | Room | Lecture hall / lab | Classroom | Training room |

mod group;
mod lecturer;
mod room;
mod slot;
mod subject;
mod timetable;

pub use group::Group;
pub use lecturer::Lecturer;
pub use room::Room;
pub use slot::{DAYS, DAY_NAMES, PERIODS, SLOT_COUNT, TimeSlot};
pub use subject::{HOURS_PER_SESSION, SessionKind, Subject};
pub use timetable::{SessionAssignment, SlotKey, Timetable};

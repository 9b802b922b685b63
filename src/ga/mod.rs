//! Genetic search for timetables.
//!
//! The chromosome is the [`Timetable`](crate::models::Timetable) itself:
//! a map from (group, slot) to the session taught there. The operators
//! edit it directly and keep every individual free of lecturer and room
//! double-bookings.
//!
//! # Submodules
//!
//! - [`problem`]: Validated input, lookups, and the greedy initializer
//! - [`operators`]: Day-partition crossover and drop/insert/swap mutation
//! - [`config`]: Evolution parameters
//! - [`engine`]: The generational loop
//!
//! # Reference
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"

pub mod config;
pub mod engine;
pub mod operators;
pub mod problem;

#[cfg(test)]
pub(crate) mod testing;

pub use config::EvolutionConfig;
pub use engine::{EvolutionResult, GenerationReport, Population, TimetableGa};
pub use operators::{crossover, mutate, MutationVariant};
pub use problem::TimetableProblem;

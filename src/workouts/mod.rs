//! Workouts module.
//!
//! Logged workout sessions, the sets performed in them, and the built-in
//! template library users start sessions from.

pub mod library;
pub mod types;

pub use library::{builtin_templates, TemplateFilter, WorkoutTemplate};
pub use types::{Workout, WorkoutSet, WorkoutType};

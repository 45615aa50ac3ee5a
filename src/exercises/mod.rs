//! Exercise catalog module.

pub mod filter;
pub mod types;

pub use filter::{equipment_types, muscle_groups, ExerciseFilter};
pub use types::{Difficulty, Exercise, MuscleGroup};

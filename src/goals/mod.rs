//! Goals module.
//!
//! Measurable fitness objectives (lift a weight, hit a weekly session count,
//! reach a body weight) with a target value, unit and optional target date.

pub mod manager;
pub mod types;

// Re-exports for convenience
pub use manager::{GoalError, GoalManager};
pub use types::{Goal, GoalStatus, GoalType};

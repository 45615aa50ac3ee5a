//! FitTrack - Workout Logging and Progress Tracking
//!
//! Record types for workouts, sets, exercises and goals, typed repositories
//! over an in-memory store, and the aggregation engine that turns flat record
//! lists into dashboard statistics, weekly chart buckets, streaks and goal
//! progress.

pub mod exercises;
pub mod goals;
pub mod metrics;
pub mod storage;
pub mod workouts;

// Re-export commonly used types
pub use goals::{Goal, GoalManager, GoalStatus};
pub use metrics::{DashboardStats, ProgressSummary, WeekBucket};
pub use storage::{AppConfig, MemoryStore, Repository};
pub use workouts::{Workout, WorkoutSet, WorkoutType};

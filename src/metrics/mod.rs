//! Metrics module: derived statistics for the dashboard and progress views.
//!
//! Every function here is a pure computation over already-loaded record
//! slices. Inputs are never mutated and degraded data (missing numbers,
//! empty lists, zero targets) produces the most conservative answer rather
//! than an error.

pub mod dashboard;
pub mod progress;
pub mod streak;
pub mod totals;
pub mod weekly;

pub use dashboard::{DashboardStats, ProgressSummary};
pub use progress::{active_goal_progress, progress_percent, remaining, GoalProgress};
pub use streak::{workout_streak, workout_streak_with, StreakCounting};
pub use totals::{
    active_goal_count, average_duration, completed_goal_count, count_by_status, total_volume,
    workout_count_in_window,
};
pub use weekly::{week_start, weekly_buckets, weekly_buckets_limited, WeekBucket};

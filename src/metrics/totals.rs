//! Aggregate counters over record lists.
//!
//! All functions are pure and never fail: missing numeric fields count as
//! zero and empty inputs give the identity value.

use chrono::{DateTime, Utc};

use crate::goals::{Goal, GoalStatus};
use crate::workouts::{Workout, WorkoutSet};

/// Sum of weight × reps over all sets.
pub fn total_volume(sets: &[WorkoutSet]) -> f64 {
    sets.iter().map(WorkoutSet::volume).sum()
}

/// Number of workouts dated within `[window_start, now]`.
pub fn workout_count_in_window(
    workouts: &[Workout],
    window_start: DateTime<Utc>,
    now: DateTime<Utc>,
) -> usize {
    workouts
        .iter()
        .filter(|w| w.date >= window_start && w.date <= now)
        .count()
}

/// Mean session length in minutes, or 0 for an empty list.
pub fn average_duration(workouts: &[Workout]) -> f64 {
    if workouts.is_empty() {
        return 0.0;
    }

    let total: f64 = workouts.iter().map(Workout::duration_or_zero).sum();
    total / workouts.len() as f64
}

/// Number of goals with the given status.
pub fn count_by_status(goals: &[Goal], status: GoalStatus) -> usize {
    goals.iter().filter(|g| g.status == status).count()
}

/// Number of active goals.
pub fn active_goal_count(goals: &[Goal]) -> usize {
    count_by_status(goals, GoalStatus::Active)
}

/// Number of completed goals.
pub fn completed_goal_count(goals: &[Goal]) -> usize {
    count_by_status(goals, GoalStatus::Completed)
}

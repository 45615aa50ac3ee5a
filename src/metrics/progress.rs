//! Goal progress.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::goals::Goal;

/// Percentage completion of a goal, clamped to 0-100.
///
/// A zero, negative or missing target yields 0.
pub fn progress_percent(goal: &Goal) -> f64 {
    let target = match goal.target_value {
        Some(target) if target > 0.0 => target,
        _ => return 0.0,
    };

    (goal.current_value / target * 100.0).clamp(0.0, 100.0)
}

/// Distance left to the target, never negative. 0 when there is no target.
pub fn remaining(goal: &Goal) -> f64 {
    goal.target_value
        .map_or(0.0, |target| (target - goal.current_value).max(0.0))
}

/// Progress row for the active-goals panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub goal_id: Uuid,
    pub title: String,
    pub current_value: f64,
    pub target_value: f64,
    pub unit: String,
    pub percent: f64,
    pub target_date: Option<NaiveDate>,
}

impl GoalProgress {
    /// Build the row for a goal.
    pub fn from_goal(goal: &Goal) -> Self {
        if goal.target_value.is_none() {
            tracing::warn!("Goal {} has no target value", goal.id);
        }

        Self {
            goal_id: goal.id,
            title: goal.title.clone(),
            current_value: goal.current_value,
            target_value: goal.target_value.unwrap_or(0.0),
            unit: goal.unit.clone(),
            percent: progress_percent(goal),
            target_date: goal.target_date,
        }
    }
}

/// Progress rows for the first `limit` active goals, in input order.
pub fn active_goal_progress(goals: &[Goal], limit: usize) -> Vec<GoalProgress> {
    goals
        .iter()
        .filter(|g| g.status.is_active())
        .take(limit)
        .map(GoalProgress::from_goal)
        .collect()
}

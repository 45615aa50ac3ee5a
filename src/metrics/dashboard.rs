//! Dashboard and progress-view summaries.
//!
//! `compute` works on already-loaded slices; `load` pulls those slices from
//! the repositories using the configured listing limits first.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::progress::{active_goal_progress, GoalProgress};
use super::streak::workout_streak_with;
use super::totals::{
    active_goal_count, average_duration, completed_goal_count, total_volume,
    workout_count_in_window,
};
use super::weekly::{weekly_buckets_limited, WeekBucket};
use crate::goals::Goal;
use crate::storage::{DashboardSettings, ListQuery, ProgressSettings, Repository, StorageResult};
use crate::workouts::{Workout, WorkoutSet};

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_workouts: usize,
    pub this_week_workouts: usize,
    pub total_volume: f64,
    pub active_goals: usize,
    /// Mean session length, rounded to whole minutes
    pub average_workout_minutes: u32,
}

impl DashboardStats {
    /// Compute from loaded records.
    pub fn compute(
        workouts: &[Workout],
        sets: &[WorkoutSet],
        goals: &[Goal],
        now: DateTime<Utc>,
        settings: &DashboardSettings,
    ) -> Self {
        let window_start = Duration::try_days(settings.recent_window_days)
            .and_then(|window| now.checked_sub_signed(window))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        let stats = Self {
            total_workouts: workouts.len(),
            this_week_workouts: workout_count_in_window(workouts, window_start, now),
            total_volume: total_volume(sets),
            active_goals: active_goal_count(goals),
            average_workout_minutes: average_duration(workouts).round() as u32,
        };

        tracing::debug!(?stats, "Dashboard stats computed");
        stats
    }

    /// Load the most recent records and compute.
    pub fn load<W, S, G>(
        workouts: &W,
        sets: &S,
        goals: &G,
        now: DateTime<Utc>,
        settings: &DashboardSettings,
    ) -> StorageResult<Self>
    where
        W: Repository<Workout>,
        S: Repository<WorkoutSet>,
        G: Repository<Goal>,
    {
        let workouts =
            workouts.list(&ListQuery::newest_first().with_limit(settings.workout_limit))?;
        let sets = sets.list(&ListQuery::newest_first().with_limit(settings.set_limit))?;
        let goals = goals.list(&ListQuery::newest_first())?;

        Ok(Self::compute(&workouts, &sets, &goals, now, settings))
    }
}

/// Numbers and chart data for the progress view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub total_workouts: usize,
    pub streak_days: u32,
    pub total_volume: f64,
    pub completed_goals: usize,
    pub active_goals: usize,
    /// Week buckets, oldest first
    pub weekly: Vec<WeekBucket>,
    /// Preview of active goals
    pub active_goal_progress: Vec<GoalProgress>,
}

impl ProgressSummary {
    /// Compute from loaded records.
    pub fn compute(
        workouts: &[Workout],
        sets: &[WorkoutSet],
        goals: &[Goal],
        now: DateTime<Utc>,
        settings: &ProgressSettings,
    ) -> Self {
        let summary = Self {
            total_workouts: workouts.len(),
            streak_days: workout_streak_with(workouts, now.date_naive(), settings.streak_counting),
            total_volume: total_volume(sets),
            completed_goals: completed_goal_count(goals),
            active_goals: active_goal_count(goals),
            weekly: weekly_buckets_limited(workouts, sets, settings.chart_weeks),
            active_goal_progress: active_goal_progress(goals, settings.active_goal_preview),
        };

        tracing::debug!(
            "Progress summary: {} workouts, {} day streak, {} weeks charted",
            summary.total_workouts,
            summary.streak_days,
            summary.weekly.len()
        );
        summary
    }

    /// Load the most recent records and compute.
    pub fn load<W, S, G>(
        workouts: &W,
        sets: &S,
        goals: &G,
        now: DateTime<Utc>,
        settings: &ProgressSettings,
    ) -> StorageResult<Self>
    where
        W: Repository<Workout>,
        S: Repository<WorkoutSet>,
        G: Repository<Goal>,
    {
        let workouts =
            workouts.list(&ListQuery::newest_first().with_limit(settings.workout_limit))?;
        let sets = sets.list(&ListQuery::newest_first().with_limit(settings.set_limit))?;
        let goals = goals.list(&ListQuery::newest_first())?;

        Ok(Self::compute(&workouts, &sets, &goals, now, settings))
    }
}

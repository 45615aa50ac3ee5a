//! Weekly chart buckets.
//!
//! Workouts are grouped by the Sunday that starts their calendar week (UTC).
//! Each bucket carries the workout count, summed duration and the volume of
//! the sets belonging to those workouts. Weeks without workouts produce no
//! bucket.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::workouts::{Workout, WorkoutSet};

/// Default number of weeks shown on the progress charts.
pub const DEFAULT_CHART_WEEKS: usize = 8;

/// Totals for one calendar week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekBucket {
    /// Sunday starting the week
    pub week: NaiveDate,
    /// Workouts logged during the week
    pub workouts: u32,
    /// Summed weight × reps of those workouts' sets
    pub volume: f64,
    /// Summed duration in minutes
    pub duration: f64,
}

impl WeekBucket {
    fn empty(week: NaiveDate) -> Self {
        Self {
            week,
            workouts: 0,
            volume: 0.0,
            duration: 0.0,
        }
    }

    /// Week start rendered as `YYYY-MM-DD`.
    pub fn week_key(&self) -> String {
        self.week.format("%Y-%m-%d").to_string()
    }
}

/// The Sunday on or before the (UTC) calendar day of `date`.
pub fn week_start(date: DateTime<Utc>) -> NaiveDate {
    let day = date.date_naive();
    day - Duration::days(i64::from(day.weekday().num_days_from_sunday()))
}

/// The most recent [`DEFAULT_CHART_WEEKS`] week buckets, oldest first.
pub fn weekly_buckets(workouts: &[Workout], sets: &[WorkoutSet]) -> Vec<WeekBucket> {
    weekly_buckets_limited(workouts, sets, DEFAULT_CHART_WEEKS)
}

/// The most recent `max_weeks` week buckets, oldest first.
pub fn weekly_buckets_limited(
    workouts: &[Workout],
    sets: &[WorkoutSet],
    max_weeks: usize,
) -> Vec<WeekBucket> {
    let volume_by_workout = volume_by_workout(sets);

    let mut weeks: BTreeMap<NaiveDate, WeekBucket> = BTreeMap::new();
    for workout in workouts {
        let week = week_start(workout.date);
        let bucket = weeks.entry(week).or_insert_with(|| WeekBucket::empty(week));

        bucket.workouts += 1;
        bucket.duration += workout.duration_or_zero();
        bucket.volume += volume_by_workout.get(&workout.id).copied().unwrap_or(0.0);
    }

    let skip = weeks.len().saturating_sub(max_weeks);
    let buckets: Vec<WeekBucket> = weeks.into_values().skip(skip).collect();

    tracing::debug!(
        "Built {} week buckets from {} workouts ({} older weeks dropped)",
        buckets.len(),
        workouts.len(),
        skip
    );

    buckets
}

/// Total set volume keyed by workout id. Orphaned sets simply never match.
fn volume_by_workout(sets: &[WorkoutSet]) -> HashMap<Uuid, f64> {
    let mut volumes: HashMap<Uuid, f64> = HashMap::new();
    for set in sets {
        *volumes.entry(set.workout_id).or_insert(0.0) += set.volume();
    }
    volumes
}

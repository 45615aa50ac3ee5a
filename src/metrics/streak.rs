//! Workout streak calculation.
//!
//! Walks workout days from newest to oldest, starting from today at
//! midnight. A day extends the streak while its gap to the cursor is at most
//! `streak + 1` days, which lets the first workout fall on today or
//! yesterday. The first larger gap ends the walk.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::workouts::Workout;

/// How multiple workouts on the same day are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakCounting {
    /// Each calendar day counts once, however many workouts it holds
    #[default]
    DistinctDays,
    /// Every workout advances the streak, so busy days count more than once
    PerWorkout,
}

/// Streak length using [`StreakCounting::DistinctDays`].
pub fn workout_streak(workouts: &[Workout], today: NaiveDate) -> u32 {
    workout_streak_with(workouts, today, StreakCounting::DistinctDays)
}

/// Streak length ending today (or yesterday).
///
/// Workouts dated after `today` are ignored.
pub fn workout_streak_with(workouts: &[Workout], today: NaiveDate, counting: StreakCounting) -> u32 {
    let mut days: Vec<NaiveDate> = workouts
        .iter()
        .map(|w| w.date.date_naive())
        // Future-dated (clock-skewed) workouts never extend the streak
        .filter(|day| *day <= today)
        .collect();

    days.sort_unstable_by(|a, b| b.cmp(a));
    if counting == StreakCounting::DistinctDays {
        days.dedup();
    }

    let mut streak: u32 = 0;
    let mut cursor = today;
    for day in days {
        let gap = (cursor - day).num_days();
        if gap > i64::from(streak) + 1 {
            break;
        }
        streak += 1;
        cursor = day;
    }

    tracing::debug!("Workout streak {} days ({:?})", streak, counting);
    streak
}

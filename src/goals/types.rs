//! Goal type definitions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::metrics::progress;
use crate::storage::lenient;
use crate::storage::Record;

/// A measurable fitness goal set by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: Uuid,
    /// Display title
    pub title: String,
    /// Optional detailed description
    #[serde(default)]
    pub description: Option<String>,
    /// Category of goal
    pub goal_type: GoalType,
    /// Value to reach; zero or absent means progress cannot be measured
    #[serde(default, deserialize_with = "lenient::optional_f64")]
    pub target_value: Option<f64>,
    /// Value reached so far
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub current_value: f64,
    /// Unit for target and current values (e.g. "lbs", "sessions/week")
    #[serde(default)]
    pub unit: String,
    /// Date the goal should be reached by
    #[serde(default, deserialize_with = "lenient::optional_date")]
    pub target_date: Option<NaiveDate>,
    /// Current status
    #[serde(default)]
    pub status: GoalStatus,
    /// When the goal was created
    #[serde(
        default = "lenient::unknown_datetime",
        deserialize_with = "lenient::flexible_datetime"
    )]
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Create a new active goal.
    pub fn new(
        title: impl Into<String>,
        goal_type: GoalType,
        target_value: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            goal_type,
            target_value: Some(target_value),
            current_value: 0.0,
            unit: unit.into(),
            target_date: None,
            status: GoalStatus::Active,
            created_at: Utc::now(),
        }
    }

    /// Set the value reached so far.
    pub fn with_current(mut self, current_value: f64) -> Self {
        self.current_value = current_value;
        self
    }

    /// Set the target date.
    pub fn with_target_date(mut self, date: NaiveDate) -> Self {
        self.target_date = Some(date);
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Percentage completion (0-100).
    pub fn progress_percent(&self) -> f64 {
        progress::progress_percent(self)
    }

    /// Distance left to the target, never negative.
    pub fn remaining(&self) -> f64 {
        progress::remaining(self)
    }

    /// Days from `today` until the target date (negative once passed).
    pub fn days_until_target(&self, today: NaiveDate) -> Option<i64> {
        self.target_date.map(|date| (date - today).num_days())
    }

    /// Check if the target date has passed.
    pub fn is_past_target(&self, today: NaiveDate) -> bool {
        self.days_until_target(today).is_some_and(|d| d < 0)
    }
}

impl Record for Goal {
    type SortKey = DateTime<Utc>;

    fn id(&self) -> Uuid {
        self.id
    }

    fn sort_key(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Category of goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    Strength,
    MuscleGain,
    WeightLoss,
    Endurance,
    Flexibility,
    Habit,
}

impl GoalType {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            GoalType::Strength => "Strength",
            GoalType::MuscleGain => "Muscle Gain",
            GoalType::WeightLoss => "Weight Loss",
            GoalType::Endurance => "Endurance",
            GoalType::Flexibility => "Flexibility",
            GoalType::Habit => "Habit",
        }
    }
}

impl std::fmt::Display for GoalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Status of a goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    /// Goal is active and being tracked
    #[default]
    Active,
    /// Goal has been achieved
    Completed,
    /// Goal is temporarily on hold
    Paused,
}

impl GoalStatus {
    /// Whether the goal is still being actively tracked.
    pub fn is_active(&self) -> bool {
        matches!(self, GoalStatus::Active)
    }

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            GoalStatus::Active => "Active",
            GoalStatus::Completed => "Completed",
            GoalStatus::Paused => "Paused",
        }
    }
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

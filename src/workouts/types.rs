//! Workout session and set record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::lenient;
use crate::storage::Record;

/// A logged workout session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// When the session took place
    #[serde(deserialize_with = "lenient::flexible_datetime")]
    pub date: DateTime<Utc>,
    /// Kind of session
    pub workout_type: WorkoutType,
    /// Session length in minutes
    #[serde(default, deserialize_with = "lenient::optional_f64")]
    pub duration_minutes: Option<f64>,
    /// Estimated energy expenditure
    #[serde(default, deserialize_with = "lenient::optional_f64")]
    pub calories_burned: Option<f64>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl Workout {
    /// Create a new workout at the given time.
    pub fn new(name: impl Into<String>, workout_type: WorkoutType, date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            date,
            workout_type,
            duration_minutes: None,
            calories_burned: None,
            notes: None,
        }
    }

    /// Set the session length.
    pub fn with_duration(mut self, minutes: f64) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    /// Set notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Duration in minutes, with absent or negative values counted as zero.
    pub fn duration_or_zero(&self) -> f64 {
        non_negative(self.duration_minutes)
    }
}

impl Record for Workout {
    type SortKey = DateTime<Utc>;

    fn id(&self) -> Uuid {
        self.id
    }

    fn sort_key(&self) -> DateTime<Utc> {
        self.date
    }
}

/// Kind of workout session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Strength,
    Cardio,
    Flexibility,
    Mixed,
}

impl WorkoutType {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutType::Strength => "Strength",
            WorkoutType::Cardio => "Cardio",
            WorkoutType::Flexibility => "Flexibility",
            WorkoutType::Mixed => "Mixed",
        }
    }

    /// Get all workout types.
    pub fn all() -> Vec<WorkoutType> {
        vec![
            WorkoutType::Strength,
            WorkoutType::Cardio,
            WorkoutType::Flexibility,
            WorkoutType::Mixed,
        ]
    }
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A single set performed during a workout.
///
/// `workout_id` is not enforced: sets may reference workouts that no longer
/// exist (or were never loaded) and must be tolerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    /// Unique identifier
    pub id: Uuid,
    /// Workout this set belongs to
    pub workout_id: Uuid,
    /// Exercise performed
    #[serde(default)]
    pub exercise_id: Option<Uuid>,
    /// Exercise name at the time of logging
    #[serde(default)]
    pub exercise_name: Option<String>,
    /// Position of the set within the exercise
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub set_number: Option<u32>,
    /// Load lifted
    #[serde(default, deserialize_with = "lenient::optional_f64")]
    pub weight: Option<f64>,
    /// Repetitions performed
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub reps: Option<u32>,
    /// Rest after the set in seconds
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub rest_seconds: Option<u32>,
    /// When the set was logged
    #[serde(
        default = "lenient::unknown_datetime",
        deserialize_with = "lenient::flexible_datetime"
    )]
    pub created_at: DateTime<Utc>,
}

impl WorkoutSet {
    /// Create a new set for a workout.
    pub fn new(workout_id: Uuid, weight: f64, reps: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            workout_id,
            exercise_id: None,
            exercise_name: None,
            set_number: None,
            weight: Some(weight),
            reps: Some(reps),
            rest_seconds: None,
            created_at: Utc::now(),
        }
    }

    /// Attach the exercise this set belongs to.
    pub fn for_exercise(mut self, exercise_id: Uuid, name: impl Into<String>) -> Self {
        self.exercise_id = Some(exercise_id);
        self.exercise_name = Some(name.into());
        self
    }

    /// Training volume of this set (weight × reps).
    ///
    /// Absent or negative weight and absent reps contribute zero.
    pub fn volume(&self) -> f64 {
        non_negative(self.weight) * f64::from(self.reps.unwrap_or(0))
    }
}

impl Record for WorkoutSet {
    type SortKey = DateTime<Utc>;

    fn id(&self) -> Uuid {
        self.id
    }

    fn sort_key(&self) -> DateTime<Utc> {
        self.created_at
    }
}

fn non_negative(value: Option<f64>) -> f64 {
    value.filter(|v| *v > 0.0).unwrap_or(0.0)
}

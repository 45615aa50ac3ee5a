//! Built-in workout template library.
//!
//! Templates are curated starting points. Starting one logs a new
//! [`Workout`] dated at the moment it was started.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{Workout, WorkoutType};

/// A curated workout template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Kind of session
    pub workout_type: WorkoutType,
    /// Short description
    pub description: String,
    /// Expected length in minutes
    pub estimated_duration: u16,
    /// Exercises in the order they are performed
    pub exercises: Vec<String>,
}

impl WorkoutTemplate {
    /// Create a new template.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        workout_type: WorkoutType,
        description: impl Into<String>,
        estimated_duration: u16,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            workout_type,
            description: description.into(),
            estimated_duration,
            exercises: Vec::new(),
        }
    }

    /// Set the exercise list.
    pub fn with_exercises(mut self, exercises: &[&str]) -> Self {
        self.exercises = exercises.iter().map(|e| (*e).to_string()).collect();
        self
    }

    /// Number of exercises in the template.
    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    /// Log a new workout from this template.
    pub fn start(&self, now: DateTime<Utc>) -> Workout {
        tracing::info!("Starting workout from template {}", self.name);
        Workout::new(self.name.clone(), self.workout_type, now)
            .with_notes(format!("Started from template: {}", self.name))
    }
}

/// Search and type filter for the template list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateFilter {
    /// Case-insensitive substring of name or description
    pub search: String,
    /// Restrict to one workout type (`None` = all)
    pub workout_type: Option<WorkoutType>,
}

impl TemplateFilter {
    /// Filter by search text only.
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: text.into(),
            workout_type: None,
        }
    }

    /// Restrict to a workout type.
    pub fn with_type(mut self, workout_type: WorkoutType) -> Self {
        self.workout_type = Some(workout_type);
        self
    }

    /// Whether a template passes this filter.
    pub fn matches(&self, template: &WorkoutTemplate) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = template.name.to_lowercase().contains(&needle)
            || template.description.to_lowercase().contains(&needle);
        let matches_type = self
            .workout_type
            .map_or(true, |t| t == template.workout_type);
        matches_search && matches_type
    }

    /// Templates passing this filter, in library order.
    pub fn apply<'a>(&self, templates: &'a [WorkoutTemplate]) -> Vec<&'a WorkoutTemplate> {
        templates.iter().filter(|t| self.matches(t)).collect()
    }
}

/// The built-in template set.
pub fn builtin_templates() -> Vec<WorkoutTemplate> {
    vec![
        WorkoutTemplate::new(
            "template-1",
            "Push Day",
            WorkoutType::Strength,
            "Chest, shoulders, and triceps focused workout",
            60,
        )
        .with_exercises(&["Bench Press", "Shoulder Press", "Chest Fly", "Tricep Dips"]),
        WorkoutTemplate::new(
            "template-2",
            "Pull Day",
            WorkoutType::Strength,
            "Back and biceps focused workout",
            55,
        )
        .with_exercises(&["Pull-ups", "Barbell Row", "Lat Pulldown", "Bicep Curls"]),
        WorkoutTemplate::new(
            "template-3",
            "Leg Day",
            WorkoutType::Strength,
            "Lower body strength and power",
            65,
        )
        .with_exercises(&["Squats", "Deadlifts", "Lunges", "Calf Raises"]),
        WorkoutTemplate::new(
            "template-4",
            "HIIT Cardio",
            WorkoutType::Cardio,
            "High intensity interval training",
            30,
        )
        .with_exercises(&["Burpees", "Mountain Climbers", "Jump Squats", "Plank"]),
        WorkoutTemplate::new(
            "template-5",
            "Full Body Flow",
            WorkoutType::Mixed,
            "Complete body workout with varied exercises",
            45,
        )
        .with_exercises(&["Deadlifts", "Push-ups", "Squats", "Rows"]),
    ]
}

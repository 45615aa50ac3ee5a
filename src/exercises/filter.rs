//! Exercise library search and filtering.

use super::types::{Exercise, MuscleGroup};

/// Combined search, muscle-group and equipment filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseFilter {
    /// Case-insensitive substring of name or instructions
    pub search: String,
    /// Restrict to one muscle group (`None` = all)
    pub muscle_group: Option<MuscleGroup>,
    /// Restrict to one equipment type (`None` = all)
    pub equipment: Option<String>,
}

impl ExerciseFilter {
    /// Filter by search text only.
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: text.into(),
            ..Default::default()
        }
    }

    /// Restrict to a muscle group.
    pub fn with_muscle_group(mut self, group: MuscleGroup) -> Self {
        self.muscle_group = Some(group);
        self
    }

    /// Restrict to an equipment type.
    pub fn with_equipment(mut self, equipment: impl Into<String>) -> Self {
        self.equipment = Some(equipment.into());
        self
    }

    /// Whether an exercise passes every active criterion.
    pub fn matches(&self, exercise: &Exercise) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = exercise.name.to_lowercase().contains(&needle)
            || exercise
                .instructions
                .as_deref()
                .is_some_and(|i| i.to_lowercase().contains(&needle));
        let matches_muscle = self
            .muscle_group
            .map_or(true, |g| g == exercise.muscle_group);
        let matches_equipment = self
            .equipment
            .as_deref()
            .map_or(true, |e| e == exercise.equipment);

        matches_search && matches_muscle && matches_equipment
    }

    /// Exercises passing this filter, in input order.
    pub fn apply<'a>(&self, exercises: &'a [Exercise]) -> Vec<&'a Exercise> {
        exercises.iter().filter(|e| self.matches(e)).collect()
    }
}

/// Distinct muscle groups present, in first-seen order.
pub fn muscle_groups(exercises: &[Exercise]) -> Vec<MuscleGroup> {
    let mut groups = Vec::new();
    for exercise in exercises {
        if !groups.contains(&exercise.muscle_group) {
            groups.push(exercise.muscle_group);
        }
    }
    groups
}

/// Distinct equipment types present, in first-seen order.
pub fn equipment_types(exercises: &[Exercise]) -> Vec<&str> {
    let mut types: Vec<&str> = Vec::new();
    for exercise in exercises {
        if !types.contains(&exercise.equipment.as_str()) {
            types.push(&exercise.equipment);
        }
    }
    types
}

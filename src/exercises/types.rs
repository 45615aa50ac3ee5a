//! Exercise catalog record types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::Record;

/// An exercise in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Primary muscle group worked
    pub muscle_group: MuscleGroup,
    /// Equipment needed (e.g. "barbell", "bodyweight")
    pub equipment: String,
    /// How to perform the movement
    #[serde(default)]
    pub instructions: Option<String>,
    /// Skill level
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

impl Exercise {
    /// Create a new exercise.
    pub fn new(
        name: impl Into<String>,
        muscle_group: MuscleGroup,
        equipment: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            muscle_group,
            equipment: equipment.into(),
            instructions: None,
            difficulty: None,
        }
    }

    /// Set instructions.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Set difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }
}

impl Record for Exercise {
    type SortKey = String;

    fn id(&self) -> Uuid {
        self.id
    }

    fn sort_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Primary muscle group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Arms,
    Legs,
    Core,
    Cardio,
    FullBody,
}

impl MuscleGroup {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Core => "Core",
            MuscleGroup::Cardio => "Cardio",
            MuscleGroup::FullBody => "Full Body",
        }
    }
}

impl std::fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Exercise skill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

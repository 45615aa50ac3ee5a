//! Sample records used to seed an empty store.

use chrono::{DateTime, Duration, Utc};

use super::memory::{InMemoryRepository, MemoryStore};
use super::repository::StorageResult;
use crate::exercises::{Difficulty, Exercise, MuscleGroup};
use crate::goals::{Goal, GoalType};
use crate::workouts::{Workout, WorkoutSet, WorkoutType};

impl MemoryStore {
    /// Build a store holding the sample data set, dated relative to `now`.
    pub fn with_sample_data(now: DateTime<Utc>) -> StorageResult<Self> {
        let exercises = sample_exercises();
        let bench = exercises[0].id;
        let push_ups = exercises[3].id;

        let mut upper = Workout::new("Upper Body Strength", WorkoutType::Strength, now - Duration::days(1))
            .with_duration(45.0);
        upper.calories_burned = Some(320.0);
        let mut hiit = Workout::new("HIIT Cardio", WorkoutType::Cardio, now - Duration::days(2))
            .with_duration(30.0);
        hiit.calories_burned = Some(280.0);
        let mut lower = Workout::new("Lower Body Power", WorkoutType::Strength, now - Duration::days(4))
            .with_duration(55.0);
        lower.calories_burned = Some(380.0);

        let sets = vec![
            sample_set(WorkoutSet::new(upper.id, 155.0, 10).for_exercise(bench, "Bench Press"), 1, 90, now),
            sample_set(WorkoutSet::new(upper.id, 165.0, 8).for_exercise(bench, "Bench Press"), 2, 90, now),
            sample_set(WorkoutSet::new(upper.id, 0.0, 15).for_exercise(push_ups, "Push-ups"), 1, 60, now),
        ];

        let today = now.date_naive();
        let goals = vec![
            Goal::new("Bench Press 200 lbs", GoalType::Strength, 200.0, "lbs")
                .with_current(175.0)
                .with_description("Increase bench press to 200 pounds for 1 rep max")
                .with_target_date(today + Duration::days(60)),
            Goal::new("Workout 4x per week", GoalType::Habit, 4.0, "sessions/week")
                .with_current(3.0)
                .with_description("Maintain consistent workout schedule")
                .with_target_date(today + Duration::days(30)),
        ];

        let store = Self {
            exercises: InMemoryRepository::from_records(exercises)?,
            workouts: InMemoryRepository::from_records(vec![upper, hiit, lower])?,
            workout_sets: InMemoryRepository::from_records(sets)?,
            goals: InMemoryRepository::from_records(goals)?,
        };
        tracing::info!("Seeded store with sample data");

        Ok(store)
    }
}

fn sample_set(
    mut set: WorkoutSet,
    set_number: u32,
    rest_seconds: u32,
    now: DateTime<Utc>,
) -> WorkoutSet {
    set.set_number = Some(set_number);
    set.rest_seconds = Some(rest_seconds);
    set.created_at = now - Duration::days(1);
    set
}

fn sample_exercises() -> Vec<Exercise> {
    vec![
        Exercise::new("Bench Press", MuscleGroup::Chest, "barbell")
            .with_instructions("Lie on bench, lower bar to chest, press up with control.")
            .with_difficulty(Difficulty::Intermediate),
        Exercise::new("Squats", MuscleGroup::Legs, "barbell")
            .with_instructions(
                "Stand with feet shoulder-width apart, lower hips back and down, return to standing.",
            )
            .with_difficulty(Difficulty::Beginner),
        Exercise::new("Pull-ups", MuscleGroup::Back, "bodyweight")
            .with_instructions("Hang from bar, pull body up until chin clears bar, lower with control.")
            .with_difficulty(Difficulty::Advanced),
        Exercise::new("Push-ups", MuscleGroup::Chest, "bodyweight")
            .with_instructions("Start in plank position, lower body to floor, push back up.")
            .with_difficulty(Difficulty::Beginner),
        Exercise::new("Deadlifts", MuscleGroup::Back, "barbell")
            .with_instructions(
                "Stand with feet hip-width apart, hinge at hips, lift bar keeping back straight.",
            )
            .with_difficulty(Difficulty::Intermediate),
    ]
}

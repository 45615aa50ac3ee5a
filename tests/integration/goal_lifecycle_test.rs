//! Integration tests for goal management over the record store.

use chrono::{NaiveDate, TimeZone, Utc};
use fittrack::goals::{Goal, GoalError, GoalManager, GoalStatus, GoalType};
use fittrack::metrics::{active_goal_count, completed_goal_count};
use fittrack::storage::{ListQuery, MemoryStore, Repository, StorageError};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
}

#[test]
fn test_goal_reaches_completion() {
    let mut store = MemoryStore::new();
    let mut manager = GoalManager::new(&mut store.goals);

    let goal = manager
        .create(
            Goal::new("Squat 300 lbs", GoalType::Strength, 300.0, "lbs")
                .with_current(225.0)
                .with_target_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
        )
        .unwrap();
    assert_eq!(goal.progress_percent(), 75.0);

    let updated = manager.update_progress(goal.id, 310.0).unwrap();
    assert_eq!(updated.progress_percent(), 100.0);
    assert_eq!(updated.remaining(), 0.0);

    manager.update_status(goal.id, GoalStatus::Completed).unwrap();
    assert!(manager.list_active().unwrap().is_empty());

    let goals = store.goals.list(&ListQuery::all()).unwrap();
    assert_eq!(completed_goal_count(&goals), 1);
    assert_eq!(active_goal_count(&goals), 0);
}

#[test]
fn test_invalid_goals_are_rejected() {
    let mut store = MemoryStore::new();
    let mut manager = GoalManager::new(&mut store.goals);

    let untitled = Goal::new("   ", GoalType::Habit, 4.0, "sessions/week");
    assert!(matches!(
        manager.create(untitled),
        Err(GoalError::ValidationError(_))
    ));

    let zero_target = Goal::new("Lose weight", GoalType::WeightLoss, 0.0, "lbs");
    assert!(matches!(
        manager.create(zero_target),
        Err(GoalError::ValidationError(_))
    ));

    assert!(store.goals.is_empty());
}

#[test]
fn test_missing_and_duplicate_goals() {
    let mut store = MemoryStore::new();
    let mut manager = GoalManager::new(&mut store.goals);

    let goal = manager
        .create(Goal::new("Plank 3 minutes", GoalType::Endurance, 180.0, "seconds"))
        .unwrap();

    assert!(matches!(
        manager.create(goal.clone()),
        Err(GoalError::StorageError(StorageError::Duplicate(id))) if id == goal.id
    ));

    let stranger = Goal::new("Unknown", GoalType::Habit, 1.0, "");
    assert!(matches!(
        manager.update_progress(stranger.id, 1.0),
        Err(GoalError::NotFound(id)) if id == stranger.id
    ));
    assert!(manager.get(stranger.id).unwrap().is_none());
}

#[test]
fn test_upcoming_deadlines_in_sample_data() {
    let now = Utc.from_utc_datetime(&today().and_hms_opt(8, 0, 0).unwrap());
    let mut store = MemoryStore::with_sample_data(now).unwrap();
    let mut manager = GoalManager::new(&mut store.goals);

    // Sample goals are due in 30 and 60 days
    let within_month = manager.upcoming(today(), 30).unwrap();
    assert_eq!(within_month.len(), 1);

    let within_quarter = manager.upcoming(today(), 90).unwrap();
    assert_eq!(within_quarter.len(), 2);
    assert!(within_quarter[0].target_date <= within_quarter[1].target_date);

    manager
        .update_status(within_quarter[0].id, GoalStatus::Paused)
        .unwrap();
    assert_eq!(manager.upcoming(today(), 90).unwrap().len(), 1);
}

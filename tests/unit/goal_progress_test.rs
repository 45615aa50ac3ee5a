//! Unit tests for goal progress percentages.

use fittrack::goals::{Goal, GoalStatus, GoalType};
use fittrack::metrics::{active_goal_progress, progress_percent};

fn goal_with(target: Option<f64>, current: f64) -> Goal {
    let mut goal = Goal::new("Target", GoalType::Strength, 1.0, "lbs").with_current(current);
    goal.target_value = target;
    goal
}

#[test]
fn test_zero_target_gives_zero() {
    assert_eq!(progress_percent(&goal_with(Some(0.0), 5.0)), 0.0);
}

#[test]
fn test_overshoot_is_clamped() {
    assert_eq!(progress_percent(&goal_with(Some(100.0), 150.0)), 100.0);
}

#[test]
fn test_decoded_goal_without_current_value() {
    let json = r#"{
        "id": "9b2e4c7a-0d1f-4e3a-8b5c-6d7e8f9a0b1c",
        "title": "Bench Press 200 lbs",
        "goal_type": "strength",
        "target_value": 200,
        "current_value": null,
        "unit": "lbs",
        "status": "active"
    }"#;
    let goal: Goal = serde_json::from_str(json).unwrap();
    assert_eq!(goal.current_value, 0.0);
    assert_eq!(progress_percent(&goal), 0.0);
}

#[test]
fn test_preview_skips_inactive_goals() {
    let mut paused = goal_with(Some(10.0), 5.0);
    paused.status = GoalStatus::Paused;
    let goals: Vec<Goal> = std::iter::once(paused)
        .chain((0..7).map(|i| goal_with(Some(10.0), f64::from(i))))
        .collect();

    let preview = active_goal_progress(&goals, 5);
    assert_eq!(preview.len(), 5);
    assert_eq!(preview[0].percent, 0.0);
    assert_eq!(preview[4].percent, 40.0);
}

//! Integration tests for the snapshot -> repositories -> summaries pipeline.

use chrono::{DateTime, Duration, TimeZone, Utc};
use fittrack::metrics::StreakCounting;
use fittrack::storage::config::{load_config_from, save_config_to};
use fittrack::storage::{AppConfig, ListQuery, MemoryStore, Repository};
use fittrack::{DashboardStats, ProgressSummary};
use tempfile::TempDir;

const SNAPSHOT: &str = r#"{
    "workouts": [
        {
            "id": "11111111-1111-4111-8111-111111111111",
            "name": "Upper Body Strength",
            "date": "2024-01-07",
            "workout_type": "strength",
            "duration_minutes": "45"
        },
        {
            "id": "22222222-2222-4222-8222-222222222222",
            "name": "HIIT Cardio",
            "date": "2024-01-09T18:30:00",
            "workout_type": "cardio",
            "duration_minutes": null
        },
        {
            "id": "33333333-3333-4333-8333-333333333333",
            "name": "Lower Body Power",
            "date": "2023-12-20T08:00:00Z",
            "workout_type": "strength",
            "duration_minutes": 30
        }
    ],
    "workout_sets": [
        {
            "id": "aaaaaaaa-aaaa-4aaa-8aaa-aaaaaaaaaaaa",
            "workout_id": "11111111-1111-4111-8111-111111111111",
            "weight": "155",
            "reps": 10
        },
        {
            "id": "bbbbbbbb-bbbb-4bbb-8bbb-bbbbbbbbbbbb",
            "workout_id": "11111111-1111-4111-8111-111111111111",
            "weight": 0,
            "reps": "15"
        },
        {
            "id": "cccccccc-cccc-4ccc-8ccc-cccccccccccc",
            "workout_id": "33333333-3333-4333-8333-333333333333",
            "weight": 100,
            "reps": "lots"
        }
    ],
    "goals": [
        {
            "id": "dddddddd-dddd-4ddd-8ddd-dddddddddddd",
            "title": "Bench Press 200 lbs",
            "goal_type": "strength",
            "target_value": 200,
            "current_value": "175",
            "unit": "lbs",
            "status": "active"
        },
        {
            "id": "eeeeeeee-eeee-4eee-8eee-eeeeeeeeeeee",
            "title": "Run a 10k",
            "goal_type": "endurance",
            "target_value": 10,
            "current_value": 10,
            "unit": "km",
            "status": "completed"
        },
        {
            "id": "ffffffff-ffff-4fff-8fff-ffffffffffff",
            "title": "Touch toes",
            "goal_type": "flexibility",
            "target_value": 0,
            "status": "paused"
        }
    ]
}"#;

fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap()
}

fn load_store() -> MemoryStore {
    MemoryStore::from_json(SNAPSHOT).expect("snapshot should decode")
}

#[test]
fn test_dashboard_from_snapshot() {
    let store = load_store();
    let config = AppConfig::default();

    let stats = DashboardStats::load(
        &store.workouts,
        &store.workout_sets,
        &store.goals,
        reference_now(),
        &config.dashboard,
    )
    .unwrap();

    assert_eq!(stats.total_workouts, 3);
    assert_eq!(stats.this_week_workouts, 2);
    assert_eq!(stats.total_volume, 1550.0);
    assert_eq!(stats.active_goals, 1);
    // (45 + 0 + 30) / 3
    assert_eq!(stats.average_workout_minutes, 25);
}

#[test]
fn test_progress_from_snapshot() {
    let store = load_store();
    let config = AppConfig::default();

    let summary = ProgressSummary::load(
        &store.workouts,
        &store.workout_sets,
        &store.goals,
        reference_now(),
        &config.progress,
    )
    .unwrap();

    assert_eq!(summary.total_workouts, 3);
    assert_eq!(summary.streak_days, 2);
    assert_eq!(summary.completed_goals, 1);
    assert_eq!(summary.active_goals, 1);

    let keys: Vec<String> = summary.weekly.iter().map(|b| b.week_key()).collect();
    assert_eq!(keys, vec!["2023-12-17", "2024-01-07"]);
    assert_eq!(summary.weekly[1].workouts, 2);
    assert_eq!(summary.weekly[1].volume, 1550.0);
    assert_eq!(summary.weekly[1].duration, 45.0);
    assert_eq!(summary.weekly[0].volume, 0.0);

    assert_eq!(summary.active_goal_progress.len(), 1);
    assert_eq!(summary.active_goal_progress[0].percent, 87.5);
}

#[test]
fn test_config_file_changes_the_summaries() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        r#"
[dashboard]
recent_window_days = 30
workout_limit = 2

[progress]
chart_weeks = 1
streak_counting = "per_workout"
"#,
    )
    .unwrap();

    let config = load_config_from(&config_path).unwrap();
    assert_eq!(config.dashboard.set_limit, 100);
    assert_eq!(config.progress.streak_counting, StreakCounting::PerWorkout);

    let store = load_store();
    let now = reference_now();

    let stats = DashboardStats::load(
        &store.workouts,
        &store.workout_sets,
        &store.goals,
        now,
        &config.dashboard,
    )
    .unwrap();
    // Only the two newest workouts are loaded, both inside the window
    assert_eq!(stats.total_workouts, 2);
    assert_eq!(stats.this_week_workouts, 2);

    let summary = ProgressSummary::load(
        &store.workouts,
        &store.workout_sets,
        &store.goals,
        now,
        &config.progress,
    )
    .unwrap();
    assert_eq!(summary.weekly.len(), 1);
    assert_eq!(summary.weekly[0].week_key(), "2024-01-07");
}

#[test]
fn test_saved_config_is_reloaded() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nested").join("config.toml");

    let mut config = AppConfig::default();
    config.progress.active_goal_preview = 3;
    save_config_to(&config_path, &config).unwrap();

    let loaded = load_config_from(&config_path).unwrap();
    assert_eq!(loaded.progress.active_goal_preview, 3);
    assert_eq!(loaded.dashboard, config.dashboard);
}

#[test]
fn test_sample_store_and_new_workout() {
    let now = reference_now();
    let mut store = MemoryStore::with_sample_data(now).unwrap();

    let before = DashboardStats::load(
        &store.workouts,
        &store.workout_sets,
        &store.goals,
        now,
        &AppConfig::default().dashboard,
    )
    .unwrap();

    let workout = fittrack::Workout::new(
        "Evening Yoga",
        fittrack::WorkoutType::Flexibility,
        now - Duration::hours(1),
    )
    .with_duration(20.0);
    store.workouts.create(workout.clone()).unwrap();

    let newest = store
        .workouts
        .list(&ListQuery::newest_first().with_limit(1))
        .unwrap();
    assert_eq!(newest, vec![workout]);

    let after = DashboardStats::load(
        &store.workouts,
        &store.workout_sets,
        &store.goals,
        now,
        &AppConfig::default().dashboard,
    )
    .unwrap();
    assert_eq!(after.total_workouts, before.total_workouts + 1);
    assert_eq!(after.this_week_workouts, before.this_week_workouts + 1);
    assert_eq!(after.total_volume, before.total_volume);
}

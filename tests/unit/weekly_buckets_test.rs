//! Unit tests for weekly chart bucketing.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use fittrack::metrics::{weekly_buckets, weekly_buckets_limited};
use fittrack::workouts::{Workout, WorkoutSet, WorkoutType};

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

#[test]
fn test_sunday_and_tuesday_share_a_bucket() {
    let workouts = [
        Workout::new("Sunday", WorkoutType::Strength, at(2024, 1, 7, 10)),
        Workout::new("Tuesday", WorkoutType::Cardio, at(2024, 1, 9, 10)),
    ];

    let buckets = weekly_buckets(&workouts, &[]);
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].week_key(), "2024-01-07");
    assert_eq!(buckets[0].workouts, 2);
    assert_eq!(buckets[0].volume, 0.0);
}

#[test]
fn test_saturday_night_and_sunday_morning_split() {
    let workouts = [
        Workout::new("Late", WorkoutType::Strength, at(2024, 1, 13, 23)),
        Workout::new("Early", WorkoutType::Strength, at(2024, 1, 14, 0)),
    ];

    let buckets = weekly_buckets(&workouts, &[]);
    let keys: Vec<String> = buckets.iter().map(|b| b.week_key()).collect();
    assert_eq!(keys, vec!["2024-01-07", "2024-01-14"]);
}

#[test]
fn test_never_more_than_eight_strictly_ascending() {
    let start = at(2023, 9, 3, 7);
    // Two workouts per week for twenty weeks, given newest first
    let mut workouts: Vec<Workout> = (0..20)
        .flat_map(|week| {
            let monday = start + Duration::weeks(week) + Duration::days(1);
            [
                Workout::new("Mon", WorkoutType::Strength, monday).with_duration(50.0),
                Workout::new("Thu", WorkoutType::Cardio, monday + Duration::days(3)),
            ]
        })
        .collect();
    workouts.reverse();

    let buckets = weekly_buckets(&workouts, &[]);
    assert_eq!(buckets.len(), 8);
    assert!(buckets.windows(2).all(|pair| pair[0].week < pair[1].week));
    assert!(buckets.iter().all(|b| b.workouts == 2 && b.duration == 50.0));

    let newest_week = NaiveDate::from_ymd_opt(2023, 9, 3).unwrap() + Duration::weeks(19);
    assert_eq!(buckets[7].week, newest_week);
}

#[test]
fn test_custom_week_limit() {
    let workouts: Vec<Workout> = (0..5)
        .map(|week| Workout::new("W", WorkoutType::Mixed, at(2024, 2, 5, 9) + Duration::weeks(week)))
        .collect();

    assert_eq!(weekly_buckets_limited(&workouts, &[], 3).len(), 3);
    assert_eq!(weekly_buckets_limited(&workouts, &[], 10).len(), 5);
}

#[test]
fn test_sets_with_missing_fields_add_nothing() {
    let workout = Workout::new("Lift", WorkoutType::Strength, at(2024, 1, 10, 9));
    let mut no_reps = WorkoutSet::new(workout.id, 100.0, 0);
    no_reps.reps = None;
    let sets = [WorkoutSet::new(workout.id, 100.0, 5), no_reps];

    let buckets = weekly_buckets(std::slice::from_ref(&workout), &sets);
    assert_eq!(buckets[0].volume, 500.0);
}

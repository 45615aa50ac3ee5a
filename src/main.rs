//! FitTrack - Workout Logging and Progress Tracking
//!
//! Main entry point. Loads a JSON record snapshot (or the sample data set
//! when no path is given) and logs the dashboard and progress summaries.

use anyhow::Context;
use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fittrack::storage::config::load_config;
use fittrack::{DashboardStats, MemoryStore, ProgressSummary};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting FitTrack v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config().context("loading configuration")?;
    let now = Utc::now();

    let store = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading snapshot {path}"))?;
            MemoryStore::from_json(&json).with_context(|| format!("parsing snapshot {path}"))?
        }
        None => MemoryStore::with_sample_data(now)?,
    };

    let stats = DashboardStats::load(
        &store.workouts,
        &store.workout_sets,
        &store.goals,
        now,
        &config.dashboard,
    )?;
    tracing::info!(
        "Dashboard: {} workouts ({} this week), volume {:.0}, {} active goals, avg {} min",
        stats.total_workouts,
        stats.this_week_workouts,
        stats.total_volume,
        stats.active_goals,
        stats.average_workout_minutes
    );

    let summary = ProgressSummary::load(
        &store.workouts,
        &store.workout_sets,
        &store.goals,
        now,
        &config.progress,
    )?;
    tracing::info!(
        "Progress: {} day streak, {} goals achieved, {} active",
        summary.streak_days,
        summary.completed_goals,
        summary.active_goals
    );

    for bucket in &summary.weekly {
        tracing::info!(
            "Week of {}: {} workouts, {:.0} min, volume {:.0}",
            bucket.week_key(),
            bucket.workouts,
            bucket.duration,
            bucket.volume
        );
    }

    for goal in &summary.active_goal_progress {
        tracing::info!(
            "Goal {}: {} / {} {} ({:.0}%)",
            goal.title,
            goal.current_value,
            goal.target_value,
            goal.unit,
            goal.percent
        );
    }

    Ok(())
}

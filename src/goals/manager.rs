//! Goal management on top of a goal repository.

use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use super::types::{Goal, GoalStatus};
use crate::storage::{ListQuery, Repository, StorageError};

/// Manager for goals.
pub struct GoalManager<'a, R: Repository<Goal>> {
    repo: &'a mut R,
}

impl<'a, R: Repository<Goal>> GoalManager<'a, R> {
    /// Create a new goal manager over a repository.
    pub fn new(repo: &'a mut R) -> Self {
        Self { repo }
    }

    /// Create a new goal after validating it.
    pub fn create(&mut self, goal: Goal) -> Result<Goal, GoalError> {
        if goal.title.trim().is_empty() {
            return Err(GoalError::ValidationError(
                "Goals require a title".to_string(),
            ));
        }

        match goal.target_value {
            Some(target) if target > 0.0 => {}
            _ => {
                return Err(GoalError::ValidationError(
                    "Target value must be greater than zero".to_string(),
                ))
            }
        }

        let created = self.repo.create(goal)?;
        tracing::info!("Goal created: {}", created.title);
        Ok(created)
    }

    /// Get a goal by ID.
    pub fn get(&self, id: Uuid) -> Result<Option<Goal>, GoalError> {
        self.repo.find_by_id(id).map_err(GoalError::from)
    }

    /// Get all goals, newest first.
    pub fn list(&self) -> Result<Vec<Goal>, GoalError> {
        self.repo
            .list(&ListQuery::newest_first())
            .map_err(GoalError::from)
    }

    /// Get active goals, newest first.
    pub fn list_active(&self) -> Result<Vec<Goal>, GoalError> {
        let mut goals = self.list()?;
        goals.retain(|g| g.status.is_active());
        Ok(goals)
    }

    /// Update goal status.
    pub fn update_status(&mut self, id: Uuid, status: GoalStatus) -> Result<Goal, GoalError> {
        let mut goal = self.require(id)?;
        goal.status = status;
        tracing::debug!("Goal {} status -> {}", id, status);
        self.repo.update(goal).map_err(GoalError::from)
    }

    /// Record the value reached so far.
    pub fn update_progress(&mut self, id: Uuid, current_value: f64) -> Result<Goal, GoalError> {
        if !current_value.is_finite() {
            return Err(GoalError::ValidationError(
                "Progress value must be a finite number".to_string(),
            ));
        }

        let mut goal = self.require(id)?;
        goal.current_value = current_value;
        tracing::debug!(
            "Goal {} progress {:.1}%",
            id,
            goal.progress_percent()
        );
        self.repo.update(goal).map_err(GoalError::from)
    }

    /// Active goals whose target date falls within the next `within_days`
    /// days (inclusive of today), earliest first.
    pub fn upcoming(&self, today: NaiveDate, within_days: i64) -> Result<Vec<Goal>, GoalError> {
        let cutoff = Duration::try_days(within_days)
            .and_then(|window| today.checked_add_signed(window))
            .unwrap_or(if within_days < 0 { NaiveDate::MIN } else { NaiveDate::MAX });

        let mut goals: Vec<Goal> = self
            .list_active()?
            .into_iter()
            .filter(|g| {
                g.target_date
                    .is_some_and(|date| date >= today && date <= cutoff)
            })
            .collect();
        goals.sort_by_key(|g| g.target_date);

        Ok(goals)
    }

    fn require(&self, id: Uuid) -> Result<Goal, GoalError> {
        self.get(id)?.ok_or(GoalError::NotFound(id))
    }
}

/// Goal management errors.
#[derive(Debug, thiserror::Error)]
pub enum GoalError {
    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Goal not found: {0}")]
    NotFound(Uuid),
}

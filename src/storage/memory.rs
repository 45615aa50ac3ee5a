//! In-memory record store.
//!
//! Stands in for a real backend: one typed repository per entity, loadable
//! from a JSON snapshot or seeded with sample data.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::repository::{ListQuery, Record, Repository, StorageError, StorageResult};
use crate::exercises::Exercise;
use crate::goals::Goal;
use crate::workouts::{Workout, WorkoutSet};

/// A repository backed by a `Vec`, preserving insertion order.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T: Record> {
    records: Vec<T>,
}

impl<T: Record> InMemoryRepository<T> {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Create a repository from existing records, rejecting duplicate ids.
    pub fn from_records(records: Vec<T>) -> StorageResult<Self> {
        let mut repo = Self::new();
        for record in records {
            repo.create(record)?;
        }
        Ok(repo)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the repository holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}

impl<T: Record> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Repository<T> for InMemoryRepository<T> {
    fn list(&self, query: &ListQuery) -> StorageResult<Vec<T>> {
        Ok(query.apply(self.records.clone()))
    }

    fn create(&mut self, record: T) -> StorageResult<T> {
        let id = record.id();
        if self.position(id).is_some() {
            return Err(StorageError::Duplicate(id));
        }
        self.records.push(record.clone());
        Ok(record)
    }

    fn find_by_id(&self, id: Uuid) -> StorageResult<Option<T>> {
        Ok(self.position(id).map(|index| self.records[index].clone()))
    }

    fn update(&mut self, record: T) -> StorageResult<T> {
        let id = record.id();
        let index = self.position(id).ok_or(StorageError::NotFound(id))?;
        self.records[index] = record.clone();
        Ok(record)
    }
}

/// Serialized form of the whole store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    #[serde(default)]
    pub workouts: Vec<Workout>,
    #[serde(default)]
    pub workout_sets: Vec<WorkoutSet>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

/// One repository per entity type.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub exercises: InMemoryRepository<Exercise>,
    pub workouts: InMemoryRepository<Workout>,
    pub workout_sets: InMemoryRepository<WorkoutSet>,
    pub goals: InMemoryRepository<Goal>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a snapshot.
    pub fn from_snapshot(snapshot: StoreSnapshot) -> StorageResult<Self> {
        let store = Self {
            exercises: InMemoryRepository::from_records(snapshot.exercises)?,
            workouts: InMemoryRepository::from_records(snapshot.workouts)?,
            workout_sets: InMemoryRepository::from_records(snapshot.workout_sets)?,
            goals: InMemoryRepository::from_records(snapshot.goals)?,
        };

        tracing::info!(
            "Loaded store: {} workouts, {} sets, {} goals, {} exercises",
            store.workouts.len(),
            store.workout_sets.len(),
            store.goals.len(),
            store.exercises.len()
        );

        Ok(store)
    }

    /// Parse a JSON snapshot and build a store from it.
    pub fn from_json(json: &str) -> StorageResult<Self> {
        let snapshot: StoreSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }

    /// Capture the current contents in insertion order.
    pub fn snapshot(&self) -> StorageResult<StoreSnapshot> {
        let all = ListQuery::all();
        Ok(StoreSnapshot {
            exercises: self.exercises.list(&all)?,
            workouts: self.workouts.list(&all)?,
            workout_sets: self.workout_sets.list(&all)?,
            goals: self.goals.list(&all)?,
        })
    }
}

//! Typed repository interface over record collections.
//!
//! Each entity type gets its own `Repository<T>` instance; there is no
//! lookup of collections by name.

use uuid::Uuid;

/// A stored record with a stable identifier and a natural ordering key.
pub trait Record: Clone {
    /// Key used by newest-first / oldest-first listings.
    type SortKey: Ord;

    /// Unique identifier.
    fn id(&self) -> Uuid;

    /// Ordering key (date for workouts, creation time for sets and goals).
    fn sort_key(&self) -> Self::SortKey;
}

/// Ordering applied by [`Repository::list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Order in which records were created
    #[default]
    Insertion,
    /// Smallest sort key first
    Ascending,
    /// Largest sort key first
    Descending,
}

/// Listing parameters: ordering plus an optional cap applied after sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListQuery {
    pub order: SortOrder,
    pub limit: Option<usize>,
}

impl ListQuery {
    /// Every record, in insertion order.
    pub fn all() -> Self {
        Self::default()
    }

    /// Largest sort key first.
    pub fn newest_first() -> Self {
        Self {
            order: SortOrder::Descending,
            limit: None,
        }
    }

    /// Smallest sort key first.
    pub fn oldest_first() -> Self {
        Self {
            order: SortOrder::Ascending,
            limit: None,
        }
    }

    /// Keep at most `limit` records.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sort and truncate an owned list according to this query.
    ///
    /// Sorting is stable, so records with equal keys keep insertion order.
    pub fn apply<T: Record>(&self, mut records: Vec<T>) -> Vec<T> {
        match self.order {
            SortOrder::Insertion => {}
            SortOrder::Ascending => records.sort_by_key(|r| r.sort_key()),
            SortOrder::Descending => records.sort_by(|a, b| b.sort_key().cmp(&a.sort_key())),
        }
        if let Some(limit) = self.limit {
            records.truncate(limit);
        }
        records
    }
}

/// CRUD access to one entity collection.
pub trait Repository<T: Record> {
    /// List records. The result is a copy; callers never see internal storage.
    fn list(&self, query: &ListQuery) -> StorageResult<Vec<T>>;

    /// Insert a new record, returning the stored copy.
    fn create(&mut self, record: T) -> StorageResult<T>;

    /// Find a record by id.
    fn find_by_id(&self, id: Uuid) -> StorageResult<Option<T>>;

    /// Replace the record with the same id, returning the stored copy.
    fn update(&mut self, record: T) -> StorageResult<T>;
}

/// Storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Record not found: {0}")]
    NotFound(Uuid),

    #[error("Duplicate record id: {0}")]
    Duplicate(Uuid),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Result type for repository operations.
pub type StorageResult<T> = Result<T, StorageError>;

//! Storage module: record repositories and configuration.

pub mod config;
pub mod lenient;
pub mod memory;
pub mod repository;
mod sample;

pub use config::{AppConfig, ConfigError, DashboardSettings, ProgressSettings};
pub use memory::{InMemoryRepository, MemoryStore, StoreSnapshot};
pub use repository::{ListQuery, Record, Repository, SortOrder, StorageError, StorageResult};

//! In-memory storage backend for Herald.
//!
//! This crate provides an in-memory implementation of the `NotificationStorage`
//! and `GlobalFlagStorage` traits from `herald-storage`, using a papaya
//! lock-free HashMap for notification records.
//!
//! # Example
//!
//! ```ignore
//! use herald_db_memory::InMemoryStorage;
//! use herald_storage::NotificationStorage;
//!
//! let storage = InMemoryStorage::new();
//! storage.insert(&notification).await?;
//! ```

pub mod factory;
pub mod storage;

// Re-export the storage traits for convenience
pub use herald_storage::{GlobalFlagStorage, NotificationStorage, StorageError};

pub use factory::{StorageBackend, StorageConfig, StorageHandles, create_storage};
pub use storage::InMemoryStorage;

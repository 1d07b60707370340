//! Storage traits for the Herald storage abstraction layer.
//!
//! Storage is split in two tiers. [`NotificationStorage`] holds tenant-owned
//! data and every read requires a [`NotificationFilter`] carrying a tenant
//! scope. [`GlobalFlagStorage`] is the separately named, unscoped accessor for
//! system-wide singletons; it cannot reach notification records.

use async_trait::async_trait;
use herald_core::{GlobalFlag, Notification};

use crate::error::StorageError;
use crate::types::{NotificationFilter, NotificationQuery};

/// Persistence contract for notification records.
///
/// Implementations must be thread-safe (`Send + Sync`).
///
/// # Example
///
/// ```ignore
/// use herald_storage::{NotificationFilter, NotificationQuery, NotificationStorage, TenantScope};
///
/// async fn latest_global(storage: &dyn NotificationStorage) -> Result<Vec<Notification>, StorageError> {
///     let query = NotificationQuery::new(NotificationFilter::new(TenantScope::GlobalOnly)).with_limit(10);
///     storage.find(&query).await
/// }
/// ```
#[async_trait]
pub trait NotificationStorage: Send + Sync {
    /// Persists a new notification.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::AlreadyExists` if a record with the same id exists.
    async fn insert(&self, notification: &Notification) -> Result<Notification, StorageError>;

    /// Point lookup by id.
    ///
    /// Returns `None` if the record does not exist. Errors only for
    /// infrastructure issues.
    async fn get(&self, id: &str) -> Result<Option<Notification>, StorageError>;

    /// Returns matching records ordered by `created_at` descending.
    ///
    /// Records sharing a `created_at` come back most recently inserted first,
    /// so the order is stable for a given store state.
    async fn find(&self, query: &NotificationQuery) -> Result<Vec<Notification>, StorageError>;

    /// Counts every record matching `filter`, without any cap.
    async fn count(&self, filter: &NotificationFilter) -> Result<usize, StorageError>;

    /// Sets `is_read = true` on the record, leaving every other field untouched.
    ///
    /// Returns `false` when no record has this id.
    async fn mark_read(&self, id: &str) -> Result<bool, StorageError>;

    /// Returns the name of this storage backend for logging/debugging.
    fn backend_name(&self) -> &'static str;
}

/// Unscoped accessor for global key/value flags.
#[async_trait]
pub trait GlobalFlagStorage: Send + Sync {
    /// Looks up the global record stored under `key`.
    async fn get_global(&self, key: &str) -> Result<Option<GlobalFlag>, StorageError>;

    /// Inserts or updates the global record stored under `key`.
    ///
    /// An existing record keeps its identity and has its value (and category)
    /// replaced; a key never maps to more than one record.
    async fn upsert_global(
        &self,
        key: &str,
        value: &str,
        category: &str,
    ) -> Result<GlobalFlag, StorageError>;

    /// Returns every global record, ordered by key.
    async fn list_global(&self) -> Result<Vec<GlobalFlag>, StorageError>;
}

use async_trait::async_trait;
use herald_core::{GlobalFlag, Notification, now_utc};
use herald_storage::{
    GlobalFlagStorage, NotificationFilter, NotificationQuery, NotificationStorage, StorageError,
};
use papaya::HashMap as PapayaHashMap;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

const NOTIFICATION_KIND: &str = "Notification";

/// A notification plus its insertion sequence, used as the ordering tie-break.
#[derive(Debug, Clone)]
struct StoredNotification {
    sequence: u64,
    notification: Notification,
}

/// In-memory Herald storage backend.
///
/// This storage implementation provides:
/// - Lock-free concurrent access to notifications via papaya::HashMap
/// - Atomic per-record read-state updates
/// - A separate global flag table guarded by an async RwLock, so upserts of
///   the same key are serialized
#[derive(Debug)]
pub struct InMemoryStorage {
    /// Notifications keyed by id
    notifications: Arc<PapayaHashMap<String, StoredNotification>>,
    /// Global flags keyed by flag key
    flags: Arc<RwLock<HashMap<String, GlobalFlag>>>,
    /// Monotonic insertion counter
    sequence: AtomicU64,
}

impl InMemoryStorage {
    /// Creates a new, empty in-memory storage.
    pub fn new() -> Self {
        Self {
            notifications: Arc::new(PapayaHashMap::new()),
            flags: Arc::new(RwLock::new(HashMap::new())),
            sequence: AtomicU64::new(1),
        }
    }

    fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::SeqCst)
    }

    /// Total number of stored notifications, regardless of tenant.
    pub fn len(&self) -> usize {
        self.notifications.pin().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Matching records in storage order: newest first, later insert first on ties.
    fn matching(&self, filter: &NotificationFilter) -> Vec<StoredNotification> {
        let guard = self.notifications.pin();
        let mut matches: Vec<StoredNotification> = guard
            .iter()
            .filter(|(_, stored)| filter.matches(&stored.notification))
            .map(|(_, stored)| stored.clone())
            .collect();
        matches.sort_by_key(|stored| {
            (
                Reverse(stored.notification.created_at),
                Reverse(stored.sequence),
            )
        });
        matches
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationStorage for InMemoryStorage {
    async fn insert(&self, notification: &Notification) -> Result<Notification, StorageError> {
        let stored = StoredNotification {
            sequence: self.next_sequence(),
            notification: notification.clone(),
        };
        let guard = self.notifications.pin();
        guard
            .try_insert(notification.id.clone(), stored)
            .map_err(|_| StorageError::already_exists(NOTIFICATION_KIND, &notification.id))?;
        Ok(notification.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Notification>, StorageError> {
        let guard = self.notifications.pin();
        Ok(guard.get(id).map(|stored| stored.notification.clone()))
    }

    async fn find(&self, query: &NotificationQuery) -> Result<Vec<Notification>, StorageError> {
        let limit = query.limit.unwrap_or(usize::MAX);
        Ok(self
            .matching(&query.filter)
            .into_iter()
            .take(limit)
            .map(|stored| stored.notification)
            .collect())
    }

    async fn count(&self, filter: &NotificationFilter) -> Result<usize, StorageError> {
        let guard = self.notifications.pin();
        Ok(guard
            .iter()
            .filter(|(_, stored)| filter.matches(&stored.notification))
            .count())
    }

    async fn mark_read(&self, id: &str) -> Result<bool, StorageError> {
        let guard = self.notifications.pin();
        let updated = guard.update(id.to_string(), |stored| {
            let mut next = stored.clone();
            next.notification.is_read = true;
            next
        });
        Ok(updated.is_some())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[async_trait]
impl GlobalFlagStorage for InMemoryStorage {
    async fn get_global(&self, key: &str) -> Result<Option<GlobalFlag>, StorageError> {
        let flags = self.flags.read().await;
        Ok(flags.get(key).cloned())
    }

    async fn upsert_global(
        &self,
        key: &str,
        value: &str,
        category: &str,
    ) -> Result<GlobalFlag, StorageError> {
        if key.trim().is_empty() {
            return Err(StorageError::invalid_record("global flag key must not be empty"));
        }
        let mut flags = self.flags.write().await;
        let now = now_utc();
        let flag = flags
            .entry(key.to_string())
            .and_modify(|existing| {
                existing.value = value.to_string();
                existing.category = category.to_string();
                existing.updated_at = now;
            })
            .or_insert_with(|| GlobalFlag::new(key, value, category, now));
        tracing::debug!(key, value, "global flag upserted");
        Ok(flag.clone())
    }

    async fn list_global(&self) -> Result<Vec<GlobalFlag>, StorageError> {
        let flags = self.flags.read().await;
        let mut all: Vec<GlobalFlag> = flags.values().cloned().collect();
        all.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(all)
    }
}

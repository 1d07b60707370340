use herald_core::{CallerContext, NewNotification, Notification, TenantId, generate_id, now_utc};
use herald_storage::{DynNotificationStorage, NotificationQuery};

use crate::error::NotificationError;
use crate::visibility::{UnreadBadgePolicy, unread_badge_filter, visibility_filter};

/// Upper bound on the number of notifications a single listing returns.
pub const MAX_LIST_RESULTS: usize = 50;

/// Lists, counts and marks notifications on behalf of a caller.
///
/// Holds no state of its own beyond the storage handle; consistency under
/// concurrent callers is the storage backend's concern.
#[derive(Clone)]
pub struct NotificationQueryService {
    storage: DynNotificationStorage,
    badge_policy: UnreadBadgePolicy,
}

impl NotificationQueryService {
    pub fn new(storage: DynNotificationStorage) -> Self {
        Self {
            storage,
            badge_policy: UnreadBadgePolicy::default(),
        }
    }

    pub fn with_badge_policy(mut self, policy: UnreadBadgePolicy) -> Self {
        self.badge_policy = policy;
        self
    }

    /// Persist a new, unread notification stamped with the current time.
    pub async fn create(&self, new: NewNotification) -> Result<Notification, NotificationError> {
        let notification = Notification::from_new(generate_id(), new, now_utc());
        let created = self.storage.insert(&notification).await?;
        tracing::debug!(
            notification_id = %created.id,
            tenant_id = ?created.tenant_id.as_ref().map(TenantId::as_str),
            target_role = %created.target_role,
            "notification created"
        );
        Ok(created)
    }

    /// Notifications visible to `caller`, newest first, at most [`MAX_LIST_RESULTS`].
    pub async fn list(
        &self,
        caller: &CallerContext,
        tenant_filter: Option<&TenantId>,
    ) -> Result<Vec<Notification>, NotificationError> {
        let query =
            NotificationQuery::new(visibility_filter(caller, tenant_filter)).with_limit(MAX_LIST_RESULTS);
        let notifications = self.storage.find(&query).await?;
        tracing::debug!(
            user_id = %caller.user_id,
            super_admin = caller.is_super_admin,
            returned = notifications.len(),
            "notifications listed"
        );
        Ok(notifications)
    }

    /// Unread notifications for the caller's badge, uncapped.
    pub async fn count_unread(&self, caller: &CallerContext) -> Result<usize, NotificationError> {
        if caller.tenant_id.is_none() {
            tracing::debug!(user_id = %caller.user_id, "no tenant context, counting global notifications only");
        }
        let filter = unread_badge_filter(caller, self.badge_policy);
        Ok(self.storage.count(&filter).await?)
    }

    /// Mark a notification read. Unknown ids are a successful no-op.
    pub async fn mark_read(&self, notification_id: &str) -> Result<(), NotificationError> {
        let Some(notification) = self.storage.get(notification_id).await? else {
            tracing::debug!(notification_id, "mark read skipped, notification not found");
            return Ok(());
        };
        if notification.is_read {
            return Ok(());
        }
        if !self.storage.mark_read(notification_id).await? {
            tracing::debug!(notification_id, "notification vanished before mark read");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_db_memory::InMemoryStorage;
    use herald_storage::NotificationStorage;
    use std::sync::Arc;

    fn service() -> (NotificationQueryService, Arc<InMemoryStorage>) {
        let storage = Arc::new(InMemoryStorage::new());
        (NotificationQueryService::new(storage.clone()), storage)
    }

    #[tokio::test]
    async fn test_create_assigns_identity_and_unread_state() {
        let (service, storage) = service();
        let a = service.create(NewNotification::global("A", "")).await.unwrap();
        let b = service.create(NewNotification::global("B", "")).await.unwrap();

        assert_ne!(a.id, b.id);
        assert!(!a.is_read);
        assert_eq!(storage.get(&a.id).await.unwrap(), Some(a));
    }

    #[tokio::test]
    async fn test_list_is_capped() {
        let (service, _) = service();
        for i in 0..(MAX_LIST_RESULTS + 5) {
            service
                .create(NewNotification::global(format!("n{i}"), ""))
                .await
                .unwrap();
        }
        let caller = CallerContext::new("U1", "Vendor");
        let listed = service.list(&caller, None).await.unwrap();
        assert_eq!(listed.len(), MAX_LIST_RESULTS);
        assert_eq!(service.count_unread(&caller).await.unwrap(), MAX_LIST_RESULTS + 5);
    }

    #[tokio::test]
    async fn test_list_empty_is_not_an_error() {
        let (service, _) = service();
        let caller = CallerContext::new("U1", "Vendor");
        assert!(service.list(&caller, None).await.unwrap().is_empty());
        assert_eq!(service.count_unread(&caller).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_mark_read_is_idempotent_and_tolerates_unknown_ids() {
        let (service, storage) = service();
        let n = service.create(NewNotification::global("A", "")).await.unwrap();

        service.mark_read(&n.id).await.unwrap();
        service.mark_read(&n.id).await.unwrap();
        assert!(storage.get(&n.id).await.unwrap().unwrap().is_read);

        service.mark_read("does-not-exist").await.unwrap();
        assert_eq!(storage.len(), 1);
        assert!(storage.get("does-not-exist").await.unwrap().is_none());
    }
}

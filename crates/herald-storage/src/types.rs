//! Predicate and query types shared by every storage backend.
//!
//! Filters are plain data rather than closures so that a backend can either
//! evaluate them in process ([`NotificationFilter::matches`]) or translate them
//! into its own query language.

use herald_core::{Notification, TARGET_ALL, TenantId};
use serde::{Deserialize, Serialize};

/// Which tenants' notifications a query may touch.
///
/// `Unrestricted` is only handed out by the predicate builder, for super-admin
/// callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "tenant", rename_all = "snake_case")]
pub enum TenantScope {
    /// Every tenant plus global notifications
    Unrestricted,
    /// One tenant's notifications plus global notifications
    TenantOrGlobal(TenantId),
    /// Only notifications without an owning tenant
    GlobalOnly,
}

impl TenantScope {
    /// Scope for a caller acting within `tenant_id`; callers without a tenant
    /// only ever reach global notifications.
    pub fn for_tenant(tenant_id: Option<&TenantId>) -> Self {
        match tenant_id {
            Some(id) => Self::TenantOrGlobal(id.clone()),
            None => Self::GlobalOnly,
        }
    }

    pub fn matches(&self, notification: &Notification) -> bool {
        match (self, &notification.tenant_id) {
            (Self::Unrestricted, _) => true,
            (_, None) => true,
            (Self::TenantOrGlobal(scope), Some(owner)) => scope == owner,
            (Self::GlobalOnly, Some(_)) => false,
        }
    }
}

/// Audience targeting clause: who the caller is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audience {
    pub role: String,
    pub user_id: String,
}

impl Audience {
    pub fn new(role: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            user_id: user_id.into(),
        }
    }

    /// A notification reaches this audience when it targets everyone, the
    /// caller's role, or the caller personally.
    pub fn matches(&self, notification: &Notification) -> bool {
        notification.target_role == TARGET_ALL
            || notification.target_role == self.role
            || notification.user_id.as_deref() == Some(self.user_id.as_str())
    }
}

/// Boolean predicate over notification fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationFilter {
    pub scope: TenantScope,
    /// `None` disables audience targeting (super-admin view)
    pub audience: Option<Audience>,
    pub unread_only: bool,
}

impl NotificationFilter {
    pub fn new(scope: TenantScope) -> Self {
        Self {
            scope,
            audience: None,
            unread_only: false,
        }
    }

    pub fn with_audience(mut self, audience: Audience) -> Self {
        self.audience = Some(audience);
        self
    }

    pub fn unread(mut self) -> Self {
        self.unread_only = true;
        self
    }

    pub fn matches(&self, notification: &Notification) -> bool {
        if self.unread_only && notification.is_read {
            return false;
        }
        self.scope.matches(notification)
            && self
                .audience
                .as_ref()
                .is_none_or(|audience| audience.matches(notification))
    }
}

/// A filtered lookup, always ordered newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationQuery {
    pub filter: NotificationFilter,
    /// Maximum number of records to return; `None` is uncapped.
    pub limit: Option<usize>,
}

impl NotificationQuery {
    pub fn new(filter: NotificationFilter) -> Self {
        Self {
            filter,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::NewNotification;
    use time::macros::datetime;

    fn tenant(id: &str) -> TenantId {
        TenantId::new(id).unwrap()
    }

    fn notification(new: NewNotification) -> Notification {
        Notification::from_new("n".into(), new, datetime!(2024-01-01 00:00:00 UTC))
    }

    #[test]
    fn test_scope_tenant_or_global() {
        let scope = TenantScope::for_tenant(Some(&tenant("T1")));
        let own = notification(NewNotification::global("a", "").for_tenant(tenant("T1"), "One"));
        let other = notification(NewNotification::global("b", "").for_tenant(tenant("T2"), "Two"));
        let global = notification(NewNotification::global("c", ""));

        assert!(scope.matches(&own));
        assert!(!scope.matches(&other));
        assert!(scope.matches(&global));
    }

    #[test]
    fn test_scope_global_only() {
        let scope = TenantScope::for_tenant(None);
        assert_eq!(scope, TenantScope::GlobalOnly);
        let owned = notification(NewNotification::global("a", "").for_tenant(tenant("T1"), "One"));
        let global = notification(NewNotification::global("c", ""));
        assert!(!scope.matches(&owned));
        assert!(scope.matches(&global));
    }

    #[test]
    fn test_audience_matching() {
        let audience = Audience::new("Vendor", "U1");
        let all = notification(NewNotification::global("a", ""));
        let vendor = notification(NewNotification::global("b", "").for_role("Vendor"));
        let personal = notification(NewNotification::global("c", "").for_role("Admin").for_user("U1"));
        let elsewhere = notification(NewNotification::global("d", "").for_role("Admin").for_user("U2"));

        assert!(audience.matches(&all));
        assert!(audience.matches(&vendor));
        assert!(audience.matches(&personal));
        assert!(!audience.matches(&elsewhere));
    }

    #[test]
    fn test_filter_unread_only() {
        let mut n = notification(NewNotification::global("a", ""));
        let filter = NotificationFilter::new(TenantScope::Unrestricted).unread();
        assert!(filter.matches(&n));
        n.is_read = true;
        assert!(!filter.matches(&n));
        assert!(NotificationFilter::new(TenantScope::Unrestricted).matches(&n));
    }
}

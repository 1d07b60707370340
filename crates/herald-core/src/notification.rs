use crate::tenant::TenantId;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Target role sentinel meaning "every role".
pub const TARGET_ALL: &str = "All";

fn default_target_role() -> String {
    TARGET_ALL.to_string()
}

/// A stored notification.
///
/// Records are append-only: after creation only `is_read` ever changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,

    /// Owning tenant. `None` marks a global notification visible to every tenant.
    pub tenant_id: Option<TenantId>,

    /// Display label of the owning tenant
    pub brand_name: String,

    /// Role this notification is addressed to, or [`TARGET_ALL`]
    pub target_role: String,

    /// Exact recipient, matched independently of the role
    pub user_id: Option<String>,

    #[serde(rename = "type")]
    pub kind: String,
    pub severity: String,
    pub title: String,
    pub message: String,

    pub is_read: bool,

    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Notification {
    /// Materialize a creation request into a stored record.
    pub fn from_new(id: String, new: NewNotification, created_at: OffsetDateTime) -> Self {
        Self {
            id,
            tenant_id: new.tenant_id,
            brand_name: new.brand_name,
            target_role: new.target_role,
            user_id: new.user_id,
            kind: new.kind,
            severity: new.severity,
            title: new.title,
            message: new.message,
            is_read: false,
            created_at,
        }
    }

    pub fn is_global(&self) -> bool {
        self.tenant_id.is_none()
    }
}

/// Request to create a notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    #[serde(default)]
    pub tenant_id: Option<TenantId>,
    #[serde(default)]
    pub brand_name: String,
    #[serde(default = "default_target_role")]
    pub target_role: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub severity: String,
    pub title: String,
    #[serde(default)]
    pub message: String,
}

impl NewNotification {
    /// Notification for every role, with no owning tenant.
    pub fn global(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            tenant_id: None,
            brand_name: String::new(),
            target_role: default_target_role(),
            user_id: None,
            kind: "System".to_string(),
            severity: "Info".to_string(),
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn for_tenant(mut self, tenant_id: TenantId, brand_name: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id);
        self.brand_name = brand_name.into();
        self
    }

    pub fn for_role(mut self, role: impl Into<String>) -> Self {
        self.target_role = role.into();
        self
    }

    pub fn for_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>, severity: impl Into<String>) -> Self {
        self.kind = kind.into();
        self.severity = severity.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn test_from_new_starts_unread() {
        let new = NewNotification::global("Maintenance", "Tonight at 2am");
        let n = Notification::from_new("n1".into(), new, datetime!(2024-01-01 00:00:00 UTC));
        assert!(!n.is_read);
        assert!(n.is_global());
        assert_eq!(n.target_role, TARGET_ALL);
    }

    #[test]
    fn test_serialized_shape() {
        let new = NewNotification::global("Order placed", "Order #42")
            .for_tenant(TenantId::new("T1").unwrap(), "Pizza Place")
            .for_role("Vendor")
            .with_kind("Order", "Success");
        let n = Notification::from_new("n1".into(), new, datetime!(2024-01-01 08:30:00 UTC));

        let value = serde_json::to_value(&n).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "n1",
                "tenantId": "T1",
                "brandName": "Pizza Place",
                "targetRole": "Vendor",
                "userId": null,
                "type": "Order",
                "severity": "Success",
                "title": "Order placed",
                "message": "Order #42",
                "isRead": false,
                "createdAt": "2024-01-01T08:30:00Z"
            })
        );
    }

    #[test]
    fn test_new_notification_defaults() {
        let new: NewNotification = serde_json::from_value(json!({ "title": "Hello" })).unwrap();
        assert_eq!(new.target_role, TARGET_ALL);
        assert!(new.tenant_id.is_none());
        assert!(new.user_id.is_none());
    }
}

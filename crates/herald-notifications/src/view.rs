use herald_core::{Notification, format_time_ago};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Outward representation of a notification.
///
/// Carries every stored field plus `timeAgo`, which is derived when the view
/// is built and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationView {
    #[serde(flatten)]
    pub notification: Notification,
    pub time_ago: String,
}

impl NotificationView {
    pub fn present(notification: Notification, now: OffsetDateTime) -> Self {
        let time_ago = format_time_ago(notification.created_at, now);
        Self {
            notification,
            time_ago,
        }
    }

    /// Map a whole result set against a single `now`, so one response never
    /// mixes ages computed at different instants.
    pub fn present_all(notifications: Vec<Notification>, now: OffsetDateTime) -> Vec<Self> {
        notifications
            .into_iter()
            .map(|notification| Self::present(notification, now))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::NewNotification;
    use time::macros::datetime;

    #[test]
    fn test_present_copies_fields_and_adds_age() {
        let created = datetime!(2024-05-01 10:00:00 UTC);
        let n = Notification::from_new("n1".into(), NewNotification::global("Hi", "there"), created);

        let view = NotificationView::present(n.clone(), datetime!(2024-05-01 13:30:00 UTC));
        assert_eq!(view.notification, n);
        assert_eq!(view.time_ago, "3h ago");

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], "n1");
        assert_eq!(json["title"], "Hi");
        assert_eq!(json["timeAgo"], "3h ago");
        assert_eq!(json["isRead"], false);
        assert!(json["tenantId"].is_null());
    }

    #[test]
    fn test_age_reflects_query_time() {
        let created = datetime!(2024-05-01 10:00:00 UTC);
        let n = Notification::from_new("n1".into(), NewNotification::global("Hi", ""), created);

        let views = NotificationView::present_all(vec![n.clone()], created);
        assert_eq!(views[0].time_ago, "Just now");

        let later = NotificationView::present(n, datetime!(2024-05-03 09:00:00 UTC));
        assert_eq!(later.time_ago, "1d ago");
    }
}

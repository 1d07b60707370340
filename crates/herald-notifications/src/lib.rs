pub mod error;
pub mod flags;
pub mod service;
pub mod view;
pub mod visibility;

pub use error::NotificationError;
pub use flags::{DEPLOYMENT_ACTIVE_KEY, SYSTEM_CATEGORY, SystemFlagService};
pub use service::{MAX_LIST_RESULTS, NotificationQueryService};
pub use view::NotificationView;
pub use visibility::{UnreadBadgePolicy, unread_badge_filter, visibility_filter};

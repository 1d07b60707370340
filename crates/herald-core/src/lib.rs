pub mod caller;
pub mod error;
pub mod flag;
pub mod id;
pub mod notification;
pub mod tenant;
pub mod time;

pub use caller::CallerContext;
pub use error::{CoreError, Result};
pub use flag::GlobalFlag;
pub use id::generate_id;
pub use notification::{NewNotification, Notification, TARGET_ALL};
pub use tenant::TenantId;
pub use time::{format_time_ago, now_utc};

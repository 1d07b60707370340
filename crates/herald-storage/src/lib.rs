//! # herald-storage
//!
//! Storage abstraction layer for Herald.
//!
//! This crate defines the traits and types that all storage backends must implement.
//! It does not contain any implementations - those are provided by separate crates.
//!
//! ## Overview
//!
//! - [`NotificationStorage`]: tenant-scoped notification records. Every read
//!   goes through a [`NotificationFilter`], whose [`TenantScope`] is mandatory.
//! - [`GlobalFlagStorage`]: tenant-exempt key/value flags for system-wide
//!   singletons such as the deployment status.

mod error;
mod traits;
mod types;

// Re-export everything from submodules
pub use error::{ErrorCategory, StorageError};
pub use traits::{GlobalFlagStorage, NotificationStorage};
pub use types::{Audience, NotificationFilter, NotificationQuery, TenantScope};

/// Type alias for a storage result.
pub type StorageResult<T> = Result<T, StorageError>;

/// Type alias for a shared notification storage trait object.
pub type DynNotificationStorage = std::sync::Arc<dyn NotificationStorage>;

/// Type alias for a shared global flag storage trait object.
pub type DynGlobalFlagStorage = std::sync::Arc<dyn GlobalFlagStorage>;

/// Prelude module for convenient imports.
///
/// ```ignore
/// use herald_storage::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ErrorCategory, StorageError};
    pub use crate::traits::{GlobalFlagStorage, NotificationStorage};
    pub use crate::types::{Audience, NotificationFilter, NotificationQuery, TenantScope};
    pub use crate::{DynGlobalFlagStorage, DynNotificationStorage, StorageResult};
}

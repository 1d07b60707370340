use std::sync::Arc;

use herald_storage::{DynGlobalFlagStorage, DynNotificationStorage};
use serde::{Deserialize, Serialize};

use crate::InMemoryStorage;

/// Supported storage backend types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// In-memory storage implemented on top of papaya::HashMap
    #[default]
    Memory,
}

/// Factory configuration to construct a storage instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
}

/// Both storage tiers, usually backed by the same instance.
#[derive(Clone)]
pub struct StorageHandles {
    pub notifications: DynNotificationStorage,
    pub flags: DynGlobalFlagStorage,
}

/// Create the storage tiers based on the provided configuration.
pub fn create_storage(config: &StorageConfig) -> StorageHandles {
    match config.backend {
        StorageBackend::Memory => {
            let storage = Arc::new(InMemoryStorage::new());
            tracing::info!(backend = "memory", "storage initialized");
            StorageHandles {
                notifications: storage.clone(),
                flags: storage,
            }
        }
    }
}

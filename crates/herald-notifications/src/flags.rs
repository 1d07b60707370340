//! System-wide flags stored through the unscoped global flag tier.

use herald_storage::DynGlobalFlagStorage;

use crate::error::NotificationError;

/// Key of the deployment-active flag
pub const DEPLOYMENT_ACTIVE_KEY: &str = "deployment_active";

/// Category assigned to flags written by this service
pub const SYSTEM_CATEGORY: &str = "system";

#[derive(Clone)]
pub struct SystemFlagService {
    storage: DynGlobalFlagStorage,
}

impl SystemFlagService {
    pub fn new(storage: DynGlobalFlagStorage) -> Self {
        Self { storage }
    }

    /// Raw value of a global flag, if set.
    pub async fn get(&self, key: &str) -> Result<Option<String>, NotificationError> {
        Ok(self.storage.get_global(key).await?.map(|flag| flag.value))
    }

    /// Upsert a global flag value.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), NotificationError> {
        self.storage.upsert_global(key, value, SYSTEM_CATEGORY).await?;
        Ok(())
    }

    /// Whether a deployment is currently in progress. Absent flag means no.
    pub async fn is_deployment_active(&self) -> Result<bool, NotificationError> {
        let flag = self.storage.get_global(DEPLOYMENT_ACTIVE_KEY).await?;
        Ok(flag.is_some_and(|flag| flag.as_bool()))
    }

    pub async fn set_deployment_status(&self, is_active: bool) -> Result<(), NotificationError> {
        let value = if is_active { "true" } else { "false" };
        self.set(DEPLOYMENT_ACTIVE_KEY, value).await?;
        tracing::info!(active = is_active, "deployment status changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_db_memory::InMemoryStorage;
    use herald_storage::GlobalFlagStorage;
    use std::sync::Arc;

    fn service() -> (SystemFlagService, Arc<InMemoryStorage>) {
        let storage = Arc::new(InMemoryStorage::new());
        (SystemFlagService::new(storage.clone()), storage)
    }

    #[tokio::test]
    async fn test_deployment_defaults_to_inactive() {
        let (flags, _) = service();
        assert!(!flags.is_deployment_active().await.unwrap());
        assert_eq!(flags.get(DEPLOYMENT_ACTIVE_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_deployment_toggle_reuses_record() {
        let (flags, storage) = service();

        flags.set_deployment_status(true).await.unwrap();
        assert!(flags.is_deployment_active().await.unwrap());

        flags.set_deployment_status(false).await.unwrap();
        assert!(!flags.is_deployment_active().await.unwrap());

        let all = storage.list_global().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].key, DEPLOYMENT_ACTIVE_KEY);
        assert_eq!(all[0].category, SYSTEM_CATEGORY);
    }

    #[tokio::test]
    async fn test_deployment_value_read_case_insensitively() {
        let (flags, _) = service();
        flags.set(DEPLOYMENT_ACTIVE_KEY, "TRUE").await.unwrap();
        assert!(flags.is_deployment_active().await.unwrap());

        flags.set(DEPLOYMENT_ACTIVE_KEY, "nope").await.unwrap();
        assert!(!flags.is_deployment_active().await.unwrap());
    }
}

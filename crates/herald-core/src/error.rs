use thiserror::Error;

/// Core error types for Herald operations
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid tenant ID: {0}")]
    InvalidTenantId(String),
}

impl CoreError {
    /// Create a new InvalidTenantId error
    pub fn invalid_tenant_id(tenant_id: impl Into<String>) -> Self {
        Self::InvalidTenantId(tenant_id.into())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

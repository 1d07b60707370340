use crate::tenant::TenantId;

/// Identity of the acting caller, as established by the authentication layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerContext {
    pub user_id: String,
    pub role: String,
    /// Tenant the caller acts within. `None` for callers without tenant membership.
    pub tenant_id: Option<TenantId>,
    /// Cross-tenant administrator flag
    pub is_super_admin: bool,
}

impl CallerContext {
    /// Create a regular (non super-admin) caller
    pub fn new(user_id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role: role.into(),
            tenant_id: None,
            is_super_admin: false,
        }
    }

    /// Create a super-admin caller
    pub fn super_admin(user_id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            is_super_admin: true,
            ..Self::new(user_id, role)
        }
    }

    pub fn with_tenant(mut self, tenant_id: TenantId) -> Self {
        self.tenant_id = Some(tenant_id);
        self
    }

    pub fn with_optional_tenant(mut self, tenant_id: Option<TenantId>) -> Self {
        self.tenant_id = tenant_id;
        self
    }
}

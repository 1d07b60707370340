//! Visibility predicate construction.
//!
//! Every read path builds its predicate here, so list and count cannot drift
//! apart in how they treat tenants, global records or super-admins.
//!
//! Rules, applied in order:
//! 1. Tenant clause. A super-admin sees every tenant, or with a tenant filter
//!    that tenant plus global notifications. Anyone else sees their own
//!    tenant plus global notifications, or only global ones without a tenant.
//! 2. Audience clause, skipped for super-admins: the notification targets
//!    `"All"`, the caller's role, or the caller's user id.

use herald_core::{CallerContext, TenantId};
use herald_storage::{Audience, NotificationFilter, TenantScope};
use serde::{Deserialize, Serialize};

/// How the unread badge is scoped for super-admin callers.
///
/// Regular callers are always counted within their own tenant (or global
/// records only, without a tenant), whatever the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnreadBadgePolicy {
    /// Super-admins get the same badge as a regular caller with their tenant, role and id.
    #[default]
    CallerScope,
    /// Super-admins count unread notifications across every tenant and audience,
    /// matching their unfiltered list view.
    Unrestricted,
}

fn caller_audience(caller: &CallerContext) -> Audience {
    Audience::new(caller.role.clone(), caller.user_id.clone())
}

/// Predicate for the notifications `caller` may list.
///
/// `tenant_filter` only narrows a super-admin's view; it is ignored for
/// everyone else, who can never widen their scope beyond their own tenant.
pub fn visibility_filter(
    caller: &CallerContext,
    tenant_filter: Option<&TenantId>,
) -> NotificationFilter {
    if caller.is_super_admin {
        let scope = match tenant_filter {
            Some(tenant) => TenantScope::TenantOrGlobal(tenant.clone()),
            None => TenantScope::Unrestricted,
        };
        return NotificationFilter::new(scope);
    }

    NotificationFilter::new(TenantScope::for_tenant(caller.tenant_id.as_ref()))
        .with_audience(caller_audience(caller))
}

/// Predicate for the caller's unread badge.
pub fn unread_badge_filter(caller: &CallerContext, policy: UnreadBadgePolicy) -> NotificationFilter {
    let filter = match policy {
        UnreadBadgePolicy::Unrestricted if caller.is_super_admin => {
            visibility_filter(caller, None)
        }
        _ => NotificationFilter::new(TenantScope::for_tenant(caller.tenant_id.as_ref()))
            .with_audience(caller_audience(caller)),
    };
    filter.unread()
}

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use herald_core::{CallerContext, NewNotification, TenantId, now_utc};
use herald_notifications::NotificationView;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::caller::Caller;
use crate::error::ApiError;
use crate::server::AppState;

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "service": "herald",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// Super-admins may create for any tenant or globally. Everyone else is pinned
/// to their own tenant: an absent `tenantId` is filled in, a foreign one rejected.
fn authorize_create(
    caller: &CallerContext,
    mut new: NewNotification,
) -> Result<NewNotification, ApiError> {
    if caller.is_super_admin {
        return Ok(new);
    }
    let Some(own) = caller.tenant_id.as_ref() else {
        return Err(ApiError::forbidden(
            "callers without a tenant may not create notifications",
        ));
    };
    match &new.tenant_id {
        Some(target) if target != own => {
            tracing::warn!(user_id = %caller.user_id, target = %target, "cross-tenant create rejected");
            Err(ApiError::forbidden(
                "notifications may only be created for the caller's own tenant",
            ))
        }
        _ => {
            new.tenant_id = Some(own.clone());
            Ok(new)
        }
    }
}

pub async fn create_notification(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Json(new): Json<NewNotification>,
) -> Result<(StatusCode, Json<NotificationView>), ApiError> {
    let new = authorize_create(&caller, new)?;
    let created = state.notifications.create(new).await?;
    Ok((
        StatusCode::CREATED,
        Json(NotificationView::present(created, now_utc())),
    ))
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Only honoured for super-admins
    pub tenant: Option<String>,
}

pub async fn list_notifications(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<NotificationView>>, ApiError> {
    let tenant_filter = query
        .tenant
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(TenantId::new)
        .transpose()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let notifications = state
        .notifications
        .list(&caller, tenant_filter.as_ref())
        .await?;
    Ok(Json(NotificationView::present_all(notifications, now_utc())))
}

pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.notifications.mark_read(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UnreadCount {
    pub count: usize,
}

pub async fn unread_count(
    State(state): State<AppState>,
    Caller(caller): Caller,
) -> Result<Json<UnreadCount>, ApiError> {
    let count = state.notifications.count_unread(&caller).await?;
    Ok(Json(UnreadCount { count }))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeploymentStatus {
    pub active: bool,
}

pub async fn get_deployment(
    State(state): State<AppState>,
) -> Result<Json<DeploymentStatus>, ApiError> {
    let active = state.flags.is_deployment_active().await?;
    Ok(Json(DeploymentStatus { active }))
}

pub async fn set_deployment(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Json(body): Json<DeploymentStatus>,
) -> Result<StatusCode, ApiError> {
    if !caller.is_super_admin {
        tracing::warn!(user_id = %caller.user_id, "deployment status change rejected");
        return Err(ApiError::forbidden(
            "only super-admins may change the deployment status",
        ));
    }
    state.flags.set_deployment_status(body.active).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenant(id: &str) -> TenantId {
        TenantId::new(id).unwrap()
    }

    fn vendor(tenant_id: &str) -> CallerContext {
        CallerContext::new("U1", "Vendor").with_tenant(tenant(tenant_id))
    }

    #[test]
    fn test_super_admin_creates_anything() {
        let admin = CallerContext::super_admin("root", "SuperAdmin");
        let global = authorize_create(&admin, NewNotification::global("g", "")).unwrap();
        assert!(global.tenant_id.is_none());

        let foreign = NewNotification::global("t2", "").for_tenant(tenant("T2"), "Two");
        assert_eq!(authorize_create(&admin, foreign).unwrap().tenant_id, Some(tenant("T2")));
    }

    #[test]
    fn test_regular_caller_pinned_to_own_tenant() {
        let pinned = authorize_create(&vendor("T1"), NewNotification::global("n", "")).unwrap();
        assert_eq!(pinned.tenant_id, Some(tenant("T1")));

        let own = NewNotification::global("n", "").for_tenant(tenant("T1"), "One");
        assert_eq!(authorize_create(&vendor("T1"), own).unwrap().tenant_id, Some(tenant("T1")));
    }

    #[test]
    fn test_regular_caller_cannot_reach_other_tenants() {
        let foreign = NewNotification::global("n", "").for_tenant(tenant("T2"), "Two");
        let err = authorize_create(&vendor("T1"), foreign).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));

        let tenantless = CallerContext::new("U8", "Vendor");
        let err = authorize_create(&tenantless, NewNotification::global("n", "")).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));
    }
}

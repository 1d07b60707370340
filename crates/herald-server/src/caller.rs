//! Caller identity extracted from request headers.
//!
//! Authentication happens upstream; by the time a request reaches this
//! service the gateway has resolved the user and forwards it as headers.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;
use herald_core::{CallerContext, TenantId};

use crate::error::ApiError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";
pub const TENANT_ID_HEADER: &str = "x-tenant-id";
pub const SUPER_ADMIN_HEADER: &str = "x-super-admin";

/// Extractor yielding the [`CallerContext`] of the current request.
#[derive(Debug, Clone)]
pub struct Caller(pub CallerContext);

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

fn is_truthy(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

pub fn caller_from_headers(headers: &HeaderMap) -> Result<CallerContext, ApiError> {
    let user_id = header(headers, USER_ID_HEADER)
        .ok_or_else(|| ApiError::unauthorized(format!("missing {USER_ID_HEADER} header")))?;
    let role = header(headers, USER_ROLE_HEADER)
        .ok_or_else(|| ApiError::unauthorized(format!("missing {USER_ROLE_HEADER} header")))?;
    let tenant_id = header(headers, TENANT_ID_HEADER).and_then(|t| TenantId::new(t).ok());
    let is_super_admin = header(headers, SUPER_ADMIN_HEADER).is_some_and(is_truthy);

    let caller = if is_super_admin {
        CallerContext::super_admin(user_id, role)
    } else {
        CallerContext::new(user_id, role)
    };
    Ok(caller.with_optional_tenant(tenant_id))
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let caller = caller_from_headers(&parts.headers)?;
        tracing::debug!(
            user_id = %caller.user_id,
            role = %caller.role,
            super_admin = caller.is_super_admin,
            "caller resolved"
        );
        Ok(Caller(caller))
    }
}

//! Client wrappers for the admin auth endpoints. These helpers centralize
//! session-aware requests so route code never builds them directly, and they
//! must never log credentials or token material.

use crate::app_lib::{AppError, post_empty, post_json_response};
use crate::features::auth::{
    session,
    types::{LoginRequest, LoginResponse},
};

/// Submits admin credentials and returns the `{success, message, token}`
/// envelope. Any stale session cookie is dropped first so the server response
/// decides the new session.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, AppError> {
    session::clear_token();
    post_json_response("/admin/adminlogin", request).await
}

/// Clears the server-side session. Local invalidation is the caller's job.
pub async fn logout(token: Option<String>) -> Result<(), AppError> {
    post_empty("/admin/logout", token.as_deref()).await
}

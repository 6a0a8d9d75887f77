//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! ## Session Flow
//!
//! 1. **Login:** The client validates credentials locally, POSTs to
//!    `/admin/adminlogin`, and expects `{success, message, token}`. The server
//!    establishes the `admintoken` cookie; if it does not, the client writes a
//!    fallback cookie with a fixed expiry.
//! 2. **Usage:** Directory calls include cookie credentials and an
//!    `Authorization: Bearer` header read from the session context hydrated
//!    once at app start.
//! 3. **Logout:** The client POSTs to `/admin/logout` and drops the cookie and
//!    the in-memory token.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated request plumbing in the route code. Callers must avoid logging
//! token material.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{get_json, post_empty, post_json_response};
pub(crate) use errors::AppError;

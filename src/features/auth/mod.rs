//! Auth feature module covering login validation, the session cookie, and
//! session hydration. It keeps authentication logic out of the UI and must
//! avoid logging credentials or token material.
//!
//! Flow overview: login validates presence/length locally, POSTs once, and on
//! success stores the issued token (server cookie preferred, client fallback
//! with fixed expiry). Logout clears the server session, the cookie, and the
//! in-memory token.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
#[cfg(target_arch = "wasm32")]
mod guards;
pub(crate) mod session;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod types;
pub(crate) mod validate;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RequireSession;

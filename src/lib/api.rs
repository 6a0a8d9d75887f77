//! HTTP helpers for the admin JSON API with consistent timeouts and error
//! handling. Feature clients use these helpers to avoid duplicating request
//! setup and to enforce a predictable timeout policy. Every call carries
//! cookie credentials; directory calls additionally attach a bearer token
//! provided by the caller.

use super::{config::AppConfig, errors::AppError};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::{AbortController, RequestCredentials};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Conventional error envelope returned by the backend on failures.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Fetches JSON with cookies, an optional bearer token, and query parameters.
pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    params: &[(&'static str, String)],
) -> Result<T, AppError> {
    let url = build_url(path);
    let token = token.map(str::to_string);
    let params = params.to_vec();
    let response = send_with_timeout(move |signal| {
        let mut builder = Request::get(&url)
            .query(params.iter().map(|(key, value)| (*key, value.as_str())))
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal));

        if let Some(token) = &token {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        builder
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts JSON with cookies and parses a JSON response.
pub async fn post_json_response<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts an empty body with cookies and an optional bearer token, used to
/// clear a session.
pub async fn post_empty(path: &str, token: Option<&str>) -> Result<(), AppError> {
    let url = build_url(path);
    let token = token.map(str::to_string);
    let response = send_with_timeout(move |signal| {
        let mut builder = Request::post(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal));

        if let Some(token) = &token {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        builder
            .body("")
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    let base = config.api_base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network("A network error occurred. Please try again.".to_string())
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Network("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with the backend message
/// when one is present.
async fn handle_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: extract_message(&body),
        })
    }
}

/// Handles empty responses and returns sanitized HTTP errors when needed.
async fn handle_empty_response(response: gloo_net::http::Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: extract_message(&body),
        })
    }
}

/// Pulls the conventional `message` field out of a JSON error body, falling
/// back to the sanitized raw text.
fn extract_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        let message = parsed.message.trim();
        if !message.is_empty() {
            return message.to_string();
        }
    }

    sanitize_body(body)
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

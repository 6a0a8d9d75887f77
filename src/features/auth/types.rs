//! Request and response types for the admin login API. The response carries
//! an opaque session token, so these values must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::LoginResponse;

    #[test]
    fn decodes_success_payload() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"success": true, "message": "ok", "token": "abc123"}"#)
                .expect("response should decode");
        assert!(response.success);
        assert_eq!(response.token, "abc123");
    }

    #[test]
    fn missing_fields_default() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"message": "invalid credentials"}"#)
                .expect("response should decode");
        assert!(!response.success);
        assert_eq!(response.message, "invalid credentials");
        assert!(response.token.is_empty());
    }
}

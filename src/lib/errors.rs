use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// Rejected before any request was built; shown inline next to the form.
    Validation(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Validation, network, and timeout payloads are already user-facing.
            AppError::Validation(message) => write!(formatter, "{message}"),
            AppError::Network(message) => write!(formatter, "{message}"),
            AppError::Timeout(message) => write!(formatter, "{message}"),
            AppError::Http { status, message } => {
                if message.is_empty() {
                    write!(formatter, "Request failed ({status})")
                } else {
                    write!(formatter, "{message}")
                }
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => write!(formatter, "Request error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn http_error_prefers_server_message() {
        let err = AppError::Http {
            status: 401,
            message: "invalid credentials".to_string(),
        };
        assert_eq!(err.to_string(), "invalid credentials");
    }

    #[test]
    fn http_error_falls_back_to_status() {
        let err = AppError::Http {
            status: 502,
            message: String::new(),
        };
        assert_eq!(err.to_string(), "Request failed (502)");
    }

    #[test]
    fn validation_error_is_shown_bare() {
        let err = AppError::Validation("password must be at least 8 characters".to_string());
        assert_eq!(err.to_string(), "password must be at least 8 characters");
    }
}

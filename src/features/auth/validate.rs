//! Credential checks performed before any network call. A failed check keeps
//! the form inline message local and never builds a request.

use crate::app_lib::AppError;

pub(crate) const MIN_PASSWORD_CHARS: usize = 8;

pub(crate) fn validate_credentials(email: &str, password: &str) -> Result<(), AppError> {
    if email.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter your email.".to_string(),
        ));
    }

    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(AppError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_CHARS} characters."
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_credentials;
    use crate::app_lib::AppError;

    #[test]
    fn empty_email_is_rejected() {
        let result = validate_credentials("   ", "longenough");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn short_password_is_rejected_before_any_request() {
        let result = validate_credentials("admin@trustbridge.example", "short1");
        let Err(AppError::Validation(message)) = result else {
            panic!("expected a validation error");
        };
        assert!(message.contains("8 characters"));
    }

    #[test]
    fn eight_character_password_passes() {
        assert!(validate_credentials("admin@trustbridge.example", "exactly8").is_ok());
    }
}

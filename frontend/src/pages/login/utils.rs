use crate::api::{ApiError, LoginRequest};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Demo accounts seeded by the backend, shown under the form.
pub const DEMO_ACCOUNTS: &[(&str, &str, &str)] = &[
    ("Admin", "admin@company.com", "admin123"),
    ("HR", "hr@company.com", "hr123"),
    ("Employee", "employee@company.com", "emp123"),
];

/// Cheap shape check only; the backend remains the authority.
pub fn looks_like_email(value: &str) -> bool {
    let trimmed = value.trim();
    let Some(at) = trimmed.find('@') else {
        return false;
    };
    let (local, domain) = trimmed.split_at(at);
    let domain = &domain[1..];
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Length rules apply where passwords are set, not here; some seeded
/// accounts carry passwords shorter than [`MIN_PASSWORD_LEN`].
pub fn validate_credentials(email: &str, password: &str) -> Result<LoginRequest, ApiError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ApiError::validation("Please enter your email address."));
    }
    if !looks_like_email(email) {
        return Err(ApiError::validation("Please enter a valid email address."));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Please enter your password."));
    }
    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

pub fn validate_reset_email(email: &str) -> Result<String, ApiError> {
    let email = email.trim();
    if !looks_like_email(email) {
        return Err(ApiError::validation("Please enter a valid email address."));
    }
    Ok(email.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_check_accepts_plain_addresses() {
        assert!(looks_like_email("admin@company.com"));
        assert!(looks_like_email("  hr@company.co.uk  "));
        assert!(!looks_like_email("admin"));
        assert!(!looks_like_email("@company.com"));
        assert!(!looks_like_email("admin@company"));
        assert!(!looks_like_email("admin@.com"));
        assert!(!looks_like_email("admin@company."));
    }

    #[test]
    fn credentials_must_pass_both_checks() {
        let request = validate_credentials(" admin@company.com ", "admin123").unwrap();
        assert_eq!(request.email, "admin@company.com");
        assert_eq!(request.password, "admin123");

        assert!(validate_credentials("", "admin123").is_err());
        assert!(validate_credentials("not-an-email", "admin123").is_err());
        let empty = validate_credentials("admin@company.com", "").unwrap_err();
        assert_eq!(empty.code, "VALIDATION_ERROR");
    }

    #[test]
    fn every_demo_account_passes_sign_in_validation() {
        for (_, email, password) in DEMO_ACCOUNTS {
            assert!(validate_credentials(email, password).is_ok());
        }
    }

    #[test]
    fn reset_email_is_trimmed() {
        assert_eq!(
            validate_reset_email(" hr@company.com ").unwrap(),
            "hr@company.com"
        );
        assert!(validate_reset_email("nope").is_err());
    }
}

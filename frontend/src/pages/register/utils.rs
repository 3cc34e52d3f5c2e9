use leptos::*;

use crate::api::{ApiError, RegisterRequest};
use crate::pages::login::utils::{looks_like_email, MIN_PASSWORD_LEN};

pub const ROLE_OPTIONS: &[(&str, &str)] = &[
    ("employee", "Employee"),
    ("hr", "HR"),
    ("admin", "Admin"),
];

pub fn role_options() -> Vec<(String, String)> {
    ROLE_OPTIONS
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}

#[derive(Clone, Copy)]
pub struct RegisterFormState {
    name: RwSignal<String>,
    email: RwSignal<String>,
    password: RwSignal<String>,
    confirm_password: RwSignal<String>,
    role: RwSignal<String>,
}

impl Default for RegisterFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            confirm_password: create_rw_signal(String::new()),
            role: create_rw_signal("employee".to_string()),
        }
    }
}

impl RegisterFormState {
    pub fn name_signal(&self) -> RwSignal<String> {
        self.name
    }

    pub fn email_signal(&self) -> RwSignal<String> {
        self.email
    }

    pub fn password_signal(&self) -> RwSignal<String> {
        self.password
    }

    pub fn confirm_password_signal(&self) -> RwSignal<String> {
        self.confirm_password
    }

    pub fn role_signal(&self) -> RwSignal<String> {
        self.role
    }

    pub fn to_payload(self) -> Result<RegisterRequest, ApiError> {
        validate_registration(
            &self.name.get(),
            &self.email.get(),
            &self.password.get(),
            &self.confirm_password.get(),
            &self.role.get(),
        )
    }
}

pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
    role: &str,
) -> Result<RegisterRequest, ApiError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::validation("Please enter your full name."));
    }
    let email = email.trim();
    if !looks_like_email(email) {
        return Err(ApiError::validation("Please enter a valid email address."));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(
            "Password must be at least 6 characters.",
        ));
    }
    if password != confirm_password {
        return Err(ApiError::validation("Passwords do not match."));
    }
    if !ROLE_OPTIONS.iter().any(|(value, _)| *value == role) {
        return Err(ApiError::validation("Please choose a valid role."));
    }
    Ok(RegisterRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role: role.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn accepts_a_complete_registration() {
        let request = validate_registration(
            " Jane Doe ",
            "jane@company.com",
            "secret1",
            "secret1",
            "employee",
        )
        .unwrap();
        assert_eq!(request.name, "Jane Doe");
        assert_eq!(request.role, "employee");
    }

    #[test]
    fn rejects_each_invalid_field() {
        assert!(validate_registration("", "jane@company.com", "secret1", "secret1", "hr").is_err());
        assert!(validate_registration("Jane", "jane", "secret1", "secret1", "hr").is_err());
        assert!(validate_registration("Jane", "jane@company.com", "abc", "abc", "hr").is_err());
        assert!(
            validate_registration("Jane", "jane@company.com", "secret1", "secret2", "hr").is_err()
        );
        assert!(
            validate_registration("Jane", "jane@company.com", "secret1", "secret1", "root")
                .is_err()
        );
    }

    #[test]
    fn form_state_payload_round_trip() {
        with_runtime(|| {
            let form = RegisterFormState::default();
            form.name_signal().set("Jane Doe".into());
            form.email_signal().set("jane@company.com".into());
            form.password_signal().set("secret1".into());
            form.confirm_password_signal().set("secret1".into());
            form.role_signal().set("hr".into());

            let payload = form.to_payload().unwrap();
            assert_eq!(payload.email, "jane@company.com");
            assert_eq!(payload.role, "hr");
        });
    }
}

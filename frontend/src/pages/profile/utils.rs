use leptos::*;

use crate::api::{ApiError, AuthUser, UpdateProfileRequest};
use crate::pages::login::utils::{looks_like_email, MIN_PASSWORD_LEN};

#[derive(Clone, Copy)]
pub struct ProfileFormState {
    name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
}

impl Default for ProfileFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            phone: create_rw_signal(String::new()),
        }
    }
}

impl ProfileFormState {
    pub fn name_signal(&self) -> RwSignal<String> {
        self.name
    }

    pub fn email_signal(&self) -> RwSignal<String> {
        self.email
    }

    pub fn phone_signal(&self) -> RwSignal<String> {
        self.phone
    }

    pub fn load_from_user(&self, user: &AuthUser) {
        self.name.set(user.name.clone());
        self.email.set(user.email.clone());
        self.phone.set(user.phone.clone().unwrap_or_default());
    }

    pub fn to_payload(self) -> Result<UpdateProfileRequest, ApiError> {
        let name = self.name.get();
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::validation("Name cannot be empty."));
        }
        let email = self.email.get();
        let email = email.trim().to_string();
        if !looks_like_email(&email) {
            return Err(ApiError::validation("Please enter a valid email address."));
        }
        let phone = self.phone.get();
        let phone = phone.trim();
        Ok(UpdateProfileRequest {
            name: name.to_string(),
            email,
            phone: (!phone.is_empty()).then(|| phone.to_string()),
        })
    }
}

#[derive(Clone, Copy)]
pub struct PasswordFormState {
    current: RwSignal<String>,
    new: RwSignal<String>,
    confirm: RwSignal<String>,
}

impl Default for PasswordFormState {
    fn default() -> Self {
        Self {
            current: create_rw_signal(String::new()),
            new: create_rw_signal(String::new()),
            confirm: create_rw_signal(String::new()),
        }
    }
}

impl PasswordFormState {
    pub fn current_signal(&self) -> RwSignal<String> {
        self.current
    }

    pub fn new_signal(&self) -> RwSignal<String> {
        self.new
    }

    pub fn confirm_signal(&self) -> RwSignal<String> {
        self.confirm
    }

    pub fn reset(&self) {
        self.current.set(String::new());
        self.new.set(String::new());
        self.confirm.set(String::new());
    }

    /// `(current, new)` ready for the change-password endpoint.
    pub fn to_payload(self) -> Result<(String, String), ApiError> {
        validate_password_change(&self.current.get(), &self.new.get(), &self.confirm.get())
    }
}

pub fn validate_password_change(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(String, String), ApiError> {
    if current.is_empty() {
        return Err(ApiError::validation("Please enter your current password."));
    }
    if new.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(
            "New password must be at least 6 characters.",
        ));
    }
    if new != confirm {
        return Err(ApiError::validation("New passwords do not match."));
    }
    if new == current {
        return Err(ApiError::validation(
            "New password must differ from the current one.",
        ));
    }
    Ok((current.to_string(), new.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn password_change_checks_every_rule() {
        assert!(validate_password_change("", "secret1", "secret1").is_err());
        assert!(validate_password_change("old", "abc", "abc").is_err());
        assert!(validate_password_change("old", "secret1", "secret2").is_err());
        assert!(validate_password_change("secret1", "secret1", "secret1").is_err());

        let (current, new) = validate_password_change("old123", "secret1", "secret1").unwrap();
        assert_eq!(current, "old123");
        assert_eq!(new, "secret1");
    }

    #[test]
    fn profile_form_loads_and_serializes() {
        with_runtime(|| {
            let form = ProfileFormState::default();
            form.load_from_user(&AuthUser {
                id: "u1".into(),
                name: "Jane".into(),
                email: "jane@company.com".into(),
                role: "employee".into(),
                phone: Some("555-0100".into()),
            });
            assert_eq!(form.phone_signal().get(), "555-0100");

            form.phone_signal().set("  ".into());
            let payload = form.to_payload().unwrap();
            assert_eq!(payload.name, "Jane");
            assert!(payload.phone.is_none());
        });
    }

    #[test]
    fn profile_form_rejects_blank_name_and_bad_email() {
        with_runtime(|| {
            let form = ProfileFormState::default();
            form.name_signal().set("  ".into());
            form.email_signal().set("jane@company.com".into());
            assert!(form.to_payload().is_err());

            form.name_signal().set("Jane".into());
            form.email_signal().set("not-an-email".into());
            assert!(form.to_payload().is_err());
        });
    }
}

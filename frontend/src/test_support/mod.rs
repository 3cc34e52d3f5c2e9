#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::AuthUser;
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn admin_user() -> AuthUser {
        AuthUser {
            id: "u-admin".into(),
            name: "Admin User".into(),
            email: "admin@company.com".into(),
            role: "admin".into(),
            phone: None,
        }
    }

    pub fn hr_user() -> AuthUser {
        AuthUser {
            id: "u-hr".into(),
            name: "HR User".into(),
            email: "hr@company.com".into(),
            role: "hr".into(),
            phone: None,
        }
    }

    pub fn employee_user() -> AuthUser {
        AuthUser {
            id: "u-employee".into(),
            name: "Employee User".into(),
            email: "employee@company.com".into(),
            role: "employee".into(),
            phone: Some("555-0100".into()),
        }
    }

    /// Installs an auth context; signed in exactly when a user is given.
    pub fn provide_auth(
        user: Option<AuthUser>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let is_authenticated = user.is_some();
        let (auth, set_auth) = create_signal(AuthState {
            user,
            is_authenticated,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}

use leptos::*;

use crate::api::{
    clear_session, persist_session, persist_user, stored_token, stored_user, ApiClient, ApiError,
    AuthUser, LoginRequest, RegisterRequest,
};

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub is_authenticated: bool,
    pub loading: bool,
}

/// Session transitions. `apply` is the only place the state changes shape,
/// so every screen observes the same lifecycle.
#[derive(Debug, Clone)]
pub enum AuthEvent {
    LoginStarted,
    LoginSucceeded(AuthUser),
    LoginFailed,
    ProfileRefreshed(AuthUser),
    LoggedOut,
}

impl AuthState {
    pub fn role(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.role.as_str())
    }

    pub fn apply(&self, event: AuthEvent) -> AuthState {
        match event {
            AuthEvent::LoginStarted => AuthState {
                user: self.user.clone(),
                is_authenticated: self.is_authenticated,
                loading: true,
            },
            AuthEvent::LoginSucceeded(user) => AuthState {
                user: Some(user),
                is_authenticated: true,
                loading: false,
            },
            AuthEvent::LoginFailed => AuthState {
                user: self.user.clone(),
                is_authenticated: self.is_authenticated,
                loading: false,
            },
            AuthEvent::ProfileRefreshed(user) => AuthState {
                user: Some(user),
                is_authenticated: self.is_authenticated,
                loading: self.loading,
            },
            AuthEvent::LoggedOut => AuthState::default(),
        }
    }
}

pub fn dispatch(set_auth_state: WriteSignal<AuthState>, event: AuthEvent) {
    set_auth_state.update(|state| *state = state.apply(event));
}

/// A stored token plus a readable cached profile restore the session without
/// a network round trip. Anything less starts signed out.
pub fn hydrate_from_storage() -> AuthState {
    match (stored_token(), stored_user()) {
        (Some(_), Some(user)) => AuthState {
            user: Some(user),
            is_authenticated: true,
            loading: false,
        },
        _ => AuthState::default(),
    }
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(hydrate_from_storage());
    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    client: &ApiClient,
    request: LoginRequest,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    dispatch(set_auth_state, AuthEvent::LoginStarted);
    match client.login(&request).await {
        Ok(response) => {
            persist_session(&response.token, &response.user);
            dispatch(set_auth_state, AuthEvent::LoginSucceeded(response.user));
            Ok(())
        }
        Err(error) => {
            dispatch(set_auth_state, AuthEvent::LoginFailed);
            Err(error)
        }
    }
}

/// Registration answers with the same envelope as login, so a fresh account
/// is signed in right away.
pub async fn register_request(
    client: &ApiClient,
    request: RegisterRequest,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    dispatch(set_auth_state, AuthEvent::LoginStarted);
    match client.register(&request).await {
        Ok(response) => {
            persist_session(&response.token, &response.user);
            dispatch(set_auth_state, AuthEvent::LoginSucceeded(response.user));
            Ok(())
        }
        Err(error) => {
            dispatch(set_auth_state, AuthEvent::LoginFailed);
            Err(error)
        }
    }
}

/// The backend issues stateless tokens, so signing out is purely local.
pub fn logout(set_auth_state: WriteSignal<AuthState>) {
    clear_session();
    dispatch(set_auth_state, AuthEvent::LoggedOut);
}

/// Keeps the cached profile in sync after an edit.
pub fn profile_updated(set_auth_state: WriteSignal<AuthState>, user: AuthUser) {
    persist_user(&user);
    dispatch(set_auth_state, AuthEvent::ProfileRefreshed(user));
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let client = client.clone();
        async move { login_request(&client, payload, set_auth).await }
    })
}

pub fn use_register_action() -> Action<RegisterRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |request: &RegisterRequest| {
        let payload = request.clone();
        let client = client.clone();
        async move { register_request(&client, payload, set_auth).await }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    fn sample_user() -> AuthUser {
        AuthUser {
            id: "u1".into(),
            name: "Admin User".into(),
            email: "admin@company.com".into(),
            role: "admin".into(),
            phone: None,
        }
    }

    #[test]
    fn transitions_walk_the_session_lifecycle() {
        let initial = AuthState::default();

        let loading = initial.apply(AuthEvent::LoginStarted);
        assert!(loading.loading);
        assert!(!loading.is_authenticated);

        let signed_in = loading.apply(AuthEvent::LoginSucceeded(sample_user()));
        assert!(signed_in.is_authenticated);
        assert!(!signed_in.loading);
        assert_eq!(signed_in.role(), Some("admin"));

        let refreshed = signed_in.apply(AuthEvent::ProfileRefreshed(AuthUser {
            name: "Renamed".into(),
            ..sample_user()
        }));
        assert_eq!(refreshed.user.as_ref().unwrap().name, "Renamed");
        assert!(refreshed.is_authenticated);

        let signed_out = refreshed.apply(AuthEvent::LoggedOut);
        assert_eq!(signed_out, AuthState::default());
    }

    #[test]
    fn failed_login_stops_loading_but_keeps_prior_session() {
        let mut signed_in = AuthState::default().apply(AuthEvent::LoginSucceeded(sample_user()));
        signed_in = signed_in.apply(AuthEvent::LoginStarted);
        let after_failure = signed_in.apply(AuthEvent::LoginFailed);
        assert!(!after_failure.loading);
        assert!(after_failure.is_authenticated);
        assert!(after_failure.user.is_some());
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.user.is_none());
            assert_eq!(snapshot.role(), None);
        });
    }
}

use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config;
use crate::utils::{navigation, storage};

use super::types::{ApiError, AuthUser, ErrorBody};

pub const TOKEN_KEY: &str = "hrm_token";
pub const TOKEN_EXPIRY_KEY: &str = "hrm_token_expires_at";
pub const USER_KEY: &str = "hrm_user";

/// Matches the backend's 7-day token lifetime.
pub const SESSION_TTL_DAYS: i64 = 7;

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.to_string()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.clone(),
            None => config::await_api_base_url().await,
        }
    }

    /// Best effort: requests go out without a bearer when no session is
    /// stored, and the backend answers 401.
    pub(crate) fn get_auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = stored_token() {
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {token}")) {
                headers.insert(AUTHORIZATION, value);
            }
        }
        headers
    }

    pub(crate) fn send_error(err: reqwest::Error) -> ApiError {
        ApiError::request_failed(format!("Request failed: {err}"))
    }

    /// Standard response pipeline: a 401 tears the session down before the
    /// error is surfaced; success decodes JSON; other failures map the
    /// backend `{message}` envelope into an ApiError.
    pub(crate) async fn parse_response<T: DeserializeOwned>(
        response: Response,
    ) -> Result<T, ApiError> {
        Self::handle_unauthorized_status(response.status());
        Self::decode_response(response).await
    }

    /// Login differs: its 401 means wrong credentials, not an expired
    /// session, so the stored session (if any) is left alone.
    pub(crate) async fn parse_response_keep_session<T: DeserializeOwned>(
        response: Response,
    ) -> Result<T, ApiError> {
        Self::decode_response(response).await
    }

    async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::request_failed(format!("Failed to parse response: {e}")))
        } else {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
            Err(ApiError::from_status(status.as_u16(), message))
        }
    }

    pub(crate) fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("authorization failed, clearing stored session");
            clear_session();
            if should_redirect_to_login(navigation::current_pathname().as_deref()) {
                navigation::redirect_to("/login");
            }
        }
    }
}

/// Already sitting on the login screen means the failed request was a
/// sign-in attempt; bouncing would wipe the form.
pub(crate) fn should_redirect_to_login(pathname: Option<&str>) -> bool {
    pathname != Some("/login")
}

pub fn stored_token() -> Option<String> {
    let token = storage::get_item(TOKEN_KEY).ok().flatten()?;
    let expiry = storage::get_item(TOKEN_EXPIRY_KEY).ok().flatten();
    if session_expired(expiry.as_deref(), Utc::now()) {
        clear_session();
        return None;
    }
    Some(token)
}

pub fn session_expired(expires_at: Option<&str>, now: DateTime<Utc>) -> bool {
    match expires_at {
        // Sessions persisted before the expiry stamp existed stay valid
        // until the backend rejects them.
        None => false,
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|t| t.with_timezone(&Utc) <= now)
            .unwrap_or(true),
    }
}

pub fn persist_session(token: &str, user: &AuthUser) {
    let expires_at = (Utc::now() + chrono::Duration::days(SESSION_TTL_DAYS)).to_rfc3339();
    let _ = storage::set_item(TOKEN_KEY, token);
    let _ = storage::set_item(TOKEN_EXPIRY_KEY, &expires_at);
    persist_user(user);
}

pub fn persist_user(user: &AuthUser) {
    if let Ok(raw) = serde_json::to_string(user) {
        let _ = storage::set_item(USER_KEY, &raw);
    }
}

pub fn clear_session() {
    let _ = storage::remove_item(TOKEN_KEY);
    let _ = storage::remove_item(TOKEN_EXPIRY_KEY);
    let _ = storage::remove_item(USER_KEY);
}

/// Malformed cached profiles fall back to the unauthenticated state.
pub fn parse_stored_user(raw: &str) -> Option<AuthUser> {
    serde_json::from_str(raw).ok()
}

pub fn stored_user() -> Option<AuthUser> {
    let raw = storage::get_item(USER_KEY).ok().flatten()?;
    parse_stored_user(&raw)
}

/// Search terms travel in hand-built query strings.
pub(crate) fn encode_query_term(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn login_page_never_redirects_to_itself() {
        assert!(!should_redirect_to_login(Some("/login")));
        assert!(should_redirect_to_login(Some("/dashboard")));
        assert!(should_redirect_to_login(Some("/payroll")));
        assert!(should_redirect_to_login(None));
    }

    #[test]
    fn session_expiry_is_checked_against_the_stored_stamp() {
        let now = Utc.with_ymd_and_hms(2026, 2, 10, 12, 0, 0).unwrap();
        assert!(!session_expired(None, now));
        assert!(!session_expired(Some("2026-02-17T12:00:00+00:00"), now));
        assert!(session_expired(Some("2026-02-10T12:00:00+00:00"), now));
        assert!(session_expired(Some("2026-02-03T12:00:00+00:00"), now));
        assert!(session_expired(Some("not a timestamp"), now));
    }

    #[test]
    fn malformed_stored_user_parses_to_none() {
        assert!(parse_stored_user("{\"broken\":").is_none());
        assert!(parse_stored_user("null").is_none());
        let user = parse_stored_user(
            r#"{"_id":"u1","name":"Admin","email":"admin@company.com","role":"admin"}"#,
        )
        .unwrap();
        assert_eq!(user.role, "admin");
    }

    #[test]
    fn query_terms_are_percent_encoded() {
        assert_eq!(encode_query_term("jane doe"), "jane%20doe");
        assert_eq!(encode_query_term("a&b=c"), "a%26b%3Dc");
    }
}

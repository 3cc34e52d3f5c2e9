use serde_json::json;

use super::client::ApiClient;
use super::types::{
    ApiError, AuthUser, ChangePasswordRequest, LoginRequest, LoginResponse, MessageResponse,
    RegisterRequest, UpdateProfileRequest,
};

impl ApiClient {
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/login", base_url))
            .json(payload)
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response_keep_session(response).await
    }

    pub async fn register(&self, payload: &RegisterRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/register", base_url))
            .json(payload)
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response_keep_session(response).await
    }

    pub async fn forgot_password(&self, email: &str) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/forgot-password", base_url))
            .json(&json!({ "email": email }))
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response_keep_session(response).await
    }

    pub async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/reset-password/{}", base_url, token))
            .json(&json!({ "password": new_password }))
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response_keep_session(response).await
    }

    pub async fn get_profile(&self) -> Result<AuthUser, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/auth/profile", base_url))
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn update_profile(
        &self,
        payload: &UpdateProfileRequest,
    ) -> Result<AuthUser, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .put(format!("{}/auth/profile", base_url))
            .headers(self.get_auth_headers())
            .json(payload)
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let payload = ChangePasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        let response = self
            .http_client()
            .put(format!("{}/auth/change-password", base_url))
            .headers(self.get_auth_headers())
            .json(&payload)
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }
}

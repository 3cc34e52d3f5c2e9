use super::client::ApiClient;
use super::types::{ApiError, CreateLeaveRequest, Leave, MessageResponse, UpdateLeaveStatusRequest};

impl ApiClient {
    /// Admins and HR receive every request, employees only their own.
    /// The backend scopes the result by the bearer token.
    pub async fn list_leaves(&self) -> Result<Vec<Leave>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/leaves", base_url))
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn create_leave(&self, payload: &CreateLeaveRequest) -> Result<Leave, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/leaves", base_url))
            .headers(self.get_auth_headers())
            .json(payload)
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    /// `status` is `approved` or `rejected`; admin and HR only.
    pub async fn update_leave_status(&self, id: &str, status: &str) -> Result<Leave, ApiError> {
        let base_url = self.resolved_base_url().await;
        let payload = UpdateLeaveStatusRequest {
            status: status.to_string(),
        };
        let response = self
            .http_client()
            .patch(format!("{}/leaves/{}/status", base_url, id))
            .headers(self.get_auth_headers())
            .json(&payload)
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn delete_leave(&self, id: &str) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .delete(format!("{}/leaves/{}", base_url, id))
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }
}

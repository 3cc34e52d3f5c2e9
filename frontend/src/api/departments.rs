use super::client::ApiClient;
use super::types::{ApiError, Department, DepartmentPayload, MessageResponse};

impl ApiClient {
    pub async fn list_departments(&self) -> Result<Vec<Department>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/departments", base_url))
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn create_department(
        &self,
        payload: &DepartmentPayload,
    ) -> Result<Department, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/departments", base_url))
            .headers(self.get_auth_headers())
            .json(payload)
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn update_department(
        &self,
        id: &str,
        payload: &DepartmentPayload,
    ) -> Result<Department, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .put(format!("{}/departments/{}", base_url, id))
            .headers(self.get_auth_headers())
            .json(payload)
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn toggle_department_status(&self, id: &str) -> Result<Department, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .patch(format!("{}/departments/{}/toggle-status", base_url, id))
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn delete_department(&self, id: &str) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .delete(format!("{}/departments/{}", base_url, id))
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }
}

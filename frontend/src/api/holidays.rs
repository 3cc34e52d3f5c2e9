use super::client::ApiClient;
use super::types::{ApiError, Holiday, HolidayPayload, MessageResponse};

impl ApiClient {
    pub async fn list_holidays(&self) -> Result<Vec<Holiday>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/holidays", base_url))
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn create_holiday(&self, payload: &HolidayPayload) -> Result<Holiday, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/holidays", base_url))
            .headers(self.get_auth_headers())
            .json(payload)
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn update_holiday(
        &self,
        id: &str,
        payload: &HolidayPayload,
    ) -> Result<Holiday, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .put(format!("{}/holidays/{}", base_url, id))
            .headers(self.get_auth_headers())
            .json(payload)
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn delete_holiday(&self, id: &str) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .delete(format!("{}/holidays/{}", base_url, id))
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }
}

use super::client::ApiClient;
use super::types::{Announcement, AnnouncementPayload, ApiError, MessageResponse};

impl ApiClient {
    pub async fn list_announcements(&self) -> Result<Vec<Announcement>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/announcements", base_url))
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn create_announcement(
        &self,
        payload: &AnnouncementPayload,
    ) -> Result<Announcement, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/announcements", base_url))
            .headers(self.get_auth_headers())
            .json(payload)
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn update_announcement(
        &self,
        id: &str,
        payload: &AnnouncementPayload,
    ) -> Result<Announcement, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .put(format!("{}/announcements/{}", base_url, id))
            .headers(self.get_auth_headers())
            .json(payload)
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn delete_announcement(&self, id: &str) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .delete(format!("{}/announcements/{}", base_url, id))
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }
}

use chrono::NaiveDate;
use reqwest::multipart::{Form, Part};

use super::client::ApiClient;
use super::types::{ApiError, AttendanceRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PunchKind {
    CheckIn,
    CheckOut,
}

impl PunchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CheckIn => "checkin",
            Self::CheckOut => "checkout",
        }
    }
}

/// Optional photo proof attached to a punch, read from a file input.
#[derive(Clone)]
pub struct PunchPhoto {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime_type: String,
}

impl ApiClient {
    /// Today's record, or `None` when the employee hasn't punched yet.
    pub async fn get_today_attendance(&self) -> Result<Option<AttendanceRecord>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/attendance/today", base_url))
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn get_attendance_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let url = format!(
            "{}/attendance?startDate={}&endDate={}",
            base_url, start_date, end_date
        );
        let response = self
            .http_client()
            .get(&url)
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn mark_attendance(
        &self,
        kind: PunchKind,
        photo: Option<PunchPhoto>,
    ) -> Result<AttendanceRecord, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut form = Form::new().text("type", kind.as_str());
        if let Some(photo) = photo {
            let part = Part::bytes(photo.bytes)
                .file_name(photo.filename)
                .mime_str(&photo.mime_type)
                .map_err(|e| ApiError::validation(format!("unsupported photo type: {e}")))?;
            form = form.part("image", part);
        }
        let response = self
            .http_client()
            .post(format!("{}/attendance/mark", base_url))
            .headers(self.get_auth_headers())
            .multipart(form)
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }
}

use super::client::ApiClient;
use super::types::{
    Activity, ApiError, AttendanceOverviewResponse, DashboardStatsResponse,
    DepartmentOverviewResponse,
};

impl ApiClient {
    pub async fn get_dashboard_stats(&self) -> Result<DashboardStatsResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/dashboard/stats", base_url))
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn get_recent_activities(&self, limit: i64) -> Result<Vec<Activity>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/dashboard/activities?limit={}", base_url, limit))
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    /// `period` is the backend's window keyword, `7d` or `30d`.
    pub async fn get_attendance_overview(
        &self,
        period: &str,
    ) -> Result<AttendanceOverviewResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!(
                "{}/dashboard/attendance-overview?period={}",
                base_url, period
            ))
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn get_department_overview(&self) -> Result<DepartmentOverviewResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/dashboard/department-overview", base_url))
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }
}

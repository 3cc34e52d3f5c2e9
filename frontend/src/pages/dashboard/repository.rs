use crate::api::{
    Activity, ApiClient, ApiError, AttendanceOverviewResponse, DashboardStatsResponse,
    DepartmentOverviewResponse,
};

use super::utils::ACTIVITY_FEED_LIMIT;

pub async fn fetch_stats(api: &ApiClient) -> Result<DashboardStatsResponse, ApiError> {
    api.get_dashboard_stats().await
}

pub async fn fetch_activities(api: &ApiClient) -> Result<Vec<Activity>, ApiError> {
    api.get_recent_activities(ACTIVITY_FEED_LIMIT).await
}

pub async fn fetch_attendance_overview(
    api: &ApiClient,
    period: &str,
) -> Result<AttendanceOverviewResponse, ApiError> {
    api.get_attendance_overview(period).await
}

pub async fn fetch_department_overview(
    api: &ApiClient,
) -> Result<DepartmentOverviewResponse, ApiError> {
    api.get_department_overview().await
}

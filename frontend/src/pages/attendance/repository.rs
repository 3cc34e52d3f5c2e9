use crate::api::{
    ApiClient, ApiError, AttendanceRecord, Leave, PunchKind, PunchPhoto, ResourceTag, TagRegistry,
};

use super::utils::month_bounds;

pub async fn fetch_today(api: &ApiClient) -> Result<Option<AttendanceRecord>, ApiError> {
    api.get_today_attendance().await
}

pub async fn fetch_month(
    api: &ApiClient,
    year: i32,
    month: u32,
) -> Result<Vec<AttendanceRecord>, ApiError> {
    let Some((start, end)) = month_bounds(year, month) else {
        return Ok(Vec::new());
    };
    api.get_attendance_range(start, end).await
}

pub async fn fetch_leaves(api: &ApiClient) -> Result<Vec<Leave>, ApiError> {
    api.list_leaves().await
}

/// Sends the punch and, once the backend accepts it, marks every screen
/// that shows attendance as stale.
pub async fn punch(
    api: &ApiClient,
    tags: TagRegistry,
    kind: PunchKind,
    photo: Option<PunchPhoto>,
) -> Result<AttendanceRecord, ApiError> {
    let record = api.mark_attendance(kind, photo).await?;
    tags.invalidate(&[ResourceTag::Attendance, ResourceTag::Dashboard]);
    Ok(record)
}

use crate::api::{
    ApiClient, ApiError, CreateLeaveRequest, Leave, MessageResponse, ResourceTag, TagRegistry,
};

// Approved leave feeds the attendance calendar and the dashboard
// breakdown, so every leave write touches all three.
const WRITE_TAGS: &[ResourceTag] = &[
    ResourceTag::Leave,
    ResourceTag::Attendance,
    ResourceTag::Dashboard,
];

pub async fn fetch_all(api: &ApiClient) -> Result<Vec<Leave>, ApiError> {
    api.list_leaves().await
}

pub async fn submit(
    api: &ApiClient,
    tags: TagRegistry,
    payload: CreateLeaveRequest,
) -> Result<Leave, ApiError> {
    let leave = api.create_leave(&payload).await?;
    tags.invalidate(WRITE_TAGS);
    Ok(leave)
}

pub async fn set_status(
    api: &ApiClient,
    tags: TagRegistry,
    id: &str,
    status: &str,
) -> Result<Leave, ApiError> {
    let leave = api.update_leave_status(id, status).await?;
    tags.invalidate(WRITE_TAGS);
    Ok(leave)
}

pub async fn remove(
    api: &ApiClient,
    tags: TagRegistry,
    id: &str,
) -> Result<MessageResponse, ApiError> {
    let response = api.delete_leave(id).await?;
    tags.invalidate(WRITE_TAGS);
    Ok(response)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use httpmock::Method::PATCH;

    #[tokio::test]
    async fn approving_patches_the_status_route() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(PATCH)
                .path("/api/leaves/l1/status")
                .json_body(serde_json::json!({ "status": "approved" }));
            then.status(200).json_body(serde_json::json!({
                "_id": "l1",
                "leaveType": "vacation",
                "startDate": "2026-08-10T00:00:00.000Z",
                "endDate": "2026-08-12T00:00:00.000Z",
                "status": "approved"
            }));
        });

        let api = ApiClient::new_with_base_url(&server.url("/api"));
        let runtime = leptos::create_runtime();
        let tags = TagRegistry::new();

        let leave = set_status(&api, tags, "l1", "approved").await.unwrap();
        mock.assert_async().await;
        assert_eq!(leave.status, "approved");
        assert_eq!(tags.version(ResourceTag::Leave), 1);
        assert_eq!(tags.version(ResourceTag::Attendance), 1);
        assert_eq!(tags.version(ResourceTag::Dashboard), 1);
        assert_eq!(tags.version(ResourceTag::Employee), 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn rejected_submission_leaves_caches_alone() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/leaves");
            then.status(400)
                .json_body(serde_json::json!({ "message": "Overlapping leave request" }));
        });

        let api = ApiClient::new_with_base_url(&server.url("/api"));
        let runtime = leptos::create_runtime();
        let tags = TagRegistry::new();

        let err = submit(
            &api,
            tags,
            CreateLeaveRequest {
                leave_type: "vacation".into(),
                start_date: chrono::NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
                end_date: chrono::NaiveDate::from_ymd_opt(2026, 8, 12).unwrap(),
                reason: None,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.error, "Overlapping leave request");
        assert_eq!(tags.version(ResourceTag::Leave), 0);
        runtime.dispose();
    }
}

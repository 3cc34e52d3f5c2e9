use crate::api::{
    ApiClient, ApiError, Department, DepartmentPayload, MessageResponse, ResourceTag, TagRegistry,
};

// Employee rows embed department names, so department writes also
// invalidate the employee screens.
const WRITE_TAGS: &[ResourceTag] = &[
    ResourceTag::Department,
    ResourceTag::Employee,
    ResourceTag::Dashboard,
];

pub async fn fetch_all(api: &ApiClient) -> Result<Vec<Department>, ApiError> {
    api.list_departments().await
}

pub async fn create(
    api: &ApiClient,
    tags: TagRegistry,
    payload: DepartmentPayload,
) -> Result<Department, ApiError> {
    let department = api.create_department(&payload).await?;
    tags.invalidate(WRITE_TAGS);
    Ok(department)
}

pub async fn update(
    api: &ApiClient,
    tags: TagRegistry,
    id: &str,
    payload: DepartmentPayload,
) -> Result<Department, ApiError> {
    let department = api.update_department(id, &payload).await?;
    tags.invalidate(WRITE_TAGS);
    Ok(department)
}

pub async fn toggle_status(
    api: &ApiClient,
    tags: TagRegistry,
    id: &str,
) -> Result<Department, ApiError> {
    let department = api.toggle_department_status(id).await?;
    tags.invalidate(WRITE_TAGS);
    Ok(department)
}

pub async fn remove(
    api: &ApiClient,
    tags: TagRegistry,
    id: &str,
) -> Result<MessageResponse, ApiError> {
    let response = api.delete_department(id).await?;
    tags.invalidate(WRITE_TAGS);
    Ok(response)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use httpmock::Method::PATCH;

    #[tokio::test]
    async fn toggle_hits_the_status_route_and_invalidates() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PATCH).path("/api/departments/d1/toggle-status");
            then.status(200).json_body(serde_json::json!({
                "_id": "d1",
                "name": "Engineering",
                "employeeCount": 4,
                "isActive": false
            }));
        });

        let api = ApiClient::new_with_base_url(&server.url("/api"));
        let runtime = leptos::create_runtime();
        let tags = TagRegistry::new();

        let department = toggle_status(&api, tags, "d1").await.unwrap();
        assert!(!department.is_active);
        assert_eq!(tags.version(ResourceTag::Department), 1);
        assert_eq!(tags.version(ResourceTag::Employee), 1);
        assert_eq!(tags.version(ResourceTag::Leave), 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn delete_conflict_keeps_versions_untouched() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(DELETE).path("/api/departments/d1");
            then.status(400).json_body(
                serde_json::json!({ "message": "Cannot delete a department with employees" }),
            );
        });

        let api = ApiClient::new_with_base_url(&server.url("/api"));
        let runtime = leptos::create_runtime();
        let tags = TagRegistry::new();

        let err = remove(&api, tags, "d1").await.unwrap_err();
        assert_eq!(err.error, "Cannot delete a department with employees");
        assert_eq!(tags.version(ResourceTag::Department), 0);
        runtime.dispose();
    }
}

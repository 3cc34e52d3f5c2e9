use crate::api::{
    ApiClient, ApiError, Department, Employee, EmployeeListResponse, EmployeePayload,
    EmployeeStats, MessageResponse, ResourceTag, TagRegistry,
};

pub const PAGE_SIZE: i64 = 10;

pub async fn fetch_page(
    api: &ApiClient,
    page: i64,
    search: Option<&str>,
    department: Option<&str>,
) -> Result<EmployeeListResponse, ApiError> {
    api.list_employees(page, PAGE_SIZE, search, department)
        .await
}

pub async fn fetch_stats(api: &ApiClient) -> Result<EmployeeStats, ApiError> {
    api.get_employee_stats().await
}

pub async fn fetch_departments(api: &ApiClient) -> Result<Vec<Department>, ApiError> {
    api.list_departments().await
}

pub async fn create(
    api: &ApiClient,
    tags: TagRegistry,
    payload: EmployeePayload,
) -> Result<Employee, ApiError> {
    let employee = api.create_employee(&payload).await?;
    tags.invalidate(&[
        ResourceTag::Employee,
        ResourceTag::Department,
        ResourceTag::Dashboard,
    ]);
    Ok(employee)
}

pub async fn update(
    api: &ApiClient,
    tags: TagRegistry,
    id: &str,
    payload: EmployeePayload,
) -> Result<Employee, ApiError> {
    let employee = api.update_employee(id, &payload).await?;
    tags.invalidate(&[
        ResourceTag::Employee,
        ResourceTag::Department,
        ResourceTag::Dashboard,
    ]);
    Ok(employee)
}

pub async fn remove(
    api: &ApiClient,
    tags: TagRegistry,
    id: &str,
) -> Result<MessageResponse, ApiError> {
    let response = api.delete_employee(id).await?;
    tags.invalidate(&[
        ResourceTag::Employee,
        ResourceTag::Department,
        ResourceTag::Dashboard,
    ]);
    Ok(response)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn deleting_invalidates_every_dependent_screen() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(DELETE).path("/api/employees/e1");
            then.status(200)
                .json_body(serde_json::json!({ "message": "Employee removed" }));
        });

        let api = ApiClient::new_with_base_url(&server.url("/api"));
        let runtime = leptos::create_runtime();
        let tags = TagRegistry::new();

        let response = remove(&api, tags, "e1").await.unwrap();
        assert_eq!(response.message, "Employee removed");
        assert_eq!(tags.version(ResourceTag::Employee), 1);
        assert_eq!(tags.version(ResourceTag::Department), 1);
        assert_eq!(tags.version(ResourceTag::Dashboard), 1);
        assert_eq!(tags.version(ResourceTag::Payroll), 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_create_does_not_invalidate() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/employees");
            then.status(409)
                .json_body(serde_json::json!({ "message": "Email already in use" }));
        });

        let api = ApiClient::new_with_base_url(&server.url("/api"));
        let runtime = leptos::create_runtime();
        let tags = TagRegistry::new();

        let err = create(
            &api,
            tags,
            EmployeePayload {
                name: "Jane".into(),
                email: "jane@company.com".into(),
                phone: None,
                department: None,
                position: None,
                salary: None,
                status: None,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, "CONFLICT");
        assert_eq!(tags.version(ResourceTag::Employee), 0);
        runtime.dispose();
    }
}

use crate::api::{
    AccountBalance, ApiClient, ApiError, BulkPayoutResponse, Department, Employee, MessageResponse,
    PayoutStatus, Payroll, PayrollListResponse, PayrollSummary, ResourceTag, TagRegistry,
    UpdatePayrollRequest,
};

pub const PAGE_SIZE: i64 = 10;

/// Cap for the employee picker in the generate dialog.
const PICKER_LIMIT: i64 = 100;

const WRITE_TAGS: &[ResourceTag] = &[ResourceTag::Payroll, ResourceTag::Dashboard];

#[allow(clippy::too_many_arguments)]
pub async fn fetch_page(
    api: &ApiClient,
    page: i64,
    month: Option<u32>,
    year: Option<i32>,
    department: Option<&str>,
    status: Option<&str>,
    search: Option<&str>,
) -> Result<PayrollListResponse, ApiError> {
    api.list_payroll(page, PAGE_SIZE, month, year, department, status, search)
        .await
}

pub async fn fetch_summary(api: &ApiClient) -> Result<PayrollSummary, ApiError> {
    api.get_payroll_summary().await
}

pub async fn fetch_balance(api: &ApiClient) -> Result<AccountBalance, ApiError> {
    api.get_account_balance().await
}

pub async fn fetch_history(api: &ApiClient, employee_id: &str) -> Result<Vec<Payroll>, ApiError> {
    api.get_employee_payroll_history(employee_id).await
}

pub async fn fetch_payout_status(
    api: &ApiClient,
    payout_id: &str,
) -> Result<PayoutStatus, ApiError> {
    api.get_payout_status(payout_id).await
}

pub async fn fetch_picker_employees(api: &ApiClient) -> Result<Vec<Employee>, ApiError> {
    let response = api.list_employees(1, PICKER_LIMIT, None, None).await?;
    Ok(response.data)
}

pub async fn fetch_departments(api: &ApiClient) -> Result<Vec<Department>, ApiError> {
    api.list_departments().await
}

pub async fn generate(
    api: &ApiClient,
    tags: TagRegistry,
    employee_id: &str,
    month: u32,
    year: i32,
) -> Result<Payroll, ApiError> {
    let payroll = api.generate_payroll(employee_id, month, year).await?;
    tags.invalidate(WRITE_TAGS);
    Ok(payroll)
}

pub async fn adjust(
    api: &ApiClient,
    tags: TagRegistry,
    id: &str,
    payload: UpdatePayrollRequest,
) -> Result<Payroll, ApiError> {
    let payroll = api.update_payroll(id, &payload).await?;
    tags.invalidate(WRITE_TAGS);
    Ok(payroll)
}

pub async fn process(api: &ApiClient, tags: TagRegistry, id: &str) -> Result<Payroll, ApiError> {
    let payroll = api.process_payroll(id).await?;
    tags.invalidate(WRITE_TAGS);
    Ok(payroll)
}

pub async fn remove(
    api: &ApiClient,
    tags: TagRegistry,
    id: &str,
) -> Result<MessageResponse, ApiError> {
    let response = api.delete_payroll(id).await?;
    tags.invalidate(WRITE_TAGS);
    Ok(response)
}

pub async fn bulk_payout(
    api: &ApiClient,
    tags: TagRegistry,
    month: u32,
    year: i32,
) -> Result<BulkPayoutResponse, ApiError> {
    let response = api.bulk_payout(month, year).await?;
    tags.invalidate(WRITE_TAGS);
    Ok(response)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use httpmock::Method::PATCH;

    #[tokio::test]
    async fn generate_posts_the_period_and_invalidates() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/payroll/generate/e1")
                .json_body(serde_json::json!({ "month": 8, "year": 2026 }));
            then.status(201).json_body(serde_json::json!({
                "_id": "p1",
                "month": 8,
                "year": 2026,
                "basicSalary": 65000.0,
                "allowances": 0.0,
                "deductions": 0.0,
                "netSalary": 65000.0,
                "status": "pending"
            }));
        });

        let api = ApiClient::new_with_base_url(&server.url("/api"));
        let runtime = leptos::create_runtime();
        let tags = TagRegistry::new();

        let payroll = generate(&api, tags, "e1", 8, 2026).await.unwrap();
        mock.assert_async().await;
        assert_eq!(payroll.net_salary, 65000.0);
        assert_eq!(tags.version(ResourceTag::Payroll), 1);
        assert_eq!(tags.version(ResourceTag::Dashboard), 1);
        assert_eq!(tags.version(ResourceTag::Employee), 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn page_query_carries_every_active_filter() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/payroll")
                .query_param("page", "2")
                .query_param("limit", "10")
                .query_param("month", "8")
                .query_param("year", "2026")
                .query_param("status", "pending")
                .query_param("search", "jane");
            then.status(200).json_body(serde_json::json!({
                "data": [],
                "pagination": { "current": 2, "pages": 3, "total": 24, "limit": 10 }
            }));
        });

        let api = ApiClient::new_with_base_url(&server.url("/api"));
        let page = fetch_page(
            &api,
            2,
            Some(8),
            Some(2026),
            None,
            Some("pending"),
            Some("jane"),
        )
        .await
        .unwrap();
        mock.assert_async().await;
        assert_eq!(page.pagination.pages, 3);
    }

    #[tokio::test]
    async fn bulk_payout_reports_both_counts() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/payroll/bulk-payout");
            then.status(200).json_body(serde_json::json!({
                "message": "Bulk payout finished",
                "processed": 7,
                "failed": 1
            }));
        });

        let api = ApiClient::new_with_base_url(&server.url("/api"));
        let runtime = leptos::create_runtime();
        let tags = TagRegistry::new();

        let report = bulk_payout(&api, tags, 8, 2026).await.unwrap();
        assert_eq!(report.processed, 7);
        assert_eq!(report.failed, 1);
        assert_eq!(tags.version(ResourceTag::Payroll), 1);
        runtime.dispose();
    }

    #[tokio::test]
    async fn insufficient_balance_does_not_invalidate() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PATCH).path("/api/payroll/p1/process");
            then.status(400)
                .json_body(serde_json::json!({ "message": "Insufficient account balance" }));
        });

        let api = ApiClient::new_with_base_url(&server.url("/api"));
        let runtime = leptos::create_runtime();
        let tags = TagRegistry::new();

        let err = process(&api, tags, "p1").await.unwrap_err();
        assert_eq!(err.error, "Insufficient account balance");
        assert_eq!(tags.version(ResourceTag::Payroll), 0);
        runtime.dispose();
    }
}

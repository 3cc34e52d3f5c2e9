use super::client::{encode_query_term, ApiClient};
use super::types::{ApiError, Employee, EmployeeListResponse, EmployeePayload, EmployeeStats, MessageResponse};

impl ApiClient {
    pub async fn list_employees(
        &self,
        page: i64,
        limit: i64,
        search: Option<&str>,
        department: Option<&str>,
    ) -> Result<EmployeeListResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut url = format!("{}/employees", base_url);
        let mut query_params = vec![format!("page={}", page), format!("limit={}", limit)];

        if let Some(search) = search.filter(|s| !s.is_empty()) {
            query_params.push(format!("search={}", encode_query_term(search)));
        }
        if let Some(department) = department.filter(|d| !d.is_empty()) {
            query_params.push(format!("department={}", encode_query_term(department)));
        }

        url.push('?');
        url.push_str(&query_params.join("&"));

        let response = self
            .http_client()
            .get(&url)
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn get_employee(&self, id: &str) -> Result<Employee, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/employees/{}", base_url, id))
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn create_employee(&self, payload: &EmployeePayload) -> Result<Employee, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/employees", base_url))
            .headers(self.get_auth_headers())
            .json(payload)
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn update_employee(
        &self,
        id: &str,
        payload: &EmployeePayload,
    ) -> Result<Employee, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .put(format!("{}/employees/{}", base_url, id))
            .headers(self.get_auth_headers())
            .json(payload)
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn delete_employee(&self, id: &str) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .delete(format!("{}/employees/{}", base_url, id))
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn get_employee_stats(&self) -> Result<EmployeeStats, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/employees/stats", base_url))
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }
}

use super::client::{encode_query_term, ApiClient};
use super::types::{
    AccountBalance, ApiError, BulkPayoutResponse, GeneratePayrollRequest, MessageResponse, Payroll,
    PayrollListResponse, PayrollSummary, PayoutStatus, UpdatePayrollRequest,
};

impl ApiClient {
    #[allow(clippy::too_many_arguments)]
    pub async fn list_payroll(
        &self,
        page: i64,
        limit: i64,
        month: Option<u32>,
        year: Option<i32>,
        department: Option<&str>,
        status: Option<&str>,
        search: Option<&str>,
    ) -> Result<PayrollListResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut query = format!("page={}&limit={}", page, limit);
        if let Some(month) = month {
            query.push_str(&format!("&month={}", month));
        }
        if let Some(year) = year {
            query.push_str(&format!("&year={}", year));
        }
        if let Some(department) = department.filter(|value| !value.is_empty()) {
            query.push_str(&format!("&department={}", encode_query_term(department)));
        }
        if let Some(status) = status.filter(|value| !value.is_empty()) {
            query.push_str(&format!("&status={}", encode_query_term(status)));
        }
        if let Some(search) = search.filter(|value| !value.is_empty()) {
            query.push_str(&format!("&search={}", encode_query_term(search)));
        }
        let response = self
            .http_client()
            .get(format!("{}/payroll?{}", base_url, query))
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn generate_payroll(
        &self,
        employee_id: &str,
        month: u32,
        year: i32,
    ) -> Result<Payroll, ApiError> {
        let base_url = self.resolved_base_url().await;
        let payload = GeneratePayrollRequest { month, year };
        let response = self
            .http_client()
            .post(format!("{}/payroll/generate/{}", base_url, employee_id))
            .headers(self.get_auth_headers())
            .json(&payload)
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn update_payroll(
        &self,
        id: &str,
        payload: &UpdatePayrollRequest,
    ) -> Result<Payroll, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .put(format!("{}/payroll/{}", base_url, id))
            .headers(self.get_auth_headers())
            .json(payload)
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    /// Marks the run as paid and records the payment date.
    pub async fn process_payroll(&self, id: &str) -> Result<Payroll, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .patch(format!("{}/payroll/{}/process", base_url, id))
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn delete_payroll(&self, id: &str) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .delete(format!("{}/payroll/{}", base_url, id))
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn get_employee_payroll_history(
        &self,
        employee_id: &str,
    ) -> Result<Vec<Payroll>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!(
                "{}/payroll/employee/{}/history",
                base_url, employee_id
            ))
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn get_payroll_summary(&self) -> Result<PayrollSummary, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/payroll/reports/summary", base_url))
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    /// Sends every pending run for the month to the payout provider.
    pub async fn bulk_payout(&self, month: u32, year: i32) -> Result<BulkPayoutResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let payload = GeneratePayrollRequest { month, year };
        let response = self
            .http_client()
            .post(format!("{}/payroll/bulk-payout", base_url))
            .headers(self.get_auth_headers())
            .json(&payload)
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn get_payout_status(&self, payout_id: &str) -> Result<PayoutStatus, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/payroll/payout-status/{}", base_url, payout_id))
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }

    pub async fn get_account_balance(&self) -> Result<AccountBalance, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/payroll/account/balance", base_url))
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::parse_response(response).await
    }
}

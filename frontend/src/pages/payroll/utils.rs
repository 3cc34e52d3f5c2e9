use leptos::*;

use crate::api::{ApiError, Payroll, UpdatePayrollRequest};
use crate::utils::time::month_name;

pub const STATUS_OPTIONS: &[(&str, &str)] = &[("pending", "Pending"), ("processed", "Processed")];

/// Years offered in the period pickers, newest first.
pub const YEAR_WINDOW: i32 = 5;

pub fn status_options() -> Vec<(String, String)> {
    STATUS_OPTIONS
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}

pub fn month_options() -> Vec<(String, String)> {
    (1..=12)
        .map(|month| (month.to_string(), month_name(month).to_string()))
        .collect()
}

pub fn year_options(current: i32) -> Vec<(String, String)> {
    (0..YEAR_WINDOW)
        .map(|offset| {
            let year = current - offset;
            (year.to_string(), year.to_string())
        })
        .collect()
}

pub fn period_label(month: u32, year: i32) -> String {
    format!("{} {}", month_name(month), year)
}

pub fn status_badge_class(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "processed" | "paid" => {
            "inline-block px-2 py-0.5 rounded-full text-xs font-medium bg-status-success-bg text-status-success-text"
        }
        "failed" => {
            "inline-block px-2 py-0.5 rounded-full text-xs font-medium bg-status-error-bg text-status-error-text"
        }
        _ => {
            "inline-block px-2 py-0.5 rounded-full text-xs font-medium bg-status-warning-bg text-status-warning-text"
        }
    }
}

fn parse_amount(raw: &str, field: &str) -> Result<f64, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ApiError::validation(format!(
            "{field} must be a non-negative number."
        ))),
    }
}

/// Month/year pair shared by the generate and bulk-payout dialogs.
#[derive(Clone, Copy)]
pub struct PeriodFormState {
    month: RwSignal<String>,
    year: RwSignal<String>,
}

impl PeriodFormState {
    pub fn new(month: u32, year: i32) -> Self {
        Self {
            month: create_rw_signal(month.to_string()),
            year: create_rw_signal(year.to_string()),
        }
    }

    pub fn month_signal(&self) -> RwSignal<String> {
        self.month
    }

    pub fn year_signal(&self) -> RwSignal<String> {
        self.year
    }

    pub fn reset(&self, month: u32, year: i32) {
        self.month.set(month.to_string());
        self.year.set(year.to_string());
    }

    pub fn to_period(self) -> Result<(u32, i32), ApiError> {
        let month = self
            .month
            .get()
            .parse::<u32>()
            .ok()
            .filter(|month| (1..=12).contains(month))
            .ok_or_else(|| ApiError::validation("Choose a month."))?;
        let year = self
            .year
            .get()
            .parse::<i32>()
            .map_err(|_| ApiError::validation("Choose a year."))?;
        Ok((month, year))
    }
}

#[derive(Clone, Copy)]
pub struct GenerateFormState {
    employee_id: RwSignal<String>,
    pub period: PeriodFormState,
}

impl GenerateFormState {
    pub fn new(month: u32, year: i32) -> Self {
        Self {
            employee_id: create_rw_signal(String::new()),
            period: PeriodFormState::new(month, year),
        }
    }

    pub fn employee_signal(&self) -> RwSignal<String> {
        self.employee_id
    }

    pub fn reset(&self, month: u32, year: i32) {
        self.employee_id.set(String::new());
        self.period.reset(month, year);
    }

    pub fn to_request(self) -> Result<(String, u32, i32), ApiError> {
        let employee_id = self.employee_id.get();
        let employee_id = employee_id.trim();
        if employee_id.is_empty() {
            return Err(ApiError::validation("Choose an employee."));
        }
        let (month, year) = self.period.to_period()?;
        Ok((employee_id.to_string(), month, year))
    }
}

#[derive(Clone, Copy)]
pub struct AdjustFormState {
    allowances: RwSignal<String>,
    deductions: RwSignal<String>,
}

impl Default for AdjustFormState {
    fn default() -> Self {
        Self {
            allowances: create_rw_signal(String::new()),
            deductions: create_rw_signal(String::new()),
        }
    }
}

impl AdjustFormState {
    pub fn allowances_signal(&self) -> RwSignal<String> {
        self.allowances
    }

    pub fn deductions_signal(&self) -> RwSignal<String> {
        self.deductions
    }

    pub fn reset(&self) {
        self.allowances.set(String::new());
        self.deductions.set(String::new());
    }

    pub fn load_from_payroll(&self, payroll: &Payroll) {
        self.allowances.set(format_amount_input(payroll.allowances));
        self.deductions.set(format_amount_input(payroll.deductions));
    }

    pub fn to_payload(self) -> Result<UpdatePayrollRequest, ApiError> {
        Ok(UpdatePayrollRequest {
            allowances: parse_amount(&self.allowances.get(), "Allowances")?,
            deductions: parse_amount(&self.deductions.get(), "Deductions")?,
        })
    }
}

fn format_amount_input(amount: f64) -> String {
    if amount == 0.0 {
        String::new()
    } else if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        amount.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn period_label_spells_the_month() {
        assert_eq!(period_label(8, 2026), "August 2026");
        assert_eq!(period_label(1, 2025), "January 2025");
    }

    #[test]
    fn year_options_run_newest_first() {
        let years = year_options(2026);
        assert_eq!(years.len(), YEAR_WINDOW as usize);
        assert_eq!(years.first().unwrap().0, "2026");
        assert_eq!(years.last().unwrap().0, "2022");
    }

    #[test]
    fn badge_treats_paid_like_processed() {
        assert_eq!(status_badge_class("paid"), status_badge_class("processed"));
        assert!(status_badge_class("pending").contains("status-warning"));
        assert!(status_badge_class("failed").contains("status-error"));
    }

    #[test]
    fn generate_request_needs_an_employee() {
        with_runtime(|| {
            let form = GenerateFormState::new(8, 2026);
            assert!(form.to_request().is_err());

            form.employee_signal().set("e1".to_string());
            let (employee_id, month, year) = form.to_request().unwrap();
            assert_eq!(employee_id, "e1");
            assert_eq!((month, year), (8, 2026));
        });
    }

    #[test]
    fn period_rejects_out_of_range_months() {
        with_runtime(|| {
            let period = PeriodFormState::new(8, 2026);
            period.month_signal().set("13".to_string());
            assert!(period.to_period().is_err());
            period.month_signal().set("0".to_string());
            assert!(period.to_period().is_err());
            period.month_signal().set("12".to_string());
            assert_eq!(period.to_period().unwrap(), (12, 2026));
        });
    }

    #[test]
    fn adjustments_default_blank_fields_to_zero() {
        with_runtime(|| {
            let form = AdjustFormState::default();
            let payload = form.to_payload().unwrap();
            assert_eq!(payload.allowances, 0.0);
            assert_eq!(payload.deductions, 0.0);

            form.allowances_signal().set("1500".to_string());
            form.deductions_signal().set("-3".to_string());
            assert!(form.to_payload().is_err());
        });
    }

    #[test]
    fn adjust_form_round_trips_a_row() {
        with_runtime(|| {
            let form = AdjustFormState::default();
            form.load_from_payroll(&Payroll {
                id: "p1".into(),
                employee: None,
                month: 8,
                year: 2026,
                basic_salary: 65000.0,
                allowances: 1500.0,
                deductions: 0.0,
                net_salary: 66500.0,
                status: "pending".into(),
                payment_date: None,
                payout_id: None,
            });
            assert_eq!(form.allowances_signal().get(), "1500");
            assert_eq!(form.deductions_signal().get(), "");

            let payload = form.to_payload().unwrap();
            assert_eq!(payload.allowances, 1500.0);
            assert_eq!(payload.deductions, 0.0);
        });
    }
}

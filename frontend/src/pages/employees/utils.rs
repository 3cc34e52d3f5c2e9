use leptos::*;

use crate::api::{ApiError, Employee, EmployeePayload};
use crate::pages::login::utils::looks_like_email;

pub const STATUS_OPTIONS: &[(&str, &str)] = &[("active", "Active"), ("inactive", "Inactive")];

pub fn status_options() -> Vec<(String, String)> {
    STATUS_OPTIONS
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}

/// `?action=add` straight from a dashboard quick action opens the form.
pub fn wants_add_action(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair == "action=add")
}

pub fn parse_salary(raw: &str) -> Result<Option<f64>, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(Some(value)),
        _ => Err(ApiError::validation("Salary must be a non-negative number.")),
    }
}

#[derive(Clone, Copy)]
pub struct EmployeeFormState {
    name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    department: RwSignal<String>,
    position: RwSignal<String>,
    salary: RwSignal<String>,
    status: RwSignal<String>,
}

impl Default for EmployeeFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            phone: create_rw_signal(String::new()),
            department: create_rw_signal(String::new()),
            position: create_rw_signal(String::new()),
            salary: create_rw_signal(String::new()),
            status: create_rw_signal("active".to_string()),
        }
    }
}

impl EmployeeFormState {
    pub fn name_signal(&self) -> RwSignal<String> {
        self.name
    }

    pub fn email_signal(&self) -> RwSignal<String> {
        self.email
    }

    pub fn phone_signal(&self) -> RwSignal<String> {
        self.phone
    }

    pub fn department_signal(&self) -> RwSignal<String> {
        self.department
    }

    pub fn position_signal(&self) -> RwSignal<String> {
        self.position
    }

    pub fn salary_signal(&self) -> RwSignal<String> {
        self.salary
    }

    pub fn status_signal(&self) -> RwSignal<String> {
        self.status
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.phone.set(String::new());
        self.department.set(String::new());
        self.position.set(String::new());
        self.salary.set(String::new());
        self.status.set("active".to_string());
    }

    pub fn load_from_employee(&self, employee: &Employee) {
        self.name.set(employee.user.name.clone());
        self.email.set(employee.user.email.clone());
        self.phone.set(employee.user.phone.clone().unwrap_or_default());
        self.department.set(
            employee
                .department
                .as_ref()
                .map(|dept| dept.id.clone())
                .unwrap_or_default(),
        );
        self.position
            .set(employee.position.clone().unwrap_or_default());
        self.salary.set(
            employee
                .salary
                .map(|salary| format_salary_input(salary))
                .unwrap_or_default(),
        );
        self.status.set(if employee.status.is_empty() {
            "active".to_string()
        } else {
            employee.status.clone()
        });
    }

    pub fn to_payload(self) -> Result<EmployeePayload, ApiError> {
        let name = self.name.get();
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::validation("Employee name is required."));
        }
        let email = self.email.get();
        let email = email.trim().to_string();
        if !looks_like_email(&email) {
            return Err(ApiError::validation("Please enter a valid email address."));
        }
        let salary = parse_salary(&self.salary.get())?;
        let phone = self.phone.get();
        let phone = phone.trim();
        let department = self.department.get();
        let department = department.trim();
        let position = self.position.get();
        let position = position.trim();
        Ok(EmployeePayload {
            name: name.to_string(),
            email,
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            department: (!department.is_empty()).then(|| department.to_string()),
            position: (!position.is_empty()).then(|| position.to_string()),
            salary,
            status: Some(self.status.get()),
        })
    }
}

/// Whole numbers render without the decimal tail when editing.
fn format_salary_input(salary: f64) -> String {
    if salary.fract() == 0.0 {
        format!("{salary:.0}")
    } else {
        salary.to_string()
    }
}

use leptos::*;

use crate::api::{ApiError, Department, DepartmentPayload};

pub fn employee_count_label(count: i64) -> String {
    if count == 1 {
        "1 employee".to_string()
    } else {
        format!("{count} employees")
    }
}

pub fn toggle_label(is_active: bool) -> &'static str {
    if is_active {
        "Deactivate"
    } else {
        "Activate"
    }
}

#[derive(Clone, Copy)]
pub struct DepartmentFormState {
    name: RwSignal<String>,
    description: RwSignal<String>,
}

impl Default for DepartmentFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
        }
    }
}

impl DepartmentFormState {
    pub fn name_signal(&self) -> RwSignal<String> {
        self.name
    }

    pub fn description_signal(&self) -> RwSignal<String> {
        self.description
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.description.set(String::new());
    }

    pub fn load_from_department(&self, department: &Department) {
        self.name.set(department.name.clone());
        self.description
            .set(department.description.clone().unwrap_or_default());
    }

    pub fn to_payload(self) -> Result<DepartmentPayload, ApiError> {
        let name = self.name.get();
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::validation("Department name is required."));
        }
        let description = self.description.get();
        let description = description.trim();
        Ok(DepartmentPayload {
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn count_label_handles_the_singular() {
        assert_eq!(employee_count_label(0), "0 employees");
        assert_eq!(employee_count_label(1), "1 employee");
        assert_eq!(employee_count_label(12), "12 employees");
    }

    #[test]
    fn blank_name_is_rejected() {
        with_runtime(|| {
            let form = DepartmentFormState::default();
            form.name_signal().set("   ".to_string());
            assert!(form.to_payload().is_err());
        });
    }

    #[test]
    fn description_is_optional_and_trimmed() {
        with_runtime(|| {
            let form = DepartmentFormState::default();
            form.name_signal().set(" Engineering ".to_string());
            form.description_signal().set("  ".to_string());

            let payload = form.to_payload().unwrap();
            assert_eq!(payload.name, "Engineering");
            assert_eq!(payload.description, None);

            form.description_signal().set(" Builds things ".to_string());
            let payload = form.to_payload().unwrap();
            assert_eq!(payload.description.as_deref(), Some("Builds things"));
        });
    }

    #[test]
    fn form_loads_an_existing_department() {
        with_runtime(|| {
            let form = DepartmentFormState::default();
            form.load_from_department(&Department {
                id: "d1".into(),
                name: "Engineering".into(),
                description: Some("Builds things".into()),
                employee_count: 4,
                is_active: true,
            });
            assert_eq!(form.name_signal().get(), "Engineering");
            assert_eq!(form.description_signal().get(), "Builds things");

            form.reset();
            assert_eq!(form.name_signal().get(), "");
        });
    }
}

use leptos::*;

use crate::api::{
    use_tags, ApiClient, ApiError, Department, Employee, EmployeeListResponse, EmployeePayload,
    EmployeeStats, MessageResponse, ResourceTag,
};
use crate::components::feedback::MessageState;
use crate::pages::employees::repository;
use crate::pages::employees::utils::{wants_add_action, EmployeeFormState};
use crate::utils::navigation;

#[derive(Clone)]
pub struct SavePayload {
    pub id: Option<String>,
    pub payload: EmployeePayload,
}

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub page: RwSignal<i64>,
    pub search: RwSignal<String>,
    pub department_filter: RwSignal<String>,
    pub form: EmployeeFormState,
    pub form_open: RwSignal<bool>,
    pub editing: RwSignal<Option<Employee>>,
    pub pending_delete: RwSignal<Option<Employee>>,
    pub message: RwSignal<MessageState>,
    pub list_resource: Resource<(u64, i64, String, String), Result<EmployeeListResponse, ApiError>>,
    pub stats_resource: Resource<u64, Result<EmployeeStats, ApiError>>,
    pub departments_resource: Resource<u64, Result<Vec<Department>, ApiError>>,
    pub save_action: Action<SavePayload, Result<Employee, ApiError>>,
    pub delete_action: Action<String, Result<MessageResponse, ApiError>>,
}

fn apply_save_result(
    result: Option<Result<Employee, ApiError>>,
    was_edit: bool,
    message: RwSignal<MessageState>,
    form_open: RwSignal<bool>,
    editing: RwSignal<Option<Employee>>,
    form: EmployeeFormState,
) {
    if let Some(result) = result {
        match result {
            Ok(employee) => {
                let text = if was_edit {
                    format!("{} updated.", employee.user.name)
                } else {
                    format!("{} added.", employee.user.name)
                };
                message.update(|msg| msg.set_success(text));
                form_open.set(false);
                editing.set(None);
                form.reset();
            }
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    }
}

fn apply_delete_result(
    result: Option<Result<MessageResponse, ApiError>>,
    message: RwSignal<MessageState>,
    pending_delete: RwSignal<Option<Employee>>,
) {
    if let Some(result) = result {
        match result {
            Ok(response) => {
                message.update(|msg| msg.set_success(response.message));
                pending_delete.set(None);
            }
            Err(err) => {
                message.update(|msg| msg.set_error(err));
                pending_delete.set(None);
            }
        }
    }
}

impl EmployeesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let tags = use_tags();

        let page = create_rw_signal(1_i64);
        let search = create_rw_signal(String::new());
        let department_filter = create_rw_signal(String::new());
        let form = EmployeeFormState::default();
        let form_open = create_rw_signal(wants_add_action(&navigation::current_search()));
        let editing = create_rw_signal(None::<Employee>);
        let pending_delete = create_rw_signal(None::<Employee>);
        let message = create_rw_signal(MessageState::default());

        let list_resource = {
            let api = api.clone();
            create_resource(
                move || {
                    (
                        tags.version(ResourceTag::Employee),
                        page.get(),
                        search.get(),
                        department_filter.get(),
                    )
                },
                move |(_, page, search, department)| {
                    let api = api.clone();
                    async move {
                        let search = search.trim().to_string();
                        repository::fetch_page(
                            &api,
                            page,
                            (!search.is_empty()).then_some(search.as_str()),
                            (!department.is_empty()).then_some(department.as_str()),
                        )
                        .await
                    }
                },
            )
        };

        let stats_resource = {
            let api = api.clone();
            create_resource(
                move || tags.version(ResourceTag::Employee),
                move |_| {
                    let api = api.clone();
                    async move { repository::fetch_stats(&api).await }
                },
            )
        };

        let departments_resource = {
            let api = api.clone();
            create_resource(
                move || tags.version(ResourceTag::Department),
                move |_| {
                    let api = api.clone();
                    async move { repository::fetch_departments(&api).await }
                },
            )
        };

        let save_action = {
            let api = api.clone();
            create_action(move |save: &SavePayload| {
                let api = api.clone();
                let save = save.clone();
                async move {
                    match save.id {
                        Some(id) => repository::update(&api, tags, &id, save.payload).await,
                        None => repository::create(&api, tags, save.payload).await,
                    }
                }
            })
        };

        let delete_action = create_action(move |id: &String| {
            let api = api.clone();
            let id = id.clone();
            async move { repository::remove(&api, tags, &id).await }
        });

        create_effect(move |_| {
            let was_edit = editing.get_untracked().is_some();
            apply_save_result(
                save_action.value().get(),
                was_edit,
                message,
                form_open,
                editing,
                form,
            );
        });

        create_effect(move |_| {
            apply_delete_result(delete_action.value().get(), message, pending_delete);
        });

        Self {
            page,
            search,
            department_filter,
            form,
            form_open,
            editing,
            pending_delete,
            message,
            list_resource,
            stats_resource,
            departments_resource,
            save_action,
            delete_action,
        }
    }

    pub fn on_open_create(&self) -> impl Fn() + Copy {
        let form = self.form;
        let form_open = self.form_open;
        let editing = self.editing;
        let message = self.message;
        move || {
            form.reset();
            editing.set(None);
            message.update(|msg| msg.clear());
            form_open.set(true);
        }
    }

    pub fn on_open_edit(&self) -> Callback<Employee> {
        let form = self.form;
        let form_open = self.form_open;
        let editing = self.editing;
        let message = self.message;
        Callback::new(move |employee: Employee| {
            form.load_from_employee(&employee);
            editing.set(Some(employee));
            message.update(|msg| msg.clear());
            form_open.set(true);
        })
    }

    pub fn on_close_form(&self) -> impl Fn() + Copy {
        let form = self.form;
        let form_open = self.form_open;
        let editing = self.editing;
        move || {
            form_open.set(false);
            editing.set(None);
            form.reset();
        }
    }

    pub fn on_submit(&self) -> impl Fn() + Copy {
        let form = self.form;
        let editing = self.editing;
        let message = self.message;
        let save_action = self.save_action;
        move || match form.to_payload() {
            Ok(payload) => {
                message.update(|msg| msg.clear());
                save_action.dispatch(SavePayload {
                    id: editing.get_untracked().map(|employee| employee.id),
                    payload,
                });
            }
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    }

    pub fn on_request_delete(&self) -> Callback<Employee> {
        let pending_delete = self.pending_delete;
        Callback::new(move |employee: Employee| pending_delete.set(Some(employee)))
    }

    pub fn on_cancel_delete(&self) -> impl Fn() + Copy {
        let pending_delete = self.pending_delete;
        move || pending_delete.set(None)
    }

    pub fn on_confirm_delete(&self) -> impl Fn() + Copy {
        let pending_delete = self.pending_delete;
        let delete_action = self.delete_action;
        move || {
            if let Some(employee) = pending_delete.get_untracked() {
                delete_action.dispatch(employee.id);
            }
        }
    }

    pub fn on_page(&self) -> Callback<i64> {
        let page = self.page;
        Callback::new(move |next: i64| page.set(next.max(1)))
    }

    pub fn on_search(&self) -> Callback<String> {
        let search = self.search;
        let page = self.page;
        Callback::new(move |term: String| {
            search.set(term);
            page.set(1);
        })
    }

    pub fn on_department_filter(&self) -> Callback<String> {
        let department_filter = self.department_filter;
        let page = self.page;
        Callback::new(move |value: String| {
            department_filter.set(value);
            page.set(1);
        })
    }

    pub fn on_clear_filters(&self) -> impl Fn() + Copy {
        let search = self.search;
        let department_filter = self.department_filter;
        let page = self.page;
        move || {
            search.set(String::new());
            department_filter.set(String::new());
            page.set(1);
        }
    }

    pub fn has_filters(&self) -> Signal<bool> {
        let search = self.search;
        let department_filter = self.department_filter;
        Signal::derive(move || !search.get().is_empty() || !department_filter.get().is_empty())
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    match use_context::<EmployeesViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = EmployeesViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::EmployeeUser;
    use crate::test_support::ssr::{with_runtime, with_suppressed_resources};

    fn sample_employee(name: &str) -> Employee {
        Employee {
            id: "e1".into(),
            employee_code: "EMP001".into(),
            user: EmployeeUser {
                name: name.into(),
                email: "jane@company.com".into(),
                phone: None,
            },
            department: None,
            position: None,
            salary: None,
            joining_date: None,
            status: "active".into(),
        }
    }

    #[test]
    fn successful_save_closes_the_form_and_reports() {
        with_runtime(|| {
            let message = create_rw_signal(MessageState::default());
            let form_open = create_rw_signal(true);
            let editing = create_rw_signal(Some(sample_employee("Jane Doe")));
            let form = EmployeeFormState::default();

            apply_save_result(
                Some(Ok(sample_employee("Jane Doe"))),
                true,
                message,
                form_open,
                editing,
                form,
            );

            assert!(!form_open.get());
            assert!(editing.get().is_none());
            assert_eq!(
                message.get().success.as_deref(),
                Some("Jane Doe updated.")
            );
        });
    }

    #[test]
    fn failed_save_keeps_the_form_open() {
        with_runtime(|| {
            let message = create_rw_signal(MessageState::default());
            let form_open = create_rw_signal(true);
            let editing = create_rw_signal(None::<Employee>);
            let form = EmployeeFormState::default();

            apply_save_result(
                Some(Err(ApiError::validation("Email already in use"))),
                false,
                message,
                form_open,
                editing,
                form,
            );

            assert!(form_open.get());
            assert_eq!(
                message.get().error.unwrap().error,
                "Email already in use"
            );
        });
    }

    #[test]
    fn delete_result_always_clears_the_pending_row() {
        with_runtime(|| {
            let message = create_rw_signal(MessageState::default());
            let pending_delete = create_rw_signal(Some(sample_employee("Jane Doe")));

            apply_delete_result(
                Some(Ok(MessageResponse {
                    message: "Employee removed".into(),
                })),
                message,
                pending_delete,
            );
            assert!(pending_delete.get().is_none());
            assert_eq!(
                message.get().success.as_deref(),
                Some("Employee removed")
            );

            pending_delete.set(Some(sample_employee("Jane Doe")));
            apply_delete_result(
                Some(Err(ApiError::request_failed("offline"))),
                message,
                pending_delete,
            );
            assert!(pending_delete.get().is_none());
            assert!(message.get().error.is_some());
        });
    }

    #[test]
    fn filters_reset_the_page() {
        with_suppressed_resources(|| {
            let vm = EmployeesViewModel::new();
            vm.page.set(4);
            vm.on_search().call("jane".to_string());
            assert_eq!(vm.page.get(), 1);
            assert_eq!(vm.search.get(), "jane");

            vm.page.set(3);
            vm.on_department_filter().call("d1".to_string());
            assert_eq!(vm.page.get(), 1);

            assert!(vm.has_filters().get());
            vm.on_clear_filters()();
            assert!(!vm.has_filters().get());
            assert_eq!(vm.department_filter.get(), "");
        });
    }

    #[test]
    fn edit_selection_preloads_the_form() {
        with_suppressed_resources(|| {
            let vm = EmployeesViewModel::new();
            vm.on_open_edit().call(sample_employee("Jane Doe"));
            assert!(vm.form_open.get());
            assert_eq!(vm.form.name_signal().get(), "Jane Doe");
            assert!(vm.editing.get().is_some());

            vm.on_close_form()();
            assert!(!vm.form_open.get());
            assert_eq!(vm.form.name_signal().get(), "");
        });
    }
}

use leptos::*;

use crate::api::{
    use_tags, AccountBalance, ApiClient, ApiError, BulkPayoutResponse, Department, Employee,
    MessageResponse, PayoutStatus, Payroll, PayrollListResponse, PayrollSummary, ResourceTag,
    UpdatePayrollRequest,
};
use crate::components::feedback::MessageState;
use crate::pages::payroll::repository;
use crate::pages::payroll::utils::{AdjustFormState, GenerateFormState, PeriodFormState};
use crate::utils::time::{current_month, current_year};

#[derive(Clone)]
pub struct GenerateRequest {
    pub employee_id: String,
    pub month: u32,
    pub year: i32,
}

#[derive(Clone)]
pub struct AdjustRequest {
    pub id: String,
    pub payload: UpdatePayrollRequest,
}

#[derive(Clone, Copy)]
pub struct PayrollViewModel {
    pub page: RwSignal<i64>,
    pub month_filter: RwSignal<String>,
    pub year_filter: RwSignal<String>,
    pub department_filter: RwSignal<String>,
    pub status_filter: RwSignal<String>,
    pub search: RwSignal<String>,
    pub generate_form: GenerateFormState,
    pub generate_open: RwSignal<bool>,
    pub adjust_form: AdjustFormState,
    pub adjusting: RwSignal<Option<Payroll>>,
    pub bulk_period: PeriodFormState,
    pub bulk_open: RwSignal<bool>,
    pub history_employee: RwSignal<Option<Employee>>,
    pub payout_lookup: RwSignal<Option<String>>,
    pub pending_delete: RwSignal<Option<Payroll>>,
    pub message: RwSignal<MessageState>,
    pub list_resource: Resource<
        (u64, i64, String, String, String, String, String),
        Result<PayrollListResponse, ApiError>,
    >,
    pub summary_resource: Resource<u64, Result<PayrollSummary, ApiError>>,
    pub balance_resource: Resource<u64, Result<AccountBalance, ApiError>>,
    pub picker_resource: Resource<u64, Result<Vec<Employee>, ApiError>>,
    pub departments_resource: Resource<u64, Result<Vec<Department>, ApiError>>,
    pub history_resource: Resource<(u64, Option<String>), Result<Vec<Payroll>, ApiError>>,
    pub payout_resource: Resource<(u64, Option<String>), Result<Option<PayoutStatus>, ApiError>>,
    pub generate_action: Action<GenerateRequest, Result<Payroll, ApiError>>,
    pub adjust_action: Action<AdjustRequest, Result<Payroll, ApiError>>,
    pub process_action: Action<String, Result<Payroll, ApiError>>,
    pub delete_action: Action<String, Result<MessageResponse, ApiError>>,
    pub bulk_action: Action<(u32, i32), Result<BulkPayoutResponse, ApiError>>,
}

fn parse_month_filter(raw: &str) -> Option<u32> {
    raw.parse::<u32>().ok().filter(|m| (1..=12).contains(m))
}

fn parse_year_filter(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok()
}

fn apply_generate_result(
    result: Option<Result<Payroll, ApiError>>,
    message: RwSignal<MessageState>,
    generate_open: RwSignal<bool>,
    form: GenerateFormState,
) {
    if let Some(result) = result {
        match result {
            Ok(payroll) => {
                let name = payroll
                    .employee
                    .as_ref()
                    .map(|employee| employee.user.name.clone())
                    .unwrap_or_else(|| "employee".to_string());
                message.update(|msg| msg.set_success(format!("Payroll generated for {name}.")));
                generate_open.set(false);
                form.reset(current_month(), current_year());
            }
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    }
}

fn apply_adjust_result(
    result: Option<Result<Payroll, ApiError>>,
    message: RwSignal<MessageState>,
    adjusting: RwSignal<Option<Payroll>>,
    form: AdjustFormState,
) {
    if let Some(result) = result {
        match result {
            Ok(_) => {
                message.update(|msg| msg.set_success("Payroll updated."));
                adjusting.set(None);
                form.reset();
            }
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    }
}

fn apply_process_result(
    result: Option<Result<Payroll, ApiError>>,
    message: RwSignal<MessageState>,
) {
    if let Some(result) = result {
        match result {
            Ok(payroll) => {
                let text = match payroll.payout_id.as_deref() {
                    Some(payout_id) => format!("Payout sent to the gateway ({payout_id})."),
                    None => "Payroll marked as processed.".to_string(),
                };
                message.update(|msg| msg.set_success(text));
            }
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    }
}

fn apply_delete_result(
    result: Option<Result<MessageResponse, ApiError>>,
    message: RwSignal<MessageState>,
    pending_delete: RwSignal<Option<Payroll>>,
) {
    if let Some(result) = result {
        match result {
            Ok(response) => message.update(|msg| msg.set_success(response.message)),
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
        pending_delete.set(None);
    }
}

fn apply_bulk_result(
    result: Option<Result<BulkPayoutResponse, ApiError>>,
    message: RwSignal<MessageState>,
    bulk_open: RwSignal<bool>,
) {
    if let Some(result) = result {
        match result {
            Ok(report) => {
                message.update(|msg| {
                    msg.set_success(format!(
                        "{} ({} paid, {} failed)",
                        report.message, report.processed, report.failed
                    ))
                });
                bulk_open.set(false);
            }
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    }
}

impl PayrollViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let tags = use_tags();

        let page = create_rw_signal(1_i64);
        let month_filter = create_rw_signal(String::new());
        let year_filter = create_rw_signal(String::new());
        let department_filter = create_rw_signal(String::new());
        let status_filter = create_rw_signal(String::new());
        let search = create_rw_signal(String::new());
        let generate_form = GenerateFormState::new(current_month(), current_year());
        let generate_open = create_rw_signal(false);
        let adjust_form = AdjustFormState::default();
        let adjusting = create_rw_signal(None::<Payroll>);
        let bulk_period = PeriodFormState::new(current_month(), current_year());
        let bulk_open = create_rw_signal(false);
        let history_employee = create_rw_signal(None::<Employee>);
        let payout_lookup = create_rw_signal(None::<String>);
        let pending_delete = create_rw_signal(None::<Payroll>);
        let message = create_rw_signal(MessageState::default());

        let list_resource = {
            let api = api.clone();
            create_resource(
                move || {
                    (
                        tags.version(ResourceTag::Payroll),
                        page.get(),
                        month_filter.get(),
                        year_filter.get(),
                        department_filter.get(),
                        status_filter.get(),
                        search.get(),
                    )
                },
                move |(_, page, month, year, department, status, search)| {
                    let api = api.clone();
                    async move {
                        let search = search.trim().to_string();
                        repository::fetch_page(
                            &api,
                            page,
                            parse_month_filter(&month),
                            parse_year_filter(&year),
                            (!department.is_empty()).then_some(department.as_str()),
                            (!status.is_empty()).then_some(status.as_str()),
                            (!search.is_empty()).then_some(search.as_str()),
                        )
                        .await
                    }
                },
            )
        };

        let summary_resource = {
            let api = api.clone();
            create_resource(
                move || tags.version(ResourceTag::Payroll),
                move |_| {
                    let api = api.clone();
                    async move { repository::fetch_summary(&api).await }
                },
            )
        };

        let balance_resource = {
            let api = api.clone();
            create_resource(
                move || tags.version(ResourceTag::Payroll),
                move |_| {
                    let api = api.clone();
                    async move { repository::fetch_balance(&api).await }
                },
            )
        };

        let picker_resource = {
            let api = api.clone();
            create_resource(
                move || tags.version(ResourceTag::Employee),
                move |_| {
                    let api = api.clone();
                    async move { repository::fetch_picker_employees(&api).await }
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

        let history_resource = {
            let api = api.clone();
            create_resource(
                move || {
                    (
                        tags.version(ResourceTag::Payroll),
                        history_employee.get().map(|employee| employee.id),
                    )
                },
                move |(_, employee_id)| {
                    let api = api.clone();
                    async move {
                        match employee_id {
                            Some(employee_id) => {
                                repository::fetch_history(&api, &employee_id).await
                            }
                            None => Ok(Vec::new()),
                        }
                    }
                },
            )
        };

        let payout_resource = {
            let api = api.clone();
            create_resource(
                move || (tags.version(ResourceTag::Payroll), payout_lookup.get()),
                move |(_, payout_id)| {
                    let api = api.clone();
                    async move {
                        match payout_id {
                            Some(payout_id) => repository::fetch_payout_status(&api, &payout_id)
                                .await
                                .map(Some),
                            None => Ok(None),
                        }
                    }
                },
            )
        };

        let generate_action = {
            let api = api.clone();
            create_action(move |request: &GenerateRequest| {
                let api = api.clone();
                let request = request.clone();
                async move {
                    repository::generate(
                        &api,
                        tags,
                        &request.employee_id,
                        request.month,
                        request.year,
                    )
                    .await
                }
            })
        };

        let adjust_action = {
            let api = api.clone();
            create_action(move |request: &AdjustRequest| {
                let api = api.clone();
                let request = request.clone();
                async move { repository::adjust(&api, tags, &request.id, request.payload).await }
            })
        };

        let process_action = {
            let api = api.clone();
            create_action(move |id: &String| {
                let api = api.clone();
                let id = id.clone();
                async move { repository::process(&api, tags, &id).await }
            })
        };

        let delete_action = {
            let api = api.clone();
            create_action(move |id: &String| {
                let api = api.clone();
                let id = id.clone();
                async move { repository::remove(&api, tags, &id).await }
            })
        };

        let bulk_action = create_action(move |(month, year): &(u32, i32)| {
            let api = api.clone();
            let (month, year) = (*month, *year);
            async move { repository::bulk_payout(&api, tags, month, year).await }
        });

        create_effect(move |_| {
            apply_generate_result(
                generate_action.value().get(),
                message,
                generate_open,
                generate_form,
            );
        });

        create_effect(move |_| {
            apply_adjust_result(adjust_action.value().get(), message, adjusting, adjust_form);
        });

        create_effect(move |_| {
            apply_process_result(process_action.value().get(), message);
        });

        create_effect(move |_| {
            apply_delete_result(delete_action.value().get(), message, pending_delete);
        });

        create_effect(move |_| {
            apply_bulk_result(bulk_action.value().get(), message, bulk_open);
        });

        Self {
            page,
            month_filter,
            year_filter,
            department_filter,
            status_filter,
            search,
            generate_form,
            generate_open,
            adjust_form,
            adjusting,
            bulk_period,
            bulk_open,
            history_employee,
            payout_lookup,
            pending_delete,
            message,
            list_resource,
            summary_resource,
            balance_resource,
            picker_resource,
            departments_resource,
            history_resource,
            payout_resource,
            generate_action,
            adjust_action,
            process_action,
            delete_action,
            bulk_action,
        }
    }

    fn filter_setter(&self, signal: RwSignal<String>) -> Callback<String> {
        let page = self.page;
        Callback::new(move |value: String| {
            signal.set(value);
            page.set(1);
        })
    }

    pub fn on_month_filter(&self) -> Callback<String> {
        self.filter_setter(self.month_filter)
    }

    pub fn on_year_filter(&self) -> Callback<String> {
        self.filter_setter(self.year_filter)
    }

    pub fn on_department_filter(&self) -> Callback<String> {
        self.filter_setter(self.department_filter)
    }

    pub fn on_status_filter(&self) -> Callback<String> {
        self.filter_setter(self.status_filter)
    }

    pub fn on_search(&self) -> Callback<String> {
        self.filter_setter(self.search)
    }

    pub fn on_clear_filters(&self) -> impl Fn() + Copy {
        let month_filter = self.month_filter;
        let year_filter = self.year_filter;
        let department_filter = self.department_filter;
        let status_filter = self.status_filter;
        let search = self.search;
        let page = self.page;
        move || {
            month_filter.set(String::new());
            year_filter.set(String::new());
            department_filter.set(String::new());
            status_filter.set(String::new());
            search.set(String::new());
            page.set(1);
        }
    }

    pub fn has_filters(&self) -> Signal<bool> {
        let month_filter = self.month_filter;
        let year_filter = self.year_filter;
        let department_filter = self.department_filter;
        let status_filter = self.status_filter;
        let search = self.search;
        Signal::derive(move || {
            !month_filter.get().is_empty()
                || !year_filter.get().is_empty()
                || !department_filter.get().is_empty()
                || !status_filter.get().is_empty()
                || !search.get().is_empty()
        })
    }

    pub fn on_page(&self) -> Callback<i64> {
        let page = self.page;
        Callback::new(move |next: i64| page.set(next.max(1)))
    }

    pub fn on_open_generate(&self) -> impl Fn() + Copy {
        let form = self.generate_form;
        let generate_open = self.generate_open;
        let message = self.message;
        move || {
            form.reset(current_month(), current_year());
            message.update(|msg| msg.clear());
            generate_open.set(true);
        }
    }

    pub fn on_close_generate(&self) -> impl Fn() + Copy {
        let generate_open = self.generate_open;
        move || generate_open.set(false)
    }

    pub fn on_submit_generate(&self) -> impl Fn() + Copy {
        let form = self.generate_form;
        let message = self.message;
        let generate_action = self.generate_action;
        move || match form.to_request() {
            Ok((employee_id, month, year)) => {
                message.update(|msg| msg.clear());
                generate_action.dispatch(GenerateRequest {
                    employee_id,
                    month,
                    year,
                });
            }
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    }

    pub fn on_open_adjust(&self) -> Callback<Payroll> {
        let form = self.adjust_form;
        let adjusting = self.adjusting;
        let message = self.message;
        Callback::new(move |payroll: Payroll| {
            form.load_from_payroll(&payroll);
            adjusting.set(Some(payroll));
            message.update(|msg| msg.clear());
        })
    }

    pub fn on_close_adjust(&self) -> impl Fn() + Copy {
        let form = self.adjust_form;
        let adjusting = self.adjusting;
        move || {
            adjusting.set(None);
            form.reset();
        }
    }

    pub fn on_submit_adjust(&self) -> impl Fn() + Copy {
        let form = self.adjust_form;
        let adjusting = self.adjusting;
        let message = self.message;
        let adjust_action = self.adjust_action;
        move || {
            let Some(payroll) = adjusting.get_untracked() else {
                return;
            };
            match form.to_payload() {
                Ok(payload) => {
                    message.update(|msg| msg.clear());
                    adjust_action.dispatch(AdjustRequest {
                        id: payroll.id,
                        payload,
                    });
                }
                Err(err) => message.update(|msg| msg.set_error(err)),
            }
        }
    }

    pub fn on_process(&self) -> Callback<Payroll> {
        let process_action = self.process_action;
        let message = self.message;
        Callback::new(move |payroll: Payroll| {
            message.update(|msg| msg.clear());
            process_action.dispatch(payroll.id);
        })
    }

    pub fn on_request_delete(&self) -> Callback<Payroll> {
        let pending_delete = self.pending_delete;
        Callback::new(move |payroll: Payroll| pending_delete.set(Some(payroll)))
    }

    pub fn on_cancel_delete(&self) -> impl Fn() + Copy {
        let pending_delete = self.pending_delete;
        move || pending_delete.set(None)
    }

    pub fn on_confirm_delete(&self) -> impl Fn() + Copy {
        let pending_delete = self.pending_delete;
        let delete_action = self.delete_action;
        move || {
            if let Some(payroll) = pending_delete.get_untracked() {
                delete_action.dispatch(payroll.id);
            }
        }
    }

    pub fn on_open_bulk(&self) -> impl Fn() + Copy {
        let bulk_period = self.bulk_period;
        let bulk_open = self.bulk_open;
        let message = self.message;
        move || {
            bulk_period.reset(current_month(), current_year());
            message.update(|msg| msg.clear());
            bulk_open.set(true);
        }
    }

    pub fn on_close_bulk(&self) -> impl Fn() + Copy {
        let bulk_open = self.bulk_open;
        move || bulk_open.set(false)
    }

    pub fn on_submit_bulk(&self) -> impl Fn() + Copy {
        let bulk_period = self.bulk_period;
        let message = self.message;
        let bulk_action = self.bulk_action;
        move || match bulk_period.to_period() {
            Ok(period) => {
                message.update(|msg| msg.clear());
                bulk_action.dispatch(period);
            }
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    }

    pub fn on_view_history(&self) -> Callback<Employee> {
        let history_employee = self.history_employee;
        Callback::new(move |employee: Employee| history_employee.set(Some(employee)))
    }

    pub fn on_close_history(&self) -> impl Fn() + Copy {
        let history_employee = self.history_employee;
        move || history_employee.set(None)
    }

    pub fn on_inspect_payout(&self) -> Callback<String> {
        let payout_lookup = self.payout_lookup;
        Callback::new(move |payout_id: String| payout_lookup.set(Some(payout_id)))
    }

    pub fn on_close_payout(&self) -> impl Fn() + Copy {
        let payout_lookup = self.payout_lookup;
        move || payout_lookup.set(None)
    }
}

pub fn use_payroll_view_model() -> PayrollViewModel {
    match use_context::<PayrollViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = PayrollViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

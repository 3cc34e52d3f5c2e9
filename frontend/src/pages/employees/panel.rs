use leptos::ev::SubmitEvent;
use leptos::*;

use crate::api::{Department, Employee};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::feedback::FeedbackBanner;
use crate::components::forms::{SelectField, TextField};
use crate::components::layout::{ErrorMessage, Layout, LoadingSpinner};
use crate::components::pagination::Pagination;
use crate::pages::employees::utils::status_options;
use crate::pages::employees::view_model::{use_employees_view_model, EmployeesViewModel};
use crate::utils::format::format_money_or_dash;

#[component]
fn StatTile(icon: &'static str, #[prop(into)] label: String, value: i64) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg border border-border p-4 flex items-center gap-3">
            <i class=format!("fas {icon} text-action-primary-bg")></i>
            <div>
                <p class="text-xl font-bold text-fg">{value}</p>
                <p class="text-xs text-fg-muted">{label}</p>
            </div>
        </div>
    }
}

fn status_badge_class(status: &str) -> &'static str {
    if status == "active" {
        "inline-block px-2 py-0.5 rounded-full text-xs font-medium bg-status-success-bg text-status-success-text"
    } else {
        "inline-block px-2 py-0.5 rounded-full text-xs font-medium bg-surface-muted text-fg-muted"
    }
}

#[component]
fn EmployeeRow(employee: Employee, vm: EmployeesViewModel) -> impl IntoView {
    let open_edit = vm.on_open_edit();
    let request_delete = vm.on_request_delete();
    let edit_target = employee.clone();
    let delete_target = employee.clone();

    let department = employee
        .department
        .as_ref()
        .map(|dept| dept.name.clone())
        .unwrap_or_else(|| "—".to_string());
    let position = employee.position.clone().unwrap_or_else(|| "—".to_string());

    view! {
        <tr class="border-b border-border last:border-b-0 hover:bg-surface-muted/50">
            <td class="px-4 py-3">
                <p class="font-medium text-fg">{employee.user.name.clone()}</p>
                <p class="text-xs text-fg-muted">{employee.user.email.clone()}</p>
            </td>
            <td class="px-4 py-3 text-sm text-fg-muted">{employee.employee_code.clone()}</td>
            <td class="px-4 py-3 text-sm text-fg">{department}</td>
            <td class="px-4 py-3 text-sm text-fg">{position}</td>
            <td class="px-4 py-3 text-sm text-fg">{format_money_or_dash(employee.salary)}</td>
            <td class="px-4 py-3">
                <span class=status_badge_class(&employee.status)>{employee.status.clone()}</span>
            </td>
            <td class="px-4 py-3">
                <div class="flex justify-end gap-1">
                    <button
                        type="button"
                        class="p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                        aria-label="Edit employee"
                        on:click=move |_| open_edit.call(edit_target.clone())
                    >
                        <i class="fas fa-pen"></i>
                    </button>
                    <button
                        type="button"
                        class="p-2 rounded-md text-fg-muted hover:text-status-error-text hover:bg-status-error-bg"
                        aria-label="Delete employee"
                        on:click=move |_| request_delete.call(delete_target.clone())
                    >
                        <i class="fas fa-trash"></i>
                    </button>
                </div>
            </td>
        </tr>
    }
}

#[component]
fn EmployeeFormDialog(vm: EmployeesViewModel) -> impl IntoView {
    let form = vm.form;
    let form_open = vm.form_open;
    let editing = vm.editing;
    let submit = vm.on_submit();
    let close = vm.on_close_form();
    let pending = vm.save_action.pending();

    let department_options = move || {
        let mut options = vec![(String::new(), "No department".to_string())];
        if let Some(Ok(departments)) = vm.departments_resource.get() {
            options.extend(
                departments
                    .into_iter()
                    .map(|dept: Department| (dept.id, dept.name)),
            );
        }
        options
    };

    let on_form_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !pending.get_untracked() {
            submit();
        }
    };

    view! {
        <Show when=move || form_open.get()>
            <div class="fixed inset-0 z-[60] flex items-start justify-center overflow-y-auto p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="fixed inset-0 bg-overlay-backdrop"
                    on:click=move |_| close()
                ></button>
                <div class="relative z-[61] w-full max-w-lg my-8 rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4">
                    <div class="flex items-center justify-between">
                        <h2 class="text-lg font-semibold text-fg">
                            {move || {
                                if editing.get().is_some() { "Edit Employee" } else { "Add Employee" }
                            }}
                        </h2>
                        <button
                            type="button"
                            class="p-1 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            aria-label="Close form"
                            on:click=move |_| close()
                        >
                            <i class="fas fa-xmark"></i>
                        </button>
                    </div>
                    <FeedbackBanner message=vm.message />
                    <form class="space-y-4" on:submit=on_form_submit>
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                            <TextField label="Full name" value=form.name_signal() required=true />
                            <TextField
                                label="Email"
                                value=form.email_signal()
                                input_type="email"
                                required=true
                            />
                            <TextField label="Phone" value=form.phone_signal() placeholder="Optional" />
                            <TextField label="Position" value=form.position_signal() placeholder="Optional" />
                            <SelectField
                                label="Department"
                                value=form.department_signal()
                                options=department_options()
                            />
                            <TextField
                                label="Salary"
                                value=form.salary_signal()
                                input_type="number"
                                placeholder="Monthly basic"
                            />
                            <SelectField
                                label="Status"
                                value=form.status_signal()
                                options=status_options()
                            />
                        </div>
                        <div class="flex justify-end gap-2 pt-2">
                            <button
                                type="button"
                                class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                                on:click=move |_| close()
                            >
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                                disabled=move || pending.get()
                            >
                                {move || if pending.get() { "Saving..." } else { "Save employee" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn EmployeesPanel() -> impl IntoView {
    let vm = use_employees_view_model();

    let open_create = vm.on_open_create();
    let on_page = vm.on_page();
    let on_search = vm.on_search();
    let on_department_filter = vm.on_department_filter();
    let clear_filters = vm.on_clear_filters();
    let has_filters = vm.has_filters();
    let cancel_delete = vm.on_cancel_delete();
    let confirm_delete = vm.on_confirm_delete();
    let delete_pending = vm.delete_action.pending();

    let current_page = Signal::derive(move || vm.page.get());
    let total_pages = Signal::derive(move || {
        vm.list_resource
            .get()
            .and_then(Result::ok)
            .map(|list| list.pagination.pages)
            .unwrap_or(0)
    });

    let delete_open = Signal::derive(move || vm.pending_delete.get().is_some());
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|employee| {
                format!(
                    "Remove {} from the employee directory? Their attendance and payroll history will also be removed.",
                    employee.user.name
                )
            })
            .unwrap_or_default()
    });

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex flex-wrap items-center justify-between gap-3">
                    <div>
                        <h1 class="text-2xl font-bold text-fg">"Employees"</h1>
                        <p class="text-sm text-fg-muted">"Manage the employee directory"</p>
                    </div>
                    <button
                        type="button"
                        class="inline-flex items-center gap-2 rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                        on:click=move |_| open_create()
                    >
                        <i class="fas fa-user-plus"></i>
                        "Add Employee"
                    </button>
                </div>

                {move || match vm.stats_resource.get() {
                    Some(Ok(stats)) => view! {
                        <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                            <StatTile icon="fa-users" label="Total Employees" value=stats.total_employees />
                            <StatTile icon="fa-user-check" label="Active" value=stats.active_employees />
                            <StatTile icon="fa-user-plus" label="New This Month" value=stats.new_this_month />
                        </div>
                    }
                    .into_view(),
                    _ => ().into_view(),
                }}

                <FeedbackBanner message=vm.message />

                <div class="bg-surface-elevated shadow rounded-lg border border-border p-4 flex flex-wrap items-center gap-3">
                    <div class="relative flex-1 min-w-[14rem]">
                        <i class="fas fa-magnifying-glass absolute left-3 top-1/2 -translate-y-1/2 text-fg-muted"></i>
                        <input
                            type="search"
                            class="w-full rounded-md border border-form-control-border bg-form-control-bg pl-9 pr-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-bg"
                            placeholder="Search by name, email, or code"
                            prop:value=move || vm.search.get()
                            on:input=move |ev| on_search.call(event_target_value(&ev))
                        />
                    </div>
                    <select
                        class="rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-bg"
                        prop:value=move || vm.department_filter.get()
                        on:change=move |ev| on_department_filter.call(event_target_value(&ev))
                    >
                        <option value="">"All Departments"</option>
                        {move || {
                            vm.departments_resource
                                .get()
                                .and_then(Result::ok)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|dept| {
                                    view! { <option value=dept.id.clone()>{dept.name.clone()}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                    <Show when=move || has_filters.get()>
                        <button
                            type="button"
                            class="text-sm font-medium text-action-primary-bg hover:underline"
                            on:click=move |_| clear_filters()
                        >
                            "Clear filters"
                        </button>
                    </Show>
                </div>

                <div class="bg-surface-elevated shadow rounded-lg border border-border overflow-hidden">
                    {move || match vm.list_resource.get() {
                        None => view! { <LoadingSpinner /> }.into_view(),
                        Some(Err(err)) => view! { <ErrorMessage message=err.to_string() /> }.into_view(),
                        Some(Ok(list)) => {
                            if list.data.is_empty() {
                                let (title, description) = if has_filters.get_untracked() {
                                    (
                                        "No employees found",
                                        "Try adjusting your search or department filter.",
                                    )
                                } else {
                                    (
                                        "No employees yet",
                                        "Add your first employee to get started.",
                                    )
                                };
                                view! {
                                    <EmptyState title=title description=description.to_string() />
                                }
                                .into_view()
                            } else {
                                view! {
                                    <div class="overflow-x-auto">
                                        <table class="w-full text-left">
                                            <thead class="bg-surface-muted text-xs uppercase tracking-wide text-fg-muted">
                                                <tr>
                                                    <th class="px-4 py-3 font-medium">"Employee"</th>
                                                    <th class="px-4 py-3 font-medium">"Code"</th>
                                                    <th class="px-4 py-3 font-medium">"Department"</th>
                                                    <th class="px-4 py-3 font-medium">"Position"</th>
                                                    <th class="px-4 py-3 font-medium">"Salary"</th>
                                                    <th class="px-4 py-3 font-medium">"Status"</th>
                                                    <th class="px-4 py-3"></th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {list
                                                    .data
                                                    .into_iter()
                                                    .map(|employee| view! { <EmployeeRow employee=employee vm=vm /> })
                                                    .collect_view()}
                                            </tbody>
                                        </table>
                                    </div>
                                }
                                .into_view()
                            }
                        }
                    }}
                </div>

                <Pagination current=current_page pages=total_pages on_page=on_page />
            </div>

            <EmployeeFormDialog vm=vm />
            <ConfirmDialog
                is_open=delete_open
                title="Remove employee"
                message=delete_message
                confirm_label="Remove"
                confirm_disabled=delete_pending
                destructive=true
                on_confirm=Callback::new(move |_| confirm_delete())
                on_cancel=Callback::new(move |_| cancel_delete())
            />
        </Layout>
    }
}

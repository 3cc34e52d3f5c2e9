use leptos::ev::SubmitEvent;
use leptos::*;

use crate::api::Payroll;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::feedback::FeedbackBanner;
use crate::components::forms::{SelectField, TextField};
use crate::components::layout::{ErrorMessage, Layout, LoadingSpinner};
use crate::components::pagination::Pagination;
use crate::pages::payroll::utils::{
    month_options, period_label, status_badge_class, status_options, year_options,
};
use crate::pages::payroll::view_model::{use_payroll_view_model, PayrollViewModel};
use crate::utils::format::{format_money, format_money_or_dash};
use crate::utils::time::{current_year, format_date_short};

const FILTER_SELECT: &str = "rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-bg";

#[component]
fn SummaryCard(
    icon: &'static str,
    #[prop(into)] label: String,
    #[prop(into)] value: String,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg border border-border p-4 flex items-center gap-3">
            <i class=format!("fas {icon} text-action-primary-bg")></i>
            <div class="min-w-0">
                <p class="text-lg font-bold text-fg truncate">{value}</p>
                <p class="text-xs text-fg-muted">{label}</p>
            </div>
        </div>
    }
}

#[component]
fn PayrollRow(payroll: Payroll, vm: PayrollViewModel) -> impl IntoView {
    let open_adjust = vm.on_open_adjust();
    let process = vm.on_process();
    let request_delete = vm.on_request_delete();
    let view_history = vm.on_view_history();
    let inspect_payout = vm.on_inspect_payout();
    let process_pending = vm.process_action.pending();

    let is_pending = payroll.status.eq_ignore_ascii_case("pending");
    let period = period_label(payroll.month, payroll.year);
    let paid_on = payroll
        .payment_date
        .as_ref()
        .map(|date| format!("Paid {}", format_date_short(date)));

    let employee_cell = match payroll.employee.as_ref() {
        Some(employee) => view! {
            <div>
                <p class="font-medium text-fg">{employee.user.name.clone()}</p>
                <p class="text-xs text-fg-muted">{employee.employee_code.clone()}</p>
            </div>
        }
        .into_view(),
        None => view! { <p class="text-fg-muted">"—"</p> }.into_view(),
    };

    let history_button = payroll.employee.clone().map(|employee| {
        view! {
            <button
                type="button"
                class="p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                aria-label="Payroll history"
                title="Payroll history"
                on:click=move |_| view_history.call(employee.clone())
            >
                <i class="fas fa-clock-rotate-left"></i>
            </button>
        }
    });

    let payout_button = payroll.payout_id.clone().map(|payout_id| {
        view! {
            <button
                type="button"
                class="p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                aria-label="Payout status"
                title="Payout status"
                on:click=move |_| inspect_payout.call(payout_id.clone())
            >
                <i class="fas fa-receipt"></i>
            </button>
        }
    });

    let pending_buttons = is_pending.then(|| {
        let process_target = payroll.clone();
        let adjust_target = payroll.clone();
        let delete_target = payroll.clone();
        view! {
            <button
                type="button"
                class="p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                aria-label="Process payout"
                title="Process payout"
                disabled=move || process_pending.get()
                on:click=move |_| process.call(process_target.clone())
            >
                <i class="fas fa-paper-plane"></i>
            </button>
            <button
                type="button"
                class="p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                aria-label="Adjust payroll"
                title="Adjust payroll"
                on:click=move |_| open_adjust.call(adjust_target.clone())
            >
                <i class="fas fa-pen"></i>
            </button>
            <button
                type="button"
                class="p-2 rounded-md text-fg-muted hover:text-status-error-text hover:bg-status-error-bg"
                aria-label="Delete payroll"
                title="Delete payroll"
                on:click=move |_| request_delete.call(delete_target.clone())
            >
                <i class="fas fa-trash"></i>
            </button>
        }
    });

    view! {
        <tr class="border-b border-border last:border-b-0 hover:bg-surface-muted/50">
            <td class="px-4 py-3">{employee_cell}</td>
            <td class="px-4 py-3 text-sm text-fg">{period}</td>
            <td class="px-4 py-3 text-sm text-fg">{format_money(payroll.basic_salary)}</td>
            <td class="px-4 py-3 text-sm text-fg">{format_money(payroll.allowances)}</td>
            <td class="px-4 py-3 text-sm text-fg">{format_money(payroll.deductions)}</td>
            <td class="px-4 py-3 text-sm font-semibold text-fg">{format_money(payroll.net_salary)}</td>
            <td class="px-4 py-3">
                <span class=status_badge_class(&payroll.status)>{payroll.status.clone()}</span>
                {paid_on.map(|label| view! { <p class="mt-1 text-xs text-fg-muted">{label}</p> })}
            </td>
            <td class="px-4 py-3">
                <div class="flex justify-end gap-1">
                    {pending_buttons}
                    {history_button}
                    {payout_button}
                </div>
            </td>
        </tr>
    }
}

#[component]
fn GenerateDialog(vm: PayrollViewModel) -> impl IntoView {
    let form = vm.generate_form;
    let generate_open = vm.generate_open;
    let submit = vm.on_submit_generate();
    let close = vm.on_close_generate();
    let pending = vm.generate_action.pending();

    let employee_options = move || {
        let mut options = vec![(String::new(), "Choose an employee".to_string())];
        if let Some(Ok(employees)) = vm.picker_resource.get() {
            options.extend(employees.into_iter().map(|employee| {
                (
                    employee.id,
                    format!("{} ({})", employee.user.name, employee.employee_code),
                )
            }));
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
        <Show when=move || generate_open.get()>
            <div class="fixed inset-0 z-[60] flex items-start justify-center overflow-y-auto p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="fixed inset-0 bg-overlay-backdrop"
                    on:click=move |_| close()
                ></button>
                <div class="relative z-[61] w-full max-w-md my-8 rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4">
                    <div class="flex items-center justify-between">
                        <h2 class="text-lg font-semibold text-fg">"Generate Payroll"</h2>
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
                        <SelectField
                            label="Employee"
                            value=form.employee_signal()
                            options=employee_options()
                        />
                        <div class="grid grid-cols-2 gap-4">
                            <SelectField
                                label="Month"
                                value=form.period.month_signal()
                                options=month_options()
                            />
                            <SelectField
                                label="Year"
                                value=form.period.year_signal()
                                options=year_options(current_year())
                            />
                        </div>
                        <p class="text-xs text-fg-muted">
                            "Amounts start from the employee's basic salary. Adjust allowances and deductions afterwards."
                        </p>
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
                                {move || if pending.get() { "Generating..." } else { "Generate" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn AdjustDialog(vm: PayrollViewModel) -> impl IntoView {
    let form = vm.adjust_form;
    let adjusting = vm.adjusting;
    let submit = vm.on_submit_adjust();
    let close = vm.on_close_adjust();
    let pending = vm.adjust_action.pending();

    let context_line = move || {
        adjusting.get().map(|payroll| {
            let name = payroll
                .employee
                .as_ref()
                .map(|employee| employee.user.name.clone())
                .unwrap_or_else(|| "Employee".to_string());
            format!("{name} · {}", period_label(payroll.month, payroll.year))
        })
    };

    let on_form_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !pending.get_untracked() {
            submit();
        }
    };

    view! {
        <Show when=move || adjusting.get().is_some()>
            <div class="fixed inset-0 z-[60] flex items-start justify-center overflow-y-auto p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="fixed inset-0 bg-overlay-backdrop"
                    on:click=move |_| close()
                ></button>
                <div class="relative z-[61] w-full max-w-md my-8 rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4">
                    <div class="flex items-center justify-between">
                        <div>
                            <h2 class="text-lg font-semibold text-fg">"Adjust Payroll"</h2>
                            <p class="text-sm text-fg-muted">{context_line}</p>
                        </div>
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
                        <div class="grid grid-cols-2 gap-4">
                            <TextField
                                label="Allowances"
                                value=form.allowances_signal()
                                input_type="number"
                                placeholder="0"
                            />
                            <TextField
                                label="Deductions"
                                value=form.deductions_signal()
                                input_type="number"
                                placeholder="0"
                            />
                        </div>
                        <p class="text-xs text-fg-muted">
                            "Net salary is recalculated from the basic salary on save."
                        </p>
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
                                {move || if pending.get() { "Saving..." } else { "Save changes" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn BulkDialog(vm: PayrollViewModel) -> impl IntoView {
    let period = vm.bulk_period;
    let bulk_open = vm.bulk_open;
    let submit = vm.on_submit_bulk();
    let close = vm.on_close_bulk();
    let pending = vm.bulk_action.pending();

    let on_form_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !pending.get_untracked() {
            submit();
        }
    };

    view! {
        <Show when=move || bulk_open.get()>
            <div class="fixed inset-0 z-[60] flex items-start justify-center overflow-y-auto p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="fixed inset-0 bg-overlay-backdrop"
                    on:click=move |_| close()
                ></button>
                <div class="relative z-[61] w-full max-w-md my-8 rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4">
                    <div class="flex items-center justify-between">
                        <h2 class="text-lg font-semibold text-fg">"Bulk Payout"</h2>
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
                        <div class="grid grid-cols-2 gap-4">
                            <SelectField
                                label="Month"
                                value=period.month_signal()
                                options=month_options()
                            />
                            <SelectField
                                label="Year"
                                value=period.year_signal()
                                options=year_options(current_year())
                            />
                        </div>
                        <p class="text-xs text-fg-muted">
                            "Sends a payout for every pending payroll in the selected period. Rows the gateway rejects stay pending and are counted as failed."
                        </p>
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
                                {move || if pending.get() { "Paying out..." } else { "Run payout" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn HistoryDialog(vm: PayrollViewModel) -> impl IntoView {
    let history_employee = vm.history_employee;
    let close = vm.on_close_history();

    let subtitle = move || {
        history_employee
            .get()
            .map(|employee| employee.user.name)
            .unwrap_or_default()
    };

    view! {
        <Show when=move || history_employee.get().is_some()>
            <div class="fixed inset-0 z-[60] flex items-start justify-center overflow-y-auto p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="fixed inset-0 bg-overlay-backdrop"
                    on:click=move |_| close()
                ></button>
                <div class="relative z-[61] w-full max-w-lg my-8 rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4">
                    <div class="flex items-center justify-between">
                        <div>
                            <h2 class="text-lg font-semibold text-fg">"Payroll History"</h2>
                            <p class="text-sm text-fg-muted">{subtitle}</p>
                        </div>
                        <button
                            type="button"
                            class="p-1 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            aria-label="Close history"
                            on:click=move |_| close()
                        >
                            <i class="fas fa-xmark"></i>
                        </button>
                    </div>
                    {move || match vm.history_resource.get() {
                        None => view! { <LoadingSpinner /> }.into_view(),
                        Some(Err(err)) => view! { <ErrorMessage message=err.to_string() /> }.into_view(),
                        Some(Ok(rows)) => {
                            if rows.is_empty() {
                                view! {
                                    <p class="text-sm text-fg-muted py-4">
                                        "No payroll has been generated for this employee."
                                    </p>
                                }
                                .into_view()
                            } else {
                                let mut rows = rows;
                                rows.sort_by(|a, b| (b.year, b.month).cmp(&(a.year, a.month)));
                                view! {
                                    <ul class="divide-y divide-border">
                                        {rows
                                            .into_iter()
                                            .map(|payroll| {
                                                view! {
                                                    <li class="flex items-center justify-between py-2.5">
                                                        <span class="text-sm text-fg">
                                                            {period_label(payroll.month, payroll.year)}
                                                        </span>
                                                        <span class="text-sm font-medium text-fg">
                                                            {format_money(payroll.net_salary)}
                                                        </span>
                                                        <span class=status_badge_class(&payroll.status)>
                                                            {payroll.status.clone()}
                                                        </span>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                }
                                .into_view()
                            }
                        }
                    }}
                </div>
            </div>
        </Show>
    }
}

#[component]
fn PayoutStatusDialog(vm: PayrollViewModel) -> impl IntoView {
    let payout_lookup = vm.payout_lookup;
    let close = vm.on_close_payout();

    view! {
        <Show when=move || payout_lookup.get().is_some()>
            <div class="fixed inset-0 z-[60] flex items-start justify-center overflow-y-auto p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="fixed inset-0 bg-overlay-backdrop"
                    on:click=move |_| close()
                ></button>
                <div class="relative z-[61] w-full max-w-sm my-8 rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4">
                    <div class="flex items-center justify-between">
                        <h2 class="text-lg font-semibold text-fg">"Payout Status"</h2>
                        <button
                            type="button"
                            class="p-1 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            aria-label="Close payout status"
                            on:click=move |_| close()
                        >
                            <i class="fas fa-xmark"></i>
                        </button>
                    </div>
                    <p class="text-xs text-fg-muted font-mono">{move || payout_lookup.get().unwrap_or_default()}</p>
                    {move || match vm.payout_resource.get() {
                        None => view! { <LoadingSpinner /> }.into_view(),
                        Some(Err(err)) => view! { <ErrorMessage message=err.to_string() /> }.into_view(),
                        Some(Ok(None)) => ().into_view(),
                        Some(Ok(Some(status))) => view! {
                            <dl class="grid grid-cols-2 gap-y-2 text-sm">
                                <dt class="text-fg-muted">"Status"</dt>
                                <dd>
                                    <span class=status_badge_class(&status.status)>{status.status.clone()}</span>
                                </dd>
                                <dt class="text-fg-muted">"Amount"</dt>
                                <dd class="text-fg">{format_money_or_dash(status.amount)}</dd>
                            </dl>
                        }
                        .into_view(),
                    }}
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn PayrollPanel() -> impl IntoView {
    let vm = use_payroll_view_model();

    let open_generate = vm.on_open_generate();
    let open_bulk = vm.on_open_bulk();
    let on_page = vm.on_page();
    let on_search = vm.on_search();
    let on_month_filter = vm.on_month_filter();
    let on_year_filter = vm.on_year_filter();
    let on_department_filter = vm.on_department_filter();
    let on_status_filter = vm.on_status_filter();
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
            .map(|payroll| {
                let name = payroll
                    .employee
                    .as_ref()
                    .map(|employee| employee.user.name.clone())
                    .unwrap_or_else(|| "this employee".to_string());
                format!(
                    "Delete the {} payroll for {name}? Completed payouts are not reversed.",
                    period_label(payroll.month, payroll.year)
                )
            })
            .unwrap_or_default()
    });

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex flex-wrap items-center justify-between gap-3">
                    <div>
                        <h1 class="text-2xl font-bold text-fg">"Payroll"</h1>
                        <p class="text-sm text-fg-muted">"Generate, adjust, and pay out monthly salaries"</p>
                    </div>
                    <div class="flex items-center gap-2">
                        <button
                            type="button"
                            class="inline-flex items-center gap-2 rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated border border-border"
                            on:click=move |_| open_bulk()
                        >
                            <i class="fas fa-money-bill-transfer"></i>
                            "Bulk Payout"
                        </button>
                        <button
                            type="button"
                            class="inline-flex items-center gap-2 rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                            on:click=move |_| open_generate()
                        >
                            <i class="fas fa-file-invoice-dollar"></i>
                            "Generate Payroll"
                        </button>
                    </div>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-5 gap-4">
                    {move || match vm.summary_resource.get() {
                        Some(Ok(summary)) => view! {
                            <SummaryCard
                                icon="fa-sack-dollar"
                                label="Net Payable"
                                value=format_money(summary.total_net)
                            />
                            <SummaryCard
                                icon="fa-hourglass-half"
                                label="Pending Amount"
                                value=format_money(summary.total_pending)
                            />
                            <SummaryCard
                                icon="fa-circle-check"
                                label="Processed Runs"
                                value=summary.processed_count.to_string()
                            />
                            <SummaryCard
                                icon="fa-clock"
                                label="Pending Runs"
                                value=summary.pending_count.to_string()
                            />
                        }
                        .into_view(),
                        _ => ().into_view(),
                    }}
                    {move || match vm.balance_resource.get() {
                        Some(Ok(balance)) => {
                            let value = match balance.currency.as_deref() {
                                Some(currency) => format!("{} {currency}", format_money(balance.balance)),
                                None => format_money(balance.balance),
                            };
                            view! { <SummaryCard icon="fa-wallet" label="Gateway Balance" value=value /> }
                                .into_view()
                        }
                        _ => ().into_view(),
                    }}
                </div>

                <FeedbackBanner message=vm.message />

                <div class="bg-surface-elevated shadow rounded-lg border border-border p-4 flex flex-wrap items-center gap-3">
                    <div class="relative flex-1 min-w-[12rem]">
                        <i class="fas fa-magnifying-glass absolute left-3 top-1/2 -translate-y-1/2 text-fg-muted"></i>
                        <input
                            type="search"
                            class="w-full rounded-md border border-form-control-border bg-form-control-bg pl-9 pr-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-bg"
                            placeholder="Search by employee"
                            prop:value=move || vm.search.get()
                            on:input=move |ev| on_search.call(event_target_value(&ev))
                        />
                    </div>
                    <select
                        class=FILTER_SELECT
                        prop:value=move || vm.month_filter.get()
                        on:change=move |ev| on_month_filter.call(event_target_value(&ev))
                    >
                        <option value="">"All Months"</option>
                        {month_options()
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
                    </select>
                    <select
                        class=FILTER_SELECT
                        prop:value=move || vm.year_filter.get()
                        on:change=move |ev| on_year_filter.call(event_target_value(&ev))
                    >
                        <option value="">"All Years"</option>
                        {year_options(current_year())
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
                    </select>
                    <select
                        class=FILTER_SELECT
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
                    <select
                        class=FILTER_SELECT
                        prop:value=move || vm.status_filter.get()
                        on:change=move |ev| on_status_filter.call(event_target_value(&ev))
                    >
                        <option value="">"All Statuses"</option>
                        {status_options()
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
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
                                        "No payroll records found",
                                        "Try adjusting the period or status filters.",
                                    )
                                } else {
                                    (
                                        "No payroll yet",
                                        "Generate payroll for an employee to get started.",
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
                                                    <th class="px-4 py-3 font-medium">"Period"</th>
                                                    <th class="px-4 py-3 font-medium">"Basic"</th>
                                                    <th class="px-4 py-3 font-medium">"Allowances"</th>
                                                    <th class="px-4 py-3 font-medium">"Deductions"</th>
                                                    <th class="px-4 py-3 font-medium">"Net"</th>
                                                    <th class="px-4 py-3 font-medium">"Status"</th>
                                                    <th class="px-4 py-3"></th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {list
                                                    .data
                                                    .into_iter()
                                                    .map(|payroll| view! { <PayrollRow payroll=payroll vm=vm /> })
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

            <GenerateDialog vm=vm />
            <AdjustDialog vm=vm />
            <BulkDialog vm=vm />
            <HistoryDialog vm=vm />
            <PayoutStatusDialog vm=vm />
            <ConfirmDialog
                is_open=delete_open
                title="Delete payroll"
                message=delete_message
                confirm_label="Delete"
                confirm_disabled=delete_pending
                destructive=true
                on_confirm=Callback::new(move |_| confirm_delete())
                on_cancel=Callback::new(move |_| cancel_delete())
            />
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{Employee, EmployeeUser};
    use crate::test_support::helpers::{admin_user, provide_auth};
    use crate::test_support::ssr::render_to_string;
    use chrono::{DateTime, Utc};

    fn sample_payroll(status: &str, payout_id: Option<&str>) -> Payroll {
        Payroll {
            id: "p1".into(),
            employee: Some(Employee {
                id: "e1".into(),
                employee_code: "EMP001".into(),
                user: EmployeeUser {
                    name: "Jane Doe".into(),
                    email: "jane@company.com".into(),
                    phone: None,
                },
                department: None,
                position: None,
                salary: Some(65000.0),
                joining_date: None,
                status: "active".into(),
            }),
            month: 8,
            year: 2026,
            basic_salary: 65000.0,
            allowances: 1500.0,
            deductions: 500.0,
            net_salary: 66000.0,
            status: status.into(),
            payment_date: None,
            payout_id: payout_id.map(Into::into),
        }
    }

    #[test]
    fn panel_renders_the_payroll_chrome() {
        let html = render_to_string(|| {
            provide_auth(Some(admin_user()));
            view! { <PayrollPanel /> }
        });
        assert!(html.contains("Payroll"));
        assert!(html.contains("Generate Payroll"));
        assert!(html.contains("Bulk Payout"));
        assert!(html.contains("All Months"));
        assert!(html.contains("All Statuses"));
    }

    #[test]
    fn pending_rows_offer_the_full_action_set() {
        let html = render_to_string(|| {
            let vm = use_payroll_view_model();
            view! {
                <table>
                    <tbody>
                        <PayrollRow payroll=sample_payroll("pending", None) vm=vm />
                    </tbody>
                </table>
            }
        });
        assert!(html.contains("Process payout"));
        assert!(html.contains("Adjust payroll"));
        assert!(html.contains("Delete payroll"));
        assert!(html.contains("Payroll history"));
        assert!(!html.contains("Payout status"));
    }

    #[test]
    fn processed_rows_swap_actions_for_payout_lookup() {
        let mut payroll = sample_payroll("processed", Some("pout_1"));
        payroll.payment_date =
            Some(DateTime::parse_from_rfc3339("2026-08-31T10:00:00Z").unwrap().with_timezone(&Utc));
        let html = render_to_string(move || {
            let vm = use_payroll_view_model();
            view! {
                <table>
                    <tbody>
                        <PayrollRow payroll=payroll vm=vm />
                    </tbody>
                </table>
            }
        });
        assert!(!html.contains("Process payout"));
        assert!(html.contains("Payout status"));
        assert!(html.contains("Paid "));
        assert!(html.contains("$66,000.00"));
    }
}

use leptos::ev::SubmitEvent;
use leptos::*;

use crate::api::Leave;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::feedback::FeedbackBanner;
use crate::components::forms::{SelectField, TextAreaField, TextField};
use crate::components::layout::{ErrorMessage, Layout, LoadingSpinner};
use crate::pages::leaves::utils::{day_count, leave_type_options, status_badge_class};
use crate::pages::leaves::view_model::{use_leaves_view_model, LeavesViewModel};
use crate::state::auth::use_auth;
use crate::utils::time::format_date_long;

fn span_label(leave: &Leave) -> String {
    let start = leave.start_date.date_naive();
    let end = leave.end_date.date_naive();
    let days = day_count(start, end);
    let unit = if days == 1 { "day" } else { "days" };
    if start == end {
        format!("{} ({days} {unit})", format_date_long(start))
    } else {
        format!(
            "{} - {} ({days} {unit})",
            format_date_long(start),
            format_date_long(end)
        )
    }
}

#[component]
fn LeaveRow(leave: Leave, vm: LeavesViewModel, is_staff: Signal<bool>) -> impl IntoView {
    let approve = vm.on_approve();
    let reject = vm.on_reject();
    let request_delete = vm.on_request_delete();
    let status_pending = vm.status_action.pending();

    let approve_target = leave.clone();
    let reject_target = leave.clone();
    let delete_target = leave.clone();

    let employee_name = leave
        .employee
        .as_ref()
        .map(|employee| employee.user.name.clone());
    let is_request_pending = leave.status.eq_ignore_ascii_case("pending");
    let span = span_label(&leave);
    let reason = leave.reason.clone().unwrap_or_else(|| "—".to_string());

    view! {
        <li class="py-4 flex flex-wrap items-start gap-x-6 gap-y-2">
            <div class="min-w-[14rem] flex-1">
                {employee_name
                    .map(|name| view! { <p class="font-medium text-fg">{name}</p> })}
                <p class="text-sm text-fg capitalize">{leave.leave_type.clone()}</p>
                <p class="text-sm text-fg-muted">{span}</p>
                <p class="text-xs text-fg-muted italic">{reason}</p>
            </div>
            <span class=status_badge_class(&leave.status)>{leave.status.clone()}</span>
            <div class="flex gap-1 ml-auto">
                <Show when=move || is_staff.get() && is_request_pending>
                    <button
                        type="button"
                        class="p-2 rounded-md text-status-success-text hover:bg-status-success-bg"
                        aria-label="Approve request"
                        disabled=move || status_pending.get()
                        on:click={
                            let target = approve_target.clone();
                            move |_| approve.call(target.clone())
                        }
                    >
                        <i class="fas fa-check"></i>
                    </button>
                    <button
                        type="button"
                        class="p-2 rounded-md text-status-error-text hover:bg-status-error-bg"
                        aria-label="Reject request"
                        disabled=move || status_pending.get()
                        on:click={
                            let target = reject_target.clone();
                            move |_| reject.call(target.clone())
                        }
                    >
                        <i class="fas fa-xmark"></i>
                    </button>
                </Show>
                <Show when=move || is_request_pending>
                    <button
                        type="button"
                        class="p-2 rounded-md text-fg-muted hover:text-status-error-text hover:bg-status-error-bg"
                        aria-label="Cancel request"
                        on:click={
                            let target = delete_target.clone();
                            move |_| request_delete.call(target.clone())
                        }
                    >
                        <i class="fas fa-trash"></i>
                    </button>
                </Show>
            </div>
        </li>
    }
}

#[component]
fn LeaveFormDialog(vm: LeavesViewModel) -> impl IntoView {
    let form = vm.form;
    let form_open = vm.form_open;
    let submit = vm.on_submit();
    let close = vm.on_close_form();
    let pending = vm.submit_action.pending();

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
                <div class="relative z-[61] w-full max-w-md my-8 rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4">
                    <h2 class="text-lg font-semibold text-fg">"Apply for Leave"</h2>
                    <FeedbackBanner message=vm.message />
                    <form class="space-y-4" on:submit=on_form_submit>
                        <SelectField
                            label="Type"
                            value=form.leave_type_signal()
                            options=leave_type_options()
                        />
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                            <TextField
                                label="From"
                                value=form.start_date_signal()
                                input_type="date"
                                required=true
                            />
                            <TextField
                                label="To"
                                value=form.end_date_signal()
                                input_type="date"
                                required=true
                            />
                        </div>
                        <TextAreaField
                            label="Reason"
                            value=form.reason_signal()
                            placeholder="Optional"
                            rows=3
                        />
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
                                {move || if pending.get() { "Submitting..." } else { "Submit request" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn LeavesPanel() -> impl IntoView {
    let vm = use_leaves_view_model();
    let (auth, _) = use_auth();

    let is_staff = Signal::derive(move || {
        auth.with(|state| matches!(state.role(), Some("admin") | Some("hr")))
    });

    let open_form = vm.on_open_form();
    let cancel_delete = vm.on_cancel_delete();
    let confirm_delete = vm.on_confirm_delete();
    let delete_pending = vm.delete_action.pending();

    let delete_open = Signal::derive(move || vm.pending_delete.get().is_some());
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|leave| format!("Cancel the {} request for {}?", leave.leave_type, span_label(&leave)))
            .unwrap_or_default()
    });

    let subtitle = move || {
        if is_staff.get() {
            "Review and decide leave requests"
        } else {
            "Your leave requests"
        }
    };

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex flex-wrap items-center justify-between gap-3">
                    <div>
                        <h1 class="text-2xl font-bold text-fg">"Leaves"</h1>
                        <p class="text-sm text-fg-muted">{subtitle}</p>
                    </div>
                    <button
                        type="button"
                        class="inline-flex items-center gap-2 rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                        on:click=move |_| open_form()
                    >
                        <i class="fas fa-calendar-plus"></i>
                        "Apply Leave"
                    </button>
                </div>

                <FeedbackBanner message=vm.message />

                <div class="bg-surface-elevated shadow rounded-lg border border-border p-6">
                    {move || match vm.list_resource.get() {
                        None => view! { <LoadingSpinner /> }.into_view(),
                        Some(Err(err)) => view! { <ErrorMessage message=err.to_string() /> }.into_view(),
                        Some(Ok(leaves)) => {
                            if leaves.is_empty() {
                                view! {
                                    <EmptyState
                                        title="No leave requests"
                                        description="Apply for leave and it will show up here.".to_string()
                                    />
                                }
                                .into_view()
                            } else {
                                let mut leaves = leaves;
                                leaves.sort_by(|a, b| b.start_date.cmp(&a.start_date));
                                view! {
                                    <ul class="divide-y divide-border">
                                        {leaves
                                            .into_iter()
                                            .map(|leave| {
                                                view! { <LeaveRow leave=leave vm=vm is_staff=is_staff /> }
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

            <LeaveFormDialog vm=vm />
            <ConfirmDialog
                is_open=delete_open
                title="Cancel leave request"
                message=delete_message
                confirm_label="Cancel request"
                confirm_disabled=delete_pending
                destructive=true
                on_confirm=Callback::new(move |_| confirm_delete())
                on_cancel=Callback::new(move |_| cancel_delete())
            />
        </Layout>
    }
}

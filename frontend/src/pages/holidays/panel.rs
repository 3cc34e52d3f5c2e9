use leptos::ev::SubmitEvent;
use leptos::*;

use crate::api::Holiday;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::feedback::FeedbackBanner;
use crate::components::forms::{TextAreaField, TextField};
use crate::components::layout::{ErrorMessage, Layout, LoadingSpinner};
use crate::pages::holidays::utils::{date_label, date_tile, group_by_year};
use crate::pages::holidays::view_model::{use_holidays_view_model, HolidaysViewModel};
use crate::state::auth::use_auth;

#[component]
fn HolidayRow(holiday: Holiday, vm: HolidaysViewModel, is_staff: Signal<bool>) -> impl IntoView {
    let open_edit = vm.on_open_edit();
    let request_delete = vm.on_request_delete();
    let edit_target = holiday.clone();
    let delete_target = holiday.clone();

    let (month, day) = date_tile(&holiday);
    let label = date_label(&holiday);
    let description = holiday.description.clone();

    view! {
        <li class="py-4 flex items-start gap-4">
            <div class="w-12 shrink-0 rounded-lg border border-border bg-surface-muted text-center py-1.5">
                <p class="text-[0.65rem] uppercase tracking-wide text-fg-muted">{month}</p>
                <p class="text-lg font-bold text-fg leading-tight">{day}</p>
            </div>
            <div class="flex-1 min-w-0">
                <p class="font-medium text-fg">{holiday.name.clone()}</p>
                <p class="text-sm text-fg-muted">{label}</p>
                {description
                    .map(|text| view! { <p class="mt-1 text-sm text-fg-muted">{text}</p> })}
            </div>
            <Show when=move || is_staff.get()>
                <div class="flex gap-1">
                    <button
                        type="button"
                        class="p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                        aria-label="Edit holiday"
                        on:click={
                            let target = edit_target.clone();
                            move |_| open_edit.call(target.clone())
                        }
                    >
                        <i class="fas fa-pen"></i>
                    </button>
                    <button
                        type="button"
                        class="p-2 rounded-md text-fg-muted hover:text-status-error-text hover:bg-status-error-bg"
                        aria-label="Delete holiday"
                        on:click={
                            let target = delete_target.clone();
                            move |_| request_delete.call(target.clone())
                        }
                    >
                        <i class="fas fa-trash"></i>
                    </button>
                </div>
            </Show>
        </li>
    }
}

#[component]
fn HolidayFormDialog(vm: HolidaysViewModel) -> impl IntoView {
    let form = vm.form;
    let form_open = vm.form_open;
    let editing = vm.editing;
    let submit = vm.on_submit();
    let close = vm.on_close_form();
    let pending = vm.save_action.pending();

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
                    <div class="flex items-center justify-between">
                        <h2 class="text-lg font-semibold text-fg">
                            {move || {
                                if editing.get().is_some() { "Edit Holiday" } else { "Add Holiday" }
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
                        <TextField label="Name" value=form.name_signal() required=true />
                        <TextField
                            label="Date"
                            value=form.date_signal()
                            input_type="date"
                            required=true
                        />
                        <TextAreaField
                            label="Description"
                            value=form.description_signal()
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
                                {move || if pending.get() { "Saving..." } else { "Save holiday" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn HolidaysPanel() -> impl IntoView {
    let vm = use_holidays_view_model();
    let (auth, _) = use_auth();

    let is_staff = Signal::derive(move || {
        auth.with(|state| matches!(state.role(), Some("admin") | Some("hr")))
    });

    let open_create = vm.on_open_create();
    let cancel_delete = vm.on_cancel_delete();
    let confirm_delete = vm.on_confirm_delete();
    let delete_pending = vm.delete_action.pending();

    let delete_open = Signal::derive(move || vm.pending_delete.get().is_some());
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|holiday| format!("Remove {} from the holiday calendar?", holiday.name))
            .unwrap_or_default()
    });

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex flex-wrap items-center justify-between gap-3">
                    <div>
                        <h1 class="text-2xl font-bold text-fg">"Holidays"</h1>
                        <p class="text-sm text-fg-muted">"Company holiday calendar"</p>
                    </div>
                    <Show when=move || is_staff.get()>
                        <button
                            type="button"
                            class="inline-flex items-center gap-2 rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                            on:click=move |_| open_create()
                        >
                            <i class="fas fa-calendar-plus"></i>
                            "Add Holiday"
                        </button>
                    </Show>
                </div>

                <FeedbackBanner message=vm.message />

                {move || match vm.list_resource.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Err(err)) => view! { <ErrorMessage message=err.to_string() /> }.into_view(),
                    Some(Ok(holidays)) => {
                        if holidays.is_empty() {
                            view! {
                                <EmptyState
                                    title="No holidays yet"
                                    description="Holidays added here appear on everyone's calendar.".to_string()
                                />
                            }
                            .into_view()
                        } else {
                            group_by_year(holidays)
                                .into_iter()
                                .map(|(year, group)| {
                                    view! {
                                        <section class="bg-surface-elevated shadow rounded-lg border border-border p-4">
                                            <h2 class="text-sm font-semibold uppercase tracking-wide text-fg-muted">
                                                {year}
                                            </h2>
                                            <ul class="divide-y divide-border">
                                                {group
                                                    .into_iter()
                                                    .map(|holiday| {
                                                        view! {
                                                            <HolidayRow
                                                                holiday=holiday
                                                                vm=vm
                                                                is_staff=is_staff
                                                            />
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        </section>
                                    }
                                })
                                .collect_view()
                        }
                    }
                }}
            </div>

            <HolidayFormDialog vm=vm />
            <ConfirmDialog
                is_open=delete_open
                title="Delete holiday"
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
    use crate::test_support::helpers::{admin_user, employee_user, provide_auth};
    use crate::test_support::ssr::render_to_string;
    use chrono::{DateTime, Utc};

    fn sample_holiday() -> Holiday {
        Holiday {
            id: "h1".into(),
            name: "Founding Day".into(),
            date: DateTime::parse_from_rfc3339("2026-08-14T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            description: Some("Office closed".into()),
        }
    }

    #[test]
    fn staff_see_the_add_button() {
        let html = render_to_string(|| {
            provide_auth(Some(admin_user()));
            view! { <HolidaysPanel /> }
        });
        assert!(html.contains("Holidays"));
        assert!(html.contains("Add Holiday"));
    }

    #[test]
    fn employees_get_a_read_only_calendar() {
        let html = render_to_string(|| {
            provide_auth(Some(employee_user()));
            view! { <HolidaysPanel /> }
        });
        assert!(html.contains("Holidays"));
        assert!(!html.contains("Add Holiday"));
    }

    #[test]
    fn rows_hide_actions_from_employees() {
        let html = render_to_string(|| {
            let vm = use_holidays_view_model();
            let is_staff = Signal::derive(|| false);
            view! {
                <ul>
                    <HolidayRow holiday=sample_holiday() vm=vm is_staff=is_staff />
                </ul>
            }
        });
        assert!(html.contains("Founding Day"));
        assert!(html.contains("Friday, August 14, 2026"));
        assert!(!html.contains("Edit holiday"));
    }

    #[test]
    fn rows_offer_edit_and_delete_to_staff() {
        let html = render_to_string(|| {
            let vm = use_holidays_view_model();
            let is_staff = Signal::derive(|| true);
            view! {
                <ul>
                    <HolidayRow holiday=sample_holiday() vm=vm is_staff=is_staff />
                </ul>
            }
        });
        assert!(html.contains("Edit holiday"));
        assert!(html.contains("Delete holiday"));
    }
}

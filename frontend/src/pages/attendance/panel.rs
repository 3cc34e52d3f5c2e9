use leptos::*;

use crate::api::{ApiError, AttendanceRecord, PunchKind, PunchPhoto};
use crate::components::feedback::{FeedbackBanner, MessageState};
use crate::components::layout::{ErrorMessage, Layout, LoadingSpinner};
use crate::pages::attendance::utils::{worked_label, ShiftPhase};
use crate::pages::attendance::view_model::{use_attendance_view_model, AttendanceViewModel};
use crate::utils::time::{format_date_long, format_time_of_day, today_local};

const RING_CIRCUMFERENCE: f64 = 282.74;

const CALENDAR_LEGEND: &[(&str, &str)] = &[
    ("present", "Present"),
    ("half-day", "Half day"),
    ("leave", "Leave"),
    ("absent", "Absent"),
    ("none", "No record"),
];

fn day_cell_class(status: &str) -> &'static str {
    match status {
        "present" => "bg-status-success-bg text-status-success-text",
        "half-day" => "bg-status-warning-bg text-status-warning-text",
        "leave" => "bg-action-primary-bg/10 text-action-primary-bg",
        "absent" => "bg-status-error-bg text-status-error-text",
        _ => "bg-surface-muted text-fg-muted",
    }
}

#[cfg(target_arch = "wasm32")]
fn stage_photo_from_input(
    input: web_sys::HtmlInputElement,
    photo: RwSignal<Option<PunchPhoto>>,
    message: RwSignal<MessageState>,
) {
    use wasm_bindgen_futures::JsFuture;

    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        photo.set(None);
        return;
    };
    let filename = file.name();
    let mime_type = file.type_();
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(file.array_buffer()).await {
            Ok(buffer) => {
                let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
                photo.set(Some(PunchPhoto {
                    bytes,
                    filename,
                    mime_type,
                }));
            }
            Err(_) => message.update(|msg| {
                msg.set_error(ApiError::validation("Could not read the selected photo."))
            }),
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn stage_photo_from_input(
    _input: web_sys::HtmlInputElement,
    _photo: RwSignal<Option<PunchPhoto>>,
    _message: RwSignal<MessageState>,
) {
}

#[component]
fn PunchCard(vm: AttendanceViewModel) -> impl IntoView {
    let phase = vm.phase();
    let countdown = vm.countdown();
    let record = vm.today_record();
    let punch = vm.on_punch();
    let clear_photo = vm.on_clear_photo();
    let pending = vm.punch_action.pending();
    let photo = vm.photo;
    let message = vm.message;

    let dash_offset =
        move || RING_CIRCUMFERENCE * (1.0 - countdown.get().percent / 100.0);
    let punch_in_time = move || {
        record
            .get()
            .and_then(|r| r.punch_in)
            .map(|at| format_time_of_day(&at))
            .unwrap_or_default()
    };
    let punch_out_time = move || {
        record
            .get()
            .and_then(|r| r.punch_out)
            .map(|at| format_time_of_day(&at))
            .unwrap_or_default()
    };
    let worked = move || {
        record
            .get()
            .and_then(|r| worked_label(r.punch_in, r.punch_out))
            .unwrap_or_default()
    };
    let photo_name = move || photo.get().map(|p| p.filename).unwrap_or_default();

    let on_photo_change = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        stage_photo_from_input(input, photo, message);
    };

    view! {
        <section class="bg-surface-elevated shadow rounded-lg border border-border p-6 space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-lg font-semibold text-fg">"Today's Shift"</h2>
                <Show when=move || vm.office_ended.get()>
                    <span class="inline-flex items-center gap-2 text-xs font-medium px-2 py-1 rounded-full bg-status-warning-bg text-status-warning-text">
                        <i class="fas fa-clock"></i>
                        "Office hours have ended"
                    </span>
                </Show>
            </div>
            <FeedbackBanner message=message />

            <div class="flex flex-col sm:flex-row items-center gap-6">
                <div class="relative w-40 h-40 shrink-0">
                    <svg viewBox="0 0 100 100" class="w-40 h-40 -rotate-90">
                        <circle
                            cx="50"
                            cy="50"
                            r="45"
                            fill="none"
                            stroke-width="6"
                            class="stroke-border"
                        ></circle>
                        <circle
                            cx="50"
                            cy="50"
                            r="45"
                            fill="none"
                            stroke-width="6"
                            stroke-linecap="round"
                            class="stroke-action-primary-bg transition-all"
                            stroke-dasharray=RING_CIRCUMFERENCE.to_string()
                            stroke-dashoffset=dash_offset
                        ></circle>
                    </svg>
                    <div class="absolute inset-0 flex flex-col items-center justify-center">
                        <span class="text-xl font-mono font-bold text-fg">
                            {move || countdown.get().remaining}
                        </span>
                        <span class="text-xs text-fg-muted">"remaining"</span>
                    </div>
                </div>

                <div class="flex-1 space-y-3 w-full">
                    {move || match phase.get() {
                        ShiftPhase::Idle => view! {
                            <p class="text-sm text-fg-muted">
                                "You have not punched in today."
                            </p>
                            <div class="space-y-2">
                                <label class="block text-sm font-medium text-fg" for="punch-photo">
                                    "Photo proof (optional)"
                                </label>
                                <input
                                    id="punch-photo"
                                    type="file"
                                    accept="image/*"
                                    class="block w-full text-sm text-fg-muted file:mr-3 file:rounded-md file:border-0 file:bg-surface-muted file:px-3 file:py-1.5 file:text-sm file:font-medium file:text-fg"
                                    on:change=on_photo_change
                                />
                                <Show when=move || photo.get().is_some()>
                                    <p class="text-xs text-fg-muted flex items-center gap-2">
                                        <i class="fas fa-image"></i>
                                        {photo_name}
                                        <button
                                            type="button"
                                            class="text-action-primary-bg hover:underline"
                                            on:click=move |_| clear_photo()
                                        >
                                            "Remove"
                                        </button>
                                    </p>
                                </Show>
                            </div>
                            <button
                                type="button"
                                class="inline-flex items-center gap-2 rounded-md px-5 py-2.5 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                                disabled=move || pending.get()
                                on:click=move |_| punch.call(PunchKind::CheckIn)
                            >
                                <i class="fas fa-right-to-bracket"></i>
                                {move || if pending.get() { "Punching..." } else { "Punch In" }}
                            </button>
                        }
                        .into_view(),
                        ShiftPhase::Active => view! {
                            <p class="text-sm text-fg-muted">
                                "Punched in at " <span class="font-medium text-fg">{punch_in_time}</span>
                            </p>
                            <button
                                type="button"
                                class="inline-flex items-center gap-2 rounded-md px-5 py-2.5 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
                                disabled=move || pending.get()
                                on:click=move |_| punch.call(PunchKind::CheckOut)
                            >
                                <i class="fas fa-right-from-bracket"></i>
                                {move || if pending.get() { "Punching..." } else { "Punch Out" }}
                            </button>
                        }
                        .into_view(),
                        ShiftPhase::Completed => view! {
                            <p class="text-sm text-fg-muted">"Shift complete."</p>
                            <dl class="grid grid-cols-3 gap-3 text-sm">
                                <div>
                                    <dt class="text-fg-muted">"In"</dt>
                                    <dd class="font-medium text-fg">{punch_in_time}</dd>
                                </div>
                                <div>
                                    <dt class="text-fg-muted">"Out"</dt>
                                    <dd class="font-medium text-fg">{punch_out_time}</dd>
                                </div>
                                <div>
                                    <dt class="text-fg-muted">"Worked"</dt>
                                    <dd class="font-medium text-fg">{worked}</dd>
                                </div>
                            </dl>
                        }
                        .into_view(),
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CalendarSection(vm: AttendanceViewModel) -> impl IntoView {
    let calendar = vm.calendar();
    let month_label = vm.month_label();
    let previous = vm.on_previous_month();
    let next = vm.on_next_month();
    let loading = vm.month_resource.loading();

    view! {
        <section class="bg-surface-elevated shadow rounded-lg border border-border p-6 space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-lg font-semibold text-fg">"Monthly Overview"</h2>
                <div class="flex items-center gap-2">
                    <button
                        type="button"
                        class="p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                        aria-label="Previous month"
                        on:click=move |_| previous()
                    >
                        <i class="fas fa-chevron-left"></i>
                    </button>
                    <span class="text-sm font-medium text-fg min-w-[9rem] text-center">
                        {move || month_label.get()}
                    </span>
                    <button
                        type="button"
                        class="p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                        aria-label="Next month"
                        on:click=move |_| next()
                    >
                        <i class="fas fa-chevron-right"></i>
                    </button>
                </div>
            </div>

            <Show when=move || loading.get()>
                <p class="text-xs text-fg-muted">"Refreshing..."</p>
            </Show>

            <div class="grid grid-cols-7 gap-1 text-center text-xs font-medium text-fg-muted">
                <span>"Sun"</span>
                <span>"Mon"</span>
                <span>"Tue"</span>
                <span>"Wed"</span>
                <span>"Thu"</span>
                <span>"Fri"</span>
                <span>"Sat"</span>
            </div>
            <div class="grid grid-cols-7 gap-1">
                {move || {
                    let grid = calendar.get();
                    let blanks = (0..grid.leading_blanks)
                        .map(|_| view! { <span class="h-10"></span> }.into_view())
                        .collect_view();
                    let cells = grid
                        .cells
                        .into_iter()
                        .map(|cell| {
                            let class = format!(
                                "h-10 flex items-center justify-center rounded-md text-sm {}",
                                day_cell_class(&cell.status)
                            );
                            let title = format!("{}: {}", cell.date, cell.status);
                            view! { <span class=class title=title>{cell.day}</span> }
                                .into_view()
                        })
                        .collect_view();
                    view! {
                        {blanks}
                        {cells}
                    }
                }}
            </div>

            <div class="flex flex-wrap gap-4 pt-2 border-t border-border">
                {CALENDAR_LEGEND
                    .iter()
                    .map(|(status, label)| {
                        view! {
                            <span class="inline-flex items-center gap-2 text-xs text-fg-muted">
                                <span class=format!("w-3 h-3 rounded {}", day_cell_class(status))></span>
                                {*label}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn HistorySection(vm: AttendanceViewModel) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated shadow rounded-lg border border-border p-6 space-y-4">
            <h2 class="text-lg font-semibold text-fg">"Punch History"</h2>
            {move || match vm.month_resource.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => view! { <ErrorMessage message=err.to_string() /> }.into_view(),
                Some(Ok(records)) => {
                    if records.is_empty() {
                        view! {
                            <p class="text-sm text-fg-muted">"No punches recorded this month."</p>
                        }
                        .into_view()
                    } else {
                        let mut records = records;
                        records.sort_by(|a, b| b.date.cmp(&a.date));
                        view! {
                            <ul class="divide-y divide-border">
                                {records
                                    .into_iter()
                                    .map(|record| view! { <HistoryRow record=record /> })
                                    .collect_view()}
                            </ul>
                        }
                        .into_view()
                    }
                }
            }}
        </section>
    }
}

#[component]
fn HistoryRow(record: AttendanceRecord) -> impl IntoView {
    let date = format_date_long(record.date.date_naive());
    let punch_in = record
        .punch_in
        .map(|at| format_time_of_day(&at))
        .unwrap_or_else(|| "—".to_string());
    let punch_out = record
        .punch_out
        .map(|at| format_time_of_day(&at))
        .unwrap_or_else(|| "—".to_string());
    let has_photo = record.punch_in_photo.is_some();
    let status = record.status.clone();

    view! {
        <li class="py-3 flex flex-wrap items-center gap-x-6 gap-y-1">
            <span class="font-medium text-fg min-w-[11rem]">{date}</span>
            <span class="text-sm text-fg-muted">"In " {punch_in}</span>
            <span class="text-sm text-fg-muted">"Out " {punch_out}</span>
            <Show when=move || has_photo>
                <i class="fas fa-image text-fg-muted" title="Photo attached"></i>
            </Show>
            <span class=format!(
                "ml-auto inline-block px-2 py-0.5 rounded-full text-xs font-medium {}",
                day_cell_class(&status)
            )>{record.status.clone()}</span>
        </li>
    }
}

#[component]
pub fn AttendancePanel() -> impl IntoView {
    let vm = use_attendance_view_model();

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Attendance"</h1>
                    <p class="text-sm text-fg-muted">{format_date_long(today_local())}</p>
                </div>
                <PunchCard vm=vm />
                <CalendarSection vm=vm />
                <HistorySection vm=vm />
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{employee_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn panel_renders_punch_card_and_calendar() {
        let html = render_to_string(|| {
            provide_auth(Some(employee_user()));
            view! { <AttendancePanel /> }
        });
        assert!(html.contains("Attendance"));
        assert!(html.contains("Today's Shift"));
        assert!(html.contains("Monthly Overview"));
        assert!(html.contains("Punch History"));
    }

    #[test]
    fn legend_statuses_map_to_distinct_colors() {
        let classes: std::collections::HashSet<_> = CALENDAR_LEGEND
            .iter()
            .map(|(status, _)| day_cell_class(status))
            .collect();
        assert_eq!(classes.len(), CALENDAR_LEGEND.len());
        // Unknown statuses share the muted fallback.
        assert_eq!(day_cell_class("holiday"), day_cell_class("none"));
    }
}

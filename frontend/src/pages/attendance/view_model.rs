use chrono::{DateTime, Utc};
use leptos::*;

use crate::api::{
    use_tags, ApiClient, ApiError, AttendanceRecord, Leave, PunchKind, PunchPhoto, ResourceTag,
};
use crate::components::feedback::MessageState;
use crate::pages::attendance::repository;
use crate::pages::attendance::utils::{
    month_grid, next_month, past_office_end, previous_month, shift_countdown, shift_phase,
    MonthGrid, ShiftCountdown, ShiftPhase,
};
use crate::utils::time::{
    current_month, current_year, format_time_of_day, local_time_of_day, month_name, now_utc,
    run_every, today_local,
};

#[derive(Clone)]
pub struct PunchRequest {
    pub kind: PunchKind,
    pub photo: Option<PunchPhoto>,
}

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub now: RwSignal<DateTime<Utc>>,
    pub year: RwSignal<i32>,
    pub month: RwSignal<u32>,
    pub photo: RwSignal<Option<PunchPhoto>>,
    pub office_ended: RwSignal<bool>,
    pub message: RwSignal<MessageState>,
    pub refresh_tick: RwSignal<u64>,
    pub today_resource: Resource<(u64, u64), Result<Option<AttendanceRecord>, ApiError>>,
    pub month_resource: Resource<(u64, i32, u32), Result<Vec<AttendanceRecord>, ApiError>>,
    pub leaves_resource: Resource<u64, Result<Vec<Leave>, ApiError>>,
    pub punch_action: Action<PunchRequest, Result<AttendanceRecord, ApiError>>,
}

fn apply_punch_result(
    result: Option<Result<AttendanceRecord, ApiError>>,
    message: RwSignal<MessageState>,
    photo: RwSignal<Option<PunchPhoto>>,
) {
    if let Some(result) = result {
        match result {
            Ok(record) => {
                let text = match (record.punch_out.as_ref(), record.punch_in.as_ref()) {
                    (Some(at), _) => format!("Punched out at {}.", format_time_of_day(at)),
                    (None, Some(at)) => format!("Punched in at {}.", format_time_of_day(at)),
                    (None, None) => "Attendance recorded.".to_string(),
                };
                message.update(|msg| msg.set_success(text));
                photo.set(None);
            }
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    }
}

impl AttendanceViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let tags = use_tags();

        let now = create_rw_signal(now_utc());
        let year = create_rw_signal(current_year());
        let month = create_rw_signal(current_month());
        let photo = create_rw_signal(None::<PunchPhoto>);
        let office_ended = create_rw_signal(past_office_end(local_time_of_day()));
        let message = create_rw_signal(MessageState::default());
        let refresh_tick = create_rw_signal(0_u64);

        // Countdown tick.
        run_every(1_000, move || now.set(now_utc()));
        // The backend may close an open shift at any time; poll today's
        // record once a minute so the card does not go stale.
        run_every(60_000, move || refresh_tick.update(|tick| *tick += 1));
        // Office-end watcher. Crossing the cutoff forces a refetch because
        // the backend auto-punches-out open shifts at that point.
        run_every(15_000, move || {
            let ended = past_office_end(local_time_of_day());
            if ended && !office_ended.get_untracked() {
                refresh_tick.update(|tick| *tick += 1);
            }
            office_ended.set(ended);
        });

        let today_resource = {
            let api = api.clone();
            create_resource(
                move || (tags.version(ResourceTag::Attendance), refresh_tick.get()),
                move |_| {
                    let api = api.clone();
                    async move { repository::fetch_today(&api).await }
                },
            )
        };

        let month_resource = {
            let api = api.clone();
            create_resource(
                move || {
                    (
                        tags.version(ResourceTag::Attendance),
                        year.get(),
                        month.get(),
                    )
                },
                move |(_, year, month)| {
                    let api = api.clone();
                    async move { repository::fetch_month(&api, year, month).await }
                },
            )
        };

        let leaves_resource = {
            let api = api.clone();
            create_resource(
                move || tags.version(ResourceTag::Leave),
                move |_| {
                    let api = api.clone();
                    async move { repository::fetch_leaves(&api).await }
                },
            )
        };

        let punch_action = create_action(move |request: &PunchRequest| {
            let api = api.clone();
            let request = request.clone();
            async move { repository::punch(&api, tags, request.kind, request.photo).await }
        });

        create_effect(move |_| {
            apply_punch_result(punch_action.value().get(), message, photo);
        });

        Self {
            now,
            year,
            month,
            photo,
            office_ended,
            message,
            refresh_tick,
            today_resource,
            month_resource,
            leaves_resource,
            punch_action,
        }
    }

    pub fn today_record(&self) -> Signal<Option<AttendanceRecord>> {
        let today_resource = self.today_resource;
        Signal::derive(move || today_resource.get().and_then(Result::ok).flatten())
    }

    pub fn phase(&self) -> Signal<ShiftPhase> {
        let record = self.today_record();
        Signal::derive(move || shift_phase(record.get().as_ref()))
    }

    pub fn countdown(&self) -> Signal<ShiftCountdown> {
        let record = self.today_record();
        let phase = self.phase();
        let now = self.now;
        Signal::derive(move || {
            let record = record.get();
            shift_countdown(
                record.as_ref().and_then(|r| r.punch_in),
                record.as_ref().and_then(|r| r.punch_out),
                phase.get(),
                now.get(),
            )
        })
    }

    pub fn calendar(&self) -> Signal<MonthGrid> {
        let month_resource = self.month_resource;
        let leaves_resource = self.leaves_resource;
        let year = self.year;
        let month = self.month;
        Signal::derive(move || {
            let records = month_resource.get().and_then(Result::ok).unwrap_or_default();
            let leaves = leaves_resource.get().and_then(Result::ok).unwrap_or_default();
            month_grid(year.get(), month.get(), &records, &leaves, today_local())
        })
    }

    pub fn month_label(&self) -> Signal<String> {
        let year = self.year;
        let month = self.month;
        Signal::derive(move || format!("{} {}", month_name(month.get()), year.get()))
    }

    pub fn on_punch(&self) -> Callback<PunchKind> {
        let photo = self.photo;
        let message = self.message;
        let punch_action = self.punch_action;
        Callback::new(move |kind: PunchKind| {
            message.update(|msg| msg.clear());
            let photo = match kind {
                PunchKind::CheckIn => photo.get_untracked(),
                PunchKind::CheckOut => None,
            };
            punch_action.dispatch(PunchRequest { kind, photo });
        })
    }

    pub fn on_previous_month(&self) -> impl Fn() + Copy {
        let year = self.year;
        let month = self.month;
        move || {
            let (y, m) = previous_month(year.get_untracked(), month.get_untracked());
            year.set(y);
            month.set(m);
        }
    }

    pub fn on_next_month(&self) -> impl Fn() + Copy {
        let year = self.year;
        let month = self.month;
        move || {
            let (y, m) = next_month(year.get_untracked(), month.get_untracked());
            year.set(y);
            month.set(m);
        }
    }

    pub fn on_clear_photo(&self) -> impl Fn() + Copy {
        let photo = self.photo;
        move || photo.set(None)
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    match use_context::<AttendanceViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AttendanceViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{with_runtime, with_suppressed_resources};

    fn record(punch_in: Option<&str>, punch_out: Option<&str>) -> AttendanceRecord {
        let parse = |s: &str| {
            DateTime::parse_from_rfc3339(s)
                .unwrap()
                .with_timezone(&Utc)
        };
        AttendanceRecord {
            id: "att-1".into(),
            date: parse("2026-08-25T00:00:00Z"),
            punch_in: punch_in.map(parse),
            punch_out: punch_out.map(parse),
            status: "present".into(),
            punch_in_photo: None,
        }
    }

    #[test]
    fn punch_in_reports_the_time_and_drops_the_photo() {
        with_runtime(|| {
            let message = create_rw_signal(MessageState::default());
            let photo = create_rw_signal(Some(PunchPhoto {
                bytes: vec![1, 2, 3],
                filename: "proof.png".into(),
                mime_type: "image/png".into(),
            }));

            apply_punch_result(
                Some(Ok(record(Some("2026-08-25T09:00:00Z"), None))),
                message,
                photo,
            );

            assert!(photo.get().is_none());
            let success = message.get().success.unwrap();
            assert!(success.starts_with("Punched in at"));
        });
    }

    #[test]
    fn punch_failure_keeps_the_photo_for_a_retry() {
        with_runtime(|| {
            let message = create_rw_signal(MessageState::default());
            let photo = create_rw_signal(Some(PunchPhoto {
                bytes: vec![1],
                filename: "proof.jpg".into(),
                mime_type: "image/jpeg".into(),
            }));

            apply_punch_result(
                Some(Err(ApiError::validation("Already punched out today"))),
                message,
                photo,
            );

            assert!(photo.get().is_some());
            assert!(message.get().error.is_some());
        });
    }

    #[test]
    fn month_navigation_wraps_across_years() {
        with_suppressed_resources(|| {
            let vm = AttendanceViewModel::new();
            vm.year.set(2026);
            vm.month.set(1);

            vm.on_previous_month()();
            assert_eq!((vm.year.get(), vm.month.get()), (2025, 12));

            vm.on_next_month()();
            assert_eq!((vm.year.get(), vm.month.get()), (2026, 1));
            assert_eq!(vm.month_label().get(), "January 2026");
        });
    }
}

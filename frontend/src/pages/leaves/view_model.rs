use leptos::*;

use crate::api::{
    use_tags, ApiClient, ApiError, CreateLeaveRequest, Leave, MessageResponse, ResourceTag,
};
use crate::components::feedback::MessageState;
use crate::pages::leaves::repository;
use crate::pages::leaves::utils::{wants_apply_action, LeaveFormState};
use crate::utils::navigation;

#[derive(Clone)]
pub struct StatusChange {
    pub id: String,
    pub status: &'static str,
}

#[derive(Clone, Copy)]
pub struct LeavesViewModel {
    pub form: LeaveFormState,
    pub form_open: RwSignal<bool>,
    pub pending_delete: RwSignal<Option<Leave>>,
    pub message: RwSignal<MessageState>,
    pub list_resource: Resource<u64, Result<Vec<Leave>, ApiError>>,
    pub submit_action: Action<CreateLeaveRequest, Result<Leave, ApiError>>,
    pub status_action: Action<StatusChange, Result<Leave, ApiError>>,
    pub delete_action: Action<String, Result<MessageResponse, ApiError>>,
}

fn apply_submit_result(
    result: Option<Result<Leave, ApiError>>,
    message: RwSignal<MessageState>,
    form_open: RwSignal<bool>,
    form: LeaveFormState,
) {
    if let Some(result) = result {
        match result {
            Ok(_) => {
                message.update(|msg| msg.set_success("Leave request submitted."));
                form_open.set(false);
                form.reset();
            }
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    }
}

fn apply_status_result(result: Option<Result<Leave, ApiError>>, message: RwSignal<MessageState>) {
    if let Some(result) = result {
        match result {
            Ok(leave) => {
                let text = if leave.status.eq_ignore_ascii_case("approved") {
                    "Request approved."
                } else {
                    "Request rejected."
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
    pending_delete: RwSignal<Option<Leave>>,
) {
    if let Some(result) = result {
        match result {
            Ok(response) => message.update(|msg| msg.set_success(response.message)),
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
        pending_delete.set(None);
    }
}

impl LeavesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let tags = use_tags();

        let form = LeaveFormState::default();
        let form_open = create_rw_signal(wants_apply_action(&navigation::current_search()));
        let pending_delete = create_rw_signal(None::<Leave>);
        let message = create_rw_signal(MessageState::default());

        let list_resource = {
            let api = api.clone();
            create_resource(
                move || tags.version(ResourceTag::Leave),
                move |_| {
                    let api = api.clone();
                    async move { repository::fetch_all(&api).await }
                },
            )
        };

        let submit_action = {
            let api = api.clone();
            create_action(move |payload: &CreateLeaveRequest| {
                let api = api.clone();
                let payload = payload.clone();
                async move { repository::submit(&api, tags, payload).await }
            })
        };

        let status_action = {
            let api = api.clone();
            create_action(move |change: &StatusChange| {
                let api = api.clone();
                let change = change.clone();
                async move { repository::set_status(&api, tags, &change.id, change.status).await }
            })
        };

        let delete_action = create_action(move |id: &String| {
            let api = api.clone();
            let id = id.clone();
            async move { repository::remove(&api, tags, &id).await }
        });

        create_effect(move |_| {
            apply_submit_result(submit_action.value().get(), message, form_open, form);
        });

        create_effect(move |_| {
            apply_status_result(status_action.value().get(), message);
        });

        create_effect(move |_| {
            apply_delete_result(delete_action.value().get(), message, pending_delete);
        });

        Self {
            form,
            form_open,
            pending_delete,
            message,
            list_resource,
            submit_action,
            status_action,
            delete_action,
        }
    }

    pub fn on_open_form(&self) -> impl Fn() + Copy {
        let form = self.form;
        let form_open = self.form_open;
        let message = self.message;
        move || {
            form.reset();
            message.update(|msg| msg.clear());
            form_open.set(true);
        }
    }

    pub fn on_close_form(&self) -> impl Fn() + Copy {
        let form = self.form;
        let form_open = self.form_open;
        move || {
            form_open.set(false);
            form.reset();
        }
    }

    pub fn on_submit(&self) -> impl Fn() + Copy {
        let form = self.form;
        let message = self.message;
        let submit_action = self.submit_action;
        move || match form.to_payload() {
            Ok(payload) => {
                message.update(|msg| msg.clear());
                submit_action.dispatch(payload);
            }
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    }

    pub fn on_approve(&self) -> Callback<Leave> {
        let status_action = self.status_action;
        Callback::new(move |leave: Leave| {
            status_action.dispatch(StatusChange {
                id: leave.id,
                status: "approved",
            })
        })
    }

    pub fn on_reject(&self) -> Callback<Leave> {
        let status_action = self.status_action;
        Callback::new(move |leave: Leave| {
            status_action.dispatch(StatusChange {
                id: leave.id,
                status: "rejected",
            })
        })
    }

    pub fn on_request_delete(&self) -> Callback<Leave> {
        let pending_delete = self.pending_delete;
        Callback::new(move |leave: Leave| pending_delete.set(Some(leave)))
    }

    pub fn on_cancel_delete(&self) -> impl Fn() + Copy {
        let pending_delete = self.pending_delete;
        move || pending_delete.set(None)
    }

    pub fn on_confirm_delete(&self) -> impl Fn() + Copy {
        let pending_delete = self.pending_delete;
        let delete_action = self.delete_action;
        move || {
            if let Some(leave) = pending_delete.get_untracked() {
                delete_action.dispatch(leave.id);
            }
        }
    }
}

pub fn use_leaves_view_model() -> LeavesViewModel {
    match use_context::<LeavesViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = LeavesViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{with_runtime, with_suppressed_resources};
    use chrono::{DateTime, Utc};

    fn sample_leave(status: &str) -> Leave {
        let parse = |s: &str| {
            DateTime::parse_from_rfc3339(s)
                .unwrap()
                .with_timezone(&Utc)
        };
        Leave {
            id: "l1".into(),
            employee: None,
            leave_type: "vacation".into(),
            start_date: parse("2026-08-10T00:00:00Z"),
            end_date: parse("2026-08-12T00:00:00Z"),
            reason: None,
            status: status.into(),
            created_at: None,
        }
    }

    #[test]
    fn submission_closes_and_resets_the_form() {
        with_runtime(|| {
            let message = create_rw_signal(MessageState::default());
            let form_open = create_rw_signal(true);
            let form = LeaveFormState::default();
            form.start_date_signal().set("2026-08-10".to_string());

            apply_submit_result(Some(Ok(sample_leave("pending"))), message, form_open, form);

            assert!(!form_open.get());
            assert_eq!(form.start_date_signal().get(), "");
            assert_eq!(
                message.get().success.as_deref(),
                Some("Leave request submitted.")
            );
        });
    }

    #[test]
    fn status_result_names_the_decision() {
        with_runtime(|| {
            let message = create_rw_signal(MessageState::default());

            apply_status_result(Some(Ok(sample_leave("approved"))), message);
            assert_eq!(message.get().success.as_deref(), Some("Request approved."));

            apply_status_result(Some(Ok(sample_leave("rejected"))), message);
            assert_eq!(message.get().success.as_deref(), Some("Request rejected."));
        });
    }

    #[test]
    fn delete_request_round_trips_the_dialog() {
        with_suppressed_resources(|| {
            let vm = LeavesViewModel::new();
            vm.on_request_delete().call(sample_leave("pending"));
            assert!(vm.pending_delete.get().is_some());

            vm.on_cancel_delete()();
            assert!(vm.pending_delete.get().is_none());
        });
    }

    #[test]
    fn invalid_form_short_circuits_before_the_network() {
        with_suppressed_resources(|| {
            let vm = LeavesViewModel::new();
            vm.on_submit()();
            assert!(vm.message.get().error.is_some());
            assert_eq!(vm.submit_action.version().get(), 0);
        });
    }
}

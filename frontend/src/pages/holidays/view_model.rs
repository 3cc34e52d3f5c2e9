use leptos::*;

use crate::api::{
    use_tags, ApiClient, ApiError, Holiday, HolidayPayload, MessageResponse, ResourceTag,
};
use crate::components::feedback::MessageState;
use crate::pages::holidays::repository;
use crate::pages::holidays::utils::HolidayFormState;

#[derive(Clone)]
pub struct SavePayload {
    pub id: Option<String>,
    pub payload: HolidayPayload,
}

#[derive(Clone, Copy)]
pub struct HolidaysViewModel {
    pub form: HolidayFormState,
    pub form_open: RwSignal<bool>,
    pub editing: RwSignal<Option<Holiday>>,
    pub pending_delete: RwSignal<Option<Holiday>>,
    pub message: RwSignal<MessageState>,
    pub list_resource: Resource<u64, Result<Vec<Holiday>, ApiError>>,
    pub save_action: Action<SavePayload, Result<Holiday, ApiError>>,
    pub delete_action: Action<String, Result<MessageResponse, ApiError>>,
}

fn apply_save_result(
    result: Option<Result<Holiday, ApiError>>,
    was_edit: bool,
    message: RwSignal<MessageState>,
    form_open: RwSignal<bool>,
    editing: RwSignal<Option<Holiday>>,
    form: HolidayFormState,
) {
    if let Some(result) = result {
        match result {
            Ok(holiday) => {
                let text = if was_edit {
                    format!("{} updated.", holiday.name)
                } else {
                    format!("{} added.", holiday.name)
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
    pending_delete: RwSignal<Option<Holiday>>,
) {
    if let Some(result) = result {
        match result {
            Ok(response) => message.update(|msg| msg.set_success(response.message)),
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
        pending_delete.set(None);
    }
}

impl HolidaysViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let tags = use_tags();

        let form = HolidayFormState::default();
        let form_open = create_rw_signal(false);
        let editing = create_rw_signal(None::<Holiday>);
        let pending_delete = create_rw_signal(None::<Holiday>);
        let message = create_rw_signal(MessageState::default());

        let list_resource = {
            let api = api.clone();
            create_resource(
                move || tags.version(ResourceTag::Holiday),
                move |_| {
                    let api = api.clone();
                    async move { repository::fetch_all(&api).await }
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
            form,
            form_open,
            editing,
            pending_delete,
            message,
            list_resource,
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

    pub fn on_open_edit(&self) -> Callback<Holiday> {
        let form = self.form;
        let form_open = self.form_open;
        let editing = self.editing;
        let message = self.message;
        Callback::new(move |holiday: Holiday| {
            form.load_from_holiday(&holiday);
            editing.set(Some(holiday));
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
                    id: editing.get_untracked().map(|holiday| holiday.id),
                    payload,
                });
            }
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    }

    pub fn on_request_delete(&self) -> Callback<Holiday> {
        let pending_delete = self.pending_delete;
        Callback::new(move |holiday: Holiday| pending_delete.set(Some(holiday)))
    }

    pub fn on_cancel_delete(&self) -> impl Fn() + Copy {
        let pending_delete = self.pending_delete;
        move || pending_delete.set(None)
    }

    pub fn on_confirm_delete(&self) -> impl Fn() + Copy {
        let pending_delete = self.pending_delete;
        let delete_action = self.delete_action;
        move || {
            if let Some(holiday) = pending_delete.get_untracked() {
                delete_action.dispatch(holiday.id);
            }
        }
    }
}

pub fn use_holidays_view_model() -> HolidaysViewModel {
    match use_context::<HolidaysViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = HolidaysViewModel::new();
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

    fn sample_holiday(name: &str) -> Holiday {
        Holiday {
            id: "h1".into(),
            name: name.into(),
            date: DateTime::parse_from_rfc3339("2026-08-14T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            description: Some("Office closed".into()),
        }
    }

    #[test]
    fn successful_save_closes_the_form_and_reports() {
        with_runtime(|| {
            let message = create_rw_signal(MessageState::default());
            let form_open = create_rw_signal(true);
            let editing = create_rw_signal(None::<Holiday>);
            let form = HolidayFormState::default();

            apply_save_result(
                Some(Ok(sample_holiday("Founding Day"))),
                false,
                message,
                form_open,
                editing,
                form,
            );

            assert!(!form_open.get());
            assert_eq!(
                message.get().success.as_deref(),
                Some("Founding Day added.")
            );
        });
    }

    #[test]
    fn failed_save_keeps_the_form_open() {
        with_runtime(|| {
            let message = create_rw_signal(MessageState::default());
            let form_open = create_rw_signal(true);
            let editing = create_rw_signal(Some(sample_holiday("Founding Day")));
            let form = HolidayFormState::default();

            apply_save_result(
                Some(Err(ApiError::validation("Holiday already exists"))),
                true,
                message,
                form_open,
                editing,
                form,
            );

            assert!(form_open.get());
            assert!(editing.get().is_some());
            assert!(message.get().error.is_some());
        });
    }

    #[test]
    fn delete_clears_the_pending_row_either_way() {
        with_runtime(|| {
            let message = create_rw_signal(MessageState::default());
            let pending_delete = create_rw_signal(Some(sample_holiday("Founding Day")));

            apply_delete_result(
                Some(Err(ApiError::validation("Not authorized"))),
                message,
                pending_delete,
            );

            assert!(pending_delete.get().is_none());
            assert!(message.get().error.is_some());
        });
    }

    #[test]
    fn edit_selection_preloads_the_form() {
        with_suppressed_resources(|| {
            let vm = HolidaysViewModel::new();
            vm.on_open_edit().call(sample_holiday("Christmas"));

            assert!(vm.form_open.get());
            assert_eq!(vm.form.name_signal().get(), "Christmas");
            assert_eq!(vm.form.date_signal().get(), "2026-08-14");

            vm.on_close_form()();
            assert!(!vm.form_open.get());
            assert_eq!(vm.form.name_signal().get(), "");
        });
    }
}

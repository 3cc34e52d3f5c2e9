use leptos::*;

use crate::api::{
    use_tags, Announcement, AnnouncementPayload, ApiClient, ApiError, MessageResponse, ResourceTag,
};
use crate::components::feedback::MessageState;
use crate::pages::announcements::repository;
use crate::pages::announcements::utils::AnnouncementFormState;

#[derive(Clone)]
pub struct SavePayload {
    pub id: Option<String>,
    pub payload: AnnouncementPayload,
}

#[derive(Clone, Copy)]
pub struct AnnouncementsViewModel {
    pub form: AnnouncementFormState,
    pub form_open: RwSignal<bool>,
    pub editing: RwSignal<Option<Announcement>>,
    pub pending_delete: RwSignal<Option<Announcement>>,
    pub message: RwSignal<MessageState>,
    pub list_resource: Resource<u64, Result<Vec<Announcement>, ApiError>>,
    pub save_action: Action<SavePayload, Result<Announcement, ApiError>>,
    pub delete_action: Action<String, Result<MessageResponse, ApiError>>,
}

fn apply_save_result(
    result: Option<Result<Announcement, ApiError>>,
    was_edit: bool,
    message: RwSignal<MessageState>,
    form_open: RwSignal<bool>,
    editing: RwSignal<Option<Announcement>>,
    form: AnnouncementFormState,
) {
    if let Some(result) = result {
        match result {
            Ok(_) => {
                let text = if was_edit {
                    "Announcement updated."
                } else {
                    "Announcement posted."
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
    pending_delete: RwSignal<Option<Announcement>>,
) {
    if let Some(result) = result {
        match result {
            Ok(response) => message.update(|msg| msg.set_success(response.message)),
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
        pending_delete.set(None);
    }
}

impl AnnouncementsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let tags = use_tags();

        let form = AnnouncementFormState::default();
        let form_open = create_rw_signal(false);
        let editing = create_rw_signal(None::<Announcement>);
        let pending_delete = create_rw_signal(None::<Announcement>);
        let message = create_rw_signal(MessageState::default());

        let list_resource = {
            let api = api.clone();
            create_resource(
                move || tags.version(ResourceTag::Announcement),
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

    pub fn on_open_edit(&self) -> Callback<Announcement> {
        let form = self.form;
        let form_open = self.form_open;
        let editing = self.editing;
        let message = self.message;
        Callback::new(move |announcement: Announcement| {
            form.load_from_announcement(&announcement);
            editing.set(Some(announcement));
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
                    id: editing.get_untracked().map(|announcement| announcement.id),
                    payload,
                });
            }
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    }

    pub fn on_request_delete(&self) -> Callback<Announcement> {
        let pending_delete = self.pending_delete;
        Callback::new(move |announcement: Announcement| pending_delete.set(Some(announcement)))
    }

    pub fn on_cancel_delete(&self) -> impl Fn() + Copy {
        let pending_delete = self.pending_delete;
        move || pending_delete.set(None)
    }

    pub fn on_confirm_delete(&self) -> impl Fn() + Copy {
        let pending_delete = self.pending_delete;
        let delete_action = self.delete_action;
        move || {
            if let Some(announcement) = pending_delete.get_untracked() {
                delete_action.dispatch(announcement.id);
            }
        }
    }
}

pub fn use_announcements_view_model() -> AnnouncementsViewModel {
    match use_context::<AnnouncementsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AnnouncementsViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

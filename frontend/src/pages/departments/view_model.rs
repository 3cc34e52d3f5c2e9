use leptos::*;

use crate::api::{
    use_tags, ApiClient, ApiError, Department, DepartmentPayload, MessageResponse, ResourceTag,
};
use crate::components::feedback::MessageState;
use crate::pages::departments::repository;
use crate::pages::departments::utils::DepartmentFormState;

#[derive(Clone)]
pub struct SavePayload {
    pub id: Option<String>,
    pub payload: DepartmentPayload,
}

#[derive(Clone, Copy)]
pub struct DepartmentsViewModel {
    pub form: DepartmentFormState,
    pub form_open: RwSignal<bool>,
    pub editing: RwSignal<Option<Department>>,
    pub pending_delete: RwSignal<Option<Department>>,
    pub message: RwSignal<MessageState>,
    pub list_resource: Resource<u64, Result<Vec<Department>, ApiError>>,
    pub save_action: Action<SavePayload, Result<Department, ApiError>>,
    pub toggle_action: Action<String, Result<Department, ApiError>>,
    pub delete_action: Action<String, Result<MessageResponse, ApiError>>,
}

fn apply_save_result(
    result: Option<Result<Department, ApiError>>,
    was_edit: bool,
    message: RwSignal<MessageState>,
    form_open: RwSignal<bool>,
    editing: RwSignal<Option<Department>>,
    form: DepartmentFormState,
) {
    if let Some(result) = result {
        match result {
            Ok(department) => {
                let text = if was_edit {
                    format!("{} updated.", department.name)
                } else {
                    format!("{} created.", department.name)
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

fn apply_toggle_result(
    result: Option<Result<Department, ApiError>>,
    message: RwSignal<MessageState>,
) {
    if let Some(result) = result {
        match result {
            Ok(department) => {
                let text = if department.is_active {
                    format!("{} activated.", department.name)
                } else {
                    format!("{} deactivated.", department.name)
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
    pending_delete: RwSignal<Option<Department>>,
) {
    if let Some(result) = result {
        match result {
            Ok(response) => message.update(|msg| msg.set_success(response.message)),
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
        pending_delete.set(None);
    }
}

impl DepartmentsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let tags = use_tags();

        let form = DepartmentFormState::default();
        let form_open = create_rw_signal(false);
        let editing = create_rw_signal(None::<Department>);
        let pending_delete = create_rw_signal(None::<Department>);
        let message = create_rw_signal(MessageState::default());

        let list_resource = {
            let api = api.clone();
            create_resource(
                move || tags.version(ResourceTag::Department),
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

        let toggle_action = {
            let api = api.clone();
            create_action(move |id: &String| {
                let api = api.clone();
                let id = id.clone();
                async move { repository::toggle_status(&api, tags, &id).await }
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
            apply_toggle_result(toggle_action.value().get(), message);
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
            toggle_action,
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

    pub fn on_open_edit(&self) -> Callback<Department> {
        let form = self.form;
        let form_open = self.form_open;
        let editing = self.editing;
        let message = self.message;
        Callback::new(move |department: Department| {
            form.load_from_department(&department);
            editing.set(Some(department));
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
                    id: editing.get_untracked().map(|department| department.id),
                    payload,
                });
            }
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    }

    pub fn on_toggle_status(&self) -> Callback<Department> {
        let toggle_action = self.toggle_action;
        Callback::new(move |department: Department| toggle_action.dispatch(department.id))
    }

    pub fn on_request_delete(&self) -> Callback<Department> {
        let pending_delete = self.pending_delete;
        Callback::new(move |department: Department| pending_delete.set(Some(department)))
    }

    pub fn on_cancel_delete(&self) -> impl Fn() + Copy {
        let pending_delete = self.pending_delete;
        move || pending_delete.set(None)
    }

    pub fn on_confirm_delete(&self) -> impl Fn() + Copy {
        let pending_delete = self.pending_delete;
        let delete_action = self.delete_action;
        move || {
            if let Some(department) = pending_delete.get_untracked() {
                delete_action.dispatch(department.id);
            }
        }
    }
}

pub fn use_departments_view_model() -> DepartmentsViewModel {
    match use_context::<DepartmentsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DepartmentsViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

use leptos::*;

use crate::api::{
    use_tags, ApiClient, ApiError, AuthUser, MessageResponse, ResourceTag, UpdateProfileRequest,
};
use crate::components::feedback::MessageState;
use crate::pages::profile::repository;
use crate::pages::profile::utils::{PasswordFormState, ProfileFormState};
use crate::state::auth::{self, use_auth, AuthState};

#[derive(Clone, Copy)]
pub struct ProfileViewModel {
    pub form: ProfileFormState,
    pub password_form: PasswordFormState,
    pub editing: RwSignal<bool>,
    pub profile_message: RwSignal<MessageState>,
    pub password_message: RwSignal<MessageState>,
    pub profile_resource: Resource<u64, Result<AuthUser, ApiError>>,
    pub save_action: Action<UpdateProfileRequest, Result<AuthUser, ApiError>>,
    pub change_password_action: Action<(String, String), Result<MessageResponse, ApiError>>,
}

fn apply_save_result(
    result: Option<Result<AuthUser, ApiError>>,
    set_auth: WriteSignal<AuthState>,
    profile_message: RwSignal<MessageState>,
    editing: RwSignal<bool>,
) {
    if let Some(result) = result {
        match result {
            Ok(user) => {
                auth::profile_updated(set_auth, user);
                profile_message.update(|msg| msg.set_success("Profile updated."));
                editing.set(false);
            }
            Err(err) => profile_message.update(|msg| msg.set_error(err)),
        }
    }
}

fn apply_password_result(
    result: Option<Result<MessageResponse, ApiError>>,
    password_message: RwSignal<MessageState>,
    password_form: PasswordFormState,
) {
    if let Some(result) = result {
        match result {
            Ok(response) => {
                password_message.update(|msg| msg.set_success(response.message));
                password_form.reset();
            }
            Err(err) => password_message.update(|msg| msg.set_error(err)),
        }
    }
}

/// A fetch failure keeps the cached session; expired tokens are already torn
/// down by the client itself.
fn apply_refresh_result(
    result: Option<Result<AuthUser, ApiError>>,
    set_auth: WriteSignal<AuthState>,
) {
    if let Some(Ok(user)) = result {
        auth::profile_updated(set_auth, user);
    }
}

impl ProfileViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let tags = use_tags();
        let (auth, set_auth) = use_auth();

        let form = ProfileFormState::default();
        let password_form = PasswordFormState::default();
        let editing = create_rw_signal(false);
        let profile_message = create_rw_signal(MessageState::default());
        let password_message = create_rw_signal(MessageState::default());

        // Seed the form from whatever profile the session already holds.
        create_effect(move |_| {
            if let Some(user) = auth.get().user {
                if !editing.get_untracked() {
                    form.load_from_user(&user);
                }
            }
        });

        // Pull a fresh profile on mount and whenever the auth tag turns over,
        // so a reload does not keep showing a stale cached copy.
        let profile_resource = {
            let api = api.clone();
            create_resource(
                move || tags.version(ResourceTag::Auth),
                move |_| {
                    let api = api.clone();
                    async move { repository::fetch_profile(&api).await }
                },
            )
        };

        create_effect(move |_| {
            apply_refresh_result(profile_resource.get(), set_auth);
        });

        let save_action = {
            let api = api.clone();
            create_action(move |payload: &UpdateProfileRequest| {
                let api = api.clone();
                let payload = payload.clone();
                async move { repository::save_profile(&api, tags, payload).await }
            })
        };

        let change_password_action = create_action(move |(current, new): &(String, String)| {
            let api = api.clone();
            let current = current.clone();
            let new = new.clone();
            async move { repository::change_password(&api, &current, &new).await }
        });

        create_effect(move |_| {
            apply_save_result(
                save_action.value().get(),
                set_auth,
                profile_message,
                editing,
            );
        });

        create_effect(move |_| {
            apply_password_result(
                change_password_action.value().get(),
                password_message,
                password_form,
            );
        });

        Self {
            form,
            password_form,
            editing,
            profile_message,
            password_message,
            profile_resource,
            save_action,
            change_password_action,
        }
    }

    pub fn on_save(&self) -> impl Fn() + Copy {
        let form = self.form;
        let profile_message = self.profile_message;
        let save_action = self.save_action;
        move || match form.to_payload() {
            Ok(payload) => {
                profile_message.update(|msg| msg.clear());
                save_action.dispatch(payload);
            }
            Err(err) => profile_message.update(|msg| msg.set_error(err)),
        }
    }

    pub fn on_change_password(&self) -> impl Fn() + Copy {
        let password_form = self.password_form;
        let password_message = self.password_message;
        let change_password_action = self.change_password_action;
        move || match password_form.to_payload() {
            Ok(pair) => {
                password_message.update(|msg| msg.clear());
                change_password_action.dispatch(pair);
            }
            Err(err) => password_message.update(|msg| msg.set_error(err)),
        }
    }

    pub fn on_cancel_edit(&self) -> impl Fn() + Copy {
        let editing = self.editing;
        let profile_message = self.profile_message;
        move || {
            editing.set(false);
            profile_message.update(|msg| msg.clear());
        }
    }
}

pub fn use_profile_view_model() -> ProfileViewModel {
    match use_context::<ProfileViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = ProfileViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{employee_user, provide_auth};
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn save_result_updates_session_and_leaves_edit_mode() {
        with_runtime(|| {
            let (auth, set_auth) = provide_auth(Some(employee_user()));
            let profile_message = create_rw_signal(MessageState::default());
            let editing = create_rw_signal(true);

            let renamed = AuthUser {
                name: "Renamed".into(),
                ..employee_user()
            };
            apply_save_result(Some(Ok(renamed)), set_auth, profile_message, editing);

            assert_eq!(auth.get().user.unwrap().name, "Renamed");
            assert!(!editing.get());
            assert_eq!(
                profile_message.get().success.as_deref(),
                Some("Profile updated.")
            );
        });
    }

    #[test]
    fn failed_save_keeps_edit_mode_and_reports() {
        with_runtime(|| {
            let (_auth, set_auth) = provide_auth(Some(employee_user()));
            let profile_message = create_rw_signal(MessageState::default());
            let editing = create_rw_signal(true);

            apply_save_result(
                Some(Err(ApiError::request_failed("offline"))),
                set_auth,
                profile_message,
                editing,
            );

            assert!(editing.get());
            assert_eq!(profile_message.get().error.unwrap().error, "offline");
        });
    }

    #[test]
    fn refreshed_profile_replaces_the_cached_session_copy() {
        with_runtime(|| {
            let (auth, set_auth) = provide_auth(Some(employee_user()));

            let fresh = AuthUser {
                phone: Some("555-0199".into()),
                ..employee_user()
            };
            apply_refresh_result(Some(Ok(fresh)), set_auth);
            assert_eq!(auth.get().user.unwrap().phone.as_deref(), Some("555-0199"));

            // A failed refresh leaves the session alone.
            apply_refresh_result(Some(Err(ApiError::request_failed("offline"))), set_auth);
            assert!(auth.get().user.is_some());
        });
    }

    #[test]
    fn password_result_clears_the_form_on_success() {
        with_runtime(|| {
            let password_message = create_rw_signal(MessageState::default());
            let password_form = PasswordFormState::default();
            password_form.current_signal().set("old123".into());
            password_form.new_signal().set("secret1".into());

            apply_password_result(
                Some(Ok(MessageResponse {
                    message: "Password changed".into(),
                })),
                password_message,
                password_form,
            );

            assert_eq!(password_form.current_signal().get(), "");
            assert_eq!(
                password_message.get().success.as_deref(),
                Some("Password changed")
            );
        });
    }
}

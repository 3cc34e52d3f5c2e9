use leptos::ev::SubmitEvent;
use leptos::*;

use crate::api::ApiError;
use crate::components::error::InlineErrorMessage;
use crate::components::forms::{SelectField, TextField};
use crate::pages::register::utils::{role_options, RegisterFormState};
use crate::state::auth;
use crate::utils::navigation;

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let form = RegisterFormState::default();
    let error = create_rw_signal(None::<ApiError>);

    let register_action = auth::use_register_action();
    let pending = register_action.pending();

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                // Registration signs the new account in, straight to work.
                Ok(_) => {
                    error.set(None);
                    navigation::redirect_to("/dashboard");
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match form.to_payload() {
            Ok(request) => {
                error.set(None);
                register_action.dispatch(request);
            }
            Err(err) => error.set(Some(err)),
        }
    };

    view! {
        <div class="min-h-screen bg-surface flex items-center justify-center px-4 py-12">
            <div class="w-full max-w-md space-y-6">
                <div class="text-center">
                    <i class="fas fa-people-group text-action-primary-bg text-4xl"></i>
                    <h1 class="mt-3 text-2xl font-bold text-fg">"Create your HRM account"</h1>
                    <p class="mt-1 text-sm text-fg-muted">"Takes less than a minute"</p>
                </div>

                <div class="bg-surface-elevated shadow rounded-lg border border-border p-6 space-y-4">
                    <InlineErrorMessage error=error.read_only().into() />
                    <form class="space-y-4" on:submit=handle_submit>
                        <TextField
                            label="Full name"
                            value=form.name_signal()
                            placeholder="Jane Doe"
                            required=true
                        />
                        <TextField
                            label="Email"
                            value=form.email_signal()
                            input_type="email"
                            placeholder="you@company.com"
                            required=true
                        />
                        <TextField
                            label="Password"
                            value=form.password_signal()
                            input_type="password"
                            required=true
                        />
                        <TextField
                            label="Confirm password"
                            value=form.confirm_password_signal()
                            input_type="password"
                            required=true
                        />
                        <SelectField label="Role" value=form.role_signal() options=role_options() />
                        <button
                            type="submit"
                            class="w-full inline-flex justify-center items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                            disabled=move || pending.get()
                        >
                            {move || if pending.get() { "Creating account..." } else { "Create account" }}
                        </button>
                    </form>
                    <p class="text-sm text-fg-muted text-center">
                        "Already have an account? "
                        <a href="/login" class="text-action-primary-bg hover:underline">
                            "Sign in"
                        </a>
                    </p>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_auth;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn register_panel_renders_every_field() {
        let html = render_to_string(move || {
            provide_auth(None);
            view! { <RegisterPanel /> }
        });
        assert!(html.contains("Create your HRM account"));
        assert!(html.contains("Full name"));
        assert!(html.contains("Confirm password"));
        assert!(html.contains("Role"));
        assert!(html.contains("/login"));
    }
}

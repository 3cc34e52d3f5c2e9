use leptos::ev::SubmitEvent;
use leptos::*;

use crate::api::{ApiClient, ApiError};
use crate::components::error::InlineErrorMessage;
use crate::components::forms::TextField;
use crate::components::layout::SuccessMessage;
use crate::pages::login::utils::{self, DEMO_ACCOUNTS};
use crate::state::auth;
use crate::utils::navigation;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let show_reset = create_rw_signal(false);
    let reset_email = create_rw_signal(String::new());
    let reset_notice = create_rw_signal(None::<String>);

    let login_action = auth::use_login_action();
    let pending = login_action.pending();

    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let reset_action = create_action(move |email: &String| {
        let api = api.clone();
        let email = email.clone();
        async move { api.forgot_password(&email).await }
    });
    let reset_pending = reset_action.pending();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    navigation::redirect_to("/dashboard");
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = reset_action.value().get() {
            match result {
                Ok(response) => {
                    error.set(None);
                    reset_notice.set(Some(response.message));
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
        match utils::validate_credentials(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => {
                error.set(None);
                login_action.dispatch(request);
            }
            Err(err) => error.set(Some(err)),
        }
    };

    let handle_reset_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if reset_pending.get_untracked() {
            return;
        }
        match utils::validate_reset_email(&reset_email.get_untracked()) {
            Ok(address) => {
                error.set(None);
                reset_notice.set(None);
                reset_action.dispatch(address);
            }
            Err(err) => error.set(Some(err)),
        }
    };

    let fill_demo = move |demo_email: &'static str, demo_password: &'static str| {
        email.set(demo_email.to_string());
        password.set(demo_password.to_string());
    };

    view! {
        <div class="min-h-screen bg-surface flex items-center justify-center px-4 py-12">
            <div class="w-full max-w-md space-y-6">
                <div class="text-center">
                    <i class="fas fa-people-group text-action-primary-bg text-4xl"></i>
                    <h1 class="mt-3 text-2xl font-bold text-fg">"Sign in to HRM"</h1>
                    <p class="mt-1 text-sm text-fg-muted">"Manage your workforce in one place"</p>
                </div>

                <div class="bg-surface-elevated shadow rounded-lg border border-border p-6 space-y-4">
                    <InlineErrorMessage error=error.read_only().into() />
                    {move || reset_notice.get().map(|notice| view! { <SuccessMessage message=notice /> })}

                    <Show
                        when=move || !show_reset.get()
                        fallback=move || {
                            view! {
                                <form class="space-y-4" on:submit=handle_reset_submit>
                                    <TextField
                                        label="Email"
                                        value=reset_email
                                        input_type="email"
                                        placeholder="you@company.com"
                                        required=true
                                    />
                                    <button
                                        type="submit"
                                        class="w-full inline-flex justify-center items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                                        disabled=move || reset_pending.get()
                                    >
                                        {move || if reset_pending.get() { "Sending..." } else { "Send reset link" }}
                                    </button>
                                    <button
                                        type="button"
                                        class="w-full text-sm text-fg-muted hover:text-fg"
                                        on:click=move |_| {
                                            show_reset.set(false);
                                            reset_notice.set(None);
                                        }
                                    >
                                        "Back to sign in"
                                    </button>
                                </form>
                            }
                        }
                    >
                        <form class="space-y-4" on:submit=handle_submit>
                            <TextField
                                label="Email"
                                value=email
                                input_type="email"
                                placeholder="you@company.com"
                                required=true
                            />
                            <TextField
                                label="Password"
                                value=password
                                input_type="password"
                                required=true
                            />
                            <button
                                type="submit"
                                class="w-full inline-flex justify-center items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                                disabled=move || pending.get()
                            >
                                {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                            </button>
                        </form>
                        <div class="flex items-center justify-between text-sm">
                            <button
                                type="button"
                                class="text-action-primary-bg hover:underline"
                                on:click=move |_| show_reset.set(true)
                            >
                                "Forgot password?"
                            </button>
                            <a href="/register" class="text-action-primary-bg hover:underline">
                                "Create an account"
                            </a>
                        </div>
                    </Show>
                </div>

                <div class="bg-surface-muted rounded-lg border border-border p-4">
                    <p class="text-xs font-semibold uppercase tracking-wide text-fg-muted mb-2">
                        "Demo accounts"
                    </p>
                    <div class="space-y-1">
                        {DEMO_ACCOUNTS
                            .iter()
                            .map(|(label, demo_email, demo_password)| {
                                view! {
                                    <button
                                        type="button"
                                        class="w-full flex justify-between text-left text-sm text-fg-muted hover:text-fg px-2 py-1 rounded hover:bg-surface-elevated"
                                        on:click=move |_| fill_demo(demo_email, demo_password)
                                    >
                                        <span class="font-medium">{*label}</span>
                                        <span>{format!("{demo_email} / {demo_password}")}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
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
    fn login_panel_renders_form_and_demo_accounts() {
        let html = render_to_string(move || {
            provide_auth(None);
            view! { <LoginPanel /> }
        });
        assert!(html.contains("Sign in to HRM"));
        assert!(html.contains("admin@company.com / admin123"));
        assert!(html.contains("employee@company.com / emp123"));
        assert!(html.contains("Forgot password?"));
        assert!(html.contains("/register"));
    }
}

use leptos::ev::SubmitEvent;
use leptos::*;

use crate::components::feedback::FeedbackBanner;
use crate::components::forms::TextField;
use crate::components::layout::Layout;
use crate::pages::profile::view_model::use_profile_view_model;
use crate::state::auth::use_auth;

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let vm = use_profile_view_model();
    let (auth, _) = use_auth();

    let editing = vm.editing;
    let form = vm.form;
    let password_form = vm.password_form;
    let save = vm.on_save();
    let cancel = vm.on_cancel_edit();
    let change_password = vm.on_change_password();
    let save_pending = vm.save_action.pending();
    let password_pending = vm.change_password_action.pending();

    let role = move || auth.get().role().unwrap_or("").to_string();
    let display = move |pick: fn(&crate::api::AuthUser) -> String| {
        auth.get().user.as_ref().map(pick).unwrap_or_default()
    };

    let on_save_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !save_pending.get_untracked() {
            save();
        }
    };
    let on_password_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !password_pending.get_untracked() {
            change_password();
        }
    };

    view! {
        <Layout>
            <div class="space-y-6 max-w-3xl">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"My Profile"</h1>
                    <p class="text-sm text-fg-muted">"Your account details and password"</p>
                </div>

                <section class="bg-surface-elevated shadow rounded-lg border border-border p-6 space-y-4">
                    <div class="flex items-center justify-between">
                        <h2 class="text-lg font-semibold text-fg">"Account"</h2>
                        <Show when=move || !editing.get()>
                            <button
                                type="button"
                                class="inline-flex items-center gap-2 rounded-md px-3 py-1.5 text-sm font-medium border border-border text-fg hover:bg-surface-muted"
                                on:click=move |_| editing.set(true)
                            >
                                <i class="fas fa-pen"></i>
                                "Edit"
                            </button>
                        </Show>
                    </div>
                    <FeedbackBanner message=vm.profile_message />

                    <Show
                        when=move || editing.get()
                        fallback=move || {
                            view! {
                                <dl class="grid grid-cols-1 sm:grid-cols-2 gap-4 text-sm">
                                    <div>
                                        <dt class="text-fg-muted">"Name"</dt>
                                        <dd class="font-medium text-fg">{move || display(|u| u.name.clone())}</dd>
                                    </div>
                                    <div>
                                        <dt class="text-fg-muted">"Email"</dt>
                                        <dd class="font-medium text-fg">{move || display(|u| u.email.clone())}</dd>
                                    </div>
                                    <div>
                                        <dt class="text-fg-muted">"Phone"</dt>
                                        <dd class="font-medium text-fg">
                                            {move || {
                                                let phone = display(|u| u.phone.clone().unwrap_or_default());
                                                if phone.is_empty() { "—".to_string() } else { phone }
                                            }}
                                        </dd>
                                    </div>
                                    <div>
                                        <dt class="text-fg-muted">"Role"</dt>
                                        <dd>
                                            <span class="inline-block text-xs uppercase tracking-wide px-2 py-0.5 rounded-full bg-surface-muted text-fg">
                                                {role}
                                            </span>
                                        </dd>
                                    </div>
                                </dl>
                            }
                        }
                    >
                        <form class="space-y-4" on:submit=on_save_submit>
                            <TextField label="Name" value=form.name_signal() required=true />
                            <TextField
                                label="Email"
                                value=form.email_signal()
                                input_type="email"
                                required=true
                            />
                            <TextField label="Phone" value=form.phone_signal() placeholder="Optional" />
                            <div class="flex gap-2">
                                <button
                                    type="submit"
                                    class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                                    disabled=move || save_pending.get()
                                >
                                    {move || if save_pending.get() { "Saving..." } else { "Save changes" }}
                                </button>
                                <button
                                    type="button"
                                    class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                                    on:click=move |_| cancel()
                                >
                                    "Cancel"
                                </button>
                            </div>
                        </form>
                    </Show>
                </section>

                <section class="bg-surface-elevated shadow rounded-lg border border-border p-6 space-y-4">
                    <h2 class="text-lg font-semibold text-fg">"Change password"</h2>
                    <FeedbackBanner message=vm.password_message />
                    <form class="space-y-4" on:submit=on_password_submit>
                        <TextField
                            label="Current password"
                            value=password_form.current_signal()
                            input_type="password"
                            required=true
                        />
                        <TextField
                            label="New password"
                            value=password_form.new_signal()
                            input_type="password"
                            required=true
                        />
                        <TextField
                            label="Confirm new password"
                            value=password_form.confirm_signal()
                            input_type="password"
                            required=true
                        />
                        <button
                            type="submit"
                            class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                            disabled=move || password_pending.get()
                        >
                            {move || if password_pending.get() { "Updating..." } else { "Update password" }}
                        </button>
                    </form>
                </section>
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
    fn profile_panel_shows_account_details_read_only() {
        let html = render_to_string(move || {
            provide_auth(Some(employee_user()));
            view! { <ProfilePanel /> }
        });
        assert!(html.contains("My Profile"));
        assert!(html.contains("Employee User"));
        assert!(html.contains("employee@company.com"));
        assert!(html.contains("555-0100"));
        assert!(html.contains("Change password"));
        assert!(html.contains("Edit"));
    }
}

use leptos::ev::SubmitEvent;
use leptos::*;

use crate::api::Announcement;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::feedback::FeedbackBanner;
use crate::components::forms::{TextAreaField, TextField};
use crate::components::layout::{ErrorMessage, Layout, LoadingSpinner};
use crate::pages::announcements::utils::{byline, sort_newest_first};
use crate::pages::announcements::view_model::{
    use_announcements_view_model, AnnouncementsViewModel,
};
use crate::state::auth::use_auth;
use crate::utils::time::now_utc;

#[component]
fn AnnouncementCard(
    announcement: Announcement,
    vm: AnnouncementsViewModel,
    is_staff: Signal<bool>,
) -> impl IntoView {
    let open_edit = vm.on_open_edit();
    let request_delete = vm.on_request_delete();
    let edit_target = announcement.clone();
    let delete_target = announcement.clone();

    let posted = byline(&announcement, now_utc());

    view! {
        <article class="bg-surface-elevated shadow rounded-lg border border-border p-5">
            <div class="flex items-start gap-4">
                <div class="shrink-0 w-10 h-10 rounded-full bg-action-primary-bg/10 flex items-center justify-center">
                    <i class="fas fa-bullhorn text-action-primary-bg"></i>
                </div>
                <div class="flex-1 min-w-0">
                    <h3 class="font-semibold text-fg">{announcement.title.clone()}</h3>
                    <p class="text-xs text-fg-muted">{posted}</p>
                    <p class="mt-2 text-sm text-fg whitespace-pre-line">
                        {announcement.content.clone()}
                    </p>
                </div>
                <Show when=move || is_staff.get()>
                    <div class="flex gap-1">
                        <button
                            type="button"
                            class="p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            aria-label="Edit announcement"
                            on:click={
                                let target = edit_target.clone();
                                move |_| open_edit.call(target.clone())
                            }
                        >
                            <i class="fas fa-pen"></i>
                        </button>
                        <button
                            type="button"
                            class="p-2 rounded-md text-fg-muted hover:text-status-error-text hover:bg-status-error-bg"
                            aria-label="Delete announcement"
                            on:click={
                                let target = delete_target.clone();
                                move |_| request_delete.call(target.clone())
                            }
                        >
                            <i class="fas fa-trash"></i>
                        </button>
                    </div>
                </Show>
            </div>
        </article>
    }
}

#[component]
fn AnnouncementFormDialog(vm: AnnouncementsViewModel) -> impl IntoView {
    let form = vm.form;
    let form_open = vm.form_open;
    let editing = vm.editing;
    let submit = vm.on_submit();
    let close = vm.on_close_form();
    let pending = vm.save_action.pending();

    let on_form_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !pending.get_untracked() {
            submit();
        }
    };

    view! {
        <Show when=move || form_open.get()>
            <div class="fixed inset-0 z-[60] flex items-start justify-center overflow-y-auto p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="fixed inset-0 bg-overlay-backdrop"
                    on:click=move |_| close()
                ></button>
                <div class="relative z-[61] w-full max-w-lg my-8 rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4">
                    <div class="flex items-center justify-between">
                        <h2 class="text-lg font-semibold text-fg">
                            {move || {
                                if editing.get().is_some() {
                                    "Edit Announcement"
                                } else {
                                    "New Announcement"
                                }
                            }}
                        </h2>
                        <button
                            type="button"
                            class="p-1 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            aria-label="Close form"
                            on:click=move |_| close()
                        >
                            <i class="fas fa-xmark"></i>
                        </button>
                    </div>
                    <FeedbackBanner message=vm.message />
                    <form class="space-y-4" on:submit=on_form_submit>
                        <TextField label="Title" value=form.title_signal() required=true />
                        <TextAreaField
                            label="Content"
                            value=form.content_signal()
                            placeholder="What should everyone know?"
                            rows=5
                        />
                        <div class="flex justify-end gap-2 pt-2">
                            <button
                                type="button"
                                class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                                on:click=move |_| close()
                            >
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                                disabled=move || pending.get()
                            >
                                {move || if pending.get() { "Posting..." } else { "Post" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn AnnouncementsPanel() -> impl IntoView {
    let vm = use_announcements_view_model();
    let (auth, _) = use_auth();

    let is_staff = Signal::derive(move || {
        auth.with(|state| matches!(state.role(), Some("admin") | Some("hr")))
    });

    let open_create = vm.on_open_create();
    let cancel_delete = vm.on_cancel_delete();
    let confirm_delete = vm.on_confirm_delete();
    let delete_pending = vm.delete_action.pending();

    let delete_open = Signal::derive(move || vm.pending_delete.get().is_some());
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|announcement| format!("Delete \"{}\"?", announcement.title))
            .unwrap_or_default()
    });

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex flex-wrap items-center justify-between gap-3">
                    <div>
                        <h1 class="text-2xl font-bold text-fg">"Announcements"</h1>
                        <p class="text-sm text-fg-muted">"Company news and notices"</p>
                    </div>
                    <Show when=move || is_staff.get()>
                        <button
                            type="button"
                            class="inline-flex items-center gap-2 rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                            on:click=move |_| open_create()
                        >
                            <i class="fas fa-bullhorn"></i>
                            "New Announcement"
                        </button>
                    </Show>
                </div>

                <FeedbackBanner message=vm.message />

                {move || match vm.list_resource.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Err(err)) => view! { <ErrorMessage message=err.to_string() /> }.into_view(),
                    Some(Ok(announcements)) => {
                        if announcements.is_empty() {
                            view! {
                                <EmptyState
                                    title="No announcements yet"
                                    description="News posted by HR shows up here.".to_string()
                                />
                            }
                            .into_view()
                        } else {
                            view! {
                                <div class="space-y-4">
                                    {sort_newest_first(announcements)
                                        .into_iter()
                                        .map(|announcement| {
                                            view! {
                                                <AnnouncementCard
                                                    announcement=announcement
                                                    vm=vm
                                                    is_staff=is_staff
                                                />
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                            .into_view()
                        }
                    }
                }}
            </div>

            <AnnouncementFormDialog vm=vm />
            <ConfirmDialog
                is_open=delete_open
                title="Delete announcement"
                message=delete_message
                confirm_label="Delete"
                confirm_disabled=delete_pending
                destructive=true
                on_confirm=Callback::new(move |_| confirm_delete())
                on_cancel=Callback::new(move |_| cancel_delete())
            />
        </Layout>
    }
}

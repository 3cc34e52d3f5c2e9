use leptos::ev::SubmitEvent;
use leptos::*;

use crate::api::Department;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::feedback::FeedbackBanner;
use crate::components::forms::{TextAreaField, TextField};
use crate::components::layout::{ErrorMessage, Layout, LoadingSpinner};
use crate::pages::departments::utils::{employee_count_label, toggle_label};
use crate::pages::departments::view_model::{use_departments_view_model, DepartmentsViewModel};

#[component]
fn DepartmentCard(department: Department, vm: DepartmentsViewModel) -> impl IntoView {
    let open_edit = vm.on_open_edit();
    let toggle = vm.on_toggle_status();
    let request_delete = vm.on_request_delete();
    let edit_target = department.clone();
    let toggle_target = department.clone();
    let delete_target = department.clone();

    let status_class = if department.is_active {
        "inline-block px-2 py-0.5 rounded-full text-xs font-medium bg-status-success-bg text-status-success-text"
    } else {
        "inline-block px-2 py-0.5 rounded-full text-xs font-medium bg-surface-muted text-fg-muted"
    };
    let status_text = if department.is_active { "Active" } else { "Inactive" };
    let description = department
        .description
        .clone()
        .unwrap_or_else(|| "No description".to_string());

    view! {
        <div class="bg-surface-elevated shadow rounded-lg border border-border p-5 flex flex-col gap-3">
            <div class="flex items-start justify-between gap-2">
                <div class="flex items-center gap-3 min-w-0">
                    <div class="flex items-center justify-center w-10 h-10 rounded-lg bg-action-primary-bg/10 text-action-primary-bg">
                        <i class="fas fa-building"></i>
                    </div>
                    <div class="min-w-0">
                        <h3 class="font-semibold text-fg truncate">{department.name.clone()}</h3>
                        <p class="text-xs text-fg-muted">
                            {employee_count_label(department.employee_count)}
                        </p>
                    </div>
                </div>
                <span class=status_class>{status_text}</span>
            </div>
            <p class="text-sm text-fg-muted flex-1">{description}</p>
            <div class="flex items-center gap-1 pt-2 border-t border-border">
                <button
                    type="button"
                    class="p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                    aria-label="Edit department"
                    on:click=move |_| open_edit.call(edit_target.clone())
                >
                    <i class="fas fa-pen"></i>
                </button>
                <button
                    type="button"
                    class="p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                    aria-label=toggle_label(department.is_active)
                    title=toggle_label(department.is_active)
                    on:click=move |_| toggle.call(toggle_target.clone())
                >
                    <i class="fas fa-power-off"></i>
                </button>
                <button
                    type="button"
                    class="p-2 rounded-md text-fg-muted hover:text-status-error-text hover:bg-status-error-bg"
                    aria-label="Delete department"
                    on:click=move |_| request_delete.call(delete_target.clone())
                >
                    <i class="fas fa-trash"></i>
                </button>
            </div>
        </div>
    }
}

#[component]
fn DepartmentFormDialog(vm: DepartmentsViewModel) -> impl IntoView {
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
                <div class="relative z-[61] w-full max-w-md my-8 rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4">
                    <h2 class="text-lg font-semibold text-fg">
                        {move || {
                            if editing.get().is_some() { "Edit Department" } else { "Add Department" }
                        }}
                    </h2>
                    <FeedbackBanner message=vm.message />
                    <form class="space-y-4" on:submit=on_form_submit>
                        <TextField label="Name" value=form.name_signal() required=true />
                        <TextAreaField
                            label="Description"
                            value=form.description_signal()
                            placeholder="What does this department do?"
                            rows=3
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
                                {move || if pending.get() { "Saving..." } else { "Save department" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn DepartmentsPanel() -> impl IntoView {
    let vm = use_departments_view_model();

    let open_create = vm.on_open_create();
    let cancel_delete = vm.on_cancel_delete();
    let confirm_delete = vm.on_confirm_delete();
    let delete_pending = vm.delete_action.pending();

    let delete_open = Signal::derive(move || vm.pending_delete.get().is_some());
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|department| {
                format!(
                    "Delete {}? Departments with assigned employees cannot be deleted.",
                    department.name
                )
            })
            .unwrap_or_default()
    });

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex flex-wrap items-center justify-between gap-3">
                    <div>
                        <h1 class="text-2xl font-bold text-fg">"Departments"</h1>
                        <p class="text-sm text-fg-muted">"Organize the company structure"</p>
                    </div>
                    <button
                        type="button"
                        class="inline-flex items-center gap-2 rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                        on:click=move |_| open_create()
                    >
                        <i class="fas fa-plus"></i>
                        "Add Department"
                    </button>
                </div>

                <FeedbackBanner message=vm.message />

                {move || match vm.list_resource.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Err(err)) => view! { <ErrorMessage message=err.to_string() /> }.into_view(),
                    Some(Ok(departments)) => {
                        if departments.is_empty() {
                            view! {
                                <EmptyState
                                    title="No departments yet"
                                    description="Create the first department to organize employees.".to_string()
                                />
                            }
                            .into_view()
                        } else {
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4">
                                    {departments
                                        .into_iter()
                                        .map(|department| {
                                            view! { <DepartmentCard department=department vm=vm /> }
                                        })
                                        .collect_view()}
                                </div>
                            }
                            .into_view()
                        }
                    }
                }}
            </div>

            <DepartmentFormDialog vm=vm />
            <ConfirmDialog
                is_open=delete_open
                title="Delete department"
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

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn panel_renders_the_header_and_create_button() {
        let html = render_to_string(|| {
            provide_auth(Some(admin_user()));
            view! { <DepartmentsPanel /> }
        });
        assert!(html.contains("Departments"));
        assert!(html.contains("Add Department"));
    }

    #[test]
    fn card_shows_counts_and_inactive_badge() {
        let html = render_to_string(|| {
            provide_auth(Some(admin_user()));
            let vm = use_departments_view_model();
            view! {
                <DepartmentCard
                    department=Department {
                        id: "d1".into(),
                        name: "Engineering".into(),
                        description: Some("Builds things".into()),
                        employee_count: 4,
                        is_active: false,
                    }
                    vm=vm
                />
            }
        });
        assert!(html.contains("Engineering"));
        assert!(html.contains("4 employees"));
        assert!(html.contains("Inactive"));
        assert!(html.contains("Activate"));
    }
}

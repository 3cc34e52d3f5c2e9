use leptos::*;

use crate::components::guard::{policy_for, role_allowed};
use crate::state::auth::{self, use_auth};
use crate::utils::navigation;

/// Sidebar entries in display order. Visibility comes from the route
/// policy table, so the sidebar can never disagree with the guards.
const NAV_ITEMS: &[(&str, &str, &str)] = &[
    ("/dashboard", "Dashboard", "fa-chart-pie"),
    ("/employees", "Employees", "fa-users"),
    ("/departments", "Departments", "fa-building"),
    ("/attendance", "Attendance", "fa-user-clock"),
    ("/leaves", "Leaves", "fa-calendar-minus"),
    ("/payroll", "Payroll", "fa-money-check-dollar"),
    ("/holidays", "Holidays", "fa-umbrella-beach"),
    ("/announcements", "Announcements", "fa-bullhorn"),
];

pub fn visible_nav_items(role: Option<&str>) -> Vec<(&'static str, &'static str, &'static str)> {
    NAV_ITEMS
        .iter()
        .copied()
        .filter(|(path, _, _)| role_allowed(policy_for(path), role))
        .collect()
}

#[component]
pub fn Sidebar(#[prop(into)] open: Signal<bool>) -> impl IntoView {
    let (auth, _) = use_auth();
    let current_path = navigation::current_pathname();
    let items = create_memo(move |_| {
        let state = auth.get();
        visible_nav_items(state.role())
    });

    view! {
        <aside class=move || {
            format!(
                "fixed inset-y-0 left-0 z-40 w-64 bg-surface-elevated border-r border-border transform transition-transform duration-200 lg:translate-x-0 lg:static {}",
                if open.get() { "translate-x-0" } else { "-translate-x-full" }
            )
        }>
            <div class="flex items-center gap-2 h-16 px-6 border-b border-border">
                <i class="fas fa-people-group text-action-primary-bg text-xl"></i>
                <span class="text-lg font-semibold text-fg">"HRM"</span>
            </div>
            <nav class="px-3 py-4 space-y-1">
                <For
                    each=move || items.get()
                    key=|(path, _, _)| *path
                    children=move |(path, label, icon)| {
                        let is_active = current_path.as_deref() == Some(path);
                        let class = if is_active {
                            "flex items-center gap-3 px-3 py-2 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text"
                        } else {
                            "flex items-center gap-3 px-3 py-2 rounded-md text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                        };
                        view! {
                            <a href=path class=class>
                                <i class=format!("fas {} w-5 text-center", icon)></i>
                                {label}
                            </a>
                        }
                    }
                />
            </nav>
        </aside>
    }
}

#[component]
pub fn Topbar(on_menu_toggle: Callback<()>) -> impl IntoView {
    let (auth, set_auth) = use_auth();
    let user_name = move || {
        auth.get()
            .user
            .map(|user| user.name)
            .unwrap_or_else(|| "Account".to_string())
    };
    let user_role = move || auth.get().role().unwrap_or("").to_string();
    let on_logout = move |_| {
        auth::logout(set_auth);
        navigation::redirect_to("/login");
    };

    view! {
        <header class="bg-surface-elevated border-b border-border">
            <div class="flex items-center justify-between h-16 px-4 sm:px-6">
                <button
                    type="button"
                    class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                    on:click=move |_| on_menu_toggle.call(())
                >
                    <span class="sr-only">"Toggle navigation"</span>
                    <i class="fas fa-bars"></i>
                </button>
                <div class="flex items-center gap-4 ml-auto">
                    <a
                        href="/profile"
                        class="flex items-center gap-2 text-sm text-fg-muted hover:text-fg"
                    >
                        <i class="fas fa-circle-user text-lg"></i>
                        <span class="font-medium text-fg">{user_name}</span>
                        <span class="hidden sm:inline text-xs uppercase tracking-wide px-2 py-0.5 rounded-full bg-surface-muted">
                            {user_role}
                        </span>
                    </a>
                    <button
                        on:click=on_logout
                        class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                    >
                        "Logout"
                    </button>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    view! {
        <div class="min-h-screen bg-surface lg:flex">
            <Sidebar open=Signal::derive(move || menu_open.get()) />
            <div class="flex-1 flex flex-col min-w-0">
                <Topbar on_menu_toggle=Callback::new(move |_| {
                    set_menu_open.update(|open| *open = !*open)
                }) />
                <main class="flex-1 max-w-7xl w-full mx-auto py-6 px-4 sm:px-6 lg:px-8">
                    {children()}
                </main>
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::visible_nav_items;

    #[test]
    fn employees_see_only_open_screens() {
        let items = visible_nav_items(Some("employee"));
        let paths: Vec<&str> = items.iter().map(|(path, _, _)| *path).collect();
        assert_eq!(
            paths,
            vec![
                "/dashboard",
                "/attendance",
                "/leaves",
                "/holidays",
                "/announcements"
            ]
        );
    }

    #[test]
    fn admin_and_hr_see_every_screen() {
        assert_eq!(visible_nav_items(Some("admin")).len(), 8);
        assert_eq!(visible_nav_items(Some("hr")).len(), 8);
    }
}

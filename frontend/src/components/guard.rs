use leptos::*;

use crate::components::layout::LoadingSpinner;
use crate::state::auth::{use_auth, AuthState};
use crate::utils::navigation;

/// Who may enter a route. `Protected(&[])` admits any signed-in user,
/// a non-empty list admits only the named roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    PublicOnly,
    Protected(&'static [&'static str]),
}

/// Single source of truth for route access. The router, the guards and the
/// sidebar all consult this table.
pub const ROUTE_POLICIES: &[(&str, RouteAccess)] = &[
    ("/login", RouteAccess::PublicOnly),
    ("/register", RouteAccess::PublicOnly),
    ("/dashboard", RouteAccess::Protected(&[])),
    ("/employees", RouteAccess::Protected(&["admin", "hr"])),
    ("/departments", RouteAccess::Protected(&["admin", "hr"])),
    ("/attendance", RouteAccess::Protected(&[])),
    ("/leaves", RouteAccess::Protected(&[])),
    ("/payroll", RouteAccess::Protected(&["admin", "hr"])),
    ("/holidays", RouteAccess::Protected(&[])),
    ("/announcements", RouteAccess::Protected(&[])),
    ("/profile", RouteAccess::Protected(&[])),
];

/// Unlisted paths are treated as protected so nothing leaks by omission.
pub fn policy_for(path: &str) -> RouteAccess {
    ROUTE_POLICIES
        .iter()
        .find(|(route, _)| *route == path)
        .map(|(_, access)| *access)
        .unwrap_or(RouteAccess::Protected(&[]))
}

pub fn role_allowed(access: RouteAccess, role: Option<&str>) -> bool {
    match access {
        RouteAccess::PublicOnly => true,
        RouteAccess::Protected(roles) => {
            roles.is_empty() || role.map(|r| roles.contains(&r)).unwrap_or(false)
        }
    }
}

/// Where to bounce the visitor, or `None` when the route may render.
/// Signed-out visitors go to the login screen, signed-in visitors leave
/// the public screens, and a missing role lands on the dashboard.
pub fn redirect_target(
    access: RouteAccess,
    is_authenticated: bool,
    role: Option<&str>,
) -> Option<&'static str> {
    match access {
        RouteAccess::PublicOnly => is_authenticated.then_some("/dashboard"),
        RouteAccess::Protected(_) if !is_authenticated => Some("/login"),
        RouteAccess::Protected(_) if !role_allowed(access, role) => Some("/dashboard"),
        RouteAccess::Protected(_) => None,
    }
}

fn should_render(access: RouteAccess, state: &AuthState) -> bool {
    !state.loading && redirect_target(access, state.is_authenticated, state.role()).is_none()
}

#[component]
pub fn RouteGuard(path: &'static str, children: ChildrenFn) -> impl IntoView {
    let access = policy_for(path);
    let (auth, _) = use_auth();
    let can_render = create_memo(move |_| should_render(access, &auth.get()));
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        let state = auth.get();
        if state.loading {
            return;
        }
        if let Some(target) = redirect_target(access, state.is_authenticated, state.role()) {
            navigation::redirect_to(target);
        }
    });
    view! {
        <Show
            when=move || can_render.get()
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_out_visitors_bounce_to_login() {
        assert_eq!(
            redirect_target(policy_for("/dashboard"), false, None),
            Some("/login")
        );
        assert_eq!(
            redirect_target(policy_for("/employees"), false, None),
            Some("/login")
        );
        assert_eq!(
            redirect_target(policy_for("/profile"), false, None),
            Some("/login")
        );
    }

    #[test]
    fn signed_in_visitors_leave_public_screens() {
        assert_eq!(
            redirect_target(policy_for("/login"), true, Some("employee")),
            Some("/dashboard")
        );
        assert_eq!(
            redirect_target(policy_for("/register"), true, Some("admin")),
            Some("/dashboard")
        );
        assert_eq!(redirect_target(policy_for("/login"), false, None), None);
    }

    #[test]
    fn role_restricted_screens_bounce_other_roles_to_dashboard() {
        assert_eq!(
            redirect_target(policy_for("/payroll"), true, Some("employee")),
            Some("/dashboard")
        );
        assert_eq!(
            redirect_target(policy_for("/departments"), true, Some("employee")),
            Some("/dashboard")
        );
        assert_eq!(redirect_target(policy_for("/employees"), true, Some("hr")), None);
        assert_eq!(redirect_target(policy_for("/payroll"), true, Some("admin")), None);
    }

    #[test]
    fn open_protected_screens_admit_any_signed_in_role() {
        for role in ["admin", "hr", "employee"] {
            assert_eq!(
                redirect_target(policy_for("/attendance"), true, Some(role)),
                None
            );
            assert_eq!(
                redirect_target(policy_for("/announcements"), true, Some(role)),
                None
            );
        }
    }

    #[test]
    fn unknown_paths_default_to_protected() {
        assert_eq!(policy_for("/does-not-exist"), RouteAccess::Protected(&[]));
        assert_eq!(
            redirect_target(policy_for("/does-not-exist"), false, None),
            Some("/login")
        );
    }

    #[test]
    fn role_checks_cover_empty_and_named_sets() {
        let any = RouteAccess::Protected(&[]);
        assert!(role_allowed(any, Some("employee")));
        assert!(role_allowed(any, None));

        let staff_only = RouteAccess::Protected(&["admin", "hr"]);
        assert!(role_allowed(staff_only, Some("admin")));
        assert!(role_allowed(staff_only, Some("hr")));
        assert!(!role_allowed(staff_only, Some("employee")));
        assert!(!role_allowed(staff_only, None));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::RouteGuard;
    use crate::state::auth::AuthState;
    use crate::test_support::helpers::{admin_user, employee_user, hr_user, provide_auth};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn route_guard_renders_children_when_authenticated() {
        let html = render_to_string(move || {
            provide_auth(Some(employee_user()));
            view! {
                <RouteGuard path="/dashboard">
                    {|| view! { <div>"protected-content"</div> }}
                </RouteGuard>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn route_guard_hides_children_when_signed_out() {
        let html = render_to_string(move || {
            provide_auth(None);
            view! {
                <RouteGuard path="/dashboard">
                    {|| view! { <div>"protected-content"</div> }}
                </RouteGuard>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn route_guard_shows_spinner_while_loading() {
        let html = render_to_string(move || {
            let (auth, set_auth) = create_signal(AuthState {
                user: None,
                is_authenticated: false,
                loading: true,
            });
            provide_context((auth, set_auth));
            view! {
                <RouteGuard path="/dashboard">
                    {|| view! { <div>"protected-content"</div> }}
                </RouteGuard>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn route_guard_hides_staff_screens_from_employees() {
        let html = render_to_string(move || {
            provide_auth(Some(employee_user()));
            view! {
                <RouteGuard path="/payroll">
                    {|| view! { <div>"payroll-table"</div> }}
                </RouteGuard>
            }
        });
        assert!(!html.contains("payroll-table"));
    }

    #[test]
    fn route_guard_admits_hr_to_staff_screens() {
        let html = render_to_string(move || {
            provide_auth(Some(hr_user()));
            view! {
                <RouteGuard path="/employees">
                    {|| view! { <div>"employee-table"</div> }}
                </RouteGuard>
            }
        });
        assert!(html.contains("employee-table"));
    }

    #[test]
    fn route_guard_hides_login_from_signed_in_users() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! {
                <RouteGuard path="/login">
                    {|| view! { <div>"login-form"</div> }}
                </RouteGuard>
            }
        });
        assert!(!html.contains("login-form"));
    }
}

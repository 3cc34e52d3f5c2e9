use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::{ApiClient, TagRegistry},
    components::guard::RouteGuard,
    pages::{
        announcements::AnnouncementsPage, attendance::AttendancePage, dashboard::DashboardPage,
        departments::DepartmentsPage, employees::EmployeesPage, holidays::HolidaysPage,
        home::HomePage, leaves::LeavesPage, login::LoginPage, payroll::PayrollPage,
        profile::ProfilePage, register::RegisterPage,
    },
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/register",
    "/dashboard",
    "/employees",
    "/departments",
    "/attendance",
    "/leaves",
    "/payroll",
    "/holidays",
    "/announcements",
    "/profile",
];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    // One registry for the whole app; per-page fallbacks would fragment
    // invalidation across screens.
    provide_context(TagRegistry::new());
    view! {
        <Title text="HRM System"/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=GuardedLogin/>
                    <Route path="/register" view=GuardedRegister/>
                    <Route path="/dashboard" view=GuardedDashboard/>
                    <Route path="/employees" view=GuardedEmployees/>
                    <Route path="/departments" view=GuardedDepartments/>
                    <Route path="/attendance" view=GuardedAttendance/>
                    <Route path="/leaves" view=GuardedLeaves/>
                    <Route path="/payroll" view=GuardedPayroll/>
                    <Route path="/holidays" view=GuardedHolidays/>
                    <Route path="/announcements" view=GuardedAnnouncements/>
                    <Route path="/profile" view=GuardedProfile/>
                    // Unknown paths land on the home redirect.
                    <Route path="/*any" view=HomePage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn GuardedLogin() -> impl IntoView {
    view! { <RouteGuard path="/login"><LoginPage/></RouteGuard> }
}

#[component]
fn GuardedRegister() -> impl IntoView {
    view! { <RouteGuard path="/register"><RegisterPage/></RouteGuard> }
}

#[component]
fn GuardedDashboard() -> impl IntoView {
    view! { <RouteGuard path="/dashboard"><DashboardPage/></RouteGuard> }
}

#[component]
fn GuardedEmployees() -> impl IntoView {
    view! { <RouteGuard path="/employees"><EmployeesPage/></RouteGuard> }
}

#[component]
fn GuardedDepartments() -> impl IntoView {
    view! { <RouteGuard path="/departments"><DepartmentsPage/></RouteGuard> }
}

#[component]
fn GuardedAttendance() -> impl IntoView {
    view! { <RouteGuard path="/attendance"><AttendancePage/></RouteGuard> }
}

#[component]
fn GuardedLeaves() -> impl IntoView {
    view! { <RouteGuard path="/leaves"><LeavesPage/></RouteGuard> }
}

#[component]
fn GuardedPayroll() -> impl IntoView {
    view! { <RouteGuard path="/payroll"><PayrollPage/></RouteGuard> }
}

#[component]
fn GuardedHolidays() -> impl IntoView {
    view! { <RouteGuard path="/holidays"><HolidaysPage/></RouteGuard> }
}

#[component]
fn GuardedAnnouncements() -> impl IntoView {
    view! { <RouteGuard path="/announcements"><AnnouncementsPage/></RouteGuard> }
}

#[component]
fn GuardedProfile() -> impl IntoView {
    view! { <RouteGuard path="/profile"><ProfilePage/></RouteGuard> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::guard::ROUTE_POLICIES;
    use std::collections::HashSet;

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn every_policy_names_a_mounted_route() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for (path, _) in ROUTE_POLICIES {
            assert!(all.contains(path), "policy path is not mounted: {}", path);
        }
    }

    #[test]
    fn every_screen_but_the_landing_page_has_a_policy() {
        let policies: HashSet<&str> = ROUTE_POLICIES.iter().map(|(path, _)| *path).collect();
        for path in ROUTE_PATHS {
            if *path == "/" {
                continue;
            }
            assert!(policies.contains(path), "route has no access policy: {}", path);
        }
    }
}

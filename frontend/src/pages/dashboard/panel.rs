use leptos::*;

use crate::api::{Activity, DashboardStats};
use crate::components::layout::{ErrorMessage, Layout, LoadingSpinner};
use crate::pages::dashboard::utils::{
    absence_caption, activity_icon, attendance_caption, bar_height_percent, department_percent,
    growth_caption, leave_caption, OVERVIEW_PERIODS,
};
use crate::pages::dashboard::view_model::use_dashboard_view_model;
use crate::state::auth::use_auth;
use crate::utils::time::{now_utc, relative_time};

#[component]
fn StatCard(
    icon: &'static str,
    accent: &'static str,
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(into)] caption: String,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg border border-border p-5 flex items-start gap-4">
            <div class=format!(
                "flex items-center justify-center w-11 h-11 rounded-lg {accent}"
            )>
                <i class=format!("fas {icon} text-lg")></i>
            </div>
            <div class="min-w-0">
                <p class="text-sm text-fg-muted truncate">{label}</p>
                <p class="text-2xl font-bold text-fg">{value}</p>
                <p class="text-xs text-fg-muted mt-0.5">{caption}</p>
            </div>
        </div>
    }
}

#[component]
fn StatCards(stats: DashboardStats, employee_growth: f64) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 xl:grid-cols-4 gap-4">
            <StatCard
                icon="fa-users"
                accent="bg-action-primary-bg/10 text-action-primary-bg"
                label="Total Employees"
                value=stats.total_employees.to_string()
                caption=growth_caption(employee_growth)
            />
            <StatCard
                icon="fa-user-check"
                accent="bg-status-success-bg text-status-success-text"
                label="Present Today"
                value=stats.present_today.to_string()
                caption=attendance_caption(stats.attendance_rate)
            />
            <StatCard
                icon="fa-calendar-minus"
                accent="bg-status-warning-bg text-status-warning-text"
                label="On Leave"
                value=stats.on_leave.to_string()
                caption=leave_caption(&stats.leave_breakdown)
            />
            <StatCard
                icon="fa-user-xmark"
                accent="bg-status-error-bg text-status-error-text"
                label="Absent"
                value=stats.absent.to_string()
                caption=absence_caption(stats.absence_rate)
            />
        </div>
    }
}

#[component]
fn QuickActions(#[prop(into)] role: Signal<Option<String>>) -> impl IntoView {
    let is_staff = move || {
        matches!(
            role.get().as_deref(),
            Some("admin") | Some("hr")
        )
    };
    view! {
        <div class="bg-surface-elevated shadow rounded-lg border border-border p-5">
            <h2 class="text-lg font-semibold text-fg mb-3">"Quick Actions"</h2>
            <div class="grid grid-cols-2 lg:grid-cols-4 gap-3">
                <Show when=is_staff>
                    <QuickAction href="/employees?action=add" icon="fa-user-plus" label="Add Employee" />
                </Show>
                <QuickAction href="/attendance" icon="fa-user-clock" label="Mark Attendance" />
                <QuickAction href="/leaves?action=apply" icon="fa-calendar-minus" label="Apply Leave" />
                <Show when=is_staff>
                    <QuickAction href="/payroll" icon="fa-money-check-dollar" label="Run Payroll" />
                </Show>
            </div>
        </div>
    }
}

#[component]
fn QuickAction(href: &'static str, icon: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            class="flex flex-col items-center gap-2 rounded-lg border border-border p-4 text-sm font-medium text-fg hover:bg-surface-muted"
        >
            <i class=format!("fas {icon} text-action-primary-bg text-xl")></i>
            {label}
        </a>
    }
}

#[component]
fn ActivityRow(activity: Activity) -> impl IntoView {
    let icon = activity_icon(&activity.kind);
    let age = relative_time(activity.created_at, now_utc());
    view! {
        <li class="flex items-start gap-3 py-3">
            <div class="flex items-center justify-center w-8 h-8 rounded-full bg-surface-muted text-fg-muted">
                <i class=format!("fas {icon} text-sm")></i>
            </div>
            <div class="min-w-0 flex-1">
                <p class="text-sm text-fg">{activity.description}</p>
                <p class="text-xs text-fg-muted">{age}</p>
            </div>
        </li>
    }
}

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let (auth, _) = use_auth();

    let greeting = move || {
        auth.get()
            .user
            .map(|user| format!("Welcome back, {}", user.name))
            .unwrap_or_else(|| "Welcome back".to_string())
    };
    let role = Signal::derive(move || auth.get().role().map(|r| r.to_string()));

    let overview_period = vm.overview_period;
    let on_period = vm.on_period_change();

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Dashboard"</h1>
                    <p class="text-sm text-fg-muted">{greeting}</p>
                </div>

                {move || match vm.stats_resource.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
                    Some(Ok(response)) => view! {
                        <StatCards stats=response.data employee_growth=response.employee_growth />
                    }
                    .into_view(),
                }}

                <QuickActions role=role />

                <div class="grid grid-cols-1 xl:grid-cols-3 gap-6">
                    <section class="xl:col-span-2 bg-surface-elevated shadow rounded-lg border border-border p-5">
                        <div class="flex items-center justify-between mb-4">
                            <h2 class="text-lg font-semibold text-fg">"Attendance Overview"</h2>
                            <div class="flex rounded-md border border-border overflow-hidden">
                                {OVERVIEW_PERIODS
                                    .iter()
                                    .map(|(value, label)| {
                                        let on_period = on_period;
                                        view! {
                                            <button
                                                type="button"
                                                class=move || {
                                                    if overview_period.get() == *value {
                                                        "px-3 py-1.5 text-sm font-medium bg-action-primary-bg text-action-primary-text"
                                                    } else {
                                                        "px-3 py-1.5 text-sm font-medium text-fg-muted hover:text-fg"
                                                    }
                                                }
                                                on:click=move |_| on_period.call(value.to_string())
                                            >
                                                {*label}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        {move || match vm.overview_resource.get() {
                            None => view! { <LoadingSpinner /> }.into_view(),
                            Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
                            Some(Ok(overview)) => {
                                let max = overview
                                    .data
                                    .iter()
                                    .map(|point| point.percentage)
                                    .fold(0.0_f64, f64::max);
                                view! {
                                    <div class="flex items-end gap-2 h-48">
                                        {overview
                                            .data
                                            .iter()
                                            .map(|point| {
                                                let height = bar_height_percent(point.percentage, max);
                                                let title = format!("{}: {:.1}%", point.date, point.percentage);
                                                view! {
                                                    <div class="flex-1 flex flex-col items-center gap-1 h-full justify-end">
                                                        <div
                                                            class="w-full rounded-t bg-action-primary-bg/80"
                                                            style=format!("height: {height:.0}%")
                                                            title=title
                                                        ></div>
                                                        <span class="text-[10px] text-fg-muted truncate w-full text-center">
                                                            {point.date.clone()}
                                                        </span>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                                .into_view()
                            }
                        }}
                    </section>

                    <section class="bg-surface-elevated shadow rounded-lg border border-border p-5">
                        <h2 class="text-lg font-semibold text-fg mb-4">"Department Overview"</h2>
                        {move || match vm.departments_resource.get() {
                            None => view! { <LoadingSpinner /> }.into_view(),
                            Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
                            Some(Ok(overview)) => {
                                let total = overview.total_employees;
                                view! {
                                    <ul class="space-y-3">
                                        {overview
                                            .departments
                                            .iter()
                                            .map(|share| {
                                                let percent = department_percent(share.employee_count, total);
                                                view! {
                                                    <li>
                                                        <div class="flex justify-between text-sm mb-1">
                                                            <span class="text-fg">{share.name.clone()}</span>
                                                            <span class="text-fg-muted">
                                                                {format!("{} · {percent}%", share.employee_count)}
                                                            </span>
                                                        </div>
                                                        <div class="h-2 rounded-full bg-surface-muted overflow-hidden">
                                                            <div
                                                                class="h-full rounded-full bg-action-primary-bg"
                                                                style=format!("width: {percent}%")
                                                            ></div>
                                                        </div>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                }
                                .into_view()
                            }
                        }}
                    </section>
                </div>

                <section class="bg-surface-elevated shadow rounded-lg border border-border p-5">
                    <h2 class="text-lg font-semibold text-fg mb-2">"Recent Activities"</h2>
                    {move || match vm.activities_resource.get() {
                        None => view! { <LoadingSpinner /> }.into_view(),
                        Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
                        Some(Ok(activities)) if activities.is_empty() => {
                            view! { <p class="text-sm text-fg-muted py-3">"No recent activity."</p> }
                                .into_view()
                        }
                        Some(Ok(activities)) => view! {
                            <ul class="divide-y divide-border">
                                {activities
                                    .into_iter()
                                    .map(|activity| view! { <ActivityRow activity=activity /> })
                                    .collect_view()}
                            </ul>
                        }
                        .into_view(),
                    }}
                </section>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::LeaveBreakdown;
    use crate::test_support::helpers::{admin_user, employee_user, provide_auth};
    use crate::test_support::ssr::render_to_string;
    use chrono::Utc;

    fn sample_stats() -> DashboardStats {
        DashboardStats {
            total_employees: 42,
            present_today: 30,
            attendance_rate: 71.4,
            on_leave: 4,
            leave_breakdown: LeaveBreakdown { sick: 1, vacation: 3 },
            absent: 8,
            absence_rate: 19.0,
        }
    }

    #[test]
    fn stat_cards_carry_values_and_captions() {
        let html = render_to_string(move || {
            view! { <StatCards stats=sample_stats() employee_growth=5.5 /> }
        });
        assert!(html.contains("Total Employees"));
        assert!(html.contains("42"));
        assert!(html.contains("+5.5% from last month"));
        assert!(html.contains("71.4% attendance rate"));
        assert!(html.contains("1 sick, 3 vacation"));
        assert!(html.contains("19% absence rate"));
    }

    #[test]
    fn quick_actions_follow_the_role() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <QuickActions role=Signal::derive(|| Some("admin".to_string())) /> }
        });
        assert!(html.contains("Add Employee"));
        assert!(html.contains("Run Payroll"));

        let html = render_to_string(move || {
            provide_auth(Some(employee_user()));
            view! { <QuickActions role=Signal::derive(|| Some("employee".to_string())) /> }
        });
        assert!(!html.contains("Add Employee"));
        assert!(!html.contains("Run Payroll"));
        assert!(html.contains("Mark Attendance"));
        assert!(html.contains("Apply Leave"));
    }

    #[test]
    fn activity_row_renders_icon_and_age() {
        let html = render_to_string(move || {
            let activity = Activity {
                id: "a1".into(),
                kind: "leave".into(),
                action: "approved".into(),
                description: "Leave request approved".into(),
                created_at: Utc::now(),
            };
            view! { <ActivityRow activity=activity /> }
        });
        assert!(html.contains("Leave request approved"));
        assert!(html.contains("fa-calendar-minus"));
        assert!(html.contains("just now"));
    }

    #[test]
    fn dashboard_panel_renders_the_shell_with_headings() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <DashboardPanel /> }
        });
        assert!(html.contains("Dashboard"));
        assert!(html.contains("Welcome back, Admin User"));
        assert!(html.contains("Attendance Overview"));
        assert!(html.contains("Department Overview"));
        assert!(html.contains("Recent Activities"));
        assert!(html.contains("Last 7 days"));
    }
}

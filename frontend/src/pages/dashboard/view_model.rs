use leptos::*;

use crate::api::{
    use_tags, Activity, ApiClient, ApiError, AttendanceOverviewResponse, DashboardStatsResponse,
    DepartmentOverviewResponse, ResourceTag,
};
use crate::pages::dashboard::repository;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub overview_period: RwSignal<String>,
    pub stats_resource: Resource<u64, Result<DashboardStatsResponse, ApiError>>,
    pub activities_resource: Resource<u64, Result<Vec<Activity>, ApiError>>,
    pub overview_resource: Resource<(u64, String), Result<AttendanceOverviewResponse, ApiError>>,
    pub departments_resource: Resource<u64, Result<DepartmentOverviewResponse, ApiError>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let tags = use_tags();
        let overview_period = create_rw_signal("7d".to_string());

        let stats_resource = {
            let api = api.clone();
            create_resource(
                move || tags.version(ResourceTag::Dashboard),
                move |_| {
                    let api = api.clone();
                    async move { repository::fetch_stats(&api).await }
                },
            )
        };

        let activities_resource = {
            let api = api.clone();
            create_resource(
                move || tags.version(ResourceTag::Dashboard),
                move |_| {
                    let api = api.clone();
                    async move { repository::fetch_activities(&api).await }
                },
            )
        };

        let overview_resource = {
            let api = api.clone();
            create_resource(
                move || (tags.version(ResourceTag::Dashboard), overview_period.get()),
                move |(_, period)| {
                    let api = api.clone();
                    async move { repository::fetch_attendance_overview(&api, &period).await }
                },
            )
        };

        let departments_resource = create_resource(
            move || tags.version(ResourceTag::Dashboard),
            move |_| {
                let api = api.clone();
                async move { repository::fetch_department_overview(&api).await }
            },
        );

        Self {
            overview_period,
            stats_resource,
            activities_resource,
            overview_resource,
            departments_resource,
        }
    }

    pub fn on_period_change(&self) -> Callback<String> {
        let overview_period = self.overview_period;
        Callback::new(move |period: String| {
            overview_period.set(period);
        })
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_suppressed_resources;

    #[test]
    fn period_toggle_rewrites_the_signal() {
        with_suppressed_resources(|| {
            let vm = DashboardViewModel::new();
            assert_eq!(vm.overview_period.get(), "7d");
            vm.on_period_change().call("30d".to_string());
            assert_eq!(vm.overview_period.get(), "30d");
        });
    }

    #[test]
    fn use_dashboard_view_model_reuses_context() {
        with_suppressed_resources(|| {
            let vm = use_dashboard_view_model();
            vm.overview_period.set("30d".to_string());
            let again = use_dashboard_view_model();
            assert_eq!(again.overview_period.get(), "30d");
        });
    }
}

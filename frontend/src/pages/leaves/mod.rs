use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::LeavesPanel;

#[component]
pub fn LeavesPage() -> impl IntoView {
    view! { <LeavesPanel /> }
}

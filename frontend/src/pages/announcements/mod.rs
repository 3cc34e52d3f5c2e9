use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::AnnouncementsPanel;

#[component]
pub fn AnnouncementsPage() -> impl IntoView {
    view! { <AnnouncementsPanel /> }
}

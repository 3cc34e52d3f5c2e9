use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::HolidaysPanel;

#[component]
pub fn HolidaysPage() -> impl IntoView {
    view! { <HolidaysPanel /> }
}

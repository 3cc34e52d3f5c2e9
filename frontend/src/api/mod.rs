mod announcements;
mod attendance;
mod auth;
pub mod client;
mod dashboard;
mod departments;
mod employees;
mod holidays;
mod leaves;
mod payroll;
pub mod tags;
pub mod types;

pub use attendance::{PunchKind, PunchPhoto};
pub use client::*;
pub use tags::{use_tags, ResourceTag, TagRegistry};
pub use types::*;

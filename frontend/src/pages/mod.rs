pub mod announcements;
pub mod attendance;
pub mod dashboard;
pub mod departments;
pub mod employees;
pub mod holidays;
pub mod home;
pub mod leaves;
pub mod login;
pub mod payroll;
pub mod profile;
pub mod register;

use chrono::NaiveDate;
use leptos::*;

use crate::api::{ApiError, CreateLeaveRequest};

pub const LEAVE_TYPE_OPTIONS: &[(&str, &str)] = &[
    ("vacation", "Vacation"),
    ("sick", "Sick"),
    ("personal", "Personal"),
    ("unpaid", "Unpaid"),
];

pub fn leave_type_options() -> Vec<(String, String)> {
    LEAVE_TYPE_OPTIONS
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}

/// `?action=apply` from a dashboard quick action opens the request form.
pub fn wants_apply_action(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair == "action=apply")
}

/// Inclusive day span, the number the backend deducts from the balance.
pub fn day_count(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

pub fn status_badge_class(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "approved" => {
            "inline-block px-2 py-0.5 rounded-full text-xs font-medium bg-status-success-bg text-status-success-text"
        }
        "rejected" => {
            "inline-block px-2 py-0.5 rounded-full text-xs font-medium bg-status-error-bg text-status-error-text"
        }
        _ => {
            "inline-block px-2 py-0.5 rounded-full text-xs font-medium bg-status-warning-bg text-status-warning-text"
        }
    }
}

fn parse_date(raw: &str, field: &str) -> Result<NaiveDate, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(format!("{field} is required.")));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| ApiError::validation(format!("{field} must be a valid date.")))
}

#[derive(Clone, Copy)]
pub struct LeaveFormState {
    leave_type: RwSignal<String>,
    start_date: RwSignal<String>,
    end_date: RwSignal<String>,
    reason: RwSignal<String>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            leave_type: create_rw_signal("vacation".to_string()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
        }
    }
}

impl LeaveFormState {
    pub fn leave_type_signal(&self) -> RwSignal<String> {
        self.leave_type
    }

    pub fn start_date_signal(&self) -> RwSignal<String> {
        self.start_date
    }

    pub fn end_date_signal(&self) -> RwSignal<String> {
        self.end_date
    }

    pub fn reason_signal(&self) -> RwSignal<String> {
        self.reason
    }

    pub fn reset(&self) {
        self.leave_type.set("vacation".to_string());
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.reason.set(String::new());
    }

    pub fn to_payload(self) -> Result<CreateLeaveRequest, ApiError> {
        let leave_type = self.leave_type.get();
        if !LEAVE_TYPE_OPTIONS
            .iter()
            .any(|(value, _)| *value == leave_type)
        {
            return Err(ApiError::validation("Choose a leave type."));
        }
        let start_date = parse_date(&self.start_date.get(), "Start date")?;
        let end_date = parse_date(&self.end_date.get(), "End date")?;
        if end_date < start_date {
            return Err(ApiError::validation(
                "End date cannot be before the start date.",
            ));
        }
        let reason = self.reason.get();
        let reason = reason.trim();
        Ok(CreateLeaveRequest {
            leave_type,
            start_date,
            end_date,
            reason: (!reason.is_empty()).then(|| reason.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn apply_action_is_read_from_the_query_string() {
        assert!(wants_apply_action("?action=apply"));
        assert!(wants_apply_action("?from=dashboard&action=apply"));
        assert!(!wants_apply_action("?action=add"));
        assert!(!wants_apply_action(""));
    }

    #[test]
    fn day_count_is_inclusive() {
        let start = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        assert_eq!(day_count(start, start), 1);
        assert_eq!(
            day_count(start, NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()),
            5
        );
    }

    #[test]
    fn badge_class_follows_the_status() {
        assert!(status_badge_class("approved").contains("status-success"));
        assert!(status_badge_class("Rejected").contains("status-error"));
        assert!(status_badge_class("pending").contains("status-warning"));
    }

    #[test]
    fn payload_requires_an_ordered_date_pair() {
        with_runtime(|| {
            let form = LeaveFormState::default();
            assert!(form.to_payload().is_err());

            form.start_date_signal().set("2026-08-10".to_string());
            form.end_date_signal().set("2026-08-08".to_string());
            let err = form.to_payload().unwrap_err();
            assert!(err.error.contains("before the start date"));

            form.end_date_signal().set("2026-08-12".to_string());
            form.reason_signal().set("  family trip  ".to_string());
            let payload = form.to_payload().unwrap();
            assert_eq!(payload.leave_type, "vacation");
            assert_eq!(payload.reason.as_deref(), Some("family trip"));
            assert_eq!(day_count(payload.start_date, payload.end_date), 3);
        });
    }

    #[test]
    fn unknown_type_is_rejected() {
        with_runtime(|| {
            let form = LeaveFormState::default();
            form.leave_type_signal().set("sabbatical".to_string());
            form.start_date_signal().set("2026-08-10".to_string());
            form.end_date_signal().set("2026-08-10".to_string());
            assert!(form.to_payload().is_err());
        });
    }
}

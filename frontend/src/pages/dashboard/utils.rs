use crate::api::LeaveBreakdown;

/// Overview periods the backend accepts.
pub const OVERVIEW_PERIODS: &[(&str, &str)] = &[("7d", "Last 7 days"), ("30d", "Last 30 days")];

/// Feed length for the recent-activities card.
pub const ACTIVITY_FEED_LIMIT: i64 = 6;

/// "71.4" -> "71.4%", "20.0" -> "20%".
pub fn format_percent(value: f64) -> String {
    let rendered = format!("{value:.1}");
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');
    format!("{rendered}%")
}

pub fn growth_caption(growth: f64) -> String {
    let sign = if growth >= 0.0 { "+" } else { "-" };
    format!("{sign}{} from last month", format_percent(growth.abs()))
}

pub fn attendance_caption(rate: f64) -> String {
    format!("{} attendance rate", format_percent(rate))
}

pub fn absence_caption(rate: f64) -> String {
    format!("{} absence rate", format_percent(rate))
}

pub fn leave_caption(breakdown: &LeaveBreakdown) -> String {
    format!("{} sick, {} vacation", breakdown.sick, breakdown.vacation)
}

pub fn activity_icon(kind: &str) -> &'static str {
    match kind {
        "employee" => "fa-user-plus",
        "attendance" => "fa-user-clock",
        "leave" => "fa-calendar-minus",
        "payroll" => "fa-money-check-dollar",
        "announcement" => "fa-bullhorn",
        "department" => "fa-building",
        _ => "fa-circle-info",
    }
}

/// Whole-number share for the department list.
pub fn department_percent(count: i64, total: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as i64
}

/// Bar heights scale against the tallest point so a quiet week still shows
/// visible bars.
pub fn bar_height_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    ((value / max) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_formatting_trims_trailing_zero() {
        assert_eq!(format_percent(71.4), "71.4%");
        assert_eq!(format_percent(20.0), "20%");
        assert_eq!(format_percent(0.0), "0%");
    }

    #[test]
    fn growth_caption_carries_the_sign() {
        assert_eq!(growth_caption(5.5), "+5.5% from last month");
        assert_eq!(growth_caption(-2.0), "-2% from last month");
        assert_eq!(growth_caption(0.0), "+0% from last month");
    }

    #[test]
    fn leave_caption_joins_the_breakdown() {
        let breakdown = LeaveBreakdown { sick: 1, vacation: 3 };
        assert_eq!(leave_caption(&breakdown), "1 sick, 3 vacation");
    }

    #[test]
    fn activity_icons_cover_known_kinds() {
        assert_eq!(activity_icon("employee"), "fa-user-plus");
        assert_eq!(activity_icon("payroll"), "fa-money-check-dollar");
        assert_eq!(activity_icon("something-else"), "fa-circle-info");
    }

    #[test]
    fn department_percent_rounds_and_guards_zero() {
        assert_eq!(department_percent(5, 20), 25);
        assert_eq!(department_percent(1, 3), 33);
        assert_eq!(department_percent(2, 3), 67);
        assert_eq!(department_percent(3, 0), 0);
    }

    #[test]
    fn bar_heights_scale_to_the_tallest_point() {
        assert!((bar_height_percent(50.0, 100.0) - 50.0).abs() < f64::EPSILON);
        assert!((bar_height_percent(100.0, 100.0) - 100.0).abs() < f64::EPSILON);
        assert!((bar_height_percent(10.0, 0.0) - 0.0).abs() < f64::EPSILON);
    }
}

use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Today in the browser's timezone; calendar math is local by convention.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

pub fn local_time_of_day() -> chrono::NaiveTime {
    Local::now().time()
}

pub fn current_year() -> i32 {
    today_local().year()
}

pub fn current_month() -> u32 {
    today_local().month()
}

pub fn format_time_of_day(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%I:%M %p").to_string()
}

pub fn format_date_long(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn format_date_short(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

/// Compact age for feeds; falls back to an absolute date after a week.
pub fn relative_time(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - ts;
    let seconds = elapsed.num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }
    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{hours}h ago");
    }
    let days = elapsed.num_days();
    if days < 7 {
        return format!("{days}d ago");
    }
    ts.format("%b %-d, %Y").to_string()
}

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// Runs `f` every `period_ms` milliseconds for as long as the current
/// reactive owner lives. The interval handle is stored on the owner, so
/// disposing the scope (component unmount) cancels the tick. Host builds
/// render once and never tick.
pub fn run_every(period_ms: u32, f: impl FnMut() + 'static) {
    #[cfg(target_arch = "wasm32")]
    {
        let interval = gloo_timers::callback::Interval::new(period_ms, f);
        leptos::store_value(interval);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (period_ms, f);
    }
}

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Timelike, Utc};

use crate::api::{AttendanceRecord, Leave};

/// Fixed shift length the countdown runs against.
pub const SHIFT_HOURS: i64 = 8;

/// Hour of day (local) when the backend auto-closes open shifts.
pub const OFFICE_END_HOUR: u32 = 18;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftPhase {
    /// No punch yet today.
    Idle,
    /// Punched in, still on shift.
    Active,
    /// Punched out.
    Completed,
}

pub fn shift_phase(record: Option<&AttendanceRecord>) -> ShiftPhase {
    match record {
        Some(record) if record.punch_out.is_some() => ShiftPhase::Completed,
        Some(record) if record.punch_in.is_some() => ShiftPhase::Active,
        _ => ShiftPhase::Idle,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShiftCountdown {
    /// Remaining time formatted `HH:MM:SS`.
    pub remaining: String,
    /// Share of the shift already worked, clamped to 0..=100.
    pub percent: f64,
}

impl ShiftCountdown {
    fn idle() -> Self {
        Self {
            remaining: "00:00:00".to_string(),
            percent: 0.0,
        }
    }
}

/// Live countdown toward `punch_in + SHIFT_HOURS`. Anything but an active
/// shift renders as zero; the tick itself lives in the view model.
pub fn shift_countdown(
    punch_in: Option<DateTime<Utc>>,
    punch_out: Option<DateTime<Utc>>,
    phase: ShiftPhase,
    now: DateTime<Utc>,
) -> ShiftCountdown {
    let (Some(start), None, ShiftPhase::Active) = (punch_in, punch_out, phase) else {
        return ShiftCountdown::idle();
    };

    let total = Duration::hours(SHIFT_HOURS);
    let end = start + total;
    let remaining = (end - now).max(Duration::zero());
    let percent = ((now - start).num_seconds() as f64 / total.num_seconds() as f64 * 100.0)
        .clamp(0.0, 100.0);

    ShiftCountdown {
        remaining: format_hms(remaining),
        percent,
    }
}

fn format_hms(duration: Duration) -> String {
    let seconds = duration.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

/// The auto-close watcher compares the local wall clock against the fixed
/// office end once per tick.
pub fn past_office_end(time_of_day: NaiveTime) -> bool {
    time_of_day.hour() >= OFFICE_END_HOUR
}

/// `"7h 58m"` for a closed punch pair, `None` while the shift is open.
pub fn worked_label(
    punch_in: Option<DateTime<Utc>>,
    punch_out: Option<DateTime<Utc>>,
) -> Option<String> {
    let (start, end) = (punch_in?, punch_out?);
    let minutes = (end - start).num_minutes().max(0);
    Some(format!("{}h {}m", minutes / 60, minutes % 60))
}

#[derive(Clone, Debug, PartialEq)]
pub struct CalendarCell {
    pub day: u32,
    pub date: NaiveDate,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonthGrid {
    /// Blank cells before day 1, equal to its weekday index (0 = Sunday).
    pub leading_blanks: u32,
    pub cells: Vec<CalendarCell>,
}

/// First and last day of the month, for the range endpoint.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))?;
    Some((first, last))
}

pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => date,
        None => return 0,
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(next) => (next - first).num_days() as u32,
        None => 0,
    }
}

/// Classifies every day of the month for the calendar.
///
/// Approved leave spans are folded in first so a leave day without a punch
/// shows as "leave" instead of the absent heuristic; an attendance record
/// on the same day still wins. Among attendance records, later entries win.
/// Days with no record at all fall back to: future or weekend means "none",
/// past or current weekday means "absent".
pub fn month_grid(
    year: i32,
    month: u32,
    records: &[AttendanceRecord],
    leaves: &[Leave],
    today: NaiveDate,
) -> MonthGrid {
    let days = days_in_month(year, month);
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return MonthGrid {
            leading_blanks: 0,
            cells: Vec::new(),
        };
    };

    let mut by_day: HashMap<u32, String> = HashMap::new();

    for leave in leaves {
        if !leave.status.eq_ignore_ascii_case("approved") {
            continue;
        }
        for date in leave_days(leave) {
            if date.year() == year && date.month() == month {
                by_day.insert(date.day(), "leave".to_string());
            }
        }
    }

    for record in records {
        let date = record.date.date_naive();
        if date.year() == year && date.month() == month {
            by_day.insert(date.day(), record.status.to_lowercase());
        }
    }

    let cells = (1..=days)
        .filter_map(|day| {
            let date = NaiveDate::from_ymd_opt(year, month, day)?;
            let status = match by_day.get(&day) {
                Some(status) => status.clone(),
                None if date > today => "none".to_string(),
                None if is_weekend(date) => "none".to_string(),
                None => "absent".to_string(),
            };
            Some(CalendarCell { day, date, status })
        })
        .collect();

    MonthGrid {
        leading_blanks: first.weekday().num_days_from_sunday(),
        cells,
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), chrono::Weekday::Sat | chrono::Weekday::Sun)
}

fn leave_days(leave: &Leave) -> impl Iterator<Item = NaiveDate> + '_ {
    let start = leave.start_date.date_naive();
    let end = leave.end_date.date_naive();
    start.iter_days().take_while(move |date| *date <= end)
}

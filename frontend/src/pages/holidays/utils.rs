use chrono::{Datelike, NaiveDate};
use leptos::*;

use crate::api::{ApiError, Holiday, HolidayPayload};

/// Groups holidays by calendar year, years and days in chronological order.
pub fn group_by_year(mut holidays: Vec<Holiday>) -> Vec<(i32, Vec<Holiday>)> {
    holidays.sort_by_key(|holiday| holiday.date);
    let mut groups: Vec<(i32, Vec<Holiday>)> = Vec::new();
    for holiday in holidays {
        let year = holiday.date.date_naive().year();
        match groups.last_mut() {
            Some((group_year, group)) if *group_year == year => group.push(holiday),
            _ => groups.push((year, vec![holiday])),
        }
    }
    groups
}

pub fn date_label(holiday: &Holiday) -> String {
    holiday
        .date
        .date_naive()
        .format("%A, %B %-d, %Y")
        .to_string()
}

/// Short month plus day number for the calendar tile next to each row.
pub fn date_tile(holiday: &Holiday) -> (String, u32) {
    let date = holiday.date.date_naive();
    (date.format("%b").to_string(), date.day())
}

fn parse_date(raw: &str) -> Result<NaiveDate, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation("Date is required."));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| ApiError::validation("Date must be a valid date."))
}

#[derive(Clone, Copy)]
pub struct HolidayFormState {
    name: RwSignal<String>,
    date: RwSignal<String>,
    description: RwSignal<String>,
}

impl Default for HolidayFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            date: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
        }
    }
}

impl HolidayFormState {
    pub fn name_signal(&self) -> RwSignal<String> {
        self.name
    }

    pub fn date_signal(&self) -> RwSignal<String> {
        self.date
    }

    pub fn description_signal(&self) -> RwSignal<String> {
        self.description
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.date.set(String::new());
        self.description.set(String::new());
    }

    pub fn load_from_holiday(&self, holiday: &Holiday) {
        self.name.set(holiday.name.clone());
        self.date
            .set(holiday.date.date_naive().format("%Y-%m-%d").to_string());
        self.description
            .set(holiday.description.clone().unwrap_or_default());
    }

    pub fn to_payload(self) -> Result<HolidayPayload, ApiError> {
        let name = self.name.get();
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::validation("Holiday name is required."));
        }
        let date = parse_date(&self.date.get())?;
        let description = self.description.get();
        let description = description.trim();
        Ok(HolidayPayload {
            name: name.to_string(),
            date,
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;
    use chrono::{DateTime, Utc};

    fn holiday(name: &str, date: &str) -> Holiday {
        Holiday {
            id: format!("h-{name}"),
            name: name.into(),
            date: DateTime::parse_from_rfc3339(date)
                .unwrap()
                .with_timezone(&Utc),
            description: None,
        }
    }

    #[test]
    fn grouping_orders_years_and_days() {
        let groups = group_by_year(vec![
            holiday("Christmas", "2026-12-25T00:00:00Z"),
            holiday("New Year", "2026-01-01T00:00:00Z"),
            holiday("Founding Day", "2025-08-14T00:00:00Z"),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, 2025);
        assert_eq!(groups[1].0, 2026);
        assert_eq!(groups[1].1[0].name, "New Year");
        assert_eq!(groups[1].1[1].name, "Christmas");
    }

    #[test]
    fn labels_spell_out_the_weekday() {
        let subject = holiday("Founding Day", "2026-08-14T00:00:00Z");
        assert_eq!(date_label(&subject), "Friday, August 14, 2026");
        assert_eq!(date_tile(&subject), ("Aug".to_string(), 14));
    }

    #[test]
    fn payload_requires_a_name_and_a_parseable_date() {
        with_runtime(|| {
            let form = HolidayFormState::default();
            assert!(form.to_payload().is_err());

            form.name_signal().set("Founding Day".to_string());
            form.date_signal().set("14/08/2026".to_string());
            let err = form.to_payload().unwrap_err();
            assert!(err.error.contains("valid date"));

            form.date_signal().set("2026-08-14".to_string());
            form.description_signal().set("   ".to_string());
            let payload = form.to_payload().unwrap();
            assert_eq!(payload.name, "Founding Day");
            assert_eq!(payload.date, NaiveDate::from_ymd_opt(2026, 8, 14).unwrap());
            assert!(payload.description.is_none());
        });
    }

    #[test]
    fn editing_preloads_the_date_input() {
        with_runtime(|| {
            let form = HolidayFormState::default();
            form.load_from_holiday(&holiday("Christmas", "2026-12-25T00:00:00Z"));
            assert_eq!(form.name_signal().get(), "Christmas");
            assert_eq!(form.date_signal().get(), "2026-12-25");
        });
    }
}

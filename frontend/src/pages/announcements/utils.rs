use chrono::{DateTime, Utc};
use leptos::*;

use crate::api::{Announcement, AnnouncementPayload, ApiError};
use crate::utils::time::relative_time;

/// Feed order: newest post first, rows without a timestamp at the end.
pub fn sort_newest_first(mut announcements: Vec<Announcement>) -> Vec<Announcement> {
    announcements.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    announcements
}

pub fn byline(announcement: &Announcement, now: DateTime<Utc>) -> String {
    let author = announcement
        .author
        .as_ref()
        .map(|author| author.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or("Unknown");
    match announcement.created_at {
        Some(ts) => format!("{author} · {}", relative_time(ts, now)),
        None => author.to_string(),
    }
}

#[derive(Clone, Copy)]
pub struct AnnouncementFormState {
    title: RwSignal<String>,
    content: RwSignal<String>,
}

impl Default for AnnouncementFormState {
    fn default() -> Self {
        Self {
            title: create_rw_signal(String::new()),
            content: create_rw_signal(String::new()),
        }
    }
}

impl AnnouncementFormState {
    pub fn title_signal(&self) -> RwSignal<String> {
        self.title
    }

    pub fn content_signal(&self) -> RwSignal<String> {
        self.content
    }

    pub fn reset(&self) {
        self.title.set(String::new());
        self.content.set(String::new());
    }

    pub fn load_from_announcement(&self, announcement: &Announcement) {
        self.title.set(announcement.title.clone());
        self.content.set(announcement.content.clone());
    }

    pub fn to_payload(self) -> Result<AnnouncementPayload, ApiError> {
        let title = self.title.get();
        let title = title.trim();
        if title.is_empty() {
            return Err(ApiError::validation("Title is required."));
        }
        let content = self.content.get();
        let content = content.trim();
        if content.is_empty() {
            return Err(ApiError::validation("Content is required."));
        }
        Ok(AnnouncementPayload {
            title: title.to_string(),
            content: content.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AuthorRef;
    use crate::test_support::ssr::with_runtime;
    use chrono::Duration;

    fn announcement(title: &str, created_at: Option<DateTime<Utc>>) -> Announcement {
        Announcement {
            id: format!("a-{title}"),
            title: title.into(),
            content: "Body".into(),
            author: Some(AuthorRef {
                name: "HR User".into(),
            }),
            created_at,
        }
    }

    #[test]
    fn feed_puts_the_newest_post_first() {
        let now = Utc::now();
        let sorted = sort_newest_first(vec![
            announcement("old", Some(now - Duration::days(3))),
            announcement("undated", None),
            announcement("new", Some(now)),
        ]);
        assert_eq!(sorted[0].title, "new");
        assert_eq!(sorted[1].title, "old");
        assert_eq!(sorted[2].title, "undated");
    }

    #[test]
    fn byline_joins_author_and_age() {
        let now = Utc::now();
        let subject = announcement("news", Some(now - Duration::hours(2)));
        assert_eq!(byline(&subject, now), "HR User · 2h ago");

        let mut anonymous = announcement("news", None);
        anonymous.author = None;
        assert_eq!(byline(&anonymous, now), "Unknown");
    }

    #[test]
    fn payload_requires_title_and_content() {
        with_runtime(|| {
            let form = AnnouncementFormState::default();
            assert!(form.to_payload().is_err());

            form.title_signal().set("  Office move  ".to_string());
            let err = form.to_payload().unwrap_err();
            assert!(err.error.contains("Content"));

            form.content_signal().set("We are moving floors.".to_string());
            let payload = form.to_payload().unwrap();
            assert_eq!(payload.title, "Office move");
            assert_eq!(payload.content, "We are moving floors.");
        });
    }

    #[test]
    fn editing_preloads_both_fields() {
        with_runtime(|| {
            let form = AnnouncementFormState::default();
            form.load_from_announcement(&announcement("Quarterly update", Some(Utc::now())));
            assert_eq!(form.title_signal().get(), "Quarterly update");
            assert_eq!(form.content_signal().get(), "Body");
        });
    }
}

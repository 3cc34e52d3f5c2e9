use crate::api::{
    Announcement, AnnouncementPayload, ApiClient, ApiError, MessageResponse, ResourceTag,
    TagRegistry,
};

// Posts show up in the dashboard activity feed.
const WRITE_TAGS: &[ResourceTag] = &[ResourceTag::Announcement, ResourceTag::Dashboard];

pub async fn fetch_all(api: &ApiClient) -> Result<Vec<Announcement>, ApiError> {
    api.list_announcements().await
}

pub async fn create(
    api: &ApiClient,
    tags: TagRegistry,
    payload: AnnouncementPayload,
) -> Result<Announcement, ApiError> {
    let announcement = api.create_announcement(&payload).await?;
    tags.invalidate(WRITE_TAGS);
    Ok(announcement)
}

pub async fn update(
    api: &ApiClient,
    tags: TagRegistry,
    id: &str,
    payload: AnnouncementPayload,
) -> Result<Announcement, ApiError> {
    let announcement = api.update_announcement(id, &payload).await?;
    tags.invalidate(WRITE_TAGS);
    Ok(announcement)
}

pub async fn remove(
    api: &ApiClient,
    tags: TagRegistry,
    id: &str,
) -> Result<MessageResponse, ApiError> {
    let response = api.delete_announcement(id).await?;
    tags.invalidate(WRITE_TAGS);
    Ok(response)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn updating_puts_the_payload_and_invalidates() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(PUT).path("/api/announcements/a1").json_body(
                serde_json::json!({ "title": "Office move", "content": "New floor plan attached." }),
            );
            then.status(200).json_body(serde_json::json!({
                "_id": "a1",
                "title": "Office move",
                "content": "New floor plan attached.",
                "createdAt": "2026-08-20T09:00:00.000Z"
            }));
        });

        let api = ApiClient::new_with_base_url(&server.url("/api"));
        let runtime = leptos::create_runtime();
        let tags = TagRegistry::new();

        let announcement = update(
            &api,
            tags,
            "a1",
            AnnouncementPayload {
                title: "Office move".into(),
                content: "New floor plan attached.".into(),
            },
        )
        .await
        .unwrap();

        mock.assert_async().await;
        assert_eq!(announcement.title, "Office move");
        assert_eq!(tags.version(ResourceTag::Announcement), 1);
        assert_eq!(tags.version(ResourceTag::Dashboard), 1);
        assert_eq!(tags.version(ResourceTag::Holiday), 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn forbidden_create_keeps_caches() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/announcements");
            then.status(403)
                .json_body(serde_json::json!({ "message": "Not authorized" }));
        });

        let api = ApiClient::new_with_base_url(&server.url("/api"));
        let runtime = leptos::create_runtime();
        let tags = TagRegistry::new();

        let err = create(
            &api,
            tags,
            AnnouncementPayload {
                title: "Office move".into(),
                content: "New floor plan attached.".into(),
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.error, "Not authorized");
        assert_eq!(tags.version(ResourceTag::Announcement), 0);
        runtime.dispose();
    }
}

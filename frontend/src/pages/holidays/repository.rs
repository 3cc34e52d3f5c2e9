use crate::api::{
    ApiClient, ApiError, Holiday, HolidayPayload, MessageResponse, ResourceTag, TagRegistry,
};

// The server marks holiday days inside attendance ranges, so calendar
// views refetch after a holiday write.
const WRITE_TAGS: &[ResourceTag] = &[ResourceTag::Holiday, ResourceTag::Attendance];

pub async fn fetch_all(api: &ApiClient) -> Result<Vec<Holiday>, ApiError> {
    api.list_holidays().await
}

pub async fn create(
    api: &ApiClient,
    tags: TagRegistry,
    payload: HolidayPayload,
) -> Result<Holiday, ApiError> {
    let holiday = api.create_holiday(&payload).await?;
    tags.invalidate(WRITE_TAGS);
    Ok(holiday)
}

pub async fn update(
    api: &ApiClient,
    tags: TagRegistry,
    id: &str,
    payload: HolidayPayload,
) -> Result<Holiday, ApiError> {
    let holiday = api.update_holiday(id, &payload).await?;
    tags.invalidate(WRITE_TAGS);
    Ok(holiday)
}

pub async fn remove(
    api: &ApiClient,
    tags: TagRegistry,
    id: &str,
) -> Result<MessageResponse, ApiError> {
    let response = api.delete_holiday(id).await?;
    tags.invalidate(WRITE_TAGS);
    Ok(response)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn creating_posts_the_date_only_payload() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/holidays").json_body(
                serde_json::json!({ "name": "Founding Day", "date": "2026-08-14" }),
            );
            then.status(201).json_body(serde_json::json!({
                "_id": "h1",
                "name": "Founding Day",
                "date": "2026-08-14T00:00:00.000Z"
            }));
        });

        let api = ApiClient::new_with_base_url(&server.url("/api"));
        let runtime = leptos::create_runtime();
        let tags = TagRegistry::new();

        let holiday = create(
            &api,
            tags,
            HolidayPayload {
                name: "Founding Day".into(),
                date: chrono::NaiveDate::from_ymd_opt(2026, 8, 14).unwrap(),
                description: None,
            },
        )
        .await
        .unwrap();

        mock.assert_async().await;
        assert_eq!(holiday.name, "Founding Day");
        assert_eq!(tags.version(ResourceTag::Holiday), 1);
        assert_eq!(tags.version(ResourceTag::Attendance), 1);
        assert_eq!(tags.version(ResourceTag::Leave), 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn forbidden_delete_keeps_caches() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(DELETE).path("/api/holidays/h1");
            then.status(403)
                .json_body(serde_json::json!({ "message": "Not authorized" }));
        });

        let api = ApiClient::new_with_base_url(&server.url("/api"));
        let runtime = leptos::create_runtime();
        let tags = TagRegistry::new();

        let err = remove(&api, tags, "h1").await.unwrap_err();
        assert_eq!(err.error, "Not authorized");
        assert_eq!(tags.version(ResourceTag::Holiday), 0);
        assert_eq!(tags.version(ResourceTag::Attendance), 0);
        runtime.dispose();
    }
}

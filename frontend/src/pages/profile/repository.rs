use crate::api::{
    ApiClient, ApiError, AuthUser, MessageResponse, ResourceTag, TagRegistry, UpdateProfileRequest,
};

pub async fn fetch_profile(api: &ApiClient) -> Result<AuthUser, ApiError> {
    api.get_profile().await
}

pub async fn save_profile(
    api: &ApiClient,
    tags: TagRegistry,
    payload: UpdateProfileRequest,
) -> Result<AuthUser, ApiError> {
    let user = api.update_profile(&payload).await?;
    tags.invalidate(&[ResourceTag::Auth]);
    Ok(user)
}

pub async fn change_password(
    api: &ApiClient,
    current: &str,
    new: &str,
) -> Result<MessageResponse, ApiError> {
    api.change_password(current, new).await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn saving_the_profile_invalidates_the_auth_tag() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/api/auth/profile");
            then.status(200).json_body(serde_json::json!({
                "_id": "u1",
                "name": "Jane Renamed",
                "email": "jane@company.com",
                "role": "employee"
            }));
        });

        let api = ApiClient::new_with_base_url(&server.url("/api"));
        let runtime = leptos::create_runtime();
        let tags = TagRegistry::new();
        let user = save_profile(
            &api,
            tags,
            UpdateProfileRequest {
                name: "Jane Renamed".into(),
                email: "jane@company.com".into(),
                phone: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(user.name, "Jane Renamed");
        assert_eq!(tags.version(ResourceTag::Auth), 1);
        runtime.dispose();
    }

    #[tokio::test]
    async fn change_password_passes_through_backend_errors() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/api/auth/change-password");
            then.status(400)
                .json_body(serde_json::json!({ "message": "Current password is incorrect" }));
        });

        let api = ApiClient::new_with_base_url(&server.url("/api"));
        let err = change_password(&api, "wrong", "secret1").await.unwrap_err();
        assert_eq!(err.error, "Current password is incorrect");
        assert_eq!(err.code, "BAD_REQUEST");
    }
}

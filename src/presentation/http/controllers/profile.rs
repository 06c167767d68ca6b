// src/presentation/http/controllers/profile.rs
use crate::application::{
    commands::profile::{UpdateProfileCommand, UpdateThemeCommand},
    dto::{ProfileDto, ThemeDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    /// Empty string clears the value.
    pub display_name: Option<String>,
    /// Empty string clears the value.
    pub avatar_url: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateThemeRequest {
    #[serde(default)]
    pub theme: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/profile",
    responses(
        (status = 200, description = "Caller's profile.", body = ProfileDto),
        (status = 404, description = "No profile stored yet.", body = ErrorResponse)
    ),
    tag = "Profile"
)]
pub async fn get_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ProfileDto>> {
    state
        .services
        .profile_queries
        .get_profile(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/profile",
    request_body = UpdateProfileRequest,
    responses((status = 200, description = "Updated profile.", body = ProfileDto)),
    tag = "Profile"
)]
pub async fn update_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<UpdateProfileRequest>,
) -> HttpResult<Json<ProfileDto>> {
    let command = UpdateProfileCommand {
        display_name: payload.display_name,
        avatar_url: payload.avatar_url,
    };
    state
        .services
        .profile_commands
        .update_profile(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/profile/theme",
    responses((status = 200, description = "Caller's theme, light by default.", body = ThemeDto)),
    tag = "Profile"
)]
pub async fn get_theme(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ThemeDto>> {
    state
        .services
        .profile_queries
        .get_theme(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/profile/theme",
    request_body = UpdateThemeRequest,
    responses(
        (status = 200, description = "Theme stored.", body = ThemeDto),
        (status = 400, description = "Theme must be light or dark.", body = ErrorResponse)
    ),
    tag = "Profile"
)]
pub async fn update_theme(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<UpdateThemeRequest>,
) -> HttpResult<Json<ThemeDto>> {
    state
        .services
        .profile_commands
        .update_theme(
            &user,
            UpdateThemeCommand {
                theme: payload.theme,
            },
        )
        .await
        .into_http()
        .map(Json)
}

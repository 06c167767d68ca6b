// src/presentation/http/controllers/tags.rs
use crate::application::{commands::tags::CreateTagCommand, dto::TagDto};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTagRequest {
    #[serde(default)]
    pub name: String,
    pub color: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/tags",
    responses((status = 200, description = "Caller's tags sorted by name.", body = [TagDto])),
    tag = "Tags"
)]
pub async fn list_tags(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<TagDto>>> {
    state
        .services
        .tag_queries
        .list_tags(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/tags",
    request_body = CreateTagRequest,
    responses(
        (status = 201, description = "Tag created.", body = TagDto),
        (status = 400, description = "Missing or duplicate name.", body = ErrorResponse)
    ),
    tag = "Tags"
)]
pub async fn create_tag(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateTagRequest>,
) -> HttpResult<(StatusCode, Json<TagDto>)> {
    let command = CreateTagCommand {
        name: payload.name,
        color: payload.color,
    };
    let tag = state
        .services
        .tag_commands
        .create_tag(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(tag)))
}

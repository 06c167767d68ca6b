// src/presentation/http/controllers/items.rs
use crate::application::{
    commands::items::{CreateItemCommand, UpdateItemCommand},
    dto::ItemDto,
    queries::items::ListItemsQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::MessageResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListItemsParams {
    /// Case-insensitive match against title and content.
    pub search: Option<String>,
    /// `thought`, `link`, `bookmark`, `clip` or `all`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    #[serde(default)]
    pub title: String,
    pub content: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub source_url: Option<String>,
    pub is_public: Option<bool>,
    pub share_slug: Option<String>,
    pub tag_ids: Option<Vec<i64>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub source_url: Option<String>,
    pub is_public: Option<bool>,
    pub share_slug: Option<String>,
    /// Replaces the full tag set when present; `[]` removes every tag.
    pub tag_ids: Option<Vec<i64>>,
}

#[utoipa::path(
    get,
    path = "/api/v1/items",
    params(ListItemsParams),
    responses(
        (status = 200, description = "Caller's items, newest first.", body = [ItemDto]),
        (status = 400, description = "Unknown item type.", body = ErrorResponse)
    ),
    tag = "Items"
)]
pub async fn list_items(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<ListItemsParams>,
) -> HttpResult<Json<Vec<ItemDto>>> {
    let query = ListItemsQuery {
        kind: params.kind,
        search: params.search,
    };
    state
        .services
        .item_queries
        .list_items(&user, query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created.", body = ItemDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 409, description = "No share slug could be reserved.", body = ErrorResponse)
    ),
    tag = "Items"
)]
pub async fn create_item(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateItemRequest>,
) -> HttpResult<(StatusCode, Json<ItemDto>)> {
    let command = CreateItemCommand {
        title: payload.title,
        content: payload.content,
        kind: payload.kind,
        source_url: payload.source_url,
        is_public: payload.is_public,
        share_slug: payload.share_slug,
        tag_ids: payload.tag_ids,
    };

    let item = state
        .services
        .item_commands
        .create_item(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    get,
    path = "/api/v1/items/{id}",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "The item with its tags.", body = ItemDto),
        (status = 404, description = "Item not found.", body = ErrorResponse)
    ),
    tag = "Items"
)]
pub async fn get_item(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ItemDto>> {
    state
        .services
        .item_queries
        .get_item(&user, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/items/{id}",
    params(("id" = i64, Path, description = "Item id")),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Updated item.", body = ItemDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 404, description = "Item not found.", body = ErrorResponse),
        (status = 409, description = "No share slug could be reserved.", body = ErrorResponse)
    ),
    tag = "Items"
)]
pub async fn update_item(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateItemRequest>,
) -> HttpResult<Json<ItemDto>> {
    let command = UpdateItemCommand {
        id,
        title: payload.title,
        content: payload.content,
        kind: payload.kind,
        source_url: payload.source_url,
        is_public: payload.is_public,
        share_slug: payload.share_slug,
        tag_ids: payload.tag_ids,
    };

    state
        .services
        .item_commands
        .update_item(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/items/{id}",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item and its tag links removed.", body = MessageResponse),
        (status = 404, description = "Item not found.", body = ErrorResponse)
    ),
    tag = "Items"
)]
pub async fn delete_item(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .item_commands
        .delete_item(&user, id)
        .await
        .into_http()?;
    Ok(Json(MessageResponse::ok("Item deleted successfully")))
}

#[utoipa::path(
    patch,
    path = "/api/v1/items/{id}/star",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item with the flipped star flag.", body = ItemDto),
        (status = 404, description = "Item not found.", body = ErrorResponse)
    ),
    tag = "Items"
)]
pub async fn toggle_star(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ItemDto>> {
    state
        .services
        .item_commands
        .toggle_star(&user, id)
        .await
        .into_http()
        .map(Json)
}

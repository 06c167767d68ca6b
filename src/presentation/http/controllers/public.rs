use crate::application::dto::ItemDto;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/public/shared/{slug}",
    params(("slug" = String, Path, description = "Share slug")),
    responses(
        (status = 200, description = "The shared item.", body = ItemDto),
        (status = 404, description = "No public item under this slug.", body = ErrorResponse)
    ),
    security(()),
    tag = "Public"
)]
pub async fn get_shared_item(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ItemDto>> {
    state
        .services
        .item_queries
        .get_public_item(&slug)
        .await
        .into_http()
        .map(Json)
}

use crate::application::dto::ExportDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/export",
    responses((status = 200, description = "All items and tags owned by the caller.", body = ExportDto)),
    tag = "Export"
)]
pub async fn export_data(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ExportDto>> {
    state
        .services
        .export_queries
        .export(&user)
        .await
        .into_http()
        .map(Json)
}

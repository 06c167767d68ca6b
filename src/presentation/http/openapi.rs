// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::signup,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::logout,
        crate::presentation::http::controllers::auth::me,
        crate::presentation::http::controllers::items::list_items,
        crate::presentation::http::controllers::items::create_item,
        crate::presentation::http::controllers::items::get_item,
        crate::presentation::http::controllers::items::update_item,
        crate::presentation::http::controllers::items::delete_item,
        crate::presentation::http::controllers::items::toggle_star,
        crate::presentation::http::controllers::tags::list_tags,
        crate::presentation::http::controllers::tags::create_tag,
        crate::presentation::http::controllers::profile::get_profile,
        crate::presentation::http::controllers::profile::update_profile,
        crate::presentation::http::controllers::profile::get_theme,
        crate::presentation::http::controllers::profile::update_theme,
        crate::presentation::http::controllers::export::export_data,
        crate::presentation::http::controllers::public::get_shared_item,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            MessageResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::SignupRequest,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::items::CreateItemRequest,
            crate::presentation::http::controllers::items::UpdateItemRequest,
            crate::presentation::http::controllers::tags::CreateTagRequest,
            crate::presentation::http::controllers::profile::UpdateProfileRequest,
            crate::presentation::http::controllers::profile::UpdateThemeRequest,
            crate::application::dto::AuthSessionDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::UserDto,
            crate::application::dto::ItemDto,
            crate::application::dto::TagDto,
            crate::application::dto::TagSummaryDto,
            crate::application::dto::ProfileDto,
            crate::application::dto::ThemeDto,
            crate::application::dto::ExportDto,
            crate::domain::item::ItemKind,
            crate::domain::profile::Theme
        )
    ),
    tags(
        (name = "Auth", description = "Signup, login and the current account"),
        (name = "Items", description = "Captured thoughts, links, bookmarks and clips"),
        (name = "Tags", description = "Per-user tags"),
        (name = "Profile", description = "Display settings"),
        (name = "Export", description = "Full data export"),
        (name = "Public", description = "Unauthenticated share pages"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Second Brain API",
        description = "Personal knowledge capture backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push(DEFAULT_SERVER_URL.to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

/// Swagger UI at `/docs` (which also serves `/openapi.json`) and ReDoc at `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

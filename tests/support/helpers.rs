// tests/support/helpers.rs
use super::mocks::{InMemoryStore, PlainPasswordHasher, StaticTokenManager, TickingClock, fixed_now};
use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use chrono::Duration;
use second_brain::{
    application::{
        dto::AuthenticatedUser,
        ports::{time::Clock, util::SlugGenerator},
        services::ApplicationServices,
    },
    domain::user::UserId,
    infrastructure::util::{DefaultSlugGenerator, TimestampedSlugGenerator},
    presentation::http::{routes::build_router, state::HttpState},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Services wired to one shared in-memory store.
pub struct TestApp {
    pub store: Arc<InMemoryStore>,
    pub services: Arc<ApplicationServices>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_slugs(|_| -> Arc<dyn SlugGenerator> { Arc::new(DefaultSlugGenerator) })
    }

    /// Share slugs carry a base-36 clock suffix, as with
    /// `SHARE_SLUG_STRATEGY=timestamped`.
    pub fn with_timestamped_slugs() -> Self {
        Self::with_slugs(|clock| -> Arc<dyn SlugGenerator> {
            Arc::new(TimestampedSlugGenerator::new(clock))
        })
    }

    fn with_slugs(slugger: impl FnOnce(Arc<dyn Clock>) -> Arc<dyn SlugGenerator>) -> Self {
        let store = Arc::new(InMemoryStore::new());
        let clock: Arc<dyn Clock> = Arc::new(TickingClock::default());
        let services = Arc::new(ApplicationServices::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            Arc::new(PlainPasswordHasher),
            Arc::new(StaticTokenManager),
            Arc::clone(&clock),
            slugger(clock),
        ));
        Self { store, services }
    }

    pub fn router(&self) -> Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router(state, &["*".to_string()])
    }
}

/// A caller as the token manager would report it, without going through signup.
pub fn actor(id: i64) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId(id),
        email: format!("user{id}@example.com"),
        issued_at: fixed_now(),
        expires_at: fixed_now() + Duration::hours(1),
    }
}

pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");
    router.clone().oneshot(request).await.expect("router response")
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Send and expect `status`, returning the decoded JSON body.
pub async fn send_json(
    router: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
    status: StatusCode,
) -> Value {
    let resp = send(router, method.clone(), uri, token, body).await;
    assert_eq!(resp.status(), status, "{method} {uri}");
    json_body(resp).await
}

/// Register an account over HTTP and return its bearer token.
pub async fn signup(router: &Router, email: &str) -> String {
    let body = send_json(
        router,
        Method::POST,
        "/api/v1/auth/signup",
        None,
        Some(serde_json::json!({ "email": email, "password": "secret123" })),
        StatusCode::CREATED,
    )
    .await;
    body["token"]["token"]
        .as_str()
        .expect("token in signup response")
        .to_string()
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = json_body(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use crate::server::{
    config::Config,
    error::AppError,
    router::router,
    service::{geocoder::StaticGeocoder, mailer::MemoryMailer},
    state::AppState,
};
use test_utils::{builder::TestBuilder, factory};


const BOSTON_ADDRESS: &str = "233 Bay State Rd Boston MA 02215";

/// Router wired to a test database, a fixed geocoder and an in-memory mailer.
struct TestApp {
    router: Router,
    state: AppState,
    mailer: Arc<MemoryMailer>,
    uploads: TempDir,
}

impl TestApp {
    fn new(db: &DatabaseConnection) -> Self {
        let uploads = tempfile::tempdir().unwrap();
        let mailer = Arc::new(MemoryMailer::default());
        let geocoder = StaticGeocoder::new()
            .with(BOSTON_ADDRESS, 42.3505, -71.1054)
            .with("02215", 42.3478, -71.1019);

        let state = AppState::new(
            db.clone(),
            Config::for_test(uploads.path().to_path_buf()),
            Arc::new(geocoder),
            mailer.clone(),
        );

        Self {
            router: router(state.clone()),
            state,
            mailer,
            uploads,
        }
    }

    fn token_for(&self, user_id: i32) -> String {
        self.state.jwt.create_token(user_id).unwrap()
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, headers, body)
    }
}

fn request(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match token {
        Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {}", token)),
        None => builder,
    }
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    request(Method::GET, uri, token).body(Body::empty()).unwrap()
}

fn delete(uri: &str, token: Option<&str>) -> Request<Body> {
    request(Method::DELETE, uri, token).body(Body::empty()).unwrap()
}

fn json(method: Method, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    request(method, uri, token)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

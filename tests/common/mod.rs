use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use fireconf::fireconf_config::{MapEnv, keys};
use fireconf::router::init_router;
use fireconf::state::AppState;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const CONFIG_PATH: &str = "/api/firebase-config";

/// Allowlist plus every `FIREBASE_*` value set.
pub fn full_env(allowed_hosts: &str) -> MapEnv {
    MapEnv::new()
        .with(keys::ALLOWED_HOSTS, allowed_hosts)
        .with(keys::FIREBASE_API_KEY, "AIzaSyTestKey")
        .with(keys::FIREBASE_AUTH_DOMAIN, "redicat-a8376.firebaseapp.com")
        .with(keys::FIREBASE_PROJECT_ID, "redicat-a8376")
        .with(keys::FIREBASE_STORAGE_BUCKET, "redicat-a8376.appspot.com")
        .with(keys::FIREBASE_MESSAGING_SENDER_ID, "123456789012")
        .with(keys::FIREBASE_APP_ID, "1:123456789012:web:abcdef")
        .with(keys::FIREBASE_MEASUREMENT_ID, "G-ABCDEF1234")
}

pub fn setup_test_app(env: MapEnv) -> axum::Router {
    init_router(AppState::with_env(env))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

pub async fn send(app: axum::Router, method: &str, host: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(CONFIG_PATH)
        .header("host", host)
        .body(Body::empty())
        .unwrap();

    send_request(app, request).await
}

pub async fn send_request(app: axum::Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(body.to_vec()).unwrap(),
    }
}

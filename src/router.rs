use crate::logging::logging_middleware;
use crate::modules::firebase_config::router::init_firebase_config_router;
use crate::state::AppState;
use axum::{Router, middleware};
use tower_http::catch_panic::CatchPanicLayer;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", init_firebase_config_router())
        .with_state(state)
        .layer(CatchPanicLayer::new())
        .layer(middleware::from_fn(logging_middleware))
}

use axum::{Router, routing::any};

use crate::state::AppState;

use super::controller::get_firebase_config;

pub fn init_firebase_config_router() -> Router<AppState> {
    Router::new().route("/firebase-config", any(get_firebase_config))
}

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use fireconf_core::AppError;

use crate::middleware::host::RequestHost;
use crate::modules::firebase_config::model::{JSON_CONTENT_TYPE, NO_STORE_CACHE_CONTROL};
use crate::modules::firebase_config::service::FirebaseConfigService;
use crate::state::AppState;

/// Serves the Firebase web config to allowlisted hosts.
///
/// Any HTTP method is answered the same way and the request body is ignored.
#[instrument(skip(state))]
pub async fn get_firebase_config(
    State(state): State<AppState>,
    RequestHost(host): RequestHost,
) -> Result<Response, AppError> {
    let config = FirebaseConfigService::resolve(state.env.as_ref(), &host)?;

    let body = serde_json::to_string(&config).map_err(AppError::internal)?;

    Ok((
        [
            (header::CONTENT_TYPE, JSON_CONTENT_TYPE),
            (header::CACHE_CONTROL, NO_STORE_CACHE_CONTROL),
        ],
        body,
    )
        .into_response())
}

use anyhow::Error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// An error that is rendered straight into an HTTP response.
///
/// The body is the `Display` output of the wrapped error, sent as
/// `text/plain`. Callers are responsible for wrapping an error whose message
/// is safe to show to clients.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn forbidden<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::FORBIDDEN, err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, self.error.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;
    use http_body_util::BodyExt;

    #[test]
    fn test_forbidden_status() {
        let err = AppError::forbidden(anyhow::anyhow!("Forbidden"));
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_internal_status() {
        let err = AppError::internal(anyhow::anyhow!("boom"));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_into_response_is_plain_text() {
        let response = AppError::forbidden(anyhow::anyhow!("Forbidden")).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"Forbidden");
    }
}

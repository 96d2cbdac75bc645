use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, Uri, header, request::Parts, uri::Authority},
};

/// The lower-cased `host[:port]` the request was addressed to.
///
/// Taken from the URI authority when the request line is in absolute form
/// (and for HTTP/2, where `:authority` lands in the URI), otherwise from the
/// `Host` header. The scheme's default port is dropped, any other port is
/// kept. Requests without a usable host yield an empty string, which no
/// allowlist entry matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHost(pub String);

impl<S> FromRequestParts<S> for RequestHost
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(RequestHost(request_host(&parts.uri, &parts.headers)))
    }
}

pub fn request_host(uri: &Uri, headers: &HeaderMap) -> String {
    let authority = uri.authority().cloned().or_else(|| {
        headers
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<Authority>().ok())
    });

    let Some(authority) = authority else {
        return String::new();
    };

    let default_port = match uri.scheme_str() {
        Some("https") => 443,
        _ => 80,
    };

    let host = authority.host().to_lowercase();
    match authority.port_u16() {
        Some(port) if port != default_port => format!("{host}:{port}"),
        _ => host,
    }
}

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use fireconf_config::{LogFormat, LoggingConfig};
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::{
    EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt,
};

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let matched_path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    let request_id = uuid::Uuid::new_v4().to_string();

    info!(
        request_id = %request_id,
        method = %method,
        path = %matched_path,
        "Incoming request"
    );

    let response = next.run(req).await;
    let latency = start.elapsed();
    let status = response.status();

    match status.as_u16() {
        400..=499 => {
            warn!(
                request_id = %request_id,
                method = %method,
                path = %matched_path,
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                "Client error"
            );
        }
        500..=599 => {
            error!(
                request_id = %request_id,
                method = %method,
                path = %matched_path,
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                "Server error"
            );
        }
        _ => {
            info!(
                request_id = %request_id,
                method = %method,
                path = %matched_path,
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                "Request completed"
            );
        }
    }

    response
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `LOG_LEVEL` for the console. With `LOG_DIR` set, info
/// and above is also written as JSON to a daily rolling file there.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    use std::fs;
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::fmt;

    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={},tower_http=warn,hyper=warn",
            env!("CARGO_CRATE_NAME"),
            config.level
        ))
    });

    let console_layer: Box<dyn Layer<Registry> + Send + Sync> = match config.format {
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        LogFormat::Json => fmt::layer().json().with_current_span(true).boxed(),
    };

    let file_layer = match &config.dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let json_appender = RollingFileAppender::new(Rotation::DAILY, dir, "fireconf.json");

            Some(
                fmt::layer()
                    .json()
                    .with_writer(json_appender)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_filter(EnvFilter::new("info")),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer.with_filter(console_filter))
        .with(file_layer)
        .try_init()?;

    match &config.dir {
        Some(dir) => info!(log_dir = %dir.display(), "Tracing initialized with file logging"),
        None => info!("Tracing initialized (console only)"),
    }

    Ok(())
}

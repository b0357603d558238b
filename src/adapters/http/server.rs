//! HTTP server assembly: middleware stack, bind, graceful shutdown.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::adapters::memory::InMemoryStore;
use crate::config::{ServerConfig, ValidationError};

use super::error::json_error_body;
use super::router::api_router;

/// The API router wrapped in the configured middleware.
pub fn build_app(config: &ServerConfig, store: &InMemoryStore) -> Result<Router, ValidationError> {
    with_middleware(api_router(store), config)
}

/// Timeout and body-limit rejections are rewritten to `{message}` bodies
/// before CORS and tracing see them.
fn with_middleware(router: Router, config: &ServerConfig) -> Result<Router, ValidationError> {
    let app = router
        .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
        .layer(RequestBodyLimitLayer::new(config.body_limit_bytes()))
        .layer(middleware::map_response(json_error_body))
        .layer(cors_layer(config)?)
        .layer(TraceLayer::new_for_http());
    Ok(app)
}

fn cors_layer(config: &ServerConfig) -> Result<CorsLayer, ValidationError> {
    let origins = config.cors_origins_list();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let values = origins
            .into_iter()
            .map(|origin| {
                HeaderValue::from_str(&origin).map_err(|_| ValidationError::InvalidCorsOrigin(origin))
            })
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(values)
    };

    Ok(CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(allow_origin))
}

/// Binds and serves until Ctrl+C or SIGTERM.
pub async fn serve(config: &ServerConfig, app: Router) -> std::io::Result<()> {
    let addr = config
        .socket_addr()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;
    let listener = TcpListener::bind(addr).await?;

    info!(%addr, environment = ?config.environment, "server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::routing::get;
    use tower::ServiceExt;

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn oversized_body_is_413_with_message() {
        let config = ServerConfig {
            body_limit_kb: 1,
            ..Default::default()
        };
        let app = build_app(&config, &InMemoryStore::new()).unwrap();
        let big = format!(r#"{{"name":"{}"}}"#, "x".repeat(4096));

        let (status, body) = send(
            app,
            Request::builder()
                .method("POST")
                .uri("/api/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::CONTENT_LENGTH, big.len())
                .body(Body::from(big))
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["message"], "Request body too large");
    }

    #[tokio::test]
    async fn oversized_body_without_length_header_is_413() {
        let config = ServerConfig {
            body_limit_kb: 1,
            ..Default::default()
        };
        let app = build_app(&config, &InMemoryStore::new()).unwrap();
        let big = format!(r#"{{"email":"{}"}}"#, "x".repeat(4096));

        let (status, body) = send(
            app,
            Request::builder()
                .method("POST")
                .uri("/api/newsletter")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(big))
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["message"], "Request body too large");
    }

    #[tokio::test]
    async fn slow_request_is_408_with_message() {
        let config = ServerConfig {
            request_timeout_secs: 1,
            ..Default::default()
        };
        let slow = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "done"
            }),
        );
        let app = with_middleware(slow, &config).unwrap();

        let (status, body) = send(
            app,
            Request::builder().uri("/slow").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
        assert_eq!(body["message"], "Request timed out");
    }

    #[tokio::test]
    async fn wrong_method_is_405_with_message() {
        let app = build_app(&ServerConfig::default(), &InMemoryStore::seeded()).unwrap();

        let (status, body) = send(
            app,
            Request::builder()
                .method("DELETE")
                .uri("/api/courses")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["message"], "Method not allowed");
    }

    #[tokio::test]
    async fn configured_origin_is_echoed_in_cors_headers() {
        let config = ServerConfig {
            cors_origins: Some("http://localhost:5173".to_string()),
            ..Default::default()
        };
        let app = build_app(&config, &InMemoryStore::seeded()).unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
    }
}

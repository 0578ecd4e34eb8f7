mod config;
mod routes;
mod shutdown;

use std::future::Future;

use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;

/// Build the application router. Called once at startup.
fn build_router() -> Router {
    Router::new()
        .route("/", get(routes::index::index))
        .route("/health", get(routes::health::health))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    run(config, shutdown::shutdown_signal()).await
}

/// Bind the configured address and serve until `shutdown` resolves.
async fn run(
    config: ServerConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        "{} server v{} listening on {}",
        routes::APP_NAME,
        routes::health::SERVICE_VERSION,
        addr
    );
    info!("Routes:");
    info!("  GET  /");
    info!("  GET  /health");

    serve(listener, shutdown).await
}

async fn serve(
    listener: tokio::net::TcpListener,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    axum::serve(listener, build_router())
        .with_graceful_shutdown(shutdown)
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(router: Router, method: Method, uri: &str) -> (StatusCode, Vec<u8>) {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let resp = router.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_root_endpoint() {
        let (status, body) = send(build_router(), Method::GET, "/").await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body,
            json!({ "message": "Server is running!", "app": "Expert Potato" })
        );
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (status, body) = send(build_router(), Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body,
            json!({ "service": "Expert Potato", "version": "0.0.1" })
        );
    }

    #[tokio::test]
    async fn test_health_content_type_is_json() {
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let resp = build_router().oneshot(req).await.unwrap();
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_repeated_requests_are_byte_identical() {
        let router = build_router();
        for uri in ["/", "/health"] {
            let (_, first) = send(router.clone(), Method::GET, uri).await;
            for _ in 0..5 {
                let (status, again) = send(router.clone(), Method::GET, uri).await;
                assert_eq!(status, StatusCode::OK);
                assert_eq!(again, first);
            }
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_health_requests() {
        let router = build_router();
        let mut tasks = tokio::task::JoinSet::new();
        for _ in 0..32 {
            let router = router.clone();
            tasks.spawn(async move { send(router, Method::GET, "/health").await });
        }

        let mut done = 0;
        while let Some(result) = tasks.join_next().await {
            let (status, body) = result.unwrap();
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, br#"{"service":"Expert Potato","version":"0.0.1"}"#);
            done += 1;
        }
        assert_eq!(done, 32);
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let (status, _) = send(build_router(), Method::GET, "/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_wrong_method_is_405() {
        let (status, _) = send(build_router(), Method::POST, "/health").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_health_over_tcp_then_graceful_stop() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
        let server = tokio::spawn(serve(listener, async {
            stop_rx.await.ok();
        }));

        let resp = reqwest::get(format!("http://{addr}/health")).await.unwrap();
        assert_eq!(resp.status().as_u16(), 200);
        let body = resp.text().await.unwrap();
        assert!(body.contains(r#""version":"0.0.1""#));

        stop_tx.send(()).unwrap();
        server.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_run_fails_when_port_is_taken() {
        let held = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let config = ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: held.local_addr().unwrap().port(),
        };

        let err = run(config, std::future::pending()).await.unwrap_err();
        assert!(err.to_string().contains("failed to bind"));
    }
}

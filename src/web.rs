use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::{self, AppState};
use crate::config::ServerConfig;

/// API under `/api`, everything else served from the frontend bundle
pub fn app(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api::router(state))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub async fn run(config: &ServerConfig, state: AppState) -> Result<()> {
    let app = app(state, &config.static_dir);
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", config.host, config.port))?;

    if let Some(tls) = &config.tls {
        return serve_tls(addr, app, &tls.cert_path, &tls.key_path).await;
    }

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server terminated")?;
    Ok(())
}

#[cfg(feature = "tls")]
async fn serve_tls(
    addr: SocketAddr,
    app: Router,
    cert_path: &std::path::Path,
    key_path: &std::path::Path,
) -> Result<()> {
    use axum_server::tls_rustls::RustlsConfig;

    let rustls = RustlsConfig::from_pem_file(cert_path, key_path)
        .await
        .with_context(|| format!("Failed to load TLS material from {}", cert_path.display()))?;

    tracing::info!("Web server running at https://{}", addr);
    axum_server::bind_rustls(addr, rustls)
        .serve(app.into_make_service())
        .await
        .context("TLS web server terminated")?;
    Ok(())
}

#[cfg(not(feature = "tls"))]
async fn serve_tls(
    _addr: SocketAddr,
    _app: Router,
    _cert_path: &std::path::Path,
    _key_path: &std::path::Path,
) -> Result<()> {
    anyhow::bail!("TLS is configured but this build was compiled without the `tls` feature")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

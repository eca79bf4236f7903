//! HTTP server implementation

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tokio::signal;
use tower_http::compression::CompressionLayer;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing::warn;

use crate::api::handlers::AppState;
use crate::api::routes;
use crate::config::AppConfig;
use crate::matcher::build_matcher;
use crate::Result;

/// Assemble the router with tracing, compression and optional CORS.
///
/// Request bodies are not size-limited.
pub fn build_app(state: AppState, enable_cors: bool) -> Router {
    let mut app = routes::api_routes(state)
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Start the API server
pub async fn serve_api(config: &AppConfig) -> Result<()> {
    info!("🚀 Starting faqbot API server...");

    let matcher = build_matcher(config.catalog_path(), config.strategy())?;
    let state = AppState::new(matcher);

    if config.server.enable_cors {
        info!("✅ CORS enabled for any origin");
    } else {
        warn!("CORS disabled; browser clients on other origins will be rejected");
    }
    let app = build_app(state, config.server.enable_cors);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 API server listening on http://{}", addr);
    info!("  POST /ask  - Answer a message");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

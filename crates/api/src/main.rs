use std::net::SocketAddr;
use std::sync::Arc;

use folio_content::{ContentSnapshot, ContentSource, DeliveryClient, DeliveryConfig, FixtureSource};
use folio_core::messages::MessageCatalog;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_api::config::{ContentBackendConfig, ServerConfig};
use folio_api::router::build_app_router;
use folio_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, locales = ?config.locales, "Loaded server configuration");

    // --- Content snapshot (the one-time build fetch) ---
    let source: Box<dyn ContentSource> = match &config.content {
        ContentBackendConfig::Delivery {
            api_url,
            space_id,
            access_token,
        } => Box::new(DeliveryClient::new(DeliveryConfig {
            base_url: api_url.clone(),
            space_id: space_id.clone(),
            access_token: access_token.clone(),
        })),
        ContentBackendConfig::Fixture => {
            tracing::warn!("CONTENT_FIXTURE is set, serving the built-in demo content");
            Box::new(FixtureSource::demo())
        }
    };

    let snapshot = ContentSnapshot::load(source.as_ref(), &config.locales)
        .await
        .expect("Failed to load content snapshot");
    tracing::info!(
        locales = snapshot.locale_count(),
        default_locale = snapshot.default_locale(),
        "Content snapshot loaded"
    );

    // --- App state ---
    let state = AppState {
        content: Arc::new(snapshot),
        messages: Arc::new(MessageCatalog::builtin()),
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}

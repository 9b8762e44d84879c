//! Web layer module
//!
//! HTTP interface for the recipe service. Handlers are thin and delegate
//! to the catalog and presenter; all responses share the [`ApiResponse`]
//! envelope.

use anyhow::Result;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{catalog::RecipeCatalog, config::Config, presentation::Presenter};

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod responses;

pub use extractors::{ApiJson, ListParams, SearchParams};
pub use responses::{ApiResponse, PaginatedResponse, handle_error, handle_result};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<RecipeCatalog>,
    pub presenter: Presenter,
}

impl AppState {
    /// Build state from config, seeding the catalog if configured
    pub fn new(config: Config) -> Self {
        let catalog = if config.catalog.seed_fallback_recipes {
            RecipeCatalog::with_fallback()
        } else {
            RecipeCatalog::default()
        };

        Self {
            config,
            catalog: Arc::new(catalog),
            presenter: Presenter::default(),
        }
    }
}

/// Build the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let max_request_size = state.config.web.max_request_size;

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .nest("/api/v1", api_v1_routes())
        // Middleware (applied in reverse order)
        .layer(DefaultBodyLimit::max(max_request_size))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(
            middleware::request_logging_middleware,
        ))
        .with_state(state)
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/recipes",
            get(handlers::recipes::list_recipes).post(handlers::recipes::submit_recipe),
        )
        .route("/recipes/search", get(handlers::recipes::search_recipes))
        .route("/recipes/{id}", get(handlers::recipes::get_recipe))
        .route("/categories", get(handlers::recipes::list_categories))
        .route("/videos", get(handlers::recipes::list_videos))
        .route("/resolve/image", get(handlers::resolve::resolve_image))
        .route("/resolve/diet", get(handlers::resolve::classify))
        .route("/calculator", post(handlers::calculator::calculate))
}

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(config: Config) -> Result<Self> {
        let ip: IpAddr = config.web.host.parse()?;
        let addr = SocketAddr::new(ip, config.web.port);
        let app = create_app(AppState::new(config));
        Ok(Self { app, addr })
    }

    /// Serve until SIGINT/SIGTERM
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let (Ok(mut sigterm), Ok(mut sigint)) = (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) else {
            tracing::warn!("Failed to install signal handlers; graceful shutdown disabled");
            return std::future::pending().await;
        };

        tokio::select! {
            _ = sigterm.recv() => {
                tracing::info!("Received SIGTERM, shutting down gracefully");
            }
            _ = sigint.recv() => {
                tracing::info!("Received SIGINT (Ctrl+C), shutting down gracefully");
            }
        }
    }

    #[cfg(not(unix))]
    {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received Ctrl+C, shutting down gracefully");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_host(host: &str) -> Config {
        let mut config = Config::default();
        config.web.host = host.to_string();
        config.web.port = 9090;
        config
    }

    #[test]
    fn test_web_server_binds_ipv4_and_ipv6() {
        let server = WebServer::new(config_with_host("127.0.0.1")).unwrap();
        assert_eq!(server.host(), "127.0.0.1");
        assert_eq!(server.port(), 9090);

        let server = WebServer::new(config_with_host("::1")).unwrap();
        assert_eq!(server.host(), "::1");
        assert_eq!(server.addr, "[::1]:9090".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_web_server_rejects_invalid_host() {
        assert!(WebServer::new(config_with_host("not an address")).is_err());
    }
}

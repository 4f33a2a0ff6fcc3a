//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, status metrics, body limit, timeout)
//! - Bind server to listener
//! - Drain in-flight requests on shutdown

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::LoggerConfig;
use crate::http::handlers::{get_health, log_overdue_speaker};
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::observability::metrics::track_status;
use crate::overdue::OverdueLog;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub log: Arc<OverdueLog>,
}

/// HTTP server for the overdue logger.
pub struct HttpServer {
    router: Router,
    config: LoggerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: LoggerConfig) -> Self {
        let state = AppState {
            log: Arc::new(OverdueLog::new(&config.log_file.path)),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &LoggerConfig, state: AppState) -> Router {
        let stack = ServiceBuilder::new()
            .layer(set_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(track_status))
            .layer(propagate_request_id_layer())
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)));

        Router::new()
            .route("/log_overdue_speaker", post(log_overdue_speaker))
            .route("/health", get(get_health))
            .with_state(state)
            .layer(stack)
    }

    /// The fully layered router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` resolves, then drain in-flight requests.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            log_file = %self.config.log_file.path,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }
}

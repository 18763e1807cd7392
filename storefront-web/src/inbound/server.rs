//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use tower_http::trace::TraceLayer;

use storefront_payments::PaymentsClient;
use storefront_types::SessionProvider;

use super::auth_gate::auth_gate;
use super::handlers::{self, AppState};

/// HTTP Server for the storefront.
pub struct HttpServer<P: SessionProvider> {
    state: Arc<AppState<P>>,
}

impl<P: SessionProvider> HttpServer<P> {
    /// Creates a new HTTP server.
    ///
    /// `payments` is the process-wide client; handlers share this exact
    /// instance.
    pub fn new(sessions: P, payments: Arc<PaymentsClient>) -> Self {
        Self {
            state: Arc::new(AppState { sessions, payments }),
        }
    }

    /// Returns the payments client injected at construction.
    pub fn payments(&self) -> &Arc<PaymentsClient> {
        &self.state.payments
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        // HTTP metrics layer; reports through the global meter provider
        // installed by the binary (a no-op provider when none is set).
        let metrics = axum_otel_metrics::HttpMetricsLayerBuilder::new().build();

        // Only the auth pages sit behind the gate.
        let auth_pages = Router::new()
            .route("/sign-in", get(handlers::sign_in))
            .route("/sign-up", get(handlers::sign_up))
            .route_layer(middleware::from_fn_with_state(
                self.state.clone(),
                auth_gate::<P>,
            ));

        Router::new()
            .route("/health", get(handlers::health::<P>))
            .route("/", get(handlers::home))
            .merge(auth_pages)
            .layer(metrics)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}

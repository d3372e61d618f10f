//! Axum server bootstrap and lifecycle

use axum::Router;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

use crate::{config::Config, error::Result};

/// Wraps a router with the configured middleware stack and listen address
pub struct Server {
    config: Config,
}

impl Server {
    /// Create a server from the loaded configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Bind the listen address and serve until a shutdown signal arrives
    pub async fn serve(self, router: Router) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.service.port));
        let app = self.apply_middleware(router);

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(service = %self.config.service.name, %addr, "listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }

    // Outermost to innermost: CORS, compression, request timeout, body
    // limit, request tracing, panic recovery.
    fn apply_middleware(&self, router: Router) -> Router {
        let timeout = Duration::from_secs(self.config.service.timeout_secs);
        let body_limit = self.config.middleware.body_limit_mb * 1024 * 1024;

        router
            .layer(self.cors_layer())
            .layer(CompressionLayer::new())
            .layer(TimeoutLayer::new(timeout))
            .layer(RequestBodyLimitLayer::new(body_limit))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new())
                    .on_response(DefaultOnResponse::new()),
            )
            .layer(CatchPanicLayer::new())
    }

    fn cors_layer(&self) -> CorsLayer {
        match self.config.middleware.cors_mode.as_str() {
            "restrictive" => CorsLayer::new(),
            "permissive" => CorsLayer::permissive(),
            other => {
                tracing::warn!(mode = other, "unknown CORS mode, using permissive");
                CorsLayer::permissive()
            }
        }
    }
}

/// Resolves once SIGINT or SIGTERM arrives
async fn shutdown_signal() {
    let interrupt = async {
        signal::ctrl_c().await.expect("SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => tracing::info!("SIGINT received, draining requests"),
        _ = terminate => tracing::info!("SIGTERM received, draining requests"),
    }
}

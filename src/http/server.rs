//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum router with the single dispatch handler
//! - Wire up middleware (tracing, request ID)
//! - Send `/wuffle/*` to the mock API and everything else upstream
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::DevServerConfig;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, RequestIdExt};
use crate::lifecycle::Shutdown;
use crate::mock::{handlers, MockDataset, MockRoute};
use crate::observability::metrics;
use crate::proxy::AssetForwarder;
use crate::routing::{classify, Dispatch};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<MockDataset>,
    pub forwarder: AssetForwarder,
    pub max_move_body_bytes: usize,
}

impl AppState {
    pub fn new(config: &DevServerConfig, dataset: Arc<MockDataset>) -> Self {
        Self {
            dataset,
            forwarder: AssetForwarder::new(&config.upstream.origin),
            max_move_body_bytes: config.mock.max_move_body_bytes,
        }
    }
}

/// Mock API + asset proxy server.
pub struct DevServer {
    router: Router,
    config: DevServerConfig,
}

impl DevServer {
    /// Create a server answering from `dataset`.
    pub fn new(config: DevServerConfig, dataset: MockDataset) -> Self {
        let state = AppState::new(&config, Arc::new(dataset));
        let router = build_router(state);
        Self { router, config }
    }

    /// Clone of the fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: Shutdown,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.origin,
            "HTTP server starting"
        );
        tracing::info!("Wuffle Board running at: http://{addr}/board/");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.wait().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/{*path}", any(dispatch_handler))
        .route("/", any(dispatch_handler))
        .with_state(state)
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(set_request_id_layer())
}

/// Route by path: reserved prefix to the mock API, the rest upstream.
async fn dispatch_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    // `path()` excludes the query string.
    let path = request.uri().path().to_owned();
    let dispatch = classify(&path);

    let response = match dispatch {
        Dispatch::MockApi => {
            let route = MockRoute::resolve(&path);
            tracing::debug!(
                request_id = %request.request_id(),
                method = %request.method(),
                path = %path,
                route = route.name(),
                "Mock API request"
            );
            handlers::respond(
                &state.dataset,
                route,
                request.into_body(),
                state.max_move_body_bytes,
            )
            .await
        }
        Dispatch::Asset => {
            tracing::debug!(
                request_id = %request.request_id(),
                method = %request.method(),
                path = %path,
                "Proxying request"
            );
            state.forwarder.forward(&path).await.into_response()
        }
    };

    metrics::record_request(dispatch.kind(), response.status().as_u16(), start);
    response
}

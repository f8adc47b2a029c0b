//! HTTP API server with observability for the purchase-saga system.
//!
//! Exposes the purchase operation over REST with structured logging
//! (tracing) and Prometheus metrics. Authentication is handled by an
//! upstream layer; this server only consumes the identity it injects.

pub mod config;
pub mod error;
pub mod identity;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use catalog::{InMemoryProductStore, ProductStore, sample_products};
use metrics_exporter_prometheus::PrometheusHandle;
use orders::{HttpOrderGateway, OrderGateway};
use purchase::PurchaseOrchestrator;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use routes::purchase::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S, G>(state: Arc<AppState<S, G>>, metrics_handle: PrometheusHandle) -> Router
where
    S: ProductStore + 'static,
    G: OrderGateway + 'static,
{
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/api/purchase", post(routes::purchase::submit::<S, G>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates application state over arbitrary collaborators.
pub fn create_state<S, G>(store: S, gateway: G) -> Arc<AppState<S, G>>
where
    S: ProductStore,
    G: OrderGateway,
{
    Arc::new(AppState {
        orchestrator: PurchaseOrchestrator::new(store, gateway),
    })
}

/// Creates the default application state: an in-memory catalog seeded
/// with the sample products and an HTTP gateway to the order service
/// named in the config.
pub async fn create_default_state(
    config: &Config,
) -> Arc<AppState<InMemoryProductStore, HttpOrderGateway>> {
    let store = InMemoryProductStore::with_products(sample_products()).await;
    let gateway = HttpOrderGateway::new(config.order_service_url.clone());
    create_state(store, gateway)
}

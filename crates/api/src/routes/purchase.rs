//! Purchase endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use catalog::ProductStore;
use orders::OrderGateway;
use purchase::{PurchaseConfirmation, PurchaseOrchestrator, PurchaseRequest};

use crate::error::ApiError;
use crate::identity::Identity;

/// Shared application state accessible from all handlers.
pub struct AppState<S, G>
where
    S: ProductStore,
    G: OrderGateway,
{
    pub orchestrator: PurchaseOrchestrator<S, G>,
}

/// POST /api/purchase — reserve stock and create an order.
///
/// Requires an authenticated caller (identity injected by the upstream
/// auth layer). Responds `201` with the created order on success.
#[tracing::instrument(skip(state, identity, request))]
pub async fn submit<S, G>(
    State(state): State<Arc<AppState<S, G>>>,
    identity: Identity,
    Json(request): Json<PurchaseRequest>,
) -> Result<(StatusCode, Json<PurchaseConfirmation>), ApiError>
where
    S: ProductStore + 'static,
    G: OrderGateway + 'static,
{
    let Identity(requester) = identity;

    tracing::info!(
        customer_id = %requester.customer_id,
        item_count = request.items.len(),
        "processing purchase request"
    );

    let confirmation = state
        .orchestrator
        .submit_purchase(&requester, request)
        .await?;

    Ok((StatusCode::CREATED, Json(confirmation)))
}

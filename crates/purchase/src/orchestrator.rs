//! Purchase orchestrator.

use catalog::ProductStore;
use orders::{CreateOrder, Order, OrderGateway};
use serde::Serialize;

use crate::error::PurchaseError;
use crate::request::{PurchaseRequest, Requester};
use crate::reservation::ReservationLine;

/// Result of a completed purchase.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseConfirmation {
    /// The order created by the order service.
    pub order: Order,
    /// Always true on success: every line's stock write was applied.
    pub stock_updated: bool,
}

/// Orchestrates the two-phase purchase saga.
///
/// Phase 1 reserves stock in the product store one item at a time, in
/// request order; phase 2 submits the order to the order gateway. Either
/// phase failing reverses the stock writes made so far. Reservations are
/// read-then-write with no concurrency token: two concurrent purchases
/// of the same product can both pass the stock check against a stale
/// read and oversell.
pub struct PurchaseOrchestrator<S, G>
where
    S: ProductStore,
    G: OrderGateway,
{
    store: S,
    gateway: G,
}

impl<S, G> PurchaseOrchestrator<S, G>
where
    S: ProductStore,
    G: OrderGateway,
{
    /// Creates a new orchestrator over the given collaborators.
    pub fn new(store: S, gateway: G) -> Self {
        Self { store, gateway }
    }

    /// Executes a purchase for the given caller.
    ///
    /// Items are reserved strictly sequentially: later reservations see
    /// stock levels written by earlier ones, and rollback must reverse
    /// only what was actually written. Duplicate product ids across items
    /// are reserved independently, decrementing the same product twice.
    ///
    /// There is no idempotency key: submitting the same request twice
    /// creates two orders and decrements stock twice.
    #[tracing::instrument(skip(self, request), fields(customer_id = %requester.customer_id, item_count = request.items.len()))]
    pub async fn submit_purchase(
        &self,
        requester: &Requester,
        request: PurchaseRequest,
    ) -> Result<PurchaseConfirmation, PurchaseError> {
        metrics::counter!("purchase_requests_total").increment(1);
        let start = std::time::Instant::now();

        // Preconditions: no side effect until the request shape is valid.
        request.validate()?;

        // Phase 1: reserve stock per item, in request order.
        let mut reserved: Vec<ReservationLine> = Vec::with_capacity(request.items.len());

        for item in &request.items {
            let product = match self.store.find_by_id(&item.product_id).await {
                Ok(Some(product)) => product,
                Ok(None) => {
                    self.roll_back_reservations(&reserved).await;
                    return self.fail(
                        start,
                        PurchaseError::ProductNotFound {
                            product_id: item.product_id.clone(),
                        },
                    );
                }
                Err(e) => {
                    self.roll_back_reservations(&reserved).await;
                    return self.fail(start, e.into());
                }
            };

            if !product.has_stock(item.quantity) {
                self.roll_back_reservations(&reserved).await;
                return self.fail(
                    start,
                    PurchaseError::InsufficientStock {
                        product_id: product.id.clone(),
                        product_name: product.name.clone(),
                        available: product.stock,
                        requested: item.quantity,
                    },
                );
            }

            let line = ReservationLine::reserve(&product, item.quantity);
            if let Err(e) = self.store.update_stock(&line.product_id, line.new_stock).await {
                self.roll_back_reservations(&reserved).await;
                return self.fail(start, e.into());
            }

            tracing::debug!(
                product_id = %line.product_id,
                previous_stock = line.previous_stock,
                new_stock = line.new_stock,
                "stock reserved"
            );
            reserved.push(line);
        }

        // Phase 2: submit the order built from the reservation snapshots.
        let payload = CreateOrder {
            customer_id: requester.customer_id.clone(),
            customer_name: requester.display_name().to_string(),
            customer_email: requester.email.clone(),
            items: reserved.iter().map(ReservationLine::order_line).collect(),
            shipping_address: request.shipping_address.clone(),
            payment_method: request.payment_method().to_string(),
        };

        match self.gateway.create_order(&payload).await {
            Ok(order) => {
                let duration = start.elapsed().as_secs_f64();
                metrics::histogram!("purchase_duration_seconds").record(duration);
                metrics::counter!("purchase_completed").increment(1);
                tracing::info!(
                    order_id = %order.id,
                    total_cents = order.total_amount.cents(),
                    "purchase completed"
                );

                Ok(PurchaseConfirmation {
                    order,
                    stock_updated: true,
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, "order creation failed, restoring stock");
                self.compensate_reservations(&reserved).await;
                self.fail(start, e.into())
            }
        }
    }

    /// Reverses reservations after a phase-1 abort by writing the
    /// pre-reservation stock level back verbatim.
    ///
    /// Best-effort: a line that cannot be restored is logged and counted
    /// but does not fail the abort.
    async fn roll_back_reservations(&self, reserved: &[ReservationLine]) {
        for line in reserved {
            if let Err(e) = self
                .store
                .update_stock(&line.product_id, line.previous_stock)
                .await
            {
                metrics::counter!("compensation_failures_total").increment(1);
                tracing::error!(
                    product_id = %line.product_id,
                    previous_stock = line.previous_stock,
                    error = %e,
                    "failed to roll back reservation"
                );
            }
        }
    }

    /// Compensates reservations after order submission fails.
    ///
    /// Unlike the phase-1 rollback, this re-reads current stock and adds
    /// the reserved quantity back, so stock changes made by other
    /// purchases in the window are not clobbered. Best-effort per line:
    /// one failed line never blocks the others, and every failure is
    /// logged and counted for manual reconciliation.
    async fn compensate_reservations(&self, reserved: &[ReservationLine]) {
        for line in reserved {
            let result = match self.store.find_by_id(&line.product_id).await {
                Ok(Some(product)) => {
                    self.store
                        .update_stock(&line.product_id, product.stock + line.quantity)
                        .await
                }
                Ok(None) => Err(catalog::CatalogError::NotFound(line.product_id.clone())),
                Err(e) => Err(e),
            };

            match result {
                Ok(()) => {
                    tracing::debug!(
                        product_id = %line.product_id,
                        quantity = line.quantity,
                        "stock restored"
                    );
                }
                Err(e) => {
                    metrics::counter!("compensation_failures_total").increment(1);
                    tracing::error!(
                        product_id = %line.product_id,
                        quantity = line.quantity,
                        error = %e,
                        "failed to restore stock after order failure"
                    );
                }
            }
        }
    }

    fn fail(
        &self,
        start: std::time::Instant,
        error: PurchaseError,
    ) -> Result<PurchaseConfirmation, PurchaseError> {
        metrics::histogram!("purchase_duration_seconds").record(start.elapsed().as_secs_f64());
        metrics::counter!("purchase_failed").increment(1);
        Err(error)
    }
}

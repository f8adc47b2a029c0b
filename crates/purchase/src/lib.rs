//! Purchase orchestration for the storefront.
//!
//! A purchase is a short saga across two collaborators: stock is reserved
//! in the product store one line at a time, then the order is submitted to
//! the order service. A failure in either phase reverses the stock writes
//! made so far, in-process and best-effort; there is no cross-service
//! transaction.
//!
//! The flow:
//! 1. Validate the request (no side effects before this passes)
//! 2. Reserve stock per item, in request order
//! 3. Submit the order to the order gateway
//!
//! If reservation fails partway, lines reserved earlier in the same call
//! are rolled back. If order submission fails, every reserved line is
//! compensated by re-reading current stock and adding the quantity back.

pub mod error;
pub mod orchestrator;
pub mod request;
pub mod reservation;

pub use error::PurchaseError;
pub use orchestrator::{PurchaseConfirmation, PurchaseOrchestrator};
pub use request::{DEFAULT_PAYMENT_METHOD, PurchaseItem, PurchaseRequest, Requester};
pub use reservation::ReservationLine;

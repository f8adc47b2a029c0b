//! HTTP client for the remote order service.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::GatewayError;
use crate::gateway::OrderGateway;
use crate::order::{CreateOrder, Order};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The order service wraps successful responses in a `data` envelope.
#[derive(Deserialize)]
struct OrderEnvelope {
    data: Order,
}

/// Order gateway backed by the remote order service's REST API.
#[derive(Clone)]
pub struct HttpOrderGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOrderGateway {
    /// Creates a gateway for the order service at `base_url`
    /// (e.g. `http://localhost:3001`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        self
    }

    fn orders_url(&self) -> String {
        format!("{}/api/orders", self.base_url)
    }
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    #[tracing::instrument(skip(self, payload), fields(customer_id = %payload.customer_id))]
    async fn create_order(&self, payload: &CreateOrder) -> Result<Order, GatewayError> {
        let response = self
            .client
            .post(self.orders_url())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "order service rejected order");
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: OrderEnvelope = response
            .json()
            .await
            .map_err(|e| GatewayError::Transport(format!("invalid order response: {e}")))?;

        Ok(envelope.data)
    }
}

//! HTTP client for the POS backend API.

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::{config::PosConfig, error::PosError};

/// HTTP client for the POS backend.
///
/// Stateless between calls; each operation is one request/response exchange
/// against the configured origin. Cloning is cheap and clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct PosClient {
    config: PosConfig,
    http: Client,
}

/// Request body for a PromptPay payload request.
///
/// Generic over the amount so integer amounts serialize as JSON integers
/// without being widened to floats.
#[derive(Debug, Serialize)]
struct PromptPayRequest<A: Serialize> {
    amount: A,
}

impl PosClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: PosConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Fetch all products known to the backend.
    ///
    /// # Errors
    ///
    /// Fails with the message `"Failed to fetch products"` if the backend
    /// responds with a non-success status, or with the underlying HTTP error
    /// if the exchange never completes.
    pub async fn fetch_products(&self) -> Result<Value, PosError> {
        let url = format!("{}/api/products", self.config.base_url);

        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(PosError::Request("Failed to fetch products"));
        }

        Ok(response.json().await?)
    }

    /// Create a product from a caller-constructed payload.
    ///
    /// The payload is forwarded verbatim as JSON; its shape is the backend's
    /// contract and is not validated here.
    ///
    /// # Errors
    ///
    /// Fails with the message `"Failed to create product"` if the backend
    /// responds with a non-success status, or with the underlying HTTP error
    /// if the exchange never completes.
    pub async fn submit_product<T: Serialize + ?Sized>(
        &self,
        product: &T,
    ) -> Result<Value, PosError> {
        let url = format!("{}/api/products", self.config.base_url);

        let response = self.http.post(&url).json(product).send().await?;

        if !response.status().is_success() {
            return Err(PosError::Request("Failed to create product"));
        }

        Ok(response.json().await?)
    }

    /// Record a sale from a caller-constructed payload.
    ///
    /// # Errors
    ///
    /// Fails with the message `"Failed to create sale"` if the backend
    /// responds with a non-success status, or with the underlying HTTP error
    /// if the exchange never completes.
    pub async fn submit_sale<T: Serialize + ?Sized>(&self, sale: &T) -> Result<Value, PosError> {
        let url = format!("{}/api/sales", self.config.base_url);

        let response = self.http.post(&url).json(sale).send().await?;

        if !response.status().is_success() {
            return Err(PosError::Request("Failed to create sale"));
        }

        Ok(response.json().await?)
    }

    /// Request a PromptPay payment payload for the given amount.
    ///
    /// Sends `{"amount": <amount>}`; the returned payload (e.g. a QR string)
    /// is opaque to this client.
    ///
    /// # Errors
    ///
    /// Fails with the message `"Failed to get PromptPay payload"` if the
    /// backend responds with a non-success status, or with the underlying
    /// HTTP error if the exchange never completes.
    pub async fn request_promptpay_payload<A: Serialize>(
        &self,
        amount: A,
    ) -> Result<Value, PosError> {
        let url = format!("{}/api/payment/promptpay", self.config.base_url);

        let response = self
            .http
            .post(&url)
            .json(&PromptPayRequest { amount })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PosError::Request("Failed to get PromptPay payload"));
        }

        Ok(response.json().await?)
    }
}

//! Client for the Modern POS backend HTTP API.
//!
//! Wraps the four REST operations the point-of-sale frontend relies on:
//! listing products, creating a product, recording a sale, and requesting a
//! PromptPay payment payload for an amount. Request and response payloads are
//! opaque JSON; the backend owns their shape and all validation.
//!
//! ```no_run
//! use pos_client::{PosClient, PosConfig};
//!
//! # async fn run() -> Result<(), pos_client::PosError> {
//! let client = PosClient::new(PosConfig::new("http://localhost:8000"));
//! let products = client.fetch_products().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::PosClient;
pub use config::PosConfig;
pub use error::PosError;

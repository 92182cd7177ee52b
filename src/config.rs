//! POS backend connection configuration.

use clap::Args;

/// Configuration for connecting to the POS backend.
#[derive(Debug, Clone, Args)]
pub struct PosConfig {
    /// Base origin of the POS backend, e.g. `"http://localhost:8000"`.
    #[arg(long, env = "POS_API_URL", default_value = "http://localhost:8000")]
    pub base_url: String,
}

impl PosConfig {
    /// Create a configuration pointing at the given base origin.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

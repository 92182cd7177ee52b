//! Command-line client for the Modern POS backend.

use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pos_client::{PosClient, PosConfig};

/// POS backend command-line client.
#[derive(Debug, Parser)]
#[command(name = "pos-client", about = "Client for the Modern POS backend API", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: PosConfig,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all products.
    Products,
    /// Create a product.
    AddProduct {
        /// Product name
        #[arg(long)]
        name: String,

        /// Unit price
        #[arg(long)]
        price: f64,

        /// Optional product description
        #[arg(long)]
        description: Option<String>,
    },
    /// Record a sale.
    AddSale {
        /// Total amount of the sale
        #[arg(long)]
        total_amount: f64,
    },
    /// Request a PromptPay payment payload for an amount.
    Promptpay {
        /// Amount to charge
        #[arg(long)]
        amount: f64,
    },
}

impl Cli {
    /// Load configuration from environment and CLI arguments.
    fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = match Cli::load() {
        Ok(cli) => cli,
        Err(error) => error.exit(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    debug!("sending request to {}", cli.config.base_url);

    let client = PosClient::new(cli.config);

    let response = match cli.command {
        Command::Products => client.fetch_products().await?,
        Command::AddProduct {
            name,
            price,
            description,
        } => {
            let mut product = serde_json::Map::new();
            product.insert("name".into(), Value::String(name));
            product.insert("price".into(), Value::from(price));

            if let Some(description) = description {
                product.insert("description".into(), Value::String(description));
            }

            client.submit_product(&product).await?
        }
        Command::AddSale { total_amount } => {
            let sale = serde_json::json!({ "total_amount": total_amount });

            client.submit_sale(&sale).await?
        }
        Command::Promptpay { amount } => client.request_promptpay_payload(amount).await?,
    };

    #[expect(
        clippy::print_stdout,
        reason = "the response body is the command's output"
    )]
    {
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    Ok(())
}

//! Vitrine CLI - terminal client for the catalog and shipping services.
//!
//! # Usage
//!
//! ```bash
//! # List products
//! vitrine products
//!
//! # Show one product
//! vitrine product 1
//!
//! # Quote shipping for a postal code
//! vitrine shipping 01001-000
//!
//! # Interactive session with a cart and checkout
//! vitrine shop
//! ```
//!
//! Reads the same environment as the storefront (`CATALOG_API_URL`,
//! `POSTAL_API_URL`, `SHIPPING_FLAT_FEE`, ...), including `.env`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use vitrine_core::ProductId;
use vitrine_storefront::config::StorefrontConfig;

mod commands;

use commands::{Clients, CommandError};

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about = "Vitrine terminal client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every product in the catalog
    Products,
    /// Show one product
    Product {
        /// Product ID
        id: ProductId,
    },
    /// Quote shipping for a postal code (CEP)
    Shipping {
        /// Postal code, with or without punctuation
        postal_code: String,
    },
    /// Start an interactive shopping session
    Shop,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    let config = StorefrontConfig::from_env()?;
    let clients = Clients::new(&config);
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Products => commands::catalog::list(&clients.catalog, &mut stdout).await?,
        Commands::Product { id } => {
            commands::catalog::show(&clients.catalog, id, &mut stdout).await?;
        }
        Commands::Shipping { postal_code } => {
            commands::shipping::run(&clients.shipping, &postal_code, &mut stdout).await?;
        }
        Commands::Shop => {
            let stdin = std::io::stdin().lock();
            let mut shell = commands::shop::Shell::new(stdin, stdout, clients);
            shell.run().await?;
            tracing::info!(items = shell.cart().item_count(), "Session ended");
        }
    }
    Ok(())
}

use std::sync::Arc;

use amidynamodb::config::Config;
use amidynamodb::host::Host;
use amidynamodb::provider::{AmiDynamoProvider, StoreFactory};
use amidynamodb_core::provider::PROVIDER_ADDRESS;
use anyhow::Result;
use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// AMI DynamoDB Terraform provider
#[derive(Parser, Debug)]
#[command(name = "terraform-provider-amidynamodb")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Run the provider with support for debuggers
    #[arg(long, env = "AMIDYNAMODB_DEBUG")]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    init_tracing(cli.debug, &config);

    tracing::info!(
        address = PROVIDER_ADDRESS,
        version = env!("CARGO_PKG_VERSION"),
        debug = cli.debug,
        "Starting provider"
    );

    let provider = AmiDynamoProvider::new(env!("CARGO_PKG_VERSION"), store_factory(&config));
    let mut host = Host::new(provider);

    host.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;

    tracing::info!("Provider stopped");
    Ok(())
}

/// Logs go to stderr; stdout carries host responses.
fn init_tracing(debug: bool, config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| Config::default_log_filter(debug).into());
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[cfg(feature = "dynamodb")]
fn store_factory(config: &Config) -> Arc<dyn StoreFactory> {
    Arc::new(amidynamodb::storage::DynamoDbStoreFactory::new(
        config.endpoint_url.clone(),
    ))
}

#[cfg(not(feature = "dynamodb"))]
fn store_factory(_config: &Config) -> Arc<dyn StoreFactory> {
    tracing::warn!("Built without the dynamodb feature, serving an empty in-memory store");
    Arc::new(amidynamodb::storage::InMemoryStore::new())
}

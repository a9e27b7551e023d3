use clap::Parser;
use std::sync::Arc;

use ansc_search::api;
use ansc_search::client::{AnscClient, ClientConfig};
use ansc_search::config::Config;

/// HTTP search API over the ANSC public procurement-appeals portal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Address to serve the API on (overrides ANSC_BIND_ADDR)
    #[arg(long)]
    bind: Option<String>,

    /// Portal base URL (overrides ANSC_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (handles both tracing and log crate)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let args = Args::parse();
    let config = Config::from_env();
    let bind_addr = args.bind.unwrap_or(config.bind_addr);
    let base_url = args.base_url.unwrap_or(config.base_url);

    let client = AnscClient::new(ClientConfig::with_base_url(base_url))?;
    let router = api::create_router(Arc::new(client));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("serving ANSC search API on {bind_addr}");
    axum::serve(listener, router).await?;
    Ok(())
}

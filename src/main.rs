use anyhow::Result;
use tracing_subscriber::EnvFilter;

use price_proxy::{api, Config, PriceClient};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let client = PriceClient::with_endpoint(&config.endpoint)?;

    api::start_server(client, config.port).await
}

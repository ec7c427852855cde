use std::collections::HashMap;

use anyhow::Context;
use reqwest::Url;

use crate::error::PriceError;
use crate::model::ProviderQuote;

pub const DEFAULT_ENDPOINT: &str = "https://api.coingecko.com/api/v3/simple/price";

/// One-shot client for CoinGecko's simple-price endpoint.
///
/// Holds no state beyond the connection pool; every lookup is a single GET
/// with no retry, governed by reqwest's default transport timeouts.
#[derive(Debug, Clone)]
pub struct PriceClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl Default for PriceClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("valid endpoint URL"),
        }
    }

    /// Point the client at a different simple-price endpoint, e.g. a mirror
    /// or a test double.
    pub fn with_endpoint(endpoint: &str) -> anyhow::Result<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("invalid price endpoint: {endpoint}"))?;
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
        })
    }

    /// Fetch USD price and 24h change for a batch of provider ids.
    pub async fn simple_price(
        &self,
        ids: &[&str],
    ) -> Result<HashMap<String, ProviderQuote>, PriceError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("ids", &ids.join(","))
            .append_pair("vs_currencies", "usd")
            .append_pair("include_24hr_change", "true");

        let resp = self
            .client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .context("price request failed")?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PriceError::Upstream(status.as_u16()));
        }

        let body = resp.text().await.context("reading price response body")?;
        tracing::debug!(%body, "upstream simple-price response");

        let quotes = serde_json::from_str(&body).context("parsing price response body")?;
        Ok(quotes)
    }
}

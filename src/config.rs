use crate::fetch;

/// Process configuration, read once at startup from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub endpoint: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8787);
        let endpoint = std::env::var("COINGECKO_URL")
            .unwrap_or_else(|_| fetch::DEFAULT_ENDPOINT.to_string());
        Self { port, endpoint }
    }
}

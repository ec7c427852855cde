//! Static ticker-to-CoinGecko-id table.
//!
//! The table is fixed at compile time; adding a symbol is a code change.
//! Lookups are case-insensitive and unknown tickers resolve to `None`.

/// Map a ticker symbol to CoinGecko's asset id.
pub fn provider_id(symbol: &str) -> Option<&'static str> {
    match symbol.to_ascii_uppercase().as_str() {
        "BTC" => Some("bitcoin"),
        "ETH" => Some("ethereum"),
        "USDT" => Some("tether"),
        "BNB" => Some("binancecoin"),
        "SOL" => Some("solana"),
        "XRP" => Some("ripple"),
        "USDC" => Some("usd-coin"),
        "ADA" => Some("cardano"),
        "AVAX" => Some("avalanche-2"),
        "DOGE" => Some("dogecoin"),
        "TRX" => Some("tron"),
        "DOT" => Some("polkadot"),
        "MATIC" => Some("matic-network"),
        "LINK" => Some("chainlink"),
        "LTC" => Some("litecoin"),
        "SHIB" => Some("shiba-inu"),
        "BCH" => Some("bitcoin-cash"),
        "UNI" => Some("uniswap"),
        "XLM" => Some("stellar"),
        "ATOM" => Some("cosmos"),
        _ => None,
    }
}

/// Resolve a batch of submitted symbols to provider ids.
///
/// Unmapped symbols are dropped, duplicates collapse to a single id, and
/// first-seen order is preserved so the outbound query stays stable.
pub fn resolve(symbols: &[String]) -> Vec<&'static str> {
    let mut ids = Vec::new();
    for sym in symbols {
        if let Some(id) = provider_id(sym) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    ids
}

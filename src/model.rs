use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::symbols;

/// One asset entry in the upstream `/simple/price` body.
///
/// CoinGecko owns this shape; extra fields it may add are ignored, and both
/// values are optional so a sparse upstream answer never fails the parse.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderQuote {
    #[serde(default)]
    pub usd: Option<f64>,
    #[serde(default)]
    pub usd_24h_change: Option<f64>,
}

/// One asset entry in our response, keyed by the submitted ticker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceEntry {
    pub price: f64,
    pub change: f64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Reshape the upstream quotes into the response mapping.
///
/// Each submitted symbol keeps its original casing as the output key. A
/// symbol is silently omitted when it is not in the ticker table, the
/// provider returned no entry for its id, or the entry has no USD price.
/// Missing 24h change defaults to zero.
pub fn build_price_map(
    symbols: &[String],
    quotes: &HashMap<String, ProviderQuote>,
) -> HashMap<String, PriceEntry> {
    let mut out = HashMap::new();
    for sym in symbols {
        let Some(id) = symbols::provider_id(sym) else {
            continue;
        };
        let Some(quote) = quotes.get(id) else {
            continue;
        };
        let Some(price) = quote.usd else {
            continue;
        };
        out.insert(
            sym.clone(),
            PriceEntry {
                price,
                change: quote.usd_24h_change.unwrap_or(0.0),
            },
        );
    }
    out
}

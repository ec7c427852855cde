use std::collections::HashMap;

use anyhow::Context;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::api::SharedClient;
use crate::error::PriceError;
use crate::model::{build_price_map, HealthResponse, PriceEntry};
use crate::symbols;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// CORS preflight acknowledgement; answered before any lookup work.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Batch price lookup: `{ "symbols": ["BTC", "eth", ...] }`.
///
/// The body is parsed by hand rather than through an extractor so the
/// error contract stays exact: a structurally invalid `symbols` field is a
/// 400 with a fixed message, while a body that is not JSON at all is a 500
/// carrying the parse error's text.
pub async fn lookup_prices(
    State(client): State<SharedClient>,
    body: Bytes,
) -> Result<Json<HashMap<String, PriceEntry>>, PriceError> {
    let body: Value = serde_json::from_slice(&body)
        .context("parsing request body")
        .map_err(PriceError::Internal)?;

    let symbols = match body.get("symbols").and_then(Value::as_array) {
        Some(list) if !list.is_empty() => list
            .iter()
            .map(|v| v.as_str().map(str::to_string))
            .collect::<Option<Vec<String>>>()
            .ok_or_else(|| anyhow::anyhow!("symbols must be strings"))
            .map_err(PriceError::Internal)?,
        _ => {
            return Err(PriceError::BadRequest(
                "symbols array is required".to_string(),
            ))
        }
    };
    tracing::info!(?symbols, "price lookup requested");

    let ids = symbols::resolve(&symbols);
    if ids.is_empty() {
        return Err(PriceError::BadRequest("No valid symbols found".to_string()));
    }
    tracing::debug!(?ids, "resolved provider ids");

    let quotes = client.simple_price(&ids).await?;
    let prices = build_price_map(&symbols, &quotes);
    tracing::debug!(?symbols, returned = prices.len(), "price lookup complete");

    Ok(Json(prices))
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors a price lookup can terminate with.
///
/// Every failure is terminal for the invocation: there is no retry and no
/// partial-success payload. A symbol that merely fails to resolve is dropped
/// from the result instead of surfacing here.
#[derive(Debug, Error)]
pub enum PriceError {
    /// Caller input is structurally invalid or resolves to nothing usable.
    /// Always detected before any outbound call.
    #[error("{0}")]
    BadRequest(String),

    /// The upstream provider answered with a non-success status.
    #[error("CoinGecko API error: {0}")]
    Upstream(u16),

    /// Anything else: transport failure, malformed body, runtime fault.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for PriceError {
    fn into_response(self) -> Response {
        let status = match self {
            PriceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            PriceError::Upstream(_) => StatusCode::BAD_GATEWAY,
            PriceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let mut message = self.to_string();
        if message.is_empty() {
            message = "Unknown error".to_string();
        }
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("price lookup failed: {message}");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}

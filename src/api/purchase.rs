//! Purchase recorder endpoint.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};

use super::PurchaseAck;
use crate::errors::AppError;
use crate::AppState;

/// Prefix for purchase-marker keys.
pub const SOLD_KEY_PREFIX: &str = "sold:";

/// Placeholder value stored for a claimed serial number.
const PURCHASE_MARKER: &str = "{}";

/// GET /purchase?serial_number=... - Record a purchase marker.
///
/// The marker is an unconditional overwrite: claiming the same serial twice
/// leaves one key behind and still acknowledges. The serial is not checked
/// against the catalog.
pub async fn record_purchase(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<PurchaseAck>, AppError> {
    let serial_number = params
        .get("serial_number")
        .map(String::as_str)
        .unwrap_or_default();

    if serial_number.is_empty() {
        return Err(AppError::Validation(
            "serial_number is required".to_string(),
        ));
    }

    let key = format!("{}{}", SOLD_KEY_PREFIX, serial_number);
    state.kv.set(&key, PURCHASE_MARKER).await?;

    tracing::info!(serial_number, "Purchase recorded");

    Ok(Json(PurchaseAck::ok()))
}

//! Receipt HTTP handlers.
//!
//! ```text
//! POST /receipts/process        Validate, score and store a receipt
//! GET  /receipts/{id}/points    Fetch the points stored for a receipt
//! ```

use actix_web::{web, HttpResponse};
use receipt_core::{validate_receipt, PointsBreakdown};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

/// Response for a processed receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

/// Response for a points lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Validate, score and store a receipt.
///
/// # Errors
///
/// - `400 Bad Request`: the receipt failed validation or the body was unreadable.
/// - `500 Internal Server Error`: the store is unusable.
pub async fn process_receipt(
    state: web::Data<AppState>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let receipt = validate_receipt(&payload).map_err(|reason| {
        warn!(%reason, "receipt rejected");
        reason
    })?;

    let breakdown = PointsBreakdown::for_receipt(&receipt);
    let points = breakdown.total();
    debug!(?breakdown, retailer = %receipt.retailer, "receipt scored");

    let record = state.store.insert(points)?;
    info!(
        receipt_id = %record.id,
        points = record.points,
        created_at = %record.created_at,
        "receipt processed"
    );

    Ok(HttpResponse::Ok().json(ProcessResponse {
        id: record.id.to_string(),
    }))
}

/// Fetch the points stored for a receipt.
///
/// Only the exact identifier handed out by `process_receipt` (lowercase,
/// hyphenated) resolves. Anything else, including other spellings of the
/// same UUID, is reported as not found rather than malformed.
///
/// # Errors
///
/// - `404 Not Found`: no receipt with this identifier.
/// - `500 Internal Server Error`: the store is unusable.
pub async fn get_points(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let raw_id = path.into_inner();

    let Some(id) = issued_id(&raw_id) else {
        debug!(receipt_id = %raw_id, "lookup with an identifier never issued");
        return Err(ApiError::NotFound);
    };

    let record = state.store.get(&id)?.ok_or_else(|| {
        debug!(receipt_id = %id, "receipt not found");
        ApiError::NotFound
    })?;

    Ok(HttpResponse::Ok().json(PointsResponse {
        points: record.points,
    }))
}

/// Parse `raw` only if it is spelled exactly as `Uuid`'s hyphenated display.
fn issued_id(raw: &str) -> Option<Uuid> {
    let id = Uuid::parse_str(raw).ok()?;
    (id.hyphenated().to_string() == raw).then_some(id)
}

//! HTTP service implementations.
//!
//! This module wires the receipt handlers into actix routes and configures
//! how request bodies are read.

pub mod receipt_service;

use actix_web::{error::JsonPayloadError, web, HttpRequest};
use receipt_core::ValidationError;
use tracing::warn;

use crate::error::ApiError;

/// Registers every route the API serves.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/receipts")
            .route("/process", web::post().to(receipt_service::process_receipt))
            .route("/{id}/points", web::get().to(receipt_service::get_points)),
    );
}

/// JSON extractor settings.
///
/// A body that cannot be read as JSON (bad syntax, wrong content type, too
/// large) supplies no fields, so it is rejected as `Missing fields`.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(reject_unreadable_body)
}

fn reject_unreadable_body(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(path = %req.path(), error = %err, "unreadable receipt body");
    ApiError::from(ValidationError::MissingFields).into()
}

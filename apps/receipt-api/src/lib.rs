//! # Receipt API
//!
//! HTTP server that scores receipts and serves the stored points.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Receipt API                                     │
//! │                                                                         │
//! │  POST /receipts/process                                                 │
//! │    JSON ──► validate_receipt ──► score ──► store.insert ──► {"id"}     │
//! │               │                                                         │
//! │               └── ValidationError ──► 400 {"error"}                    │
//! │                                                                         │
//! │  GET /receipts/{id}/points                                              │
//! │    id ──► store.get ──► {"points"}                                     │
//! │             │                                                           │
//! │             └── miss ──► 404 {"error": "Receipt not found"}            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `RECEIPT_API_HOST` - Bind address (default: 0.0.0.0)
//! - `RECEIPT_API_PORT` - HTTP port (default: 3000)
//! - `RECEIPT_API_MAX_BODY_BYTES` - JSON body limit (default: 262144)
//! - `RECEIPT_API_WORKERS` - Worker threads (default: actix picks)
//! - `RUST_LOG` - Log filter (default: info)

pub mod config;
pub mod error;
pub mod services;
pub mod store;

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};

// Re-exports
pub use config::ServerConfig;
pub use error::ApiError;
pub use store::{InMemoryReceiptStore, ReceiptStore, ScoreRecord, StoreError};

/// Shared application state.
///
/// Built once at startup and handed to every worker through `web::Data`.
pub struct AppState {
    pub store: Arc<dyn ReceiptStore>,
    pub config: ServerConfig,
}

impl AppState {
    /// Creates state backed by a fresh in-memory store.
    pub fn new(config: ServerConfig) -> Self {
        AppState {
            store: Arc::new(InMemoryReceiptStore::new()),
            config,
        }
    }
}

/// Builds the actix application for the given state.
///
/// Shared by `main` and the integration tests so both exercise the same routes.
pub fn build_app(
    state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let json_config = services::json_config(state.config.max_body_bytes);

    App::new()
        .app_data(state)
        .app_data(json_config)
        .configure(services::configure)
}

//! # receipt-core: Pure Business Logic for Receipt Points
//!
//! This crate is the **heart** of the receipt points service. It contains the
//! validation and scoring rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Points Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    receipt-api (actix-web)                      │   │
//! │  │   POST /receipts/process        GET /receipts/{id}/points       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ serde_json::Value                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ receipt-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │validation │  │  points   │   │   │
//! │  │   │  Receipt  │  │   Money   │  │ Validator │  │  Scorer   │   │   │
//! │  │   │   Item    │  │  (cents)  │  │           │  │ Breakdown │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO SHARED STATE • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Receipt, Item, PurchaseDate, PurchaseTime)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Validation error taxonomy
//! - [`validation`] - Raw JSON → validated [`Receipt`]
//! - [`points`] - Validated [`Receipt`] → loyalty points
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{points, validation};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "retailer": "Target",
//!     "purchaseDate": "2022-01-01",
//!     "purchaseTime": "13:01",
//!     "items": [{ "shortDescription": "Emils Cheese Pizza", "price": "12.25" }],
//!     "total": "12.25"
//! });
//!
//! let receipt = validation::validate_receipt(&raw).unwrap();
//! // 6 (retailer) + 25 (quarter) + 3 (description) + 6 (odd day)
//! assert_eq!(points::score(&receipt), 40);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod points;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use points::{score, PointsBreakdown};
pub use types::*;
pub use validation::validate_receipt;

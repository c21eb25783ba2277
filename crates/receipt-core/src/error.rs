//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  └── ValidationError  - Receipt rejected before scoring                │
//! │                                                                         │
//! │  receipt-api errors (app crate)                                        │
//! │  └── ApiError         - What HTTP clients see (status + JSON body)      │
//! │                                                                         │
//! │  Flow: ValidationError → ApiError → {"error": "<message>"}             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. The `Display` text IS the wire message; clients match on it
//! 3. Variant order mirrors check priority: first failure wins

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Reasons a submitted receipt is rejected.
///
/// The scorer never sees a receipt that produced one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent, `null`, empty, or carries no usable value.
    ///
    /// ## When This Occurs
    /// - Any of `retailer`, `purchaseDate`, `purchaseTime`, `items`, `total` missing
    /// - A text field is `""` or not a string
    /// - `total` is not a non-negative amount
    /// - The body is not a JSON object at all
    #[error("Missing fields")]
    MissingFields,

    /// `purchaseDate` is not `YYYY-MM-DD` or `purchaseTime` is not `HH:MM`.
    #[error("Improperly formatted date or time")]
    BadDateOrTime,

    /// `items` is not an array, or is an empty one.
    #[error("Items must be an array")]
    InvalidItems,

    /// An item lacks a non-empty `shortDescription` or a usable `price`.
    #[error("Items must have shortDescription and price fields")]
    InvalidItemFields,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

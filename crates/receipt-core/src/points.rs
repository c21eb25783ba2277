//! # Points Module
//!
//! Scores a validated [`Receipt`] with seven independent, additive rules.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule                                              Points               │
//! │  ────────────────────────────────────────────────  ──────────────────   │
//! │  1. alphanumeric chars in retailer                 +1 each              │
//! │  2. total is a round dollar amount                 +50                  │
//! │  3. total is a multiple of $0.25                   +25                  │
//! │  4. every two items                                +5 per pair          │
//! │  5. trimmed description length % 3 == 0            +ceil(price × 0.2)   │
//! │  6. day of purchase is odd                         +6                   │
//! │  7. 14 <= hour < 16 AND minute > 0                 +10                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rule 7 Tie-Break
//! `14:00` does NOT earn the time bonus: the minute must be strictly greater
//! than zero. `15:00` does not either. `14:01` through `15:59` do, except
//! on the hour.
//!
//! ## Example
//! ```rust
//! use receipt_core::money::Money;
//! use receipt_core::points::score;
//! use receipt_core::types::{Item, PurchaseDate, PurchaseTime, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: PurchaseDate { year: 2022, month: 3, day: 20 },
//!     purchase_time: PurchaseTime { hour: 14, minute: 33 },
//!     items: vec![Item::new("Gatorade", Money::from_cents(225)); 4],
//!     total: Money::from_cents(900),
//! };
//!
//! assert_eq!(score(&receipt), 109);
//! ```

use crate::money::Money;
use crate::types::{Item, PurchaseTime, Receipt};

// =============================================================================
// Rule Constants
// =============================================================================

const ROUND_DOLLAR_POINTS: u64 = 50;

const QUARTER_MULTIPLE_POINTS: u64 = 25;
const QUARTER: Money = Money::from_cents(25);

const POINTS_PER_ITEM_PAIR: u64 = 5;

const DESCRIPTION_LENGTH_DIVISOR: usize = 3;
/// `ceil(price × 0.2)` is one point per started $5.00 of price.
const DESCRIPTION_PRICE_PER_POINT: Money = Money::from_cents(500);

const ODD_DAY_POINTS: u64 = 6;

const AFTERNOON_POINTS: u64 = 10;
const AFTERNOON_START_HOUR: u8 = 14;
const AFTERNOON_END_HOUR: u8 = 16;

// =============================================================================
// Points Breakdown
// =============================================================================

/// Per-rule contributions for one receipt.
///
/// Each field is one rule's share; [`PointsBreakdown::total`] is the score.
/// Sums saturate at `u64::MAX` instead of wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer_name: u64,
    pub round_dollar_total: u64,
    pub quarter_multiple_total: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_purchase_day: u64,
    pub afternoon_purchase: u64,
}

impl PointsBreakdown {
    /// Applies every rule to `receipt`.
    pub fn for_receipt(receipt: &Receipt) -> Self {
        PointsBreakdown {
            retailer_name: retailer_name_points(&receipt.retailer),
            round_dollar_total: if receipt.total.is_whole_dollars() {
                ROUND_DOLLAR_POINTS
            } else {
                0
            },
            quarter_multiple_total: if receipt.total.is_multiple_of(QUARTER) {
                QUARTER_MULTIPLE_POINTS
            } else {
                0
            },
            item_pairs: ((receipt.item_count() / 2) as u64).saturating_mul(POINTS_PER_ITEM_PAIR),
            item_descriptions: receipt
                .items
                .iter()
                .map(item_description_points)
                .fold(0, u64::saturating_add),
            odd_purchase_day: if receipt.purchase_date.is_odd_day() {
                ODD_DAY_POINTS
            } else {
                0
            },
            afternoon_purchase: if is_afternoon_window(receipt.purchase_time) {
                AFTERNOON_POINTS
            } else {
                0
            },
        }
    }

    /// Sum of all rule contributions, capped at `u64::MAX`.
    pub fn total(&self) -> u64 {
        [
            self.retailer_name,
            self.round_dollar_total,
            self.quarter_multiple_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_purchase_day,
            self.afternoon_purchase,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

// =============================================================================
// Scorer
// =============================================================================

/// Computes the loyalty points for a validated receipt.
///
/// Deterministic and infallible: the same receipt always scores the same.
pub fn score(receipt: &Receipt) -> u64 {
    PointsBreakdown::for_receipt(receipt).total()
}

// =============================================================================
// Individual Rules
// =============================================================================

fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

fn item_description_points(item: &Item) -> u64 {
    let length = item.trimmed_description_len();
    if length == 0 || length % DESCRIPTION_LENGTH_DIVISOR != 0 {
        return 0;
    }

    // Prices are non-negative after validation, so this never truncates.
    u64::try_from(item.price.ceil_div(DESCRIPTION_PRICE_PER_POINT)).unwrap_or(0)
}

fn is_afternoon_window(time: PurchaseTime) -> bool {
    (AFTERNOON_START_HOUR..AFTERNOON_END_HOUR).contains(&time.hour) && time.minute > 0
}

// =============================================================================
// Unit Tests
// =============================================================================

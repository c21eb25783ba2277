//! # Domain Types
//!
//! Core domain types used throughout the receipt points service.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Receipt      │   │      Item       │   │  PurchaseDate   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  retailer       │   │  short_desc     │   │  year           │       │
//! │  │  purchase_date ─┼──►│  price (Money)  │   │  month          │       │
//! │  │  purchase_time  │   └─────────────────┘   │  day            │       │
//! │  │  items ─────────┼──► Vec<Item>            └─────────────────┘       │
//! │  │  total (Money)  │                         ┌─────────────────┐       │
//! │  └─────────────────┘                         │  PurchaseTime   │       │
//! │                                              │  hour, minute   │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Construction
//! These are *validated* types. The only way to build one from client input
//! is [`crate::validation::validate_receipt`]; tests may build them directly.

use crate::money::Money;

// =============================================================================
// Purchase Date / Time
// =============================================================================

/// Calendar date components taken from `YYYY-MM-DD`.
///
/// ## Note
/// No calendar checks happen: `2022-13-45` is a valid `PurchaseDate`.
/// Only the shape of the text is enforced upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl PurchaseDate {
    /// Checks if the day-of-month is odd.
    #[inline]
    pub const fn is_odd_day(&self) -> bool {
        self.day % 2 == 1
    }
}

/// Time of day components taken from `HH:MM` (24-hour clock).
///
/// Hours above 23 and minutes above 59 pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseTime {
    pub hour: u8,
    pub minute: u8,
}

// =============================================================================
// Item
// =============================================================================

/// One line entry on a receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Description as submitted; may carry surrounding whitespace.
    pub short_description: String,

    /// Line price.
    pub price: Money,
}

impl Item {
    /// Creates an item from a description and price.
    pub fn new(short_description: impl Into<String>, price: Money) -> Self {
        Item {
            short_description: short_description.into(),
            price,
        }
    }

    /// Character count of the description with surrounding whitespace removed.
    #[inline]
    pub fn trimmed_description_len(&self) -> usize {
        self.short_description.trim().chars().count()
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A validated purchase receipt, ready for scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: PurchaseDate,
    pub purchase_time: PurchaseTime,
    /// Never empty once validated.
    pub items: Vec<Item>,
    pub total: Money,
}

impl Receipt {
    /// Number of line items.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_description_len() {
        let item = Item::new("   Klarbrunn 12-PK 12 FL OZ  ", Money::from_cents(1200));
        assert_eq!(item.trimmed_description_len(), 24);

        let blank = Item::new("   ", Money::zero());
        assert_eq!(blank.trimmed_description_len(), 0);
    }

    #[test]
    fn test_trimmed_description_len_counts_chars_not_bytes() {
        let item = Item::new("Café", Money::zero());
        assert_eq!(item.trimmed_description_len(), 4);
    }

    #[test]
    fn test_is_odd_day() {
        let date = |day| PurchaseDate {
            year: 2022,
            month: 1,
            day,
        };
        assert!(date(1).is_odd_day());
        assert!(date(31).is_odd_day());
        assert!(!date(20).is_odd_day());
        assert!(!date(0).is_odd_day());
    }
}

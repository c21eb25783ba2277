//! # Money Module
//!
//! Provides the `Money` type for handling receipt amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With f64 modulo:                                                       │
//! │    35.35 % 0.25 = 0.09999999999999859      (fine, not a multiple)      │
//! │    0.3 % 0.1    = 0.09999999999999998  ❌ WRONG! should be 0            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "35.35" → 3535 cents                                                 │
//! │    3535 % 100 == 0 ?  whole dollars                                     │
//! │    3535 % 25  == 0 ?  multiple of $0.25                                 │
//! │    Exact answers, every time                                            │
//! │                                                                         │
//! │  Digits past the cents position are not dropped silently:               │
//! │    "1.255" → 125 cents + "something below a cent"                       │
//! │    never whole dollars, never a multiple of $0.25                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::Money;
//!
//! // Parse from the decimal text a receipt carries
//! let price: Money = "6.49".parse().unwrap();
//! assert_eq!(price.cents(), 649);
//!
//! // NEVER do this:
//! // let bad = Money::from_float(6.49); // NO SUCH METHOD EXISTS!
//! ```

use std::str::FromStr;
use thiserror::Error;

/// Number of cents in one dollar.
const CENTS_PER_DOLLAR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// Amounts written with more precision than cents keep their whole cents and
/// remember that a non-zero remainder below one cent was present, so the
/// value lies strictly between `cents` and `cents + 1`.
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  JSON "total": "35.35" ──► 3535 cents ──► whole-dollar rule             │
/// │                                      └──► quarter-multiple rule         │
/// │                                                                         │
/// │  JSON "price": "12.25" ──► 1225 cents ──► description-length rule       │
/// │                                           ceil(12.25 / 5.00) = 3        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Money {
    cents: i64,
    sub_cent: bool,
}

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money {
            cents,
            sub_cent: false,
        }
    }

    /// Returns the whole cents of the value; any sub-cent remainder is not included.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money::from_cents(0)
    }

    /// Whether the amount carried non-zero digits below one cent.
    #[inline]
    pub const fn has_sub_cent(&self) -> bool {
        self.sub_cent
    }

    /// Checks if the amount is a round dollar value with no cents.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert!(Money::from_cents(900).is_whole_dollars());
    /// assert!(!Money::from_cents(3535).is_whole_dollars());
    /// assert!(!"9.001".parse::<Money>().unwrap().is_whole_dollars());
    /// ```
    #[inline]
    pub const fn is_whole_dollars(&self) -> bool {
        !self.sub_cent && self.cents % CENTS_PER_DOLLAR == 0
    }

    /// Checks if the amount is an exact multiple of `step`.
    ///
    /// A zero step never divides anything.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let quarter = Money::from_cents(25);
    /// assert!(Money::from_cents(975).is_multiple_of(quarter));
    /// assert!(!Money::from_cents(3535).is_multiple_of(quarter));
    /// ```
    #[inline]
    pub const fn is_multiple_of(&self, step: Money) -> bool {
        step.cents != 0 && !step.sub_cent && !self.sub_cent && self.cents % step.cents == 0
    }

    /// How many `per`-sized units it takes to cover this amount, rounded UP.
    ///
    /// `ceil(amount / per)` in integer math. A sub-cent remainder always
    /// pushes the amount past its whole cents, so it is counted as one more
    /// cent before dividing. Zero or negative amounts and divisors give 0;
    /// receipts never carry negative amounts.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let five = Money::from_cents(500);
    /// // $12.25 / $5.00 = 2.45 → 3
    /// assert_eq!(Money::from_cents(1225).ceil_div(five), 3);
    /// // $5.00 / $5.00 = 1.00 → 1
    /// assert_eq!(Money::from_cents(500).ceil_div(five), 1);
    /// // $5.001 / $5.00 = 1.0002 → 2
    /// assert_eq!("5.001".parse::<Money>().unwrap().ceil_div(five), 2);
    /// ```
    pub fn ceil_div(&self, per: Money) -> i64 {
        if per.cents <= 0 || self.cents < 0 {
            return 0;
        }

        // i128 so `i64::MAX` cents plus the sub-cent bump cannot overflow.
        let numerator = i128::from(self.cents) + i128::from(self.sub_cent);
        let divisor = i128::from(per.cents);
        let quotient = numerator / divisor;
        let rounded = if numerator % divisor > 0 {
            quotient + 1
        } else {
            quotient
        };
        i64::try_from(rounded).unwrap_or(i64::MAX)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Reasons a decimal amount string cannot become [`Money`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountParseError {
    /// Nothing to parse.
    #[error("amount is empty")]
    Empty,

    /// Anything other than `digits[.digits]` (signs, exponents, letters).
    #[error("amount '{0}' is not a plain decimal number")]
    InvalidSyntax(String),

    /// Does not fit in an i64 number of cents.
    #[error("amount '{0}' is too large")]
    Overflow(String),
}

/// Parses a plain decimal amount (`"6.49"`, `"9"`, `"9.00"`, `".5"`) into cents.
///
/// ## Rules
/// - Digits, optionally followed by `.` and more digits
/// - At least one digit overall
/// - Fractional digits past the second are kept only as "some remainder below
///   a cent" (`"1.2500"` is exactly 125 cents, `"1.255"` is just above it)
/// - No sign, no exponent, no whitespace
impl FromStr for Money {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (s, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) || (whole.is_empty() && fraction.is_empty())
        {
            return Err(AmountParseError::InvalidSyntax(s.to_string()));
        }

        let (cents_digits, excess) = fraction.split_at(fraction.len().min(2));
        let sub_cent = excess.bytes().any(|b| b != b'0');

        let overflow = || AmountParseError::Overflow(s.to_string());

        let dollars = whole.bytes().try_fold(0i64, |acc, b| {
            acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))
        });
        let dollars = dollars.ok_or_else(overflow)?;

        // "4.5" means 50 cents, not 5.
        let cents = cents_digits
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(2)
            .fold(0i64, |acc, b| acc * 10 + i64::from(b - b'0'));

        dollars
            .checked_mul(CENTS_PER_DOLLAR)
            .and_then(|d| d.checked_add(cents))
            .map(|cents| Money { cents, sub_cent })
            .ok_or_else(overflow)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert!(!money.has_sub_cent());
        assert_eq!(Money::zero(), Money::from_cents(0));
    }

    #[rstest]
    #[case("6.49", 649)]
    #[case("35.35", 3535)]
    #[case("9.00", 900)]
    #[case("9", 900)]
    #[case("4.5", 450)]
    #[case(".25", 25)]
    #[case("12.", 1200)]
    #[case("1.2500", 125)]
    #[case("0", 0)]
    #[case("0.00", 0)]
    fn test_parse_valid(#[case] input: &str, #[case] cents: i64) {
        let money: Money = input.parse().unwrap();
        assert_eq!(money, Money::from_cents(cents));
    }

    #[rstest]
    #[case("1.255", 125)]
    #[case("6.490000000000001", 649)]
    #[case("9.001", 900)]
    #[case("0.0001", 0)]
    #[case("92233720368547758.079", i64::MAX)]
    fn test_parse_sub_cent(#[case] input: &str, #[case] cents: i64) {
        let money: Money = input.parse().unwrap();
        assert_eq!(money.cents(), cents);
        assert!(money.has_sub_cent());
    }

    #[rstest]
    #[case("", AmountParseError::Empty)]
    #[case(".", AmountParseError::InvalidSyntax(".".to_string()))]
    #[case("-1.00", AmountParseError::InvalidSyntax("-1.00".to_string()))]
    #[case("+1.00", AmountParseError::InvalidSyntax("+1.00".to_string()))]
    #[case("1e3", AmountParseError::InvalidSyntax("1e3".to_string()))]
    #[case("1.2.3", AmountParseError::InvalidSyntax("1.2.3".to_string()))]
    #[case(" 1.00", AmountParseError::InvalidSyntax(" 1.00".to_string()))]
    #[case("abc", AmountParseError::InvalidSyntax("abc".to_string()))]
    #[case(
        "99999999999999999999",
        AmountParseError::Overflow("99999999999999999999".to_string())
    )]
    fn test_parse_invalid(#[case] input: &str, #[case] expected: AmountParseError) {
        assert_eq!(input.parse::<Money>(), Err(expected));
    }

    #[test]
    fn test_whole_dollars_and_multiples() {
        let quarter = Money::from_cents(25);

        assert!(Money::from_cents(900).is_whole_dollars());
        assert!(Money::from_cents(0).is_whole_dollars());
        assert!(!Money::from_cents(975).is_whole_dollars());

        assert!(Money::from_cents(975).is_multiple_of(quarter));
        assert!(Money::from_cents(900).is_multiple_of(quarter));
        assert!(!Money::from_cents(3535).is_multiple_of(quarter));
        assert!(!Money::from_cents(100).is_multiple_of(Money::zero()));
    }

    #[test]
    fn test_sub_cent_is_never_round() {
        let quarter = Money::from_cents(25);

        for input in ["9.001", "1.255", "9.0000000001"] {
            let money: Money = input.parse().unwrap();
            assert!(!money.is_whole_dollars(), "{input}");
            assert!(!money.is_multiple_of(quarter), "{input}");
        }
    }

    #[rstest]
    #[case("6.49", 2)] // 1.298
    #[case("12.25", 3)] // 2.45
    #[case("12.00", 3)] // 2.40
    #[case("5.00", 1)] // exactly 1.00
    #[case("0.01", 1)] // 0.002
    #[case("0", 0)]
    #[case("5.001", 2)] // 1.0002
    #[case("4.999", 1)] // 0.9998
    #[case("6.490000000000001", 2)]
    #[case("0.001", 1)]
    fn test_ceil_div(#[case] amount: &str, #[case] expected: i64) {
        let amount: Money = amount.parse().unwrap();
        assert_eq!(amount.ceil_div(Money::from_cents(500)), expected);
    }

    #[test]
    fn test_ceil_div_degenerate_divisor() {
        assert_eq!(Money::from_cents(1225).ceil_div(Money::zero()), 0);
        assert_eq!(Money::from_cents(1225).ceil_div(Money::from_cents(-500)), 0);
    }

    #[test]
    fn test_ceil_div_largest_amount() {
        let largest: Money = "92233720368547758.079".parse().unwrap();
        assert_eq!(largest.ceil_div(Money::from_cents(1)), i64::MAX);
        assert_eq!(
            Money::from_cents(i64::MAX).ceil_div(Money::from_cents(500)),
            18_446_744_073_709_552
        );
    }
}

//! # Validation Module
//!
//! Turns a raw JSON receipt into a validated [`Receipt`].
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Check Priority (first failure wins)                │
//! │                                                                         │
//! │  1. Required fields present and non-empty                              │
//! │     retailer, purchaseDate, purchaseTime, items, total                 │
//! │     └── fail → MissingFields                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  2. purchaseDate ~ ^\d{4}-\d{2}-\d{2}$, purchaseTime ~ ^\d{2}:\d{2}$   │
//! │     └── fail → BadDateOrTime                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  3. items is a non-empty array                                         │
//! │     └── fail → InvalidItems                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  4. every item has a shortDescription and a price                      │
//! │     └── fail → InvalidItemFields                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Receipt (ready for scoring)                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Deliberate Limitation
//! Dates and times are checked for *shape* only. `2022-13-45` and `25:99`
//! are accepted and scored.
//!
//! ## Usage
//! ```rust
//! use receipt_core::validation::validate_receipt;
//! use receipt_core::ValidationError;
//! use serde_json::json;
//!
//! let raw = json!({ "retailer": "Target" });
//! assert_eq!(validate_receipt(&raw), Err(ValidationError::MissingFields));
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{Item, PurchaseDate, PurchaseTime, Receipt};

// ASCII classes on purpose: `\d` in `regex` also matches non-ASCII digits.
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));

static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("valid time regex"));

// =============================================================================
// Receipt Validator
// =============================================================================

/// Validates a raw receipt body.
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_receipt;
/// use serde_json::json;
///
/// let raw = json!({
///     "retailer": "M&M Corner Market",
///     "purchaseDate": "2022-03-20",
///     "purchaseTime": "14:33",
///     "items": [{ "shortDescription": "Gatorade", "price": "2.25" }],
///     "total": "2.25"
/// });
///
/// let receipt = validate_receipt(&raw).unwrap();
/// assert_eq!(receipt.purchase_time.hour, 14);
/// assert_eq!(receipt.total.cents(), 225);
/// ```
pub fn validate_receipt(raw: &Value) -> ValidationResult<Receipt> {
    let fields = raw.as_object().ok_or(ValidationError::MissingFields)?;

    // Step 1: presence
    let retailer = required_text(fields, "retailer")?;
    let purchase_date = required_text(fields, "purchaseDate")?;
    let purchase_time = required_text(fields, "purchaseTime")?;
    let items = fields
        .get("items")
        .filter(|value| !is_blank(value))
        .ok_or(ValidationError::MissingFields)?;
    let total = fields
        .get("total")
        .filter(|value| !is_blank(value))
        .and_then(parse_amount)
        .ok_or(ValidationError::MissingFields)?;

    // Step 2: date/time shape
    let purchase_date = parse_purchase_date(purchase_date)?;
    let purchase_time = parse_purchase_time(purchase_time)?;

    // Step 3 + 4: items
    let items = validate_items(items)?;

    Ok(Receipt {
        retailer: retailer.to_string(),
        purchase_date,
        purchase_time,
        items,
        total,
    })
}

/// Parses a `YYYY-MM-DD` date.
///
/// ## Example
/// ```rust
/// use receipt_core::validation::parse_purchase_date;
///
/// assert_eq!(parse_purchase_date("2022-01-01").unwrap().day, 1);
/// assert!(parse_purchase_date("2022-1-1").is_err());
/// ```
pub fn parse_purchase_date(text: &str) -> ValidationResult<PurchaseDate> {
    if !DATE_PATTERN.is_match(text) {
        return Err(ValidationError::BadDateOrTime);
    }

    let mut parts = text.split('-');
    let mut next = || -> Option<u16> { parts.next().and_then(|part| part.parse().ok()) };
    match (next(), next(), next()) {
        (Some(year), Some(month), Some(day)) => Ok(PurchaseDate {
            year,
            month: u8::try_from(month).map_err(|_| ValidationError::BadDateOrTime)?,
            day: u8::try_from(day).map_err(|_| ValidationError::BadDateOrTime)?,
        }),
        _ => Err(ValidationError::BadDateOrTime),
    }
}

/// Parses an `HH:MM` time.
pub fn parse_purchase_time(text: &str) -> ValidationResult<PurchaseTime> {
    if !TIME_PATTERN.is_match(text) {
        return Err(ValidationError::BadDateOrTime);
    }

    let (hour, minute) = text.split_once(':').ok_or(ValidationError::BadDateOrTime)?;
    Ok(PurchaseTime {
        hour: hour.parse().map_err(|_| ValidationError::BadDateOrTime)?,
        minute: minute.parse().map_err(|_| ValidationError::BadDateOrTime)?,
    })
}

// =============================================================================
// Item Validators
// =============================================================================

fn validate_items(raw: &Value) -> ValidationResult<Vec<Item>> {
    let entries = raw
        .as_array()
        .filter(|entries| !entries.is_empty())
        .ok_or(ValidationError::InvalidItems)?;

    entries.iter().map(validate_item).collect()
}

fn validate_item(raw: &Value) -> ValidationResult<Item> {
    let fields = raw.as_object().ok_or(ValidationError::InvalidItemFields)?;

    let short_description = fields
        .get("shortDescription")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .ok_or(ValidationError::InvalidItemFields)?;
    let price = fields
        .get("price")
        .filter(|value| !is_blank(value))
        .and_then(parse_amount)
        .ok_or(ValidationError::InvalidItemFields)?;

    Ok(Item::new(short_description, price))
}

// =============================================================================
// Field Helpers
// =============================================================================

/// `null` and `""` count as absent.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

fn required_text<'a>(fields: &'a Map<String, Value>, name: &str) -> ValidationResult<&'a str> {
    fields
        .get(name)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .ok_or(ValidationError::MissingFields)
}

/// Reads an amount given either as decimal text (`"6.49"`) or a JSON number
/// (`6.49`). Numbers go through their shortest textual form, never `f64` math.
fn parse_amount(value: &Value) -> Option<Money> {
    match value {
        Value::String(text) => text.parse().ok(),
        Value::Number(number) => number.to_string().parse().ok(),
        _ => None,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                { "shortDescription": "Mountain Dew 12PK", "price": "6.49" },
                { "shortDescription": "Emils Cheese Pizza", "price": "12.25" }
            ],
            "total": "18.74"
        })
    }

    fn with(field: &str, value: Value) -> Value {
        let mut body = valid_body();
        body[field] = value;
        body
    }

    fn without(field: &str) -> Value {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove(field);
        body
    }

    #[test]
    fn test_valid_receipt() {
        let receipt = validate_receipt(&valid_body()).unwrap();

        assert_eq!(receipt.retailer, "Target");
        assert_eq!(
            receipt.purchase_date,
            PurchaseDate {
                year: 2022,
                month: 1,
                day: 1
            }
        );
        assert_eq!(receipt.purchase_time, PurchaseTime { hour: 13, minute: 1 });
        assert_eq!(receipt.item_count(), 2);
        assert_eq!(receipt.items[1].price.cents(), 1225);
        assert_eq!(receipt.total.cents(), 1874);
    }

    #[test]
    fn test_numeric_amounts_are_accepted() {
        let mut body = with("total", json!(18.74));
        body["items"][0]["price"] = json!(6.49);
        body["items"][1]["price"] = json!(12);

        let receipt = validate_receipt(&body).unwrap();
        assert_eq!(receipt.total.cents(), 1874);
        assert_eq!(receipt.items[0].price.cents(), 649);
        assert_eq!(receipt.items[1].price.cents(), 1200);
    }

    #[test]
    fn test_amounts_finer_than_cents_are_accepted() {
        let mut body = with("total", json!("18.745"));
        body["items"][0]["price"] = json!(6.490000000000001);
        body["items"][1]["price"] = json!("12.255");

        let receipt = validate_receipt(&body).unwrap();
        assert_eq!(receipt.total.cents(), 1874);
        assert!(receipt.total.has_sub_cent());
        assert_eq!(receipt.items[0].price.cents(), 649);
        assert!(receipt.items[0].price.has_sub_cent());
        assert_eq!(receipt.items[1].price.cents(), 1225);
        assert!(receipt.items[1].price.has_sub_cent());
    }

    #[rstest]
    #[case("retailer")]
    #[case("purchaseDate")]
    #[case("purchaseTime")]
    #[case("items")]
    #[case("total")]
    fn test_missing_field(#[case] field: &str) {
        assert_eq!(
            validate_receipt(&without(field)),
            Err(ValidationError::MissingFields)
        );
    }

    #[rstest]
    #[case("retailer", json!(""))]
    #[case("retailer", json!(null))]
    #[case("retailer", json!(42))]
    #[case("purchaseDate", json!(""))]
    #[case("purchaseTime", json!(1401))]
    #[case("items", json!(null))]
    #[case("items", json!(""))]
    #[case("total", json!(""))]
    #[case("total", json!("abc"))]
    #[case("total", json!("-1.00"))]
    #[case("total", json!(true))]
    fn test_empty_or_unusable_field(#[case] field: &str, #[case] value: Value) {
        assert_eq!(
            validate_receipt(&with(field, value)),
            Err(ValidationError::MissingFields)
        );
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!([]))]
    #[case(json!("receipt"))]
    fn test_non_object_body(#[case] body: Value) {
        assert_eq!(validate_receipt(&body), Err(ValidationError::MissingFields));
    }

    #[rstest]
    #[case("purchaseDate", "2022/01/01")]
    #[case("purchaseDate", "22-01-01")]
    #[case("purchaseDate", "2022-01-01T00:00")]
    #[case("purchaseDate", "２０２２-01-01")]
    #[case("purchaseTime", "1:01")]
    #[case("purchaseTime", "13:01:00")]
    #[case("purchaseTime", "1pm")]
    fn test_bad_date_or_time(#[case] field: &str, #[case] value: &str) {
        assert_eq!(
            validate_receipt(&with(field, json!(value))),
            Err(ValidationError::BadDateOrTime)
        );
    }

    #[test]
    fn test_out_of_range_date_and_time_are_accepted() {
        let mut body = with("purchaseDate", json!("2022-13-45"));
        body["purchaseTime"] = json!("25:99");

        let receipt = validate_receipt(&body).unwrap();
        assert_eq!(receipt.purchase_date.month, 13);
        assert_eq!(receipt.purchase_date.day, 45);
        assert_eq!(receipt.purchase_time, PurchaseTime { hour: 25, minute: 99 });
    }

    #[test]
    fn test_missing_fields_wins_over_bad_date() {
        let mut body = without("total");
        body["purchaseDate"] = json!("yesterday");
        assert_eq!(validate_receipt(&body), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_bad_date_wins_over_bad_items() {
        let mut body = with("items", json!([]));
        body["purchaseTime"] = json!("noon");
        assert_eq!(validate_receipt(&body), Err(ValidationError::BadDateOrTime));
    }

    #[rstest]
    #[case(json!([]))]
    #[case(json!({ "shortDescription": "Gatorade", "price": "2.25" }))]
    #[case(json!("Gatorade"))]
    #[case(json!(3))]
    fn test_invalid_items(#[case] items: Value) {
        assert_eq!(
            validate_receipt(&with("items", items)),
            Err(ValidationError::InvalidItems)
        );
    }

    #[rstest]
    #[case(json!({ "price": "2.25" }))]
    #[case(json!({ "shortDescription": "", "price": "2.25" }))]
    #[case(json!({ "shortDescription": 7, "price": "2.25" }))]
    #[case(json!({ "shortDescription": "Gatorade" }))]
    #[case(json!({ "shortDescription": "Gatorade", "price": "" }))]
    #[case(json!({ "shortDescription": "Gatorade", "price": null }))]
    #[case(json!({ "shortDescription": "Gatorade", "price": "free" }))]
    #[case(json!("Gatorade"))]
    fn test_invalid_item_fields(#[case] item: Value) {
        let mut body = valid_body();
        body["items"][1] = item;
        assert_eq!(
            validate_receipt(&body),
            Err(ValidationError::InvalidItemFields)
        );
    }

    #[test]
    fn test_whitespace_description_is_present() {
        let mut body = valid_body();
        body["items"][0]["shortDescription"] = json!("   ");
        let receipt = validate_receipt(&body).unwrap();
        assert_eq!(receipt.items[0].trimmed_description_len(), 0);
    }
}

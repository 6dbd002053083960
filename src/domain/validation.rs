//! Structural and business-rule validation of tax requests.

use rust_decimal::Decimal;

use crate::domain::entities::TaxRequest;
use crate::domain::error::ValidationError;

/// Validates a tax request.
///
/// # Rules
///
/// Checked in this order; the first failure is returned:
///
/// 1. `address.state` is non-empty
/// 2. `address.zipcode` is non-empty
/// 3. at least one item is present
/// 4. for each item in order: `price >= 0`, then `quantity >= 1`
///
/// No normalization happens here. Merge `postal_code` into `zipcode` with
/// [`crate::domain::normalization::normalize_request`] first.
///
/// # Errors
///
/// Returns a [`ValidationError`] describing the first violated rule.
pub fn validate_request(request: &TaxRequest) -> Result<(), ValidationError> {
    if request.address.state.is_empty() {
        return Err(ValidationError::state_required());
    }
    if request.address.zipcode.is_empty() {
        return Err(ValidationError::zipcode_required());
    }
    if request.items.is_empty() {
        return Err(ValidationError::items_required());
    }

    for (index, item) in request.items.iter().enumerate() {
        if item.price < Decimal::ZERO {
            return Err(ValidationError::invalid_price(index));
        }
        if item.quantity < 1 {
            return Err(ValidationError::invalid_quantity(index));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Address, Item};
    use rust_decimal_macros::dec;

    fn request(state: &str, zipcode: &str, items: Vec<Item>) -> TaxRequest {
        TaxRequest::new(Address::new("1 Main St", "Town", state, "US", zipcode), items)
    }

    fn item(price: Decimal, quantity: i64) -> Item {
        Item::new("sku", "Widget", price, quantity)
    }

    fn message(request: &TaxRequest) -> String {
        validate_request(request).unwrap_err().message().to_string()
    }

    #[test]
    fn test_valid_request() {
        let req = request("CA", "90001", vec![item(dec!(10), 1), item(dec!(0), 5)]);
        assert!(validate_request(&req).is_ok());
    }

    #[test]
    fn test_missing_state() {
        let req = request("", "90001", vec![item(dec!(10), 1)]);
        assert_eq!(message(&req), "state is required");
    }

    #[test]
    fn test_missing_state_wins_over_missing_zipcode() {
        let req = request("", "", vec![]);
        assert_eq!(message(&req), "state is required");
    }

    #[test]
    fn test_missing_zipcode() {
        let req = request("CA", "", vec![item(dec!(10), 1)]);
        assert_eq!(message(&req), "zipcode is required");
    }

    #[test]
    fn test_postal_code_alone_is_not_enough_without_normalization() {
        let mut req = request("CA", "", vec![item(dec!(10), 1)]);
        req.address.postal_code = Some("90001".to_string());
        assert_eq!(message(&req), "zipcode is required");
    }

    #[test]
    fn test_no_items() {
        let req = request("CA", "90001", vec![]);
        assert_eq!(message(&req), "at least one item is required");
    }

    #[test]
    fn test_negative_price() {
        let req = request("CA", "90001", vec![item(dec!(-100.00), 1)]);
        assert_eq!(message(&req), "item 0 has invalid price");
    }

    #[test]
    fn test_zero_and_negative_quantity() {
        let req = request("CA", "90001", vec![item(dec!(1), 0)]);
        assert_eq!(message(&req), "item 0 has invalid quantity");

        let req = request("CA", "90001", vec![item(dec!(1), -3)]);
        assert_eq!(message(&req), "item 0 has invalid quantity");
    }

    #[test]
    fn test_price_checked_before_quantity() {
        let req = request("CA", "90001", vec![item(dec!(-1), 0)]);
        assert_eq!(message(&req), "item 0 has invalid price");
    }

    #[test]
    fn test_first_offending_item_reported() {
        let req = request(
            "CA",
            "90001",
            vec![item(dec!(5), 1), item(dec!(5), 0), item(dec!(-5), 1)],
        );
        assert_eq!(message(&req), "item 1 has invalid quantity");
    }
}

//! Purchased item entity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::rounding::as_number;

/// A product or service line in a tax request.
///
/// Construction accepts any price and quantity; out-of-range values are
/// rejected by [`crate::domain::validation::validate_request`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Unit price.
    #[serde(serialize_with = "as_number")]
    pub price: Decimal,

    pub quantity: i64,
}

impl Item {
    /// Creates an item without a description.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal, quantity: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            price,
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_deserialize_numeric_price() {
        let item: Item = serde_json::from_value(json!({
            "id": "sku-1",
            "name": "Widget",
            "price": 19.99,
            "quantity": 3
        }))
        .unwrap();

        assert_eq!(item.price, dec!(19.99));
        assert_eq!(item.quantity, 3);
        assert!(item.description.is_none());
    }

    #[test]
    fn test_deserialize_accepts_invalid_business_values() {
        let item: Item = serde_json::from_value(json!({
            "id": "sku-1",
            "name": "Widget",
            "price": -5,
            "quantity": 0
        }))
        .unwrap();

        assert_eq!(item.price, dec!(-5));
        assert_eq!(item.quantity, 0);
    }

    #[test]
    fn test_deserialize_fractional_quantity_is_rejected() {
        let result = serde_json::from_value::<Item>(json!({
            "id": "sku-1",
            "name": "Widget",
            "price": 1,
            "quantity": 1.5
        }));

        assert!(result.is_err());
    }
}

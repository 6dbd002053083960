//! Shipping address entity.

use serde::{Deserialize, Serialize};

/// Customer shipping address used to resolve the tax jurisdiction.
///
/// `zipcode` and `postal_code` carry the same value under two historical
/// field names. Callers merge them with
/// [`crate::domain::normalization::normalize_address`] before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    /// Region code, e.g. `"CA"`. Matched case-insensitively against the rate table.
    pub state: String,
    pub country: String,

    #[serde(default)]
    pub zipcode: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

impl Address {
    /// Creates an address with a primary zipcode and no alternate postal code.
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
        zipcode: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            country: country.into(),
            zipcode: zipcode.into(),
            postal_code: None,
        }
    }

    /// Sets the alternate postal code field.
    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_without_zipcode_key() {
        let address: Address = serde_json::from_value(json!({
            "street": "1 Main St",
            "city": "Portland",
            "state": "OR",
            "country": "US",
            "postal_code": "97201"
        }))
        .unwrap();

        assert_eq!(address.zipcode, "");
        assert_eq!(address.postal_code.as_deref(), Some("97201"));
    }

    #[test]
    fn test_deserialize_missing_state_is_rejected() {
        let result = serde_json::from_value::<Address>(json!({
            "street": "1 Main St",
            "city": "Portland",
            "country": "US",
            "zipcode": "97201"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_omits_absent_postal_code() {
        let address = Address::new("1 Main St", "Albany", "NY", "US", "12207");
        let json = serde_json::to_value(&address).unwrap();

        assert_eq!(json["zipcode"], "12207");
        assert!(json.get("postal_code").is_none());
    }
}

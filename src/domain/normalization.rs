//! Reconciliation of the `zipcode` / `postal_code` field pair.

use crate::domain::entities::{Address, TaxRequest};

/// Copies `postal_code` into `zipcode` when the primary field is empty.
///
/// The alternate field is left in place; the response echoes the address
/// exactly as it looks after this step.
///
/// # Examples
///
/// ```
/// use tax_calculation_api::domain::entities::Address;
/// use tax_calculation_api::domain::normalization::normalize_address;
///
/// let address = Address::new("1 Main St", "Portland", "OR", "US", "").with_postal_code("97201");
/// assert_eq!(normalize_address(address).zipcode, "97201");
/// ```
pub fn normalize_address(mut address: Address) -> Address {
    if address.zipcode.is_empty()
        && let Some(postal_code) = address.postal_code.as_deref().filter(|p| !p.is_empty())
    {
        address.zipcode = postal_code.to_string();
    }
    address
}

/// Applies [`normalize_address`] to the request's address.
pub fn normalize_request(request: TaxRequest) -> TaxRequest {
    TaxRequest {
        address: normalize_address(request.address),
        items: request.items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postal_code_fills_empty_zipcode() {
        let address = Address::new("s", "c", "OR", "US", "").with_postal_code("97201");
        let normalized = normalize_address(address);

        assert_eq!(normalized.zipcode, "97201");
        assert_eq!(normalized.postal_code.as_deref(), Some("97201"));
    }

    #[test]
    fn test_zipcode_takes_precedence() {
        let address = Address::new("s", "c", "OR", "US", "97035").with_postal_code("97201");
        assert_eq!(normalize_address(address).zipcode, "97035");
    }

    #[test]
    fn test_empty_postal_code_is_ignored() {
        let address = Address::new("s", "c", "OR", "US", "").with_postal_code("");
        assert_eq!(normalize_address(address).zipcode, "");
    }

    #[test]
    fn test_no_postal_code_is_unchanged() {
        let address = Address::new("s", "c", "OR", "US", "");
        assert_eq!(normalize_address(address.clone()), address);
    }
}

//! Tax request and response entities.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Address, Item};
use crate::utils::rounding::as_number;

/// Inbound request: where the purchase ships and what it contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRequest {
    pub address: Address,
    pub items: Vec<Item>,
}

impl TaxRequest {
    pub fn new(address: Address, items: Vec<Item>) -> Self {
        Self { address, items }
    }
}

/// Computed tax breakdown for a single item.
///
/// Monetary fields are rounded to cents; `tax_rate` is the applied rate as a
/// percentage (e.g. `8.52` for a rate of `0.0852`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTaxDetail {
    pub item_id: String,
    pub item_name: String,
    #[serde(serialize_with = "as_number")]
    pub price: Decimal,
    pub quantity: i64,
    #[serde(serialize_with = "as_number")]
    pub subtotal: Decimal,
    #[serde(serialize_with = "as_number")]
    pub tax_rate: Decimal,
    #[serde(serialize_with = "as_number")]
    pub tax_amount: Decimal,
    #[serde(serialize_with = "as_number")]
    pub total_amount: Decimal,
}

/// Full tax calculation result, items in request order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResponse {
    pub address: Address,
    pub items: Vec<ItemTaxDetail>,
    #[serde(serialize_with = "as_number")]
    pub subtotal: Decimal,
    #[serde(serialize_with = "as_number")]
    pub total_tax: Decimal,
    #[serde(serialize_with = "as_number")]
    pub grand_total: Decimal,
    pub tax_jurisdiction: String,
}

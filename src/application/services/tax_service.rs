//! Sales tax calculation service.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::entities::{ItemTaxDetail, TaxRequest, TaxResponse};
use crate::domain::rate_provider::jurisdiction_label;
use crate::domain::validation::validate_request;
use crate::domain::{RateProvider, ValidationError};
use crate::utils::rounding::{rate_as_percentage, round_currency};

/// Service computing per-item and aggregate sales tax for a request.
///
/// Stateless apart from the shared, read-only rate provider, so one
/// instance serves any number of concurrent requests.
pub struct TaxService<R: RateProvider> {
    rate_provider: Arc<R>,
}

impl<R: RateProvider> TaxService<R> {
    /// Creates a new tax service.
    pub fn new(rate_provider: Arc<R>) -> Self {
        Self { rate_provider }
    }

    /// Calculates tax for a normalized request.
    ///
    /// # Algorithm
    ///
    /// 1. Validate the request (first failure wins)
    /// 2. Resolve one flat rate from `address.state`
    /// 3. Per item: `subtotal = price * quantity`, `tax = subtotal * rate`
    /// 4. Aggregate the unrounded subtotals and taxes, round each once
    ///
    /// Per-item and aggregate totals are the sum of their rounded parts, so
    /// `total_amount == subtotal + tax_amount` and
    /// `grand_total == subtotal + total_tax` always hold on the output.
    ///
    /// The address is echoed unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the request breaks a business rule, or
    /// if a line amount does not fit the decimal range.
    pub fn calculate(&self, request: TaxRequest) -> Result<TaxResponse, ValidationError> {
        validate_request(&request)?;

        let rate = self.rate_provider.rate_for(&request.address.state);
        let tax_rate = rate_as_percentage(rate);
        let tax_jurisdiction = jurisdiction_label(&request.address.state);

        let mut items = Vec::with_capacity(request.items.len());
        let mut subtotal = Decimal::ZERO;
        let mut total_tax = Decimal::ZERO;

        for (index, item) in request.items.into_iter().enumerate() {
            let (item_subtotal, item_tax) = item_amounts(item.price, item.quantity, rate)
                .ok_or_else(|| ValidationError::amount_out_of_range(index))?;

            subtotal = subtotal
                .checked_add(item_subtotal)
                .ok_or_else(|| ValidationError::amount_out_of_range(index))?;
            total_tax = total_tax
                .checked_add(item_tax)
                .ok_or_else(|| ValidationError::amount_out_of_range(index))?;

            let rounded_subtotal = round_currency(item_subtotal);
            let rounded_tax = round_currency(item_tax);

            items.push(ItemTaxDetail {
                item_id: item.id,
                item_name: item.name,
                price: item.price,
                quantity: item.quantity,
                subtotal: rounded_subtotal,
                tax_rate,
                tax_amount: rounded_tax,
                total_amount: rounded_subtotal + rounded_tax,
            });
        }

        let subtotal = round_currency(subtotal);
        let total_tax = round_currency(total_tax);

        tracing::debug!(
            jurisdiction = %tax_jurisdiction,
            %rate,
            items = items.len(),
            %subtotal,
            %total_tax,
            "Tax calculated"
        );

        Ok(TaxResponse {
            address: request.address,
            items,
            subtotal,
            total_tax,
            grand_total: subtotal + total_tax,
            tax_jurisdiction,
        })
    }
}

/// Unrounded `(subtotal, tax)` for one line, `None` on decimal overflow.
fn item_amounts(price: Decimal, quantity: i64, rate: Decimal) -> Option<(Decimal, Decimal)> {
    let subtotal = price.checked_mul(Decimal::from(quantity))?;
    let tax = subtotal.checked_mul(rate)?;
    Some((subtotal, tax))
}

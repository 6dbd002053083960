//! Handler for tax calculation endpoint.

use axum::{Json, body::Bytes, extract::State};
use metrics::counter;

use crate::domain::entities::{TaxRequest, TaxResponse};
use crate::domain::normalization::normalize_request;
use crate::error::AppError;
use crate::state::AppState;

/// Calculates sales tax for a shipping address and a list of items.
///
/// # Endpoint
///
/// `POST /api/v1/calculate-tax`
///
/// # Request Body
///
/// ```json
/// {
///   "address": {
///     "street": "350 5th Ave",
///     "city": "New York",
///     "state": "NY",
///     "country": "US",
///     "zipcode": "10118"
///   },
///   "items": [
///     { "id": "item1", "name": "Product A", "price": 100.00, "quantity": 2 }
///   ]
/// }
/// ```
///
/// `postal_code` is accepted in place of `zipcode`. The body is parsed as
/// JSON whether or not a `Content-Type` header is sent.
///
/// # Response
///
/// ```json
/// {
///   "address": { "...": "echoed" },
///   "items": [
///     {
///       "item_id": "item1",
///       "item_name": "Product A",
///       "price": 100.0,
///       "quantity": 2,
///       "subtotal": 200.0,
///       "tax_rate": 8.52,
///       "tax_amount": 17.04,
///       "total_amount": 217.04
///     }
///   ],
///   "subtotal": 200.0,
///   "total_tax": 17.04,
///   "grand_total": 217.04,
///   "tax_jurisdiction": "NY, USA"
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: business-rule violation (missing state, invalid price, ...)
/// - **422 Unprocessable Entity**: malformed JSON or missing required fields
pub async fn calculate_tax_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TaxResponse>, AppError> {
    let request: TaxRequest = serde_json::from_slice(&body)?;
    let request = normalize_request(request);

    match state.tax_service.calculate(request) {
        Ok(response) => {
            counter!("tax_calculations_total", "outcome" => "ok").increment(1);
            tracing::debug!(
                jurisdiction = %response.tax_jurisdiction,
                items = response.items.len(),
                grand_total = %response.grand_total,
                "Tax request processed"
            );
            Ok(Json(response))
        }
        Err(err) => {
            counter!("tax_calculations_total", "outcome" => "rejected").increment(1);
            tracing::warn!(reason = %err, "Tax request rejected");
            Err(err.into())
        }
    }
}

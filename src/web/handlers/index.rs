//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::api::dto::health::SERVICE_NAME;
use crate::infrastructure::rates::{DEFAULT_RATE, StaticRateTable};
use crate::utils::rounding::rate_as_percentage;

/// One row of the published rate table.
pub struct RateRow {
    pub state: &'static str,
    pub percentage: String,
}

/// Template for the landing page.
///
/// Renders `templates/index.html`: a tax calculation form (driven by
/// `static/app.js`) and the table of supported states.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub service: &'static str,
    pub version: &'static str,
    pub default_rate: String,
    pub rates: Vec<RateRow>,
}

impl IndexTemplate {
    pub fn new() -> Self {
        let rates = StaticRateTable::entries()
            .iter()
            .map(|(state, rate)| RateRow {
                state: *state,
                percentage: rate_as_percentage(*rate).to_string(),
            })
            .collect();

        Self {
            service: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
            default_rate: rate_as_percentage(DEFAULT_RATE).to_string(),
            rates,
        }
    }
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_lists_rates() {
        let page = IndexTemplate::new();
        assert_eq!(page.rates.len(), 50);
        assert_eq!(page.default_rate, "7.00");

        let ny = page.rates.iter().find(|r| r.state == "NY").unwrap();
        assert_eq!(ny.percentage, "8.52");
    }

    #[test]
    fn test_index_renders() {
        let html = IndexTemplate::new().render().unwrap();
        assert!(html.contains("tax-calculation-api"));
        assert!(html.contains("<td>OR</td>"));
    }
}

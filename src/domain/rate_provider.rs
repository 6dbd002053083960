//! Jurisdiction rate lookup contract.

use rust_decimal::Decimal;

/// Source of flat sales tax rates keyed by state code.
///
/// # Implementations
///
/// - [`crate::infrastructure::rates::StaticRateTable`] - compiled-in US table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait RateProvider: Send + Sync {
    /// Returns the rate as a fraction (`0.0852` for 8.52%) for `state`.
    ///
    /// Lookup is case-insensitive. Unknown states resolve to a default rate
    /// rather than failing.
    fn rate_for(&self, state: &str) -> Decimal;
}

/// Builds the jurisdiction label shown in responses.
///
/// The state is used exactly as supplied, preserving its casing.
pub fn jurisdiction_label(state: &str) -> String {
    format!("{state}, USA")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jurisdiction_label_preserves_casing() {
        assert_eq!(jurisdiction_label("NY"), "NY, USA");
        assert_eq!(jurisdiction_label("ca"), "ca, USA");
    }
}

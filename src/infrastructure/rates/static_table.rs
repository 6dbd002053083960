//! Compiled-in US state sales tax rates.

use std::collections::HashMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::domain::RateProvider;

/// Rate applied when the state code is not in the table (7.00%).
pub const DEFAULT_RATE: Decimal = dec!(0.0700);

/// Approximate combined (state + average local) sales tax rates.
const US_STATE_RATES: &[(&str, Decimal)] = &[
    ("AL", dec!(0.0913)),
    ("AK", dec!(0.0176)),
    ("AZ", dec!(0.0831)),
    ("AR", dec!(0.0947)),
    ("CA", dec!(0.0850)),
    ("CO", dec!(0.0763)),
    ("CT", dec!(0.0635)),
    ("DE", dec!(0.0000)),
    ("FL", dec!(0.0705)),
    ("GA", dec!(0.0733)),
    ("HI", dec!(0.0444)),
    ("ID", dec!(0.0602)),
    ("IL", dec!(0.0868)),
    ("IN", dec!(0.0700)),
    ("IA", dec!(0.0694)),
    ("KS", dec!(0.0865)),
    ("KY", dec!(0.0600)),
    ("LA", dec!(0.0952)),
    ("ME", dec!(0.0550)),
    ("MD", dec!(0.0600)),
    ("MA", dec!(0.0625)),
    ("MI", dec!(0.0600)),
    ("MN", dec!(0.0744)),
    ("MS", dec!(0.0707)),
    ("MO", dec!(0.0824)),
    ("MT", dec!(0.0000)),
    ("NE", dec!(0.0694)),
    ("NV", dec!(0.0823)),
    ("NH", dec!(0.0000)),
    ("NJ", dec!(0.0663)),
    ("NM", dec!(0.0779)),
    ("NY", dec!(0.0852)),
    ("NC", dec!(0.0698)),
    ("ND", dec!(0.0696)),
    ("OH", dec!(0.0723)),
    ("OK", dec!(0.0897)),
    ("OR", dec!(0.0000)),
    ("PA", dec!(0.0634)),
    ("RI", dec!(0.0700)),
    ("SC", dec!(0.0744)),
    ("SD", dec!(0.0645)),
    ("TN", dec!(0.0955)),
    ("TX", dec!(0.0820)),
    ("UT", dec!(0.0719)),
    ("VT", dec!(0.0624)),
    ("VA", dec!(0.0575)),
    ("WA", dec!(0.0920)),
    ("WV", dec!(0.0650)),
    ("WI", dec!(0.0543)),
    ("WY", dec!(0.0536)),
];

/// Lookup index over [`US_STATE_RATES`], built on first use.
static RATE_INDEX: LazyLock<HashMap<&'static str, Decimal>> =
    LazyLock::new(|| US_STATE_RATES.iter().copied().collect());

/// Read-only rate table for the 50 US states.
///
/// Stateless; a single instance can be shared across all requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRateTable;

impl StaticRateTable {
    pub fn new() -> Self {
        Self
    }

    /// Returns the rate for a known state, or `None` for unknown codes.
    pub fn lookup(&self, state: &str) -> Option<Decimal> {
        RATE_INDEX.get(state.to_ascii_uppercase().as_str()).copied()
    }

    /// All table entries in alphabetical order of state name.
    pub fn entries() -> &'static [(&'static str, Decimal)] {
        US_STATE_RATES
    }
}

impl RateProvider for StaticRateTable {
    fn rate_for(&self, state: &str) -> Decimal {
        self.lookup(state).unwrap_or_else(|| {
            debug!(state, "Unknown state code, using default rate");
            DEFAULT_RATE
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_all_states() {
        assert_eq!(StaticRateTable::entries().len(), 50);
        assert_eq!(RATE_INDEX.len(), 50);
    }

    #[test]
    fn test_known_rates() {
        let table = StaticRateTable::new();
        assert_eq!(table.rate_for("NY"), dec!(0.0852));
        assert_eq!(table.rate_for("CA"), dec!(0.0850));
        assert_eq!(table.rate_for("AK"), dec!(0.0176));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = StaticRateTable::new();
        assert_eq!(table.rate_for("ca"), table.rate_for("CA"));
        assert_eq!(table.rate_for("Ny"), dec!(0.0852));
    }

    #[test]
    fn test_zero_rate_states() {
        let table = StaticRateTable::new();
        for state in ["DE", "MT", "NH", "OR"] {
            assert!(table.rate_for(state).is_zero(), "{state} should be tax free");
        }
    }

    #[test]
    fn test_unknown_state_uses_default() {
        let table = StaticRateTable::new();
        assert_eq!(table.lookup("ZZ"), None);
        assert_eq!(table.rate_for("ZZ"), DEFAULT_RATE);
        assert_eq!(table.rate_for("Ontario"), dec!(0.07));
    }
}

//! Business-rule failure raised by validation and calculation.

/// A request that violates a business rule.
///
/// The message is client-facing and is returned verbatim in the HTTP error
/// body, e.g. `"item 0 has invalid price"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn state_required() -> Self {
        Self::new("state is required")
    }

    pub(crate) fn zipcode_required() -> Self {
        Self::new("zipcode is required")
    }

    pub(crate) fn items_required() -> Self {
        Self::new("at least one item is required")
    }

    pub(crate) fn invalid_price(index: usize) -> Self {
        Self::new(format!("item {index} has invalid price"))
    }

    pub(crate) fn invalid_quantity(index: usize) -> Self {
        Self::new(format!("item {index} has invalid quantity"))
    }

    pub(crate) fn amount_out_of_range(index: usize) -> Self {
        Self::new(format!("item {index} amount is out of range"))
    }
}

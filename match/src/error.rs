//! Error Types
//!
//! Admission failures are business outcomes and are reported through
//! `ValidationError`; configuration loading reports `ConfigError`.
//! Corruption of book state is not represented here: the engine panics.

use crate::engine::entry::OrderId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons an order is refused at the admission boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("order size must be positive, got {0}")]
    NonPositiveSize(Decimal),

    #[error("order size must be a whole number, got {0}")]
    FractionalSize(Decimal),

    #[error("order size {0} exceeds the admissible maximum")]
    SizeTooLarge(Decimal),

    #[error("limit order is missing a price")]
    MissingPrice,

    #[error("limit price must be positive, got {0}")]
    NonPositivePrice(Decimal),

    #[error("order id {0} was already submitted")]
    DuplicateOrderId(OrderId),

    #[error("order {0} already carries execution state")]
    AlreadyExecuted(OrderId),
}

/// Failures while reading the exchange configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::NonPositiveSize(dec!(-3)).to_string(),
            "order size must be positive, got -3"
        );
        assert_eq!(
            ValidationError::MissingPrice.to_string(),
            "limit order is missing a price"
        );
        assert_eq!(
            ValidationError::NonPositivePrice(dec!(0)).to_string(),
            "limit price must be positive, got 0"
        );
        assert_eq!(
            ValidationError::FractionalSize(dec!(1.5)).to_string(),
            "order size must be a whole number, got 1.5"
        );
    }
}

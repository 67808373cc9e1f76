use crate::{Amount, Denominations};

use thiserror::Error;

/// Smallest amount a withdrawal may be split into
pub const DEFAULT_MIN_UNIT: Amount = Amount(10_000);

/// Largest amount a single withdrawal may request
pub const DEFAULT_MAX_AMOUNT: Amount = Amount(100_000_000);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration: at least one denomination is required")]
    NoDenominations,

    #[error("Invalid configuration: denominations must be greater than 0")]
    NonPositiveDenomination,

    #[error("Invalid configuration: minimum unit must be greater than 0, got {0}")]
    NonPositiveMinUnit(Amount),

    #[error("Invalid configuration: maximum amount must be greater than 0, got {0}")]
    NonPositiveMaxAmount(Amount),
}

/// Everything a `DenominationSelector` needs to know about the currency it dispenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    pub(crate) denominations: Denominations,
    pub(crate) min_unit: Amount,
    pub(crate) max_amount: Amount,
}

impl SelectorConfig {
    pub fn new(
        denominations: Denominations,
        min_unit: Amount,
        max_amount: Amount,
    ) -> Result<Self, ConfigError> {
        if !min_unit.is_positive() {
            return Err(ConfigError::NonPositiveMinUnit(min_unit));
        }

        if !max_amount.is_positive() {
            return Err(ConfigError::NonPositiveMaxAmount(max_amount));
        }

        return Ok(Self {
            denominations,
            min_unit,
            max_amount,
        });
    }

    pub fn denominations(&self) -> &Denominations {
        &self.denominations
    }

    pub fn min_unit(&self) -> Amount {
        self.min_unit
    }

    pub fn max_amount(&self) -> Amount {
        self.max_amount
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            denominations: Denominations::default(),
            min_unit: DEFAULT_MIN_UNIT,
            max_amount: DEFAULT_MAX_AMOUNT,
        }
    }
}

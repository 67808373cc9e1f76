mod amount;
mod config;
mod denomination;
pub mod ids;
pub mod input;
mod limits;
pub mod report;
mod result;
mod selector;
pub mod services;
mod withdrawal;

pub use amount::{Amount, AmountError};
pub use config::{ConfigError, SelectorConfig, DEFAULT_MAX_AMOUNT, DEFAULT_MIN_UNIT};
pub use denomination::{Denomination, Denominations, DEFAULT_DENOMINATIONS};
pub use limits::{Limits, LimitsError};
pub use result::Result;
pub use selector::{DenominationSelector, SelectionError, ValidationError, WithdrawalError};
pub use withdrawal::Withdrawal;

pub fn build_atm_service(inventory: Option<Limits>) -> services::AtmService {
    let selector = DenominationSelector::new(SelectorConfig::default());
    let atm_service = services::AtmService::new(selector, inventory);

    return atm_service;
}

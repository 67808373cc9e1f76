use crate::{Amount, Denominations, Limits, SelectorConfig, Withdrawal};

use thiserror::Error;

/// Rejections raised before any notes are selected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid amount {0}: must be greater than 0")]
    InvalidAmount(Amount),

    #[error("Invalid amount {0}: must be a multiple of {1}")]
    NotAMultiple(Amount, Amount),

    #[error("Invalid amount {0}: exceeds the maximum withdrawal of {1}")]
    ExceedsMaximum(Amount, Amount),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Cannot dispense {0} exactly with the configured denominations")]
    Unsatisfiable(Amount),

    #[error("Insufficient notes: only {0} available")]
    Insufficient(Amount),

    #[error("Cannot dispense the exact amount with the notes available, {0} can be dispensed instead")]
    RoundedDown(Amount),
}

impl SelectionError {
    /// The lesser amount that can be dispensed, when the selector found one
    pub fn rounded_amount(&self) -> Option<Amount> {
        match self {
            SelectionError::RoundedDown(amount) => Some(*amount),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Greedy note selection over a fixed set of denominations.
///
/// Greedy selection always dispenses the fewest notes for canonical denomination systems, such
/// as the default one. For any other set the result is exact but not necessarily minimal.
///
/// The selector holds no mutable state, so it can be shared freely between callers.
#[derive(Debug, Clone, Default)]
pub struct DenominationSelector {
    config: SelectorConfig,
}

impl DenominationSelector {
    pub fn new(config: SelectorConfig) -> Self {
        return Self { config };
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn denominations(&self) -> &Denominations {
        &self.config.denominations
    }

    pub fn validate(&self, amount: Amount) -> Result<(), ValidationError> {
        if amount.0 <= 0 {
            return Err(ValidationError::InvalidAmount(amount));
        }

        if amount.0 % self.config.min_unit.0 != 0 {
            return Err(ValidationError::NotAMultiple(amount, self.config.min_unit));
        }

        if amount > self.config.max_amount {
            return Err(ValidationError::ExceedsMaximum(
                amount,
                self.config.max_amount,
            ));
        }

        return Ok(());
    }

    /// Selects notes assuming every denomination is in infinite supply
    pub fn select_unlimited(&self, amount: Amount) -> Result<Withdrawal, SelectionError> {
        let mut remaining =
            u64::try_from(amount.0).map_err(|_| SelectionError::Unsatisfiable(amount))?;

        let mut withdrawal = Withdrawal::new();

        for denomination in self.denominations().iter() {
            let value = denomination.value();

            if remaining >= value {
                let count = remaining / value;
                withdrawal.record(denomination, count);
                remaining -= count * value;
            }
        }

        if remaining > 0 {
            log::debug!("Unlimited selection for {amount} left {remaining} undispensed");
            return Err(SelectionError::Unsatisfiable(amount));
        }

        return Ok(withdrawal);
    }

    /// Selects notes without taking more of any denomination than `limits` allows.
    ///
    /// When the greedy pass cannot reach `amount` exactly, the failure tells the caller either
    /// how much money is available in total, or which lesser amount the pass did reach. The
    /// lesser amount is never dispensed on the caller's behalf; resubmitting it selects exactly
    /// the notes this pass had set aside.
    pub fn select_limited(
        &self,
        amount: Amount,
        limits: &Limits,
    ) -> Result<Withdrawal, SelectionError> {
        let mut remaining =
            u64::try_from(amount.0).map_err(|_| SelectionError::Unsatisfiable(amount))?;

        let mut withdrawal = Withdrawal::new();

        for denomination in self.denominations().iter() {
            let value = denomination.value();
            let available = limits.get(denomination);

            if remaining >= value && available > 0 {
                let count = (remaining / value).min(available);
                withdrawal.record(denomination, count);
                remaining -= count * value;
            }
        }

        if remaining == 0 {
            return Ok(withdrawal);
        }

        let total_available = self.total_available(limits);

        if total_available < amount {
            log::debug!("Limited selection for {amount} exceeds the {total_available} available");
            return Err(SelectionError::Insufficient(total_available));
        }

        let rounded = Amount(amount.0 - Amount::from_units(remaining).0);
        log::debug!("Limited selection for {amount} rounded down to {rounded}");

        return Err(SelectionError::RoundedDown(rounded));
    }

    /// Validates `amount`, then selects in limited mode when `limits` are given
    pub fn withdraw(
        &self,
        amount: Amount,
        limits: Option<&Limits>,
    ) -> Result<Withdrawal, WithdrawalError> {
        self.validate(amount)?;

        let withdrawal = match limits {
            Some(limits) => self.select_limited(amount, limits)?,
            None => self.select_unlimited(amount)?,
        };

        return Ok(withdrawal);
    }

    pub fn total_note_count(&self, withdrawal: &Withdrawal) -> u64 {
        withdrawal.note_count()
    }

    pub fn total_available(&self, limits: &Limits) -> Amount {
        limits.total(self.denominations())
    }

    /// Whether `limits` hold at least `amount` in total, along with that total
    pub fn check_sufficient_balance(&self, amount: Amount, limits: &Limits) -> (bool, Amount) {
        let total_available = self.total_available(limits);

        return (total_available >= amount, total_available);
    }
}

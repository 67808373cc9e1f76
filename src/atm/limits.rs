use crate::{Amount, Denomination, Denominations, Withdrawal};

use std::collections::HashMap;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LimitsError {
    #[error("Cannot dispense {requested} notes of {denomination}: only {available} available")]
    Overdrawn {
        denomination: Denomination,
        requested: u64,
        available: u64,
    },
}

/// Notes available per denomination. Denominations not present have no notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Limits {
    stock: HashMap<Denomination, u64>,
}

impl Limits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, denomination: Denomination, count: u64) {
        self.stock.insert(denomination, count);
    }

    /// Adds notes on top of whatever is already stocked
    pub fn add(&mut self, denomination: Denomination, count: u64) {
        let stocked = self.stock.entry(denomination).or_insert(0);
        *stocked = stocked.saturating_add(count);
    }

    pub fn get(&self, denomination: Denomination) -> u64 {
        self.stock.get(&denomination).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Denomination, u64)> + '_ {
        self.stock.iter().map(|(d, count)| (*d, *count))
    }

    /// Face value of every stocked note whose denomination is in `denominations`
    pub fn total(&self, denominations: &Denominations) -> Amount {
        let units = denominations.iter().fold(0u64, |acc, d| {
            acc.saturating_add(d.value().saturating_mul(self.get(d)))
        });

        return Amount::from_units(units);
    }

    /// Returns a copy of the stock with the withdrawal's notes taken out
    pub fn after_dispensing(&self, withdrawal: &Withdrawal) -> Result<Limits, LimitsError> {
        let mut remaining = self.clone();

        for (denomination, count) in withdrawal.iter() {
            let available = self.get(denomination);

            if count > available {
                return Err(LimitsError::Overdrawn {
                    denomination,
                    requested: count,
                    available,
                });
            }

            remaining.set(denomination, available - count);
        }

        return Ok(remaining);
    }
}

impl FromIterator<(Denomination, u64)> for Limits {
    fn from_iter<I: IntoIterator<Item = (Denomination, u64)>>(iter: I) -> Self {
        let mut limits = Limits::new();

        for (denomination, count) in iter {
            limits.add(denomination, count);
        }

        limits
    }
}

use crate::config::ConfigError;
use crate::Amount;

use std::fmt;

use serde::Deserialize;

/// Face values of the Vietnamese dong notes an ATM usually carries
pub const DEFAULT_DENOMINATIONS: [u64; 6] = [500_000, 200_000, 100_000, 50_000, 20_000, 10_000];

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Denomination(pub u64);

impl Denomination {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", Amount::from_units(self.0));
    }
}

/// A set of distinct, positive denominations kept in descending order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denominations(Vec<Denomination>);

impl Denominations {
    /// Sorts descending and drops duplicates
    pub fn new<I>(values: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = u64>,
    {
        let mut values = values.into_iter().map(Denomination).collect::<Vec<_>>();

        if values.is_empty() {
            return Err(ConfigError::NoDenominations);
        }

        if values.iter().any(|d| d.0 == 0) {
            return Err(ConfigError::NonPositiveDenomination);
        }

        values.sort_unstable_by(|a, b| b.cmp(a));
        values.dedup();

        return Ok(Self(values));
    }

    /// Iterates from the largest denomination to the smallest
    pub fn iter(&self) -> impl Iterator<Item = Denomination> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, denomination: Denomination) -> bool {
        self.0.contains(&denomination)
    }

    pub fn smallest(&self) -> Denomination {
        // never empty, enforced in `new`
        self.0[self.0.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Denominations {
    fn default() -> Self {
        Self(DEFAULT_DENOMINATIONS.iter().copied().map(Denomination).collect())
    }
}

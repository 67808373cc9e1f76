use crate::{Amount, Denomination};

use std::collections::BTreeMap;
use std::fmt;

/// Notes to dispense, keyed by denomination. Only non-zero counts are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Withdrawal {
    notes: BTreeMap<Denomination, u64>,
}

impl Withdrawal {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, denomination: Denomination, count: u64) {
        if count == 0 {
            return;
        }

        *self.notes.entry(denomination).or_insert(0) += count;
    }

    pub fn count(&self, denomination: Denomination) -> u64 {
        self.notes.get(&denomination).copied().unwrap_or(0)
    }

    /// Iterates from the largest denomination to the smallest
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, u64)> + '_ {
        self.notes.iter().rev().map(|(d, count)| (*d, *count))
    }

    pub fn note_count(&self) -> u64 {
        self.notes.values().sum()
    }

    /// Sum of face values of every note in the withdrawal
    pub fn amount(&self) -> Amount {
        let units = self
            .iter()
            .fold(0u64, |acc, (d, count)| acc.saturating_add(d.value().saturating_mul(count)));

        return Amount::from_units(units);
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl FromIterator<(Denomination, u64)> for Withdrawal {
    fn from_iter<I: IntoIterator<Item = (Denomination, u64)>>(iter: I) -> Self {
        let mut withdrawal = Withdrawal::new();

        for (denomination, count) in iter {
            withdrawal.record(denomination, count);
        }

        withdrawal
    }
}

impl fmt::Display for Withdrawal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "no notes");
        }

        for (denomination, count) in self.iter() {
            writeln!(f, "{count} x {denomination}")?;
        }

        return write!(f, "total notes: {}", self.note_count());
    }
}

use crate::Result;

use std::fmt;

use thiserror::Error;

use serde::{Deserialize, Serialize};

#[derive(Error, Debug)]
pub enum AmountError {
    #[error("Amount parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// An amount of money in the smallest currency unit
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(pub i64);

impl Amount {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);

    /// Parses free-text input, ignoring `,` and `.` thousands separators
    pub fn parse(string: &str) -> Result<Self> {
        let digits = string
            .trim()
            .chars()
            .filter(|c| *c != ',' && *c != '.')
            .collect::<String>();

        if digits.is_empty() {
            Err(AmountError::Parse("Empty amount", string.to_string()))?
        }

        let value: i64 = digits
            .parse()
            .map_err(|_| AmountError::Parse("Not a whole number", string.to_string()))?;

        return Ok(Amount(value));
    }

    /// Converts an unsigned unit count, saturating at `Amount::MAX`
    pub fn from_units(units: u64) -> Self {
        return Amount(i64::try_from(units).unwrap_or(i64::MAX));
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

        if self.0 < 0 {
            out.push('-');
        }

        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }

        return f.write_str(&out);
    }
}

use crate::ids::RequestId;
use crate::Amount;
use crate::Result;
use crate::{Denomination, Limits};

use serde::Deserialize;

use thiserror::Error;

/// Represents a withdrawal request row as it deserializes from a requests file
#[derive(Deserialize, Debug, Clone)]
pub struct InputRequest {
    pub id: u32,
    pub amount: String,
    pub accept_rounded: Option<bool>,
}

/// Represents an inventory row: how many notes of one denomination are loaded
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct InventoryRecord {
    pub denomination: u64,
    pub count: u64,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing inventory record: denomination must be greater than 0: {0:?}")]
    ZeroDenomination(InventoryRecord),
}

/// A parsed withdrawal request, ready for the selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawalRequest {
    pub id: RequestId,
    pub amount: Amount,

    /// The requester agrees to take a lesser amount when the exact one cannot be dispensed
    pub accept_rounded: bool,
}

impl InputRequest {
    pub fn parse_request(self) -> Result<WithdrawalRequest> {
        let amount = Amount::parse(&self.amount)?;

        return Ok(WithdrawalRequest {
            id: RequestId(self.id),
            amount,
            accept_rounded: self.accept_rounded.unwrap_or(false),
        });
    }
}

impl InventoryRecord {
    pub fn parse_stock(self) -> Result<(Denomination, u64)> {
        if self.denomination == 0 {
            Err(InputParseError::ZeroDenomination(self))?
        }

        return Ok((Denomination(self.denomination), self.count));
    }
}

/// Builds an inventory from records, skipping the ones that don't parse
pub fn build_limits<I>(records: I) -> Limits
where
    I: IntoIterator<Item = InventoryRecord>,
{
    records
        .into_iter()
        .filter_map(|record| match record.parse_stock() {
            Ok(stock) => Some(stock),
            Err(e) => {
                log::warn!("{e}");
                None
            }
        })
        .collect()
}

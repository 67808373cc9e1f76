use crate::input::WithdrawalRequest;
use crate::{SelectionError, ValidationError, Withdrawal, WithdrawalError};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Ok,
    Rounded,
    InvalidAmount,
    NotAMultiple,
    ExceedsMaximum,
    Unsatisfiable,
    Insufficient,
    RoundedDown,
}

/// One output row per withdrawal request
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WithdrawalReport {
    pub id: u32,
    pub requested: i64,
    pub dispensed: i64,
    pub status: ReportStatus,
    pub notes: String,
    pub note_count: u64,
    pub rounded_amount: Option<i64>,
    pub available: Option<i64>,
}

impl WithdrawalReport {
    pub fn dispensed(
        request: &WithdrawalRequest,
        withdrawal: &Withdrawal,
        status: ReportStatus,
    ) -> Self {
        let rounded_amount = match status {
            ReportStatus::Rounded => Some(withdrawal.amount().0),
            _ => None,
        };

        Self {
            id: request.id.0,
            requested: request.amount.0,
            dispensed: withdrawal.amount().0,
            status,
            notes: format_notes(withdrawal),
            note_count: withdrawal.note_count(),
            rounded_amount,
            available: None,
        }
    }

    pub fn failed(request: &WithdrawalRequest, error: &WithdrawalError) -> Self {
        let (status, rounded_amount, available) = match error {
            WithdrawalError::Validation(ValidationError::InvalidAmount(_)) => {
                (ReportStatus::InvalidAmount, None, None)
            }
            WithdrawalError::Validation(ValidationError::NotAMultiple(..)) => {
                (ReportStatus::NotAMultiple, None, None)
            }
            WithdrawalError::Validation(ValidationError::ExceedsMaximum(..)) => {
                (ReportStatus::ExceedsMaximum, None, None)
            }
            WithdrawalError::Selection(SelectionError::Unsatisfiable(_)) => {
                (ReportStatus::Unsatisfiable, None, None)
            }
            WithdrawalError::Selection(SelectionError::Insufficient(total)) => {
                (ReportStatus::Insufficient, None, Some(total.0))
            }
            WithdrawalError::Selection(SelectionError::RoundedDown(rounded)) => {
                (ReportStatus::RoundedDown, Some(rounded.0), None)
            }
        };

        Self {
            id: request.id.0,
            requested: request.amount.0,
            dispensed: 0,
            status,
            notes: String::new(),
            note_count: 0,
            rounded_amount,
            available,
        }
    }
}

/// Formats notes as `500000x3;200000x1`, largest denomination first
pub fn format_notes(withdrawal: &Withdrawal) -> String {
    withdrawal
        .iter()
        .map(|(denomination, count)| format!("{}x{count}", denomination.value()))
        .collect::<Vec<_>>()
        .join(";")
}

use crate::input::WithdrawalRequest;
use crate::report::{ReportStatus, WithdrawalReport};
use crate::Result;
use crate::{DenominationSelector, Limits, SelectionError, Withdrawal, WithdrawalError};

/// Serves withdrawal requests one after another, keeping track of the notes left in stock.
///
/// Without an inventory every request is served in unlimited mode.
pub struct AtmService {
    selector: DenominationSelector,
    inventory: Option<Limits>,
}

impl AtmService {
    pub fn new(selector: DenominationSelector, inventory: Option<Limits>) -> Self {
        return Self {
            selector,
            inventory,
        };
    }

    pub fn inventory(&self) -> Option<&Limits> {
        self.inventory.as_ref()
    }

    /// Attempts a withdrawal and reports the outcome.
    ///
    /// A rounded-down amount is only dispensed when the request accepts it. Only inventory
    /// bookkeeping failures are returned as errors, since those mean the service's own state is
    /// broken.
    pub fn process(&mut self, request: &WithdrawalRequest) -> Result<WithdrawalReport> {
        log::debug!("Processing withdrawal request: {request:?}");

        let (withdrawal, status) = match self.selector.withdraw(request.amount, self.inventory()) {
            Ok(withdrawal) => (withdrawal, ReportStatus::Ok),

            Err(WithdrawalError::Selection(SelectionError::RoundedDown(rounded)))
                if request.accept_rounded && rounded.is_positive() =>
            {
                log::debug!("Request {} accepts rounded amount {rounded}", request.id);

                match self.selector.withdraw(rounded, self.inventory()) {
                    Ok(withdrawal) => (withdrawal, ReportStatus::Rounded),
                    Err(e) => {
                        log::warn!("Request {}: {e}", request.id);
                        return Ok(WithdrawalReport::failed(request, &e));
                    }
                }
            }

            Err(e) => {
                log::warn!("Request {}: {e}", request.id);
                return Ok(WithdrawalReport::failed(request, &e));
            }
        };

        self.reserve(&withdrawal)?;

        log::debug!("Dispensing for request {}: {withdrawal:?}", request.id);

        return Ok(WithdrawalReport::dispensed(request, &withdrawal, status));
    }

    fn reserve(&mut self, withdrawal: &Withdrawal) -> Result {
        if let Some(inventory) = &self.inventory {
            self.inventory = Some(inventory.after_dispensing(withdrawal)?);
        }

        return Ok(());
    }
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Mutex;

use crate::{
    domain::usecases::submit_journal_usecase::{SubmitJournalUsecase as _, SubmitJournalUsecaseImpl},
    entities::{CashLocation, CounterpartyStore, EntryContext, ReferenceData},
    errors::JournalError,
    logic::{GateEvent, GridEngine, SubmitReadiness},
    repositories::{JournalId, JournalInputRepository},
};

/// Result of an internal-counterparty selection attempt.
#[derive(Debug, PartialEq, Clone)]
pub enum SelectionOutcome {
    /// A newer selection on the same row made this one obsolete; nothing was
    /// applied.
    Superseded,
    /// The mapping check failed; the selection was dropped and the message
    /// should be shown as a blocking warning.
    Rejected { message: String },
    /// Mapping verified; the sub-flow is open and these stores are the
    /// choices for the linked company.
    AwaitingDetails { stores: Vec<CounterpartyStore> },
}

/// Result of a store-scoped counterparty cash-location lookup.
#[derive(Debug, PartialEq, Clone)]
pub enum LookupOutcome {
    /// The store changed again while this lookup was in flight.
    Superseded,
    /// Cash locations for the chosen store (empty when the lookup failed;
    /// the field shows an explicit "no items found" state).
    Loaded(Vec<CashLocation>),
}

/// Composition-root facade for one journal-input session.
///
/// Owns the read-only reference cache and the grid behind a cooperative
/// mutex. The lock is never held across an await of a remote call; every
/// resumption re-checks the gate's tokens, so overlapping selections and
/// lookups resolve to whatever the user chose last.
pub struct JournalInputSession<R: JournalInputRepository> {
    repository: Arc<R>,
    usecase: SubmitJournalUsecaseImpl<R>,
    context: EntryContext,
    grid: Mutex<GridEngine>,
    submitting: AtomicBool,
}

impl<R: JournalInputRepository> JournalInputSession<R> {
    /// Load the session's reference data and start with two empty rows.
    pub async fn start(repository: Arc<R>, context: EntryContext) -> Result<Self, JournalError> {
        let (accounts, cash_locations, counterparties) = futures::try_join!(
            repository.get_accounts(),
            repository.get_cash_locations(&context.company_id, context.store_id.as_deref()),
            repository.get_counterparties(&context.company_id),
        )?;
        tracing::debug!(
            accounts = accounts.len(),
            cash_locations = cash_locations.len(),
            counterparties = counterparties.len(),
            "journal input session started"
        );
        let reference = ReferenceData::new(accounts, cash_locations, counterparties);
        Ok(Self {
            usecase: SubmitJournalUsecaseImpl::new(Arc::clone(&repository)),
            repository,
            context,
            grid: Mutex::new(GridEngine::new(reference)),
            submitting: AtomicBool::new(false),
        })
    }

    pub fn context(&self) -> &EntryContext {
        &self.context
    }

    /// Read access to the grid (row snapshots, option lists, statuses).
    pub async fn read<T>(&self, f: impl FnOnce(&GridEngine) -> T) -> T {
        f(&*self.grid.lock().await)
    }

    /// Synchronous field edits (dates, accounts, amounts, external
    /// counterparties, row add/delete) applied under the session lock.
    pub async fn edit<T>(&self, f: impl FnOnce(&mut GridEngine) -> T) -> T {
        f(&mut *self.grid.lock().await)
    }

    pub async fn readiness(&self) -> SubmitReadiness {
        self.grid.lock().await.readiness()
    }

    /// Run the account-mapping gate for an internal counterparty on a
    /// payable/receivable row. The row is not touched until the sub-flow
    /// opened by `AwaitingDetails` is confirmed.
    pub async fn select_internal_counterparty(
        &self,
        row_id: u64,
        counterparty_id: &str,
    ) -> Result<SelectionOutcome, JournalError> {
        let check = {
            let mut grid = self.grid.lock().await;
            grid.begin_internal_selection(row_id, counterparty_id)?
        };

        let outcome = self
            .repository
            .check_account_mapping(&self.context.company_id, &check.counterparty_id, &check.account_id)
            .await;

        let event = {
            let mut grid = self.grid.lock().await;
            grid.resolve_mapping(check.ticket, outcome)
        };
        match event {
            GateEvent::Stale => Ok(SelectionOutcome::Superseded),
            GateEvent::Rejected { message } => {
                tracing::warn!(row_id, counterparty_id, "account mapping rejected");
                Ok(SelectionOutcome::Rejected { message })
            }
            GateEvent::Approved => {
                let stores = match self
                    .repository
                    .get_counterparty_stores(&check.linked_company_id)
                    .await
                {
                    Ok(stores) => stores,
                    Err(error) => {
                        tracing::warn!(%error, "counterparty store lookup failed");
                        Vec::new()
                    }
                };
                let grid = self.grid.lock().await;
                if !grid.is_current_check(check.ticket) {
                    return Ok(SelectionOutcome::Superseded);
                }
                Ok(SelectionOutcome::AwaitingDetails { stores })
            }
        }
    }

    /// Choose the counterparty store within the open sub-flow and fetch the
    /// matching cash locations; a store change while the fetch is in flight
    /// supersedes it.
    pub async fn choose_counterparty_store(
        &self,
        row_id: u64,
        store_id: &str,
    ) -> Result<LookupOutcome, JournalError> {
        let (ticket, linked_company_id) = {
            let mut grid = self.grid.lock().await;
            let ticket = grid.choose_counterparty_store(row_id, store_id)?;
            let linked = grid
                .pending_linked_company(row_id)
                .map(str::to_string)
                .ok_or_else(|| {
                    JournalError::validation(row_id, "no approved counterparty selection")
                })?;
            (ticket, linked)
        };

        let locations = match self
            .repository
            .get_counterparty_cash_locations(&linked_company_id, Some(store_id))
            .await
        {
            Ok(locations) => locations,
            Err(error) => {
                tracing::warn!(%error, "counterparty cash-location lookup failed");
                Vec::new()
            }
        };

        let grid = self.grid.lock().await;
        if !grid.is_current_lookup(ticket) {
            return Ok(LookupOutcome::Superseded);
        }
        Ok(LookupOutcome::Loaded(locations))
    }

    pub async fn choose_counterparty_cash_location(&self, row_id: u64, location_id: &str) {
        self.grid
            .lock()
            .await
            .choose_counterparty_cash_location(row_id, location_id);
    }

    pub async fn choose_debt_category(&self, row_id: u64, category: crate::entities::DebtCategory) {
        self.grid.lock().await.choose_debt_category(row_id, category);
    }

    /// Apply the confirmed sub-flow atomically onto the row. Returns false if
    /// the sub-flow is incomplete or no longer open.
    pub async fn confirm_counterparty(&self, row_id: u64) -> bool {
        self.grid.lock().await.confirm_counterparty(row_id).is_some()
    }

    pub async fn cancel_counterparty(&self, row_id: u64) {
        self.grid.lock().await.cancel_counterparty(row_id);
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    /// Build, re-validate, and post the entry. Success resets the grid to two
    /// empty rows; failure leaves every row exactly as typed, so the user can
    /// correct and resubmit. Only one submission may be in flight at a time.
    pub async fn submit(
        &self,
        date: NaiveDate,
        description: &str,
    ) -> Result<JournalId, JournalError> {
        if self.submitting.swap(true, Ordering::SeqCst) {
            return Err(JournalError::SubmissionInFlight);
        }

        let entry = {
            let grid = self.grid.lock().await;
            match self.usecase.build_entry(&grid, &self.context, date) {
                Ok(entry) => entry,
                Err(error) => {
                    self.submitting.store(false, Ordering::SeqCst);
                    return Err(error);
                }
            }
        };

        let result = self
            .usecase
            .submit(&entry, &self.context.created_by, description)
            .await;

        if result.is_ok() {
            self.grid.lock().await.reset();
        }
        self.submitting.store(false, Ordering::SeqCst);
        result
    }

    /// Store/company context switch: the grid goes back to two empty rows and
    /// every outstanding async operation of the old context dies at the token
    /// check.
    pub async fn reset(&self) {
        self.grid.lock().await.reset();
    }
}

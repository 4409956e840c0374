use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::logic::grid_engine::{Blocker, GridEngine, GridRow};
use crate::domain::repositories::journal_input_repository::{JournalId, JournalInputRepository};
use crate::entities::{EntryContext, JournalEntry, TransactionLine};
use crate::errors::JournalError;

/// Assembles a `JournalEntry` from validated grid rows and posts it.
#[async_trait]
pub trait SubmitJournalUsecase: Send + Sync {
    /// Validate the grid and construct the immutable entry. Fails with the
    /// first blocker; never touches the grid.
    fn build_entry(
        &self,
        grid: &GridEngine,
        context: &EntryContext,
        date: NaiveDate,
    ) -> Result<JournalEntry, JournalError>;

    async fn submit(
        &self,
        entry: &JournalEntry,
        created_by: &str,
        description: &str,
    ) -> Result<JournalId, JournalError>;
}

pub struct SubmitJournalUsecaseImpl<R: JournalInputRepository> {
    repository: Arc<R>,
}

impl<R: JournalInputRepository> SubmitJournalUsecaseImpl<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    fn build_line(
        &self,
        grid: &GridEngine,
        row: &GridRow,
        date: NaiveDate,
    ) -> Result<TransactionLine, JournalError> {
        let reference = grid.reference();
        let account_id = row
            .account_id
            .as_deref()
            .ok_or_else(|| JournalError::validation(row.id, "account is required"))?;
        let account = reference
            .account(account_id)
            .ok_or_else(|| JournalError::validation(row.id, "unknown account"))?;

        let debit = row.debit_amount();
        let credit = row.credit_amount();
        let is_debit = debit > 0.0;
        let amount = if is_debit { debit } else { credit };

        let counterparty_id = row
            .internal_counterparty_id
            .clone()
            .or_else(|| row.external_counterparty_id.clone());
        let linked_company_id = counterparty_id
            .as_deref()
            .and_then(|id| reference.counterparty(id))
            .and_then(|cp| cp.linked_company_id.clone());

        let mut line = TransactionLine::new(is_debit, account, amount, row.detail.clone());
        line.cash_location_id = row.location_id.clone();
        line.counterparty_id = counterparty_id.clone();
        line.counterparty_store_id = row.counterparty_store_id.clone();
        line.counterparty_cash_location_id = row.counterparty_cash_location_id.clone();
        // Debt category only travels with a counterparty.
        line.debt_category = counterparty_id.as_deref().and(row.debt_category);
        line.issue_date = Some(date);
        line.linked_company_id = linked_company_id;
        Ok(line)
    }
}

#[async_trait]
impl<R: JournalInputRepository> SubmitJournalUsecase for SubmitJournalUsecaseImpl<R> {
    fn build_entry(
        &self,
        grid: &GridEngine,
        context: &EntryContext,
        date: NaiveDate,
    ) -> Result<JournalEntry, JournalError> {
        let readiness = grid.readiness();
        if let Some(blocker) = readiness.blockers.first() {
            return Err(blocker_error(blocker, readiness.total_debits, readiness.total_credits));
        }

        let lines = grid
            .rows()
            .iter()
            .map(|row| self.build_line(grid, row, date))
            .collect::<Result<Vec<_>, _>>()?;

        let entry = JournalEntry::new(
            context.company_id.clone(),
            context.store_id.clone(),
            date,
            lines,
        );
        // The aggregate re-checks its own invariants; the grid rules above
        // should already imply them.
        if !entry.can_submit() {
            if !entry.is_balanced() {
                return Err(JournalError::Balance {
                    total_debits: entry.total_debits,
                    total_credits: entry.total_credits,
                });
            }
            return Err(JournalError::validation(0, "journal entry failed re-validation"));
        }
        Ok(entry)
    }

    async fn submit(
        &self,
        entry: &JournalEntry,
        created_by: &str,
        description: &str,
    ) -> Result<JournalId, JournalError> {
        tracing::debug!(
            company_id = %entry.company_id,
            lines = entry.lines.len(),
            total = entry.total_debits,
            "submitting journal entry"
        );
        self.repository
            .submit_journal_entry(entry, created_by, description)
            .await
    }
}

fn blocker_error(blocker: &Blocker, total_debits: f64, total_credits: f64) -> JournalError {
    match blocker {
        Blocker::Unbalanced { .. } => JournalError::Balance {
            total_debits,
            total_credits,
        },
        Blocker::MissingDate { row_id } => JournalError::validation(*row_id, "date is required"),
        Blocker::MissingAccount { row_id } => {
            JournalError::validation(*row_id, "account is required")
        }
        Blocker::MissingCashLocation { row_id } => {
            JournalError::validation(*row_id, "cash accounts require a cash location")
        }
        Blocker::MissingCounterparty { row_id } => JournalError::validation(
            *row_id,
            "payable/receivable accounts require a counterparty",
        ),
        Blocker::MissingDebtCategory { row_id } => JournalError::validation(
            *row_id,
            "internal counterparties require a debt category",
        ),
        Blocker::MissingAmount { row_id } => {
            JournalError::validation(*row_id, "either a debit or a credit amount is required")
        }
        Blocker::ConflictingAmounts { row_id } => {
            JournalError::validation(*row_id, "a row cannot carry both a debit and a credit")
        }
    }
}

use chrono::NaiveDate;

use crate::domain::logic::amount_text::{parse_amount, sanitize_amount_input};
use crate::domain::logic::mapping_gate::{
    AccountMappingStatus, ConfirmedCounterparty, GateEvent, LookupTicket, MappingGate,
    MappingTicket,
};
use crate::entities::{CashLocationOption, DebtCategory, ReferenceData, BALANCE_TOLERANCE};
use crate::errors::JournalError;

/// One mutable draft row of the batch editor.
#[derive(Debug, PartialEq, Clone)]
pub struct GridRow {
    pub id: u64,
    pub date: Option<NaiveDate>,
    pub account_id: Option<String>,
    pub location_id: Option<String>,
    pub internal_counterparty_id: Option<String>,
    pub external_counterparty_id: Option<String>,
    pub detail: String,
    pub debit_text: String,
    pub credit_text: String,
    pub counterparty_store_id: Option<String>,
    pub counterparty_cash_location_id: Option<String>,
    pub debt_category: Option<DebtCategory>,
}

impl GridRow {
    fn empty(id: u64) -> Self {
        Self {
            id,
            date: None,
            account_id: None,
            location_id: None,
            internal_counterparty_id: None,
            external_counterparty_id: None,
            detail: String::new(),
            debit_text: String::new(),
            credit_text: String::new(),
            counterparty_store_id: None,
            counterparty_cash_location_id: None,
            debt_category: None,
        }
    }

    pub fn debit_amount(&self) -> f64 {
        parse_amount(&self.debit_text)
    }

    pub fn credit_amount(&self) -> f64 {
        parse_amount(&self.credit_text)
    }
}

/// Everything the grid still needs before the entry may be posted.
#[derive(Debug, PartialEq, Clone)]
pub enum Blocker {
    Unbalanced { difference: f64 },
    MissingDate { row_id: u64 },
    MissingAccount { row_id: u64 },
    MissingCashLocation { row_id: u64 },
    MissingCounterparty { row_id: u64 },
    MissingDebtCategory { row_id: u64 },
    MissingAmount { row_id: u64 },
    ConflictingAmounts { row_id: u64 },
}

/// Reactive submit-readiness snapshot, recomputed on request from the current
/// row state. The signed difference backs the persistent balance indicator.
#[derive(Debug, PartialEq, Clone)]
pub struct SubmitReadiness {
    pub total_debits: f64,
    pub total_credits: f64,
    pub blockers: Vec<Blocker>,
}

impl SubmitReadiness {
    pub fn difference(&self) -> f64 {
        self.total_debits - self.total_credits
    }

    pub fn is_ready(&self) -> bool {
        self.blockers.is_empty()
    }
}

/// Data captured when an internal-counterparty selection begins, handed to
/// the caller so it can run the asynchronous mapping check.
#[derive(Debug, PartialEq, Clone)]
pub struct PendingCheck {
    pub ticket: MappingTicket,
    pub account_id: String,
    pub counterparty_id: String,
    pub linked_company_id: String,
}

const MIN_ROWS: usize = 2;

/// Stateful multi-row journal editor.
///
/// Owns the draft rows and the per-row mapping gate; holds the session's
/// read-only reference data for the cross-field rules (cash-named accounts,
/// payable/receivable counterparty requirements).
#[derive(Debug)]
pub struct GridEngine {
    reference: ReferenceData,
    rows: Vec<GridRow>,
    next_id: u64,
    gate: MappingGate,
}

impl GridEngine {
    pub fn new(reference: ReferenceData) -> Self {
        Self {
            reference,
            rows: vec![GridRow::empty(1), GridRow::empty(2)],
            next_id: 3,
            gate: MappingGate::new(),
        }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    pub fn row(&self, row_id: u64) -> Option<&GridRow> {
        self.rows.iter().find(|r| r.id == row_id)
    }

    pub fn add_row(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(GridRow::empty(id));
        id
    }

    /// No-op at the floor of two rows.
    pub fn delete_row(&mut self, row_id: u64) -> bool {
        if self.rows.len() <= MIN_ROWS {
            return false;
        }
        let before = self.rows.len();
        self.rows.retain(|r| r.id != row_id);
        let deleted = self.rows.len() < before;
        if deleted {
            self.gate.cancel(row_id);
        }
        deleted
    }

    /// Back to two empty rows; outstanding gate state dies with the reset.
    pub fn reset(&mut self) {
        self.rows = vec![GridRow::empty(self.next_id), GridRow::empty(self.next_id + 1)];
        self.next_id += 2;
        self.gate.reset();
    }

    /// Set a row's date. Between the first two rows only, a date set on one
    /// side is copied into the other if that side is still empty; later rows
    /// are independent.
    pub fn set_date(&mut self, row_id: u64, date: NaiveDate) {
        let Some(position) = self.rows.iter().position(|r| r.id == row_id) else {
            return;
        };
        self.rows[position].date = Some(date);
        let twin = match position {
            0 => 1,
            1 => 0,
            _ => return,
        };
        if let Some(other) = self.rows.get_mut(twin) {
            if other.date.is_none() {
                other.date = Some(date);
            }
        }
    }

    /// Switching accounts invalidates every account-dependent field on that
    /// row (the date survives), and abandons any pending gate selection.
    pub fn set_account(&mut self, row_id: u64, account_id: impl Into<String>) {
        let Some(row) = self.rows.iter_mut().find(|r| r.id == row_id) else {
            return;
        };
        row.account_id = Some(account_id.into());
        row.location_id = None;
        row.internal_counterparty_id = None;
        row.external_counterparty_id = None;
        row.detail.clear();
        row.debit_text.clear();
        row.credit_text.clear();
        row.counterparty_store_id = None;
        row.counterparty_cash_location_id = None;
        row.debt_category = None;
        self.gate.cancel(row_id);
    }

    /// Only rows on an account named "Cash" may carry a location, and no
    /// location may be claimed by two rows at once.
    pub fn set_location(&mut self, row_id: u64, location_id: impl Into<String>) -> Result<(), JournalError> {
        let location_id = location_id.into();
        let row = self.row_or_err(row_id)?;
        let cash_named = row
            .account_id
            .as_deref()
            .map(|id| self.reference.is_cash_account(id))
            .unwrap_or(false);
        if !cash_named {
            return Err(JournalError::validation(
                row_id,
                "cash location requires an account named Cash",
            ));
        }
        let taken = self
            .rows
            .iter()
            .any(|r| r.id != row_id && r.location_id.as_deref() == Some(location_id.as_str()));
        if taken {
            return Err(JournalError::validation(
                row_id,
                format!("cash location {location_id} is already used by another row"),
            ));
        }
        if let Some(row) = self.rows.iter_mut().find(|r| r.id == row_id) {
            row.location_id = Some(location_id);
        }
        Ok(())
    }

    pub fn clear_location(&mut self, row_id: u64) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.id == row_id) {
            row.location_id = None;
        }
    }

    pub fn set_detail(&mut self, row_id: u64, detail: impl Into<String>) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.id == row_id) {
            row.detail = detail.into();
        }
    }

    pub fn set_debit_text(&mut self, row_id: u64, raw: &str) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.id == row_id) {
            row.debit_text = sanitize_amount_input(raw);
        }
    }

    pub fn set_credit_text(&mut self, row_id: u64, raw: &str) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.id == row_id) {
            row.credit_text = sanitize_amount_input(raw);
        }
    }

    /// External counterparties bypass the gate, but are mutually exclusive
    /// with internal ones: selecting one clears the other and everything
    /// downstream of it.
    pub fn select_external_counterparty(
        &mut self,
        row_id: u64,
        counterparty_id: impl Into<String>,
    ) -> Result<(), JournalError> {
        self.require_counterparty_account(row_id)?;
        let Some(row) = self.rows.iter_mut().find(|r| r.id == row_id) else {
            return Ok(());
        };
        row.external_counterparty_id = Some(counterparty_id.into());
        row.internal_counterparty_id = None;
        row.counterparty_store_id = None;
        row.counterparty_cash_location_id = None;
        row.debt_category = None;
        self.gate.cancel(row_id);
        Ok(())
    }

    pub fn clear_counterparty(&mut self, row_id: u64) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.id == row_id) {
            row.internal_counterparty_id = None;
            row.external_counterparty_id = None;
            row.counterparty_store_id = None;
            row.counterparty_cash_location_id = None;
            row.debt_category = None;
        }
        self.gate.cancel(row_id);
    }

    /// Start linking an internal counterparty. The row itself is untouched
    /// until the gate's sub-flow is confirmed; the returned check data feeds
    /// the asynchronous mapping verification.
    pub fn begin_internal_selection(
        &mut self,
        row_id: u64,
        counterparty_id: &str,
    ) -> Result<PendingCheck, JournalError> {
        self.require_counterparty_account(row_id)?;
        let row = self.row_or_err(row_id)?;
        let account_id = row
            .account_id
            .clone()
            .ok_or_else(|| JournalError::validation(row_id, "select an account first"))?;
        let counterparty = self
            .reference
            .counterparty(counterparty_id)
            .ok_or_else(|| JournalError::validation(row_id, "unknown counterparty"))?;
        if !counterparty.is_internal {
            return Err(JournalError::validation(
                row_id,
                "counterparty is not internal; select it as external instead",
            ));
        }
        let linked_company_id = counterparty.linked_company_id.clone().ok_or_else(|| {
            JournalError::validation(row_id, "internal counterparty has no linked company")
        })?;
        let ticket = self.gate.begin(
            row_id,
            counterparty_id,
            account_id.clone(),
            linked_company_id.clone(),
        );
        Ok(PendingCheck {
            ticket,
            account_id,
            counterparty_id: counterparty_id.to_string(),
            linked_company_id,
        })
    }

    /// Apply the mapping-check result. Stale responses fall out here and
    /// never touch the row.
    pub fn resolve_mapping(
        &mut self,
        ticket: MappingTicket,
        outcome: Result<bool, JournalError>,
    ) -> GateEvent {
        self.gate.resolve(ticket, outcome)
    }

    pub fn mapping_status(&self, row_id: u64) -> AccountMappingStatus {
        self.gate.status(row_id)
    }

    pub fn is_current_check(&self, ticket: MappingTicket) -> bool {
        self.gate.is_current(ticket)
    }

    /// Choose the counterparty store within the open sub-flow; the dependent
    /// cash-location choice resets and a fresh lookup ticket supersedes any
    /// in-flight lookup for the previous store.
    pub fn choose_counterparty_store(
        &mut self,
        row_id: u64,
        store_id: impl Into<String>,
    ) -> Result<LookupTicket, JournalError> {
        self.gate
            .choose_store(row_id, store_id)
            .ok_or_else(|| JournalError::validation(row_id, "no approved counterparty selection"))
    }

    pub fn is_current_lookup(&self, ticket: LookupTicket) -> bool {
        self.gate.is_current_lookup(ticket)
    }

    /// Linked company of the row's pending internal-counterparty selection.
    pub fn pending_linked_company(&self, row_id: u64) -> Option<&str> {
        self.gate.pending_linked_company(row_id)
    }

    pub fn choose_counterparty_cash_location(&mut self, row_id: u64, location_id: impl Into<String>) {
        self.gate.choose_cash_location(row_id, location_id);
    }

    pub fn choose_debt_category(&mut self, row_id: u64, category: DebtCategory) {
        self.gate.choose_debt_category(row_id, category);
    }

    /// Commit the confirmed sub-flow onto the row: the internal counterparty
    /// and its store, cash location, and debt category land together, and any
    /// external counterparty is cleared.
    pub fn confirm_counterparty(&mut self, row_id: u64) -> Option<ConfirmedCounterparty> {
        let confirmed = self.gate.confirm(row_id)?;
        let row = self.rows.iter_mut().find(|r| r.id == row_id)?;
        row.internal_counterparty_id = Some(confirmed.counterparty_id.clone());
        row.external_counterparty_id = None;
        row.counterparty_store_id = Some(confirmed.store_id.clone());
        row.counterparty_cash_location_id = Some(confirmed.cash_location_id.clone());
        row.debt_category = Some(confirmed.debt_category);
        Some(confirmed)
    }

    /// Close the sub-flow without confirming; the row stays exactly as it was
    /// before the selection began.
    pub fn cancel_counterparty(&mut self, row_id: u64) {
        self.gate.cancel(row_id);
    }

    /// Option list for a row's location column; locations held by other rows
    /// come back disabled, the row's own selection stays selectable.
    pub fn location_options(&self, row_id: u64) -> Vec<CashLocationOption> {
        let own = self
            .row(row_id)
            .and_then(|r| r.location_id.as_deref());
        self.reference
            .cash_locations
            .iter()
            .map(|location| {
                let taken = self.rows.iter().any(|r| {
                    r.id != row_id && r.location_id.as_deref() == Some(location.id.as_str())
                });
                CashLocationOption {
                    id: location.id.clone(),
                    name: location.name.clone(),
                    disabled: taken && own != Some(location.id.as_str()),
                }
            })
            .collect()
    }

    /// Recompute global submit-readiness from scratch.
    pub fn readiness(&self) -> SubmitReadiness {
        let total_debits: f64 = self.rows.iter().map(GridRow::debit_amount).sum();
        let total_credits: f64 = self.rows.iter().map(GridRow::credit_amount).sum();
        let mut blockers = Vec::new();

        let difference = total_debits - total_credits;
        if difference.abs() >= BALANCE_TOLERANCE {
            blockers.push(Blocker::Unbalanced { difference });
        }

        for row in &self.rows {
            if row.date.is_none() {
                blockers.push(Blocker::MissingDate { row_id: row.id });
            }
            let Some(account_id) = row.account_id.as_deref() else {
                blockers.push(Blocker::MissingAccount { row_id: row.id });
                continue;
            };
            if self.reference.is_cash_account(account_id) && row.location_id.is_none() {
                blockers.push(Blocker::MissingCashLocation { row_id: row.id });
            }
            if self.reference.requires_counterparty(account_id)
                && row.internal_counterparty_id.is_none()
                && row.external_counterparty_id.is_none()
            {
                blockers.push(Blocker::MissingCounterparty { row_id: row.id });
            }
            if row.internal_counterparty_id.is_some() && row.debt_category.is_none() {
                blockers.push(Blocker::MissingDebtCategory { row_id: row.id });
            }
            let debit = row.debit_amount();
            let credit = row.credit_amount();
            if debit > 0.0 && credit > 0.0 {
                blockers.push(Blocker::ConflictingAmounts { row_id: row.id });
            } else if debit == 0.0 && credit == 0.0 {
                blockers.push(Blocker::MissingAmount { row_id: row.id });
            }
        }

        SubmitReadiness {
            total_debits,
            total_credits,
            blockers,
        }
    }

    fn row_or_err(&self, row_id: u64) -> Result<&GridRow, JournalError> {
        self.row(row_id)
            .ok_or_else(|| JournalError::validation(row_id, "no such row"))
    }

    fn require_counterparty_account(&self, row_id: u64) -> Result<(), JournalError> {
        let row = self.row_or_err(row_id)?;
        let allowed = row
            .account_id
            .as_deref()
            .map(|id| self.reference.requires_counterparty(id))
            .unwrap_or(false);
        if allowed {
            Ok(())
        } else {
            Err(JournalError::validation(
                row_id,
                "counterparty selection requires a payable or receivable account",
            ))
        }
    }
}

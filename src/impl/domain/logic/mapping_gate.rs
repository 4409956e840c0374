use std::collections::HashMap;

use crate::entities::DebtCategory;
use crate::errors::JournalError;

/// Transient validation state of a row's internal-counterparty selection.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum AccountMappingStatus {
    #[default]
    None,
    Checking,
    Valid,
    Invalid,
}

/// Handle for one mapping check. The token is compared against the row's
/// current token when the check resolves; a mismatch means the selection was
/// superseded and the response must be discarded.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct MappingTicket {
    pub row_id: u64,
    pub token: u64,
}

/// Handle for one store-scoped cash-location lookup, superseded whenever the
/// chosen store changes again before the lookup lands.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct LookupTicket {
    pub row_id: u64,
    pub token: u64,
}

/// Outcome of resolving a mapping check against the gate.
#[derive(Debug, PartialEq, Clone)]
pub enum GateEvent {
    /// The ticket no longer matches the row's current selection; the response
    /// is discarded and nothing changes.
    Stale,
    /// The mapping is missing (or the check failed); the candidate selection
    /// is dropped and the caller surfaces a blocking warning.
    Rejected { message: String },
    /// The mapping exists; the sub-flow collecting store, cash location, and
    /// debt category is now open.
    Approved,
}

/// The complete, atomically-confirmed result of the sub-flow. Only this value
/// ever mutates a grid row.
#[derive(Debug, PartialEq, Clone)]
pub struct ConfirmedCounterparty {
    pub counterparty_id: String,
    pub linked_company_id: String,
    pub store_id: String,
    pub cash_location_id: String,
    pub debt_category: DebtCategory,
}

#[derive(Debug, Clone)]
struct PendingSelection {
    counterparty_id: String,
    account_id: String,
    linked_company_id: String,
    approved: bool,
    store_id: Option<String>,
    cash_location_id: Option<String>,
    debt_category: Option<DebtCategory>,
}

#[derive(Debug, Default, Clone)]
struct RowGate {
    token: u64,
    lookup_token: u64,
    status: AccountMappingStatus,
    pending: Option<PendingSelection>,
}

/// Per-row gating protocol for linking an internal counterparty.
///
/// Pure state machine: the asynchronous check itself happens outside, and its
/// result is fed back through [`MappingGate::resolve`]. Tokens are drawn from
/// one gate-global monotonic counter so that resetting the gate (or a row)
/// can never reissue a token an outstanding response still holds.
#[derive(Debug, Default)]
pub struct MappingGate {
    rows: HashMap<u64, RowGate>,
    next_token: u64,
}

impl MappingGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self, row_id: u64) -> AccountMappingStatus {
        self.rows
            .get(&row_id)
            .map(|r| r.status)
            .unwrap_or_default()
    }

    /// Begin a selection: the row enters `Checking` and a ticket is issued
    /// for the in-flight mapping check. Any prior selection on the row is
    /// superseded immediately.
    pub fn begin(
        &mut self,
        row_id: u64,
        counterparty_id: impl Into<String>,
        account_id: impl Into<String>,
        linked_company_id: impl Into<String>,
    ) -> MappingTicket {
        self.next_token += 1;
        let token = self.next_token;
        let row = self.rows.entry(row_id).or_default();
        row.token = token;
        row.status = AccountMappingStatus::Checking;
        row.pending = Some(PendingSelection {
            counterparty_id: counterparty_id.into(),
            account_id: account_id.into(),
            linked_company_id: linked_company_id.into(),
            approved: false,
            store_id: None,
            cash_location_id: None,
            debt_category: None,
        });
        MappingTicket { row_id, token }
    }

    /// Feed back the result of the mapping check. An error from the check is
    /// treated exactly like a missing mapping: the gate fails closed.
    pub fn resolve(&mut self, ticket: MappingTicket, outcome: Result<bool, JournalError>) -> GateEvent {
        let row = match self.rows.get_mut(&ticket.row_id) {
            Some(row) if row.token == ticket.token => row,
            _ => {
                tracing::debug!(row_id = ticket.row_id, "discarding stale mapping response");
                return GateEvent::Stale;
            }
        };
        match outcome {
            Ok(true) => {
                row.status = AccountMappingStatus::Valid;
                if let Some(pending) = row.pending.as_mut() {
                    pending.approved = true;
                }
                GateEvent::Approved
            }
            Ok(false) | Err(_) => {
                row.status = AccountMappingStatus::Invalid;
                let message = match row.pending.take() {
                    Some(p) => JournalError::Mapping {
                        counterparty_id: p.counterparty_id,
                        account_id: p.account_id,
                    }
                    .to_string(),
                    None => "counterparty cannot be linked: no account mapping".to_string(),
                };
                GateEvent::Rejected { message }
            }
        }
    }

    pub fn is_current(&self, ticket: MappingTicket) -> bool {
        self.rows
            .get(&ticket.row_id)
            .map(|r| r.token == ticket.token && r.pending.is_some())
            .unwrap_or(false)
    }

    /// Linked company of the row's pending selection, if any.
    pub fn pending_linked_company(&self, row_id: u64) -> Option<&str> {
        self.rows
            .get(&row_id)?
            .pending
            .as_ref()
            .map(|p| p.linked_company_id.as_str())
    }

    /// Choose the counterparty store. Resets the dependent cash-location
    /// choice and issues a lookup ticket superseding any in-flight lookup for
    /// the previously chosen store.
    pub fn choose_store(&mut self, row_id: u64, store_id: impl Into<String>) -> Option<LookupTicket> {
        self.next_token += 1;
        let token = self.next_token;
        let row = self.rows.get_mut(&row_id)?;
        let pending = row.pending.as_mut().filter(|p| p.approved)?;
        pending.store_id = Some(store_id.into());
        pending.cash_location_id = None;
        row.lookup_token = token;
        Some(LookupTicket { row_id, token })
    }

    pub fn is_current_lookup(&self, ticket: LookupTicket) -> bool {
        self.rows
            .get(&ticket.row_id)
            .map(|r| r.lookup_token == ticket.token && r.pending.is_some())
            .unwrap_or(false)
    }

    pub fn choose_cash_location(&mut self, row_id: u64, cash_location_id: impl Into<String>) {
        if let Some(pending) = self.approved_pending(row_id) {
            pending.cash_location_id = Some(cash_location_id.into());
        }
    }

    pub fn choose_debt_category(&mut self, row_id: u64, category: DebtCategory) {
        if let Some(pending) = self.approved_pending(row_id) {
            pending.debt_category = Some(category);
        }
    }

    /// Confirm the sub-flow. Yields the full selection only once store, cash
    /// location, and debt category are all present; otherwise the sub-flow
    /// stays open and nothing is consumed.
    pub fn confirm(&mut self, row_id: u64) -> Option<ConfirmedCounterparty> {
        let row = self.rows.get_mut(&row_id)?;
        let ready = matches!(
            row.pending.as_ref(),
            Some(p) if p.approved
                && p.store_id.is_some()
                && p.cash_location_id.is_some()
                && p.debt_category.is_some()
        );
        if !ready {
            return None;
        }
        let p = row.pending.take()?;
        Some(ConfirmedCounterparty {
            counterparty_id: p.counterparty_id,
            linked_company_id: p.linked_company_id,
            store_id: p.store_id.unwrap_or_default(),
            cash_location_id: p.cash_location_id.unwrap_or_default(),
            debt_category: p.debt_category.unwrap_or(DebtCategory::Other),
        })
    }

    /// Abandon the selection. The row's draft state was never touched, so
    /// cancelling is just dropping the pending selection and invalidating any
    /// outstanding tickets for the row.
    pub fn cancel(&mut self, row_id: u64) {
        self.next_token += 1;
        if let Some(row) = self.rows.get_mut(&row_id) {
            row.token = self.next_token;
            row.lookup_token = self.next_token;
            row.pending = None;
            row.status = AccountMappingStatus::None;
        }
    }

    /// Drop all per-row state (grid reset / context switch). The global token
    /// counter survives, so responses from the previous context stay stale.
    pub fn reset(&mut self) {
        self.rows.clear();
    }

    fn approved_pending(&mut self, row_id: u64) -> Option<&mut PendingSelection> {
        self.rows
            .get_mut(&row_id)?
            .pending
            .as_mut()
            .filter(|p| p.approved)
    }
}

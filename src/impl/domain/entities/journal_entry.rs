use std::collections::HashSet;

use chrono::NaiveDate;

use super::transaction_line::TransactionLine;

/// Tolerance under which debits and credits count as balanced.
pub const BALANCE_TOLERANCE: f64 = 0.01;

/// A balanced set of debit/credit lines posted to the ledger for one date.
///
/// Immutable aggregate: every mutation-shaped operation returns a new entry,
/// and the totals are recomputed on each construction so they can never go
/// stale. Line order is display-only.
#[derive(Debug, PartialEq, Clone)]
pub struct JournalEntry {
    pub company_id: String,
    pub store_id: Option<String>,
    pub date: NaiveDate,
    pub lines: Vec<TransactionLine>,
    pub total_debits: f64,
    pub total_credits: f64,
}

impl JournalEntry {
    pub fn new(
        company_id: impl Into<String>,
        store_id: Option<String>,
        date: NaiveDate,
        lines: Vec<TransactionLine>,
    ) -> Self {
        let total_debits = lines.iter().filter(|l| l.is_debit).map(|l| l.amount).sum();
        let total_credits = lines.iter().filter(|l| !l.is_debit).map(|l| l.amount).sum();
        Self {
            company_id: company_id.into(),
            store_id,
            date,
            lines,
            total_debits,
            total_credits,
        }
    }

    pub fn add_line(&self, line: TransactionLine) -> Self {
        let mut lines = self.lines.clone();
        lines.push(line);
        self.rebuilt(lines)
    }

    /// Returns the entry unchanged if `index` is out of range.
    pub fn update_line(&self, index: usize, line: TransactionLine) -> Self {
        let mut lines = self.lines.clone();
        match lines.get_mut(index) {
            Some(slot) => *slot = line,
            None => return self.clone(),
        }
        self.rebuilt(lines)
    }

    /// Returns the entry unchanged if `index` is out of range.
    pub fn remove_line(&self, index: usize) -> Self {
        if index >= self.lines.len() {
            return self.clone();
        }
        let mut lines = self.lines.clone();
        lines.remove(index);
        self.rebuilt(lines)
    }

    fn rebuilt(&self, lines: Vec<TransactionLine>) -> Self {
        Self::new(self.company_id.clone(), self.store_id.clone(), self.date, lines)
    }

    pub fn difference(&self) -> f64 {
        self.total_debits - self.total_credits
    }

    pub fn is_balanced(&self) -> bool {
        self.difference().abs() < BALANCE_TOLERANCE
    }

    /// Cash-location id of the first line carrying one. Used to disable
    /// re-selection of the same location elsewhere in the entry.
    pub fn cash_location_id(&self) -> Option<&str> {
        self.lines
            .iter()
            .find_map(|l| l.cash_location_id.as_deref())
    }

    pub fn has_cash_location(&self) -> bool {
        self.cash_location_id().is_some()
    }

    /// No non-empty cash location may appear on two lines of one entry.
    pub fn cash_locations_unique(&self) -> bool {
        let mut seen = HashSet::new();
        self.lines
            .iter()
            .filter_map(|l| l.cash_location_id.as_deref())
            .filter(|id| !id.is_empty())
            .all(|id| seen.insert(id))
    }

    pub fn can_submit(&self) -> bool {
        self.is_balanced()
            && self.lines.len() >= 2
            && self.lines.iter().all(TransactionLine::is_valid)
            && self.cash_locations_unique()
    }
}

use chrono::NaiveDate;

use super::{account::Account, account::CategoryTag, debt::DebtCategory};

/// One debit or credit row within a journal entry.
///
/// Immutable value object; the grid engine produces a fresh line per
/// validated row immediately before submission.
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionLine {
    pub is_debit: bool,
    pub account_id: String,
    pub account_name: String,
    pub amount: f64,
    pub description: String,
    pub category: CategoryTag,
    pub cash_location_id: Option<String>,
    pub counterparty_id: Option<String>,
    pub counterparty_store_id: Option<String>,
    pub counterparty_cash_location_id: Option<String>,
    pub debt_category: Option<DebtCategory>,
    pub interest_rate: Option<f64>,
    pub interest_account_id: Option<String>,
    pub interest_due_day: Option<u32>,
    pub issue_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub debt_description: Option<String>,
    /// Set when the counterparty is internal.
    pub linked_company_id: Option<String>,
}

impl TransactionLine {
    pub fn debit(account: &Account, amount: f64, description: impl Into<String>) -> Self {
        Self::new(true, account, amount, description)
    }

    pub fn credit(account: &Account, amount: f64, description: impl Into<String>) -> Self {
        Self::new(false, account, amount, description)
    }

    pub fn new(
        is_debit: bool,
        account: &Account,
        amount: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            is_debit,
            account_id: account.id.clone(),
            account_name: account.name.clone(),
            amount,
            description: description.into(),
            category: account.category.clone(),
            cash_location_id: None,
            counterparty_id: None,
            counterparty_store_id: None,
            counterparty_cash_location_id: None,
            debt_category: None,
            interest_rate: None,
            interest_account_id: None,
            interest_due_day: None,
            issue_date: None,
            due_date: None,
            debt_description: None,
            linked_company_id: None,
        }
    }

    pub fn with_cash_location(mut self, cash_location_id: impl Into<String>) -> Self {
        self.cash_location_id = Some(cash_location_id.into());
        self
    }

    /// A line is postable iff it names an account and moves a positive amount.
    pub fn is_valid(&self) -> bool {
        !self.account_id.is_empty() && self.amount > 0.0
    }
}

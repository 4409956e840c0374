use super::{account::Account, cash_location::CashLocation, counterparty::Counterparty};

/// Session cache of the reference lists backing the grid's option columns.
///
/// Loaded once per company/session context and read-only from this subsystem;
/// a store/company switch replaces the whole cache.
#[derive(Debug, Default, Clone)]
pub struct ReferenceData {
    pub accounts: Vec<Account>,
    pub cash_locations: Vec<CashLocation>,
    pub counterparties: Vec<Counterparty>,
}

impl ReferenceData {
    pub fn new(
        accounts: Vec<Account>,
        cash_locations: Vec<CashLocation>,
        counterparties: Vec<Counterparty>,
    ) -> Self {
        Self {
            accounts,
            cash_locations,
            counterparties,
        }
    }

    pub fn account(&self, account_id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == account_id)
    }

    pub fn cash_location(&self, location_id: &str) -> Option<&CashLocation> {
        self.cash_locations.iter().find(|l| l.id == location_id)
    }

    pub fn counterparty(&self, counterparty_id: &str) -> Option<&Counterparty> {
        self.counterparties.iter().find(|c| c.id == counterparty_id)
    }

    /// The location column unlocks only for accounts named "Cash".
    pub fn is_cash_account(&self, account_id: &str) -> bool {
        self.account(account_id)
            .map(Account::is_cash_named)
            .unwrap_or(false)
    }

    pub fn requires_counterparty(&self, account_id: &str) -> bool {
        self.account(account_id)
            .map(|a| a.category.requires_counterparty())
            .unwrap_or(false)
    }
}

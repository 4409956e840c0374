use async_trait::async_trait;

use crate::entities::{
    Account, CashLocation, Counterparty, CounterpartyStore, JournalEntry,
};
use crate::errors::JournalError;

/// Newly-created ledger journal id.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct JournalId(pub String);

/// Domain-level port over the remote data platform. All heavy computation
/// lives in externally-hosted procedures; this trait only names the calls the
/// entry-construction subsystem consumes.
#[async_trait]
pub trait JournalInputRepository: Send + Sync {
    async fn get_accounts(&self) -> Result<Vec<Account>, JournalError>;

    async fn get_cash_locations(
        &self,
        company_id: &str,
        store_id: Option<&str>,
    ) -> Result<Vec<CashLocation>, JournalError>;

    async fn get_counterparties(&self, company_id: &str) -> Result<Vec<Counterparty>, JournalError>;

    /// Whether the internal counterparty may post against the given account.
    async fn check_account_mapping(
        &self,
        company_id: &str,
        counterparty_id: &str,
        account_id: &str,
    ) -> Result<bool, JournalError>;

    async fn get_counterparty_stores(
        &self,
        linked_company_id: &str,
    ) -> Result<Vec<CounterpartyStore>, JournalError>;

    async fn get_counterparty_cash_locations(
        &self,
        linked_company_id: &str,
        store_id: Option<&str>,
    ) -> Result<Vec<CashLocation>, JournalError>;

    /// Post a constructed entry. The server re-validates balance and mapping
    /// validity authoritatively; a client-side `can_submit` pass is a
    /// precondition, not a guarantee.
    async fn submit_journal_entry(
        &self,
        entry: &JournalEntry,
        created_by: &str,
        description: &str,
    ) -> Result<JournalId, JournalError>;
}

use async_trait::async_trait;

use crate::data::models::{
    account_model::AccountModel,
    cash_location_model::CashLocationModel,
    counterparty_model::{AccountMappingModel, CounterpartyModel},
    journal_post_model::{JournalIdModel, JournalPostRequestModel},
    store_model::StoreModel,
};
use crate::errors::JournalError;

/// Wire-level access to the remote data platform's procedures. Implemented by
/// the hosting application's RPC client; everything above this trait works in
/// domain types only.
#[async_trait]
pub trait LedgerDatasource: Send + Sync {
    async fn get_accounts(&self) -> Result<Vec<AccountModel>, JournalError>;

    async fn get_cash_locations(
        &self,
        company_id: &str,
        store_id: Option<&str>,
    ) -> Result<Vec<CashLocationModel>, JournalError>;

    async fn get_counterparties(
        &self,
        company_id: &str,
    ) -> Result<Vec<CounterpartyModel>, JournalError>;

    /// Presence of a mapping row is the entire contract; `None` means the
    /// counterparty is not mapped for the account.
    async fn find_account_mapping(
        &self,
        company_id: &str,
        counterparty_id: &str,
        account_id: &str,
    ) -> Result<Option<AccountMappingModel>, JournalError>;

    async fn get_counterparty_stores(
        &self,
        linked_company_id: &str,
    ) -> Result<Vec<StoreModel>, JournalError>;

    async fn get_counterparty_cash_locations(
        &self,
        linked_company_id: &str,
        store_id: Option<&str>,
    ) -> Result<Vec<CashLocationModel>, JournalError>;

    async fn insert_journal(
        &self,
        request: &JournalPostRequestModel,
    ) -> Result<JournalIdModel, JournalError>;
}

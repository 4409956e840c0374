use async_trait::async_trait;

use crate::data::datasources::ledger_datasource::LedgerDatasource;
use crate::data::models::journal_post_model::JournalPostRequestModel;
use crate::domain::repositories::journal_input_repository::{JournalId, JournalInputRepository};
use crate::entities::{Account, CashLocation, Counterparty, CounterpartyStore, JournalEntry};
use crate::errors::JournalError;

/// Binds the domain port to a wire-level datasource, converting between wire
/// models and entities in both directions.
pub struct JournalInputRepositoryImpl<D: LedgerDatasource> {
    datasource: D,
}

impl<D: LedgerDatasource> JournalInputRepositoryImpl<D> {
    pub fn new(datasource: D) -> Self {
        Self { datasource }
    }
}

#[async_trait]
impl<D: LedgerDatasource> JournalInputRepository for JournalInputRepositoryImpl<D> {
    async fn get_accounts(&self) -> Result<Vec<Account>, JournalError> {
        Ok(self
            .datasource
            .get_accounts()
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn get_cash_locations(
        &self,
        company_id: &str,
        store_id: Option<&str>,
    ) -> Result<Vec<CashLocation>, JournalError> {
        Ok(self
            .datasource
            .get_cash_locations(company_id, store_id)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn get_counterparties(&self, company_id: &str) -> Result<Vec<Counterparty>, JournalError> {
        Ok(self
            .datasource
            .get_counterparties(company_id)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn check_account_mapping(
        &self,
        company_id: &str,
        counterparty_id: &str,
        account_id: &str,
    ) -> Result<bool, JournalError> {
        let mapping = self
            .datasource
            .find_account_mapping(company_id, counterparty_id, account_id)
            .await?;
        Ok(mapping.is_some())
    }

    async fn get_counterparty_stores(
        &self,
        linked_company_id: &str,
    ) -> Result<Vec<CounterpartyStore>, JournalError> {
        Ok(self
            .datasource
            .get_counterparty_stores(linked_company_id)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn get_counterparty_cash_locations(
        &self,
        linked_company_id: &str,
        store_id: Option<&str>,
    ) -> Result<Vec<CashLocation>, JournalError> {
        Ok(self
            .datasource
            .get_counterparty_cash_locations(linked_company_id, store_id)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn submit_journal_entry(
        &self,
        entry: &JournalEntry,
        created_by: &str,
        description: &str,
    ) -> Result<JournalId, JournalError> {
        let request = JournalPostRequestModel::from_entry(entry, created_by, description);
        let response = self.datasource.insert_journal(&request).await?;
        Ok(JournalId(response.journal_id))
    }
}

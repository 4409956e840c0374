#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use journal_input::entities::{
    Account, CashLocation, CategoryTag, Counterparty, CounterpartyStore, JournalEntry,
    ReferenceData,
};
use journal_input::errors::JournalError;
use journal_input::repositories::{JournalId, JournalInputRepository};
use tokio::sync::oneshot;

pub fn reference_accounts() -> Vec<Account> {
    vec![
        Account::new("acc-cash", "Cash", CategoryTag::Cash),
        Account::new("acc-revenue", "Revenue", CategoryTag::General),
        Account::new("acc-payable", "Accounts Payable", CategoryTag::Payable),
        Account::new("acc-receivable", "Accounts Receivable", CategoryTag::Receivable),
    ]
}

pub fn reference_cash_locations() -> Vec<CashLocation> {
    vec![
        CashLocation::new("loc-1", "Main Register", "cash"),
        CashLocation::new("loc-2", "Office Safe", "vault"),
    ]
}

pub fn reference_counterparties() -> Vec<Counterparty> {
    vec![
        Counterparty::external("cp-ext", "Acme Supplies"),
        Counterparty::internal("cp-int", "Branch Seoul", "co-linked"),
        Counterparty::internal("cp-int-2", "Branch Busan", "co-linked-2"),
    ]
}

pub fn reference_data() -> ReferenceData {
    ReferenceData::new(
        reference_accounts(),
        reference_cash_locations(),
        reference_counterparties(),
    )
}

/// In-memory stand-in for the remote platform. Mapping results, lookup
/// failures, and response ordering are all scriptable per test.
#[derive(Default)]
pub struct MockRepository {
    mapped: Mutex<HashMap<String, bool>>,
    check_delays: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    stores: Mutex<Vec<CounterpartyStore>>,
    fail_store_lookup: AtomicBool,
    counterparty_cash_locations: Mutex<Vec<CashLocation>>,
    fail_cash_location_lookup: AtomicBool,
    submit_results: Mutex<Vec<Result<JournalId, JournalError>>>,
    submit_delay: Mutex<Option<oneshot::Receiver<()>>>,
    pub submitted: Mutex<Vec<JournalEntry>>,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a counterparty as mapped (the check will return `true`).
    pub fn map_ok(&self, counterparty_id: &str) {
        self.mapped
            .lock()
            .unwrap()
            .insert(counterparty_id.to_string(), true);
    }

    /// Hold the next mapping check for this counterparty until the returned
    /// sender fires, to script response ordering.
    pub fn delay_check(&self, counterparty_id: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.check_delays
            .lock()
            .unwrap()
            .insert(counterparty_id.to_string(), rx);
        tx
    }

    pub fn set_stores(&self, stores: Vec<CounterpartyStore>) {
        *self.stores.lock().unwrap() = stores;
    }

    pub fn fail_store_lookup(&self) {
        self.fail_store_lookup.store(true, Ordering::SeqCst);
    }

    pub fn set_counterparty_cash_locations(&self, locations: Vec<CashLocation>) {
        *self.counterparty_cash_locations.lock().unwrap() = locations;
    }

    pub fn push_submit_result(&self, result: Result<JournalId, JournalError>) {
        self.submit_results.lock().unwrap().push(result);
    }

    /// Hold the next submission until the returned sender fires.
    pub fn delay_submit(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.submit_delay.lock().unwrap() = Some(rx);
        tx
    }
}

#[async_trait]
impl JournalInputRepository for MockRepository {
    async fn get_accounts(&self) -> Result<Vec<Account>, JournalError> {
        Ok(reference_accounts())
    }

    async fn get_cash_locations(
        &self,
        _company_id: &str,
        _store_id: Option<&str>,
    ) -> Result<Vec<CashLocation>, JournalError> {
        Ok(reference_cash_locations())
    }

    async fn get_counterparties(
        &self,
        _company_id: &str,
    ) -> Result<Vec<Counterparty>, JournalError> {
        Ok(reference_counterparties())
    }

    async fn check_account_mapping(
        &self,
        _company_id: &str,
        counterparty_id: &str,
        _account_id: &str,
    ) -> Result<bool, JournalError> {
        let delay = self.check_delays.lock().unwrap().remove(counterparty_id);
        if let Some(rx) = delay {
            let _ = rx.await;
        }
        Ok(*self
            .mapped
            .lock()
            .unwrap()
            .get(counterparty_id)
            .unwrap_or(&false))
    }

    async fn get_counterparty_stores(
        &self,
        _linked_company_id: &str,
    ) -> Result<Vec<CounterpartyStore>, JournalError> {
        if self.fail_store_lookup.load(Ordering::SeqCst) {
            return Err(JournalError::lookup("counterparty stores", "connection reset"));
        }
        Ok(self.stores.lock().unwrap().clone())
    }

    async fn get_counterparty_cash_locations(
        &self,
        _linked_company_id: &str,
        _store_id: Option<&str>,
    ) -> Result<Vec<CashLocation>, JournalError> {
        if self.fail_cash_location_lookup.load(Ordering::SeqCst) {
            return Err(JournalError::lookup(
                "counterparty cash locations",
                "connection reset",
            ));
        }
        Ok(self.counterparty_cash_locations.lock().unwrap().clone())
    }

    async fn submit_journal_entry(
        &self,
        entry: &JournalEntry,
        _created_by: &str,
        _description: &str,
    ) -> Result<JournalId, JournalError> {
        let delay = self.submit_delay.lock().unwrap().take();
        if let Some(rx) = delay {
            let _ = rx.await;
        }
        self.submitted.lock().unwrap().push(entry.clone());
        let mut results = self.submit_results.lock().unwrap();
        if results.is_empty() {
            Ok(JournalId("journal-1".to_string()))
        } else {
            results.remove(0)
        }
    }
}

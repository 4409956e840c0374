use crate::entities::Counterparty;

#[derive(Debug, serde_derive::Deserialize)]
pub struct CounterpartyModel {
    pub counterparty_id: String,
    pub name: String,
    #[serde(default)]
    pub is_internal: bool,
    #[serde(default)]
    pub linked_company_id: Option<String>,
}

impl From<CounterpartyModel> for Counterparty {
    fn from(model: CounterpartyModel) -> Self {
        Counterparty {
            id: model.counterparty_id,
            name: model.name,
            is_internal: model.is_internal,
            linked_company_id: model.linked_company_id,
        }
    }
}

/// One precomputed account-mapping row. Its mere presence means the internal
/// counterparty may post against the account; the fields themselves are only
/// consumed by the mirrored-posting procedures server-side.
#[derive(Debug, serde_derive::Deserialize)]
pub struct AccountMappingModel {
    pub my_account_id: String,
    pub linked_account_id: String,
    pub direction: String,
}

/// A party the company transacts with. Internal counterparties belong to the
/// same organizational group, link to another company's books, and must pass
/// the account-mapping gate before they can appear on a journal line.
#[derive(Debug, PartialEq, Clone)]
pub struct Counterparty {
    pub id: String,
    pub name: String,
    pub is_internal: bool,
    pub linked_company_id: Option<String>,
}

impl Counterparty {
    pub fn external(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_internal: false,
            linked_company_id: None,
        }
    }

    pub fn internal(
        id: impl Into<String>,
        name: impl Into<String>,
        linked_company_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_internal: true,
            linked_company_id: Some(linked_company_id.into()),
        }
    }
}

/// A store belonging to an internal counterparty's linked company.
#[derive(Debug, PartialEq, Clone)]
pub struct CounterpartyStore {
    pub id: String,
    pub name: String,
}

/// Session context for journal input, passed explicitly from the composition
/// root. Changing the active company or store means building a new context
/// and a new session; nothing here is global.
#[derive(Debug, PartialEq, Clone)]
pub struct EntryContext {
    pub company_id: String,
    pub store_id: Option<String>,
    pub created_by: String,
}

impl EntryContext {
    pub fn new(company_id: impl Into<String>, created_by: impl Into<String>) -> Self {
        Self {
            company_id: company_id.into(),
            store_id: None,
            created_by: created_by.into(),
        }
    }

    pub fn with_store(mut self, store_id: impl Into<String>) -> Self {
        self.store_id = Some(store_id.into());
        self
    }
}

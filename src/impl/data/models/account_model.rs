use crate::entities::{Account, CategoryTag};

/// Chart-of-accounts row as served by the remote platform. The category tag
/// is parsed into [`CategoryTag`] here, once, at the boundary.
#[derive(Debug, serde_derive::Deserialize)]
pub struct AccountModel {
    pub account_id: String,
    pub account_name: String,
    #[serde(default)]
    pub category_tag: Option<String>,
}

impl From<AccountModel> for Account {
    fn from(model: AccountModel) -> Self {
        Account {
            id: model.account_id,
            name: model.account_name,
            category: CategoryTag::parse(model.category_tag.as_deref().unwrap_or("")),
        }
    }
}

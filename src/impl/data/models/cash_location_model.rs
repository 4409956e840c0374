use crate::entities::CashLocation;

#[derive(Debug, serde_derive::Deserialize)]
pub struct CashLocationModel {
    pub cash_location_id: String,
    pub location_name: String,
    #[serde(default)]
    pub location_type: String,
    #[serde(default)]
    pub store_id: Option<String>,
    #[serde(default)]
    pub is_company_wide: bool,
}

impl From<CashLocationModel> for CashLocation {
    fn from(model: CashLocationModel) -> Self {
        CashLocation {
            id: model.cash_location_id,
            name: model.location_name,
            location_type: model.location_type,
            store_id: model.store_id,
            is_company_wide: model.is_company_wide,
        }
    }
}

use crate::entities::CounterpartyStore;

#[derive(Debug, serde_derive::Deserialize)]
pub struct StoreModel {
    pub store_id: String,
    pub store_name: String,
}

impl From<StoreModel> for CounterpartyStore {
    fn from(model: StoreModel) -> Self {
        CounterpartyStore {
            id: model.store_id,
            name: model.store_name,
        }
    }
}

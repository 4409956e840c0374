/// A cash or bank holding point associated with a store (or company-wide).
#[derive(Debug, PartialEq, Clone)]
pub struct CashLocation {
    pub id: String,
    pub name: String,
    pub location_type: String,
    pub store_id: Option<String>,
    pub is_company_wide: bool,
}

impl CashLocation {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location_type: location_type.into(),
            store_id: None,
            is_company_wide: false,
        }
    }
}

/// One selectable cash-location option for a grid row. `disabled` marks a
/// location already claimed by another row of the same grid.
#[derive(Debug, PartialEq, Clone)]
pub struct CashLocationOption {
    pub id: String,
    pub name: String,
    pub disabled: bool,
}

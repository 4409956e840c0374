/// Behavioral classification of an account, parsed once at the data boundary.
///
/// The tag drives which conditional fields a journal line requires: `Cash`
/// lines carry a cash location, `Payable`/`Receivable` lines carry a
/// counterparty.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum CategoryTag {
    Cash,
    Payable,
    Receivable,
    General,
    Other(String),
}

impl CategoryTag {
    /// Case-insensitive parse. Unknown tags are preserved verbatim rather
    /// than rejected; the remote chart of accounts owns the vocabulary.
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "cash" => CategoryTag::Cash,
            "payable" => CategoryTag::Payable,
            "receivable" => CategoryTag::Receivable,
            "general" | "" => CategoryTag::General,
            _ => CategoryTag::Other(raw.to_string()),
        }
    }

    /// Payable and receivable accounts require a counterparty on every line.
    pub fn requires_counterparty(&self) -> bool {
        matches!(self, CategoryTag::Payable | CategoryTag::Receivable)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub category: CategoryTag,
}

impl Account {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: CategoryTag) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
        }
    }

    /// The cash-location column is editable only for accounts literally named
    /// "Cash" (case-insensitive), independent of the category tag.
    pub fn is_cash_named(&self) -> bool {
        self.name.eq_ignore_ascii_case("cash")
    }
}

/// Classification of a payable/receivable line, used in downstream reporting.
///
/// For internal counterparties this is an explicit user choice collected by
/// the mapping gate's sub-flow; external counterparties fall back to `Other`
/// at serialization time.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum DebtCategory {
    Loan,
    Trade,
    Salary,
    Other,
}

impl DebtCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebtCategory::Loan => "loan",
            DebtCategory::Trade => "trade",
            DebtCategory::Salary => "salary",
            DebtCategory::Other => "other",
        }
    }
}

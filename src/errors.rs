use thiserror::Error;

/// Error catalogue for journal-entry construction and submission.
///
/// Only `Submission` is ever surfaced to the end user as a generic failure;
/// every other category is converted into field-local state by the caller
/// (inline validation, the balance indicator, the mapping warning, or an
/// explicit empty option list).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JournalError {
    /// Field-scoped validation failure on one grid row. Never leaves the
    /// client; blocks submission.
    #[error("row {row_id}: {message}")]
    Validation { row_id: u64, message: String },

    /// Debits and credits do not cancel out across the entry.
    #[error("debits ({total_debits}) and credits ({total_credits}) are not balanced")]
    Balance {
        total_debits: f64,
        total_credits: f64,
    },

    /// The account-mapping check rejected an internal counterparty for the
    /// selected account.
    #[error("counterparty {counterparty_id} has no account mapping for account {account_id}")]
    Mapping {
        counterparty_id: String,
        account_id: String,
    },

    /// A reference-data fetch failed. Callers degrade the dependent field to
    /// an explicit empty state instead of propagating this.
    #[error("{context} lookup failed: {message}")]
    Lookup {
        context: &'static str,
        message: String,
    },

    /// The ledger rejected the posting, or the network failed mid-flight.
    /// Carries the raw server message; grid input is preserved for retry.
    #[error("journal submission failed: {0}")]
    Submission(String),

    /// A submission for this grid session is already in flight.
    #[error("a journal submission is already in flight")]
    SubmissionInFlight,
}

impl JournalError {
    pub fn validation(row_id: u64, message: impl Into<String>) -> Self {
        JournalError::Validation {
            row_id,
            message: message.into(),
        }
    }

    pub fn lookup(context: &'static str, message: impl Into<String>) -> Self {
        JournalError::Lookup {
            context,
            message: message.into(),
        }
    }
}

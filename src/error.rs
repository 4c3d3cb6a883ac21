use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid period specifier: {0}")]
    InvalidPeriod(String),

    #[error("Invalid month {0}: must be between 1 and 12")]
    InvalidMonth(u32),

    #[error("Negative amount {amount} on transaction {transaction_id}: amounts must be >= 0")]
    NegativeAmount {
        transaction_id: String,
        amount: f64,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;

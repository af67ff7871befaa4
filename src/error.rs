use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("transaction {0} not found")]
    NotFound(String),

    #[error("cannot compute {0} over an empty set of transactions")]
    DegenerateAggregate(&'static str),

    #[error("amount overflowed while adding transaction {0}")]
    AmountOverflow(String),

    #[error("invalid date {value:?}: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: time::error::Parse,
    },

    #[error("invalid ledger entry: {0}")]
    InvalidEntry(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DefinancaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown line item: {0}")]
    UnknownItem(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DefinancaError>;

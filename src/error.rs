
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RaidForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Request: {0}")]
    Request(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("no characters supplied")]
    EmptyRoster,
}

pub type RfResult<T> = Result<T, RaidForgeError>;

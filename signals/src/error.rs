use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignalsError {
    #[error("unknown metric identifier: {0}")]
    UnknownMetric(String),

    #[error("malformed metrics document: {0}")]
    Document(#[from] serde_json::Error),
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MagnitudeError {
    #[error("empty value")]
    Empty,

    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("value is not finite: {0:?}")]
    NotFinite(String),
}

#[derive(Error, Debug)]
pub enum RadarError {
    #[error("malformed calendar document: {0}")]
    Document(#[from] serde_json::Error),
}

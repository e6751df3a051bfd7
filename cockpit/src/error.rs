use std::path::PathBuf;

use radar::RadarError;
use signals::SignalsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("bad metrics document {}: {source}", path.display())]
    Metrics {
        path: PathBuf,
        #[source]
        source: SignalsError,
    },

    #[error("bad calendar document {}: {source}", path.display())]
    Calendar {
        path: PathBuf,
        #[source]
        source: RadarError,
    },

    #[error("update trigger not configured: {0}")]
    TriggerNotConfigured(&'static str),

    #[error("workflow dispatch rejected ({status}): {details}")]
    TriggerRejected { status: u16, details: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

//! Reads the documents written by the collection job.

use std::path::Path;

use radar::CalendarDocument;
use signals::MetricsDocument;
use tracing::{debug, instrument};

use crate::error::AppError;

async fn read(path: &Path) -> Result<String, AppError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| AppError::Read {
            path: path.to_path_buf(),
            source,
        })
}

#[instrument(skip(path), fields(path = %path.display()), level = "debug")]
pub async fn load_metrics(path: &Path) -> Result<MetricsDocument, AppError> {
    let raw = read(path).await?;
    let doc = MetricsDocument::from_json(&raw).map_err(|source| AppError::Metrics {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(timestamp = %doc.timestamp, "metrics document loaded");
    Ok(doc)
}

#[instrument(skip(path), fields(path = %path.display()), level = "debug")]
pub async fn load_calendar(path: &Path) -> Result<CalendarDocument, AppError> {
    let raw = read(path).await?;
    let doc = CalendarDocument::from_json(&raw).map_err(|source| AppError::Calendar {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(events = doc.events.len(), updated_at = %doc.updated_at, "calendar loaded");
    Ok(doc)
}

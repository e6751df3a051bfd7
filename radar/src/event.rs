use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::deviation::{Deviation, deviation};
use crate::error::RadarError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    High,
    Medium,
}

/// Release lifecycle. Moves `Upcoming -> Completed` only, upstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Completed,
}

/// One scheduled or completed macro data release.
///
/// `time` is a local `HH:MM` clock time already in the reference timezone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub date: NaiveDate,
    pub time: String,
    pub name: String,
    pub impact: Impact,
    #[serde(default)]
    pub forecast: Option<String>,
    #[serde(default)]
    pub actual: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub status: EventStatus,

    // Delivery flags maintained by the notifier job.
    #[serde(default)]
    pub notification_sent_12h: bool,
    #[serde(default)]
    pub notification_sent_release: bool,
}

impl CalendarEvent {
    /// Actual-vs-forecast deviation, when both are present and numeric.
    pub fn deviation(&self) -> Option<Deviation> {
        deviation(self.actual.as_deref(), self.forecast.as_deref())
    }

    pub fn is_completed(&self) -> bool {
        self.status == EventStatus::Completed
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalendarDocument {
    pub updated_at: String,
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
}

impl CalendarDocument {
    pub fn from_json(raw: &str) -> Result<Self, RadarError> {
        Ok(serde_json::from_str(raw)?)
    }
}

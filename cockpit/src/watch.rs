//! Refresh watcher.
//!
//! Re-reads the metrics and calendar documents on a fixed cadence, feeds the
//! metrics into the notification ledger and renders the radar.
//!
//! Data flow:
//! documents → loader → ledger / bucketing → alerts + report
//!
//! The ledger is owned by the watcher task; nothing here is shared.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, Utc};
use common::logger::{TraceId, child_span, root_span};
use radar::{group_by_week, today_at_offset};
use serde::Serialize;
use signals::{Alert, NotificationLedger, PolicyTable};
use tokio::time::{MissedTickBehavior, interval};
use tracing::{Instrument, error, info, warn};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::loader::{load_calendar, load_metrics};
use crate::report::{DashboardReport, radar_lines};

/// Result of one refresh.
#[derive(Clone, Debug, Serialize)]
pub struct TickOutcome {
    #[serde(serialize_with = "alerts_as_text")]
    pub alerts: Vec<Alert>,
    pub dashboard: DashboardReport,
    /// Rendered radar, empty when the calendar could not be read.
    pub radar: Vec<String>,
}

fn alerts_as_text<S: serde::Serializer>(alerts: &[Alert], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(alerts.iter().map(|a| a.to_string()))
}

pub struct Watcher {
    dashboard_path: PathBuf,
    calendar_path: PathBuf,
    reference_offset: FixedOffset,
    ledger: NotificationLedger,
}

impl Watcher {
    pub fn new(cfg: &AppConfig) -> Self {
        Self {
            dashboard_path: cfg.dashboard_path.clone(),
            calendar_path: cfg.calendar_path.clone(),
            reference_offset: cfg.reference_offset,
            ledger: NotificationLedger::new(PolicyTable::new()),
        }
    }

    pub fn ledger(&self) -> &NotificationLedger {
        &self.ledger
    }

    /// Run one refresh at `now`.
    ///
    /// A metrics document failure aborts the tick. A calendar failure only
    /// empties the radar, the metric alerts are still produced.
    pub async fn tick(&mut self, now: DateTime<Utc>) -> Result<TickOutcome, AppError> {
        let metrics = load_metrics(&self.dashboard_path).await?;

        let alerts = {
            let _span = child_span("ledger").entered();
            self.ledger.observe(&metrics)
        };

        let radar = match load_calendar(&self.calendar_path).await {
            Ok(calendar) => {
                let today = today_at_offset(now, self.reference_offset);
                let groups = group_by_week(&calendar.events, today);
                radar_lines(&groups)
            }
            Err(e) => {
                warn!(error = %e, "calendar unavailable, radar skipped");
                Vec::new()
            }
        };

        Ok(TickOutcome {
            alerts,
            dashboard: DashboardReport::from_document(&metrics),
            radar,
        })
    }

    /// Tick forever on `every`. Failed ticks are logged and retried on the
    /// next interval.
    pub async fn run(mut self, every: Duration) {
        let mut ticker = interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            dashboard = %self.dashboard_path.display(),
            calendar = %self.calendar_path.display(),
            every_secs = every.as_secs(),
            "refresh watcher started"
        );

        loop {
            ticker.tick().await;

            let trace_id = TraceId::default();
            let span = root_span("refresh", &trace_id);

            match self.tick(Utc::now()).instrument(span).await {
                Ok(outcome) => {
                    for alert in &outcome.alerts {
                        info!(trace_id = %trace_id, alert = %alert, "metric alert");
                    }
                    info!(
                        trace_id = %trace_id,
                        alerts = outcome.alerts.len(),
                        radar_events = outcome.radar.len(),
                        regime = ?outcome.dashboard.regime,
                        "refresh complete"
                    );
                }
                Err(e) => {
                    error!(trace_id = %trace_id, error = %e, "refresh failed");
                }
            }
        }
    }
}

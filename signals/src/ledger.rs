//! Notification ledger.
//!
//! Tracks, per metric, the value at the time of the last notification and
//! turns each new metrics document into a list of alerts. The baseline only
//! moves when an alert fires, so a slow drift accumulates until it crosses
//! the threshold instead of being lost between polls.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, info};

use crate::detector::{ChangeResult, evaluate};
use crate::document::MetricsDocument;
use crate::format::format_metric_value;
use crate::metric::{MetricId, MetricSnapshot};
use crate::policy::{PolicyTable, ThresholdMode};
use crate::regime::RiskRegime;

/// A significant move ready to be delivered.
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub metric: MetricId,
    pub previous: f64,
    pub current: f64,
    pub change: ChangeResult,
    pub mode: ThresholdMode,
    /// Regime of the document the alert was raised from.
    pub regime: Option<RiskRegime>,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = match self.mode {
            ThresholdMode::Relative => format!("{:.2}%", self.change.magnitude),
            ThresholdMode::Absolute => format!("{:.2}", self.change.magnitude),
        };

        write!(
            f,
            "{}: {} {} {}",
            self.metric.label(),
            format_metric_value(self.metric, self.current),
            self.change.direction.arrow(),
            magnitude
        )?;

        if let Some(regime) = self.regime {
            write!(f, " | {regime}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct NotificationLedger {
    policies: PolicyTable,
    baselines: BTreeMap<MetricId, f64>,
}

impl NotificationLedger {
    pub fn new(policies: PolicyTable) -> Self {
        Self {
            policies,
            baselines: BTreeMap::new(),
        }
    }

    /// Value recorded at the last notification (or first sighting).
    pub fn baseline(&self, metric: MetricId) -> Option<f64> {
        self.baselines.get(&metric).copied()
    }

    /// Snapshot of `metric` against its baseline.
    pub fn snapshot(&self, metric: MetricId, current: f64) -> MetricSnapshot {
        MetricSnapshot {
            name: metric,
            previous: self.baseline(metric),
            current,
        }
    }

    /// Evaluate every collected metric of `doc` and return the alerts to send.
    ///
    /// - first sighting of a metric seeds its baseline silently
    /// - a significant move raises an alert and resets the baseline
    /// - metrics without a reading keep their baseline untouched
    pub fn observe(&mut self, doc: &MetricsDocument) -> Vec<Alert> {
        let regime = doc.regime();
        let mut alerts = Vec::new();

        for metric in MetricId::ALL {
            let Some(current) = doc.value(metric) else {
                debug!(metric = %metric, "no reading, skipping");
                continue;
            };

            let snapshot = self.snapshot(metric, current);
            let policy = self.policies.get(metric);

            let Some(change) = evaluate(&policy, snapshot.previous, snapshot.current) else {
                debug!(metric = %metric, current, "seeding baseline");
                self.baselines.insert(metric, current);
                continue;
            };

            if !change.significant {
                continue;
            }

            let previous = snapshot.previous.unwrap_or(current);
            info!(
                metric = %metric,
                previous,
                current,
                magnitude = change.magnitude,
                "threshold crossed"
            );

            self.baselines.insert(metric, current);
            alerts.push(Alert {
                metric,
                previous,
                current,
                change,
                mode: policy.mode,
                regime,
            });
        }

        alerts
    }
}

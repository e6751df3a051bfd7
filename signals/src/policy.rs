//! Notification threshold policies.
//!
//! Each metric is compared either on the raw difference (`Absolute`) or on the
//! percentage change from the previous value (`Relative`). The cutoff applies
//! to the absolute value of the change, so moves in both directions count.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::metric::MetricId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdMode {
    /// Cutoff is in the metric's own unit (e.g. yield points).
    Absolute,
    /// Cutoff is a percentage of the previous value.
    Relative,
}

/// Per-metric threshold configuration.
///
/// `cutoff == 0.0` means every nonzero change is significant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPolicy {
    pub metric: MetricId,
    pub mode: ThresholdMode,
    pub cutoff: f64,
}

impl ThresholdPolicy {
    pub const fn absolute(metric: MetricId, cutoff: f64) -> Self {
        Self {
            metric,
            mode: ThresholdMode::Absolute,
            cutoff,
        }
    }

    pub const fn relative(metric: MetricId, cutoff_pct: f64) -> Self {
        Self {
            metric,
            mode: ThresholdMode::Relative,
            cutoff: cutoff_pct,
        }
    }
}

/// Fixed threshold table, one policy per tracked metric.
#[derive(Clone, Debug)]
pub struct PolicyTable {
    policies: BTreeMap<MetricId, ThresholdPolicy>,
}

impl Default for PolicyTable {
    fn default() -> Self {
        let policies = [
            ThresholdPolicy::absolute(MetricId::Us10yYield, 0.0),
            ThresholdPolicy::relative(MetricId::FedNetLiquidity, 0.0),
            ThresholdPolicy::relative(MetricId::StablecoinMcap, 0.1),
            ThresholdPolicy::relative(MetricId::BitcoinPrice, 0.5),
            ThresholdPolicy::relative(MetricId::UsdtDominance, 0.5),
            ThresholdPolicy::relative(MetricId::RwaTvl, 1.0),
        ]
        .into_iter()
        .map(|p| (p.metric, p))
        .collect();

        Self { policies }
    }
}

impl PolicyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Policy for `metric`. Every `MetricId` has an entry.
    pub fn get(&self, metric: MetricId) -> ThresholdPolicy {
        self.policies
            .get(&metric)
            .copied()
            .unwrap_or(ThresholdPolicy::relative(metric, 0.0))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThresholdPolicy> {
        self.policies.values()
    }
}

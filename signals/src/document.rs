//! Metrics snapshot document produced by the periodic collection job.
//!
//! The collector writes `null` for a metric it failed to fetch; such metrics
//! are treated as "no reading" rather than zero.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SignalsError;
use crate::metric::MetricId;
use crate::regime::RiskRegime;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricValues {
    #[serde(default)]
    pub us_10y_yield: Option<f64>,
    #[serde(default)]
    pub fed_net_liquidity: Option<f64>,
    #[serde(default)]
    pub stablecoin_mcap: Option<f64>,
    #[serde(default)]
    pub bitcoin_price: Option<f64>,
    #[serde(default)]
    pub usdt_dominance: Option<f64>,
    #[serde(default)]
    pub rwa_tvl: Option<f64>,

    /// 7-day percentage changes, present only for some metrics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub us_10y_yield_7d_change: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fed_net_liquidity_7d_change: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchSummary {
    pub total_metrics: u32,
    pub successful: u32,
    pub failed: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricsDocument {
    /// ISO-8601 collection time as written by the collector.
    pub timestamp: String,
    #[serde(default)]
    pub timestamp_unix: Option<i64>,
    pub metrics: MetricValues,
    #[serde(default)]
    pub summary: Option<FetchSummary>,
}

/// Week-over-week change derived from a precomputed 7d percentage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeeklyDelta {
    pub metric: MetricId,
    /// Change in display units: yield points, or billions of dollars for liquidity.
    pub amount: f64,
    /// The percentage the amount was derived from.
    pub pct: f64,
}

impl WeeklyDelta {
    /// Liquidity wording used by the macro card.
    pub fn liquidity_label(&self) -> &'static str {
        if self.amount >= 0.0 { "Injection" } else { "Drain" }
    }
}

impl MetricsDocument {
    pub fn from_json(raw: &str) -> Result<Self, SignalsError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Current reading for `metric`, if the collector produced one.
    pub fn value(&self, metric: MetricId) -> Option<f64> {
        let m = &self.metrics;
        let v = match metric {
            MetricId::Us10yYield => m.us_10y_yield,
            MetricId::FedNetLiquidity => m.fed_net_liquidity,
            MetricId::StablecoinMcap => m.stablecoin_mcap,
            MetricId::BitcoinPrice => m.bitcoin_price,
            MetricId::UsdtDominance => m.usdt_dominance,
            MetricId::RwaTvl => m.rwa_tvl,
        };
        v.filter(|x| x.is_finite())
    }

    /// Precomputed 7-day percentage change, where the collector provides one.
    pub fn seven_day_change(&self, metric: MetricId) -> Option<f64> {
        match metric {
            MetricId::Us10yYield => self.metrics.us_10y_yield_7d_change,
            MetricId::FedNetLiquidity => self.metrics.fed_net_liquidity_7d_change,
            _ => None,
        }
    }

    /// Collection time from the unix timestamp field.
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp_unix
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    /// Macro regime, defined only when both inputs were collected.
    pub fn regime(&self) -> Option<RiskRegime> {
        let us10y = self.value(MetricId::Us10yYield)?;
        let dominance = self.value(MetricId::UsdtDominance)?;
        Some(RiskRegime::from_readings(us10y, dominance))
    }

    /// Week-over-week change for the yield (points) and liquidity (billions).
    ///
    /// ```text
    /// yield:     amount = yield * pct / 100
    /// liquidity: amount = (liquidity_millions / 1000) * (pct / 100)
    /// ```
    pub fn weekly_delta(&self, metric: MetricId) -> Option<WeeklyDelta> {
        let pct = self.seven_day_change(metric)?;
        let value = self.value(metric)?;

        let amount = match metric {
            MetricId::Us10yYield => value * pct / 100.0,
            MetricId::FedNetLiquidity => (value / 1_000.0) * (pct / 100.0),
            _ => return None,
        };

        Some(WeeklyDelta { metric, amount, pct })
    }
}

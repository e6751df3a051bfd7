use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SignalsError;

/// Identifier of a tracked dashboard metric.
///
/// The serialized form matches the keys of the metrics document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricId {
    #[serde(rename = "us_10y_yield")]
    Us10yYield,
    FedNetLiquidity,
    StablecoinMcap,
    BitcoinPrice,
    UsdtDominance,
    RwaTvl,
}

impl MetricId {
    /// All metrics in dashboard order.
    pub const ALL: [MetricId; 6] = [
        MetricId::Us10yYield,
        MetricId::FedNetLiquidity,
        MetricId::StablecoinMcap,
        MetricId::BitcoinPrice,
        MetricId::UsdtDominance,
        MetricId::RwaTvl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricId::Us10yYield => "us_10y_yield",
            MetricId::FedNetLiquidity => "fed_net_liquidity",
            MetricId::StablecoinMcap => "stablecoin_mcap",
            MetricId::BitcoinPrice => "bitcoin_price",
            MetricId::UsdtDominance => "usdt_dominance",
            MetricId::RwaTvl => "rwa_tvl",
        }
    }

    /// Human readable name used in notifications.
    pub fn label(&self) -> &'static str {
        match self {
            MetricId::Us10yYield => "US 10Y Yield",
            MetricId::FedNetLiquidity => "Fed Net Liquidity",
            MetricId::StablecoinMcap => "Stablecoin Market Cap",
            MetricId::BitcoinPrice => "BTC Price",
            MetricId::UsdtDominance => "USDT Dominance",
            MetricId::RwaTvl => "RWA TVL",
        }
    }
}

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricId {
    type Err = SignalsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricId::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| SignalsError::UnknownMetric(s.to_string()))
    }
}

/// Previous and current reading of one metric.
///
/// `previous` is `None` only on the very first observation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricSnapshot {
    pub name: MetricId,
    pub previous: Option<f64>,
    pub current: f64,
}

impl MetricSnapshot {
    pub fn first(name: MetricId, current: f64) -> Self {
        Self {
            name,
            previous: None,
            current,
        }
    }

    pub fn new(name: MetricId, previous: f64, current: f64) -> Self {
        Self {
            name,
            previous: Some(previous),
            current,
        }
    }
}

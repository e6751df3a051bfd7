use std::fmt;

use serde::Serialize;

/// Yield above which the macro environment is treated as risk-off (percent).
pub const YIELD_RISK_OFF: f64 = 4.5;

/// USDT dominance above which the macro environment is risk-off (percent).
pub const DOMINANCE_RISK_OFF: f64 = 6.5;

/// Dominance bands for the fear gauge.
pub const DOMINANCE_HIGH_FEAR: f64 = 6.0;
pub const DOMINANCE_EXTREME_GREED: f64 = 4.0;

/// Bearish when either the 10Y yield or USDT dominance is above its cutoff.
pub fn is_macro_bearish(us10y: f64, usdt_dominance: f64) -> bool {
    us10y > YIELD_RISK_OFF || usdt_dominance > DOMINANCE_RISK_OFF
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RiskRegime {
    RiskOn,
    RiskOff,
}

impl RiskRegime {
    pub fn from_readings(us10y: f64, usdt_dominance: f64) -> Self {
        if is_macro_bearish(us10y, usdt_dominance) {
            RiskRegime::RiskOff
        } else {
            RiskRegime::RiskOn
        }
    }
}

impl fmt::Display for RiskRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskRegime::RiskOn => f.write_str("RISK ON"),
            RiskRegime::RiskOff => f.write_str("RISK OFF"),
        }
    }
}

/// Reading of USDT dominance as a counter-indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DominanceSentiment {
    /// Investors fleeing to cash, often a local bottom.
    HighFear,
    Neutral,
    ExtremeGreed,
}

impl DominanceSentiment {
    pub fn from_dominance(usdt_dominance: f64) -> Self {
        if usdt_dominance > DOMINANCE_HIGH_FEAR {
            DominanceSentiment::HighFear
        } else if usdt_dominance < DOMINANCE_EXTREME_GREED {
            DominanceSentiment::ExtremeGreed
        } else {
            DominanceSentiment::Neutral
        }
    }
}

impl fmt::Display for DominanceSentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DominanceSentiment::HighFear => "High Fear",
            DominanceSentiment::Neutral => "Neutral",
            DominanceSentiment::ExtremeGreed => "Extreme Greed",
        };
        f.write_str(s)
    }
}

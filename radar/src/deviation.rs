//! Actual-vs-forecast deviation for completed releases.
//!
//! ```text
//! value = actual - forecast
//! pct   = value / forecast * 100      (0 when forecast == 0)
//! ```
//!
//! The sign is direction agnostic: a positive value means the release came in
//! above forecast, whether that is good news depends on the indicator.

use serde::Serialize;

use crate::magnitude::parse_magnitude;

/// Deviation size (percent of forecast) above which a result is highlighted.
pub const NOTABLE_DEVIATION_PCT: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Deviation {
    pub value: f64,
    pub pct: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Beat,
    Miss,
    InLine,
}

impl Deviation {
    pub fn outcome(&self) -> Outcome {
        if self.value > 0.0 {
            Outcome::Beat
        } else if self.value < 0.0 {
            Outcome::Miss
        } else {
            Outcome::InLine
        }
    }

    /// True when the surprise is larger than `NOTABLE_DEVIATION_PCT`.
    pub fn is_notable(&self) -> bool {
        self.pct.abs() > NOTABLE_DEVIATION_PCT
    }
}

/// Compute the deviation of `actual` from `forecast`.
///
/// Returns `None` when either side is missing or does not parse.
pub fn deviation(actual: Option<&str>, forecast: Option<&str>) -> Option<Deviation> {
    let actual = parse_magnitude(actual?).ok()?;
    let forecast = parse_magnitude(forecast?).ok()?;

    let value = actual - forecast;
    let pct = if forecast == 0.0 {
        0.0
    } else {
        value / forecast * 100.0
    };

    Some(Deviation { value, pct })
}

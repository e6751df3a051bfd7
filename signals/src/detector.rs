//! Threshold-change detector.
//!
//! Compares a previous and a current reading under a `ThresholdPolicy` and
//! decides whether the move is significant enough to notify about.
//!
//! ## Magnitude
//! ```text
//! Absolute: magnitude = |current - previous|
//! Relative: magnitude = |current - previous| / previous * 100
//! ```
//!
//! ## Guards
//! - No previous reading → `None` (nothing to compare against).
//! - Relative mode with `previous == 0` → magnitude 0, never significant.
//!
//! The computation is pure and deterministic.

use crate::policy::{ThresholdMode, ThresholdPolicy};

/// Sign of the raw change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    fn of(raw_delta: f64) -> Self {
        if raw_delta > 0.0 {
            Direction::Up
        } else if raw_delta < 0.0 {
            Direction::Down
        } else {
            Direction::Flat
        }
    }

    /// Arrow used in notifications.
    pub fn arrow(&self) -> &'static str {
        match self {
            Direction::Up => "▲",
            Direction::Down => "▼",
            Direction::Flat => "•",
        }
    }
}

/// Outcome of one evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChangeResult {
    pub direction: Direction,
    /// Size of the move in the policy's unit (points or percent).
    pub magnitude: f64,
    /// Unscaled `current - previous`.
    pub raw_delta: f64,
    pub significant: bool,
}

impl ChangeResult {
    /// Raw delta multiplied by a caller supplied unit factor.
    pub fn scaled_delta(&self, scale: f64) -> f64 {
        self.raw_delta * scale
    }
}

/// Evaluate a change under `policy`.
///
/// Returns `None` when there is no baseline.
pub fn evaluate(policy: &ThresholdPolicy, previous: Option<f64>, current: f64) -> Option<ChangeResult> {
    let previous = previous?;
    let raw_delta = current - previous;

    let magnitude = match policy.mode {
        ThresholdMode::Absolute => raw_delta.abs(),
        ThresholdMode::Relative if previous == 0.0 => 0.0,
        ThresholdMode::Relative => (raw_delta / previous * 100.0).abs(),
    };

    // A zero cutoff flags any nonzero move; equal readings never qualify.
    let significant = raw_delta != 0.0 && magnitude > policy.cutoff;

    Some(ChangeResult {
        direction: Direction::of(raw_delta),
        magnitude,
        raw_delta,
        significant,
    })
}

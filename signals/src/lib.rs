//! Metric change signals for the strategic cockpit.
//!
//! Pure, synchronous building blocks:
//!   • `metric`   – the fixed set of tracked metrics
//!   • `policy`   – per-metric notification thresholds
//!   • `detector` – previous/current comparison under a policy
//!   • `regime`   – risk-on / risk-off classification
//!   • `ledger`   – "change since last notification" bookkeeping
//!
//! No I/O lives here; documents are parsed from strings handed in by callers.

pub mod detector;
pub mod document;
pub mod error;
pub mod format;
pub mod ledger;
pub mod metric;
pub mod policy;
pub mod regime;

pub use detector::{ChangeResult, Direction, evaluate};
pub use document::{MetricValues, MetricsDocument, WeeklyDelta};
pub use error::SignalsError;
pub use ledger::{Alert, NotificationLedger};
pub use metric::{MetricId, MetricSnapshot};
pub use policy::{PolicyTable, ThresholdMode, ThresholdPolicy};
pub use regime::{DominanceSentiment, RiskRegime, is_macro_bearish};

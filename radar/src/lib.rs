//! Catalyst radar: economic calendar bucketing and forecast deviations.
//!
//! Everything here is a pure function of its inputs. "Now" is always passed
//! in by the caller.

pub mod buckets;
pub mod deviation;
pub mod error;
pub mod event;
pub mod format;
pub mod magnitude;

pub use buckets::{WeekBucket, WeekGroup, days_until, group_by_week, today_at_offset};
pub use deviation::{Deviation, Outcome, deviation};
pub use error::{MagnitudeError, RadarError};
pub use event::{CalendarDocument, CalendarEvent, EventStatus, Impact};
pub use format::format_event_time;
pub use magnitude::parse_magnitude;

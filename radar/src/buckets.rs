//! Rolling four-week bucketing of calendar events.
//!
//! The distance of an event is measured in whole calendar days between its
//! date and "today" in the reference timezone; the event's clock time is not
//! considered. Events in the past or four or more weeks out are dropped.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::Serialize;

use crate::event::CalendarEvent;

/// Number of days covered by the radar.
pub const HORIZON_DAYS: i64 = 28;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum WeekBucket {
    ThisWeek,
    NextWeek,
    Week3,
    Week4,
}

impl WeekBucket {
    pub const ALL: [WeekBucket; 4] = [
        WeekBucket::ThisWeek,
        WeekBucket::NextWeek,
        WeekBucket::Week3,
        WeekBucket::Week4,
    ];

    /// Bucket for an event `days` away, `None` outside `[0, 28)`.
    pub fn for_days(days: i64) -> Option<Self> {
        match days {
            0..=6 => Some(WeekBucket::ThisWeek),
            7..=13 => Some(WeekBucket::NextWeek),
            14..=20 => Some(WeekBucket::Week3),
            21..=27 => Some(WeekBucket::Week4),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeekBucket::ThisWeek => "This Week",
            WeekBucket::NextWeek => "Next Week",
            WeekBucket::Week3 => "Week 3",
            WeekBucket::Week4 => "Week 4",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for WeekBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Non-empty bucket of events, in input order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WeekGroup<'a> {
    pub bucket: WeekBucket,
    pub events: Vec<&'a CalendarEvent>,
}

impl WeekGroup<'_> {
    pub fn label(&self) -> &'static str {
        self.bucket.label()
    }
}

/// Whole calendar days from `today` until `date` (negative when past).
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

/// Calendar date of `now` in the reference timezone.
pub fn today_at_offset(now: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    now.with_timezone(&offset).date_naive()
}

/// Group `events` into the four radar weeks relative to `today`.
///
/// Only non-empty buckets are returned, always in week order.
pub fn group_by_week(events: &[CalendarEvent], today: NaiveDate) -> Vec<WeekGroup<'_>> {
    let mut slots: [Vec<&CalendarEvent>; 4] = Default::default();

    for event in events {
        if let Some(bucket) = WeekBucket::for_days(days_until(event.date, today)) {
            slots[bucket.index()].push(event);
        }
    }

    WeekBucket::ALL
        .into_iter()
        .zip(slots)
        .filter(|(_, events)| !events.is_empty())
        .map(|(bucket, events)| WeekGroup { bucket, events })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventStatus, Impact};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(id: &str, date: NaiveDate) -> CalendarEvent {
        CalendarEvent {
            id: id.into(),
            date,
            time: "20:30".into(),
            name: id.to_uppercase(),
            impact: Impact::High,
            forecast: None,
            actual: None,
            previous: None,
            status: EventStatus::Upcoming,
            notification_sent_12h: false,
            notification_sent_release: false,
        }
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(WeekBucket::for_days(-1), None);
        assert_eq!(WeekBucket::for_days(0), Some(WeekBucket::ThisWeek));
        assert_eq!(WeekBucket::for_days(6), Some(WeekBucket::ThisWeek));
        assert_eq!(WeekBucket::for_days(7), Some(WeekBucket::NextWeek));
        assert_eq!(WeekBucket::for_days(14), Some(WeekBucket::Week3));
        assert_eq!(WeekBucket::for_days(27), Some(WeekBucket::Week4));
        assert_eq!(WeekBucket::for_days(HORIZON_DAYS), None);
    }

    #[test]
    fn ten_days_out_is_next_week_and_thirty_is_dropped() {
        let today = day(2025, 1, 6);
        let events = vec![event("ppi", day(2025, 1, 16)), event("gdp", day(2025, 2, 5))];

        let groups = group_by_week(&events, today);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label(), "Next Week");
        assert_eq!(groups[0].events[0].id, "ppi");
    }

    #[test]
    fn empty_buckets_are_omitted_and_order_is_fixed() {
        let today = day(2025, 1, 6);
        let events = vec![
            event("late", day(2025, 1, 30)),
            event("soon", day(2025, 1, 6)),
            event("past", day(2025, 1, 5)),
        ];

        let groups = group_by_week(&events, today);
        let labels: Vec<_> = groups.iter().map(|g| g.label()).collect();

        assert_eq!(labels, vec!["This Week", "Week 4"]);
    }

    #[test]
    fn input_order_is_preserved_within_a_bucket() {
        let today = day(2025, 1, 6);
        let events = vec![
            event("b", day(2025, 1, 9)),
            event("a", day(2025, 1, 7)),
            event("c", day(2025, 1, 8)),
        ];

        let groups = group_by_week(&events, today);
        let ids: Vec<_> = groups[0].events.iter().map(|e| e.id.as_str()).collect();

        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn today_follows_the_reference_offset() {
        let sgt = FixedOffset::east_opt(8 * 3600).unwrap();
        let now = DateTime::parse_from_rfc3339("2025-01-06T17:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        assert_eq!(today_at_offset(now, sgt), day(2025, 1, 7));
    }
}

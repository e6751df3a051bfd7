use chrono::{NaiveDate, NaiveTime};

/// Label of the timezone event times are published in (UTC+8).
pub const REFERENCE_TZ_LABEL: &str = "SGT";

/// Render an event slot as `"Fri 10 Jan, 21:30 SGT"`.
///
/// Times are already in the reference timezone, no conversion happens. A
/// time that is not `HH:MM` is echoed back next to the ISO date.
pub fn format_event_time(date: NaiveDate, time: &str) -> String {
    match NaiveTime::parse_from_str(time.trim(), "%H:%M") {
        Ok(t) => format!(
            "{}, {} {}",
            date.format("%a %-d %b"),
            t.format("%H:%M"),
            REFERENCE_TZ_LABEL
        ),
        Err(_) => format!("{date} {time}"),
    }
}

use chrono::{NaiveDateTime, NaiveTime, Timelike};

pub const HOURS_PER_DAY: usize = 24;

/// Coarse-grained value derived from an instant and used as a grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeBucket {
    /// Midnight of the calendar date
    Day,
    /// Two-digit hour label, "00" through "23"
    HourOfDay,
}

/// Truncate an instant to midnight of its calendar date.
pub fn day_bucket(ts: NaiveDateTime) -> NaiveDateTime {
    ts.date().and_time(NaiveTime::MIN)
}

/// Hour component of an instant, 0 through 23.
pub fn hour_bucket(ts: NaiveDateTime) -> u32 {
    ts.hour()
}

/// Fixed-width label for an hour so that lexicographic order equals numeric order.
pub fn hour_label(hour: u32) -> String {
    format!("{:02}", hour)
}

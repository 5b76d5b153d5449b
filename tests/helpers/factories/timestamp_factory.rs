use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Factory for creating test instants with known dates
pub struct TimestampFactory;

impl TimestampFactory {
    /// Create an instant for a specific date/time
    pub fn datetime(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, min, sec))
            .unwrap()
    }

    /// Create an instant for the start of a day
    pub fn date(year: i32, month: u32, day: u32) -> NaiveDateTime {
        Self::datetime(year, month, day, 0, 0, 0)
    }

    /// Create a calendar date
    pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Create an instant for a specific hour of a day
    pub fn hour(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        Self::datetime(year, month, day, hour, 0, 0)
    }

    /// Shift an instant by a number of days
    pub fn plus_days(base: NaiveDateTime, days: i64) -> NaiveDateTime {
        base + Duration::days(days)
    }

    /// Shift an instant by a number of hours
    pub fn plus_hours(base: NaiveDateTime, hours: i64) -> NaiveDateTime {
        base + Duration::hours(hours)
    }
}

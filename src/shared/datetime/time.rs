use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Formats tried, in order, after RFC3339. All produce naive wall-clock instants.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Utility for parsing raw warehouse values into naive instants.
pub struct TimeParser;

impl TimeParser {
    /// Parse a string representing a date or timestamp.
    /// Supports RFC3339 (offset discarded, wall clock kept), ISO-8601 datetimes with a space
    /// or `T` separator, date-only (YYYY-MM-DD or YYYYMMDD, midnight) and integer epochs.
    pub fn parse_str(input: &str) -> Option<NaiveDateTime> {
        let s = input.trim();
        if s.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.naive_local());
        }
        for fmt in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(dt);
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return date.and_hms_opt(0, 0, 0);
        }
        // Eight digits that form a valid calendar date are YYYYMMDD, not epoch seconds
        if s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(date) = NaiveDate::parse_from_str(s, "%Y%m%d") {
                return date.and_hms_opt(0, 0, 0);
            }
        }
        // Fallback: numeric string
        if let Ok(num) = s.parse::<i128>() {
            return Self::from_integer_epoch(num);
        }
        None
    }

    /// Interpret an integer epoch, detecting its unit from its magnitude.
    /// - up to 11 digits: seconds
    /// - 12..=14: milliseconds
    /// - 15..=16: microseconds
    /// - 17..=19: nanoseconds
    pub fn from_integer_epoch(n: i128) -> Option<NaiveDateTime> {
        let secs = Self::normalize_integer_epoch(n)?;
        DateTime::from_timestamp(secs, 0).map(|dt| dt.naive_utc())
    }

    /// Float epochs are always seconds; the fractional part is dropped.
    pub fn from_float_epoch(f: f64) -> Option<NaiveDateTime> {
        if !f.is_finite() {
            return None;
        }
        DateTime::from_timestamp(f.floor() as i64, 0).map(|dt| dt.naive_utc())
    }

    fn normalize_integer_epoch(n: i128) -> Option<i64> {
        let abs = n.unsigned_abs();
        let digits = num_digits_u128(abs);
        let secs = match digits {
            0..=11 => n,                  // seconds (and small negatives)
            12..=14 => n / 1_000,         // ms -> s
            15..=16 => n / 1_000_000,     // µs -> s
            17..=19 => n / 1_000_000_000, // ns -> s
            _ => return None,
        };
        i64::try_from(secs).ok()
    }
}

fn num_digits_u128(mut x: u128) -> u32 {
    if x == 0 {
        return 1;
    }
    let mut c = 0;
    while x > 0 {
        x /= 10;
        c += 1;
    }
    c
}

use super::timestamp_factory::TimestampFactory;
use chrono::{Datelike, Timelike};

#[test]
fn test_datetime() {
    let dt = TimestampFactory::datetime(2024, 1, 15, 12, 30, 45);
    assert_eq!(dt.year(), 2024);
    assert_eq!(dt.month(), 1);
    assert_eq!(dt.day(), 15);
    assert_eq!(dt.hour(), 12);
    assert_eq!(dt.minute(), 30);
    assert_eq!(dt.second(), 45);
}

#[test]
fn test_date_is_midnight() {
    let dt = TimestampFactory::date(2024, 1, 15);
    assert_eq!(dt.hour(), 0);
    assert_eq!(dt.minute(), 0);
    assert_eq!(dt.second(), 0);
    assert_eq!(dt.date(), TimestampFactory::day(2024, 1, 15));
}

#[test]
fn test_offsets_cross_month_boundaries() {
    let base = TimestampFactory::date(2024, 1, 31);
    assert_eq!(TimestampFactory::plus_days(base, 1), TimestampFactory::date(2024, 2, 1));
    assert_eq!(
        TimestampFactory::plus_hours(base, 25),
        TimestampFactory::hour(2024, 2, 1, 1)
    );
}

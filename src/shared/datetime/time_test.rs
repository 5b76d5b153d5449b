use super::time::TimeParser;
use crate::test_helpers::factories::TimestampFactory;

#[test]
fn parses_date_only_as_midnight() {
    let parsed = TimeParser::parse_str("2024-01-15").unwrap();
    assert_eq!(parsed, TimestampFactory::date(2024, 1, 15));
}

#[test]
fn parses_space_and_t_separated_datetimes() {
    let expected = TimestampFactory::datetime(2024, 1, 15, 14, 30, 45);
    assert_eq!(TimeParser::parse_str("2024-01-15 14:30:45").unwrap(), expected);
    assert_eq!(TimeParser::parse_str("2024-01-15T14:30:45").unwrap(), expected);
    assert_eq!(
        TimeParser::parse_str("2024-01-15 14:30:45.250").unwrap(),
        expected + chrono::Duration::milliseconds(250)
    );
}

#[test]
fn rfc3339_keeps_wall_clock_and_drops_offset() {
    let parsed = TimeParser::parse_str("2024-01-15T14:30:45-05:00").unwrap();
    assert_eq!(parsed, TimestampFactory::datetime(2024, 1, 15, 14, 30, 45));
}

#[test]
fn integer_epochs_detect_their_unit() {
    let expected = TimestampFactory::datetime(2024, 1, 15, 0, 0, 0);
    assert_eq!(TimeParser::parse_str("1705276800").unwrap(), expected);
    assert_eq!(TimeParser::parse_str("1705276800000").unwrap(), expected);
    assert_eq!(TimeParser::parse_str("1705276800000000").unwrap(), expected);
    assert_eq!(TimeParser::parse_str("1705276800000000000").unwrap(), expected);
}

#[test]
fn float_epoch_is_seconds() {
    let parsed = TimeParser::from_float_epoch(1705276800.9).unwrap();
    assert_eq!(parsed, TimestampFactory::date(2024, 1, 15));
    assert!(TimeParser::from_float_epoch(f64::NAN).is_none());
}

#[test]
fn rejects_garbage() {
    assert!(TimeParser::parse_str("").is_none());
    assert!(TimeParser::parse_str("not a date").is_none());
    assert!(TimeParser::parse_str("2024-13-45").is_none());
    assert!(TimeParser::parse_str("123456789012345678901234").is_none());
}

#[test]
fn compact_eight_digit_date_is_a_calendar_date() {
    assert_eq!(
        TimeParser::parse_str("20240101").unwrap(),
        TimestampFactory::date(2024, 1, 1)
    );
    // Not a valid month, so it stays an epoch
    assert!(TimeParser::parse_str("20241301").is_some());
    assert_eq!(
        TimeParser::parse_str("1705276800").unwrap(),
        TimestampFactory::date(2024, 1, 15)
    );
}

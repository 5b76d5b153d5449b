use super::time_bucketing::{day_bucket, hour_bucket, hour_label};
use crate::test_helpers::factories::TimestampFactory;

#[test]
fn day_bucket_truncates_to_midnight() {
    let test_cases = vec![
        (
            TimestampFactory::datetime(2024, 1, 15, 14, 30, 45),
            TimestampFactory::date(2024, 1, 15),
            "14:30:45 should bucket to start of day",
        ),
        (
            TimestampFactory::date(2024, 1, 15),
            TimestampFactory::date(2024, 1, 15),
            "midnight should bucket to midnight",
        ),
        (
            TimestampFactory::datetime(2024, 2, 29, 23, 59, 59),
            TimestampFactory::date(2024, 2, 29),
            "leap day 23:59:59 should stay on the leap day",
        ),
    ];

    for (input, expected, description) in test_cases {
        assert_eq!(day_bucket(input), expected, "{}", description);
    }
}

#[test]
fn hour_bucket_extracts_hour_component() {
    assert_eq!(hour_bucket(TimestampFactory::datetime(2024, 1, 15, 0, 0, 0)), 0);
    assert_eq!(hour_bucket(TimestampFactory::datetime(2024, 1, 15, 9, 59, 59)), 9);
    assert_eq!(hour_bucket(TimestampFactory::datetime(2024, 1, 15, 23, 1, 0)), 23);
}

#[test]
fn hour_labels_are_two_digits() {
    for hour in 0..24 {
        let label = hour_label(hour);
        assert_eq!(label.len(), 2, "label for hour {} should be two digits", hour);
        assert_eq!(label.parse::<u32>().unwrap(), hour);
    }
    assert_eq!(hour_label(0), "00");
    assert_eq!(hour_label(7), "07");
    assert_eq!(hour_label(23), "23");
}

#[test]
fn hour_label_lexicographic_order_is_chronological() {
    let labels: Vec<String> = (0..24).map(hour_label).collect();
    let mut sorted = labels.clone();
    sorted.sort();
    assert_eq!(labels, sorted);
}

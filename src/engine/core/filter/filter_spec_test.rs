use crate::engine::core::filter::{FilterSpec, InstantRange};
use crate::engine::errors::PipelineError;
use crate::test_helpers::factories::TimestampFactory;

#[test]
fn range_rejects_inverted_bounds() {
    let err = InstantRange::new(
        TimestampFactory::date(2024, 1, 2),
        TimestampFactory::date(2024, 1, 1),
    )
    .unwrap_err();

    assert_eq!(
        err,
        PipelineError::InvalidRange {
            lower: "2024-01-02T00:00:00".into(),
            upper: "2024-01-01T00:00:00".into(),
        }
    );
}

#[test]
fn range_bounds_are_inclusive() {
    let range = InstantRange::new(
        TimestampFactory::date(2024, 1, 1),
        TimestampFactory::date(2024, 1, 2),
    )
    .unwrap();

    assert!(range.contains(TimestampFactory::date(2024, 1, 1)));
    assert!(range.contains(TimestampFactory::date(2024, 1, 2)));
    assert!(!range.contains(TimestampFactory::datetime(2024, 1, 2, 0, 0, 1)));
}

#[test]
fn date_range_uses_midnight_on_both_ends() {
    let range = InstantRange::from_dates(
        TimestampFactory::day(2024, 1, 1),
        TimestampFactory::day(2024, 1, 1),
    )
    .unwrap();

    assert_eq!(range.lower(), TimestampFactory::date(2024, 1, 1));
    assert_eq!(range.upper(), TimestampFactory::date(2024, 1, 1));
    assert!(!range.contains(TimestampFactory::hour(2024, 1, 1, 12)));
}

#[test]
fn absent_selection_leaves_column_unconstrained() {
    let spec = FilterSpec::new().with_selection("CITY", None);
    assert!(spec.is_unconstrained());
    assert!(spec.accepted("CITY").is_none());
}

#[test]
fn empty_selection_is_kept_as_empty_accepted_set() {
    let spec = FilterSpec::new().with_selection("CITY", Some(&[][..]));
    assert!(!spec.is_unconstrained());
    assert_eq!(spec.accepted("CITY").map(|s| s.len()), Some(0));
}

#[test]
fn later_accepted_set_replaces_earlier_one() {
    let spec = FilterSpec::new()
        .with_accepted("CITY", ["A"])
        .with_accepted("CITY", ["B", "C"]);

    let accepted = spec.accepted("CITY").unwrap();
    assert_eq!(accepted.iter().collect::<Vec<_>>(), vec!["B", "C"]);
}

#[test]
fn trailing_range_ends_at_given_instant() {
    let end = TimestampFactory::hour(2024, 1, 8, 12);
    let range = InstantRange::trailing(end, chrono::Duration::days(7));

    assert_eq!(range.lower(), TimestampFactory::hour(2024, 1, 1, 12));
    assert_eq!(range.upper(), end);
}

use std::str::FromStr;

use crate::dashboard::TimeWindow;
use crate::test_helpers::factories::TimestampFactory;

#[test]
fn presets_cover_one_to_ninety_days() {
    let days: Vec<i64> = TimeWindow::ALL.iter().map(|w| w.days()).collect();
    assert_eq!(days, vec![1, 7, 30, 90]);
}

#[test]
fn parses_labels_and_kebab_names() {
    assert_eq!(TimeWindow::from_str("Last 24 Hours"), Ok(TimeWindow::Last24Hours));
    assert_eq!(TimeWindow::from_str("last-30-days"), Ok(TimeWindow::Last30Days));
    assert_eq!(TimeWindow::from_str(" LAST-90-DAYS "), Ok(TimeWindow::Last90Days));
    assert!(TimeWindow::from_str("Last 2 Weeks").is_err());
}

#[test]
fn every_preset_round_trips_through_its_label() {
    for window in TimeWindow::ALL {
        assert_eq!(window.to_string().parse::<TimeWindow>(), Ok(window));
        assert_eq!(window.name().parse::<TimeWindow>(), Ok(window));
    }
}

#[test]
fn bounds_end_at_now() {
    let now = TimestampFactory::hour(2024, 3, 10, 15);
    let range = TimeWindow::Last7Days.bounds(now);

    assert_eq!(range.upper(), now);
    assert_eq!(range.lower(), TimestampFactory::hour(2024, 3, 3, 15));
    assert_eq!(
        TimeWindow::Last24Hours.bounds(now).lower(),
        TimestampFactory::hour(2024, 3, 9, 15)
    );
}

#[test]
fn defaults_to_last_seven_days() {
    assert_eq!(TimeWindow::default(), TimeWindow::Last7Days);
    assert_eq!(
        serde_json::to_value(TimeWindow::default()).unwrap(),
        serde_json::json!("Last 7 Days")
    );
}

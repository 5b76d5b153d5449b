use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::engine::core::filter::InstantRange;

/// Preset look-back windows of the monitor sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum TimeWindow {
    #[serde(rename = "Last 24 Hours")]
    Last24Hours,
    #[default]
    #[serde(rename = "Last 7 Days")]
    Last7Days,
    #[serde(rename = "Last 30 Days")]
    Last30Days,
    #[serde(rename = "Last 90 Days")]
    Last90Days,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 4] = [
        TimeWindow::Last24Hours,
        TimeWindow::Last7Days,
        TimeWindow::Last30Days,
        TimeWindow::Last90Days,
    ];

    pub fn days(&self) -> i64 {
        match self {
            TimeWindow::Last24Hours => 1,
            TimeWindow::Last7Days => 7,
            TimeWindow::Last30Days => 30,
            TimeWindow::Last90Days => 90,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeWindow::Last24Hours => "Last 24 Hours",
            TimeWindow::Last7Days => "Last 7 Days",
            TimeWindow::Last30Days => "Last 30 Days",
            TimeWindow::Last90Days => "Last 90 Days",
        }
    }

    /// Kebab-case name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            TimeWindow::Last24Hours => "last-24-hours",
            TimeWindow::Last7Days => "last-7-days",
            TimeWindow::Last30Days => "last-30-days",
            TimeWindow::Last90Days => "last-90-days",
        }
    }

    /// `[now - days, now]`
    pub fn bounds(&self, now: NaiveDateTime) -> InstantRange {
        InstantRange::trailing(now, Duration::days(self.days()))
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TimeWindow::ALL
            .into_iter()
            .find(|w| w.label() == wanted || w.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                format!(
                    "unknown time window '{}', expected one of: {}",
                    s,
                    TimeWindow::ALL.map(|w| w.name()).join(", ")
                )
            })
    }
}

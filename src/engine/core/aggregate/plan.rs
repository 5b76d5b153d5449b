use crate::shared::datetime::TimeBucket;

/// Column name used for the hour-of-day grouping key in aggregated output
pub const HOUR_COLUMN: &str = "HOUR";

/// One component of a grouping key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupingKey {
    /// Raw value of a categorical (or numeric) column
    Column(String),
    /// Calendar day of an instant column, truncated to midnight
    DayOf(String),
    /// Hour of day of an instant column, as a "00".."23" label
    HourOf(String),
}

impl GroupingKey {
    pub fn column(name: &str) -> Self {
        GroupingKey::Column(name.to_string())
    }

    pub fn day_of(name: &str) -> Self {
        GroupingKey::DayOf(name.to_string())
    }

    pub fn hour_of(name: &str) -> Self {
        GroupingKey::HourOf(name.to_string())
    }

    /// Source column the key is derived from
    pub fn source(&self) -> &str {
        match self {
            GroupingKey::Column(c) | GroupingKey::DayOf(c) | GroupingKey::HourOf(c) => c,
        }
    }

    /// Column name the key carries in the aggregated output
    pub fn output_name(&self) -> &str {
        match self {
            GroupingKey::Column(c) | GroupingKey::DayOf(c) => c,
            GroupingKey::HourOf(_) => HOUR_COLUMN,
        }
    }

    pub fn bucket(&self) -> Option<TimeBucket> {
        match self {
            GroupingKey::Column(_) => None,
            GroupingKey::DayOf(_) => Some(TimeBucket::Day),
            GroupingKey::HourOf(_) => Some(TimeBucket::HourOfDay),
        }
    }
}

/// Reduction applied to the metric column of each group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reducer {
    Sum,
    Avg,
    Count,
}

/// Grouping keys + metric column + reducer
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateSpec {
    pub keys: Vec<GroupingKey>,
    pub metric: String,
    pub reducer: Reducer,
}

impl AggregateSpec {
    pub fn new(metric: &str, reducer: Reducer) -> Self {
        Self {
            keys: Vec::new(),
            metric: metric.to_string(),
            reducer,
        }
    }

    pub fn sum(metric: &str) -> Self {
        Self::new(metric, Reducer::Sum)
    }

    pub fn avg(metric: &str) -> Self {
        Self::new(metric, Reducer::Avg)
    }

    pub fn count(metric: &str) -> Self {
        Self::new(metric, Reducer::Count)
    }

    pub fn group_by(mut self, key: GroupingKey) -> Self {
        self.keys.push(key);
        self
    }
}

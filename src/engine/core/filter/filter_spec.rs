use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use indexmap::{IndexMap, IndexSet};

use crate::engine::errors::PipelineError;
use crate::engine::types::INSTANT_FORMAT;

/// Inclusive instant range, lower ≤ upper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstantRange {
    lower: NaiveDateTime,
    upper: NaiveDateTime,
}

impl InstantRange {
    pub fn new(lower: NaiveDateTime, upper: NaiveDateTime) -> Result<Self, PipelineError> {
        if lower > upper {
            return Err(PipelineError::InvalidRange {
                lower: lower.format(INSTANT_FORMAT).to_string(),
                upper: upper.format(INSTANT_FORMAT).to_string(),
            });
        }
        Ok(Self { lower, upper })
    }

    /// Range between two calendar dates, each taken at midnight. Instants later than
    /// midnight on the upper date fall outside.
    pub fn from_dates(lower: NaiveDate, upper: NaiveDate) -> Result<Self, PipelineError> {
        Self::new(lower.and_time(NaiveTime::MIN), upper.and_time(NaiveTime::MIN))
    }

    /// The span of length `span` ending at `end`.
    pub fn trailing(end: NaiveDateTime, span: Duration) -> Self {
        let start = end - span;
        if start <= end {
            Self { lower: start, upper: end }
        } else {
            Self { lower: end, upper: start }
        }
    }

    pub fn lower(&self) -> NaiveDateTime {
        self.lower
    }

    pub fn upper(&self) -> NaiveDateTime {
        self.upper
    }

    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        ts >= self.lower && ts <= self.upper
    }
}

/// Conjunction of an optional instant range on one column and accepted-value sets on
/// categorical columns.
///
/// An accepted set that is empty matches no row. "No constraint" on a column is
/// expressed by not constraining it at all (see [`FilterSpec::with_selection`]).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSpec {
    pub(crate) range: Option<(String, InstantRange)>,
    pub(crate) accepted: IndexMap<String, IndexSet<String>>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(mut self, column: &str, range: InstantRange) -> Self {
        self.range = Some((column.to_string(), range));
        self
    }

    /// Accept only the given values of `column`. An empty list excludes every row.
    pub fn with_accepted<I, S>(mut self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepted.insert(
            column.to_string(),
            values.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Widget-style selection: `None` leaves the column unconstrained, `Some` restricts
    /// it to the selected values, including the empty selection.
    pub fn with_selection(self, column: &str, selection: Option<&[String]>) -> Self {
        match selection {
            None => self,
            Some(values) => self.with_accepted(column, values.iter().cloned()),
        }
    }

    pub fn range(&self) -> Option<(&str, &InstantRange)> {
        self.range.as_ref().map(|(c, r)| (c.as_str(), r))
    }

    pub fn accepted(&self, column: &str) -> Option<&IndexSet<String>> {
        self.accepted.get(column)
    }

    pub fn is_unconstrained(&self) -> bool {
        self.range.is_none() && self.accepted.is_empty()
    }
}

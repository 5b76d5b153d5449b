use crate::engine::core::aggregate::plan::Reducer;
use crate::engine::types::ScalarValue;

/// Running total; missing and non-numeric values contribute nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sum {
    total: f64,
}

impl Sum {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, value: &ScalarValue) {
        if let Some(v) = value.as_f64() {
            self.total += v;
        }
    }

    pub fn finalize(&self) -> f64 {
        self.total
    }
}

/// Mean of the non-missing numeric values; NaN when there are none.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Avg {
    sum: f64,
    count: u64,
}

impl Avg {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, value: &ScalarValue) {
        if let Some(v) = value.as_f64() {
            self.sum += v;
            self.count += 1;
        }
    }

    pub fn finalize(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.sum / self.count as f64
        }
    }
}

/// Number of rows seen, whatever the metric holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Count {
    count: u64,
}

impl Count {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self) {
        self.count += 1;
    }

    pub fn finalize(&self) -> f64 {
        self.count as f64
    }
}

/// Accumulator enum with concrete implementations per reducer
#[derive(Debug, Clone, PartialEq)]
pub enum AccumulatorImpl {
    Sum(Sum),
    Avg(Avg),
    Count(Count),
}

impl AccumulatorImpl {
    pub fn from_reducer(reducer: Reducer) -> Self {
        match reducer {
            Reducer::Sum => Self::Sum(Sum::new()),
            Reducer::Avg => Self::Avg(Avg::new()),
            Reducer::Count => Self::Count(Count::new()),
        }
    }

    pub fn update(&mut self, value: &ScalarValue) {
        match self {
            AccumulatorImpl::Sum(a) => a.update(value),
            AccumulatorImpl::Avg(a) => a.update(value),
            AccumulatorImpl::Count(a) => a.update(),
        }
    }

    pub fn finalize(&self) -> f64 {
        match self {
            AccumulatorImpl::Sum(a) => a.finalize(),
            AccumulatorImpl::Avg(a) => a.finalize(),
            AccumulatorImpl::Count(a) => a.finalize(),
        }
    }
}

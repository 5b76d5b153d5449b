mod group_key;
pub mod ops;
pub mod plan;
mod result;
mod sink;
mod summary;

pub use plan::{AggregateSpec, GroupingKey, Reducer};
pub use result::{AggregatedResult, AggregatedRow};
pub use sink::aggregate;
pub use summary::{distinct_count, format_total, total};

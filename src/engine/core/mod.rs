pub mod aggregate;
pub mod dataset;
pub mod filter;
pub mod rank;
pub mod reshape;

pub use aggregate::{
    AggregateSpec, AggregatedResult, AggregatedRow, GroupingKey, Reducer, aggregate,
    distinct_count, format_total, total,
};
pub use dataset::{Dataset, Row, Schema, normalize};
pub use filter::{FilterSpec, InstantRange, apply};
pub use rank::{RankedResult, top_n};
pub use reshape::{
    CategoryPoint, HeatmapMatrix, HeatmapRow, ScatterPoint, StackedPoint, TableView, TimePoint,
    categorical_series, heatmap, scatter, stacked_series, table, time_series,
};

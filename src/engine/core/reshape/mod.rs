mod categorical;
mod heatmap;
mod scatter;
mod shape;
mod stacked;
mod table;
mod time_series;

pub use categorical::{CategoryPoint, categorical_series};
pub use heatmap::{HeatmapMatrix, HeatmapRow, heatmap};
pub use scatter::{ScatterPoint, scatter};
pub use stacked::{StackedPoint, stacked_series};
pub use table::{TableView, table};
pub use time_series::{TimePoint, time_series};

#[cfg(test)]
mod stacked_test;

use ahash::RandomState as AHashRandomState;
use indexmap::IndexMap;
use serde::Serialize;

use crate::engine::core::aggregate::AggregatedResult;
use crate::engine::core::reshape::shape::require_arity;
use crate::engine::errors::PipelineError;
use crate::shared::datetime::{HOURS_PER_DAY, hour_label};

/// One category's metric per hour of day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapRow {
    pub category: String,
    pub cells: [f64; HOURS_PER_DAY],
}

/// Category × hour matrix. Missing combinations are 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapMatrix {
    pub hours: Vec<String>,
    pub rows: Vec<HeatmapRow>,
}

impl HeatmapMatrix {
    /// All 24 hour labels and no categories.
    pub fn empty() -> Self {
        Self {
            hours: (0..HOURS_PER_DAY as u32).map(hour_label).collect(),
            rows: Vec::new(),
        }
    }

    pub fn cell(&self, category: &str, hour: usize) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| r.category == category)
            .and_then(|r| r.cells.get(hour).copied())
    }
}

fn parse_hour(label: &str) -> Option<usize> {
    label.parse::<usize>().ok().filter(|h| *h < HOURS_PER_DAY)
}

/// Pivot a (category, hour label) keyed result into a matrix, categories in first-seen
/// order.
pub fn heatmap(result: &AggregatedResult) -> Result<HeatmapMatrix, PipelineError> {
    let keys = require_arity(result, 2, "heatmap")?;
    let (hour_column, _) = &keys[1];

    let mut cells: IndexMap<String, [f64; HOURS_PER_DAY], AHashRandomState> =
        IndexMap::with_hasher(AHashRandomState::new());

    for row in result.rows() {
        let label = row.key[1].to_string_repr();
        let hour = parse_hour(&label).ok_or_else(|| {
            PipelineError::schema_mismatch(
                hour_column,
                format!("'{}' is not an hour label", label),
            )
        })?;
        let entry = cells
            .entry(row.key[0].to_string_repr())
            .or_insert([0.0; HOURS_PER_DAY]);
        entry[hour] += row.value;
    }

    let mut matrix = HeatmapMatrix::empty();
    matrix.rows = cells
        .into_iter()
        .map(|(category, cells)| HeatmapRow { category, cells })
        .collect();
    Ok(matrix)
}

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{debug, info};

use crate::dashboard::time_window::TimeWindow;
use crate::engine::core::aggregate::{
    AggregateSpec, GroupingKey, aggregate, distinct_count, format_total,
};
use crate::engine::core::dataset::{Dataset, Row, Schema, normalize};
use crate::engine::core::filter::{FilterSpec, InstantRange, apply};
use crate::engine::core::reshape::{
    CategoryPoint, HeatmapMatrix, StackedPoint, TableView, TimePoint, categorical_series,
    heatmap, stacked_series, table, time_series,
};
use crate::engine::errors::{DashboardError, PipelineError};
use crate::engine::source::{DataSource, bind_range};
use crate::engine::types::{ScalarValue, SemanticType};
use crate::shared::config::{DashboardConfig, QueryConfig, Settings};

pub const START_TIME: &str = "START_TIME";
pub const NAME: &str = "NAME";
pub const CREDITS_USED: &str = "CREDITS_USED";
pub const USAGE_DATE: &str = "USAGE_DATE";
pub const STORAGE_LAYERS: [&str; 3] = ["STORAGE_TB", "STAGE_TB", "FAILSAFE_TB"];
pub const WAREHOUSE_NAME: &str = "WAREHOUSE_NAME";
pub const QUERY_TYPE: &str = "QUERY_TYPE";
pub const TOTAL_ELAPSED_TIME: &str = "TOTAL_ELAPSED_TIME";
pub const AVG_EXECUTION_TIME_SECONDS: &str = "AVG_EXECUTION_TIME_SECONDS";
pub const QUERY_COUNT: &str = "QUERY_COUNT";
pub const EVENT_TIMESTAMP: &str = "EVENT_TIMESTAMP";

const MILLIS_PER_SECOND: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitorFooter {
    pub total_credits_used: String,
    pub active_warehouses: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitorView {
    pub window: TimeWindow,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub warehouse_usage: Vec<CategoryPoint>,
    pub usage_heatmap: HeatmapMatrix,
    pub credit_trend: Vec<TimePoint>,
    pub storage: Vec<StackedPoint>,
    pub query_performance: TableView,
    pub access_history: TableView,
    pub footer: MonitorFooter,
}

/// Sections derived from the metering rows of the window.
struct UsageSections {
    warehouse_usage: Vec<CategoryPoint>,
    usage_heatmap: HeatmapMatrix,
    credit_trend: Vec<TimePoint>,
    footer: MonitorFooter,
}

#[derive(Debug, Clone)]
pub struct MonitorDashboard {
    queries: QueryConfig,
    limits: DashboardConfig,
}

/// Normalize `column` and keep the rows inside `range`. Zero-row input passes through
/// untouched so that a source without any records never trips over a missing schema.
fn within(
    raw: &Dataset,
    column: &str,
    range: &InstantRange,
) -> Result<Dataset, PipelineError> {
    if raw.is_empty() {
        return Ok(raw.clone());
    }
    let data = normalize(raw, &[column])?;
    apply(&data, &FilterSpec::new().with_range(column, *range))
}

impl MonitorDashboard {
    pub fn new(settings: &Settings) -> Self {
        Self {
            queries: settings.queries.clone(),
            limits: settings.dashboard.clone(),
        }
    }

    pub fn render(
        &self,
        source: &dyn DataSource,
        window: TimeWindow,
        now: NaiveDateTime,
    ) -> Result<MonitorView, DashboardError> {
        info!(
            target: "warehouse_dash::dashboard",
            window = %window,
            "Rendering monitor dashboard"
        );
        self.build(source, window, now)
            .inspect_err(|e| e.log_error())
    }

    fn build(
        &self,
        source: &dyn DataSource,
        window: TimeWindow,
        now: NaiveDateTime,
    ) -> Result<MonitorView, DashboardError> {
        let range = window.bounds(now);

        let usage = self.usage(source, &range)?;
        let storage = self.storage(source)?;
        let query_performance = self.query_performance(source, &range)?;
        let access_history = self.access_history(source, &range)?;

        info!(
            target: "warehouse_dash::dashboard",
            warehouses = usage.footer.active_warehouses,
            total_credits = %usage.footer.total_credits_used,
            "Rendered monitor dashboard"
        );

        Ok(MonitorView {
            window,
            start: range.lower(),
            end: range.upper(),
            warehouse_usage: usage.warehouse_usage,
            usage_heatmap: usage.usage_heatmap,
            credit_trend: usage.credit_trend,
            storage,
            query_performance,
            access_history,
            footer: usage.footer,
        })
    }

    fn usage(
        &self,
        source: &dyn DataSource,
        range: &InstantRange,
    ) -> Result<UsageSections, DashboardError> {
        let raw = source.query(&bind_range(&self.queries.metering_history, range))?;
        let metering = within(&raw, START_TIME, range)?;

        if metering.is_empty() {
            return Ok(UsageSections {
                warehouse_usage: Vec::new(),
                usage_heatmap: HeatmapMatrix::empty(),
                credit_trend: Vec::new(),
                footer: MonitorFooter {
                    total_credits_used: format!("{:.2}", 0.0),
                    active_warehouses: 0,
                },
            });
        }

        let by_warehouse = aggregate(
            &metering,
            &AggregateSpec::sum(CREDITS_USED).group_by(GroupingKey::column(NAME)),
        )?;
        let by_hour = aggregate(
            &metering,
            &AggregateSpec::sum(CREDITS_USED)
                .group_by(GroupingKey::column(NAME))
                .group_by(GroupingKey::hour_of(START_TIME)),
        )?;
        let by_day = aggregate(
            &metering,
            &AggregateSpec::sum(CREDITS_USED).group_by(GroupingKey::day_of(START_TIME)),
        )?;

        Ok(UsageSections {
            warehouse_usage: categorical_series(&by_warehouse)?,
            usage_heatmap: heatmap(&by_hour)?,
            credit_trend: time_series(&by_day)?,
            footer: MonitorFooter {
                total_credits_used: format_total(&metering, CREDITS_USED)?,
                active_warehouses: distinct_count(&metering, NAME)?,
            },
        })
    }

    /// Most recent `storage_days` snapshots, oldest first.
    fn storage(&self, source: &dyn DataSource) -> Result<Vec<StackedPoint>, DashboardError> {
        let raw = source.query(&self.queries.storage_usage)?;
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        let recent = normalize(&raw, &[USAGE_DATE])?
            .sorted_by(USAGE_DATE, false)?
            .head(self.limits.storage_days);
        Ok(stacked_series(&recent, USAGE_DATE, &STORAGE_LAYERS)?)
    }

    /// Average runtime per (warehouse, query type) for groups run more than
    /// `min_query_count` times, slowest first.
    fn query_performance(
        &self,
        source: &dyn DataSource,
        range: &InstantRange,
    ) -> Result<TableView, DashboardError> {
        let schema = Schema::new()
            .with_column(WAREHOUSE_NAME, SemanticType::Categorical)
            .with_column(QUERY_TYPE, SemanticType::Categorical)
            .with_column(AVG_EXECUTION_TIME_SECONDS, SemanticType::Numeric)
            .with_column(QUERY_COUNT, SemanticType::Numeric);

        let raw = source.query(&bind_range(&self.queries.query_history, range))?;
        let history = within(&raw, START_TIME, range)?;
        if history.is_empty() {
            return Ok(table(&Dataset::empty(schema)));
        }

        let avg = aggregate(
            &history,
            &AggregateSpec::avg(TOTAL_ELAPSED_TIME)
                .group_by(GroupingKey::column(WAREHOUSE_NAME))
                .group_by(GroupingKey::column(QUERY_TYPE)),
        )?;
        let count = aggregate(
            &history,
            &AggregateSpec::count(TOTAL_ELAPSED_TIME)
                .group_by(GroupingKey::column(WAREHOUSE_NAME))
                .group_by(GroupingKey::column(QUERY_TYPE)),
        )?;

        // Both reductions see the same keys in the same first-seen order
        let rows: Vec<Row> = avg
            .rows()
            .iter()
            .zip(count.rows())
            .filter(|(_, c)| c.value > self.limits.min_query_count as f64)
            .map(|(a, c)| {
                let mut values = a.key.clone();
                values.push(ScalarValue::Float64(a.value / MILLIS_PER_SECOND));
                values.push(ScalarValue::Int64(c.value as i64));
                Row::new(values)
            })
            .collect();

        debug!(
            target: "warehouse_dash::dashboard",
            groups = avg.len(),
            kept = rows.len(),
            "Query performance groups"
        );

        let ranked = Dataset::new(schema, rows)?.sorted_by(AVG_EXECUTION_TIME_SECONDS, false)?;
        Ok(table(&ranked))
    }

    /// Logins of the window, newest first, capped at `access_history_limit`.
    fn access_history(
        &self,
        source: &dyn DataSource,
        range: &InstantRange,
    ) -> Result<TableView, DashboardError> {
        let raw = source.query(&bind_range(&self.queries.login_history, range))?;
        let logins = within(&raw, EVENT_TIMESTAMP, range)?;
        if logins.is_empty() {
            return Ok(table(&logins));
        }
        let newest = logins
            .sorted_by(EVENT_TIMESTAMP, false)?
            .head(self.limits.access_history_limit);
        Ok(table(&newest))
    }
}

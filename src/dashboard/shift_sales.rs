use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::info;

use crate::engine::core::aggregate::{AggregateSpec, GroupingKey, aggregate};
use crate::engine::core::dataset::{Dataset, normalize};
use crate::engine::core::filter::{FilterSpec, InstantRange, apply};
use crate::engine::core::rank::top_n;
use crate::engine::core::reshape::{
    CategoryPoint, ScatterPoint, TimePoint, categorical_series, scatter, time_series,
};
use crate::engine::errors::{DashboardError, PipelineError};
use crate::engine::source::DataSource;
use crate::shared::config::Settings;

pub const DATE: &str = "DATE";
pub const CITY: &str = "CITY";
pub const SHIFT: &str = "SHIFT";
pub const SHIFT_SALES: &str = "SHIFT_SALES";
pub const CITY_POPULATION: &str = "CITY_POPULATION";

/// Sidebar defaults derived from the loaded data.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SalesFilters {
    /// Earliest and latest `DATE`; `None` when no row carries a date
    pub date_bounds: Option<(NaiveDate, NaiveDate)>,
    pub cities: Vec<String>,
}

/// What the user picked in the sidebar.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SalesSelection {
    /// `None` uses the full range of the data
    pub dates: Option<(NaiveDate, NaiveDate)>,
    /// `None` keeps every city; `Some(vec![])` keeps none
    pub cities: Option<Vec<String>>,
}

impl SalesSelection {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_dates(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.dates = Some((from, to));
        self
    }

    pub fn with_cities<I, S>(mut self, cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cities = Some(cities.into_iter().map(Into::into).collect());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ShiftSalesView {
    pub filters: SalesFilters,
    pub sales_over_time: Vec<TimePoint>,
    pub sales_by_shift: Vec<CategoryPoint>,
    pub sales_vs_population: Vec<ScatterPoint>,
    pub top_cities: Vec<CategoryPoint>,
}

#[derive(Debug, Clone)]
pub struct ShiftSalesDashboard {
    query: String,
    top_n: usize,
}

impl ShiftSalesDashboard {
    pub fn new(settings: &Settings) -> Self {
        Self {
            query: settings.queries.shift_sales.clone(),
            top_n: settings.dashboard.top_n,
        }
    }

    /// Date bounds and city choices of a dataset whose `DATE` column is normalized.
    pub fn filters(&self, data: &Dataset) -> Result<SalesFilters, PipelineError> {
        let dates: Vec<NaiveDateTime> = data
            .column(DATE)?
            .into_iter()
            .filter_map(|v| v.as_instant())
            .collect();
        let date_bounds = match (dates.iter().min(), dates.iter().max()) {
            (Some(lo), Some(hi)) => Some((lo.date(), hi.date())),
            _ => None,
        };

        let cities = data
            .unique_values(CITY)?
            .iter()
            .map(|v| v.to_string_repr())
            .collect();

        Ok(SalesFilters {
            date_bounds,
            cities,
        })
    }

    pub fn render(
        &self,
        source: &dyn DataSource,
        selection: &SalesSelection,
    ) -> Result<ShiftSalesView, DashboardError> {
        info!(
            target: "warehouse_dash::dashboard",
            query = %self.query,
            "Rendering shift sales dashboard"
        );
        self.build(source, selection)
            .inspect_err(|e| e.log_error())
    }

    fn build(
        &self,
        source: &dyn DataSource,
        selection: &SalesSelection,
    ) -> Result<ShiftSalesView, DashboardError> {
        let raw = source.query(&self.query)?;
        if raw.is_empty() {
            info!(
                target: "warehouse_dash::dashboard",
                "No shift sales rows, rendering empty dashboard"
            );
            return Ok(ShiftSalesView::default());
        }

        let data = normalize(&raw, &[DATE])?;
        let filters = self.filters(&data)?;

        let mut spec = FilterSpec::new().with_selection(CITY, selection.cities.as_deref());
        if let Some((from, to)) = selection.dates.or(filters.date_bounds) {
            spec = spec.with_range(DATE, InstantRange::from_dates(from, to)?);
        }
        let filtered = apply(&data, &spec)?;

        let by_day = aggregate(
            &filtered,
            &AggregateSpec::sum(SHIFT_SALES).group_by(GroupingKey::day_of(DATE)),
        )?;
        let by_shift = aggregate(
            &filtered,
            &AggregateSpec::sum(SHIFT_SALES).group_by(GroupingKey::column(SHIFT)),
        )?;
        let by_city_population = aggregate(
            &filtered,
            &AggregateSpec::sum(SHIFT_SALES)
                .group_by(GroupingKey::column(CITY))
                .group_by(GroupingKey::column(CITY_POPULATION)),
        )?;
        let by_city = aggregate(
            &filtered,
            &AggregateSpec::sum(SHIFT_SALES).group_by(GroupingKey::column(CITY)),
        )?;

        let view = ShiftSalesView {
            filters,
            sales_over_time: time_series(&by_day)?,
            sales_by_shift: categorical_series(&by_shift)?,
            sales_vs_population: scatter(&by_city_population)?,
            top_cities: categorical_series(&top_n(&by_city, self.top_n))?,
        };

        info!(
            target: "warehouse_dash::dashboard",
            rows = filtered.len(),
            days = view.sales_over_time.len(),
            cities = view.top_cities.len(),
            "Rendered shift sales dashboard"
        );
        Ok(view)
    }
}

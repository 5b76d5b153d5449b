use chrono::NaiveDateTime;

use crate::engine::core::dataset::{Dataset, Row, Schema};
use crate::engine::types::{ScalarValue, SemanticType};

use super::timestamp_factory::TimestampFactory;

pub struct DatasetFactory {
    schema: Schema,
    rows: Vec<Vec<ScalarValue>>,
}

impl DatasetFactory {
    pub fn new() -> Self {
        Self {
            schema: Schema::new(),
            rows: Vec::new(),
        }
    }

    /// DATE, CITY, SHIFT, SHIFT_SALES, CITY_POPULATION with DATE already normalized
    pub fn shift_sales() -> Self {
        Self::new()
            .with_column("DATE", SemanticType::Instant)
            .with_column("CITY", SemanticType::Categorical)
            .with_column("SHIFT", SemanticType::Categorical)
            .with_column("SHIFT_SALES", SemanticType::Numeric)
            .with_column("CITY_POPULATION", SemanticType::Numeric)
    }

    /// START_TIME, NAME, CREDITS_USED with START_TIME already normalized
    pub fn metering() -> Self {
        Self::new()
            .with_column("START_TIME", SemanticType::Instant)
            .with_column("NAME", SemanticType::Categorical)
            .with_column("CREDITS_USED", SemanticType::Numeric)
    }

    /// The three-row sales fixture: A/10 and B/5 on 2024-01-01, A/7 on 2024-01-02
    pub fn three_city_sales() -> Dataset {
        Self::shift_sales()
            .with_sale(TimestampFactory::date(2024, 1, 1), "A", "AM", 10.0, 1000.0)
            .with_sale(TimestampFactory::date(2024, 1, 1), "B", "PM", 5.0, 500.0)
            .with_sale(TimestampFactory::date(2024, 1, 2), "A", "PM", 7.0, 1000.0)
            .create()
    }

    pub fn with_column(mut self, name: &str, ty: SemanticType) -> Self {
        self.schema = self.schema.with_column(name, ty);
        self
    }

    pub fn with_row(mut self, values: Vec<ScalarValue>) -> Self {
        self.rows.push(values);
        self
    }

    pub fn with_sale(
        self,
        date: NaiveDateTime,
        city: &str,
        shift: &str,
        sales: f64,
        population: f64,
    ) -> Self {
        self.with_row(vec![
            date.into(),
            city.into(),
            shift.into(),
            sales.into(),
            population.into(),
        ])
    }

    pub fn with_usage(self, start: NaiveDateTime, name: &str, credits: f64) -> Self {
        self.with_row(vec![start.into(), name.into(), credits.into()])
    }

    pub fn create(self) -> Dataset {
        let rows = self.rows.into_iter().map(Row::new).collect();
        Dataset::new(self.schema, rows).unwrap()
    }
}

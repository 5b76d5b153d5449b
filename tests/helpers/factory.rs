pub use super::factories::{AggregatedResultFactory, DatasetFactory, TimestampFactory};

pub struct Factory;

impl Factory {
    pub fn dataset() -> DatasetFactory {
        DatasetFactory::new()
    }

    pub fn shift_sales() -> DatasetFactory {
        DatasetFactory::shift_sales()
    }

    pub fn metering() -> DatasetFactory {
        DatasetFactory::metering()
    }

    pub fn aggregated_result() -> AggregatedResultFactory {
        AggregatedResultFactory::new()
    }
}

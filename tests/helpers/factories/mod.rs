pub mod aggregated_result_factory;
pub mod dataset_factory;
pub mod timestamp_factory;

pub use aggregated_result_factory::AggregatedResultFactory;
pub use dataset_factory::DatasetFactory;
pub use timestamp_factory::TimestampFactory;

#[cfg(test)]
mod aggregated_result_factory_test;
#[cfg(test)]
mod dataset_factory_test;
#[cfg(test)]
mod timestamp_factory_test;

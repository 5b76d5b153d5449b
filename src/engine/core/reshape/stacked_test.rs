use crate::engine::core::reshape::stacked_series;
use crate::engine::errors::PipelineError;
use crate::engine::types::{ScalarValue, SemanticType};
use crate::test_helpers::factories::{DatasetFactory, TimestampFactory};
use crate::test_helpers::factory::Factory;

fn storage() -> DatasetFactory {
    Factory::dataset()
        .with_column("USAGE_DATE", SemanticType::Instant)
        .with_column("STORAGE_TB", SemanticType::Numeric)
        .with_column("STAGE_TB", SemanticType::Numeric)
        .with_column("FAILSAFE_TB", SemanticType::Numeric)
}

const LAYERS: [&str; 3] = ["STORAGE_TB", "STAGE_TB", "FAILSAFE_TB"];

#[test]
fn stacks_storage_layers_ascending() {
    let dataset = storage()
        .with_row(vec![
            TimestampFactory::date(2024, 1, 2).into(),
            2.0.into(),
            0.2.into(),
            ScalarValue::Null,
        ])
        .with_row(vec![
            TimestampFactory::date(2024, 1, 1).into(),
            1.0.into(),
            0.1.into(),
            0.01.into(),
        ])
        .create();

    let points = stacked_series(&dataset, "USAGE_DATE", &LAYERS).unwrap();

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].instant, TimestampFactory::date(2024, 1, 1));
    assert_eq!(points[0].values["STORAGE_TB"], Some(1.0));
    assert_eq!(points[1].values["FAILSAFE_TB"], None);
    assert_eq!(
        points[1].values.keys().collect::<Vec<_>>(),
        vec!["STORAGE_TB", "STAGE_TB", "FAILSAFE_TB"]
    );
}

#[test]
fn rows_without_instant_are_skipped() {
    let dataset = storage()
        .with_row(vec![ScalarValue::Null, 1.0.into(), 1.0.into(), 1.0.into()])
        .create();

    assert!(stacked_series(&dataset, "USAGE_DATE", &LAYERS).unwrap().is_empty());
}

#[test]
fn missing_layer_column_fails() {
    let dataset = storage().create();

    assert_eq!(
        stacked_series(&dataset, "USAGE_DATE", &["DATABASE_TB"]).unwrap_err(),
        PipelineError::missing_column("DATABASE_TB")
    );
}

#[test]
fn unnormalized_time_column_fails() {
    let dataset = DatasetFactory::new()
        .with_column("USAGE_DATE", SemanticType::Categorical)
        .with_column("STORAGE_TB", SemanticType::Numeric)
        .create();

    assert!(matches!(
        stacked_series(&dataset, "USAGE_DATE", &["STORAGE_TB"]),
        Err(PipelineError::SchemaMismatch { .. })
    ));
}

use super::dataset_factory::DatasetFactory;
use crate::engine::types::SemanticType;

#[test]
fn shift_sales_schema_is_ordered() {
    let dataset = DatasetFactory::shift_sales().create();
    let names: Vec<&str> = dataset.schema().names().collect();
    assert_eq!(
        names,
        vec!["DATE", "CITY", "SHIFT", "SHIFT_SALES", "CITY_POPULATION"]
    );
    assert_eq!(dataset.schema().type_of("DATE"), Some(SemanticType::Instant));
    assert!(dataset.is_empty());
}

#[test]
fn three_city_sales_has_three_rows() {
    let dataset = DatasetFactory::three_city_sales();
    assert_eq!(dataset.len(), 3);
}

use serde_json::{Map, Value as JsonValue, json};

use crate::engine::source::dataset_from_records;
use crate::engine::types::{ScalarValue, SemanticType};

fn records(value: JsonValue) -> Vec<Map<String, JsonValue>> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_object().unwrap().clone())
        .collect()
}

#[test]
fn infers_types_and_column_order() {
    let dataset = dataset_from_records(&records(json!([
        {"DATE": "2024-01-01", "CITY": "A", "SHIFT_SALES": 10},
        {"DATE": "2024-01-02", "CITY": "B", "SHIFT_SALES": 7.5, "SHIFT": "PM"}
    ])))
    .unwrap();

    let schema: Vec<(&str, SemanticType)> = dataset.schema().iter().collect();
    assert_eq!(
        schema,
        vec![
            ("DATE", SemanticType::Categorical),
            ("CITY", SemanticType::Categorical),
            ("SHIFT_SALES", SemanticType::Numeric),
            ("SHIFT", SemanticType::Categorical),
        ]
    );
    assert_eq!(dataset.rows()[0].get(2), Some(&ScalarValue::Int64(10)));
    assert_eq!(dataset.rows()[1].get(2), Some(&ScalarValue::Float64(7.5)));
    assert_eq!(dataset.rows()[0].get(3), Some(&ScalarValue::Null));
}

#[test]
fn mixed_column_becomes_text() {
    let dataset = dataset_from_records(&records(json!([
        {"CODE": 7},
        {"CODE": "X7"},
        {"CODE": true}
    ])))
    .unwrap();

    assert_eq!(dataset.schema().type_of("CODE"), Some(SemanticType::Categorical));
    assert_eq!(
        dataset.column("CODE").unwrap(),
        vec![
            &ScalarValue::from("7"),
            &ScalarValue::from("X7"),
            &ScalarValue::from("true"),
        ]
    );
}

#[test]
fn all_null_column_is_categorical() {
    let dataset = dataset_from_records(&records(json!([{"NOTE": null}]))).unwrap();
    assert_eq!(dataset.schema().type_of("NOTE"), Some(SemanticType::Categorical));
}

#[test]
fn no_records_gives_empty_dataset() {
    let dataset = dataset_from_records(&[]).unwrap();
    assert!(dataset.is_empty());
    assert!(dataset.schema().is_empty());
}

use super::aggregated_result_factory::AggregatedResultFactory;
use crate::engine::types::SemanticType;

#[test]
fn categories_builds_single_key_result() {
    let result = AggregatedResultFactory::categories("CITY", "SALES", &[("A", 1.0), ("B", 2.0)]);
    assert_eq!(result.len(), 2);
    assert_eq!(result.metric(), "SALES");
    assert_eq!(
        result.key_columns(),
        &[("CITY".to_string(), SemanticType::Categorical)]
    );
    assert_eq!(result.rows()[1].value, 2.0);
}

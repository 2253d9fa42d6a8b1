//! Domain-specific assertions with context-rich failure messages.

use osdex_core::types::ServiceOrder;

/// Assert that a result set contains exactly the given codes, in order.
pub fn assert_codes(results: &[&ServiceOrder], expected: &[&str]) {
    let actual: Vec<&str> = results.iter().map(|o| o.code.as_str()).collect();
    assert_eq!(
        actual, expected,
        "result codes differ\n  expected: {expected:?}\n  actual:   {actual:?}"
    );
}

/// Assert that every result is a record from `dataset` (search must never
/// fabricate records).
pub fn assert_results_from_dataset(results: &[&ServiceOrder], dataset: &[ServiceOrder]) {
    for result in results {
        assert!(
            dataset.iter().any(|order| order == *result),
            "result {:?} is not part of the dataset",
            result.code
        );
    }
}

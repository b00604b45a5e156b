use crate::data::{Example, supplier_dataset};

/// Supplier rows 1, 6, 7 and 14 (1-based) held out for testing.
const FIXED_TEST_ROWS: [usize; 4] = [0, 5, 6, 13];

/// A hand-checked split of the supplier table: `(train, test)` with 10 and 4
/// examples, both in table order.
///
/// Every criterion grows the same 10-node tree on the training half and
/// classifies all four test rows correctly.
pub fn fixed_split() -> (Vec<Example>, Vec<Example>) {
    let (test, train): (Vec<_>, Vec<_>) = supplier_dataset()
        .examples()
        .iter()
        .cloned()
        .enumerate()
        .partition(|(i, _)| FIXED_TEST_ROWS.contains(i));
    (
        train.into_iter().map(|(_, e)| e).collect(),
        test.into_iter().map(|(_, e)| e).collect(),
    )
}

pub fn toy_attributes() -> Vec<String> {
    vec!["colour".to_string(), "size".to_string()]
}

/// Three examples over [`toy_attributes`], all labelled `Yes`.
pub fn single_class_examples() -> Vec<Example> {
    vec![
        Example::from_pairs([("colour", "red"), ("size", "small")], "Yes"),
        Example::from_pairs([("colour", "blue"), ("size", "large")], "Yes"),
        Example::from_pairs([("colour", "red"), ("size", "large")], "Yes"),
    ]
}

use crate::data::{Dataset, Example};

pub const SUPPLIER_ATTRIBUTES: [&str; 4] = ["Price", "Quality", "Delivery time", "Reliability"];
pub const SUPPLIER_TARGET: &str = "Decision";

const SUPPLIER_ROWS: [([&str; 4], &str); 14] = [
    (["low", "high", "fast", "high"], "Yes"),
    (["medium", "high", "normal", "high"], "Yes"),
    (["high", "high", "fast", "high"], "No"),
    (["low", "medium", "slow", "medium"], "Yes"),
    (["low", "low", "slow", "low"], "No"),
    (["medium", "medium", "normal", "medium"], "Yes"),
    (["high", "medium", "slow", "medium"], "No"),
    (["medium", "low", "fast", "high"], "No"),
    (["low", "high", "slow", "medium"], "Yes"),
    (["medium", "high", "slow", "low"], "No"),
    (["high", "high", "normal", "medium"], "No"),
    (["low", "medium", "normal", "high"], "Yes"),
    (["medium", "medium", "fast", "low"], "No"),
    (["low", "low", "normal", "medium"], "No"),
];

/// The 14-row supplier-selection table: four ternary attributes and a
/// Yes/No decision.
pub fn supplier_dataset() -> Dataset {
    let examples = SUPPLIER_ROWS
        .iter()
        .map(|(values, label)| {
            Example::from_pairs(SUPPLIER_ATTRIBUTES.iter().copied().zip(values.iter().copied()), *label)
        })
        .collect();

    Dataset::new(
        SUPPLIER_ATTRIBUTES.iter().map(|s| s.to_string()).collect(),
        SUPPLIER_TARGET,
        examples,
    )
    .unwrap_or_else(|_| unreachable!("built-in rows are complete"))
}

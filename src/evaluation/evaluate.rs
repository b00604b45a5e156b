use crate::data::Example;
use crate::error::TreeError;
use crate::evaluation::{BinaryClassificationEvaluator, PerformanceEvaluator, PerformanceEvaluatorExt};
use crate::tree::{Criterion, TreeBuilder, majority_label, predict};
use std::time::{Duration, Instant};
use tracing::info;

/// Outcome of inducing one tree and scoring it on held-out examples.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    pub criterion: Criterion,
    pub accuracy: f64,
    pub f1: f64,
    /// Wall-clock time spent inducing the tree; prediction is not included.
    pub elapsed: Duration,
    pub node_count: usize,
}

/// Builds a tree on `train` with `criterion` and scores it on `test`.
///
/// Inputs the tree cannot route get the training majority label. An empty
/// `test` still builds the tree and reports zero accuracy and F1.
pub fn evaluate(
    train: &[Example],
    test: &[Example],
    attributes: &[String],
    criterion: Criterion,
    positive_label: &str,
) -> Result<EvaluationResult, TreeError> {
    let start = Instant::now();
    let tree = TreeBuilder::new(criterion).build(train, attributes)?;
    let elapsed = start.elapsed();

    let default_label = majority_label(train).ok_or(TreeError::EmptyTrainingSet)?;
    let mut evaluator = BinaryClassificationEvaluator::new(positive_label);
    for example in test {
        evaluator.add_result(example.label(), predict(&tree, example.attributes(), default_label));
    }

    let result = EvaluationResult {
        criterion,
        accuracy: evaluator.metric("accuracy").unwrap_or(0.0),
        f1: evaluator.metric("f1").unwrap_or(0.0),
        elapsed,
        node_count: tree.node_count(),
    };
    info!(
        algorithm = criterion.algorithm_name(),
        accuracy = result.accuracy,
        f1 = result.f1,
        nodes = result.node_count,
        elapsed_us = elapsed.as_micros() as u64,
        "evaluated"
    );
    Ok(result)
}

/// Accuracy of always predicting the training majority label on `test`.
pub fn majority_baseline(train: &[Example], test: &[Example]) -> f64 {
    let Some(majority) = majority_label(train) else {
        return 0.0;
    };
    if test.is_empty() {
        return 0.0;
    }
    let hits = test.iter().filter(|e| e.label() == majority).count();
    hits as f64 / test.len() as f64
}

mod evaluate;
mod evaluators;
mod measurement;
mod summary;

pub use evaluate::{EvaluationResult, evaluate, majority_baseline};
pub use evaluators::{BinaryClassificationEvaluator, PerformanceEvaluator, PerformanceEvaluatorExt};
pub use measurement::Measurement;
pub use summary::{SummaryFormat, SummaryRecord, SummaryTable};

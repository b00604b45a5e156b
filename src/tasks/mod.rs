mod comparison;

pub use comparison::{ComparisonReport, ComparisonTask};

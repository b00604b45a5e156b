mod builder;
mod criterion;
mod label_counts;
mod node;
pub mod partition;
mod predictor;
mod render;
pub mod split_criteria;

pub use builder::{MIN_MERIT, TreeBuilder, build};
pub use criterion::Criterion;
pub use label_counts::{LabelCounts, majority_label};
pub use node::{Branch, TreeNode};
pub use predictor::{classify, predict};
pub use render::render;

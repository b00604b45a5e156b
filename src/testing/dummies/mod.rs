mod datasets;

pub use datasets::{fixed_split, single_class_examples, toy_attributes};

mod dataset;
mod example;
pub mod loader;
mod split;
mod supplier;
mod writer;

pub use dataset::Dataset;
pub use example::{AttributeValues, Example};
pub use loader::{ReadOptions, read_dataset, read_dataset_from, read_dataset_with};
pub use split::{TestSize, train_test_split};
pub use supplier::{SUPPLIER_ATTRIBUTES, SUPPLIER_TARGET, supplier_dataset};
pub use writer::write_dataset;

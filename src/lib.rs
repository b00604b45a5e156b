pub mod config;
pub mod data;
pub mod error;
pub mod evaluation;
pub mod tasks;
pub mod tree;
pub mod ui;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use error::{Error, Result};

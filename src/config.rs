use crate::data::TestSize;
use crate::error::ConfigError;
use crate::tree::Criterion;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

const DEFAULT_SEED: u64 = 42;
fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_positive_label() -> String {
    "Yes".to_string()
}

fn default_criteria() -> Vec<Criterion> {
    Criterion::iter().collect()
}

/// Settings for one comparison run.
///
/// Every field is optional in JSON; a missing `dataset` means the built-in
/// supplier table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComparisonConfig {
    #[serde(default)]
    pub dataset: Option<PathBuf>,

    #[serde(default)]
    pub test_size: TestSize,

    #[serde(default = "default_seed")]
    pub seed: u64,

    #[serde(default = "default_positive_label")]
    pub positive_label: String,

    #[serde(default = "default_criteria")]
    pub criteria: Vec<Criterion>,

    #[serde(default)]
    pub parallel: bool,

    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            test_size: TestSize::default(),
            seed: default_seed(),
            positive_label: default_positive_label(),
            criteria: default_criteria(),
            parallel: false,
            output: None,
        }
    }
}

impl ComparisonConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
            _ => ConfigError::Io(e),
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.criteria.is_empty() {
            return Err(ConfigError::NoCriteria);
        }
        if let TestSize::Fraction(f) = self.test_size {
            if !(f > 0.0 && f < 1.0) {
                return Err(ConfigError::InvalidTestSize(f.to_string()));
            }
        }
        Ok(())
    }
}

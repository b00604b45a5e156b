use crate::data::Example;
use crate::error::DatasetError;

/// Ordered examples plus the attribute schema they were loaded with.
///
/// Every example carries a value for every attribute in
/// [`attribute_names`](Dataset::attribute_names); [`Dataset::new`] rejects
/// rows that do not.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    attribute_names: Vec<String>,
    target_name: String,
    examples: Vec<Example>,
}

impl Dataset {
    pub fn new<T: Into<String>>(
        attribute_names: Vec<String>,
        target_name: T,
        examples: Vec<Example>,
    ) -> Result<Self, DatasetError> {
        for (row, example) in examples.iter().enumerate() {
            if let Some(missing) = attribute_names
                .iter()
                .find(|name| example.value(name).is_none())
            {
                return Err(DatasetError::MissingValue {
                    row,
                    attribute: missing.clone(),
                });
            }
        }
        Ok(Self {
            attribute_names,
            target_name: target_name.into(),
            examples,
        })
    }

    pub fn attribute_names(&self) -> &[String] {
        &self.attribute_names
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Distinct class labels in first-encounter order.
    pub fn class_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for e in &self.examples {
            if !labels.contains(&e.label()) {
                labels.push(e.label());
            }
        }
        labels
    }
}

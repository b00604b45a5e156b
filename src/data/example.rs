use std::collections::HashMap;

/// Attribute name to discrete value.
pub type AttributeValues = HashMap<String, String>;

/// One labeled row: discrete attribute values plus a class label.
///
/// Values and labels are opaque tokens compared by string equality; no
/// ordering is assumed between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    attributes: AttributeValues,
    label: String,
}

impl Example {
    pub fn new<L: Into<String>>(attributes: AttributeValues, label: L) -> Self {
        Self {
            attributes,
            label: label.into(),
        }
    }

    /// Convenience constructor from `(attribute, value)` pairs.
    pub fn from_pairs<I, K, V, L>(pairs: I, label: L) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
        L: Into<String>,
    {
        let attributes = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::new(attributes, label)
    }

    #[inline]
    pub fn value(&self, attribute: &str) -> Option<&str> {
        self.attributes.get(attribute).map(String::as_str)
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn attributes(&self) -> &AttributeValues {
        &self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_exposes_values_and_label() {
        let e = Example::from_pairs([("Price", "low"), ("Quality", "high")], "Yes");
        assert_eq!(e.value("Price"), Some("low"));
        assert_eq!(e.value("Quality"), Some("high"));
        assert_eq!(e.value("Reliability"), None);
        assert_eq!(e.label(), "Yes");
        assert_eq!(e.attributes().len(), 2);
    }
}

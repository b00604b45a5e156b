use crate::data::AttributeValues;
use crate::tree::TreeNode;

/// Walks `tree` for one set of attribute values.
///
/// Returns `None` when the input lacks an attribute tested on the path, or
/// carries a value that was never observed at that node.
pub fn classify<'t>(tree: &'t TreeNode, attributes: &AttributeValues) -> Option<&'t str> {
    let mut node = tree;
    loop {
        match node {
            TreeNode::Leaf { label } => return Some(label.as_str()),
            TreeNode::Decision { attribute, .. } => {
                let value = attributes.get(attribute)?;
                node = node.child(value)?;
            }
        }
    }
}

/// Like [`classify`], substituting `default_label` whenever the walk falls
/// off the tree or ends in a leaf with an empty label.
pub fn predict<'a>(tree: &'a TreeNode, attributes: &AttributeValues, default_label: &'a str) -> &'a str {
    match classify(tree, attributes) {
        Some(label) if !label.is_empty() => label,
        _ => default_label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Example, supplier_dataset};
    use crate::testing::dummies::fixed_split;
    use crate::tree::{Branch, Criterion, build};

    fn values(pairs: &[(&str, &str)]) -> AttributeValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn stub() -> TreeNode {
        TreeNode::Decision {
            attribute: "Price".into(),
            children: vec![
                Branch {
                    value: "low".into(),
                    node: TreeNode::leaf("Yes"),
                },
                Branch {
                    value: "high".into(),
                    node: TreeNode::leaf(""),
                },
            ],
        }
    }

    #[test]
    fn descends_to_the_matching_leaf() {
        let t = stub();
        assert_eq!(classify(&t, &values(&[("Price", "low")])), Some("Yes"));
        assert_eq!(predict(&t, &values(&[("Price", "low")]), "No"), "Yes");
    }

    #[test]
    fn unseen_value_uses_default() {
        let t = stub();
        let input = values(&[("Price", "medium")]);
        assert_eq!(classify(&t, &input), None);
        assert_eq!(predict(&t, &input, "No"), "No");
    }

    #[test]
    fn missing_attribute_uses_default() {
        let t = stub();
        let input = values(&[("Quality", "high")]);
        assert_eq!(classify(&t, &input), None);
        assert_eq!(predict(&t, &input, "No"), "No");
    }

    #[test]
    fn empty_leaf_label_uses_default() {
        let t = stub();
        assert_eq!(predict(&t, &values(&[("Price", "high")]), "No"), "No");
    }

    #[test]
    fn leaf_root_ignores_input() {
        let t = TreeNode::leaf("Yes");
        assert_eq!(classify(&t, &AttributeValues::new()), Some("Yes"));
    }

    #[test]
    fn fixed_split_predictions() {
        let (train, test) = fixed_split();
        let attributes = supplier_dataset().attribute_names().to_vec();
        for c in [Criterion::InformationGain, Criterion::ChiSquare] {
            let tree = build(&train, &attributes, c).unwrap();
            let predicted: Vec<&str> = test
                .iter()
                .map(|e: &Example| predict(&tree, e.attributes(), "No"))
                .collect();
            assert_eq!(predicted, vec!["Yes", "Yes", "No", "No"], "{c}");
        }
    }
}

use crate::data::Example;
use crate::error::TreeError;
use crate::tree::node::{Branch, TreeNode};
use crate::tree::partition::partition;
use crate::tree::{Criterion, LabelCounts};
use tracing::{debug, trace};

/// A best score at or below this is treated as "no useful split".
pub const MIN_MERIT: f64 = 1e-9;

/// Recursive top-down induction driven by one [`Criterion`].
#[derive(Debug, Clone, Copy)]
pub struct TreeBuilder {
    criterion: Criterion,
}

impl TreeBuilder {
    pub fn new(criterion: Criterion) -> Self {
        Self { criterion }
    }

    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    /// Induces a tree over `examples` using the attributes in `attributes`,
    /// which are considered in the given order.
    ///
    /// Deterministic: equal inputs always give structurally equal trees.
    pub fn build(&self, examples: &[Example], attributes: &[String]) -> Result<TreeNode, TreeError> {
        let fallback = LabelCounts::from_examples(examples)
            .majority()
            .ok_or(TreeError::EmptyTrainingSet)?;

        let refs: Vec<&Example> = examples.iter().collect();
        let attrs: Vec<&str> = attributes.iter().map(String::as_str).collect();
        let tree = self.build_node(&refs, &attrs, fallback);

        debug!(
            criterion = %self.criterion,
            nodes = tree.node_count(),
            depth = tree.depth(),
            "tree induced"
        );
        Ok(tree)
    }

    fn build_node<'a>(&self, examples: &[&'a Example], attributes: &[&str], fallback: &'a str) -> TreeNode {
        let counts = LabelCounts::from_examples(examples.iter().copied());
        let majority = counts.majority().unwrap_or(fallback);

        if counts.is_pure() {
            trace!(label = majority, size = examples.len(), "pure leaf");
            return TreeNode::leaf(majority);
        }
        if examples.is_empty() || attributes.is_empty() {
            trace!(label = majority, size = examples.len(), "exhausted, majority leaf");
            return TreeNode::leaf(majority);
        }

        let mut best: Option<(&str, f64)> = None;
        for &attribute in attributes {
            let score = self.criterion.score(examples, attribute);
            trace!(attribute, score, "candidate");
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((attribute, score));
            }
        }

        let Some((chosen, score)) = best.filter(|(_, s)| *s > MIN_MERIT) else {
            trace!(label = majority, size = examples.len(), "no informative split, majority leaf");
            return TreeNode::leaf(majority);
        };
        debug!(
            attribute = chosen,
            score,
            range = self.criterion.range_of_merit(examples),
            size = examples.len(),
            "split"
        );

        let remaining: Vec<&str> = attributes.iter().copied().filter(|a| *a != chosen).collect();
        let children = partition(examples.iter().copied(), chosen)
            .into_iter()
            .map(|bucket| {
                let node = if bucket.examples.is_empty() {
                    TreeNode::leaf(majority)
                } else {
                    self.build_node(&bucket.examples, &remaining, majority)
                };
                Branch {
                    value: bucket.value.to_string(),
                    node,
                }
            })
            .collect();

        TreeNode::Decision {
            attribute: chosen.to_string(),
            children,
        }
    }
}

/// Shorthand for `TreeBuilder::new(criterion).build(examples, attributes)`.
pub fn build(examples: &[Example], attributes: &[String], criterion: Criterion) -> Result<TreeNode, TreeError> {
    TreeBuilder::new(criterion).build(examples, attributes)
}

use serde::{Deserialize, Serialize};

/// One outgoing edge of a decision node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub value: String,
    pub node: TreeNode,
}

/// Induced decision tree.
///
/// A decision node has exactly one branch per attribute value observed in
/// its training subset, in first-encounter order, and owns its subtrees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Leaf { label: String },
    Decision { attribute: String, children: Vec<Branch> },
}

impl TreeNode {
    pub fn leaf<L: Into<String>>(label: L) -> Self {
        TreeNode::Leaf {
            label: label.into(),
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// Branches of a decision node; empty for a leaf.
    pub fn children(&self) -> &[Branch] {
        match self {
            TreeNode::Leaf { .. } => &[],
            TreeNode::Decision { children, .. } => children,
        }
    }

    /// Subtree reached by `value`, if that value was observed here.
    pub fn child(&self, value: &str) -> Option<&TreeNode> {
        self.children()
            .iter()
            .find(|b| b.value == value)
            .map(|b| &b.node)
    }

    /// Total number of nodes, leaves included.
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(|b| b.node.node_count())
            .sum::<usize>()
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Decision { children, .. } => children.iter().map(|b| b.node.leaf_count()).sum(),
        }
    }

    /// Number of decision levels on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 0,
            TreeNode::Decision { children, .. } => {
                1 + children.iter().map(|b| b.node.depth()).max().unwrap_or(0)
            }
        }
    }
}

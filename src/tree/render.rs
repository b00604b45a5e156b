use crate::tree::TreeNode;
use std::fmt::{self, Display, Formatter, Write};

/// Text view of a tree, one node per line.
///
/// Decision nodes show as `[attribute]`, each branch as `value -> label` or
/// `value -> [attribute]`, indented with box-drawing guides.
pub fn render(tree: &TreeNode) -> String {
    tree.to_string()
}

fn write_tree<W: Write>(out: &mut W, tree: &TreeNode) -> fmt::Result {
    writeln!(out, "{}", node_label(tree))?;
    write_children(out, tree, "")
}

fn write_children<W: Write>(out: &mut W, node: &TreeNode, prefix: &str) -> fmt::Result {
    let children = node.children();
    for (i, branch) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let (elbow, guide) = if last { ("└── ", "    ") } else { ("├── ", "│   ") };
        writeln!(out, "{prefix}{elbow}{} -> {}", branch.value, node_label(&branch.node))?;
        write_children(out, &branch.node, &format!("{prefix}{guide}"))?;
    }
    Ok(())
}

fn node_label(node: &TreeNode) -> String {
    match node {
        TreeNode::Leaf { label } => label.clone(),
        TreeNode::Decision { attribute, .. } => format!("[{attribute}]"),
    }
}

impl Display for TreeNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_tree(f, self)
    }
}

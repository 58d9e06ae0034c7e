//! Hierarchy rendering with termtree
//!
//! Implemented as a trait so the domain tree stays free of display crates.

use termtree::Tree;

use crate::domain::{display_name_for_code, Node};

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for Node {
    fn to_tree_string(&self) -> Tree<String> {
        to_tree_at(self, 0)
    }
}

fn to_tree_at(node: &Node, depth: usize) -> Tree<String> {
    let label = match node {
        Node::Leaf(record) => format!(
            "{} {} [{}] {}",
            record.id(),
            record.recipient(),
            record.pickup_code(),
            record.status_label()
        ),
        // carrier groups are keyed by code
        Node::Category { name, .. } if depth == 2 => {
            format!("{} ({})", display_name_for_code(name), name)
        }
        Node::Category { name, .. } => name.clone(),
    };

    let leaves: Vec<_> = node
        .children()
        .iter()
        .map(|child| to_tree_at(child, depth + 1))
        .collect();

    Tree::new(label).with_leaves(leaves)
}

//! Owned tree of category and leaf nodes.
//!
//! Every node owns its children outright; dropping a node drops its subtree.

use std::collections::VecDeque;

use crate::domain::record::ParcelRecord;

/// A tree vertex: either a named category with ordered children, or a leaf
/// holding a parcel record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Category { name: String, children: Vec<Node> },
    Leaf(ParcelRecord),
}

/// How far a leaf search runs once a match is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPolicy {
    /// Stop at the first matching leaf in level order.
    FirstMatch,
    /// Visit every leaf and collect all matches.
    Exhaustive,
}

/// Position of a node below some ancestor, as child indices per level.
pub type NodePath = Vec<usize>;

impl Node {
    pub fn category(name: impl Into<String>) -> Self {
        Node::Category {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Category holding `children` in the given order.
    pub fn category_with(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Category {
            name: name.into(),
            children,
        }
    }

    pub fn leaf(record: ParcelRecord) -> Self {
        Node::Leaf(record)
    }

    /// Category name, or the record id for leaves.
    pub fn name(&self) -> &str {
        match self {
            Node::Category { name, .. } => name,
            Node::Leaf(record) => record.id(),
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Category { children, .. } => children,
            Node::Leaf(_) => &[],
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn record(&self) -> Option<&ParcelRecord> {
        match self {
            Node::Leaf(record) => Some(record),
            Node::Category { .. } => None,
        }
    }

    pub fn record_mut(&mut self) -> Option<&mut ParcelRecord> {
        match self {
            Node::Leaf(record) => Some(record),
            Node::Category { .. } => None,
        }
    }

    /// Linear scan of the immediate children for an exact name match.
    pub fn find_child(&self, name: &str) -> Option<&Node> {
        self.children().iter().find(|child| child.name() == name)
    }

    pub fn find_child_mut(&mut self, name: &str) -> Option<&mut Node> {
        match self {
            Node::Category { children, .. } => {
                children.iter_mut().find(|child| child.name() == name)
            }
            Node::Leaf(_) => None,
        }
    }

    pub fn descendant(&self, path: &[usize]) -> Option<&Node> {
        path.iter()
            .try_fold(self, |node, &idx| node.children().get(idx))
    }

    pub fn descendant_mut(&mut self, path: &[usize]) -> Option<&mut Node> {
        let mut node = self;
        for &idx in path {
            node = match node {
                Node::Category { children, .. } => children.get_mut(idx)?,
                Node::Leaf(_) => return None,
            };
        }
        Some(node)
    }

    /// Breadth-first search of the leaves below this node.
    ///
    /// The queue starts with the direct children and fans out level by level.
    /// Returns the paths of matching leaves in level order; with
    /// [`SearchPolicy::FirstMatch`] at most one path is returned.
    pub fn search_leaves<F>(&self, policy: SearchPolicy, mut matches: F) -> Vec<NodePath>
    where
        F: FnMut(&ParcelRecord) -> bool,
    {
        let mut hits = Vec::new();
        let mut queue: VecDeque<(NodePath, &Node)> = self
            .children()
            .iter()
            .enumerate()
            .map(|(idx, child)| (vec![idx], child))
            .collect();

        while let Some((path, node)) = queue.pop_front() {
            match node {
                Node::Leaf(record) => {
                    if matches(record) {
                        hits.push(path);
                        if policy == SearchPolicy::FirstMatch {
                            break;
                        }
                    }
                }
                Node::Category { children, .. } => {
                    for (idx, child) in children.iter().enumerate() {
                        let mut child_path = path.clone();
                        child_path.push(idx);
                        queue.push_back((child_path, child));
                    }
                }
            }
        }
        hits
    }

    /// Level-order iterator over this node and all descendants, with depth.
    pub fn level_order(&self) -> LevelOrder<'_> {
        LevelOrder {
            queue: VecDeque::from([(0, self)]),
        }
    }

    pub fn leaf_count(&self) -> usize {
        self.level_order().filter(|(_, node)| node.is_leaf()).count()
    }
}

/// Breadth-first iterator yielding `(depth, node)`; the start node has depth 0.
pub struct LevelOrder<'a> {
    queue: VecDeque<(usize, &'a Node)>,
}

impl<'a> Iterator for LevelOrder<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.queue.pop_front()?;
        self.queue
            .extend(node.children().iter().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::carrier::Carrier;
    use crate::domain::record::PickupCode;

    fn parcel(id: &str, recipient: &str, code: &str) -> Node {
        Node::leaf(ParcelRecord::new(
            id,
            recipient,
            PickupCode::new(code).unwrap(),
            Carrier::Yunda,
        ))
    }

    // station
    // ├── SF
    // │   └── p1
    // └── YD
    //     ├── p2
    //     └── p3
    fn sample() -> Node {
        Node::category_with(
            "station",
            vec![
                Node::category_with("SF", vec![parcel("p1", "Ann", "AAAAAA")]),
                Node::category_with(
                    "YD",
                    vec![parcel("p2", "Bob", "BBBBBB"), parcel("p3", "Annie", "AAAAAA")],
                ),
            ],
        )
    }

    #[test]
    fn children_keep_insertion_order() {
        let station = sample();
        let names: Vec<_> = station.children().iter().map(Node::name).collect();
        assert_eq!(names, ["SF", "YD"]);
        let yd = station.find_child("YD").unwrap();
        let names: Vec<_> = yd.children().iter().map(Node::name).collect();
        assert_eq!(names, ["p2", "p3"]);
    }

    #[test]
    fn find_child_is_not_recursive() {
        let station = sample();
        assert!(station.find_child("p1").is_none());
        assert!(station.find_child("SF").unwrap().find_child("p1").is_some());
    }

    #[test]
    fn leaf_has_no_children() {
        let mut leaf = parcel("p9", "Zed", "ZZZZZZ");
        assert!(leaf.children().is_empty());
        assert!(leaf.find_child_mut("p9").is_none());
        assert!(leaf.descendant_mut(&[0]).is_none());
    }

    #[test]
    fn first_match_returns_first_in_level_order() {
        let station = sample();
        let hits = station.search_leaves(SearchPolicy::FirstMatch, |r| {
            r.pickup_code().as_str() == "AAAAAA"
        });
        assert_eq!(hits, vec![vec![0, 0]]);
        let hit = station.descendant(&hits[0]).unwrap();
        assert_eq!(hit.name(), "p1");
    }

    #[test]
    fn exhaustive_collects_every_match() {
        let station = sample();
        let hits = station.search_leaves(SearchPolicy::Exhaustive, |r| r.recipient().contains("Ann"));
        assert_eq!(hits, vec![vec![0, 0], vec![1, 1]]);
    }

    #[test]
    fn descendant_mut_reaches_leaf_record() {
        let mut station = sample();
        let record = station
            .descendant_mut(&[1, 0])
            .and_then(Node::record_mut)
            .unwrap();
        record.mark_picked().unwrap();
        assert!(station.descendant(&[1, 0]).unwrap().record().unwrap().is_picked());
        assert!(station.descendant_mut(&[1, 0, 0]).is_none());
        assert!(station.descendant(&[5]).is_none());
    }

    #[test]
    fn level_order_visits_every_node_once() {
        let station = sample();
        let visited: Vec<_> = station
            .level_order()
            .map(|(depth, node)| (depth, node.name().to_string()))
            .collect();
        assert_eq!(
            visited,
            vec![
                (0, "station".to_string()),
                (1, "SF".to_string()),
                (1, "YD".to_string()),
                (2, "p1".to_string()),
                (2, "p2".to_string()),
                (2, "p3".to_string()),
            ]
        );
        assert_eq!(station.leaf_count(), 3);
    }
}

use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeType {
    Leaf,
    Internal(Box<Node>, Box<Node>),
}

/// A Huffman tree node.
///
/// A leaf carries exactly one symbol. An internal node carries the sorted
/// concatenation of every leaf symbol below it, and its weight is the sum of
/// its children's weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    symbol: String,
    weight: u64,
    node_type: NodeType,
}

impl Node {
    pub fn new_leaf(symbol: char, weight: u64) -> Self {
        Node {
            symbol: symbol.to_string(),
            weight,
            node_type: NodeType::Leaf,
        }
    }

    /// Merges two subtrees. `left` should be the node extracted first.
    pub fn new_internal(left: Node, right: Node) -> Self {
        let mut chars: Vec<char> = left.symbol.chars().chain(right.symbol.chars()).collect();
        chars.sort_unstable();

        Node {
            symbol: chars.into_iter().collect(),
            weight: left.weight + right.weight,
            node_type: NodeType::Internal(Box::new(left), Box::new(right)),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_type, NodeType::Leaf)
    }

    pub fn left(&self) -> Option<&Node> {
        match &self.node_type {
            NodeType::Leaf => None,
            NodeType::Internal(left, _) => Some(left),
        }
    }

    pub fn right(&self) -> Option<&Node> {
        match &self.node_type {
            NodeType::Leaf => None,
            NodeType::Internal(_, right) => Some(right),
        }
    }

    /// Leaf symbol, if this node is a leaf.
    pub fn leaf_symbol(&self) -> Option<char> {
        match self.node_type {
            NodeType::Leaf => self.symbol.chars().next(),
            NodeType::Internal(..) => None,
        }
    }

    fn is_single_symbol(&self) -> bool {
        self.symbol.chars().nth(1).is_none()
    }
}

/// Extraction order for the Huffman priority queue.
///
/// Lower weight first; on equal weight a single-symbol node precedes a
/// multi-symbol one; remaining ties go to the lexicographically smaller
/// symbol.
pub fn priority(a: &Node, b: &Node) -> Ordering {
    a.weight
        .cmp(&b.weight)
        .then_with(|| b.is_single_symbol().cmp(&a.is_single_symbol()))
        .then_with(|| a.symbol.cmp(&b.symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_node_sorts_symbols_and_sums_weights() {
        let z = Node::new_leaf('Z', 2);
        let y = Node::new_leaf('Y', 1);
        let merged = Node::new_internal(z, y);

        assert_eq!(merged.symbol(), "YZ");
        assert_eq!(merged.weight(), 3);
        assert!(!merged.is_leaf());
        assert_eq!(merged.left().map(Node::symbol), Some("Z"));
        assert_eq!(merged.right().map(Node::symbol), Some("Y"));
        assert_eq!(merged.leaf_symbol(), None);
    }

    #[test]
    fn leaf_has_no_children() {
        let leaf = Node::new_leaf('A', 5);
        assert!(leaf.is_leaf());
        assert!(leaf.left().is_none());
        assert!(leaf.right().is_none());
        assert_eq!(leaf.leaf_symbol(), Some('A'));
    }

    #[test]
    fn priority_tiers() {
        let light = Node::new_leaf('Z', 1);
        let single = Node::new_leaf('X', 3);
        let merged = Node::new_internal(Node::new_leaf('A', 1), Node::new_leaf('B', 2));
        let other_single = Node::new_leaf('W', 3);

        assert_eq!(priority(&light, &single), Ordering::Less);
        assert_eq!(priority(&single, &merged), Ordering::Less);
        assert_eq!(priority(&merged, &single), Ordering::Greater);
        assert_eq!(priority(&other_single, &single), Ordering::Less);
        assert_eq!(priority(&single, &single.clone()), Ordering::Equal);
    }
}

use std::cmp::Ordering;

use hufflab::node::priority;
use hufflab::{FrequencyTable, HuffmanTree, Node, PriorityQueue};
use proptest::prelude::*;

fn table_strategy(size: std::ops::Range<usize>) -> impl Strategy<Value = FrequencyTable> {
    prop::collection::btree_map(prop::char::range('A', 'Z'), 1..500u64, size)
}

fn table_and_text() -> impl Strategy<Value = (FrequencyTable, String)> {
    table_strategy(1..26).prop_flat_map(|table| {
        let symbols: Vec<char> = table.keys().copied().collect();
        let text = prop::collection::vec(prop::sample::select(symbols), 0..200)
            .prop_map(|chars| chars.into_iter().collect::<String>());
        (Just(table), text)
    })
}

proptest! {
    #[test]
    fn build_is_deterministic(table in table_strategy(0..26)) {
        let first = HuffmanTree::build(&table).unwrap();
        let second = HuffmanTree::build(&table).unwrap();

        prop_assert_eq!(first.encoding_map(), second.encoding_map());
        prop_assert_eq!(first.preorder_labels(), second.preorder_labels());
        prop_assert_eq!(first.indented_render(), second.indented_render());
    }

    #[test]
    fn decode_inverts_encode((table, text) in table_and_text()) {
        let tree = HuffmanTree::build(&table).unwrap();

        let encoded = tree.encode(&text.to_lowercase());
        prop_assert!(encoded.is_complete());

        let decoded = tree.decode(&encoded.code);
        prop_assert!(decoded.is_clean());
        prop_assert_eq!(decoded.text, text);
    }

    #[test]
    fn codes_are_prefix_free(table in table_strategy(1..26)) {
        let tree = HuffmanTree::build(&table).unwrap();
        let map = tree.encoding_map();
        prop_assert_eq!(map.len(), table.len());

        for (a, code_a) in &map {
            prop_assert!(!code_a.is_empty());
            for (b, code_b) in &map {
                if a != b {
                    prop_assert!(!code_b.starts_with(code_a.as_str()));
                }
            }
        }
    }

    #[test]
    fn internal_weights_are_conserved(table in table_strategy(1..26)) {
        let tree = HuffmanTree::build(&table).unwrap();

        for node in tree.preorder() {
            match (node.left(), node.right()) {
                (Some(left), Some(right)) => {
                    prop_assert_eq!(node.weight(), left.weight() + right.weight());
                }
                (None, None) => prop_assert!(node.is_leaf()),
                _ => prop_assert!(false, "node with a single child"),
            }
        }

        let total: u64 = table.values().sum();
        prop_assert_eq!(tree.root().map(Node::weight), Some(total));
        prop_assert_eq!(tree.len(), 2 * table.len() - 1);
    }

    #[test]
    fn queue_pops_in_priority_order(table in table_strategy(0..26)) {
        let mut queue: PriorityQueue<Node> = PriorityQueue::new(priority);
        for (&symbol, &weight) in &table {
            queue.push(Node::new_leaf(symbol, weight));
        }
        prop_assert_eq!(queue.size(), table.len());

        let mut popped: Vec<Node> = Vec::new();
        while let Some(node) = queue.pop() {
            popped.push(node);
        }

        prop_assert_eq!(popped.len(), table.len());
        for pair in popped.windows(2) {
            prop_assert_eq!(priority(&pair[0], &pair[1]), Ordering::Less);
        }
    }
}

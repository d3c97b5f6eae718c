use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::Result;
use crate::frequency::{self, FrequencyTable};
use crate::node::{self, Node};
use crate::queue::PriorityQueue;

/// Output of [`HuffmanTree::encode`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encoded {
    /// Concatenated codes of every mapped character.
    pub code: String,
    /// Distinct input characters (uppercased) that have no code.
    pub unmapped: BTreeSet<char>,
}

impl Encoded {
    pub fn is_complete(&self) -> bool {
        self.unmapped.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A character other than '0' or '1'.
    Malformed(char),
    /// The bit names a branch the tree does not have.
    NoBranch,
}

/// Where and why a decode walk stopped early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeStop {
    /// Zero-based index of the offending character in the input.
    pub position: usize,
    pub reason: StopReason,
}

/// Output of [`HuffmanTree::decode`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    /// Set when the walk aborted before consuming all input.
    pub stop: Option<DecodeStop>,
    /// Bits of an incomplete final code that were discarded.
    pub dangling_bits: usize,
}

impl Decoded {
    pub fn is_clean(&self) -> bool {
        self.stop.is_none() && self.dangling_bits == 0
    }
}

/// Huffman tree built from a frequency table, with its derived code map.
///
/// An empty tree (no root) is a valid state: it encodes nothing and decodes
/// to the empty string.
#[derive(Debug, Clone, Default)]
pub struct HuffmanTree {
    root: Option<Node>,
    codec_dict: HashMap<char, String>,
    size: usize,
}

impl HuffmanTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree from `table`, failing on zero weights, a total weight
    /// past `u64::MAX`, or keys outside the uppercase single-symbol space.
    /// An empty table gives an empty tree.
    pub fn build(table: &FrequencyTable) -> Result<Self> {
        frequency::validate(table)?;
        Ok(Self::from_valid_table(table))
    }

    /// Builds a tree from the letter counts of `text`.
    pub fn from_text(text: &str) -> Self {
        Self::from_valid_table(&frequency::count_symbols(text))
    }

    /// Replaces this tree with one built from `table`. On error the current
    /// tree is left untouched.
    pub fn rebuild(&mut self, table: &FrequencyTable) -> Result<()> {
        *self = Self::build(table)?;
        Ok(())
    }

    fn from_valid_table(table: &FrequencyTable) -> Self {
        let mut pqueue: PriorityQueue<Node> = PriorityQueue::new(node::priority);
        pqueue.extend(
            table
                .iter()
                .map(|(&symbol, &weight)| Node::new_leaf(symbol, weight)),
        );

        while pqueue.size() > 1 {
            let (Some(ln), Some(rn)) = (pqueue.pop(), pqueue.pop()) else {
                unreachable!("checked with while loop condition");
            };
            pqueue.push(Node::new_internal(ln, rn));
        }

        let root = pqueue.pop();
        let mut codec_dict = HashMap::new();
        if let Some(root) = &root {
            fill(root, String::new(), &mut codec_dict);
        }
        let size = root.as_ref().map_or(0, count_nodes);

        Self {
            root,
            codec_dict,
            size,
        }
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Total number of nodes, leaves and internal.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn code(&self, symbol: char) -> Option<&str> {
        self.codec_dict.get(&symbol).map(String::as_str)
    }

    /// A copy of the symbol-to-code map, ordered by symbol.
    pub fn encoding_map(&self) -> BTreeMap<char, String> {
        self.codec_dict
            .iter()
            .map(|(&symbol, code)| (symbol, code.clone()))
            .collect()
    }

    pub fn encode(&self, text: &str) -> Encoded {
        let mut encoded = Encoded::default();
        for symbol in text.chars().map(frequency::to_upper) {
            match self.codec_dict.get(&symbol) {
                Some(code) => encoded.code += code,
                None => {
                    encoded.unmapped.insert(symbol);
                }
            }
        }

        encoded
    }

    pub fn decode(&self, encoded: &str) -> Decoded {
        let mut decoded = Decoded::default();

        let Some(root) = &self.root else {
            return decoded;
        };

        let mut current_node = root;
        let mut depth = 0;

        for (position, bit_char) in encoded.chars().enumerate() {
            let next = match bit_char {
                // a lone leaf is reached through its "0" code
                '0' if current_node.is_leaf() => Some(current_node),
                '0' => current_node.left(),
                '1' => current_node.right(),
                other => {
                    decoded.stop = Some(DecodeStop {
                        position,
                        reason: StopReason::Malformed(other),
                    });
                    break;
                }
            };

            let Some(next) = next else {
                decoded.stop = Some(DecodeStop {
                    position,
                    reason: StopReason::NoBranch,
                });
                break;
            };

            current_node = next;
            depth += 1;

            if let Some(symbol) = current_node.leaf_symbol() {
                decoded.text.push(symbol);
                current_node = root;
                depth = 0;
            }
        }

        decoded.dangling_bits = depth;
        decoded
    }

    /// Nodes in root, left, right order.
    pub fn preorder(&self) -> impl Iterator<Item = &Node> {
        self.walk().map(|(_, node)| node)
    }

    pub fn preorder_labels(&self) -> Vec<(String, u64)> {
        self.preorder()
            .map(|node| (node.symbol().to_string(), node.weight()))
            .collect()
    }

    /// Preorder labels joined as `"XYZ: 6, X: 3, ..."`.
    pub fn preorder_string(&self) -> String {
        self.preorder()
            .map(label)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// One `symbol: weight` line per node, indented two spaces per level.
    pub fn indented_render(&self) -> String {
        self.walk()
            .map(|(depth, node)| format!("{}{}", "  ".repeat(depth), label(node)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn walk(&self) -> Walk<'_> {
        Walk {
            stack: self.root.iter().map(|root| (0, root)).collect(),
        }
    }
}

struct Walk<'a> {
    stack: Vec<(usize, &'a Node)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        if let (Some(left), Some(right)) = (node.left(), node.right()) {
            self.stack.push((depth + 1, right));
            self.stack.push((depth + 1, left));
        }
        Some((depth, node))
    }
}

fn label(node: &Node) -> String {
    format!("{}: {}", node.symbol(), node.weight())
}

fn fill(node: &Node, code: String, dict: &mut HashMap<char, String>) {
    match (node.left(), node.right()) {
        (Some(ln), Some(rn)) => {
            fill(ln, format!("{}0", code), dict);
            fill(rn, format!("{}1", code), dict);
        }
        _ => {
            if let Some(symbol) = node.leaf_symbol() {
                let code = if code.is_empty() { "0".to_string() } else { code };
                let _ = dict.insert(symbol, code);
            }
        }
    }
}

fn count_nodes(node: &Node) -> usize {
    1 + node.left().map_or(0, count_nodes) + node.right().map_or(0, count_nodes)
}

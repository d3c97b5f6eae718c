//! Huffman coding over single-character symbols.
//!
//! A [`HuffmanTree`] is built from a frequency table with a deterministic
//! tie-break order, so the same table always yields the same codes. Codes are
//! strings of `'0'` and `'1'`.
//!
//! ```
//! use hufflab::{FrequencyTable, HuffmanTree};
//!
//! let table = FrequencyTable::from([('X', 3), ('Y', 1), ('Z', 2)]);
//! let tree = HuffmanTree::build(&table)?;
//!
//! let encoded = tree.encode("xyz");
//! assert_eq!(encoded.code, "01011");
//! assert_eq!(tree.decode(&encoded.code).text, "XYZ");
//! # Ok::<(), hufflab::Error>(())
//! ```

pub mod error;
pub mod frequency;
pub mod huffman;
pub mod input;
pub mod node;
pub mod queue;
pub mod report;

pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use huffman::{DecodeStop, Decoded, Encoded, HuffmanTree, StopReason};
pub use node::Node;
pub use queue::PriorityQueue;

//! Plain-text reports for the tree, encoding and decoding tasks.

use std::fmt;

use crate::error::Result;
use crate::frequency::{self, FrequencyTable};
use crate::huffman::{HuffmanTree, StopReason};

const END_OF_PHRASE: &str =
    "===================================END OF PHRASE===================================";

/// Which frequency table a tree was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSource {
    File,
    Standard,
    PerPhrase,
}

impl fmt::Display for TableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableSource::File => write!(f, "file's frequency table"),
            TableSource::Standard => write!(f, "standard frequency table"),
            TableSource::PerPhrase => write!(f, "unique frequency table"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub body: String,
    pub warnings: Vec<String>,
}

/// Tree used for decoding and the tree report: the file's table when it has
/// one, the standard table otherwise.
pub fn decoding_tree(file_table: &FrequencyTable) -> Result<(HuffmanTree, TableSource)> {
    if file_table.is_empty() {
        Ok((
            HuffmanTree::build(&frequency::standard_table())?,
            TableSource::Standard,
        ))
    } else {
        Ok((HuffmanTree::build(file_table)?, TableSource::File))
    }
}

pub fn tree_report(tree: &HuffmanTree) -> String {
    let mut content = String::new();
    content += "--- Huffman Tree Structure ---\n";
    content += &tree.indented_render();
    content += "\n\n--- Huffman Preorder Traversal String ---\n";
    content += &tree.preorder_string();
    content += "\n\n--- Encoding Map ---\n";
    for (symbol, code) in tree.encoding_map() {
        content += &format!("{symbol}: {code}\n");
    }
    content
}

/// Encodes every phrase with `file_tree`, or with a tree built from the
/// phrase's own letter counts when there is no file table.
pub fn encode_report(phrases: &[String], file_tree: Option<&HuffmanTree>) -> Report {
    let mut report = Report::default();
    let mut entries = Vec::new();

    for phrase in phrases {
        let (encoded, source, own_tree) = match file_tree {
            Some(tree) => (tree.encode(phrase), TableSource::File, None),
            None => {
                let tree = HuffmanTree::from_text(phrase);
                (tree.encode(phrase), TableSource::PerPhrase, Some(tree))
            }
        };

        let mut entry = format!(
            "Original: {phrase}\nEncoded:  {}\n(Used {source})\n",
            encoded.code
        );
        if !encoded.is_complete() {
            let unmapped = join_symbols(encoded.unmapped.iter().copied());
            entry += &format!("Unmapped: {unmapped}\n");
            report
                .warnings
                .push(format!("'{phrase}': no code for {unmapped}"));
        }

        if let Some(tree) = own_tree {
            entry += "\n--- Encoding Map ---\n";
            for (symbol, code) in tree.encoding_map() {
                entry += &format!("'{symbol}': {code}\n");
            }
            entry += END_OF_PHRASE;
            entry += "\n";
        }

        entries.push(entry);
    }

    report.body = entries.join("\n");
    report
}

pub fn decode_report(codes: &[String], tree: &HuffmanTree, source: TableSource) -> Report {
    let mut report = Report::default();
    let mut entries = Vec::new();

    for code in codes {
        let decoded = tree.decode(code);
        let mut entry = format!(
            "Code:     {code}\nDecoded:  {}\n(Used {source})\n",
            decoded.text
        );

        if let Some(stop) = decoded.stop {
            let note = match stop.reason {
                StopReason::Malformed(c) => {
                    format!("stopped at position {}: invalid bit {c:?}", stop.position)
                }
                StopReason::NoBranch => {
                    format!("stopped at position {}: no such branch", stop.position)
                }
            };
            entry += &format!("Note: {note}\n");
            report.warnings.push(format!("'{code}': {note}"));
        } else if decoded.dangling_bits > 0 {
            entry += &format!(
                "Note: {} trailing bit(s) did not form a complete code\n",
                decoded.dangling_bits
            );
        }

        entries.push(entry);
    }

    report.body = entries.join("\n");
    report
}

fn join_symbols(symbols: impl Iterator<Item = char>) -> String {
    symbols
        .map(|c| format!("{c:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}

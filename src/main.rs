use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use hufflab::input::LabInput;
use hufflab::report::{self, Report};

/// Builds a Huffman tree from an input file and writes tree, encode and
/// decode reports.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Input file with FREQUENCY TABLE, ENCODE and DECODE sections
    input: PathBuf,

    /// Where to write the tree structure and encoding map
    #[arg(default_value = "tree_info.txt")]
    tree_file: PathBuf,

    /// Where to write the encoding results
    #[arg(default_value = "encode_results.txt")]
    encode_file: PathBuf,

    /// Where to write the decoding results
    #[arg(default_value = "decode_results.txt")]
    decode_file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let contents = fs::read_to_string(&args.input)
        .with_context(|| format!("read input file {}", args.input.display()))?;
    let input = LabInput::parse(&contents);
    println!("Successfully parsed input file: {}", args.input.display());
    for (line, reason) in &input.rejected {
        eprintln!("Warning: skipped frequency entry '{line}': {reason}");
    }

    let (tree, source) = report::decoding_tree(&input.frequencies).context("build decoding tree")?;
    println!("Using {source} for reports and decoding.");

    println!("Generating tree report...");
    write_output(&args.tree_file, &report::tree_report(&tree))?;

    println!("Processing encoding tasks...");
    let file_tree = (!input.frequencies.is_empty()).then_some(&tree);
    let encoded = report::encode_report(&input.phrases, file_tree);
    emit(&args.encode_file, &encoded)?;

    println!("Processing decoding tasks...");
    let decoded = report::decode_report(&input.codes, &tree, source);
    emit(&args.decode_file, &decoded)?;

    println!("\nAll tasks complete.");
    Ok(())
}

fn emit(path: &Path, report: &Report) -> Result<()> {
    for warning in &report.warnings {
        eprintln!("Warning: {warning}");
    }
    write_output(path, &report.body)
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("write {}", path.display()))?;
    println!("Successfully generated {}", path.display());
    Ok(())
}

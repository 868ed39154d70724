//! Build script to generate embedded default data
//!
//! Reads the default word list and letter-frequency table and generates Rust
//! source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/wordlist.txt",
        &Path::new(&out_dir).join("wordlist.rs"),
        "WORDS",
        "Default five-letter word list",
    );

    generate_frequencies(
        "data/frequency.csv",
        &Path::new(&out_dir).join("frequency.rs"),
        "FREQUENCIES",
        "Default English letter frequencies",
    );

    println!("cargo:rerun-if-changed=data/wordlist.txt");
    println!("cargo:rerun-if-changed=data/frequency.csv");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} ({count} words)").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}

fn generate_frequencies(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    // Kept as raw CSV so the runtime parser validates it like any other source
    writeln!(output, "// Generated frequency table").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} (`LETTER,weight` lines)").unwrap();
    writeln!(output, "pub const {const_name}: &str = {content:?};").unwrap();
}

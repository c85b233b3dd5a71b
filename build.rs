//! Build script to generate embedded word lists
//!
//! Reads word list files and generates Rust source code with const arrays.
//! Words are trimmed and uppercased; blank lines and `#` comments are skipped.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Fallback answer pool
    generate_word_list(
        "data/answers.txt",
        &Path::new(&out_dir).join("answers.rs"),
        "ANSWERS",
        "Fallback answer pool used when the random-word service is unavailable",
    );

    // Offline dictionary
    generate_word_list(
        "data/allowed.txt",
        &Path::new(&out_dir).join("allowed.rs"),
        "ALLOWED",
        "Words accepted as guesses without consulting the dictionary service",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/answers.txt");
    println!("cargo:rerun-if-changed=data/allowed.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_ascii_uppercase)
        .collect();

    assert!(!words.is_empty(), "{input_path} contains no words");

    for word in &words {
        assert!(
            word.len() == 5 && word.bytes().all(|b| b.is_ascii_uppercase()),
            "{input_path}: '{word}' is not a five-letter word"
        );
    }

    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}

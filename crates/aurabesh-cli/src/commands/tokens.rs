//! Tokens command - dump the token stream

use anyhow::{Context, Result};
use aurabesh_core::tokenize;
use std::fs;

/// Tokenize an Aurabesh source file
///
/// Prints one row per token in the form `line:column kind 'text'`, with the
/// trailing `end of input` token included. A lex error goes to stderr and
/// nothing is printed to stdout.
pub fn run(file_path: &str) -> Result<()> {
    // Read source file
    let source = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read source file: {}", file_path))?;

    match tokenize(&source) {
        Ok(tokens) => {
            for token in &tokens {
                println!("{}:{} {}", token.line, token.column, token.describe());
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("error[lex]: {}", err);
            Err(anyhow::anyhow!("Failed to tokenize program"))
        }
    }
}

//! AST dump command - output the parsed program as JSON

use anyhow::{Context, Result};
use aurabesh_core::{tokenize, Parser};
use std::fs;

/// Parse an Aurabesh source file and print its AST as JSON
///
/// Lex and parse errors go to stderr tagged with their stage; the command
/// exits non-zero without printing any JSON.
pub fn run(file_path: &str) -> Result<()> {
    // Read source file
    let source = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read source file: {}", file_path))?;

    // Lex the source code
    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("error[lex]: {}", err);
            return Err(anyhow::anyhow!("Failed to parse program"));
        }
    };

    // Parse tokens into a program
    let mut parser = Parser::new(tokens);
    let program = match parser.parse() {
        Ok(program) => program,
        Err(err) => {
            eprintln!("error[parse]: {}", err);
            return Err(anyhow::anyhow!("Failed to parse program"));
        }
    };

    let json = program.to_json()?;
    println!("{}", json);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_ast_dump_simple() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "x = 42;").unwrap();

        let result = run(temp_file.path().to_str().unwrap());
        assert!(result.is_ok());
    }

    #[test]
    fn test_ast_dump_invalid_syntax() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "x = ").unwrap();

        let result = run(temp_file.path().to_str().unwrap());
        assert!(result.is_err());
    }

    #[test]
    fn test_ast_dump_missing_file() {
        let result = run("nonexistent.aura");
        assert!(result.is_err());
    }
}

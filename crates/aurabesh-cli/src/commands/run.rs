//! Run command - execute Aurabesh source files

use anyhow::{Context, Result};
use aurabesh_core::{Aurabesh, ForcePath};
use std::fs;

/// Run an Aurabesh source file
///
/// Executes the program and prints its `print` output to stdout, one line
/// per statement. Output produced before a runtime error is still printed;
/// the error itself goes to stderr tagged with the stage that raised it.
pub fn run(file_path: &str, force_path: Option<ForcePath>) -> Result<()> {
    // Read source file
    let source = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read source file: {}", file_path))?;

    // Create runtime and apply the external Force Path flag, if any
    let mut runtime = Aurabesh::new();
    if let Some(path) = force_path {
        runtime.set_force_path(path);
    }

    let report = runtime.run(&source);
    for line in &report.output {
        println!("{}", line);
    }

    match report.result {
        Ok(()) => Ok(()),
        Err(err) => {
            eprintln!("error[{}]: {}", err.stage(), err);
            Err(anyhow::anyhow!("Failed to execute program"))
        }
    }
}

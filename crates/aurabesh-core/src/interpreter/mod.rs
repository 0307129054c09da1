//! AST interpreter (tree-walking)
//!
//! Direct AST execution against a single global [`Environment`]. Printed
//! output is collected as an ordered line buffer that the host drains after
//! the run; lines printed before a runtime error survive the error.
//!
//! The interpreter owns the second of the program's two Force Path flags.
//! It starts `Unset` and changes only through [`Interpreter::set_force_path`];
//! it is never seeded from the flag the parser derived from the source.

mod expr;
mod stmt;

use crate::ast::Program;
use crate::environment::Environment;
use crate::force_path::ForcePath;
use crate::value::RuntimeError;

/// Interpreter state
pub struct Interpreter {
    /// Global variables and (inert) functions
    env: Environment,
    /// Runtime Force Path, independent of the parser's
    force_path: ForcePath,
    /// Printed output lines, in emission order
    output: Vec<String>,
}

impl Interpreter {
    /// Create a new interpreter with a fresh environment
    pub fn new() -> Self {
        Self::with_environment(Environment::new())
    }

    /// Create an interpreter around an existing environment
    pub fn with_environment(env: Environment) -> Self {
        Self {
            env,
            force_path: ForcePath::default(),
            output: Vec::new(),
        }
    }

    /// The explicit external call that selects the runtime Force Path
    pub fn set_force_path(&mut self, path: ForcePath) {
        self.force_path = path;
    }

    /// The interpreter's own Force Path flag
    pub fn force_path(&self) -> ForcePath {
        self.force_path
    }

    /// Execute a program, top-level statement by statement
    pub fn interpret(&mut self, program: &Program) -> Result<(), RuntimeError> {
        for stmt in &program.statements {
            self.execute(stmt)?;
        }
        Ok(())
    }

    /// The environment, readable during and after a run
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Output lines printed so far, in emission order
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Drain the collected output lines
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

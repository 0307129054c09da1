//! Aurabesh runtime API for embedding

use crate::force_path::ForcePath;
use crate::interpreter::Interpreter;
use crate::lexer::{self, LexError};
use crate::parser::{ParseError, Parser};
use crate::value::RuntimeError;
use std::fmt;
use thiserror::Error;

/// Pipeline stage that produced an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lex,
    Parse,
    Run,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Lex => "lex",
            Stage::Parse => "parse",
            Stage::Run => "run",
        };
        write!(f, "{}", name)
    }
}

/// Any failure a full pipeline run can produce
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Lex(#[from] LexError),

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Run(#[from] RuntimeError),
}

impl Error {
    /// Which stage of the pipeline failed
    pub fn stage(&self) -> Stage {
        match self {
            Error::Lex(_) => Stage::Lex,
            Error::Parse(_) => Stage::Parse,
            Error::Run(_) => Stage::Run,
        }
    }
}

/// Outcome of a single [`Aurabesh::run`] call
///
/// `output` holds every line printed before the run finished (or failed),
/// in order. `result` carries the stage-tagged error when the run did not
/// complete.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub output: Vec<String>,
    pub result: Result<(), Error>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Aurabesh runtime instance
///
/// Provides a high-level API for embedding Aurabesh in host applications.
///
/// # Examples
///
/// ```
/// use aurabesh_core::Aurabesh;
///
/// let runtime = Aurabesh::new();
/// let report = runtime.run("print 1 + 2;");
/// assert!(report.is_success());
/// assert_eq!(report.output, vec!["3"]);
/// ```
pub struct Aurabesh {
    /// Force path handed to the interpreter at the start of every run
    force_path: ForcePath,
}

impl Aurabesh {
    /// Create a new Aurabesh runtime instance
    pub fn new() -> Self {
        Self {
            force_path: ForcePath::Unset,
        }
    }

    /// Choose the force path that each run's interpreter starts on.
    ///
    /// This is the only way to unlock Sith-only constructs at execution
    /// time. The parser keeps a separate flag controlled solely by the
    /// `Set Force Path` directive in source, and the two are never
    /// synchronized: a Sith program needs the directive to parse and this
    /// call to execute.
    ///
    /// # Examples
    ///
    /// ```
    /// use aurabesh_core::{Aurabesh, ForcePath};
    ///
    /// let mut runtime = Aurabesh::new();
    /// runtime.set_force_path(ForcePath::Sith);
    /// let source = "Set Force Path Sith; try { x = 1 / 0; } catch { print \"caught\"; }";
    /// assert_eq!(runtime.run(source).output, vec!["caught"]);
    /// ```
    pub fn set_force_path(&mut self, path: ForcePath) {
        self.force_path = path;
    }

    /// Force path the next run's interpreter will start on
    pub fn force_path(&self) -> ForcePath {
        self.force_path
    }

    /// Run Aurabesh source through the full pipeline
    ///
    /// Tokenizes, parses, and interprets `source`. Printed lines are
    /// collected into the report even when interpretation fails partway.
    ///
    /// # Examples
    ///
    /// ```
    /// use aurabesh_core::{Aurabesh, Stage};
    ///
    /// let report = Aurabesh::new().run("x = 1 +;");
    /// assert_eq!(report.result.unwrap_err().stage(), Stage::Parse);
    /// ```
    pub fn run(&self, source: &str) -> RunReport {
        let tokens = match lexer::tokenize(source) {
            Ok(tokens) => tokens,
            Err(err) => {
                return RunReport {
                    output: Vec::new(),
                    result: Err(err.into()),
                }
            }
        };

        let mut parser = Parser::new(tokens);
        let program = match parser.parse() {
            Ok(program) => program,
            Err(err) => {
                return RunReport {
                    output: Vec::new(),
                    result: Err(err.into()),
                }
            }
        };

        let mut interpreter = Interpreter::new();
        interpreter.set_force_path(self.force_path);
        let result = interpreter.interpret(&program).map_err(Error::from);

        RunReport {
            output: interpreter.take_output(),
            result,
        }
    }
}

impl Default for Aurabesh {
    fn default() -> Self {
        Self::new()
    }
}

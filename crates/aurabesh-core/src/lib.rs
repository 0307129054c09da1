//! Aurabesh Core - Language implementation
//!
//! This library provides the complete Aurabesh language pipeline including:
//! - Lexical analysis into line/column-tagged tokens
//! - Recursive descent parsing into a statement/expression tree
//! - Tree-walking interpretation over a single global environment
//! - An embedding facade with stage-tagged error reporting

/// Aurabesh core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod ast;
pub mod environment;
pub mod force_path;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod runtime;
pub mod token;
pub mod value;

// Re-export commonly used types
pub use ast::{
    BinOp, BinaryExpr, Case, Expr, ForStmt, FunctionDecl, IfStmt, PrintStmt, Program, Stmt,
    SwitchStmt, TryCatchStmt, VarDecl, WhileStmt,
};
pub use environment::Environment;
pub use force_path::{ForcePath, InvalidForcePath};
pub use interpreter::Interpreter;
pub use lexer::{tokenize, LexError, Lexer};
pub use parser::{ParseError, Parser};
pub use runtime::{Aurabesh, Error, RunReport, Stage};
pub use token::{Token, TokenKind, KEYWORDS};
pub use value::{RuntimeError, Value};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoke() {
        // Smoke test to verify the crate builds and tests run
        assert_eq!(VERSION, "0.1.0");
        let report = Aurabesh::new().run("greeting = \"hello\"; print greeting;");
        assert_eq!(report.output, vec!["hello"]);
    }
}

//! Parsing (tokens to AST)
//!
//! Recursive-descent parser over a two-slot lookahead: the current token
//! plus one token of lookahead, advancing strictly left-to-right with no
//! rewind. Parsing is fail-fast: the first mismatch aborts with a
//! [`ParseError`] carrying the failing token's position.
//!
//! The parser also owns one of the program's two Force Path flags, set by
//! the `Set Force Path <Sith|Jedi>` directive between top-level statements.
//! `try`/`catch` and `switch` refuse to parse unless this flag is Sith; the
//! interpreter repeats the check at run time against its own flag.

mod expr;
mod stmt;

use crate::ast::Program;
use crate::force_path::ForcePath;
use crate::token::{Token, TokenKind};
use thiserror::Error;

/// Error raised when parsing fails
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// An expected token was not found
    #[error("{line}:{column}: expected {expected}, found {found}")]
    Expected {
        expected: String,
        found: String,
        line: u32,
        column: u32,
    },
    /// A token that cannot start a statement or expression
    #[error("{line}:{column}: unexpected token {found}")]
    Unexpected {
        found: String,
        line: u32,
        column: u32,
    },
    /// Sith-gated construct parsed while the parser's Force Path is not Sith
    #[error("{line}:{column}: {construct} is only allowed for Sith")]
    ForcePathDenied {
        construct: &'static str,
        line: u32,
        column: u32,
    },
    /// Directive tail that names no Force Path
    #[error("{line}:{column}: expected 'Sith' or 'Jedi' after 'Set Force Path', found {found}")]
    InvalidDirective {
        found: String,
        line: u32,
        column: u32,
    },
}

impl ParseError {
    /// Position of the failing token
    pub fn position(&self) -> (u32, u32) {
        match self {
            ParseError::Expected { line, column, .. }
            | ParseError::Unexpected { line, column, .. }
            | ParseError::ForcePathDenied { line, column, .. }
            | ParseError::InvalidDirective { line, column, .. } => (*line, *column),
        }
    }
}

/// Parser state for building an AST from tokens
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    force_path: ForcePath,
}

impl Parser {
    /// Create a new parser for the given tokens
    pub fn new(mut tokens: Vec<Token>) -> Self {
        // Tolerate hand-built token vectors missing the end marker
        if tokens.last().map(|t| t.kind) != Some(TokenKind::EndOfInput) {
            let (line, column) = tokens
                .last()
                .map(|t| (t.line, t.column + t.text.chars().count() as u32))
                .unwrap_or((1, 1));
            tokens.push(Token::new(TokenKind::EndOfInput, "", line, column));
        }

        Self {
            tokens,
            current: 0,
            force_path: ForcePath::default(),
        }
    }

    /// Parse a whole program
    pub fn parse(&mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            // The directive is committed once `Set Force` is visible in the
            // two lookahead slots; a lone `Set` still opens an ordinary
            // variable declaration.
            if self.current().is_identifier("Set") && self.lookahead().is_identifier("Force") {
                self.directive()?;
            } else {
                statements.push(self.statement()?);
            }
        }

        Ok(Program { statements })
    }

    /// The parser's Force Path after (or during) a parse
    pub fn force_path(&self) -> ForcePath {
        self.force_path
    }

    // === Mode directive ===

    /// Consume `Set Force Path <Sith|Jedi>` plus an optional trailing `;`
    fn directive(&mut self) -> Result<(), ParseError> {
        self.advance(); // Set
        self.advance(); // Force
        self.expect(TokenKind::Identifier, Some("Path"))?;

        let token = self.advance();
        self.force_path = if token.is_identifier("Sith") {
            ForcePath::Sith
        } else if token.is_identifier("Jedi") {
            ForcePath::Jedi
        } else {
            return Err(ParseError::InvalidDirective {
                found: token.describe(),
                line: token.line,
                column: token.column,
            });
        };

        self.match_symbol(";");
        Ok(())
    }

    // === Helper methods ===

    /// The current token
    pub(super) fn current(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// The single token of lookahead past the current one
    pub(super) fn lookahead(&self) -> &Token {
        let next = (self.current + 1).min(self.tokens.len() - 1);
        &self.tokens[next]
    }

    /// Consume and return the current token; the end marker is never passed
    pub(super) fn advance(&mut self) -> Token {
        let token = self.tokens[self.current].clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    /// Check the current token's kind without consuming
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// Check for a symbol token with this text
    pub(super) fn check_symbol(&self, text: &str) -> bool {
        self.current().is_symbol(text)
    }

    /// Check for a keyword token with this text
    pub(super) fn check_keyword(&self, text: &str) -> bool {
        self.current().is_keyword(text)
    }

    /// Consume a symbol token with this text if present
    pub(super) fn match_symbol(&mut self, text: &str) -> bool {
        if self.check_symbol(text) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a keyword token with this text if present
    pub(super) fn match_keyword(&mut self, text: &str) -> bool {
        if self.check_keyword(text) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind (and exact text, when given) or
    /// fail with an expected-vs-found error at the current token
    pub(super) fn expect(&mut self, kind: TokenKind, text: Option<&str>) -> Result<Token, ParseError> {
        let matches = self.check(kind) && text.map_or(true, |t| self.current().text == t);
        if matches {
            Ok(self.advance())
        } else {
            Err(self.expected_error(kind, text))
        }
    }

    /// Consume a symbol token with exactly this text or fail
    pub(super) fn expect_symbol(&mut self, text: &str) -> Result<Token, ParseError> {
        self.expect(TokenKind::Symbol, Some(text))
    }

    /// Check if the current token is the end marker
    pub(super) fn is_at_end(&self) -> bool {
        self.current().kind == TokenKind::EndOfInput
    }

    /// Build the expected-vs-found error for the current token
    pub(super) fn expected_error(&self, kind: TokenKind, text: Option<&str>) -> ParseError {
        let expected = match text {
            Some(t) => format!("{} '{}'", kind, t),
            None => kind.to_string(),
        };
        let token = self.current();
        ParseError::Expected {
            expected,
            found: token.describe(),
            line: token.line,
            column: token.column,
        }
    }

    /// Build the unexpected-token error for the current token
    pub(super) fn unexpected(&self) -> ParseError {
        let token = self.current();
        ParseError::Unexpected {
            found: token.describe(),
            line: token.line,
            column: token.column,
        }
    }

    /// Fail unless the parser's Force Path is Sith; the error points at the
    /// current (not yet consumed) construct keyword
    pub(super) fn require_sith(&self, construct: &'static str) -> Result<(), ParseError> {
        if self.force_path.is_sith() {
            Ok(())
        } else {
            let token = self.current();
            Err(ParseError::ForcePathDenied {
                construct,
                line: token.line,
                column: token.column,
            })
        }
    }
}

//! Token types for lexical analysis
//!
//! Defines the token vocabulary recognized by the Aurabesh lexer. The
//! vocabulary is deliberately coarse: five surface kinds plus an end marker,
//! with the raw source text carried on every token. Keywords and operators
//! are distinguished by text, not by dedicated kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved words. Matching is exact and case-sensitive: `force` is a
/// keyword, `Force` is an ordinary identifier.
pub const KEYWORDS: [&str; 15] = [
    "jedi", "sith", "force", "padawan", "master", "if", "else", "for", "while", "print", "try",
    "catch", "switch", "case", "default",
];

/// Token produced by the lexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The source text of this token (empty for `EndOfInput`)
    pub text: String,
    /// 1-based line of the token's first character
    pub line: u32,
    /// 1-based column of the token's first character
    pub column: u32,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// Human-readable rendering used in parse errors, kind plus text
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EndOfInput => "end of input".to_string(),
            _ => format!("{} '{}'", self.kind, self.text),
        }
    }

    /// True for an identifier token with exactly this text
    pub fn is_identifier(&self, text: &str) -> bool {
        self.kind == TokenKind::Identifier && self.text == text
    }

    /// True for a keyword token with exactly this text
    pub fn is_keyword(&self, text: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text == text
    }

    /// True for a symbol token with exactly this text
    pub fn is_symbol(&self, text: &str) -> bool {
        self.kind == TokenKind::Symbol && self.text == text
    }
}

/// Classification of token types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Identifier (`x`, `Force`, `_tmp`)
    Identifier,
    /// Number literal (`42`, `3.14`), stored as raw text
    Number,
    /// String literal, stored raw including both quote characters
    String,
    /// Reserved word from [`KEYWORDS`]
    Keyword,
    /// Operator or punctuation; `==` is a single token, never two `=`
    Symbol,
    /// End of the token stream, exactly one per successful lex
    EndOfInput,
}

impl TokenKind {
    /// Classify an identifier-shaped lexeme as keyword or identifier
    pub fn for_word(text: &str) -> TokenKind {
        if KEYWORDS.contains(&text) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Keyword => "keyword",
            TokenKind::Symbol => "symbol",
            TokenKind::EndOfInput => "end of input",
        };
        write!(f, "{}", name)
    }
}

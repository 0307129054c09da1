//! Lexical analysis (tokenization)
//!
//! The lexer converts Aurabesh source text into a flat token stream with
//! 1-based line/column positions. Lexing is fail-fast: the first character
//! that cannot start a token aborts the scan with a [`LexError`].

use crate::token::{Token, TokenKind};
use thiserror::Error;

/// Error raised when the lexer meets a character it cannot start a token with
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{line}:{column}: unexpected character '{ch}'")]
pub struct LexError {
    /// The offending character
    pub ch: char,
    /// 1-based line of the character
    pub line: u32,
    /// 1-based column of the character
    pub column: u32,
}

/// Tokenize source text in one call
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    lexer.tokenize()
}

/// Lexer state for tokenizing source code
pub struct Lexer {
    /// Characters of source code
    chars: Vec<char>,
    /// Current position in chars
    current: usize,
    /// Current line number (1-indexed)
    line: u32,
    /// Current column number (1-indexed)
    column: u32,
    /// Start line of current token
    start_line: u32,
    /// Start column of current token
    start_column: u32,
}

impl Lexer {
    /// Create a new lexer for the given source code
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
        }
    }

    /// Tokenize the source code. On success the stream always ends with
    /// exactly one `EndOfInput` token.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::EndOfInput;
            tokens.push(token);
            if done {
                break;
            }
        }

        Ok(tokens)
    }

    /// Scan the next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments();

        // Mark start of token
        self.start_line = self.line;
        self.start_column = self.column;

        if self.is_at_end() {
            return Ok(self.make_token(TokenKind::EndOfInput, ""));
        }

        let c = self.advance();

        match c {
            // Single-character symbols
            '(' => Ok(self.make_token(TokenKind::Symbol, "(")),
            ')' => Ok(self.make_token(TokenKind::Symbol, ")")),
            '{' => Ok(self.make_token(TokenKind::Symbol, "{")),
            '}' => Ok(self.make_token(TokenKind::Symbol, "}")),
            '[' => Ok(self.make_token(TokenKind::Symbol, "[")),
            ']' => Ok(self.make_token(TokenKind::Symbol, "]")),
            ';' => Ok(self.make_token(TokenKind::Symbol, ";")),
            ',' => Ok(self.make_token(TokenKind::Symbol, ",")),
            '.' => Ok(self.make_token(TokenKind::Symbol, ".")),
            ':' => Ok(self.make_token(TokenKind::Symbol, ":")),
            '+' => Ok(self.make_token(TokenKind::Symbol, "+")),
            '-' => Ok(self.make_token(TokenKind::Symbol, "-")),
            '*' => Ok(self.make_token(TokenKind::Symbol, "*")),
            '/' => Ok(self.make_token(TokenKind::Symbol, "/")),

            // Two-character symbols, matched greedily before the one-character form
            '=' => {
                if self.match_char('=') {
                    Ok(self.make_token(TokenKind::Symbol, "=="))
                } else {
                    Ok(self.make_token(TokenKind::Symbol, "="))
                }
            }
            '!' => {
                // Bare `!` is not in the symbol set, only `!=` is
                if self.match_char('=') {
                    Ok(self.make_token(TokenKind::Symbol, "!="))
                } else {
                    Err(self.unexpected(c))
                }
            }
            '<' => {
                if self.match_char('=') {
                    Ok(self.make_token(TokenKind::Symbol, "<="))
                } else {
                    Ok(self.make_token(TokenKind::Symbol, "<"))
                }
            }
            '>' => {
                if self.match_char('=') {
                    Ok(self.make_token(TokenKind::Symbol, ">="))
                } else {
                    Ok(self.make_token(TokenKind::Symbol, ">"))
                }
            }

            // String literals
            '"' => self.string(),

            // Numbers
            c if c.is_ascii_digit() => Ok(self.number()),

            // Identifiers and keywords
            c if c.is_ascii_alphabetic() || c == '_' => Ok(self.word()),

            // Unexpected character
            _ => Err(self.unexpected(c)),
        }
    }

    /// Skip whitespace and `//` line comments
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            if self.is_at_end() {
                return;
            }

            match self.peek() {
                ' ' | '\r' | '\t' => {
                    self.advance();
                }
                '\n' => {
                    self.advance();
                    self.line += 1;
                    self.column = 1;
                }
                '/' => {
                    if self.peek_next() == Some('/') {
                        // Comment runs to end of line
                        while !self.is_at_end() && self.peek() != '\n' {
                            self.advance();
                        }
                    } else {
                        return;
                    }
                }
                _ => return,
            }
        }
    }

    /// Scan a string literal. The token text keeps the raw character
    /// sequence including both quote characters; escapes are not decoded,
    /// a backslash only protects the following character from terminating
    /// the scan. Strings may span newlines.
    fn string(&mut self) -> Result<Token, LexError> {
        let mut text = String::from('"');

        while !self.is_at_end() && self.peek() != '"' {
            let c = self.advance();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            }
            text.push(c);

            if c == '\\' {
                if self.is_at_end() {
                    break;
                }
                let escaped = self.advance();
                if escaped == '\n' {
                    self.line += 1;
                    self.column = 1;
                }
                text.push(escaped);
            }
        }

        if self.is_at_end() {
            // Unterminated: the opening quote itself is the unexpected character
            return Err(self.unexpected('"'));
        }

        self.advance(); // Closing "
        text.push('"');
        Ok(self.make_token(TokenKind::String, &text))
    }

    /// Scan a number literal: digits with an optional single `.` followed
    /// by at least one more digit
    fn number(&mut self) -> Token {
        let start = self.current - 1; // -1 because we already advanced past first digit

        while !self.is_at_end() && self.peek().is_ascii_digit() {
            self.advance();
        }

        // A dot only belongs to the number when a digit follows it, so
        // `5.` lexes as the number `5` and then the symbol `.`
        if !self.is_at_end() && self.peek() == '.' {
            if let Some(c) = self.peek_next() {
                if c.is_ascii_digit() {
                    self.advance(); // consume .

                    while !self.is_at_end() && self.peek().is_ascii_digit() {
                        self.advance();
                    }
                }
            }
        }

        let lexeme: String = self.chars[start..self.current].iter().collect();
        self.make_token(TokenKind::Number, &lexeme)
    }

    /// Scan an identifier or keyword: ASCII letter or `_`, then ASCII
    /// alphanumerics or `_`
    fn word(&mut self) -> Token {
        let start = self.current - 1; // -1 because we already advanced past first char

        while !self.is_at_end() {
            let c = self.peek();
            if c.is_ascii_alphanumeric() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        let lexeme: String = self.chars[start..self.current].iter().collect();
        let kind = TokenKind::for_word(&lexeme);

        self.make_token(kind, &lexeme)
    }

    // === Character navigation ===

    /// Advance to next character and return it
    fn advance(&mut self) -> char {
        let c = self.chars[self.current];
        self.current += 1;
        self.column += 1;
        c
    }

    /// Peek at current character without advancing
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    /// Peek at next character (current + 1)
    fn peek_next(&self) -> Option<char> {
        if self.current + 1 >= self.chars.len() {
            None
        } else {
            Some(self.chars[self.current + 1])
        }
    }

    /// Check if current character matches expected, and advance if so
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.chars[self.current] != expected {
            false
        } else {
            self.advance();
            true
        }
    }

    /// Check if we've reached the end of source
    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    // === Token creation ===

    /// Create a token starting at the marked position
    fn make_token(&self, kind: TokenKind, text: &str) -> Token {
        Token::new(kind, text, self.start_line, self.start_column)
    }

    /// Error for a character that cannot start a token, at the marked position
    fn unexpected(&self, ch: char) -> LexError {
        LexError {
            ch,
            line: self.start_line,
            column: self.start_column,
        }
    }
}

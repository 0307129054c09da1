//! Expression parsing
//!
//! Two precedence levels only: `*` and `/` bind tighter, and everything
//! else (`+ - == != < > <= >=`) shares one flat left-associative tier. That
//! flat tier is a deliberate language property: `a == b + 1` parses as
//! `(a == b) + 1`. There is no unary minus; `-x` only appears as the right
//! operand of a binary `-`.

use super::{ParseError, Parser};
use crate::ast::{BinOp, BinaryExpr, Expr};
use crate::token::TokenKind;

/// The flat additive/comparison tier
const EXPRESSION_OPS: [&str; 8] = ["+", "-", "==", "!=", "<", ">", "<=", ">="];

/// The multiplicative tier
const TERM_OPS: [&str; 2] = ["*", "/"];

impl Parser {
    /// Parse an expression on the flat tier
    pub(super) fn expression(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.term()?;

        while let Some(op) = self.current_operator(&EXPRESSION_OPS) {
            self.advance();
            let right = self.term()?;
            expr = Expr::Binary(BinaryExpr::new(op, expr, right));
        }

        Ok(expr)
    }

    /// Parse a term on the multiplicative tier
    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.factor()?;

        while let Some(op) = self.current_operator(&TERM_OPS) {
            self.advance();
            let right = self.factor()?;
            expr = Expr::Binary(BinaryExpr::new(op, expr, right));
        }

        Ok(expr)
    }

    /// Parse a factor: literal, identifier, or parenthesized expression
    fn factor(&mut self) -> Result<Expr, ParseError> {
        let token = self.current().clone();
        match token.kind {
            TokenKind::Number => {
                self.advance();
                let value: f64 = token.text.parse().unwrap_or(0.0);
                Ok(Expr::Number(value))
            }
            TokenKind::String => {
                self.advance();
                Ok(Expr::Str(token.text))
            }
            TokenKind::Identifier => {
                self.advance();
                Ok(Expr::Identifier(token.text))
            }
            TokenKind::Symbol if token.text == "(" => {
                self.advance();
                let expr = self.expression()?;
                self.expect_symbol(")")?;
                Ok(expr)
            }
            _ => Err(self.unexpected()),
        }
    }

    /// The operator on the current symbol token, restricted to one tier
    fn current_operator(&self, tier: &[&str]) -> Option<BinOp> {
        let token = self.current();
        if token.kind != TokenKind::Symbol || !tier.contains(&token.text.as_str()) {
            return None;
        }
        BinOp::from_symbol(&token.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer;
    use pretty_assertions::assert_eq;

    fn parse_expr(source: &str) -> Expr {
        let tokens = lexer::tokenize(source).expect("lexing should succeed");
        let mut parser = Parser::new(tokens);
        let expr = parser.expression().expect("parsing should succeed");
        assert!(parser.is_at_end(), "expression should consume all tokens");
        expr
    }

    fn binary(op: BinOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary(BinaryExpr::new(op, left, right))
    }

    #[test]
    fn test_number_literal() {
        assert_eq!(parse_expr("42"), Expr::Number(42.0));
        assert_eq!(parse_expr("3.14"), Expr::Number(3.14));
    }

    #[test]
    fn test_string_literal_keeps_quotes() {
        assert_eq!(parse_expr("\"hi\""), Expr::Str("\"hi\"".to_string()));
    }

    #[test]
    fn test_identifier() {
        assert_eq!(parse_expr("droid"), Expr::Identifier("droid".to_string()));
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        assert_eq!(
            parse_expr("1 + 2 * 3"),
            binary(
                BinOp::Add,
                Expr::Number(1.0),
                binary(BinOp::Mul, Expr::Number(2.0), Expr::Number(3.0)),
            )
        );
    }

    #[test]
    fn test_flat_tier_is_left_associative() {
        assert_eq!(
            parse_expr("1 - 2 + 3"),
            binary(
                BinOp::Add,
                binary(BinOp::Sub, Expr::Number(1.0), Expr::Number(2.0)),
                Expr::Number(3.0),
            )
        );
    }

    #[test]
    fn test_comparison_shares_the_flat_tier() {
        // `a < b + 1` is `(a < b) + 1`, not `a < (b + 1)`
        assert_eq!(
            parse_expr("a < b + 1"),
            binary(
                BinOp::Add,
                binary(
                    BinOp::Lt,
                    Expr::Identifier("a".to_string()),
                    Expr::Identifier("b".to_string()),
                ),
                Expr::Number(1.0),
            )
        );
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(
            parse_expr("(1 + 2) * 3"),
            binary(
                BinOp::Mul,
                binary(BinOp::Add, Expr::Number(1.0), Expr::Number(2.0)),
                Expr::Number(3.0),
            )
        );
    }

    #[test]
    fn test_no_unary_minus() {
        let tokens = lexer::tokenize("-1").unwrap();
        let mut parser = Parser::new(tokens);
        let err = parser.expression().unwrap_err();
        assert!(matches!(err, ParseError::Unexpected { .. }));
    }

    #[test]
    fn test_missing_operand_fails() {
        let tokens = lexer::tokenize("1 +").unwrap();
        let mut parser = Parser::new(tokens);
        let err = parser.expression().unwrap_err();
        match err {
            ParseError::Unexpected { found, .. } => assert_eq!(found, "end of input"),
            other => panic!("expected unexpected-token error, got {:?}", other),
        }
    }

    #[test]
    fn test_unclosed_parenthesis_fails() {
        let tokens = lexer::tokenize("(1 + 2").unwrap();
        let mut parser = Parser::new(tokens);
        let err = parser.expression().unwrap_err();
        match err {
            ParseError::Expected { expected, .. } => assert_eq!(expected, "symbol ')'"),
            other => panic!("expected mismatch error, got {:?}", other),
        }
    }

    #[test]
    fn test_division_parses_on_term_tier() {
        assert_eq!(
            parse_expr("6 / 2 / 3"),
            binary(
                BinOp::Div,
                binary(BinOp::Div, Expr::Number(6.0), Expr::Number(2.0)),
                Expr::Number(3.0),
            )
        );
    }
}

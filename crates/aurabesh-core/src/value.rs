//! Runtime values and runtime errors

use crate::ast::BinOp;
use std::fmt;
use thiserror::Error;

/// Runtime value: number, string, boolean, or the absent value
///
/// String values hold the raw literal text including both quote characters;
/// the quotes are stripped only when the value is displayed.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Str(String),
    Bool(bool),
    Null,
}

impl Value {
    /// Native truthiness: zero, the empty string, `false`, and `Null` are
    /// falsy; everything else is truthy
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Number(n) => *n != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::Bool(b) => *b,
            Value::Null => false,
        }
    }

    /// Type name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
            Value::Null => "null",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => {
                // Format number nicely (no trailing .0 for whole numbers)
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{:.0}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Str(s) => {
                // Strip the one surrounding quote pair the literal carried
                let content = s
                    .strip_prefix('"')
                    .and_then(|rest| rest.strip_suffix('"'))
                    .unwrap_or(s);
                write!(f, "{}", content)
            }
            Value::Bool(b) => write!(f, "{}", b),
            Value::Null => write!(f, "null"),
        }
    }
}

/// Error raised while executing a program
///
/// Runtime errors carry no source position: the tree the interpreter walks
/// has none. A `try` block swallows any of these; everywhere else they
/// propagate to the caller and end the run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeError {
    /// Sith-gated construct reached while the interpreter's Force Path is
    /// not Sith
    #[error("{construct} is only allowed for Sith")]
    ForcePathDenied { construct: &'static str },
    /// Operator applied to operand types it does not support
    #[error("cannot apply '{op}' to {lhs} and {rhs}")]
    TypeMismatch {
        op: BinOp,
        lhs: &'static str,
        rhs: &'static str,
    },
    /// Division by zero
    #[error("division by zero")]
    DivisionByZero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(Value::Number(1.0).is_truthy());
        assert!(Value::Number(-0.5).is_truthy());
        assert!(!Value::Number(0.0).is_truthy());
        assert!(Value::Str("\"x\"".to_string()).is_truthy());
        assert!(!Value::Str(String::new()).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Null.is_truthy());
    }

    #[test]
    fn test_number_display_drops_trailing_zero() {
        assert_eq!(Value::Number(7.0).to_string(), "7");
        assert_eq!(Value::Number(3.14).to_string(), "3.14");
        assert_eq!(Value::Number(-2.0).to_string(), "-2");
    }

    #[test]
    fn test_string_display_strips_quotes() {
        assert_eq!(Value::Str("\"caught\"".to_string()).to_string(), "caught");
        assert_eq!(Value::Str("\"\"".to_string()).to_string(), "");
    }

    #[test]
    fn test_string_display_keeps_interior_escapes_raw() {
        assert_eq!(
            Value::Str(r#""a\"b""#.to_string()).to_string(),
            r#"a\"b"#
        );
    }

    #[test]
    fn test_null_and_bool_display() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }

    #[test]
    fn test_error_messages() {
        let err = RuntimeError::ForcePathDenied {
            construct: "switch",
        };
        assert_eq!(err.to_string(), "switch is only allowed for Sith");

        let err = RuntimeError::TypeMismatch {
            op: BinOp::Sub,
            lhs: "string",
            rhs: "number",
        };
        assert_eq!(err.to_string(), "cannot apply '-' to string and number");

        assert_eq!(RuntimeError::DivisionByZero.to_string(), "division by zero");
    }
}

//! Expression evaluation
//!
//! Operators follow the operands' native semantics: numbers use `f64`
//! arithmetic (overflow to infinity included), strings order and
//! concatenate on their raw text, and equality across different types is
//! simply false. Only a zero divisor and an unsupported operand pairing
//! raise errors.

use crate::ast::{BinOp, BinaryExpr, Expr};
use crate::interpreter::Interpreter;
use crate::value::{RuntimeError, Value};
use std::cmp::Ordering;

impl Interpreter {
    /// Evaluate an expression to a value
    pub(super) fn evaluate(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::Str(s) => Ok(Value::Str(s.clone())),
            Expr::Identifier(name) => Ok(self.env.get(name)),
            Expr::Binary(binary) => self.eval_binary(binary),
        }
    }

    /// Evaluate both operands, then apply the operator
    fn eval_binary(&mut self, binary: &BinaryExpr) -> Result<Value, RuntimeError> {
        let left = self.evaluate(&binary.left)?;
        let right = self.evaluate(&binary.right)?;
        apply_binary(binary.op, left, right)
    }
}

/// Apply an operator to two already-evaluated operands
fn apply_binary(op: BinOp, left: Value, right: Value) -> Result<Value, RuntimeError> {
    match op {
        BinOp::Add => match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            // Concatenation joins the raw text, quotes and all
            (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{}{}", a, b))),
            (l, r) => Err(type_mismatch(op, &l, &r)),
        },
        BinOp::Sub => arithmetic(op, left, right, |a, b| a - b),
        BinOp::Mul => arithmetic(op, left, right, |a, b| a * b),
        BinOp::Div => match (left, right) {
            (Value::Number(_), Value::Number(b)) if b == 0.0 => Err(RuntimeError::DivisionByZero),
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a / b)),
            (l, r) => Err(type_mismatch(op, &l, &r)),
        },
        BinOp::Eq => Ok(Value::Bool(left == right)),
        BinOp::Ne => Ok(Value::Bool(left != right)),
        BinOp::Lt => comparison(op, left, right, Ordering::is_lt),
        BinOp::Gt => comparison(op, left, right, Ordering::is_gt),
        BinOp::Le => comparison(op, left, right, Ordering::is_le),
        BinOp::Ge => comparison(op, left, right, Ordering::is_ge),
    }
}

/// Numeric-only operator
fn arithmetic(
    op: BinOp,
    left: Value,
    right: Value,
    apply: fn(f64, f64) -> f64,
) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(apply(a, b))),
        (l, r) => Err(type_mismatch(op, &l, &r)),
    }
}

/// Ordering comparison: number against number or string against string.
/// A NaN operand compares false, matching `f64` semantics.
fn comparison(
    op: BinOp,
    left: Value,
    right: Value,
    accept: fn(Ordering) -> bool,
) -> Result<Value, RuntimeError> {
    let ordering = match (&left, &right) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        _ => return Err(type_mismatch(op, &left, &right)),
    };
    Ok(Value::Bool(ordering.map_or(false, accept)))
}

fn type_mismatch(op: BinOp, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::TypeMismatch {
        op,
        lhs: left.type_name(),
        rhs: right.type_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    fn s(text: &str) -> Value {
        Value::Str(text.to_string())
    }

    #[rstest]
    #[case(BinOp::Add, 6.0, 2.0, 8.0)]
    #[case(BinOp::Sub, 6.0, 2.0, 4.0)]
    #[case(BinOp::Mul, 6.0, 2.0, 12.0)]
    #[case(BinOp::Div, 6.0, 2.0, 3.0)]
    fn test_numeric_arithmetic(
        #[case] op: BinOp,
        #[case] a: f64,
        #[case] b: f64,
        #[case] expected: f64,
    ) {
        assert_eq!(apply_binary(op, num(a), num(b)).unwrap(), num(expected));
    }

    #[test]
    fn test_string_concatenation_joins_raw_text() {
        assert_eq!(
            apply_binary(BinOp::Add, s("\"a\""), s("\"b\"")).unwrap(),
            s("\"a\"\"b\"")
        );
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            apply_binary(BinOp::Div, num(1.0), num(0.0)).unwrap_err(),
            RuntimeError::DivisionByZero
        );
        // Negative zero divides by zero too
        assert_eq!(
            apply_binary(BinOp::Div, num(1.0), num(-0.0)).unwrap_err(),
            RuntimeError::DivisionByZero
        );
    }

    #[rstest]
    #[case(BinOp::Sub)]
    #[case(BinOp::Mul)]
    #[case(BinOp::Div)]
    fn test_arithmetic_rejects_strings(#[case] op: BinOp) {
        let err = apply_binary(op, s("\"a\""), num(1.0)).unwrap_err();
        assert_eq!(
            err,
            RuntimeError::TypeMismatch {
                op,
                lhs: "string",
                rhs: "number"
            }
        );
    }

    #[test]
    fn test_add_rejects_mixed_operands() {
        let err = apply_binary(BinOp::Add, num(1.0), s("\"a\"")).unwrap_err();
        assert!(matches!(err, RuntimeError::TypeMismatch { .. }));
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(apply_binary(BinOp::Eq, num(1.0), num(1.0)).unwrap(), Value::Bool(true));
        assert_eq!(apply_binary(BinOp::Eq, s("\"a\""), s("\"a\"")).unwrap(), Value::Bool(true));
        assert_eq!(apply_binary(BinOp::Ne, num(1.0), num(2.0)).unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_equality_across_types_is_false_not_an_error() {
        assert_eq!(
            apply_binary(BinOp::Eq, num(1.0), s("\"1\"")).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            apply_binary(BinOp::Ne, Value::Null, num(0.0)).unwrap(),
            Value::Bool(true)
        );
    }

    #[rstest]
    #[case(BinOp::Lt, 1.0, 2.0, true)]
    #[case(BinOp::Lt, 2.0, 2.0, false)]
    #[case(BinOp::Le, 2.0, 2.0, true)]
    #[case(BinOp::Gt, 3.0, 2.0, true)]
    #[case(BinOp::Ge, 1.0, 2.0, false)]
    fn test_numeric_ordering(
        #[case] op: BinOp,
        #[case] a: f64,
        #[case] b: f64,
        #[case] expected: bool,
    ) {
        assert_eq!(
            apply_binary(op, num(a), num(b)).unwrap(),
            Value::Bool(expected)
        );
    }

    #[test]
    fn test_string_ordering_is_lexicographic() {
        assert_eq!(
            apply_binary(BinOp::Lt, s("\"abc\""), s("\"abd\"")).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn test_ordering_rejects_mixed_types() {
        let err = apply_binary(BinOp::Lt, num(1.0), s("\"a\"")).unwrap_err();
        assert_eq!(
            err,
            RuntimeError::TypeMismatch {
                op: BinOp::Lt,
                lhs: "number",
                rhs: "string"
            }
        );
    }

    #[test]
    fn test_nan_comparisons_are_false() {
        let nan = f64::NAN;
        assert_eq!(
            apply_binary(BinOp::Lt, num(nan), num(1.0)).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            apply_binary(BinOp::Ge, num(nan), num(1.0)).unwrap(),
            Value::Bool(false)
        );
    }

    #[test]
    fn test_overflow_follows_native_float_semantics() {
        let huge = f64::MAX;
        assert_eq!(
            apply_binary(BinOp::Mul, num(huge), num(2.0)).unwrap(),
            num(f64::INFINITY)
        );
    }
}

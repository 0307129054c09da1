//! Abstract Syntax Tree (AST) definitions
//!
//! The node set is closed: every variant below is produced by exactly one
//! grammar rule, except `FunctionDecl`, which the grammar models but never
//! constructs. Nodes carry no source positions; parse errors are reported
//! from tokens, and runtime errors are position-free.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level program: the statements in source order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    /// Serialize to pretty JSON (used by the `aura ast` dump)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Statement node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    VarDecl(VarDecl),
    /// Dead grammar: no production builds this variant, and nothing in the
    /// language can call a function. It stays in the vocabulary on purpose.
    FunctionDecl(FunctionDecl),
    Print(PrintStmt),
    For(ForStmt),
    While(WhileStmt),
    If(IfStmt),
    TryCatch(TryCatchStmt),
    Switch(SwitchStmt),
}

/// Variable declaration / reassignment: `name = expr;`
///
/// Declaration and reassignment are the same operation; there is one global
/// environment and a second `x = …` simply overwrites the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDecl {
    pub name: String,
    pub value: Expr,
}

/// Function declaration (never constructed by the parser)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
}

/// `print expr;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintStmt {
    pub value: Expr,
}

/// `for (init condition; update) { … }` where init and update are both
/// variable declarations with their own terminating `;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForStmt {
    pub init: VarDecl,
    pub condition: Expr,
    pub update: VarDecl,
    pub body: Vec<Stmt>,
}

/// `while (condition) { … }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Vec<Stmt>,
}

/// `if (condition) { … } else { … }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_branch: Vec<Stmt>,
    pub else_branch: Option<Vec<Stmt>>,
}

/// `try { … } catch { … }` (Sith only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TryCatchStmt {
    pub try_block: Vec<Stmt>,
    pub catch_block: Vec<Stmt>,
}

/// `switch (expr) { case …: … default: … }` (Sith only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchStmt {
    pub subject: Expr,
    pub cases: Vec<Case>,
    pub default: Option<Vec<Stmt>>,
}

/// One `case value: statements` clause
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub value: Expr,
    pub body: Vec<Stmt>,
}

/// Expression node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Number literal, converted from its lexeme at parse time
    Number(f64),
    /// String literal, raw text including the surrounding quotes
    Str(String),
    /// Variable reference
    Identifier(String),
    Binary(BinaryExpr),
}

/// Binary operation: `left op right`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub op: BinOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

impl BinaryExpr {
    /// Build a binary expression, boxing both operands
    pub fn new(op: BinOp, left: Expr, right: Expr) -> Self {
        Self {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Binary operator
///
/// `Add` through `Ge` all live on one flat left-associative precedence tier
/// except `Mul` and `Div`, which bind tighter. There are no unary or logical
/// operators in the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl BinOp {
    /// Look up the operator for a symbol token's text
    pub fn from_symbol(text: &str) -> Option<BinOp> {
        match text {
            "+" => Some(BinOp::Add),
            "-" => Some(BinOp::Sub),
            "*" => Some(BinOp::Mul),
            "/" => Some(BinOp::Div),
            "==" => Some(BinOp::Eq),
            "!=" => Some(BinOp::Ne),
            "<" => Some(BinOp::Lt),
            ">" => Some(BinOp::Gt),
            "<=" => Some(BinOp::Le),
            ">=" => Some(BinOp::Ge),
            _ => None,
        }
    }

    /// The surface symbol for this operator
    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Gt => ">",
            BinOp::Le => "<=",
            BinOp::Ge => ">=",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binop_symbol_round_trip() {
        let ops = [
            BinOp::Add,
            BinOp::Sub,
            BinOp::Mul,
            BinOp::Div,
            BinOp::Eq,
            BinOp::Ne,
            BinOp::Lt,
            BinOp::Gt,
            BinOp::Le,
            BinOp::Ge,
        ];
        for op in ops {
            assert_eq!(BinOp::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_from_symbol_rejects_non_operators() {
        assert_eq!(BinOp::from_symbol("="), None);
        assert_eq!(BinOp::from_symbol(";"), None);
        assert_eq!(BinOp::from_symbol("!"), None);
    }

    #[test]
    fn test_program_json_round_trip() {
        let program = Program {
            statements: vec![Stmt::VarDecl(VarDecl {
                name: "x".to_string(),
                value: Expr::Binary(BinaryExpr::new(
                    BinOp::Add,
                    Expr::Number(1.0),
                    Expr::Number(2.0),
                )),
            })],
        };

        let json = program.to_json().expect("serialization should succeed");
        let parsed = Program::from_json(&json).expect("deserialization should succeed");
        assert_eq!(parsed, program);
    }
}

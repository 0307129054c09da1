//! Statement execution

use crate::ast::{ForStmt, IfStmt, PrintStmt, Stmt, SwitchStmt, TryCatchStmt, VarDecl, WhileStmt};
use crate::interpreter::Interpreter;
use crate::value::RuntimeError;

impl Interpreter {
    /// Execute a statement, dispatching over the closed node set
    pub(super) fn execute(&mut self, stmt: &Stmt) -> Result<(), RuntimeError> {
        match stmt {
            Stmt::VarDecl(decl) => self.execute_var_decl(decl),
            Stmt::FunctionDecl(decl) => {
                // Inert registration: nothing in the language can invoke it
                self.env.define_function(decl.clone());
                Ok(())
            }
            Stmt::Print(print) => self.execute_print(print),
            Stmt::For(stmt) => self.execute_for(stmt),
            Stmt::While(stmt) => self.execute_while(stmt),
            Stmt::If(stmt) => self.execute_if(stmt),
            Stmt::TryCatch(stmt) => self.execute_try_catch(stmt),
            Stmt::Switch(stmt) => self.execute_switch(stmt),
        }
    }

    /// Evaluate and bind; declaration and reassignment are one operation
    fn execute_var_decl(&mut self, decl: &VarDecl) -> Result<(), RuntimeError> {
        let value = self.evaluate(&decl.value)?;
        self.env.define(decl.name.clone(), value);
        Ok(())
    }

    /// Evaluate and append one output line
    fn execute_print(&mut self, print: &PrintStmt) -> Result<(), RuntimeError> {
        let value = self.evaluate(&print.value)?;
        self.output.push(value.to_string());
        Ok(())
    }

    /// Init once, then body and update while the condition holds. The init
    /// variable lives in the shared environment and survives the loop.
    fn execute_for(&mut self, stmt: &ForStmt) -> Result<(), RuntimeError> {
        self.execute_var_decl(&stmt.init)?;
        while self.evaluate(&stmt.condition)?.is_truthy() {
            self.execute_block(&stmt.body)?;
            self.execute_var_decl(&stmt.update)?;
        }
        Ok(())
    }

    fn execute_while(&mut self, stmt: &WhileStmt) -> Result<(), RuntimeError> {
        while self.evaluate(&stmt.condition)?.is_truthy() {
            self.execute_block(&stmt.body)?;
        }
        Ok(())
    }

    fn execute_if(&mut self, stmt: &IfStmt) -> Result<(), RuntimeError> {
        if self.evaluate(&stmt.condition)?.is_truthy() {
            self.execute_block(&stmt.then_branch)?;
        } else if let Some(else_branch) = &stmt.else_branch {
            self.execute_block(else_branch)?;
        }
        Ok(())
    }

    /// Try/catch, Sith only; the permission check runs before the try block
    /// does. A failing try block stops at its first error, the error value
    /// is discarded, and the catch block runs in its place. Errors from the
    /// catch block itself propagate normally.
    fn execute_try_catch(&mut self, stmt: &TryCatchStmt) -> Result<(), RuntimeError> {
        self.require_sith("try/catch")?;

        if self.execute_block(&stmt.try_block).is_err() {
            self.execute_block(&stmt.catch_block)?;
        }
        Ok(())
    }

    /// Switch, Sith only. The subject evaluates exactly once; every case
    /// whose value equals it runs (matching is not exclusive), and the
    /// default runs only when no case matched.
    fn execute_switch(&mut self, stmt: &SwitchStmt) -> Result<(), RuntimeError> {
        self.require_sith("switch")?;

        let subject = self.evaluate(&stmt.subject)?;
        let mut matched = false;

        for case in &stmt.cases {
            let value = self.evaluate(&case.value)?;
            if value == subject {
                matched = true;
                self.execute_block(&case.body)?;
            }
        }

        if !matched {
            if let Some(default) = &stmt.default {
                self.execute_block(default)?;
            }
        }

        Ok(())
    }

    /// Execute statements in order against the shared environment; there is
    /// no block scope to restore
    fn execute_block(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for stmt in statements {
            self.execute(stmt)?;
        }
        Ok(())
    }

    /// Fail unless the interpreter's own Force Path is Sith
    fn require_sith(&self, construct: &'static str) -> Result<(), RuntimeError> {
        if self.force_path.is_sith() {
            Ok(())
        } else {
            Err(RuntimeError::ForcePathDenied { construct })
        }
    }
}

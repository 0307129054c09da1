//! Statement parsing

use super::{ParseError, Parser};
use crate::ast::{Case, ForStmt, IfStmt, PrintStmt, Stmt, SwitchStmt, TryCatchStmt, VarDecl, WhileStmt};
use crate::token::TokenKind;

impl Parser {
    /// Parse one statement, dispatching on the leading keyword; a leading
    /// identifier always opens a variable declaration
    pub(super) fn statement(&mut self) -> Result<Stmt, ParseError> {
        let token = self.current();
        match token.kind {
            TokenKind::Keyword => match token.text.as_str() {
                "print" => self.print_statement(),
                "for" => self.for_loop(),
                "while" => self.while_loop(),
                "if" => self.if_statement(),
                "try" => self.try_catch(),
                "switch" => self.switch_statement(),
                // The remaining reserved words have no production
                _ => Err(self.unexpected()),
            },
            TokenKind::Identifier => Ok(Stmt::VarDecl(self.variable_declaration()?)),
            _ => Err(self.unexpected()),
        }
    }

    /// `name = expression ;` — also the init and update productions of `for`
    pub(super) fn variable_declaration(&mut self) -> Result<VarDecl, ParseError> {
        let name = self.expect(TokenKind::Identifier, None)?.text;
        self.expect_symbol("=")?;
        let value = self.expression()?;
        self.expect_symbol(";")?;
        Ok(VarDecl { name, value })
    }

    /// `print expression ;`
    fn print_statement(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // print
        let value = self.expression()?;
        self.expect_symbol(";")?;
        Ok(Stmt::Print(PrintStmt { value }))
    }

    /// `for ( varDecl expression ; varDecl ) block`
    ///
    /// Both the init and the update are full declarations carrying their own
    /// `;`, so the canonical form reads `for (i = 0; i < 3; i = i + 1;) { }`.
    fn for_loop(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // for
        self.expect_symbol("(")?;
        let init = self.variable_declaration()?;
        let condition = self.expression()?;
        self.expect_symbol(";")?;
        let update = self.variable_declaration()?;
        self.expect_symbol(")")?;
        let body = self.block()?;
        Ok(Stmt::For(ForStmt {
            init,
            condition,
            update,
            body,
        }))
    }

    /// `while ( expression ) block`
    fn while_loop(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // while
        self.expect_symbol("(")?;
        let condition = self.expression()?;
        self.expect_symbol(")")?;
        let body = self.block()?;
        Ok(Stmt::While(WhileStmt { condition, body }))
    }

    /// `if ( expression ) block (else block)?`
    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // if
        self.expect_symbol("(")?;
        let condition = self.expression()?;
        self.expect_symbol(")")?;
        let then_branch = self.block()?;

        let else_branch = if self.match_keyword("else") {
            Some(self.block()?)
        } else {
            None
        };

        Ok(Stmt::If(IfStmt {
            condition,
            then_branch,
            else_branch,
        }))
    }

    /// `try block catch block` — Sith only, checked before `try` is consumed
    /// so the error points at the keyword
    fn try_catch(&mut self) -> Result<Stmt, ParseError> {
        self.require_sith("try/catch")?;
        self.advance(); // try
        let try_block = self.block()?;
        self.expect(TokenKind::Keyword, Some("catch"))?;
        let catch_block = self.block()?;
        Ok(Stmt::TryCatch(TryCatchStmt {
            try_block,
            catch_block,
        }))
    }

    /// `switch ( expression ) { caseClause* defaultClause? }` — Sith only
    ///
    /// Clause bodies are bare statement lists ending at the next clause
    /// keyword or `}`. A later `default` replaces an earlier one.
    fn switch_statement(&mut self) -> Result<Stmt, ParseError> {
        self.require_sith("switch")?;
        self.advance(); // switch
        self.expect_symbol("(")?;
        let subject = self.expression()?;
        self.expect_symbol(")")?;
        self.expect_symbol("{")?;

        let mut cases = Vec::new();
        let mut default = None;

        while !self.check_symbol("}") && !self.is_at_end() {
            if self.match_keyword("case") {
                let value = self.expression()?;
                self.expect_symbol(":")?;
                let body = self.clause_body()?;
                cases.push(Case { value, body });
            } else if self.match_keyword("default") {
                self.expect_symbol(":")?;
                default = Some(self.clause_body()?);
            } else {
                return Err(self.expected_error(TokenKind::Keyword, Some("case")));
            }
        }

        self.expect_symbol("}")?;
        Ok(Stmt::Switch(SwitchStmt {
            subject,
            cases,
            default,
        }))
    }

    /// Statements of one case/default clause
    fn clause_body(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut body = Vec::new();
        while !self.check_symbol("}")
            && !self.check_keyword("case")
            && !self.check_keyword("default")
            && !self.is_at_end()
        {
            body.push(self.statement()?);
        }
        Ok(body)
    }

    /// `{ statement* }`
    pub(super) fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.expect_symbol("{")?;
        let mut statements = Vec::new();
        while !self.check_symbol("}") && !self.is_at_end() {
            statements.push(self.statement()?);
        }
        self.expect_symbol("}")?;
        Ok(statements)
    }
}

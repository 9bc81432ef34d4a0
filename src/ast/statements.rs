use std::any::Any;

use crate::{lexer::tokens::Token, Span};

use super::{
    ast::{ExprWrapper, Node, Stmt, StmtType, StmtWrapper},
    expressions::IdentifierExpr,
};

/// `let <name> = <value>;`
#[derive(Debug, Clone)]
pub struct LetStmt {
    pub token: Token,
    pub name: IdentifierExpr,
    pub value: ExprWrapper,
    pub span: Span,
}

impl Node for LetStmt {
    fn token_literal(&self) -> String {
        self.token.value.clone()
    }
    fn to_source_string(&self) -> String {
        format!(
            "{} {} = {};",
            self.token_literal(),
            self.name.to_source_string(),
            self.value.to_source_string()
        )
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Stmt for LetStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::LetStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
}

/// `return <value>;`
#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub token: Token,
    pub return_value: ExprWrapper,
    pub span: Span,
}

impl Node for ReturnStmt {
    fn token_literal(&self) -> String {
        self.token.value.clone()
    }
    fn to_source_string(&self) -> String {
        format!(
            "{} {};",
            self.token_literal(),
            self.return_value.to_source_string()
        )
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Stmt for ReturnStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ReturnStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
}

/// A bare expression used as a statement. The token is the first token of
/// the expression.
#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: ExprWrapper,
    pub span: Span,
}

impl Node for ExpressionStmt {
    fn token_literal(&self) -> String {
        self.token.value.clone()
    }
    fn to_source_string(&self) -> String {
        self.expression.to_source_string()
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Stmt for ExpressionStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ExpressionStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
}

use std::any::Any;

use crate::{lexer::tokens::Token, Span};

use super::ast::{Expr, ExprType, ExprWrapper, Node};

// LITERALS

/// Identifier Expression
/// Represents a name in the AST, either a binding target or a reference.
#[derive(Debug, Clone)]
pub struct IdentifierExpr {
    pub token: Token,
    pub value: String,
}

impl Node for IdentifierExpr {
    fn token_literal(&self) -> String {
        self.token.value.clone()
    }
    fn to_source_string(&self) -> String {
        self.value.clone()
    }
    fn get_span(&self) -> &Span {
        &self.token.span
    }
}

impl Expr for IdentifierExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Identifier
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

/// Integer Expression
/// Represents a signed 64-bit integer literal in the AST.
#[derive(Debug, Clone)]
pub struct IntegerExpr {
    pub token: Token,
    pub value: i64,
}

impl Node for IntegerExpr {
    fn token_literal(&self) -> String {
        self.token.value.clone()
    }
    fn to_source_string(&self) -> String {
        self.token.value.clone()
    }
    fn get_span(&self) -> &Span {
        &self.token.span
    }
}

impl Expr for IntegerExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Integer
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

/// Boolean Expression
/// Represents `true` or `false` in the AST.
#[derive(Debug, Clone)]
pub struct BooleanExpr {
    pub token: Token,
    pub value: bool,
}

impl Node for BooleanExpr {
    fn token_literal(&self) -> String {
        self.token.value.clone()
    }
    fn to_source_string(&self) -> String {
        self.token.value.clone()
    }
    fn get_span(&self) -> &Span {
        &self.token.span
    }
}

impl Expr for BooleanExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Boolean
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}

// COMPLEX

/// Prefix Expression
/// Represents a unary operator applied to its operand, e.g. `-a` or `!ok`.
#[derive(Debug, Clone)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub right: ExprWrapper,
    pub span: Span,
}

impl Node for PrefixExpr {
    fn token_literal(&self) -> String {
        self.token.value.clone()
    }
    fn to_source_string(&self) -> String {
        format!("({}{})", self.operator, self.right.to_source_string())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Expr for PrefixExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Prefix
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn height(&self) -> usize {
        1 + self.right.height()
    }
}

/// Infix Expression
/// Represents a binary operation. The token is the operator.
#[derive(Debug, Clone)]
pub struct InfixExpr {
    pub token: Token,
    pub operator: String,
    pub left: ExprWrapper,
    pub right: ExprWrapper,
    pub span: Span,
}

impl Node for InfixExpr {
    fn token_literal(&self) -> String {
        self.token.value.clone()
    }
    fn to_source_string(&self) -> String {
        format!(
            "({} {} {})",
            self.left.to_source_string(),
            self.operator,
            self.right.to_source_string()
        )
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Expr for InfixExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Infix
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn height(&self) -> usize {
        1 + self.left.height().max(self.right.height())
    }
}

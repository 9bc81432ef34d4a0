use std::{any::Any, fmt::Debug};

use crate::Span;

/// Node Trait
///
/// Behaviour shared by every node in the tree, statement or expression.
pub trait Node: Debug {
    /// Returns the literal of the token the node was parsed from.
    fn token_literal(&self) -> String;
    /// Renders the node back to source text.
    ///
    /// Compound expressions are fully parenthesised, so the output shows
    /// exactly how precedence was resolved.
    fn to_source_string(&self) -> String;
    /// Returns the span of the node.
    fn get_span(&self) -> &Span;
}

/// Statement Types
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum StmtType {
    LetStmt,
    ReturnStmt,
    ExpressionStmt,
}

/// Statement Trait
///
/// Defines the behavior of all statement types in the AST.
pub trait Stmt: Node {
    /// Returns the type of the statement.
    fn get_stmt_type(&self) -> StmtType;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the statement into a StmtWrapper.
    /// Clone cannot be derived for certain trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> StmtWrapper;
}

/// Statement Wrapper
///
/// A wrapper that allows for any statement kind to be stored with helper methods
#[derive(Debug)]
pub struct StmtWrapper(Box<dyn Stmt>);

impl StmtWrapper {
    pub fn new<T: Stmt + 'static>(stmt: T) -> Self {
        StmtWrapper(Box::new(stmt))
    }

    pub fn downcast_ref<T: Stmt + 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }
}

impl Node for StmtWrapper {
    fn token_literal(&self) -> String {
        self.0.token_literal()
    }
    fn to_source_string(&self) -> String {
        self.0.to_source_string()
    }
    fn get_span(&self) -> &Span {
        self.0.get_span()
    }
}

impl Stmt for StmtWrapper {
    fn get_stmt_type(&self) -> StmtType {
        self.0.get_stmt_type()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        self.0.clone_wrapper()
    }
}

impl Clone for StmtWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ExprType {
    Identifier,
    Integer,
    Boolean,
    Prefix,
    Infix,
}

pub trait Expr: Node {
    /// Returns the expression type of the expression.
    fn get_expr_type(&self) -> ExprType;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the expression into an ExprWrapper.
    /// Clone cannot be derived for certain trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> ExprWrapper;
    /// Number of nodes on the longest path from this expression down to a leaf.
    fn height(&self) -> usize {
        1
    }
}

/// Expression Wrapper
///
/// A wrapper that allows for any expression kind to be stored with helper methods.
/// The height is cached when the wrapper is built, so asking for it never walks the tree.
#[derive(Debug)]
pub struct ExprWrapper {
    expr: Box<dyn Expr>,
    height: usize,
}

impl ExprWrapper {
    pub fn new<T: Expr + 'static>(expression: T) -> Self {
        let height = expression.height();
        ExprWrapper {
            expr: Box::new(expression),
            height,
        }
    }

    pub fn downcast_ref<T: Expr + 'static>(&self) -> Option<&T> {
        self.expr.as_any().downcast_ref::<T>()
    }
}

impl Node for ExprWrapper {
    fn token_literal(&self) -> String {
        self.expr.token_literal()
    }
    fn to_source_string(&self) -> String {
        self.expr.to_source_string()
    }
    fn get_span(&self) -> &Span {
        self.expr.get_span()
    }
}

impl Expr for ExprWrapper {
    fn get_expr_type(&self) -> ExprType {
        self.expr.get_expr_type()
    }
    fn as_any(&self) -> &dyn Any {
        self.expr.as_any()
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        self.expr.clone_wrapper()
    }
    fn height(&self) -> usize {
        self.height
    }
}

impl Clone for ExprWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}

/// Root Node
///
/// The top-level statements of a program, in source order.
#[derive(Debug, Clone, Default)]
pub struct RootNode {
    pub statements: Vec<StmtWrapper>,
}

impl RootNode {
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StmtWrapper> {
        self.statements.iter()
    }

    pub fn token_literal(&self) -> String {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or_default()
    }

    pub fn to_source_string(&self) -> String {
        let mut out = String::new();

        for (i, stmt) in self.statements.iter().enumerate() {
            out.push_str(&stmt.to_source_string());

            // Keep adjacent expression statements apart so the text re-parses
            // into the same statements.
            if stmt.get_stmt_type() == StmtType::ExpressionStmt && i + 1 < self.statements.len() {
                out.push(';');
            }
        }

        out
    }
}

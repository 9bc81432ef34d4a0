//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program entry points.
//! The parser pulls tokens from a [`Lexer`] on demand and keeps exactly two
//! of them in view: the token under consideration and the one after it.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::{collections::HashMap, mem};

use tracing::debug;

use crate::{
    ast::ast::{Expr, ExprWrapper, RootNode},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Default bound on expression tree height before parsing gives up.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens, pulled one at a time
    lexer: Lexer,
    /// The token being parsed
    current: Token,
    /// One token of lookahead past `current`
    next: Token,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for operator binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Current `parse_expr` recursion depth
    depth: usize,
    /// Prefix and infix operators still waiting on their operand
    open_operators: usize,
    /// Tallest expression tree accepted
    max_depth: usize,
}

impl Parser {
    /// Creates a new Parser reading from `lexer`, with the default nesting bound.
    pub fn new(lexer: Lexer) -> Self {
        Parser::with_max_depth(lexer, DEFAULT_MAX_DEPTH)
    }

    /// Creates a new Parser that rejects expression trees taller than `max_depth`.
    pub fn with_max_depth(mut lexer: Lexer, max_depth: usize) -> Self {
        let current = lexer.next_token();
        let next = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            next,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            depth: 0,
            open_operators: 0,
            max_depth,
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.next.kind
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.next.kind == kind
    }

    /// Shifts the lookahead into `current` and pulls a fresh token from the lexer.
    pub fn advance(&mut self) {
        self.current = mem::replace(&mut self.next, self.lexer.next_token());
    }

    /// Advances onto the lookahead if it has the expected kind.
    ///
    /// # Returns
    ///
    /// The token that is now current, or a peek error naming both kinds.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek_token_is(expected_kind) {
            self.advance();
            Ok(self.current.clone())
        } else {
            Err(self.peek_error(expected_kind))
        }
    }

    /// Builds the error for a lookahead token that did not match `expected`.
    pub fn peek_error(&self, expected: TokenKind) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                received: self.next.kind,
            },
            self.next.span.start.clone(),
        )
    }

    /// Builds the error for a token that cannot start an expression.
    pub fn no_prefix_parse_fn_error(&self, kind: TokenKind) -> Error {
        Error::new(ErrorImpl::NoPrefixParseFn { kind }, self.get_position())
    }

    /// Binding power of the lookahead token; anything that is not an operator is `Lowest`.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.next.kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    /// Binding power of the current token; anything that is not an operator is `Lowest`.
    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.current.kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Unlike `led`, this leaves the binding power alone: `-` is both a
    /// prefix and an infix operator and keeps its infix precedence.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Enters one level of `parse_expr` recursion.
    ///
    /// Rendering wraps every operator in parentheses, and each of those costs
    /// a grouping call on top of the operator's own operand call. A tree of
    /// height `max_depth` therefore re-parses within `2 * max_depth + 1` calls.
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        let call_limit = self.max_depth.saturating_mul(2).saturating_add(1);
        if self.depth >= call_limit {
            return Err(self.too_deeply_nested_error());
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Opens an operator that is about to parse its operand.
    ///
    /// Open operators lie on one path of the finished tree, so with `n` of
    /// them open the tree is at least `n + 1` nodes high. Failing here stops
    /// a long prefix chain before it recurses any deeper.
    pub fn enter_operator(&mut self) -> Result<(), Error> {
        if self.open_operators + 2 > self.max_depth {
            return Err(self.too_deeply_nested_error());
        }

        self.open_operators += 1;
        Ok(())
    }

    pub fn leave_operator(&mut self) {
        self.open_operators = self.open_operators.saturating_sub(1);
    }

    /// Rejects a freshly built expression taller than `max_depth`.
    ///
    /// Left-associative chains are folded by the Pratt loop without recursing,
    /// so only the finished node tells how tall they have grown.
    pub fn check_height(&self, expr: &ExprWrapper) -> Result<(), Error> {
        if expr.height() > self.max_depth {
            return Err(self.too_deeply_nested_error());
        }

        Ok(())
    }

    fn too_deeply_nested_error(&self) -> Error {
        Error::new(
            ErrorImpl::TooDeeplyNested {
                max_depth: self.max_depth,
            },
            self.get_position(),
        )
    }

    /// Returns the position of the current token in the source.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Parses statements until EOF.
    ///
    /// A statement that fails to parse is dropped and its error recorded;
    /// parsing resumes at the next statement so later problems are reported too.
    pub fn parse_program(&mut self) -> RootNode {
        let mut root = RootNode::default();

        while !self.current_token_is(TokenKind::EOF) {
            match parse_stmt(self) {
                Ok(stmt) => root.statements.push(stmt),
                Err(error) => {
                    debug!(error = %error, offset = error.get_position().0, "statement dropped");
                    self.errors.push(error);
                    self.synchronize();
                }
            }

            self.advance();
        }

        debug!(
            statements = root.statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );

        root
    }

    /// Skips the rest of a failed statement.
    ///
    /// Semicolons are optional, so a `let` or `return` in the lookahead also
    /// ends the statement. `parse_program` advances onto it afterwards.
    fn synchronize(&mut self) {
        while !self.current_token_is(TokenKind::Semicolon)
            && !self.current_token_is(TokenKind::EOF)
            && !self.peek_token_is(TokenKind::Let)
            && !self.peek_token_is(TokenKind::Return)
        {
            self.advance();
        }
    }

    /// Returns the messages of every diagnostic found so far, in discovery order.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Returns every diagnostic found so far, with positions.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }
}

/// Parses a complete source text.
///
/// This is the main entry point for parsing. It creates a lexer and parser
/// pair, parses all statements until EOF and hands back the diagnostics.
///
/// # Returns
///
/// The root node, which may be partial, and the diagnostics in discovery
/// order. The tree should only be trusted when the diagnostics are empty.
pub fn parse(source: String, file: Option<String>) -> (RootNode, Vec<Error>) {
    let mut parser = Parser::new(Lexer::with_file(source, file));
    let root = parser.parse_program();

    (root, parser.errors)
}

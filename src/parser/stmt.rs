use tracing::trace;

use crate::{
    ast::{
        ast::StmtWrapper,
        expressions::IdentifierExpr,
        statements::{ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    trace!(token = %parser.current_token_kind(), "parse_stmt");

    let stmt_fn = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    if let Some(stmt_fn) = stmt_fn {
        return stmt_fn(parser);
    }

    parse_expression_stmt(parser)
}

/// An expression followed by an optional `;`, so a REPL line like `1 + 2`
/// parses without a terminator.
pub fn parse_expression_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start_token = parser.current_token().clone();

    let expression = parse_expr(parser, BindingPower::Lowest)?;
    skip_optional_semicolon(parser);

    Ok(StmtWrapper::new(ExpressionStmt {
        span: Span {
            start: start_token.span.start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        token: start_token,
        expression,
    }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start_token = parser.current_token().clone();

    let name_token = parser.expect_peek(TokenKind::Identifier)?;
    let name = IdentifierExpr {
        value: name_token.value.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assign)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    skip_optional_semicolon(parser);

    Ok(StmtWrapper::new(LetStmt {
        span: Span {
            start: start_token.span.start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        token: start_token,
        name,
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start_token = parser.current_token().clone();
    parser.advance();

    let return_value = parse_expr(parser, BindingPower::Lowest)?;
    skip_optional_semicolon(parser);

    Ok(StmtWrapper::new(ReturnStmt {
        span: Span {
            start: start_token.span.start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        token: start_token,
        return_value,
    }))
}

fn skip_optional_semicolon(parser: &mut Parser) {
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }
}

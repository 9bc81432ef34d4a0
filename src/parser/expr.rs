use tracing::trace;

use crate::{
    ast::{
        ast::{ExprWrapper, Node},
        expressions::{BooleanExpr, IdentifierExpr, InfixExpr, IntegerExpr, PrefixExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses one expression whose operators all bind tighter than `bp`.
///
/// On return the current token is the last token of the expression.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, Error> {
    parser.enter_nesting()?;
    let result = parse_expr_inner(parser, bp);
    parser.leave_nesting();

    result
}

fn parse_expr_inner(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, Error> {
    let token_kind = parser.current_token_kind();
    trace!(token = %token_kind, ?bp, "parse_expr");

    // First parse NUD
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => return Err(parser.no_prefix_parse_fn_error(token_kind)),
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than bp, fold it into lhs
    while !parser.peek_token_is(TokenKind::Semicolon) && bp < parser.peek_binding_power() {
        let led = match parser.get_led_lookup().get(&parser.peek_token_kind()) {
            Some(led) => *led,
            None => return Ok(left),
        };

        parser.advance();
        let operator_bp = parser.current_binding_power();
        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();

    Ok(ExprWrapper::new(IdentifierExpr {
        value: token.value.clone(),
        token,
    }))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();
    trace!(literal = %token.value, "parse_integer_expr");

    match parse_int_literal(&token.value) {
        Some(value) => Ok(ExprWrapper::new(IntegerExpr { token, value })),
        None => Err(Error::new(
            ErrorImpl::IntegerParseError {
                token: token.value.clone(),
            },
            parser.get_position(),
        )),
    }
}

/// Parses an integer literal into an `i64`.
///
/// Plain digit runs are decimal, leading zeros included. `0x`, `0o` and `0b`
/// select hexadecimal, octal and binary.
pub fn parse_int_literal(literal: &str) -> Option<i64> {
    let (digits, radix) = match literal.get(..2) {
        Some("0x") | Some("0X") => (&literal[2..], 16),
        Some("0o") | Some("0O") => (&literal[2..], 8),
        Some("0b") | Some("0B") => (&literal[2..], 2),
        _ => (literal, 10),
    };

    // from_str_radix would accept a leading sign, integers here never carry one
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    i64::from_str_radix(digits, radix).ok()
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();

    Ok(ExprWrapper::new(BooleanExpr {
        value: token.kind == TokenKind::True,
        token,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let operator_token = parser.current_token().clone();
    trace!(operator = %operator_token.value, "parse_prefix_expr");

    parser.advance();
    parser.enter_operator()?;
    let rhs = parse_expr(parser, BindingPower::Prefix);
    parser.leave_operator();
    let rhs = rhs?;

    let expr = ExprWrapper::new(PrefixExpr {
        span: Span {
            start: operator_token.span.start.clone(),
            end: rhs.get_span().end.clone(),
        },
        operator: operator_token.value.clone(),
        token: operator_token,
        right: rhs,
    });
    parser.check_height(&expr)?;

    Ok(expr)
}

pub fn parse_infix_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    let operator_token = parser.current_token().clone();
    trace!(operator = %operator_token.value, ?bp, "parse_infix_expr");

    parser.advance();
    parser.enter_operator()?;
    // Parsing the rhs at the operator's own power makes equal powers associate left
    let right = parse_expr(parser, bp);
    parser.leave_operator();
    let right = right?;

    let expr = ExprWrapper::new(InfixExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        operator: operator_token.value.clone(),
        token: operator_token,
        left,
        right,
    });
    parser.check_height(&expr)?;

    Ok(expr)
}

/// Parentheses only steer precedence; the inner expression is returned as is.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    trace!("parse_grouping_expr");

    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::RParen)?;

    Ok(expr)
}

//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Single and two-character operators
//! - Keywords and identifiers
//! - Integer literals
//! - Illegal characters
//! - End of input behaviour and spans

use super::{
    lexer::{to_offset, tokenize, Lexer},
    tokens::{lookup_identifier, TokenKind},
};

#[test]
fn test_tokenize_delimiters() {
    let mut lexer = Lexer::new("=+(){},;");

    let expected = [
        TokenKind::Assign,
        TokenKind::Plus,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::EOF,
    ];

    for kind in expected {
        assert_eq!(lexer.next_token().kind, kind);
    }

    // EOF keeps coming back once the input is exhausted
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.value, "");
    }
}

#[test]
fn test_tokenize_let_statement() {
    let tokens = tokenize("let five = 5;".to_string(), None);

    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "five"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EOF, ""),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, value)) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind);
        assert_eq!(token.value, value);
    }
}

#[test]
fn test_tokenize_two_character_operators() {
    let tokens = tokenize("10 == 10; 10 != 9;".to_string(), None);

    assert_eq!(tokens[1].kind, TokenKind::Eq);
    assert_eq!(tokens[1].value, "==");
    assert_eq!(tokens[5].kind, TokenKind::NotEq);
    assert_eq!(tokens[5].value, "!=");
    assert!(!tokens.iter().any(|t| t.kind == TokenKind::Assign));
    assert_eq!(tokens.len(), 9);
}

#[test]
fn test_tokenize_lone_bang_and_assign() {
    let tokens = tokenize("!x = !=".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Bang);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Assign);
    assert_eq!(tokens[3].kind, TokenKind::NotEq);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("!-/*5; 5 < 10 > 5;".to_string(), None);

    let expected = [
        TokenKind::Bang,
        TokenKind::Minus,
        TokenKind::Slash,
        TokenKind::Asterisk,
        TokenKind::Int,
        TokenKind::Semicolon,
        TokenKind::Int,
        TokenKind::Lt,
        TokenKind::Int,
        TokenKind::Gt,
        TokenKind::Int,
        TokenKind::Semicolon,
        TokenKind::EOF,
    ];

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, expected);
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("fn let if else return true false".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Function);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::If);
    assert_eq!(tokens[3].kind, TokenKind::Else);
    assert_eq!(tokens[4].kind, TokenKind::Return);
    assert_eq!(tokens[5].kind, TokenKind::True);
    assert_eq!(tokens[6].kind, TokenKind::False);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo _under snake_case CamelCase lets".to_string(), None);

    for (i, name) in ["foo", "_under", "snake_case", "CamelCase", "lets"]
        .iter()
        .enumerate()
    {
        assert_eq!(tokens[i].kind, TokenKind::Identifier);
        assert_eq!(tokens[i].value, *name);
    }
}

#[test]
fn test_identifier_stops_at_digit() {
    let tokens = tokenize("abc123".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "abc");
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[1].value, "123");
}

#[test]
fn test_tokenize_numbers_without_sign() {
    let tokens = tokenize("-42 0 007".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Minus);
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[1].value, "42");
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].value, "007");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_illegal_characters() {
    let tokens = tokenize("a @ b".to_string(), None);

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "@");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
}

#[test]
fn test_tokenize_multibyte_illegal_character() {
    let tokens = tokenize("x é y".to_string(), None);

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "é");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "y");
}

#[test]
fn test_nul_byte_is_not_end_of_input() {
    let tokens = tokenize("a\0b".to_string(), None);

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "\0");
    assert_eq!(tokens[2].value, "b");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_whitespace_is_skipped() {
    let tokens = tokenize(" \t\r\n let\n\tx ".to_string(), None);

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_empty_input() {
    let tokens = tokenize(String::new(), None);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let ab == 10;".to_string(), Some("test.jp".to_string()));

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 4);
    assert_eq!(tokens[1].span.end.0, 6);
    assert_eq!(tokens[2].span.start.0, 7);
    assert_eq!(tokens[2].span.end.0, 9);
    assert_eq!(tokens[3].span.start.0, 10);
    assert_eq!(tokens[3].span.end.0, 12);
    assert_eq!(tokens[5].span.start.0, 13);
    assert_eq!(tokens[0].span.start.1.as_str(), "test.jp");
}

#[test]
fn test_offsets_saturate_past_u32() {
    assert_eq!(to_offset(13), 13);
    assert_eq!(to_offset(u32::MAX as usize), u32::MAX);
    assert_eq!(to_offset(usize::MAX), u32::MAX);
}

#[test]
fn test_lookup_identifier() {
    assert_eq!(lookup_identifier("return"), TokenKind::Return);
    assert_eq!(lookup_identifier("returns"), TokenKind::Identifier);
}

#[test]
fn test_token_display() {
    let tokens = tokenize("!=".to_string(), None);

    assert_eq!(tokens[0].to_string(), "Token { kind: NOT_EQ, value: \"!=\" }");
    assert_eq!(TokenKind::EOF.to_string(), "EOF");
}

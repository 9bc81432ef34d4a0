//! Integration tests for the front end.
//!
//! These tests drive the public API end to end: source text through the
//! lexer and parser, then back to text again.

use jpops::{
    ast::ast::{RootNode, Stmt, StmtType},
    display_error,
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::parser::{parse, Parser},
};

fn parse_clean(source: &str) -> RootNode {
    let mut parser = Parser::new(Lexer::new(source));
    let root = parser.parse_program();
    assert!(parser.errors().is_empty(), "errors: {:?}", parser.errors());
    root
}

fn assert_round_trip(source: &str) {
    let first = parse_clean(source);
    let rendered = first.to_source_string();

    let second = parse_clean(&rendered);

    assert_eq!(first.len(), second.len(), "source: {:?}", source);
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.get_stmt_type(), b.get_stmt_type());
    }
    assert_eq!(second.to_source_string(), rendered, "source: {:?}", source);
}

#[test]
fn test_round_trip_let_statement() {
    let root = parse_clean("let myVar = anotherVar;");

    assert_eq!(root.to_source_string(), "let myVar = anotherVar;");
    assert_round_trip("let myVar = anotherVar;");
}

#[test]
fn test_round_trip_programs() {
    let sources = [
        "let x = 5;\nlet y = 10;\nlet foobar = 838383;",
        "return 5;\nreturn 10;\nreturn 993322;",
        "-a * b",
        "a + b + c",
        "(1 + 2) * 3",
        "let z = !(x == y) != false; return -z / 2",
        "a b c",
        "1 < 2; 3 > 4; 5 - -6",
        "!!true",
    ];

    for source in sources {
        assert_round_trip(source);
    }
}

#[test]
fn test_precedence_rendering() {
    let cases = [
        ("-a * b", "((-a) * b)"),
        ("a + b + c", "((a + b) + c)"),
        ("1 + 2 * 3", "(1 + (2 * 3))"),
        ("(1 + 2) * 3", "((1 + 2) * 3)"),
    ];

    for (source, expected) in cases {
        assert_eq!(parse_clean(source).to_source_string(), expected);
    }
}

#[test]
fn test_error_accumulation_end_to_end() {
    let source = "let x 5;\nlet = 1;\nlet ok = 1 + ;\nlet fine = 2;";
    let (root, errors) = parse(source.to_string(), Some("prog.jp".to_string()));

    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert_eq!(
        messages,
        vec![
            "expected next token to be ASSIGN, got INT instead",
            "expected next token to be IDENTIFIER, got ASSIGN instead",
            "no prefix parse function for SEMICOLON found",
        ]
    );

    assert_eq!(root.len(), 1);
    assert_eq!(root.statements[0].get_stmt_type(), StmtType::LetStmt);
    assert_eq!(root.to_source_string(), "let fine = 2;");

    let rendered = display_error(&errors[2], source, "prog.jp");
    assert!(rendered.contains("3 | let ok = 1 + ;"), "{}", rendered);
    assert!(rendered.contains("-> prog.jp"), "{}", rendered);
}

#[test]
fn test_lexer_and_parser_share_token_stream() {
    let mut lexer = Lexer::new("let five = 5;");
    let kinds: Vec<TokenKind> = std::iter::from_fn(|| {
        let token = lexer.next_token();
        (token.kind != TokenKind::EOF).then_some(token.kind)
    })
    .collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Int,
            TokenKind::Semicolon,
        ]
    );

    let root = parse_clean("let five = 5;");
    assert_eq!(root.token_literal(), "let");
}

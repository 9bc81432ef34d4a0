use std::rc::Rc;

use tracing::trace;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

/// Byte-oriented scanner producing one token per `next_token` call.
///
/// `position` points at `ch`, `read_position` at the byte after it. Once the
/// cursor runs past the input `ch` holds the `0` sentinel, but end of input
/// is always decided by the cursor so a literal NUL still lexes as ILLEGAL.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    position: usize,
    read_position: usize,
    ch: u8,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer::with_file(source, None)
    }

    pub fn with_file(source: impl Into<String>, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut lexer = Lexer {
            source: source.into(),
            position: 0,
            read_position: 0,
            ch: 0,
            file: file_name,
        };
        lexer.advance();
        lexer
    }

    /// Name of the file the source came from, shared with every token span.
    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn advance(&mut self) {
        self.position = self.read_position;
        self.ch = self
            .source
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(0);
        self.read_position = self.position + 1;
    }

    fn peek_char(&self) -> u8 {
        self.source
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(0)
    }

    fn at_eof(&self) -> bool {
        self.position >= self.source.len()
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;

        if self.at_eof() {
            return MK_TOKEN!(TokenKind::EOF, String::new(), self.span(start, start));
        }

        let ch = self.ch;
        let kind = match ch {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.advance();
                    TokenKind::Eq
                } else {
                    TokenKind::Assign
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.advance();
                    TokenKind::NotEq
                } else {
                    TokenKind::Bang
                }
            }
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b',' => TokenKind::Comma,
            b'+' => TokenKind::Plus,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b'-' => TokenKind::Minus,
            b'/' => TokenKind::Slash,
            b'*' => TokenKind::Asterisk,
            b'<' => TokenKind::Lt,
            b'>' => TokenKind::Gt,
            c if is_letter(c) => {
                // Words and numbers stop on the first byte past their run,
                // so they must not advance again below.
                let word = self.read_while(is_letter);
                return MK_TOKEN!(lookup_identifier(&word), word, self.span(start, self.position));
            }
            c if c.is_ascii_digit() => {
                let number = self.read_while(|c: u8| c.is_ascii_digit());
                return MK_TOKEN!(TokenKind::Int, number, self.span(start, self.position));
            }
            _ => return self.read_illegal(start),
        };

        self.advance();
        MK_TOKEN!(
            kind,
            String::from(&self.source[start..self.position]),
            self.span(start, self.position)
        )
    }

    fn read_while(&mut self, predicate: fn(u8) -> bool) -> String {
        let start = self.position;
        while !self.at_eof() && predicate(self.ch) {
            self.advance();
        }

        String::from(&self.source[start..self.position])
    }

    fn read_illegal(&mut self, start: usize) -> Token {
        let illegal = self.source[start..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);

        for _ in 0..illegal.len_utf8() {
            self.advance();
        }

        trace!(character = ?illegal, offset = start, "illegal character");
        MK_TOKEN!(TokenKind::Illegal, illegal.to_string(), self.span(start, self.position))
    }

    fn skip_whitespace(&mut self) {
        while !self.at_eof() && matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.advance();
        }
    }

    fn span(&self, start: usize, end: usize) -> Span {
        Span {
            start: Position(to_offset(start), Rc::clone(&self.file)),
            end: Position(to_offset(end), Rc::clone(&self.file)),
        }
    }
}

/// Narrows a byte index to a `Position` offset. Offsets past `u32::MAX`
/// saturate, so diagnostics in sources of 4 GiB or more point at the limit.
pub(crate) fn to_offset(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// Scans the whole source, returning every token up to and including `EOF`.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::with_file(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}

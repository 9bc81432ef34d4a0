use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A parse diagnostic anchored at a source position.
#[derive(Error, Debug, Clone)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
            ErrorImpl::TooDeeplyNested { .. } => "TooDeeplyNested",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. } => match expected {
                TokenKind::RParen => {
                    ErrorTip::Suggestion(String::from("did you forget a closing `)`?"))
                }
                TokenKind::Assign => ErrorTip::Suggestion(String::from(
                    "let bindings take the form `let name = value;`",
                )),
                _ => ErrorTip::None,
            },
            ErrorImpl::NoPrefixParseFn { kind } => match kind {
                TokenKind::Illegal => {
                    ErrorTip::Suggestion(String::from("this character is not part of the language"))
                }
                TokenKind::EOF => ErrorTip::Suggestion(String::from("the input ended mid-expression")),
                _ => ErrorTip::None,
            },
            ErrorImpl::IntegerParseError { .. } => ErrorTip::Suggestion(String::from(
                "integers must fit in a signed 64-bit value",
            )),
            ErrorImpl::TooDeeplyNested { .. } => ErrorTip::Suggestion(String::from(
                "split the expression into smaller let bindings",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected next token to be {expected}, got {received} instead")]
    UnexpectedToken {
        expected: TokenKind,
        received: TokenKind,
    },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("{token:?} could not be parsed into int64")]
    IntegerParseError { token: String },
    #[error("expression too deeply nested (maximum depth {max_depth})")]
    TooDeeplyNested { max_depth: usize },
}

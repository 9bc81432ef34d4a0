//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - On-demand scanning, one token per call
//! - Recognition of keywords, identifiers, integers, and operators
//! - Two-character operators (`==`, `!=`)
//! - Token position tracking for error reporting
//!
//! Scanning never fails: characters outside the language become
//! `ILLEGAL` tokens and are left for the parser to report.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;

//! Line-oriented shell around the lexer and parser.
//!
//! Every line read gets a fresh lexer. In token mode the raw tokens are
//! printed; in AST mode the line is parsed and either the rendered tree or
//! the diagnostics are printed.

use std::io::{self, BufRead, Write};

use clap::ValueEnum;

use crate::{
    display_error,
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::parser::{Parser, DEFAULT_MAX_DEPTH},
};

pub const PROMPT: &str = ">> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReplMode {
    /// Print every token scanned from the line
    Tokens,
    /// Parse the line and print the fully parenthesised tree
    Ast,
}

#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub mode: ReplMode,
    pub max_depth: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            mode: ReplMode::Tokens,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Runs the read loop until `input` is exhausted.
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W, config: &ReplConfig) -> io::Result<()> {
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        match config.mode {
            ReplMode::Tokens => print_tokens(&line, &mut output)?,
            ReplMode::Ast => print_ast(&line, &mut output, config.max_depth)?,
        }
    }
}

fn print_tokens<W: Write>(line: &str, output: &mut W) -> io::Result<()> {
    let mut lexer = Lexer::new(line);

    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::EOF {
            return Ok(());
        }

        writeln!(output, "{}", token)?;
    }
}

fn print_ast<W: Write>(line: &str, output: &mut W, max_depth: usize) -> io::Result<()> {
    let lexer = Lexer::new(line);
    let file = lexer.file();

    let mut parser = Parser::with_max_depth(lexer, max_depth);
    let root = parser.parse_program();

    if !parser.diagnostics().is_empty() {
        for error in parser.diagnostics() {
            write!(output, "{}", display_error(error, line, &file))?;
        }
        return Ok(());
    }

    if !root.is_empty() {
        writeln!(output, "{}", root.to_source_string())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{start, ReplConfig, ReplMode, PROMPT};

    fn run(input: &str, mode: ReplMode) -> String {
        let config = ReplConfig {
            mode,
            ..ReplConfig::default()
        };

        let mut output = Vec::new();
        start(input.as_bytes(), &mut output, &config).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_token_mode() {
        let output = run("let x = 5;\n", ReplMode::Tokens);

        let expected = format!(
            "{p}Token {{ kind: LET, value: \"let\" }}\n\
             Token {{ kind: IDENTIFIER, value: \"x\" }}\n\
             Token {{ kind: ASSIGN, value: \"=\" }}\n\
             Token {{ kind: INT, value: \"5\" }}\n\
             Token {{ kind: SEMICOLON, value: \";\" }}\n\
             {p}",
            p = PROMPT
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_ast_mode() {
        let output = run("1 + 2 * 3\n-a * b;\n", ReplMode::Ast);

        assert_eq!(
            output,
            format!("{p}(1 + (2 * 3))\n{p}((-a) * b)\n{p}", p = PROMPT)
        );
    }

    #[test]
    fn test_ast_mode_reports_errors() {
        let output = run("let x 5;\n", ReplMode::Ast);

        assert!(output.contains("Error: expected next token to be ASSIGN, got INT instead"));
        assert!(output.contains("-> shell"));
        assert!(output.contains("1 | let x 5;"));
    }

    #[test]
    fn test_empty_input_exits() {
        assert_eq!(run("", ReplMode::Tokens), PROMPT);
    }
}

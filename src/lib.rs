#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod repl;

/// A byte offset into a named source.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Maps a byte offset to `(line_number, line_text, column)`.
///
/// Offsets at or past the end of the source land on the end of the last line,
/// which is where EOF diagnostics point.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        start = end;
        line_number += 1;
    }

    // pos == source.len(): either empty source or just past the final line
    match source.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => {
            (line_number - 1, line.to_string(), line.len())
        }
        _ => (line_number, String::new(), 0),
    }
}

#[cfg(test)]
mod tests {
    use super::get_line_at_position;

    const SOURCE: &str = "Hello, world!\nlet x = 5;\n\nTesting { }\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = get_line_at_position(SOURCE, 10);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = get_line_at_position(SOURCE, 34);
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_past_end() {
        let (line_number, line, line_pos) = get_line_at_position("let x", 5);
        assert_eq!(line_number, 1);
        assert_eq!(line, "let x");
        assert_eq!(line_pos, 5);

        let (line_number, line, line_pos) = get_line_at_position(SOURCE, 500);
        assert_eq!(line_number, 5);
        assert_eq!(line, "");
        assert_eq!(line_pos, 0);
    }

    #[test]
    fn test_display_error() {
        let (_, errors) = crate::parser::parser::parse("let x 5;".to_string(), None);
        let rendered = super::display_error(&errors[0], "let x 5;", "shell");

        assert_eq!(
            rendered,
            "Error: expected next token to be ASSIGN, got INT instead \
             (let bindings take the form `let name = value;`)\n\
             -> shell\n  |\n1 | let x 5;\n  | ------^\n"
        );
    }
}

/// Renders a diagnostic with the offending line and a caret under its column.
pub fn display_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: message
        -> shell
          |
        1 | let x 5;
          | ------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error, error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", file));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (String::from(trimmed), string.len() - trimmed.len())
}

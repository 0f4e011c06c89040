#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use parser::parser::{parse, Parser, ParserConfig};

/// Byte offset into a named source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing a byte offset.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` within that line. An offset at the very end of the source
/// maps onto the last line.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // End of input: point just past the last character
    let last = content.split_inclusive('\n').last().unwrap_or("");
    Some((line_number.saturating_sub(1).max(1), last.to_string(), last.len()))
}

/// Renders a diagnostic with the offending source line and a caret.
///
/// ```text
/// Error: UnexpectedToken (expected `=`, found `INT`)
/// -> test.pratt
///   |
/// 1 | let x 5;
///   | ------^
/// ```
pub fn render_diagnostic(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let mut out = String::new();

    match error.get_tip() {
        ErrorTip::None => out.push_str(&format!("Error: {}\n", error.get_error_name())),
        tip => out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), tip)),
    }
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        out.push_str(&format!("   {}\n", error));
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    // Offsets are in bytes, the caret is placed in characters
    let column = line_text
        .get(..line_pos)
        .map_or(line_pos, |before| before.chars().count());
    let arrows = column.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nlet x = 5;\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 34).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("let x", 5).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "let x");
        assert_eq!(line_pos, 5);

        assert!(super::get_line_at_position("let x", 6).is_none());
    }

    #[test]
    fn test_render_diagnostic() {
        let source = "let x 5;";
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected: "=".to_string(),
                actual: "INT".to_string(),
            },
            Position(6, Rc::new("test.pratt".to_string())),
        );

        let rendered = super::render_diagnostic(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnexpectedToken (expected `=`, found `INT`)");
        assert_eq!(lines[1], "-> test.pratt");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "1 | let x 5;");
        assert_eq!(lines[4], "  | ------^");
    }

    #[test]
    fn test_render_diagnostic_counts_characters() {
        // `é` is two bytes, so the `5` sits at byte 10 but column 9
        let source = "é; let x 5;";
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected: "=".to_string(),
                actual: "INT".to_string(),
            },
            Position(10, Rc::new("test.pratt".to_string())),
        );

        let rendered = super::render_diagnostic(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[3], "1 | é; let x 5;");
        assert_eq!(lines[4], "  | ---------^");
    }
}

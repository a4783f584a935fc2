//! Top-level string assignment lookup in Python source
//!
//! The source is parsed with tree-sitter's Python grammar and never executed.
//! Only direct children of the module node are inspected, so assignments
//! nested in `if`/`try` blocks, functions or classes never qualify.

use tree_sitter::{Node, Parser, Tree};

/// Position of the first syntax error, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxErrorPosition {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The grammar could not be loaded into the parser
    Parser(String),
    /// The source contains syntax errors
    Syntax(SyntaxErrorPosition),
}

/// Find the first top-level `name = "<literal>"` and return the decoded literal.
///
/// Qualifying statements assign a single plain name (no annotation, no chained
/// or tuple targets) and have a string literal value. Implicitly concatenated
/// literals count as one literal; f-strings and byte strings do not.
pub fn find_string_assignment(source: &str, name: &str) -> Result<Option<String>, ScanError> {
    let tree = parse(source)?;
    let root = tree.root_node();

    if root.has_error() {
        return Err(ScanError::Syntax(first_error_position(root)));
    }

    let mut cursor = root.walk();
    for statement in root.named_children(&mut cursor) {
        if let Some(value) = string_assignment_value(statement, source, name) {
            log::debug!(
                "Found {} assignment on line {}",
                name,
                statement.start_position().row + 1
            );
            return Ok(Some(value));
        }
    }

    Ok(None)
}

fn parse(source: &str) -> Result<Tree, ScanError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::language())
        .map_err(|e| ScanError::Parser(e.to_string()))?;
    parser
        .parse(source, None)
        .ok_or_else(|| ScanError::Parser("parsing was cancelled".to_string()))
}

fn first_error_position(root: Node) -> SyntaxErrorPosition {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            let point = node.start_position();
            return SyntaxErrorPosition {
                line: point.row + 1,
                column: point.column + 1,
            };
        }
        for i in (0..node.child_count()).rev() {
            if let Some(child) = node.child(i) {
                if child.has_error() || child.is_missing() {
                    stack.push(child);
                }
            }
        }
    }
    let point = root.start_position();
    SyntaxErrorPosition {
        line: point.row + 1,
        column: point.column + 1,
    }
}

fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

fn string_assignment_value(statement: Node, source: &str, name: &str) -> Option<String> {
    if statement.kind() != "expression_statement" || statement.named_child_count() != 1 {
        return None;
    }
    let assignment = statement.named_child(0)?;
    if assignment.kind() != "assignment" {
        return None;
    }
    // `__version__: str = "1"` is an annotated assignment
    if assignment.child_by_field_name("type").is_some() {
        return None;
    }

    let target = assignment.child_by_field_name("left")?;
    if target.kind() != "identifier" || node_text(target, source) != name {
        return None;
    }

    let value = unwrap_parentheses(assignment.child_by_field_name("right")?);
    match value.kind() {
        "string" => decode_string_literal(node_text(value, source)),
        "concatenated_string" => {
            let mut cursor = value.walk();
            let parts = value
                .named_children(&mut cursor)
                .map(|part| match part.kind() {
                    "string" => decode_string_literal(node_text(part, source)),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()?;
            Some(parts.concat())
        }
        // chained assignments nest another assignment on the right
        _ => None,
    }
}

// `("1.0")` is the literal itself; `("1.0",)` parses as a tuple and is left alone
fn unwrap_parentheses(mut node: Node) -> Node {
    while node.kind() == "parenthesized_expression" && node.named_child_count() == 1 {
        match node.named_child(0) {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

/// Decode a Python string literal, prefix and quotes included.
///
/// Returns `None` for f-strings and byte strings, which are not constant text.
pub fn decode_string_literal(literal: &str) -> Option<String> {
    let quote_start = literal.find(|c: char| c == '\'' || c == '"')?;
    let prefix = literal[..quote_start].to_ascii_lowercase();
    if prefix.contains('f') || prefix.contains('b') || prefix.contains('t') {
        return None;
    }
    let raw = prefix.contains('r');

    let body = &literal[quote_start..];
    let quote = if body.starts_with("\"\"\"") || body.starts_with("'''") {
        &body[..3]
    } else {
        &body[..1]
    };
    if body.len() < quote.len() * 2 || !body.ends_with(quote) {
        return None;
    }
    let inner = &body[quote.len()..body.len() - quote.len()];

    Some(if raw {
        inner.to_string()
    } else {
        unescape(inner)
    })
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(escaped) = chars.next() else {
            out.push('\\');
            break;
        };
        match escaped {
            '\n' => {}
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'a' => out.push('\u{07}'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0c}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\u{0b}'),
            'x' => push_hex_escape(&mut out, &mut chars, 2, 'x'),
            'u' => push_hex_escape(&mut out, &mut chars, 4, 'u'),
            'U' => push_hex_escape(&mut out, &mut chars, 8, 'U'),
            '0'..='7' => {
                let mut value = escaped.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                out.push(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            other => {
                // unknown escapes are kept verbatim
                out.push('\\');
                out.push(other);
            }
        }
    }

    out
}

fn push_hex_escape(
    out: &mut String,
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    width: usize,
    marker: char,
) {
    let mut digits = String::with_capacity(width);
    while digits.len() < width {
        match chars.peek() {
            Some(d) if d.is_ascii_hexdigit() => {
                digits.push(*d);
                chars.next();
            }
            _ => break,
        }
    }
    match u32::from_str_radix(&digits, 16).ok().and_then(char::from_u32) {
        Some(decoded) if digits.len() == width => out.push(decoded),
        _ => {
            out.push('\\');
            out.push(marker);
            out.push_str(&digits);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERSION: &str = "__version__";

    fn find(source: &str) -> Option<String> {
        find_string_assignment(source, VERSION).unwrap()
    }

    #[test]
    fn test_simple_assignment() {
        assert_eq!(find("__version__ = \"0.0.1\"\n"), Some("0.0.1".to_string()));
        assert_eq!(find("__version__ = '0.0.2'\n"), Some("0.0.2".to_string()));
    }

    #[test]
    fn test_first_assignment_wins() {
        let source = "__version__ = \"1.0.0\"\n__version__ = \"2.0.0\"\n";
        assert_eq!(find(source), Some("1.0.0".to_string()));
    }

    #[test]
    fn test_skips_non_qualifying_statements() {
        let source = r#"
import os
from typing import Final

__version__: str = "9.9.9"
a = __version__ = "8.8.8"
__version__, other = "7.7.7", 1
__version__ += "6.6.6"
__version__ = get_version()
__version__ = f"{major}.0"
__version__ = b"5.5.5"
__version__ = 4

if True:
    __version__ = "3.3.3"

def version():
    __version__ = "2.2.2"

class Meta:
    __version__ = "1.1.1"

__version__ = "0.0.3"
"#;
        assert_eq!(find(source), Some("0.0.3".to_string()));
    }

    #[test]
    fn test_no_assignment() {
        assert_eq!(find("VERSION = \"1.0\"\n"), None);
        assert_eq!(find(""), None);
    }

    #[test]
    fn test_other_statements_before_assignment() {
        let source = "\"\"\"Package docs.\"\"\"\nimport sys\nx = 1; __version__ = \"1.2\"\n";
        assert_eq!(find(source), Some("1.2".to_string()));
    }

    #[test]
    fn test_parenthesized_literals() {
        assert_eq!(find("__version__ = (\"1.0\")\n"), Some("1.0".to_string()));
        assert_eq!(find("__version__ = ((\"1.0\"))\n"), Some("1.0".to_string()));
        assert_eq!(
            find("__version__ = (\n    \"1.\"\n    \"0\"\n)\n"),
            Some("1.0".to_string())
        );
        assert_eq!(find("__version__ = (\"1.\" \"0\")\n"), Some("1.0".to_string()));
    }

    #[test]
    fn test_parenthesized_tuple_is_not_a_literal() {
        assert_eq!(find("__version__ = (\"1.0\",)\n"), None);
        assert_eq!(find("__version__ = (\"1.0\", \"2.0\")\n"), None);
        assert_eq!(find("__version__ = (get_version())\n"), None);
    }

    #[test]
    fn test_concatenated_literals() {
        assert_eq!(find("__version__ = \"1.\" '2'\n"), Some("1.2".to_string()));
        assert_eq!(find("__version__ = \"1.\" f\"{x}\"\n"), None);
    }

    #[test]
    fn test_syntax_error_position() {
        let err = find_string_assignment("__version__ = \"1.0\"\ndef broken(:\n", VERSION)
            .unwrap_err();
        match err {
            ScanError::Syntax(position) => assert!((1..=2).contains(&position.line)),
            other => panic!("Expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_prefixes_and_quotes() {
        assert_eq!(decode_string_literal("\"1.0\""), Some("1.0".to_string()));
        assert_eq!(decode_string_literal("'''1.0'''"), Some("1.0".to_string()));
        assert_eq!(decode_string_literal("\"\""), Some(String::new()));
        assert_eq!(decode_string_literal("u'1.0'"), Some("1.0".to_string()));
        assert_eq!(decode_string_literal(r"r'1\.0'"), Some(r"1\.0".to_string()));
        assert_eq!(decode_string_literal("f'1.0'"), None);
        assert_eq!(decode_string_literal("b'1.0'"), None);
    }

    #[test]
    fn test_decode_escapes() {
        assert_eq!(decode_string_literal(r#""a\tb""#), Some("a\tb".to_string()));
        assert_eq!(decode_string_literal(r#""\x41é\101""#), Some("AéA".to_string()));
        assert_eq!(decode_string_literal(r#""\d""#), Some(r"\d".to_string()));
        assert_eq!(decode_string_literal(r#""it\'s""#), Some("it's".to_string()));
    }
}

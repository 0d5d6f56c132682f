use std::sync::OnceLock;

use regex::Regex;

use crate::diagnostic::*;

pub struct ControlStatement;

/// ## What it does
///
/// Checks lines containing a control keyword (`if`, `else`, `for`, `while`,
/// `switch`, `case`, `break`, `continue`, `return`) for parentheses: the
/// line must contain both `(` and `)`.
///
/// A line with a keyword and no parentheses at all is reported, so a bare
/// `else` or a `return score;` counts.
impl Violation for ControlStatement {
    fn name(&self) -> String {
        "control_statement".to_string()
    }
    fn body(&self) -> String {
        "Syntax error in control statement".to_string()
    }
    fn severity(&self) -> Severity {
        Severity::Error
    }
}

static CONTROL_KEYWORD: OnceLock<Regex> = OnceLock::new();

fn control_keyword() -> &'static Regex {
    CONTROL_KEYWORD.get_or_init(|| {
        Regex::new(r"\b(if|else|for|while|switch|case|break|continue|return)\b").unwrap()
    })
}

pub fn control_statement(line: &str, index: usize) -> Option<Diagnostic> {
    if control_keyword().is_match(line) && (!line.contains('(') || !line.contains(')')) {
        Some(Diagnostic::new(ControlStatement, index))
    } else {
        None
    }
}

use std::sync::OnceLock;

use regex::Regex;

use crate::diagnostic::*;

pub struct CommaSpacing;

/// ## What it does
///
/// Checks for commas directly followed by a non-space character, as in
/// `foo(a,b)`.
///
/// ## Why is this bad?
///
/// GML code conventionally puts a space after each comma. The fix inserts
/// the missing space; it never removes whitespace that is already there.
///
/// ## Example
///
/// ```gml
/// draw_text(x,y,"score");
/// ```
///
/// Use instead:
///
/// ```gml
/// draw_text(x, y, "score");
/// ```
impl Violation for CommaSpacing {
    fn name(&self) -> String {
        "comma_spacing".to_string()
    }
    fn body(&self) -> String {
        "Missing space after comma".to_string()
    }
    fn severity(&self) -> Severity {
        Severity::Error
    }
}

static MISSING_SPACE_AFTER_COMMA: OnceLock<Regex> = OnceLock::new();

fn missing_space_after_comma() -> &'static Regex {
    MISSING_SPACE_AFTER_COMMA.get_or_init(|| Regex::new(r",\S").unwrap())
}

pub fn comma_spacing(line: &str, index: usize) -> Option<Diagnostic> {
    if missing_space_after_comma().is_match(line) {
        Some(Diagnostic::new(CommaSpacing, index))
    } else {
        None
    }
}

/// Insert a space after every comma directly followed by text. Applying the
/// fix to its own output changes nothing.
pub fn fix_comma_spacing(line: &str) -> String {
    let mut fixed = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        fixed.push(c);
        if c == ',' && chars.peek().is_some_and(|next| !next.is_whitespace()) {
            fixed.push(' ');
        }
    }
    fixed
}

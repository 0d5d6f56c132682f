use std::sync::OnceLock;

use regex::Regex;

use crate::diagnostic::*;

pub struct UninitializedVariable;

/// ## What it does
///
/// Checks for `var` declarations without an initial value.
///
/// ## Why is this bad?
///
/// An uninitialized local is `undefined` in GML, and reading it before the
/// first assignment is a common source of runtime errors.
///
/// ## Example
///
/// ```gml
/// var health;
/// ```
///
/// Use instead:
///
/// ```gml
/// var health = 100;
/// ```
impl Violation for UninitializedVariable {
    fn name(&self) -> String {
        "uninitialized_variable".to_string()
    }
    fn body(&self) -> String {
        "Variable declared without initialization".to_string()
    }
    fn severity(&self) -> Severity {
        Severity::Error
    }
}

static VAR_KEYWORD: OnceLock<Regex> = OnceLock::new();

fn var_keyword() -> &'static Regex {
    VAR_KEYWORD.get_or_init(|| Regex::new(r"\bvar\b").unwrap())
}

// Any `=` on the line counts as an initialization, `==` included.
pub fn uninitialized_variable(line: &str, index: usize) -> Option<Diagnostic> {
    if var_keyword().is_match(line) && !line.contains('=') {
        Some(Diagnostic::new(UninitializedVariable, index))
    } else {
        None
    }
}

use std::sync::OnceLock;

use regex::Regex;

use crate::diagnostic::*;

pub struct NamingConvention;

/// ## What it does
///
/// Flags identifiers written in mixed case, i.e. a lowercase run followed
/// by an uppercase letter (`playerHealth`, `myVar`).
///
/// ## Example
///
/// ```gml
/// playerHealth = 100;
/// ```
impl Violation for NamingConvention {
    fn name(&self) -> String {
        "naming_convention".to_string()
    }
    fn body(&self) -> String {
        "Variable/function name should follow camelCase convention".to_string()
    }
    fn severity(&self) -> Severity {
        Severity::Warning
    }
}

static MIXED_CASE: OnceLock<Regex> = OnceLock::new();

fn mixed_case() -> &'static Regex {
    MIXED_CASE.get_or_init(|| Regex::new(r"\b[a-z]+[A-Z][a-zA-Z]*\b").unwrap())
}

pub fn naming_convention(line: &str, index: usize) -> Option<Diagnostic> {
    if mixed_case().is_match(line) {
        Some(Diagnostic::new(NamingConvention, index))
    } else {
        None
    }
}

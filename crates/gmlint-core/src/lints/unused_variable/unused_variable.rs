use std::sync::OnceLock;

use regex::Regex;

use crate::diagnostic::*;

pub struct UnusedVariable {
    pub name: String,
}

/// ## What it does
///
/// Takes the identifier from a `var` declaration and counts how often it
/// appears on the same line as a whole word. Fewer than two occurrences
/// means the declaration is the only mention, so the variable is unused
/// on its line.
///
/// ## Example
///
/// ```gml
/// var total = base + bonus;
/// ```
impl Violation for UnusedVariable {
    fn name(&self) -> String {
        "unused_variable".to_string()
    }
    fn body(&self) -> String {
        format!("Variable '{}' declared but not used", self.name)
    }
    fn severity(&self) -> Severity {
        Severity::Warning
    }
}

static VAR_DECLARATION: OnceLock<Regex> = OnceLock::new();

fn var_declaration() -> &'static Regex {
    VAR_DECLARATION.get_or_init(|| Regex::new(r"\bvar (\w+)").unwrap())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Counts whole-word occurrences of `word` in `line`.
fn count_word(line: &str, word: &str) -> usize {
    line.match_indices(word)
        .filter(|(start, matched)| {
            let before_ok = line[..*start].chars().next_back().is_none_or(|c| !is_word_char(c));
            let after_ok = line[start + matched.len()..]
                .chars()
                .next()
                .is_none_or(|c| !is_word_char(c));
            before_ok && after_ok
        })
        .count()
}

pub fn unused_variable(line: &str, index: usize) -> Option<Diagnostic> {
    let captures = var_declaration().captures(line)?;
    let name = captures.get(1)?.as_str();
    if count_word(line, name) < 2 {
        Some(Diagnostic::new(
            UnusedVariable {
                name: name.to_string(),
            },
            index,
        ))
    } else {
        None
    }
}

use std::sync::OnceLock;

use regex::Regex;

use crate::diagnostic::*;

pub struct BracketSpacing {
    bracket: char,
}

/// ## What it does
///
/// Checks for missing spaces inside square brackets and braces: `[` and `{`
/// must be followed by a space, `]` and `}` must be preceded by one.
///
/// The fix normalizes the padding to exactly one space per side. It
/// consumes whatever whitespace run is already there, so `    }` on its own
/// line becomes ` }`, and a `{` ending a line gains a trailing space.
///
/// ## Example
///
/// ```gml
/// value = grid[row];
/// ```
///
/// Use instead:
///
/// ```gml
/// value = grid[ row ];
/// ```
impl Violation for BracketSpacing {
    fn name(&self) -> String {
        "bracket_spacing".to_string()
    }
    fn body(&self) -> String {
        match self.bracket {
            '[' | '{' => format!("Missing space after '{}'", self.bracket),
            _ => format!("Missing space before '{}'", self.bracket),
        }
    }
    fn severity(&self) -> Severity {
        Severity::Error
    }
}

static CHECKS: OnceLock<[(Regex, char); 4]> = OnceLock::new();

fn checks() -> &'static [(Regex, char); 4] {
    CHECKS.get_or_init(|| {
        [
            (Regex::new(r"\[\S").unwrap(), '['),
            (Regex::new(r"\S\]").unwrap(), ']'),
            (Regex::new(r"\{\S").unwrap(), '{'),
            (Regex::new(r"\S\}").unwrap(), '}'),
        ]
    })
}

static FIXES: OnceLock<[(Regex, &'static str); 4]> = OnceLock::new();

fn fixes() -> &'static [(Regex, &'static str); 4] {
    FIXES.get_or_init(|| {
        [
            (Regex::new(r"\[\s*").unwrap(), "[ "),
            (Regex::new(r"\s*\]").unwrap(), " ]"),
            (Regex::new(r"\{\s*").unwrap(), "{ "),
            (Regex::new(r"\s*\}").unwrap(), " }"),
        ]
    })
}

/// One diagnostic per bracket side with a missing space, in the order the
/// sides are declared.
pub fn bracket_spacing(line: &str, index: usize) -> Vec<Diagnostic> {
    checks()
        .iter()
        .filter(|(pattern, _)| pattern.is_match(line))
        .map(|(_, bracket)| Diagnostic::new(BracketSpacing { bracket: *bracket }, index))
        .collect()
}

pub fn fix_bracket_spacing(line: &str) -> String {
    let mut line = line.to_string();
    for (pattern, replacement) in fixes() {
        line = pattern.replace_all(&line, *replacement).into_owned();
    }
    line
}

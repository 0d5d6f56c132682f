use crate::diagnostic::*;

pub struct TabIndentation;

/// ## What it does
///
/// Checks the indentation of each line. Tabs are not allowed, and space
/// indentation must be zero or exactly four spaces deep.
///
/// A tab anywhere on the line counts, not just in the leading whitespace,
/// and a line with a tab reports the tab error alone: the space check only
/// runs on tab-free lines.
impl Violation for TabIndentation {
    fn name(&self) -> String {
        "indentation".to_string()
    }
    fn body(&self) -> String {
        "Tabs used for indentation".to_string()
    }
    fn severity(&self) -> Severity {
        Severity::Error
    }
}

pub struct SpaceIndentation;

impl Violation for SpaceIndentation {
    fn name(&self) -> String {
        "indentation".to_string()
    }
    fn body(&self) -> String {
        "Incorrect number of spaces used for indentation".to_string()
    }
    fn severity(&self) -> Severity {
        Severity::Error
    }
}

pub fn indentation(line: &str, index: usize) -> Option<Diagnostic> {
    if line.contains('\t') {
        return Some(Diagnostic::new(TabIndentation, index));
    }

    let leading_spaces = line.chars().take_while(|c| *c == ' ').count();
    if matches!(leading_spaces, 0 | 4) {
        None
    } else {
        Some(Diagnostic::new(SpaceIndentation, index))
    }
}

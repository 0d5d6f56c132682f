use crate::diagnostic::*;

pub struct TrailingWhitespace;

/// ## What it does
///
/// Checks for whitespace at the end of a line. This includes the carriage
/// return a CRLF file leaves behind, since the engine splits on `\n` only.
impl Violation for TrailingWhitespace {
    fn name(&self) -> String {
        "trailing_whitespace".to_string()
    }
    fn body(&self) -> String {
        "Trailing whitespace".to_string()
    }
    fn severity(&self) -> Severity {
        Severity::Warning
    }
}

pub fn trailing_whitespace(line: &str, index: usize) -> Option<Diagnostic> {
    if line.trim_end() != line {
        Some(Diagnostic::new(TrailingWhitespace, index))
    } else {
        None
    }
}

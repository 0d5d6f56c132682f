use crate::diagnostic::*;
use crate::split::MAX_LINE_LENGTH;

pub struct LineLength {
    length: usize,
}

/// ## What it does
///
/// Checks for lines longer than 80 characters. Lengths are counted in
/// characters, not bytes.
///
/// The fixed output wraps such lines (comments by word, code at operator or
/// comma boundaries); the warning refers to the line before wrapping.
impl Violation for LineLength {
    fn name(&self) -> String {
        "line_length".to_string()
    }
    fn body(&self) -> String {
        format!("Line too long ({} characters)", self.length)
    }
    fn severity(&self) -> Severity {
        Severity::Warning
    }
}

pub fn line_length(line: &str, index: usize) -> Option<Diagnostic> {
    let length = line.chars().count();
    if length > MAX_LINE_LENGTH {
        Some(Diagnostic::new(LineLength { length }, index))
    } else {
        None
    }
}

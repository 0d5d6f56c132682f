//! Long-line splitting for the fixed output.
//!
//! Lines longer than [`MAX_LINE_LENGTH`] are rewritten as several physical
//! lines: comments by greedy word packing, code at operator or comma
//! boundaries. Splitting only affects the fixed text, never the diagnostics.

/// Longest line accepted before the splitter rewrites it, in characters.
pub const MAX_LINE_LENGTH: usize = 80;

const COMMENT_MARKER: &str = "//";

/// Candidate split points for code lines, in priority order. The first token
/// found anywhere in the line is the one the whole line splits on.
const BREAK_TOKENS: [&str; 7] = [" + ", " - ", " * ", " / ", " && ", " || ", ", "];

/// Split one over-long line into several, joined with `\n`.
pub fn split_long_line(line: &str) -> String {
    if line.trim_start().starts_with(COMMENT_MARKER) {
        split_long_comment(line)
    } else {
        split_long_code_line(line)
    }
}

// Greedy word packing. Continuation lines restart with the comment marker so
// they stay comments. A word that would overflow a fresh line is emitted on
// its own line, unmodified.
fn split_long_comment(line: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in line.split(' ') {
        if current.chars().count() + word.chars().count() + 1 > MAX_LINE_LENGTH {
            if current.is_empty() {
                lines.push(word.to_string());
            } else {
                lines.push(std::mem::take(&mut current));
                current = format!("{COMMENT_MARKER} {word}");
            }
        } else if current.is_empty() {
            current = word.to_string();
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

// Split on the first break token present, then reassemble parts greedily.
// A line closed early keeps the token, trimmed, at its end.
fn split_long_code_line(line: &str) -> String {
    for token in BREAK_TOKENS {
        if !line.contains(token) {
            continue;
        }

        let mut parts = line.split(token);
        let mut lines: Vec<String> = Vec::new();
        let mut current = parts.next().unwrap_or_default().to_string();

        for part in parts {
            if current.chars().count() + token.chars().count() + part.chars().count()
                > MAX_LINE_LENGTH
            {
                lines.push(format!("{current}{}", token.trim()));
                current = part.to_string();
            } else {
                current.push_str(token);
                current.push_str(part);
            }
        }
        lines.push(current);

        return lines.join("\n");
    }

    line.to_string()
}

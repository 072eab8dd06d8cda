//! Greedy word wrapping shared by the bundled surfaces.

use crate::units::Pt;

const TABSIZE: usize = 4;

/// Wraps `text` into lines no wider than `max_width`, measuring candidate lines with
/// `width_of`.
///
/// Words are kept intact whenever possible: a line is broken at the last whitespace that
/// keeps it within `max_width`. A single word wider than `max_width` falls back to
/// character-level breaking so it never overflows, though every line carries at least one
/// character. Explicit newlines always start a new line, and empty input yields one empty
/// line, so the result is never empty.
pub fn wrap_text<F>(text: &str, max_width: Pt, width_of: F) -> Vec<String>
where
    F: Fn(&str) -> Pt,
{
    // replace tabs with spaces
    let text = text.replace('\t', &" ".repeat(TABSIZE));
    // normalize newlines
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut lines: Vec<String> = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };

            if width_of(&candidate) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            if width_of(word) <= max_width {
                current = word.to_string();
            } else {
                // no break point, force character breaks
                for ch in word.chars() {
                    let mut next = current.clone();
                    next.push(ch);
                    if !current.is_empty() && width_of(&next) > max_width {
                        lines.push(std::mem::take(&mut current));
                        current.push(ch);
                    } else {
                        current = next;
                    }
                }
            }
        }
        lines.push(current);
    }

    lines
}

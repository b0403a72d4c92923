use crate::util::unicode::display_width;

/// Word-wrap `text` to `width` cells, breaking only on whitespace.
///
/// Continuation lines start with `indent`, which counts against their width.
/// A word wider than the line gets a line of its own rather than being split.
/// Runs of whitespace collapse to single spaces. `width == 0` disables
/// wrapping. Always returns at least one line.
pub fn wrap_text(text: &str, width: usize, indent: &str) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if width == 0 {
        return vec![words.join(" ")];
    }

    let indent_width = display_width(indent);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in words {
        let word_width = display_width(word);
        let budget = if lines.is_empty() {
            width
        } else {
            width.saturating_sub(indent_width).max(1)
        };

        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= budget {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }
    lines.push(current);

    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| if i == 0 { line } else { format!("{indent}{line}") })
        .collect()
}

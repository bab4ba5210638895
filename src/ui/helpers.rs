//! Shared rendering utilities.
//!
//! All widths here are counted in chars, never bytes, so multi-byte titles
//! do not break column alignment.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row`/`col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Prints `text` with the given char ranges highlighted.
///
/// Highlighting is skipped on the selected row so it does not fight the
/// selection background.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Display width in chars.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Left padding that centers `text` in `cols`.
#[must_use]
pub fn center_padding(text: &str, cols: usize) -> usize {
    cols.saturating_sub(text_width(text)) / 2
}

/// Cuts `text` to at most `max` chars without an ellipsis.
#[must_use]
pub fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Greedy word wrap to `width` chars; words longer than a line are split.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            lines.push(word.drain(..width).collect());
        }
        if word.is_empty() {
            continue;
        }

        let needed = if line.is_empty() { word.len() } else { word.len() + 1 };
        if text_width(&line) + needed > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.extend(word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap_text("Race against the clock", 10),
            ["Race", "against", "the clock"]
        );
    }

    #[test]
    fn splits_overlong_words() {
        assert_eq!(wrap_text("abcdefghij xy", 4), ["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn zero_width_wraps_to_nothing() {
        assert!(wrap_text("anything", 0).is_empty());
    }

    #[test]
    fn widths_count_chars() {
        assert_eq!(text_width("Épée"), 4);
        assert_eq!(center_padding("Épée", 10), 3);
        assert_eq!(clip("Épée", 2), "Ép");
    }
}

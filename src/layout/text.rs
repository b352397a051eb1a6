//! Text measurement and wrapping in terminal cells.
//!
//! Widths follow Unicode East Asian Width with grapheme-cluster handling for
//! emoji sequences. Wrapping breaks at word boundaries (UAX #29) and falls
//! back to grapheme breaks for words wider than the line.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Display width of a single codepoint in terminal cells.
#[inline]
pub fn char_width(c: char) -> usize {
    match c as u32 {
        // Symbol and pictograph blocks render wide in practice
        0x2600..=0x27BF => 2,
        0x1F300..=0x1F64F => 2,
        0x1F680..=0x1F6FF => 2,
        0x1F900..=0x1F9FF => 2,
        _ => c.width().unwrap_or(0),
    }
}

/// Display width of a grapheme cluster.
pub fn grapheme_width(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return 0;
    };

    if grapheme.len() == first.len_utf8() {
        return char_width(first);
    }

    // Flags (regional indicator pairs)
    if (0x1F1E6..=0x1F1FF).contains(&(first as u32)) {
        return 2;
    }

    // ZWJ, VS16, skin tone and keycap sequences
    if chars.any(|c| matches!(c as u32, 0x200D | 0xFE0F | 0x1F3FB..=0x1F3FF | 0x20E3)) {
        return 2;
    }

    first.width().unwrap_or(0)
}

/// Display width of a string in terminal cells.
pub fn string_width(s: &str) -> usize {
    if s.is_ascii() {
        return s.bytes().filter(|&b| b >= 0x20 && b != 0x7F).count();
    }
    s.graphemes(true).map(grapheme_width).sum()
}

/// Word-wrap text to `max_width` cells.
///
/// Explicit newlines are hard breaks. Leading whitespace on a wrapped line is
/// dropped. Returns an empty `Vec` for empty input.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        wrap_line(raw_line, max_width, &mut lines);
    }
    lines
}

fn wrap_line(line: &str, max_width: usize, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0usize;

    for segment in line.split_word_bounds() {
        let seg_width = string_width(segment);

        if current_width + seg_width > max_width {
            if current_width > 0 {
                lines.push(current.trim_end().to_string());
                current.clear();
                current_width = 0;
            }

            if seg_width > max_width {
                for grapheme in segment.graphemes(true) {
                    let gw = grapheme_width(grapheme);
                    if current_width + gw > max_width && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push_str(grapheme);
                    current_width += gw;
                }
                continue;
            }

            if segment.chars().all(char::is_whitespace) {
                continue;
            }
        }

        current.push_str(segment);
        current_width += seg_width;
    }

    lines.push(current);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        assert_eq!(string_width("Java"), 4);
        assert_eq!(string_width("Let’s Connect"), 13);
        assert_eq!(string_width("日本"), 4);
        assert_eq!(char_width('•'), 1);
        assert_eq!(string_width("a\tb"), 2);
    }

    #[test]
    fn test_wrap_at_word_boundaries() {
        let lines = wrap_text("Spring Boot, JWT, RBAC, Docker", 12);
        assert_eq!(lines, vec!["Spring Boot,", "JWT, RBAC,", "Docker"]);
        assert!(lines.iter().all(|l| string_width(l) <= 12));
    }

    #[test]
    fn test_wrap_force_breaks_long_words() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_preserves_hard_breaks() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
        assert!(wrap_text("", 10).is_empty());
    }
}

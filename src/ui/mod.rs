pub mod card_list;
pub mod help_panel;
pub mod input;
pub mod status_bar;
pub mod theme;

use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::UnicodeWidthStr;

pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    if max <= 1 {
        return "\u{2026}".to_string();
    }
    let mut result = String::new();
    let mut w = 0;
    for ch in s.chars() {
        let cw = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if w + cw > max - 1 {
            break;
        }
        result.push(ch);
        w += cw;
    }
    result.push('\u{2026}');
    result
}

/// Character wrap into at most `max_lines` lines of display width `max`; the
/// last line gets an ellipsis when text is cut off.
pub fn wrap_lines(s: &str, max: usize, max_lines: usize) -> Vec<String> {
    if max == 0 || max_lines == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut w = 0;
    for ch in s.chars() {
        let cw = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if w + cw > max {
            lines.push(std::mem::take(&mut current));
            w = 0;
            if lines.len() == max_lines {
                let last = lines.last_mut().unwrap();
                *last = truncate_with_ellipsis(last, max.saturating_sub(1));
                return lines;
            }
        }
        current.push(ch);
        w += cw;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vert = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Min(0),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Min(0),
    ])
    .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_strings_alone() {
        assert_eq!(truncate_with_ellipsis("abc", 10), "abc");
        assert_eq!(truncate_with_ellipsis("abcdef", 4), "abc\u{2026}");
    }

    #[test]
    fn wrap_caps_line_count() {
        let lines = wrap_lines("aaaaabbbbbccccc", 5, 2);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "aaaaa");
        assert!(lines[1].ends_with('\u{2026}'));

        assert_eq!(wrap_lines("short", 10, 2), vec!["short".to_string()]);
        assert!(wrap_lines("", 10, 2).is_empty());
    }
}

//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components: text measurement and truncation, chip wrapping, and search match
//! highlighting with proper ANSI escape sequence management.
//!
//! All widths are measured in chars, not bytes, so venue names with accented
//! characters are laid out correctly.
//!
//! # Example
//!
//! ```rust
//! use dunia::ui::frame::Frame;
//! use dunia::ui::helpers::render_highlighted_text;
//! use dunia::ui::Theme;
//!
//! let theme = Theme::default();
//! let mut frame = Frame::new();
//! // Highlight "Bang" in "Bangsar"
//! render_highlighted_text(&mut frame, "Bangsar", &[(0, 4)], &theme, "");
//! ```

use super::frame::Frame;
use crate::ui::theme::Theme;

/// Gap between two chips on the same line.
pub const CHIP_GAP: usize = 1;

/// Number of columns `text` occupies.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `max` columns, ending with `…` when cut.
///
/// # Example
///
/// ```rust
/// use dunia::ui::helpers::truncate;
///
/// assert_eq!(truncate("Taman Tasik Perdana", 10), "Taman Tas…");
/// assert_eq!(truncate("KLCC", 10), "KLCC");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

/// Clips char `ranges` computed on `full` to the part of it that survived
/// [`truncate`] as `shown`. The trailing `…` is never covered.
#[must_use]
pub fn visible_ranges(ranges: &[(usize, usize)], full: &str, shown: &str) -> Vec<(usize, usize)> {
    if full == shown {
        return ranges.to_vec();
    }
    let kept = shown.chars().count().saturating_sub(1);
    ranges
        .iter()
        .map(|&(start, end)| (start, end.min(kept)))
        .filter(|&(start, end)| start < end)
        .collect()
}

/// Left padding that centers `len` columns in `cols`.
#[must_use]
pub const fn centered_padding(len: usize, cols: usize) -> usize {
    cols.saturating_sub(len) / 2
}

/// Text of a chip, e.g. `[ Halal ]` or `[✓ Halal]` when active.
///
/// Both forms have the same width, so toggling never reflows the chip rows.
#[must_use]
pub fn chip_text(label: &str, is_active: bool) -> String {
    if is_active {
        format!("[✓ {label}]")
    } else {
        format!("[ {label} ]")
    }
}

/// Greedily packs chips of the given widths into lines of `width` columns.
///
/// Returns the chip indices of each line. A chip wider than the line gets a
/// line of its own. No chips yields no lines.
///
/// # Example
///
/// ```rust
/// use dunia::ui::helpers::wrap_chips;
///
/// assert_eq!(wrap_chips(&[5, 5, 5], 11), vec![vec![0, 1], vec![2]]);
/// ```
#[must_use]
pub fn wrap_chips(widths: &[usize], width: usize) -> Vec<Vec<usize>> {
    let mut lines: Vec<Vec<usize>> = Vec::new();
    let mut used = 0;

    for (index, &chip) in widths.iter().enumerate() {
        match lines.last_mut() {
            Some(line) if used + CHIP_GAP + chip <= width => {
                line.push(index);
                used += CHIP_GAP + chip;
            }
            _ => {
                lines.push(vec![index]);
                used = chip;
            }
        }
    }

    lines
}

/// Writes `text` with the char `ranges` drawn in the match highlight colors.
///
/// `restore` is the style escape to re-apply after each highlighted section,
/// so the highlight works on plain and selected backgrounds alike.
pub fn render_highlighted_text(
    frame: &mut Frame,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    restore: &str,
) {
    if ranges.is_empty() {
        frame.put(text);
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

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            frame.put(&normal_section);
        }

        frame.put(&Theme::fg(&theme.colors.match_highlight_fg));
        frame.put(&Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        frame.put(&highlighted_section);
        frame.put(Theme::reset());
        frame.put(restore);

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        frame.put(&remaining);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::frame::strip_ansi;

    #[test]
    fn visible_ranges_stop_before_ellipsis() {
        let full = "Taman Tasik Perdana";
        let shown = truncate(full, 10);

        assert_eq!(visible_ranges(&[(0, 5), (6, 19)], full, &shown), vec![(0, 5), (6, 9)]);
        assert!(visible_ranges(&[(12, 19)], full, &shown).is_empty());
        assert_eq!(visible_ranges(&[(6, 19)], full, full), vec![(6, 19)]);
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("Café Ría", 8), "Café Ría");
        assert_eq!(truncate("Café Ría", 5), "Café…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn chip_text_width_is_stable() {
        assert_eq!(
            display_width(&chip_text("Halal", true)),
            display_width(&chip_text("Halal", false))
        );
    }

    #[test]
    fn wrap_chips_breaks_lines() {
        assert_eq!(wrap_chips(&[4, 4, 4, 4], 9), vec![vec![0, 1], vec![2, 3]]);
        assert_eq!(wrap_chips(&[20, 3], 10), vec![vec![0], vec![1]]);
        assert!(wrap_chips(&[], 10).is_empty());
    }

    #[test]
    fn highlighted_text_keeps_plain_content() {
        let theme = Theme::default();
        let mut frame = Frame::new();
        render_highlighted_text(&mut frame, "Cafe Bangsar", &[(5, 9)], &theme, "");

        assert_eq!(strip_ansi(frame.as_str()), "Cafe Bangsar");
        assert!(frame.as_str().contains(&Theme::bg(&theme.colors.match_highlight_bg)));
    }

    #[test]
    fn highlight_ranges_past_end_are_clamped() {
        let theme = Theme::default();
        let mut frame = Frame::new();
        render_highlighted_text(&mut frame, "KLCC", &[(2, 10), (12, 14)], &theme, "");

        assert_eq!(strip_ansi(frame.as_str()), "KLCC");
    }
}

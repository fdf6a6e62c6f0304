//! Search bar component renderer.
//!
//! This module renders the search input box with a bordered frame, the query
//! text or its placeholder, and a cursor block while typing.

use crate::ui::frame::Frame;
use crate::ui::helpers::{display_width, truncate};
use crate::ui::hitmap::ClickTarget;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the search input box at the specified row.
///
/// Displays a 3-line bordered box. The border switches to the focus color
/// while keystrokes edit the query. An empty query shows the placeholder
/// dimmed. All three rows of the box focus the search when clicked.
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────────────┐ [margin]
/// [margin] │ query or placeholder       │ [margin]
/// [margin] └──────────────────────────┘ [margin]
/// ```
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_search_bar(
    frame: &mut Frame,
    row: usize,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.is_focused {
        &theme.colors.search_bar_focus
    } else {
        &theme.colors.search_bar_border
    };

    frame.position_cursor(row, 1);
    frame.pad(SEARCH_BOX_MARGIN);
    frame.put(&Theme::fg(border));
    frame.put(&format!("┌{}┐", "─".repeat(inner_width)));
    frame.put(Theme::reset());

    frame.position_cursor(row + 1, 1);
    frame.pad(SEARCH_BOX_MARGIN);
    frame.put(&Theme::fg(border));
    frame.put("│");

    let text_width = inner_width.saturating_sub(2);
    let used = if search.query.is_empty() && !search.is_focused {
        let placeholder = truncate(search.placeholder, text_width);
        frame.put(" ");
        frame.put(Theme::dim());
        frame.put(&Theme::fg(&theme.colors.text_dim));
        frame.put(&placeholder);
        frame.put(Theme::reset());
        1 + display_width(&placeholder)
    } else {
        let query = tail(&search.query, text_width.saturating_sub(1));
        frame.put(" ");
        frame.put(&Theme::fg(&theme.colors.text_normal));
        frame.put(&query);
        let mut used = 1 + display_width(&query);
        if search.is_focused {
            frame.put(&Theme::fg(&theme.colors.search_bar_focus));
            frame.put("▏");
            used += 1;
        }
        frame.put(Theme::reset());
        used
    };

    frame.pad(inner_width.saturating_sub(used));
    frame.put(&Theme::fg(border));
    frame.put("│");
    frame.put(Theme::reset());

    frame.position_cursor(row + 2, 1);
    frame.pad(SEARCH_BOX_MARGIN);
    frame.put(&Theme::fg(border));
    frame.put(&format!("└{}┘", "─".repeat(inner_width)));
    frame.put(Theme::reset());

    for box_row in row..row + 3 {
        frame.register(box_row, SEARCH_BOX_MARGIN + 1, box_width, ClickTarget::SearchBox);
    }

    row + 3
}

/// The last `max` chars of `text`, so the end of a long query stays visible.
fn tail(text: &str, max: usize) -> String {
    let len = display_width(text);
    text.chars().skip(len.saturating_sub(max)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::frame::strip_ansi;

    fn search(query: &str, is_focused: bool) -> SearchBarInfo {
        SearchBarInfo {
            query: query.to_string(),
            placeholder: "Search by name or location, e.g., 'Bangsar'",
            is_focused,
        }
    }

    #[test]
    fn empty_query_shows_placeholder() {
        let mut frame = Frame::new();
        render_search_bar(&mut frame, 6, &search("", false), &Theme::default(), 80);
        assert!(strip_ansi(frame.as_str()).contains("e.g., 'Bangsar'"));
    }

    #[test]
    fn focused_box_uses_focus_border() {
        let theme = Theme::default();
        let mut frame = Frame::new();
        render_search_bar(&mut frame, 6, &search("bang", true), &theme, 80);

        assert!(frame.as_str().contains(&Theme::fg(&theme.colors.search_bar_focus)));
        let text = strip_ansi(frame.as_str());
        assert!(text.contains("bang▏"));
        assert!(!text.contains("e.g."));
    }

    #[test]
    fn whole_box_is_clickable() {
        let mut frame = Frame::new();
        render_search_bar(&mut frame, 6, &search("", false), &Theme::default(), 40);

        for row in 6..9 {
            assert_eq!(frame.hits().target_at(row, 3), Some(&ClickTarget::SearchBox));
            assert_eq!(frame.hits().target_at(row, 38), Some(&ClickTarget::SearchBox));
        }
        assert_eq!(frame.hits().target_at(7, 2), None);
        assert_eq!(frame.hits().target_at(7, 39), None);
    }

    #[test]
    fn long_query_keeps_its_end() {
        assert_eq!(tail("taman tasik perdana", 7), "perdana");
        assert_eq!(tail("klcc", 7), "klcc");
    }
}

//! Empty state and load error renderers.
//!
//! This module renders the centered messages displayed when there are no
//! cards to show, either because no venue matches the filters or because the
//! data could not be loaded at all.

use crate::ui::frame::Frame;
use crate::ui::helpers::{centered_padding, display_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, ErrorState};

/// Row of the first line of a full-pane message.
const MESSAGE_ROW: usize = 6;

/// Renders the no-results message in place of the cards.
///
/// # Layout
///
/// ```text
/// [blank line]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// The message uses the `empty_state_fg` theme color, and the subtitle uses
/// `text_dim` with dim styling.
///
/// # Returns
///
/// The next available row position.
pub fn render_empty_state(frame: &mut Frame, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    frame.position_cursor(row, 1);
    frame.pad(cols);

    let style = Theme::fg(&theme.colors.empty_state_fg);
    centered_line(frame, row + 1, &empty.message, &format!("{}{style}", Theme::bold()), cols);

    let style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    centered_line(frame, row + 2, &empty.subtitle, &style, cols);

    row + 3
}

/// Renders the load failure screen. Nothing else is drawn alongside it.
pub fn render_error(frame: &mut Frame, error: &ErrorState, theme: &Theme, cols: usize) {
    let style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.error_fg));
    centered_line(frame, MESSAGE_ROW, &error.message, &style, cols);
    centered_line(frame, MESSAGE_ROW + 1, &error.subtitle, &Theme::fg(&theme.colors.text_normal), cols);

    let style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    centered_line(frame, MESSAGE_ROW + 3, &error.detail, &style, cols);
}

fn centered_line(frame: &mut Frame, row: usize, text: &str, style: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = display_width(&text);
    let padding = centered_padding(len, cols);

    frame.position_cursor(row, 1);
    frame.put(style);
    frame.pad(padding);
    frame.put(&text);
    frame.pad(cols.saturating_sub(padding + len));
    frame.put(Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::frame::strip_ansi;

    #[test]
    fn empty_state_is_centered() {
        let empty = EmptyState {
            message: "No venues".to_string(),
            subtitle: "Try again".to_string(),
        };
        let mut frame = Frame::new();
        let next = render_empty_state(&mut frame, 12, &empty, &Theme::default(), 21);

        assert_eq!(next, 15);
        assert!(strip_ansi(frame.as_str()).contains("      No venues      "));
    }

    #[test]
    fn error_shows_message_subtitle_and_detail() {
        let error = ErrorState {
            message: "Error: Could not load venue data.".to_string(),
            subtitle: "Please make sure data.json exists and contains a list of venues.".to_string(),
            detail: "IO error: not found".to_string(),
        };
        let mut frame = Frame::new();
        render_error(&mut frame, &error, &Theme::default(), 100);

        let text = strip_ansi(frame.as_str());
        assert!(text.contains("Error: Could not load venue data."));
        assert!(text.contains("Please make sure data.json exists"));
        assert!(text.contains("IO error: not found"));
        assert!(frame.hits().is_empty());
    }
}

//! Footer component renderer.
//!
//! This module renders the footer help bar with centered keybinding hints.

use crate::ui::frame::Frame;
use crate::ui::helpers::{centered_padding, display_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at the specified row.
///
/// Displays keybinding hints centered horizontally with dimmed styling. Pads
/// the line to fill the entire pane width.
///
/// # Truncation
///
/// If the help text exceeds the pane width, it is truncated to fit. This
/// prevents layout corruption on narrow panes.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(frame: &mut Frame, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate(&footer.keybindings, cols);
    let text_len = display_width(&help_text);
    let padding = centered_padding(text_len, cols);

    frame.position_cursor(row, 1);
    frame.put(&Theme::fg(&theme.colors.text_dim));
    frame.pad(padding);
    frame.put(&help_text);
    frame.pad(cols.saturating_sub(padding + text_len));
    frame.put(Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::frame::strip_ansi;

    #[test]
    fn long_hints_are_truncated_to_width() {
        let footer = FooterInfo {
            keybindings: "j/k: move  Enter: open  /: search  q: quit".to_string(),
        };
        let mut frame = Frame::new();
        render_footer(&mut frame, 24, &footer, &Theme::default(), 20);

        let text = strip_ansi(frame.as_str());
        assert_eq!(display_width(&text), 20);
        assert!(text.ends_with('…'));
    }
}

//! Amenity filter chip renderer.
//!
//! Chips are packed left to right and wrap onto as many lines as the pane
//! width requires. The line count must agree with the one used for card
//! windowing, so both go through [`wrap_chips`] with the same width.

use crate::app::state::{chip_area_width, CHIP_MARGIN};
use crate::ui::frame::Frame;
use crate::ui::helpers::{chip_text, display_width, wrap_chips, CHIP_GAP};
use crate::ui::hitmap::ClickTarget;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterChip;

/// Renders the chip lines starting at `row` and returns the next free row.
///
/// Active chips use the active chip colors; the keyboard-focused chip is
/// underlined. Every chip is registered as a click target.
pub fn render_filter_chips(
    frame: &mut Frame,
    row: usize,
    chips: &[FilterChip],
    theme: &Theme,
    cols: usize,
) -> usize {
    let texts: Vec<String> = chips
        .iter()
        .map(|chip| chip_text(&chip.label, chip.is_active))
        .collect();
    let widths: Vec<usize> = texts.iter().map(|text| display_width(text)).collect();
    let lines = wrap_chips(&widths, chip_area_width(cols));

    let mut current_row = row;
    for line in &lines {
        frame.position_cursor(current_row, 1);
        frame.pad(CHIP_MARGIN);
        let mut col = CHIP_MARGIN + 1;

        for (position, &index) in line.iter().enumerate() {
            if position > 0 {
                frame.pad(CHIP_GAP);
                col += CHIP_GAP;
            }

            let chip = &chips[index];
            if chip.is_active {
                frame.put(&Theme::fg(&theme.colors.chip_active_fg));
                frame.put(&Theme::bg(&theme.colors.chip_active_bg));
            } else {
                frame.put(&Theme::fg(&theme.colors.chip_fg));
            }
            if chip.is_focused {
                frame.put(Theme::bold());
                frame.put(Theme::underline());
            }
            frame.put(&texts[index]);
            frame.put(Theme::reset());

            frame.register(current_row, col, widths[index], ClickTarget::Filter(chip.label.clone()));
            col += widths[index];
        }

        frame.pad((cols + 1).saturating_sub(col));
        current_row += 1;
    }

    current_row
}

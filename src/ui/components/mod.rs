//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements. Each component writes one region of the pane into a [`Frame`]
//! and registers the click targets it draws.
//!
//! # Components
//!
//! - [`header`]: Title, tagline, and category selector
//! - [`search`]: Search input box
//! - [`filters`]: Amenity filter chips
//! - [`cards`]: Venue summary cards
//! - [`detail`]: Detail page top bar and body
//! - [`footer`]: Help text and keybinding hints
//! - [`empty`]: No-results and load error messages
//!
//! # Layout Functions
//!
//! - [`render_list_body`]: `SearchBar` + Heading + Chips + Cards + Footer
//! - [`render_detail_page`]: Back bar + Body + Footer
//!
//! The header is not part of either layout function; the renderer draws it
//! separately so it can be reused between frames.

mod cards;
mod detail;
mod empty;
mod filters;
mod footer;
mod header;
mod search;

pub use empty::render_error;
pub use header::render_header;

use crate::app::state::{CHIP_MARGIN, HEADER_ROWS};
use crate::ui::frame::Frame;
use crate::ui::helpers::{display_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailViewModel, FooterInfo, ListViewModel};

use cards::render_cards;
use detail::{render_detail_body, render_detail_top};
use empty::render_empty_state;
use filters::render_filter_chips;
use footer::render_footer;
use search::render_search_bar;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(frame: &mut Frame, row: usize, color: &str, cols: usize) -> usize {
    frame.position_cursor(row, 1);
    frame.put(&Theme::fg(color));
    frame.put(&"─".repeat(cols));
    frame.put(Theme::reset());
    row + 1
}

/// Renders the bottom border and footer on the last two rows.
fn render_bottom(frame: &mut Frame, footer: &FooterInfo, theme: &Theme, rows: usize, cols: usize) {
    let footer_start = rows.max(2);
    let border_row = footer_start - 1;

    render_border(frame, border_row, &theme.colors.border, cols);
    render_footer(frame, footer_start, footer, theme, cols);
}

/// Renders everything of the list page below the header.
///
/// Layout structure:
/// ```text
/// [Header - drawn by the caller]
/// [Search Bar - 3 lines]
/// [Showing N Results]
/// [Amenity Chips - 1 or more lines]
/// [blank line]
/// [Cards, or the no-results message]
/// [Border]
/// [Footer]
/// ```
pub fn render_list_body(frame: &mut Frame, vm: &ListViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = HEADER_ROWS + 1;

    current_row = render_search_bar(frame, current_row, &vm.search_bar, theme, cols);

    let heading = truncate(&vm.heading, cols.saturating_sub(CHIP_MARGIN * 2));
    frame.position_cursor(current_row, 1);
    frame.pad(CHIP_MARGIN);
    frame.put(Theme::bold());
    frame.put(&Theme::fg(&theme.colors.text_normal));
    frame.put(&heading);
    frame.put(Theme::reset());
    frame.pad(cols.saturating_sub(CHIP_MARGIN + display_width(&heading)));
    current_row += 1;

    current_row = render_filter_chips(frame, current_row, &vm.chips, theme, cols);

    frame.position_cursor(current_row, 1);
    frame.pad(cols);
    current_row += 1;

    if let Some(empty) = &vm.empty_state {
        render_empty_state(frame, current_row, empty, theme, cols);
    } else {
        render_cards(frame, current_row, &vm.cards, theme, cols);
    }

    render_bottom(frame, &vm.footer, theme, rows, cols);
}

/// Renders the whole detail page.
///
/// Layout structure:
/// ```text
/// [Back Button]  Venue name                 ↑ 2  ↓ 9
/// [Border]
/// [Body lines]
/// [Border]
/// [Footer]
/// ```
pub fn render_detail_page(frame: &mut Frame, vm: &DetailViewModel, theme: &Theme, rows: usize, cols: usize) {
    let body_row = render_detail_top(frame, vm, theme, cols);
    render_detail_body(frame, body_row, &vm.lines, theme, cols);
    render_bottom(frame, &vm.footer, theme, rows, cols);
}

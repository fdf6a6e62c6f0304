//! Venue card renderer.
//!
//! Each card takes three lines plus a spacer:
//!
//! ```text
//!   Park  KLCC Park                          ★ 4.7 (1200 reviews)
//!   KLCC · Green lung of the city with a huge wading pool
//!   https://placehold.co/600x400/2dd4bf/white?text=KLCC+Park
//! ```
//!
//! The highlighted card is drawn on the selection background. Search matches
//! in the name and location are highlighted on top of whichever background
//! the card uses.

use crate::app::state::{CARD_ROWS, CHIP_MARGIN};
use crate::ui::frame::Frame;
use crate::ui::helpers::{display_width, render_highlighted_text, truncate, visible_ranges};
use crate::ui::hitmap::ClickTarget;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::VenueCard;

/// Renders `cards` one below the other starting at `row`.
///
/// # Returns
///
/// The next available row position.
pub fn render_cards(frame: &mut Frame, row: usize, cards: &[VenueCard], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for card in cards {
        render_card(frame, current_row, card, theme, cols);
        current_row += CARD_ROWS;
    }
    current_row
}

fn render_card(frame: &mut Frame, row: usize, card: &VenueCard, theme: &Theme, cols: usize) {
    let width = cols.saturating_sub(CHIP_MARGIN * 2);
    let base = if card.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    // Name line: badge, name, and right-aligned rating.
    let badge = format!(" {} ", card.kind.label());
    let rating = format!("{} {} ", card.rating, card.reviews);
    let name_room = width
        .saturating_sub(display_width(&badge) + 1)
        .saturating_sub(display_width(&rating) + 1);
    let name = truncate(&card.name, name_room);

    start_line(frame, row);
    frame.put(Theme::bold());
    if card.is_selected {
        frame.put(&base);
    } else {
        frame.put(&Theme::fg(theme.kind_color(card.kind)));
    }
    frame.put(&badge);
    frame.put(Theme::reset());
    frame.put(&base);
    frame.put(" ");
    frame.put(Theme::bold());
    let restore = format!("{}{}", base, Theme::bold());
    let name_highlights = visible_ranges(&card.name_highlights, &card.name, &name);
    render_highlighted_text(frame, &name, &name_highlights, theme, &restore);
    frame.put(Theme::reset());
    frame.put(&base);

    let used = display_width(&badge) + 1 + display_width(&name);
    frame.pad(width.saturating_sub(used + display_width(&rating)));
    if !card.is_selected {
        frame.put(&Theme::fg(&theme.colors.rating_fg));
    }
    frame.put(&truncate(&rating, width.saturating_sub(used)));
    frame.put(Theme::reset());

    // Location and description line.
    let location = truncate(&card.location, width.saturating_sub(1));
    let separator = " · ";
    let description_room = width
        .saturating_sub(1 + display_width(&location))
        .saturating_sub(display_width(separator));
    let description = truncate(&card.description, description_room);

    start_line(frame, row + 1);
    frame.put(&base);
    frame.put(" ");
    let location_highlights = visible_ranges(&card.location_highlights, &card.location, &location);
    render_highlighted_text(frame, &location, &location_highlights, theme, &base);
    let mut used = 1 + display_width(&location);
    if !description.is_empty() {
        frame.put(separator);
        if !card.is_selected {
            frame.put(&Theme::fg(&theme.colors.text_dim));
        }
        frame.put(&description);
        used += display_width(separator) + display_width(&description);
    }
    frame.pad(width.saturating_sub(used));
    frame.put(Theme::reset());

    // Thumbnail line.
    let thumbnail = truncate(&card.thumbnail_url, width.saturating_sub(1));
    start_line(frame, row + 2);
    frame.put(&base);
    frame.put(" ");
    if !card.is_selected {
        frame.put(Theme::dim());
        frame.put(&Theme::fg(&theme.colors.link_fg));
    }
    frame.put(&thumbnail);
    frame.pad(width.saturating_sub(1 + display_width(&thumbnail)));
    frame.put(Theme::reset());

    start_line(frame, row + 3);

    for card_row in row..row + 3 {
        frame.register(card_row, CHIP_MARGIN + 1, width, ClickTarget::Venue(card.id));
    }
}

/// Clears the row and leaves the cursor at the card's left edge.
fn start_line(frame: &mut Frame, row: usize) {
    frame.position_cursor(row, 1);
    frame.put(Theme::reset());
    frame.pad(CHIP_MARGIN);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{VenueId, VenueKind};
    use crate::ui::frame::strip_ansi;

    fn card(id: VenueId, is_selected: bool) -> VenueCard {
        VenueCard {
            id,
            kind: VenueKind::Park,
            name: "KLCC Park".to_string(),
            location: "KLCC".to_string(),
            rating: "★ 4.7".to_string(),
            reviews: "(1200 reviews)".to_string(),
            description: "Green lung of the city with a huge wading pool".to_string(),
            thumbnail_url: "https://placehold.co/600x400/png".to_string(),
            is_selected,
            name_highlights: vec![(0, 4)],
            location_highlights: vec![(0, 4)],
        }
    }

    #[test]
    fn card_shows_summary_fields() {
        let mut frame = Frame::new();
        let next = render_cards(&mut frame, 12, &[card(2, false)], &Theme::default(), 80);

        assert_eq!(next, 12 + CARD_ROWS);
        let text = strip_ansi(frame.as_str());
        assert!(text.contains(" Park  KLCC Park"));
        assert!(text.contains("★ 4.7 (1200 reviews)"));
        assert!(text.contains("KLCC · Green lung of the city with a huge wading pool"));
        assert!(text.contains("https://placehold.co/600x400/png"));
    }

    #[test]
    fn card_rows_open_the_venue() {
        let mut frame = Frame::new();
        render_cards(&mut frame, 12, &[card(2, false), card(5, true)], &Theme::default(), 80);

        assert_eq!(frame.hits().target_at(12, 3), Some(&ClickTarget::Venue(2)));
        assert_eq!(frame.hits().target_at(14, 78), Some(&ClickTarget::Venue(2)));
        assert_eq!(frame.hits().target_at(15, 10), None);
        assert_eq!(frame.hits().target_at(16, 10), Some(&ClickTarget::Venue(5)));
    }

    #[test]
    fn selected_card_uses_selection_background() {
        let theme = Theme::default();
        let mut frame = Frame::new();
        render_cards(&mut frame, 12, &[card(2, true)], &theme, 80);
        assert!(frame.as_str().contains(&Theme::bg(&theme.colors.selection_bg)));
    }

    #[test]
    fn highlight_never_covers_the_ellipsis() {
        let theme = Theme::default();
        let highlight = Theme::bg(&theme.colors.match_highlight_bg);
        let mut cut = card(3, false);
        cut.name = "Taman Tasik Perdana".to_string();
        cut.location_highlights = vec![];

        cut.name_highlights = vec![(6, 19)];
        let mut frame = Frame::new();
        render_cards(&mut frame, 1, &[cut.clone()], &theme, 40);
        assert!(strip_ansi(frame.as_str()).contains("Taman"));
        assert!(!frame.as_str().contains(&highlight));

        cut.name_highlights = vec![(0, 19)];
        let mut frame = Frame::new();
        render_cards(&mut frame, 1, &[cut], &theme, 40);
        let raw = frame.as_str();
        let restore = format!("{}{}", Theme::fg(&theme.colors.text_normal), Theme::bold());
        let ellipsis = raw.find('…').unwrap();
        assert!(raw.contains(&highlight));
        assert!(raw[..ellipsis].ends_with(&restore));
    }

    #[test]
    fn narrow_pane_truncates_lines() {
        let mut frame = Frame::new();
        render_cards(&mut frame, 1, &[card(2, false)], &Theme::default(), 30);

        let text = strip_ansi(frame.as_str());
        assert!(text.contains('…'));
        assert!(!text.contains("wading pool"));
    }
}

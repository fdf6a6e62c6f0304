//! Header component renderer.
//!
//! This module renders the title, the tagline, and the category selector. The
//! region it draws never depends on the search term or amenity filters, which
//! is what lets the renderer cache it across results-only redraws.

use super::render_border;
use crate::ui::frame::Frame;
use crate::ui::helpers::{centered_padding, display_width, truncate};
use crate::ui::hitmap::ClickTarget;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CategoryTab, HeaderInfo};

/// Gap between two category buttons.
const TAB_GAP: usize = 2;

/// Renders the header region starting at `row`.
///
/// # Layout
///
/// ```text
///                  Bubba's Dunia
///     It's their world, we're just living in it
///
///         Show All    Restaurants    Parks
/// ──────────────────────────────────────────────────
/// ```
///
/// Each category button is registered as a click target.
///
/// # Returns
///
/// The next available row position.
pub fn render_header(
    frame: &mut Frame,
    row: usize,
    header: &HeaderInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let title = truncate(header.title, cols);
    let title_len = display_width(&title);
    let padding = centered_padding(title_len, cols);

    frame.position_cursor(row, 1);
    frame.put(Theme::bold());
    frame.put(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        frame.put(&Theme::bg(bg));
    }
    frame.pad(padding);
    frame.put(&title);
    frame.pad(cols.saturating_sub(padding + title_len));
    frame.put(Theme::reset());

    let tagline = truncate(header.tagline, cols);
    let tagline_len = display_width(&tagline);
    let padding = centered_padding(tagline_len, cols);

    frame.position_cursor(row + 1, 1);
    frame.put(Theme::italic());
    frame.put(&Theme::fg(&theme.colors.tagline_fg));
    frame.pad(padding);
    frame.put(&tagline);
    frame.pad(cols.saturating_sub(padding + tagline_len));
    frame.put(Theme::reset());

    frame.position_cursor(row + 2, 1);
    frame.pad(cols);

    render_category_tabs(frame, row + 3, &header.categories, theme, cols);
    render_border(frame, row + 4, &theme.colors.border, cols)
}

/// Renders the category buttons centered on one row.
fn render_category_tabs(
    frame: &mut Frame,
    row: usize,
    tabs: &[CategoryTab],
    theme: &Theme,
    cols: usize,
) {
    let widths: Vec<usize> = tabs.iter().map(|tab| display_width(tab.label) + 2).collect();
    let total = widths.iter().sum::<usize>() + TAB_GAP * tabs.len().saturating_sub(1);
    let mut col = centered_padding(total, cols) + 1;

    frame.position_cursor(row, 1);
    frame.pad(col - 1);

    for (index, (tab, width)) in tabs.iter().zip(widths).enumerate() {
        if index > 0 {
            frame.pad(TAB_GAP);
            col += TAB_GAP;
        }

        if tab.is_active {
            frame.put(Theme::bold());
            frame.put(&Theme::fg(&theme.colors.selection_fg));
            frame.put(&Theme::bg(&theme.colors.selection_bg));
        } else {
            frame.put(&Theme::fg(&theme.colors.text_normal));
        }
        frame.put(&format!(" {} ", tab.label));
        frame.put(Theme::reset());

        frame.register(row, col, width, ClickTarget::Category(tab.category));
        col += width;
    }

    frame.pad((cols + 1).saturating_sub(col));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::ui::frame::strip_ansi;

    fn header(active: Category) -> HeaderInfo {
        HeaderInfo {
            title: "Bubba's Dunia",
            tagline: "It's their world, we're just living in it",
            categories: Category::ALL
                .iter()
                .map(|&category| CategoryTab {
                    category,
                    label: category.label(),
                    is_active: category == active,
                })
                .collect(),
        }
    }

    #[test]
    fn renders_title_and_all_tabs() {
        let mut frame = Frame::new();
        let next = render_header(&mut frame, 1, &header(Category::All), &Theme::default(), 60);

        assert_eq!(next, 6);
        let text = strip_ansi(frame.as_str());
        assert!(text.contains("Bubba's Dunia"));
        assert!(text.contains("It's their world"));
        assert!(text.contains(" Show All "));
        assert!(text.contains(" Restaurants "));
        assert!(text.contains(" Parks "));
    }

    #[test]
    fn tabs_are_clickable() {
        let mut frame = Frame::new();
        render_header(&mut frame, 1, &header(Category::All), &Theme::default(), 60);

        let parks = frame
            .hits()
            .iter()
            .find(|region| region.target == ClickTarget::Category(Category::Park))
            .expect("parks tab registered");
        assert_eq!(parks.row, 4);
        assert_eq!(parks.cols.len(), " Parks ".len());
        assert_eq!(frame.hits().len(), 3);
    }

    #[test]
    fn active_tab_uses_selection_colors() {
        let theme = Theme::default();
        let mut frame = Frame::new();
        render_header(&mut frame, 1, &header(Category::Park), &theme, 60);

        let active = format!("{} Parks ", Theme::bg(&theme.colors.selection_bg));
        assert!(frame.as_str().contains(&active));
    }
}

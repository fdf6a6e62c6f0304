//! Detail page renderer.
//!
//! The top bar holds the back button and a scroll position hint. Below it,
//! the already windowed body lines are drawn one per row.

use super::render_border;
use crate::app::state::DETAIL_TOP_ROWS;
use crate::ui::frame::Frame;
use crate::ui::helpers::{chip_text, display_width, truncate, CHIP_GAP};
use crate::ui::hitmap::ClickTarget;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailLine, DetailViewModel};

const BACK_LABEL: &str = "[ ← Back ]";
const SUBMIT_LABEL: &str = "[ Submit Review ]";
/// Left indent of the body.
const INDENT: usize = 3;
/// Width of a review form input box, brackets included.
const FORM_BOX_WIDTH: usize = 32;

/// Renders the back bar and its border, returning the first body row.
pub fn render_detail_top(frame: &mut Frame, detail: &DetailViewModel, theme: &Theme, cols: usize) -> usize {
    frame.position_cursor(1, 1);
    frame.put(" ");
    frame.put(Theme::bold());
    frame.put(&Theme::fg(&theme.colors.button_fg));
    frame.put(&Theme::bg(&theme.colors.button_bg));
    frame.put(BACK_LABEL);
    frame.put(Theme::reset());
    frame.register(1, 2, display_width(BACK_LABEL), ClickTarget::Back);

    let mut used = 1 + display_width(BACK_LABEL);
    let position = scroll_hint(detail.hidden_above, detail.hidden_below);
    let title = truncate(
        &detail.name,
        cols.saturating_sub(used + 2 + display_width(&position) + 1),
    );

    frame.put("  ");
    frame.put(&Theme::fg(&theme.colors.text_dim));
    frame.put(&title);
    used += 2 + display_width(&title);
    frame.pad(cols.saturating_sub(used + display_width(&position)));
    frame.put(&position);
    frame.put(Theme::reset());

    render_border(frame, DETAIL_TOP_ROWS, &theme.colors.border, cols)
}

/// `↑ 3  ↓ 12` style hint, empty when the whole body fits.
fn scroll_hint(hidden_above: usize, hidden_below: usize) -> String {
    match (hidden_above, hidden_below) {
        (0, 0) => String::new(),
        (above, 0) => format!("↑ {above} "),
        (0, below) => format!("↓ {below} "),
        (above, below) => format!("↑ {above}  ↓ {below} "),
    }
}

/// Renders the visible body lines starting at `row`.
///
/// # Returns
///
/// The next available row position.
pub fn render_detail_body(
    frame: &mut Frame,
    row: usize,
    lines: &[DetailLine],
    theme: &Theme,
    cols: usize,
) -> usize {
    let width = cols.saturating_sub(INDENT * 2);
    let mut current_row = row;

    for line in lines {
        frame.position_cursor(current_row, 1);
        frame.put(Theme::reset());
        frame.pad(cols);
        frame.position_cursor(current_row, INDENT + 1);
        render_line(frame, current_row, line, theme, width);
        frame.put(Theme::reset());
        current_row += 1;
    }

    current_row
}

fn render_line(frame: &mut Frame, row: usize, line: &DetailLine, theme: &Theme, width: usize) {
    match line {
        DetailLine::Blank => {}
        DetailLine::Photo(url) => {
            frame.put(&Theme::fg(&theme.colors.text_dim));
            frame.put("Photo: ");
            frame.put(Theme::dim());
            frame.put(&Theme::fg(&theme.colors.link_fg));
            frame.put(&truncate(url, width.saturating_sub(7)));
        }
        DetailLine::Title { kind, name } => {
            let badge = format!(" {} ", kind.label());
            frame.put(Theme::bold());
            frame.put(&Theme::fg(theme.kind_color(*kind)));
            frame.put(&badge);
            frame.put(&Theme::fg(&theme.colors.header_fg));
            frame.put(" ");
            frame.put(&truncate(name, width.saturating_sub(display_width(&badge) + 1)));
        }
        DetailLine::Address(address) => {
            frame.put(&Theme::fg(&theme.colors.text_normal));
            frame.put(&truncate(address, width));
        }
        DetailLine::Heading(title) => {
            frame.put(Theme::bold());
            frame.put(&Theme::fg(&theme.colors.header_fg));
            frame.put(&truncate(title, width));
        }
        DetailLine::Amenities(tags) => render_amenities(frame, tags, theme, width),
        DetailLine::Field { label, value } => {
            let prefix = format!("{label}: ");
            frame.put(&Theme::fg(&theme.colors.text_dim));
            frame.put(&prefix);
            let color = if matches!(*label, "Hours" | "Phone") {
                &theme.colors.text_normal
            } else {
                &theme.colors.link_fg
            };
            frame.put(&Theme::fg(color));
            frame.put(&truncate(value, width.saturating_sub(display_width(&prefix))));
        }
        DetailLine::Review { comment, name } => {
            let author = format!(" - {name}");
            let quoted = format!("\"{comment}\"");
            let quoted = truncate(&quoted, width.saturating_sub(display_width(&author)));
            frame.put(Theme::italic());
            frame.put(&Theme::fg(&theme.colors.text_normal));
            frame.put(&quoted);
            frame.put(Theme::reset());
            frame.put(&Theme::fg(&theme.colors.text_dim));
            frame.put(&author);
        }
        DetailLine::NoReviews => {
            frame.put(Theme::dim());
            frame.put(&Theme::fg(&theme.colors.text_dim));
            frame.put("No reviews yet.");
        }
        DetailLine::FormField { label, placeholder } => {
            let prefix = format!("{label:<12}");
            let inner = FORM_BOX_WIDTH.saturating_sub(4);
            let hint = truncate(placeholder, inner);
            frame.put(&Theme::fg(&theme.colors.text_normal));
            frame.put(&prefix);
            frame.put(&Theme::fg(&theme.colors.border));
            frame.put("[ ");
            frame.put(Theme::dim());
            frame.put(&Theme::fg(&theme.colors.text_dim));
            frame.put(&hint);
            frame.pad(inner.saturating_sub(display_width(&hint)));
            frame.put(Theme::reset());
            frame.put(&Theme::fg(&theme.colors.border));
            frame.put(" ]");
        }
        DetailLine::SubmitButton => {
            frame.put(Theme::bold());
            frame.put(&Theme::fg(&theme.colors.button_fg));
            frame.put(&Theme::bg(&theme.colors.button_bg));
            frame.put(SUBMIT_LABEL);
            frame.register(row, INDENT + 1, display_width(SUBMIT_LABEL), ClickTarget::SubmitReview);
        }
    }
}

/// Amenity chips on one line; chips past the width are summarized as `+N`.
fn render_amenities(frame: &mut Frame, tags: &[String], theme: &Theme, width: usize) {
    if tags.is_empty() {
        frame.put(Theme::dim());
        frame.put(&Theme::fg(&theme.colors.text_dim));
        frame.put("None listed");
        return;
    }

    let mut used = 0;
    for (index, tag) in tags.iter().enumerate() {
        let chip = chip_text(tag, true);
        let gap = if index == 0 { 0 } else { CHIP_GAP };
        let rest = format!(" +{}", tags.len() - index);
        let fits_with_rest = used + gap + display_width(&chip) + display_width(&rest) <= width;
        let is_last = index + 1 == tags.len();

        if !(fits_with_rest || (is_last && used + gap + display_width(&chip) <= width)) {
            frame.put(&Theme::fg(&theme.colors.text_dim));
            frame.put(&rest);
            return;
        }

        frame.pad(gap);
        frame.put(&Theme::fg(&theme.colors.chip_active_fg));
        frame.put(&Theme::bg(&theme.colors.chip_active_bg));
        frame.put(&chip);
        frame.put(Theme::reset());
        used += gap + display_width(&chip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VenueKind;
    use crate::ui::frame::strip_ansi;
    use crate::ui::viewmodel::FooterInfo;

    fn detail(hidden_above: usize, hidden_below: usize) -> DetailViewModel {
        DetailViewModel {
            id: 2,
            name: "KLCC Park".to_string(),
            lines: vec![
                DetailLine::Title {
                    kind: VenueKind::Park,
                    name: "KLCC Park".to_string(),
                },
                DetailLine::Field {
                    label: "Hours",
                    value: "7am - 10pm".to_string(),
                },
                DetailLine::NoReviews,
                DetailLine::SubmitButton,
            ],
            hidden_above,
            hidden_below,
            footer: FooterInfo {
                keybindings: String::new(),
            },
        }
    }

    #[test]
    fn top_bar_has_back_button() {
        let mut frame = Frame::new();
        let next = render_detail_top(&mut frame, &detail(0, 0), &Theme::default(), 60);

        assert_eq!(next, DETAIL_TOP_ROWS + 1);
        assert_eq!(frame.hits().target_at(1, 2), Some(&ClickTarget::Back));
        assert_eq!(frame.hits().target_at(1, 1 + display_width(BACK_LABEL)), Some(&ClickTarget::Back));
        assert_eq!(frame.hits().target_at(1, 2 + display_width(BACK_LABEL)), None);
        assert!(strip_ansi(frame.as_str()).contains("[ ← Back ]  KLCC Park"));
    }

    #[test]
    fn scroll_hint_reports_hidden_lines() {
        assert_eq!(scroll_hint(0, 0), "");
        assert_eq!(scroll_hint(0, 4), "↓ 4 ");
        assert_eq!(scroll_hint(2, 4), "↑ 2  ↓ 4 ");
    }

    #[test]
    fn body_lines_render_in_order() {
        let vm = detail(0, 0);
        let mut frame = Frame::new();
        let next = render_detail_body(&mut frame, 3, &vm.lines, &Theme::default(), 60);

        assert_eq!(next, 7);
        let text = strip_ansi(frame.as_str());
        let title = text.find(" Park  KLCC Park").expect("title rendered");
        let hours = text.find("Hours: 7am - 10pm").expect("hours rendered");
        let reviews = text.find("No reviews yet.").expect("empty reviews rendered");
        assert!(title < hours && hours < reviews);
        assert_eq!(frame.hits().target_at(6, INDENT + 1), Some(&ClickTarget::SubmitReview));
    }

    #[test]
    fn amenities_overflow_is_summarized() {
        let tags: Vec<String> = ["Playground", "Water Play", "Petting Zoo"]
            .iter()
            .map(|tag| (*tag).to_string())
            .collect();
        let mut frame = Frame::new();
        render_amenities(&mut frame, &tags, &Theme::default(), 35);

        let text = strip_ansi(frame.as_str());
        assert!(text.contains("[✓ Playground]"));
        assert!(text.ends_with(" +1"));
    }
}

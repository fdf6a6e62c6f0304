//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin,
//! along with methods for filtering, cursor management, and UI view model
//! generation. It serves as the single source of truth for all transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates core data (the venue store) from the directory view
//! state ([`ViewState`]) and from derived state (the filtered result ids and
//! cursor positions). View models are computed on-demand from state snapshots.
//!
//! # State Components
//!
//! - **Store**: Immutable venue records, empty until the load completes
//! - **Load Status**: Whether the one-time load is pending, done, or failed
//! - **View**: Search term, category, amenity filters, selected venue
//! - **Filtered**: Ids of venues passing the filters, in store order
//! - **Cursors**: Highlighted card and focused amenity chip
//! - **Input Mode**: Controls keybinding interpretation and the footer hints
//!
//! # Example
//!
//! ```rust
//! use dunia::app::AppState;
//! use dunia::catalog::SourceLocation;
//! use dunia::ui::Theme;
//!
//! let state = AppState::new(SourceLocation::parse("data.json"), Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! ```

use super::filter::{filter_venues, match_ranges};
use super::modes::{InputMode, LoadStatus, Screen};
use super::view_state::ViewState;
use crate::catalog::{SourceLocation, VenueStore};
use crate::domain::{Category, Venue, VenueId, AMENITIES};
use crate::ui::helpers::{chip_text, display_width, wrap_chips};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CategoryTab, DetailLine, DetailViewModel, EmptyState, ErrorState, FilterChip, FooterInfo,
    HeaderInfo, ListViewModel, SearchBarInfo, UIViewModel, VenueCard,
};

pub const TITLE: &str = "Bubba's Dunia";
pub const TAGLINE: &str = "It's their world, we're just living in it";
pub const SEARCH_PLACEHOLDER: &str = "Search by name or location, e.g., 'Bangsar'";

/// Rows of the title, tagline, spacer, category selector and its border.
pub const HEADER_ROWS: usize = 5;
/// Rows of the bordered search box.
pub const SEARCH_ROWS: usize = 3;
/// Rows of one venue card, including the spacer below it.
pub const CARD_ROWS: usize = 4;
/// Rows of the bottom border and the footer.
pub const FOOTER_ROWS: usize = 2;
/// Rows of the detail page top bar and its border.
pub const DETAIL_TOP_ROWS: usize = 2;
/// Columns left blank on each side of the chip area.
pub const CHIP_MARGIN: usize = 2;

/// Default card thumbnail size in pixels.
pub const DEFAULT_THUMBNAIL_SIZE: (u32, u32) = (600, 400);

/// Central application state container.
///
/// Mutated by the event handler in response to user input, worker responses,
/// and web request results. View models are computed on-demand from state
/// snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded venue records. Empty until the load completes.
    pub store: VenueStore,

    /// Progress of the one-time data load.
    pub load_status: LoadStatus,

    /// Where the venue data is loaded from.
    pub source: SourceLocation,

    /// Search, category, amenity filters, and selection.
    pub view: ViewState,

    /// Ids of venues passing the current filters, in store order.
    ///
    /// Recomputed by `apply_filters()` after every filter change.
    pub filtered: Vec<VenueId>,

    /// Zero-based index of the highlighted card within `filtered`.
    pub cursor: usize,

    /// Zero-based index of the focused chip within the amenity vocabulary.
    pub chip_cursor: usize,

    /// Current input handling mode of the list view.
    pub input_mode: InputMode,

    /// First visible body line of the detail page.
    pub detail_scroll: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Card thumbnail size as `(width, height)`.
    pub thumbnail_size: (u32, u32),
}

impl AppState {
    /// Creates an empty state that will load venues from `source`.
    #[must_use]
    pub fn new(source: SourceLocation, theme: Theme) -> Self {
        Self {
            store: VenueStore::default(),
            load_status: LoadStatus::Idle,
            source,
            view: ViewState::default(),
            filtered: vec![],
            cursor: 0,
            chip_cursor: 0,
            input_mode: InputMode::Normal,
            detail_scroll: 0,
            theme,
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
        }
    }

    /// Current screen. A stale selection is shown as the list view.
    #[must_use]
    pub fn screen(&self) -> Screen<'_> {
        self.view.screen(&self.store)
    }

    /// Installs loaded venue records.
    ///
    /// Only the first load result counts; once the status is `Ready` or
    /// `Failed`, later results are ignored and `false` is returned. A record set
    /// with duplicate ids fails the load.
    pub fn finish_load(&mut self, venues: Vec<Venue>) -> bool {
        if matches!(self.load_status, LoadStatus::Ready | LoadStatus::Failed(_)) {
            tracing::warn!(venue_count = venues.len(), "ignoring repeated venue load");
            return false;
        }

        match VenueStore::new(venues) {
            Ok(store) => {
                tracing::info!(venue_count = store.len(), "venues loaded");
                self.store = store;
                self.load_status = LoadStatus::Ready;
                self.apply_filters();
            }
            Err(e) => self.fail_load(&e.to_string()),
        }
        true
    }

    /// Marks the load as failed. The plugin shows only the error from now on.
    pub fn fail_load(&mut self, message: &str) {
        if matches!(self.load_status, LoadStatus::Ready | LoadStatus::Failed(_)) {
            tracing::warn!(error = %message, "ignoring load failure after load finished");
            return;
        }
        tracing::error!(error = %message, source = %self.source, "venue load failed");
        self.load_status = LoadStatus::Failed(message.to_string());
    }

    /// Recomputes `filtered` from the view state and clamps the cursor.
    pub fn apply_filters(&mut self) {
        self.filtered = filter_venues(&self.store, &self.view)
            .into_iter()
            .map(|venue| venue.id)
            .collect();

        if self.filtered.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.filtered.len() - 1);
        }
    }

    /// Moves the card cursor down by one, wrapping to the top.
    pub fn move_cursor_down(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.filtered.len();
    }

    /// Moves the card cursor up by one, wrapping to the bottom.
    pub fn move_cursor_up(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        if self.cursor == 0 {
            self.cursor = self.filtered.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    pub fn move_chip_right(&mut self) {
        self.chip_cursor = (self.chip_cursor + 1) % AMENITIES.len();
    }

    pub fn move_chip_left(&mut self) {
        self.chip_cursor = self.chip_cursor.checked_sub(1).unwrap_or(AMENITIES.len() - 1);
    }

    /// Amenity label under the chip cursor.
    #[must_use]
    pub fn focused_chip(&self) -> &'static str {
        AMENITIES[self.chip_cursor % AMENITIES.len()]
    }

    /// Id of the highlighted card, if any venue is listed.
    #[must_use]
    pub fn highlighted_venue_id(&self) -> Option<VenueId> {
        self.filtered.get(self.cursor).copied()
    }

    /// Number of body lines on the detail page of the selected venue.
    #[must_use]
    pub fn detail_line_count(&self) -> usize {
        match self.screen() {
            Screen::Detail(venue) => detail_lines(venue).len(),
            Screen::List => 0,
        }
    }

    /// Computes a renderable UI view model from current state and pane dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Calculate rows left for cards after the header, search, chips and footer
    /// 2. Center the window of cards around the cursor
    /// 3. Shift the window back near the end so it stays full
    ///
    /// The detail page body is windowed the same way from `detail_scroll`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        match &self.load_status {
            LoadStatus::Idle | LoadStatus::Pending => UIViewModel::Pending,
            LoadStatus::Failed(detail) => UIViewModel::Failed(self.compute_error(detail)),
            LoadStatus::Ready => match self.screen() {
                Screen::Detail(venue) => UIViewModel::Detail(self.compute_detail(venue, rows)),
                Screen::List => UIViewModel::List(self.compute_list(rows, cols)),
            },
        }
    }

    fn compute_list(&self, rows: usize, cols: usize) -> ListViewModel {
        let chips = self.compute_chips();
        let widths: Vec<usize> = chips
            .iter()
            .map(|chip| display_width(&chip_text(&chip.label, chip.is_active)))
            .collect();
        let chip_lines = wrap_chips(&widths, chip_area_width(cols)).len();

        let capacity = self.calculate_card_capacity(rows, chip_lines);
        let (start, end) = visible_window(self.cursor, self.filtered.len(), capacity);

        let cards: Vec<VenueCard> = self.filtered[start..end]
            .iter()
            .enumerate()
            .filter_map(|(offset, id)| {
                self.store
                    .get(*id)
                    .map(|venue| self.compute_card(venue, start + offset == self.cursor))
            })
            .collect();

        let (heading, empty_state) = if self.filtered.is_empty() {
            (
                "No Results Found".to_string(),
                Some(EmptyState {
                    message: "No venues match your search".to_string(),
                    subtitle: "Try another name, location, category or fewer amenities".to_string(),
                }),
            )
        } else {
            (format!("Showing {} Results", self.filtered.len()), None)
        };

        ListViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            heading,
            chips,
            cards,
            empty_state,
            footer: self.compute_footer(),
        }
    }

    /// Rows available for cards, counted in whole cards and never below one.
    fn calculate_card_capacity(&self, rows: usize, chip_lines: usize) -> usize {
        let chrome = HEADER_ROWS + SEARCH_ROWS + 1 + chip_lines + 1 + FOOTER_ROWS;
        (rows.saturating_sub(chrome) / CARD_ROWS).max(1)
    }

    fn compute_card(&self, venue: &Venue, is_selected: bool) -> VenueCard {
        let term = self.view.search_term();
        let (width, height) = self.thumbnail_size;

        VenueCard {
            id: venue.id,
            kind: venue.kind,
            name: venue.name.clone(),
            location: venue.location.clone(),
            rating: format!("★ {:.1}", venue.rating),
            reviews: format!("({} reviews)", venue.reviews),
            description: venue.description.clone(),
            thumbnail_url: venue.thumbnail_url(width, height),
            is_selected,
            name_highlights: match_ranges(&venue.name, term),
            location_highlights: match_ranges(&venue.location, term),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: TITLE,
            tagline: TAGLINE,
            categories: Category::ALL
                .iter()
                .map(|&category| CategoryTab {
                    category,
                    label: category.label(),
                    is_active: category == self.view.category(),
                })
                .collect(),
        }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        SearchBarInfo {
            query: self.view.search_term().to_string(),
            placeholder: SEARCH_PLACEHOLDER,
            is_focused: self.input_mode == InputMode::Search,
        }
    }

    fn compute_chips(&self) -> Vec<FilterChip> {
        AMENITIES
            .iter()
            .enumerate()
            .map(|(index, &label)| FilterChip {
                label: label.to_string(),
                is_active: self.view.is_filter_active(label),
                is_focused: index == self.chip_cursor && self.input_mode == InputMode::Normal,
            })
            .collect()
    }

    fn compute_detail(&self, venue: &Venue, rows: usize) -> DetailViewModel {
        let lines = detail_lines(venue);
        let capacity = rows.saturating_sub(DETAIL_TOP_ROWS + FOOTER_ROWS).max(1);
        let max_start = lines.len().saturating_sub(capacity);
        let start = self.detail_scroll.min(max_start);
        let end = (start + capacity).min(lines.len());

        DetailViewModel {
            id: venue.id,
            name: venue.name.clone(),
            hidden_above: start,
            hidden_below: lines.len() - end,
            lines: lines[start..end].to_vec(),
            footer: self.compute_footer(),
        }
    }

    fn compute_error(&self, detail: &str) -> ErrorState {
        ErrorState {
            message: "Error: Could not load venue data.".to_string(),
            subtitle: format!(
                "Please make sure {} exists and contains a list of venues.",
                self.source
            ),
            detail: detail.to_string(),
        }
    }

    /// Computes footer keybindings text based on the current screen and input mode.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.screen(), self.input_mode) {
            (Screen::Detail(_), _) => "Esc/b: back  j/k: scroll  Enter: submit review  q: quit",
            (Screen::List, InputMode::Search) => {
                "Type to search  Enter: done  Esc: clear  Ctrl+n/p: move"
            }
            (Screen::List, InputMode::Normal) => {
                "j/k: move  Enter: open  /: search  Tab/1-3: category  h/l Space: amenity  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Columns available to the chip rows.
#[must_use]
pub const fn chip_area_width(cols: usize) -> usize {
    cols.saturating_sub(CHIP_MARGIN * 2)
}

/// Returns the `[start, end)` window of `capacity` items around `selected`.
fn visible_window(selected: usize, total: usize, capacity: usize) -> (usize, usize) {
    let mut start = selected.saturating_sub(capacity / 2);
    let end = (start + capacity).min(total);

    if end - start.min(end) < capacity && total >= capacity {
        start = end.saturating_sub(capacity);
    }

    (start.min(end), end)
}

/// Body of the detail page, top to bottom.
///
/// Optional contact channels only produce a line when present.
fn detail_lines(venue: &Venue) -> Vec<DetailLine> {
    let mut lines = vec![
        DetailLine::Photo(venue.image_url.clone()),
        DetailLine::Blank,
        DetailLine::Title {
            kind: venue.kind,
            name: venue.name.clone(),
        },
        DetailLine::Address(venue.address.clone()),
        DetailLine::Blank,
        DetailLine::Heading("Amenities"),
        DetailLine::Amenities(venue.tags.clone()),
        DetailLine::Blank,
        DetailLine::Heading("Plan Your Visit"),
        DetailLine::Field {
            label: "Hours",
            value: if venue.hours.is_empty() {
                "Not listed".to_string()
            } else {
                venue.hours.clone()
            },
        },
    ];

    let contact = &venue.contact;
    let channels = [
        ("Phone", &contact.phone),
        ("Google Maps", &contact.google_maps_url),
        ("Website", &contact.website),
        ("Facebook", &contact.facebook),
        ("Instagram", &contact.instagram),
    ];
    lines.extend(channels.into_iter().filter_map(|(label, value)| {
        value.as_ref().map(|value| DetailLine::Field {
            label,
            value: value.clone(),
        })
    }));

    lines.push(DetailLine::Blank);
    lines.push(DetailLine::Heading("What Parents Are Saying"));
    if venue.user_reviews.is_empty() {
        lines.push(DetailLine::NoReviews);
    } else {
        lines.extend(venue.user_reviews.iter().map(|review| DetailLine::Review {
            comment: review.comment.clone(),
            name: review.name.clone(),
        }));
    }

    lines.extend([
        DetailLine::Blank,
        DetailLine::Heading("Share Your Experience"),
        DetailLine::FormField {
            label: "Your Name",
            placeholder: "e.g., Sarah L.",
        },
        DetailLine::FormField {
            label: "Your Review",
            placeholder: "What did you think?",
        },
        DetailLine::SubmitButton,
    ]);

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_state(json: serde_json::Value) -> AppState {
        let mut state = AppState::new(SourceLocation::parse("data.json"), Theme::default());
        state.load_status = LoadStatus::Pending;
        assert!(state.finish_load(serde_json::from_value(json).unwrap()));
        state
    }

    fn scenario_state() -> AppState {
        ready_state(serde_json::json!([
            {"id": 1, "name": "Cafe Bangsar", "type": "Restaurant", "location": "Bangsar", "tags": ["Halal"],
             "imageUrl": "https://placehold.co/1200x600/f472b6/white?text=Cafe"},
            {"id": 2, "name": "KLCC Park", "type": "Park", "location": "KLCC", "tags": ["Playground"],
             "hours": "7am - 10pm", "contact": {"phone": "03-1234 5678", "website": ""},
             "userReviews": [{"name": "Aisha", "comment": "Great wading pool"}]},
        ]))
    }

    fn list(vm: UIViewModel) -> ListViewModel {
        match vm {
            UIViewModel::List(list) => list,
            other => panic!("expected list view model, got {other:?}"),
        }
    }

    fn detail(vm: UIViewModel) -> DetailViewModel {
        match vm {
            UIViewModel::Detail(detail) => detail,
            other => panic!("expected detail view model, got {other:?}"),
        }
    }

    #[test]
    fn blank_until_venues_arrive() {
        let state = AppState::new(SourceLocation::parse("data.json"), Theme::default());
        assert_eq!(state.compute_viewmodel(24, 80), UIViewModel::Pending);
    }

    #[test]
    fn second_load_is_ignored() {
        let mut state = scenario_state();
        let again: Vec<Venue> = serde_json::from_value(serde_json::json!([
            {"id": 9, "name": "Late Arrival", "type": "Park", "location": "Ipoh"}
        ]))
        .unwrap();

        assert!(!state.finish_load(again));
        assert_eq!(state.store.len(), 2);
        assert!(state.store.get(9).is_none());
    }

    #[test]
    fn duplicate_ids_fail_the_load() {
        let mut state = AppState::new(SourceLocation::parse("data.json"), Theme::default());
        state.load_status = LoadStatus::Pending;
        let venues: Vec<Venue> = serde_json::from_value(serde_json::json!([
            {"id": 1, "name": "A", "type": "Park", "location": "X"},
            {"id": 1, "name": "B", "type": "Park", "location": "Y"},
        ]))
        .unwrap();

        state.finish_load(venues);
        let UIViewModel::Failed(error) = state.compute_viewmodel(24, 80) else {
            panic!("expected failure view model");
        };
        assert_eq!(error.message, "Error: Could not load venue data.");
        assert!(error.subtitle.contains("data.json"));
        assert!(error.detail.contains("Duplicate venue id: 1"));
    }

    #[test]
    fn list_shows_count_and_all_chips() {
        let vm = list(scenario_state().compute_viewmodel(40, 100));
        assert_eq!(vm.heading, "Showing 2 Results");
        assert_eq!(vm.chips.len(), AMENITIES.len());
        assert_eq!(vm.cards.len(), 2);
        assert!(vm.cards[0].is_selected);
        assert_eq!(vm.cards[0].rating, "★ 0.0");
        assert_eq!(vm.search_bar.placeholder, SEARCH_PLACEHOLDER);
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn card_uses_resized_thumbnail() {
        let vm = list(scenario_state().compute_viewmodel(40, 100));
        assert_eq!(
            vm.cards[0].thumbnail_url,
            "https://placehold.co/600x400/f472b6/white?text=Cafe"
        );
    }

    #[test]
    fn no_matches_shows_empty_state() {
        let mut state = scenario_state();
        state.view.toggle_filter("Halal");
        state.view.toggle_filter("Playground");
        state.apply_filters();

        let vm = list(state.compute_viewmodel(40, 100));
        assert_eq!(vm.heading, "No Results Found");
        assert!(vm.cards.is_empty());
        assert!(vm.empty_state.is_some());
        assert!(vm.chips.iter().filter(|c| c.is_active).count() == 2);
    }

    #[test]
    fn search_term_produces_highlights() {
        let mut state = scenario_state();
        state.view.set_search_term("bang");
        state.apply_filters();

        let vm = list(state.compute_viewmodel(40, 100));
        assert_eq!(vm.cards.len(), 1);
        assert_eq!(vm.cards[0].name_highlights, vec![(5, 9)]);
        assert_eq!(vm.cards[0].location_highlights, vec![(0, 4)]);
    }

    #[test]
    fn cards_are_windowed_around_cursor() {
        let venues: Vec<serde_json::Value> = (1..=30)
            .map(|id| serde_json::json!({"id": id, "name": format!("Venue {id}"), "type": "Park", "location": "KL"}))
            .collect();
        let mut state = ready_state(serde_json::Value::Array(venues));
        state.cursor = 29;

        let vm = list(state.compute_viewmodel(40, 200));
        assert!(!vm.cards.is_empty());
        assert!(vm.cards.len() < 30);
        assert_eq!(vm.cards.last().map(|c| c.id), Some(30));
        assert!(vm.cards.last().is_some_and(|c| c.is_selected));
    }

    #[test]
    fn detail_lists_present_contacts_only() {
        let mut state = scenario_state();
        state.view.select_venue(2);

        let vm = detail(state.compute_viewmodel(60, 100));
        assert_eq!(vm.name, "KLCC Park");
        assert!(vm.lines.contains(&DetailLine::Field {
            label: "Phone",
            value: "03-1234 5678".to_string()
        }));
        assert!(!vm
            .lines
            .iter()
            .any(|line| matches!(line, DetailLine::Field { label: "Website", .. })));
        assert!(vm.lines.contains(&DetailLine::Review {
            comment: "Great wading pool".to_string(),
            name: "Aisha".to_string()
        }));
    }

    #[test]
    fn detail_without_reviews_says_so() {
        let mut state = scenario_state();
        state.view.select_venue(1);

        let vm = detail(state.compute_viewmodel(60, 100));
        assert!(vm.lines.contains(&DetailLine::NoReviews));
        assert!(vm.lines.contains(&DetailLine::Field {
            label: "Hours",
            value: "Not listed".to_string()
        }));
    }

    #[test]
    fn detail_scroll_is_clamped_to_content() {
        let mut state = scenario_state();
        state.view.select_venue(2);
        state.detail_scroll = 1_000;

        let vm = detail(state.compute_viewmodel(10, 100));
        assert_eq!(vm.hidden_below, 0);
        assert_eq!(vm.lines.last(), Some(&DetailLine::SubmitButton));
        assert_eq!(vm.hidden_above + vm.lines.len(), state.detail_line_count());
    }

    #[test]
    fn stale_selection_shows_list() {
        let mut state = scenario_state();
        state.view.select_venue(999);
        assert!(matches!(state.compute_viewmodel(40, 100), UIViewModel::List(_)));
    }

    #[test]
    fn chip_cursor_wraps() {
        let mut state = scenario_state();
        state.move_chip_left();
        assert_eq!(state.focused_chip(), AMENITIES[AMENITIES.len() - 1]);
        state.move_chip_right();
        assert_eq!(state.focused_chip(), AMENITIES[0]);
    }

    #[test]
    fn visible_window_stays_full_near_end() {
        assert_eq!(visible_window(0, 10, 4), (0, 4));
        assert_eq!(visible_window(9, 10, 4), (6, 10));
        assert_eq!(visible_window(5, 10, 4), (3, 7));
        assert_eq!(visible_window(0, 0, 4), (0, 0));
        assert_eq!(visible_window(1, 2, 4), (0, 2));
    }
}

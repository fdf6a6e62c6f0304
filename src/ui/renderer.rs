//! Top-level rendering coordinator.
//!
//! This module provides the [`Renderer`], which turns application state into
//! one frame of ANSI output per Zellij render call. It coordinates view model
//! computation, delegates to the UI components, and keeps the click targets of
//! the most recent frame for mouse dispatch.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! # Region Reuse
//!
//! The list page header (title, tagline, category selector) is cached together
//! with the view model and width it was drawn from. A [`Redraw::Results`]
//! request keeps the cache, so typing in the search box or toggling an amenity
//! only redraws the search box, the results, and the footer. A
//! [`Redraw::Full`] request drops the cache and the header is drawn again.
//!
//! # Example
//!
//! ```rust
//! use dunia::app::AppState;
//! use dunia::catalog::SourceLocation;
//! use dunia::ui::{Renderer, Theme};
//!
//! let state = AppState::new(SourceLocation::parse("data.json"), Theme::default());
//! let mut renderer = Renderer::default();
//! let output = renderer.render(&state, 24, 80);
//! print!("{output}");
//! ```

use crate::app::{AppState, Redraw};
use crate::ui::components;
use crate::ui::frame::Frame;
use crate::ui::hitmap::{ClickTarget, HitMap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HeaderInfo, UIViewModel};

/// Header region drawn for a given width and header view model.
#[derive(Debug, Clone)]
struct HeaderCache {
    cols: usize,
    header: HeaderInfo,
    frame: Frame,
}

/// Counters describing the work done by the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames produced.
    pub frames: usize,
    /// Times the header region was drawn instead of reused.
    pub header_builds: usize,
}

/// Stateful renderer owning the header cache and the current hit map.
#[derive(Debug, Default)]
pub struct Renderer {
    header_cache: Option<HeaderCache>,
    pending: Redraw,
    hits: HitMap,
    stats: RenderStats,
}

impl Renderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the redraw scope of a handled event.
    ///
    /// Scopes accumulate until the next render; a `Full` request invalidates
    /// the cached header immediately.
    pub fn request(&mut self, redraw: Redraw) {
        if redraw == Redraw::Full {
            self.header_cache = None;
        }
        self.pending = self.pending.max(redraw);
    }

    /// Scope requested since the last render.
    #[must_use]
    pub const fn pending(&self) -> Redraw {
        self.pending
    }

    /// Produces the ANSI output of one frame and replaces the hit map.
    pub fn render(&mut self, state: &AppState, rows: usize, cols: usize) -> String {
        let span = tracing::trace_span!("render", rows, cols, pending = ?self.pending);
        let _guard = span.entered();

        let viewmodel = state.compute_viewmodel(rows, cols);
        let mut frame = Frame::new();

        match &viewmodel {
            UIViewModel::Pending => {}
            UIViewModel::Failed(error) => {
                components::render_error(&mut frame, error, &state.theme, cols);
            }
            UIViewModel::List(list) => {
                frame.append(self.header_frame(&list.header, &state.theme, cols));
                components::render_list_body(&mut frame, list, &state.theme, rows, cols);
            }
            UIViewModel::Detail(detail) => {
                components::render_detail_page(&mut frame, detail, &state.theme, rows, cols);
            }
        }

        self.pending = Redraw::Skip;
        self.stats.frames += 1;

        let (output, hits) = frame.into_parts();
        self.hits = hits;
        output
    }

    /// Returns the cached header, drawing it first if the cache is missing or
    /// was drawn for a different width or header.
    fn header_frame(&mut self, header: &HeaderInfo, theme: &Theme, cols: usize) -> &Frame {
        let is_fresh = self
            .header_cache
            .as_ref()
            .is_some_and(|cache| cache.cols == cols && cache.header == *header);

        if !is_fresh {
            self.header_cache = None;
        }

        let stats = &mut self.stats;
        let cache = self.header_cache.get_or_insert_with(|| {
            tracing::trace!(cols, "drawing header region");
            let mut frame = Frame::new();
            components::render_header(&mut frame, 1, header, theme, cols);
            stats.header_builds += 1;
            HeaderCache {
                cols,
                header: header.clone(),
                frame,
            }
        });
        &cache.frame
    }

    /// Click target under a 1-based cell of the last rendered frame.
    #[must_use]
    pub fn hit_test(&self, row: usize, col: usize) -> Option<&ClickTarget> {
        self.hits.target_at(row, col)
    }

    /// Click targets of the last rendered frame.
    #[must_use]
    pub const fn hits(&self) -> &HitMap {
        &self.hits
    }

    #[must_use]
    pub const fn stats(&self) -> RenderStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event, LoadStatus};
    use crate::catalog::SourceLocation;
    use crate::domain::Category;
    use crate::ui::frame::strip_ansi;

    fn scenario_state() -> AppState {
        let mut state = AppState::new(SourceLocation::parse("data.json"), Theme::default());
        state.load_status = LoadStatus::Pending;
        let venues = serde_json::from_value(serde_json::json!([
            {"id": 1, "name": "Cafe Bangsar", "type": "Restaurant", "location": "Bangsar", "tags": ["Halal"]},
            {"id": 2, "name": "KLCC Park", "type": "Park", "location": "KLCC", "tags": ["Playground"]},
        ]))
        .unwrap();
        assert!(state.finish_load(venues));
        state
    }

    fn apply(state: &mut AppState, renderer: &mut Renderer, event: Event) {
        let (redraw, _) = handle_event(state, &event).unwrap();
        renderer.request(redraw);
    }

    #[test]
    fn list_shows_both_cards() {
        let state = scenario_state();
        let mut renderer = Renderer::new();
        let text = strip_ansi(&renderer.render(&state, 40, 80));

        assert!(text.contains("Bubba's Dunia"));
        assert!(text.contains("Showing 2 Results"));
        assert!(text.contains("Cafe Bangsar"));
        assert!(text.contains("KLCC Park"));
    }

    #[test]
    fn conflicting_filters_show_no_results() {
        let mut state = scenario_state();
        let mut renderer = Renderer::new();
        apply(&mut state, &mut renderer, Event::ToggleFilter("Halal".to_string()));
        apply(&mut state, &mut renderer, Event::ToggleFilter("Playground".to_string()));

        let text = strip_ansi(&renderer.render(&state, 40, 80));
        assert!(text.contains("No Results Found"));
        assert!(!text.contains("Cafe Bangsar"));
        assert!(!renderer.hits().iter().any(|region| matches!(region.target, ClickTarget::Venue(_))));
    }

    #[test]
    fn detail_page_and_back() {
        let mut state = scenario_state();
        let mut renderer = Renderer::new();
        apply(&mut state, &mut renderer, Event::OpenVenue(2));

        let text = strip_ansi(&renderer.render(&state, 40, 80));
        assert!(text.contains("KLCC Park"));
        assert!(text.contains("Plan Your Visit"));
        assert!(!text.contains("Cafe Bangsar"));
        assert_eq!(renderer.hit_test(1, 3), Some(&ClickTarget::Back));

        apply(&mut state, &mut renderer, Event::Back);
        let text = strip_ansi(&renderer.render(&state, 40, 80));
        assert!(text.contains("Cafe Bangsar"));
        assert!(text.contains("KLCC Park"));
        assert_eq!(renderer.hit_test(1, 3), None);
    }

    #[test]
    fn stale_selection_renders_list() {
        let mut state = scenario_state();
        state.view.select_venue(999);
        let mut renderer = Renderer::new();

        let text = strip_ansi(&renderer.render(&state, 40, 80));
        assert!(text.contains("Showing 2 Results"));
        assert!(!text.contains("← Back"));
    }

    #[test]
    fn results_redraw_reuses_header() {
        let mut state = scenario_state();
        let mut renderer = Renderer::new();
        renderer.render(&state, 40, 80);
        assert_eq!(renderer.stats().header_builds, 1);

        apply(&mut state, &mut renderer, Event::FocusSearch);
        apply(&mut state, &mut renderer, Event::Char('k'));
        assert_eq!(renderer.pending(), Redraw::Results);
        let text = strip_ansi(&renderer.render(&state, 40, 80));
        assert!(text.contains("Showing 1 Results"));
        assert!(text.contains("Bubba's Dunia"));
        assert_eq!(renderer.stats().header_builds, 1);
        assert_eq!(renderer.pending(), Redraw::Skip);

        apply(&mut state, &mut renderer, Event::SetCategory(Category::Park));
        renderer.render(&state, 40, 80);
        assert_eq!(renderer.stats().header_builds, 2);
        assert_eq!(renderer.stats().frames, 3);
    }

    #[test]
    fn resize_redraws_header() {
        let state = scenario_state();
        let mut renderer = Renderer::new();
        renderer.render(&state, 40, 80);
        renderer.render(&state, 40, 100);
        assert_eq!(renderer.stats().header_builds, 2);
    }

    #[test]
    fn hit_map_is_replaced_each_render() {
        let state = scenario_state();
        let mut renderer = Renderer::new();
        renderer.render(&state, 40, 80);
        let first = renderer.hits().clone();
        renderer.render(&state, 40, 80);

        assert_eq!(renderer.hits(), &first);
        assert!(renderer.hits().iter().any(|region| region.target == ClickTarget::SearchBox));
        assert!(renderer
            .hits()
            .iter()
            .any(|region| region.target == ClickTarget::Filter("Halal".to_string())));
        assert!(renderer.hits().iter().any(|region| region.target == ClickTarget::Venue(1)));
        assert!(renderer
            .hits()
            .iter()
            .any(|region| region.target == ClickTarget::Category(Category::Restaurant)));
    }

    #[test]
    fn pending_load_renders_nothing() {
        let mut state = AppState::new(SourceLocation::parse("data.json"), Theme::default());
        let mut renderer = Renderer::new();
        apply(&mut state, &mut renderer, Event::PermissionsGranted);
        assert_eq!(state.load_status, LoadStatus::Pending);

        let output = renderer.render(&state, 24, 80);

        assert!(output.is_empty());
        assert!(renderer.hits().is_empty());
        assert_eq!(renderer.hit_test(1, 1), None);
    }

    #[test]
    fn failed_load_renders_only_error() {
        let mut state = AppState::new(SourceLocation::parse("data.json"), Theme::default());
        state.load_status = LoadStatus::Pending;
        state.fail_load("IO error: not found");
        let mut renderer = Renderer::new();

        let text = strip_ansi(&renderer.render(&state, 40, 80));
        assert!(text.contains("Error: Could not load venue data."));
        assert!(!text.contains("Bubba's Dunia"));
        assert!(renderer.hits().is_empty());
    }
}

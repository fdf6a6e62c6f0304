//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! load results, and worker responses, translating them into state changes and
//! action sequences. It serves as the primary control flow coordinator for the
//! application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime, the hit map, or the worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and `ViewState` methods
//! 4. A [`Redraw`] scope and the actions to execute are returned
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Results**: `CursorDown`, `ChipRight`, `ToggleFilter`, `Char`, `Backspace`
//! - **Navigation**: `SetCategory`, `OpenVenue`, `OpenHighlighted`, `Back`
//! - **Detail**: `ScrollDown`, `ScrollUp`, `SubmitReview`
//! - **Loading**: `PermissionsGranted`, `PermissionsDenied`, `DataFetched`, `WorkerResponse`
//!
//! Until the venues are loaded, every input event is ignored. After a load
//! failure nothing but `CloseFocus` has any effect.
//!
//! # Example
//!
//! ```rust
//! use dunia::app::{handle_event, AppState, Event};
//! use dunia::catalog::SourceLocation;
//! use dunia::ui::Theme;
//!
//! let mut state = AppState::new(SourceLocation::parse("data.json"), Theme::default());
//! let (redraw, actions) = handle_event(&mut state, &Event::PermissionsGranted)?;
//! assert_eq!(actions.len(), 1); // PostToWorker
//! # Ok::<(), dunia::DuniaError>(())
//! ```

use super::modes::{InputMode, LoadStatus, Screen};
use crate::app::{Action, AppState};
use crate::catalog::{parse_venues, SourceLocation};
use crate::domain::error::{DuniaError, Result};
use crate::domain::{Category, VenueId};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, click targets, or load results.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves the card cursor down by one (wraps to top).
    CursorDown,
    /// Moves the card cursor up by one (wraps to bottom).
    CursorUp,
    /// Moves the amenity chip cursor right (wraps).
    ChipRight,
    /// Moves the amenity chip cursor left (wraps).
    ChipLeft,
    /// Toggles the amenity under the chip cursor.
    ToggleFocusedChip,
    /// Toggles an amenity filter by label.
    ToggleFilter(String),
    /// Selects a category.
    SetCategory(Category),
    /// Selects the next category in selector order.
    CycleCategory,
    /// Opens the detail page of the highlighted card.
    OpenHighlighted,
    /// Opens the detail page of a venue.
    OpenVenue(VenueId),
    /// Returns from the detail page to the list.
    Back,
    /// Scrolls the detail page down one line.
    ScrollDown,
    /// Scrolls the detail page up one line.
    ScrollUp,
    /// Submit button of the review form.
    SubmitReview,

    /// Starts editing the search term.
    FocusSearch,
    /// Stops editing and keeps the search term.
    FinishSearch,
    /// Stops editing and clears the search term.
    ClearSearch,
    /// Appends a character to the search term.
    Char(char),
    /// Removes the last character from the search term.
    Backspace,

    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,

    /// Required permissions were granted; the data load may start.
    PermissionsGranted,

    /// The user refused the permissions; the data can never be loaded.
    PermissionsDenied,

    /// Result of the HTTP fetch of a URL data source.
    DataFetched {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: Vec<u8>,
    },

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

/// How much of the pane an event invalidated.
///
/// Ordered by scope, so pending redraws can be merged with `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Redraw {
    /// Nothing visible changed.
    #[default]
    Skip,
    /// Only the search box, results, and footer changed. The header is kept.
    Results,
    /// The whole pane must be regenerated.
    Full,
}

impl Redraw {
    /// Returns `true` if the plugin should ask Zellij for a render.
    #[must_use]
    pub const fn should_render(self) -> bool {
        !matches!(self, Self::Skip)
    }
}

/// Processes an event, mutates application state, and returns the redraw
/// scope and actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// The [`Redraw`] scope and a vector of actions to execute in sequence. The
/// vector is empty for most events.
///
/// # Errors
///
/// Currently infallible in practice; load failures are recorded in the state
/// rather than returned, so the pane can display them.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(Redraw, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::CloseFocus => return Ok((Redraw::Skip, vec![Action::CloseFocus])),
        Event::PermissionsGranted => return Ok(request_load(state)),
        Event::PermissionsDenied => {
            let already_done = matches!(state.load_status, LoadStatus::Ready | LoadStatus::Failed(_));
            state.fail_load("Permissions denied");
            let redraw = if already_done { Redraw::Skip } else { Redraw::Full };
            return Ok((redraw, vec![]));
        }
        Event::DataFetched { status, body } => return Ok(handle_fetch(state, *status, body)),
        Event::WorkerResponse(response) => return Ok(handle_worker_response(state, response)),
        _ => {}
    }

    if !state.load_status.is_ready() {
        tracing::debug!(status = ?state.load_status, "ignoring input, venues not loaded");
        return Ok((Redraw::Skip, vec![]));
    }

    let in_detail = matches!(state.view.resolve(&state.store), Screen::Detail(_));
    let redraw = if in_detail {
        handle_detail_event(state, event)
    } else {
        handle_list_event(state, event)
    };

    Ok((redraw, vec![]))
}

fn handle_list_event(state: &mut AppState, event: &Event) -> Redraw {
    match event {
        Event::CursorDown => {
            state.move_cursor_down();
            Redraw::Results
        }
        Event::CursorUp => {
            state.move_cursor_up();
            Redraw::Results
        }
        Event::ChipRight => {
            state.move_chip_right();
            Redraw::Results
        }
        Event::ChipLeft => {
            state.move_chip_left();
            Redraw::Results
        }
        Event::ToggleFocusedChip => {
            let label = state.focused_chip();
            state.view.toggle_filter(label);
            state.apply_filters();
            Redraw::Results
        }
        Event::ToggleFilter(label) => {
            if let Some(index) = crate::domain::AMENITIES.iter().position(|a| *a == label.as_str()) {
                state.chip_cursor = index;
            }
            state.view.toggle_filter(label);
            state.apply_filters();
            Redraw::Results
        }
        Event::SetCategory(category) => set_category(state, *category),
        Event::CycleCategory => {
            let next = state.view.category().next();
            set_category(state, next)
        }
        Event::OpenHighlighted => state
            .highlighted_venue_id()
            .map_or(Redraw::Skip, |id| open_venue(state, id)),
        Event::OpenVenue(id) => open_venue(state, *id),
        Event::FocusSearch => {
            if state.input_mode == InputMode::Search {
                return Redraw::Skip;
            }
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            Redraw::Results
        }
        Event::FinishSearch => {
            tracing::debug!(term = %state.view.search_term(), "leaving search mode");
            state.input_mode = InputMode::Normal;
            Redraw::Results
        }
        Event::ClearSearch => {
            if state.input_mode == InputMode::Normal && state.view.search_term().is_empty() {
                return Redraw::Skip;
            }
            state.input_mode = InputMode::Normal;
            state.view.set_search_term(String::new());
            state.apply_filters();
            Redraw::Results
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Redraw::Skip;
            }
            let mut term = state.view.search_term().to_string();
            term.push(*c);
            state.view.set_search_term(term);
            state.apply_filters();
            Redraw::Results
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search || state.view.search_term().is_empty() {
                return Redraw::Skip;
            }
            let mut term = state.view.search_term().to_string();
            term.pop();
            state.view.set_search_term(term);
            state.apply_filters();
            Redraw::Results
        }
        _ => Redraw::Skip,
    }
}

fn handle_detail_event(state: &mut AppState, event: &Event) -> Redraw {
    match event {
        Event::Back => {
            state.view.clear_selection();
            state.detail_scroll = 0;
            Redraw::Full
        }
        Event::ScrollDown => {
            let last_line = state.detail_line_count().saturating_sub(1);
            if state.detail_scroll >= last_line {
                return Redraw::Skip;
            }
            state.detail_scroll += 1;
            Redraw::Full
        }
        Event::ScrollUp => {
            if state.detail_scroll == 0 {
                return Redraw::Skip;
            }
            state.detail_scroll -= 1;
            Redraw::Full
        }
        Event::SubmitReview => {
            tracing::info!(
                venue_id = ?state.view.selected_venue_id(),
                "review submission is not supported, ignoring"
            );
            Redraw::Skip
        }
        _ => Redraw::Skip,
    }
}

fn set_category(state: &mut AppState, category: Category) -> Redraw {
    if state.view.category() == category {
        return Redraw::Skip;
    }
    state.view.set_category(category);
    state.apply_filters();
    Redraw::Full
}

/// Selects `id` and resolves it right away, so an unknown id stays on the list.
fn open_venue(state: &mut AppState, id: VenueId) -> Redraw {
    state.view.select_venue(id);
    state.detail_scroll = 0;
    state.input_mode = InputMode::Normal;
    if matches!(state.view.resolve(&state.store), Screen::List) {
        tracing::warn!(venue_id = id, "cannot open unknown venue");
    }
    Redraw::Full
}

/// Starts the one-time data load from the configured source.
fn request_load(state: &mut AppState) -> (Redraw, Vec<Action>) {
    if state.load_status.is_requested() {
        tracing::debug!("venue load already requested");
        return (Redraw::Skip, vec![]);
    }

    state.load_status = LoadStatus::Pending;
    let action = match &state.source {
        SourceLocation::File(path) => {
            tracing::debug!(path = ?path, "requesting venue load from worker");
            Action::PostToWorker(WorkerMessage::load_venues(path.clone()))
        }
        SourceLocation::Url(url) => {
            tracing::debug!(url = %url, "fetching venue data");
            Action::FetchUrl { url: url.clone() }
        }
    };

    (Redraw::Full, vec![action])
}

fn handle_fetch(state: &mut AppState, status: u16, body: &[u8]) -> (Redraw, Vec<Action>) {
    tracing::debug!(status, byte_count = body.len(), "venue data fetched");

    let loaded = if (200..300).contains(&status) {
        parse_venues(body)
    } else {
        Err(DuniaError::Http(status))
    };

    let changed = match loaded {
        Ok(venues) => state.finish_load(venues),
        Err(e) => {
            let already_done = matches!(state.load_status, LoadStatus::Ready | LoadStatus::Failed(_));
            state.fail_load(&e.to_string());
            !already_done
        }
    };

    (if changed { Redraw::Full } else { Redraw::Skip }, vec![])
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> (Redraw, Vec<Action>) {
    let changed = match response {
        WorkerResponse::VenuesLoaded { venues } => {
            tracing::debug!(venue_count = venues.len(), "worker loaded venues");
            state.finish_load(venues.clone())
        }
        WorkerResponse::Error { message } => {
            let already_done = matches!(state.load_status, LoadStatus::Ready | LoadStatus::Failed(_));
            state.fail_load(message);
            !already_done
        }
    };

    (if changed { Redraw::Full } else { Redraw::Skip }, vec![])
}

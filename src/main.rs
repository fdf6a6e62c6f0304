//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Dunia library
//! and the Zellij plugin system. It implements the `ZellijPlugin` trait and
//! registers the `ZellijWorker` to handle Zellij events and lifecycle.
//!
//! # Architecture
//!
//! The plugin uses Zellij's worker thread support for the data file load:
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling, rendering
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │   DuniaWorker    │   │  ← Reads and validates the data file
//! │  │ (worker thread)  │   │
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, Mouse, `CustomMessage`, `WebRequestResult` events
//! 3. **Permissions**: Once granted, request the one-time venue load
//! 4. **Update**: Map Zellij events to library events, delegate to `handle_event`
//! 5. **Render**: Print the frame produced by the `Renderer`
//!
//! # Worker Communication
//!
//! Messages between plugin and worker use JSON serialization:
//!
//! - Plugin → Worker: [`WorkerMessage`] (`LoadVenues`)
//! - Worker → Plugin: [`WorkerResponse`] (`VenuesLoaded`, `Error`)
//!
//! # Mouse Input
//!
//! A left click is looked up in the hit map of the last rendered frame. The
//! target found there produces the same event the equivalent key would.
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//!
//! List view, normal mode:
//! - `j`/`Down`, `k`/`Up`: Move the card cursor
//! - `h`/`Left`, `l`/`Right`: Move the amenity chip cursor
//! - `Space`: Toggle the focused amenity
//! - `Enter`: Open the highlighted venue
//! - `Tab`: Next category; `1`/`2`/`3`: Show All, Restaurants, Parks
//! - `/`: Focus search
//! - `Esc`: Clear the search term
//! - `q`: Close plugin
//!
//! List view, search mode:
//! - Characters and `Backspace`: Edit the search term
//! - `Enter`: Keep the term and stop typing
//! - `Esc`: Clear the term and stop typing
//!
//! Detail view:
//! - `Esc`/`Backspace`/`b`: Back to the list
//! - `j`/`Down`, `k`/`Up`: Scroll
//! - `Enter`: Submit review
//! - `q`: Close plugin

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use dunia::domain::Category;
use dunia::ui::Renderer;
use dunia::worker::{DuniaWorker, WorkerMessage, WorkerResponse};
use dunia::{handle_event, Action, Config, Event, InputMode, Screen};

// Register plugin and worker with Zellij
register_plugin!(State);
register_worker!(DuniaWorker, dunia_worker, DUNIA_WORKER);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns like worker
/// communication and the renderer holding the last frame's hit map.
struct State {
    /// Core application state from library layer.
    app: dunia::app::AppState,

    /// Frame renderer and click target lookup.
    renderer: Renderer,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: dunia::initialize(&default_config),
            renderer: Renderer::new(),
            worker_name: "dunia".to_string(),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Called once during plugin startup. Parses configuration, initializes
    /// application state, requests permissions, and subscribes to events. The
    /// venue load starts when the permission result arrives.
    ///
    /// # Permissions
    ///
    /// Requests:
    /// - `ReadApplicationState`: Receive input events
    /// - `FullHdAccess`: Read the data file and theme file from the host
    /// - `WebAccess`: Fetch URL data sources
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        dunia::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(data_source = %config.data_source, "parsed configuration");
        self.app = dunia::initialize(&config);

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::FullHdAccess,
            PermissionType::WebAccess,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
            EventType::WebRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to `handle_event`,
    /// records the redraw scope with the renderer, and executes resulting
    /// actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match self.map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, _context) => {
                tracing::debug!(status, byte_count = body.len(), "web request result");
                Event::DataFetched { status, body }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                Self::map_permission_result(permissions)
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((redraw, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    redraw = ?redraw,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                self.renderer.request(redraw);
                redraw.should_render()
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// Prints the frame produced by the renderer, which also replaces the
    /// click target map used by the next mouse event.
    fn render(&mut self, rows: usize, cols: usize) {
        let output = self.renderer.render(&self.app, rows, cols);
        print!("{output}");
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(_) => "Mouse".to_string(),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::WebRequestResult(..) => "WebRequestResult".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    ///
    /// The same key means different things on the detail page, in the list,
    /// and while typing a search term.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::CursorDown),
                BareKey::Char('p') => Some(Event::CursorUp),
                _ => None,
            };
        }

        if matches!(self.app.screen(), Screen::Detail(_)) {
            return Self::map_detail_key(key.bare_key);
        }

        match self.app.input_mode {
            InputMode::Search => Self::map_search_key(key.bare_key),
            InputMode::Normal => Self::map_list_key(key.bare_key),
        }
    }

    fn map_detail_key(key: BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Esc | BareKey::Backspace | BareKey::Char('b') => Event::Back,
            BareKey::Down | BareKey::Char('j') => Event::ScrollDown,
            BareKey::Up | BareKey::Char('k') => Event::ScrollUp,
            BareKey::Enter => Event::SubmitReview,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_search_key(key: BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Enter => Event::FinishSearch,
            BareKey::Esc => Event::ClearSearch,
            BareKey::Backspace => Event::Backspace,
            BareKey::Down => Event::CursorDown,
            BareKey::Up => Event::CursorUp,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_list_key(key: BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Down | BareKey::Char('j') => Event::CursorDown,
            BareKey::Up | BareKey::Char('k') => Event::CursorUp,
            BareKey::Right | BareKey::Char('l') => Event::ChipRight,
            BareKey::Left | BareKey::Char('h') => Event::ChipLeft,
            BareKey::Char(' ') => Event::ToggleFocusedChip,
            BareKey::Enter => Event::OpenHighlighted,
            BareKey::Tab => Event::CycleCategory,
            BareKey::Char('1') => Event::SetCategory(Category::All),
            BareKey::Char('2') => Event::SetCategory(Category::Restaurant),
            BareKey::Char('3') => Event::SetCategory(Category::Park),
            BareKey::Char('/') => Event::FocusSearch,
            BareKey::Esc => Event::ClearSearch,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Maps a left click to the event of the target under it.
    ///
    /// Zellij reports 0-based positions; the hit map is 1-based like the
    /// cursor positioning escapes the frame was drawn with.
    fn map_mouse_event(&self, mouse: Mouse) -> Option<Event> {
        let Mouse::LeftClick(line, col) = mouse else {
            return None;
        };
        let row = usize::try_from(line).ok()? + 1;
        let target = self.renderer.hit_test(row, col + 1);
        tracing::debug!(row, col = col + 1, target = ?target, "left click");
        target.map(dunia::ui::ClickTarget::event)
    }

    /// Maps permission request results to application events.
    fn map_permission_result(permissions: PermissionStatus) -> Event {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - loading venues");
                Event::PermissionsGranted
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - venues cannot be loaded");
                Event::PermissionsDenied
            }
        }
    }

    /// Maps custom message events to application events.
    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message == self.worker_name {
            match serde_json::from_str::<WorkerResponse>(payload) {
                Ok(response) => Some(Event::WorkerResponse(response)),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to deserialize worker response");
                    None
                }
            }
        } else {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            None
        }
    }

    /// Posts a message to the worker thread.
    ///
    /// Serializes the message as JSON and sends via Zellij's IPC system.
    /// Serialization errors are logged, not propagated.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Hide the plugin pane
    /// - `PostToWorker`: Send IPC message to worker thread
    /// - `FetchUrl`: Start an HTTP GET; the result arrives as `WebRequestResult`
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::PostToWorker(ref message) => {
                self.post_worker_message(message);
            }
            Action::FetchUrl { ref url } => {
                tracing::debug!(url = %url, "fetching venue data");
                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], BTreeMap::new());
            }
        }
    }
}

//! Dunia: a Zellij plugin for browsing family-friendly venues.
//!
//! Dunia ("Bubba's Dunia") is a terminal multiplexer plugin that provides:
//! - A directory of restaurants and parks loaded once from a JSON data file or URL
//! - Case-insensitive search over venue names and locations
//! - A category selector and amenity filter chips that combine with the search
//! - A scrollable detail page per venue with hours, contacts, and reviews
//! - Keyboard and mouse navigation
//! - Background loading via a Zellij worker thread

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Filter engine
//! │  - View state transitions                           │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (catalog/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Venue store │   │ - File load   │
//! │ - Theming     │   │ - Sources     │   │ - IPC bridge  │
//! │ - Hit map     │   │               │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Venue model and amenities (domain/)              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: Venue store and data sources
//! - [`domain`]: Core domain types (Venue, Category, amenities, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`worker`]: Background worker for loading the data file
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Design Principles
//!
//! ## One-Time Load
//!
//! Venue data is read once, after Zellij grants the plugin its permissions:
//! - File sources are read by the worker thread so a large file never blocks input
//! - URL sources are fetched with Zellij's web request API
//! - Any failure replaces the whole pane with an error message
//!
//! ## Explicit View State
//!
//! Search term, category, amenity filters, and the selected venue live in one
//! `ViewState` value that changes only through named transitions. Everything
//! the user sees is derived from it by pure functions.
//!
//! ## Immutable View Models
//!
//! UI rendering uses computed view models:
//! - Clear separation between state and display
//! - Enables easier testing and validation
//! - Pre-computes match highlighting and card windowing
//!
//! ## Click Delegation
//!
//! Every frame records which cells are clickable. A mouse click is looked up
//! in the map of the last frame and becomes an ordinary event.
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any terminal with 24-bit color and mouse reporting

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, Redraw, Screen};
pub use domain::{DuniaError, Result, Venue};
pub use ui::Theme;

use app::state::DEFAULT_THUMBNAIL_SIZE;
use catalog::SourceLocation;
use std::collections::BTreeMap;

/// Default location of the venue data file.
pub const DEFAULT_DATA_SOURCE: &str = "data.json";

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/dunia.wasm" {
///     data_source "~/dunia/data.json"
///     theme "catppuccin-mocha"
///     theme_file "/path/to/theme.toml"
///     thumbnail_size "300x200"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where venue records are loaded from.
    ///
    /// An `http://` or `https://` URL, or a path. Paths starting with `~` or
    /// relative paths are resolved against the host directory Zellij mounts
    /// for the plugin. Default: `"data.json"`
    pub data_source: String,

    /// Built-in theme name to use.
    ///
    /// Options: `dunia`, `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Card thumbnail size as `(width, height)` in pixels. Default: `600x400`
    pub thumbnail_size: (u32, u32),

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_source: DEFAULT_DATA_SOURCE.to_string(),
            theme_name: None,
            theme_file: None,
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. This function extracts and parses typed values
    /// with fallback defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `data_source`: Trimmed string, empty falls back to `data.json`
    /// - `theme`: String → `Option<String>`
    /// - `theme_file`: String → `Option<String>`
    /// - `thumbnail_size`: `WxH` → `(u32, u32)` (falls back to `600x400` on parse error)
    /// - `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use dunia::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("data_source".to_string(), "https://example.com/venues.json".to_string());
    /// map.insert("thumbnail_size".to_string(), "300x200".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.data_source, "https://example.com/venues.json");
    /// assert_eq!(config.thumbnail_size, (300, 200));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let data_source = config
            .get("data_source")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_SOURCE.to_string());

        let thumbnail_size = config
            .get("thumbnail_size")
            .and_then(|s| parse_size(s))
            .unwrap_or(DEFAULT_THUMBNAIL_SIZE);

        Self {
            data_source,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            thumbnail_size,
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Parses a `WxH` size with both sides non-zero.
fn parse_size(value: &str) -> Option<(u32, u32)> {
    let (width, height) = value.trim().split_once(['x', 'X'])?;
    let width = width.trim().parse::<u32>().ok().filter(|w| *w > 0)?;
    let height = height.trim().parse::<u32>().ok().filter(|h| *h > 0)?;
    Some((width, height))
}

/// Initializes the plugin with configuration.
///
/// Creates a new `AppState` with:
/// - Loaded theme (from file, name, or default)
/// - The configured data source and thumbnail size
/// - An empty venue store, filled once the load completes
///
/// # Example
///
/// ```rust
/// use dunia::{Config, initialize};
///
/// let state = initialize(&Config::default());
/// assert!(state.store.is_empty());
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing dunia plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            let path = infrastructure::resolve_host_path(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let mut state = AppState::new(SourceLocation::parse(&config.data_source), theme);
    state.thumbnail_size = config.thumbnail_size;
    state
}

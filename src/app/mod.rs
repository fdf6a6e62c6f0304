//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! plugin runtime (main.rs) and the domain/catalog/worker layers. It implements
//! the event-driven architecture that powers the interactive directory.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Keys / Clicks → Events → Event Handler → State Mutations → Redraw + Actions
//!                               ↑                                    ↓
//!                               └─── Worker Responses / Web Results ─┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`filter`]: Pure venue filter engine and match highlighting
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode, screen, and load status types
//! - [`state`]: Central application state container and view model computation
//! - [`view_state`]: Search, category, filter, and selection state machine

pub mod actions;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod state;
pub mod view_state;

pub use actions::Action;
pub use filter::filter_venues;
pub use handler::{handle_event, Event, Redraw};
pub use modes::{InputMode, LoadStatus, Screen};
pub use state::AppState;
pub use view_state::ViewState;

//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after each event. Actions are the
//! boundary between pure state transitions and effectful Zellij calls; the
//! plugin shim executes them in order.
//!
//! # Example
//!
//! ```rust
//! use dunia::app::Action;
//! use dunia::worker::WorkerMessage;
//! use std::path::PathBuf;
//!
//! let actions = vec![
//!     Action::PostToWorker(WorkerMessage::load_venues(PathBuf::from("/host/data.json"))),
//! ];
//! ```

use crate::worker::WorkerMessage;

/// Commands to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Posts a message to the background worker thread.
    ///
    /// Used for the one-time file load of the venue data.
    PostToWorker(WorkerMessage),

    /// Fetches the venue data over HTTP.
    ///
    /// The response arrives later as a web request result event.
    FetchUrl {
        /// Address of the JSON document.
        url: String,
    },
}

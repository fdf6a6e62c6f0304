//! Infrastructure layer for filesystem and environment interactions.
//!
//! Utilities for the Zellij plugin sandbox, where the host filesystem is mounted
//! under `/host`.

pub mod paths;

pub use paths::{display_host_path, expand_tilde, get_data_dir, resolve_host_path};

//! User interface rendering layer with component-based architecture.
//!
//! This module orchestrates the terminal-based UI, transforming view models into
//! ANSI-styled output through composable rendering components. It provides theme
//! support, responsive layout, search match highlighting, and the click target
//! map used to dispatch mouse input.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → Renderer → Frame → ANSI Output
//!                                                            ↓
//!                                                         HitMap → click → Event
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator with header reuse
//! - [`components`]: Composable UI component renderers
//! - [`frame`]: In-memory output buffer written by components
//! - [`hitmap`]: Clickable regions of the last frame
//! - [`helpers`]: Shared rendering utilities (highlighting, truncation, chips)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod frame;
pub mod helpers;
pub mod hitmap;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use hitmap::{ClickTarget, HitMap};
pub use renderer::{RenderStats, Renderer};
pub use theme::Theme;
pub use viewmodel::{
    DetailLine, DetailViewModel, EmptyState, ErrorState, FilterChip, FooterInfo, HeaderInfo,
    ListViewModel, SearchBarInfo, UIViewModel, VenueCard,
};

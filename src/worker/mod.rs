//! Background worker thread for venue data loading.
//!
//! This module implements the worker thread that reads the venue data file to
//! avoid blocking the main plugin UI thread. It uses Zellij's worker API for
//! cross-thread communication and includes distributed tracing support.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::DuniaWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};

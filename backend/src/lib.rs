//! Translation Backend Library
//!
//! Model-invocation orchestration for translating Nepali and Sinhalese text
//! into English and collecting human corrections. The main binary in
//! `src/main.rs` serves the flows over HTTP.

pub mod api;
pub mod config;
pub mod error;
pub mod flows;
pub mod orchestrator;
/// Application state management
///
/// Holds the flow controllers shared by the HTTP handlers.
pub mod state;

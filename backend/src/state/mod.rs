//! Application state management
//!
//! Holds the flow controllers shared by all request handlers.

pub mod app_state;

pub use app_state::AppState;

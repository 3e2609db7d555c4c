//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod autoplay;
pub mod field_handler;
pub mod playback;
pub mod schedule;

// Re-export for convenience
pub use app_state::{AppState, FocusField, Highlight, MessageKind, SearchSettings};
pub use autoplay::AutoPlay;
pub use playback::PlaybackState;
pub use schedule::{Ticket, Timer};

//! Domain model types (pure).
//!
//! All types in this module are pure data.

pub mod error;
pub mod key_action;
pub mod step;

// Re-export for convenience
pub use error::{AppError, InputError};
pub use key_action::KeyAction;
pub use step::{Comparison, SearchStep, SearchTrace, StepOutcome};

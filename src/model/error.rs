//! Error types for bsviz.
//!
//! Errors use `thiserror` and compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`InputError`] - User input rejected at the input boundary (empty array,
//!     missing target, infeasible random length)
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Error Recovery Strategy
//!
//! Input errors are **non-fatal** in the TUI: they are shown as a message and no
//! trace is produced. Only in headless `--print` mode do they end the process.
//! Terminal errors are fatal and propagate to `main`.

use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```no_run
/// use bsviz::model::error::{AppError, InputError};
///
/// fn run_search() -> Result<(), AppError> {
///     // InputError converts to AppError via From
///     read_target()?;
///     Ok(())
/// }
/// # fn read_target() -> Result<i64, InputError> { Ok(5) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// User input could not be turned into a search.
    ///
    /// **Recovery**: In the TUI, display the message and keep running. In headless
    /// mode, print it to stderr and exit non-zero.
    #[error("{0}")]
    Input(#[from] InputError),

    /// Terminal or TUI rendering error.
    ///
    /// **Recovery**: Attempt terminal cleanup, then exit.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Input rejected at the input boundary.
///
/// The `Display` text of each variant is exactly what the UI shows to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Search requested with no parsed array elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use bsviz::model::error::InputError;
    ///
    /// assert_eq!(InputError::EmptyArray.to_string(), "Array is empty");
    /// ```
    #[error("Array is empty")]
    EmptyArray,

    /// Search requested with an empty or non-integer target.
    #[error("Please enter a target number.")]
    MissingTarget,

    /// Random length above the hard cap.
    #[error("The value cannot exceed {}", grouped(.max))]
    LengthTooLarge {
        /// The requested length.
        requested: usize,
        /// The cap.
        max: usize,
    },

    /// Random length cannot be satisfied with unique values in `0..range`.
    #[error("Cannot generate {length} unique numbers in range 0-{range}")]
    RandomRangeInfeasible {
        /// The requested length.
        length: usize,
        /// Exclusive upper bound of the value range.
        range: usize,
    },
}

/// Format an integer with `,` thousands separators (`10000` -> `10,000`).
pub fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn grouped(value: &usize) -> String {
    group_thousands(*value)
}

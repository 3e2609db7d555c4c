//! Input boundary: turns raw field text into a sorted array and a target.
//!
//! Nothing past this module sees malformed input. Tokens that are not
//! integers are dropped, and conditions that block a search surface as
//! [`InputError`].

pub mod random;

pub use random::{
    next_preset, prev_preset, RandomArrayRequest, LENGTH_PRESETS, MAX_RANDOM_LENGTH,
};

use crate::model::InputError;

/// Parse comma-separated text into an ascending integer array.
///
/// Each token is trimmed and its leading integer (optional sign, then
/// digits) is taken; anything after the digits is ignored. Tokens with no
/// leading integer, or that overflow `i64`, are discarded. Duplicates stay.
///
/// # Examples
///
/// ```
/// use bsviz::input::parse_array;
///
/// assert_eq!(parse_array("9, x, 3,1.5, 2abc"), vec![1, 2, 3, 9]);
/// ```
pub fn parse_array(text: &str) -> Vec<i64> {
    let mut values: Vec<i64> = text.split(',').filter_map(leading_integer).collect();
    values.sort_unstable();
    values
}

/// Parse the target field. Surrounding whitespace is allowed, nothing else.
pub fn parse_target(text: &str) -> Result<i64, InputError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| InputError::MissingTarget)
}

/// Reject arrays a search cannot run on.
pub fn validate_array(array: &[i64]) -> Result<(), InputError> {
    if array.is_empty() {
        Err(InputError::EmptyArray)
    } else {
        Ok(())
    }
}

/// Render an array back into field text (`1, 3, 5`).
pub fn format_array(array: &[i64]) -> String {
    array
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Leading signed integer of a trimmed token, if any.
fn leading_integer(token: &str) -> Option<i64> {
    let token = token.trim();
    let sign_len = usize::from(token.starts_with(['+', '-']));
    let digit_len = token[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digit_len == 0 {
        return None;
    }
    token[..sign_len + digit_len].parse().ok()
}

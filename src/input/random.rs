//! Random sorted-array generation.

use crate::model::InputError;
use rand::Rng;

/// Hard cap on the random array length.
pub const MAX_RANDOM_LENGTH: usize = 10_000;

/// Length presets offered by the length field.
pub const LENGTH_PRESETS: [usize; 7] = [10, 50, 100, 200, 1000, 5000, 10000];

/// Validated request for a random array of unique values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomArrayRequest {
    length: usize,
    value_range: usize,
}

impl RandomArrayRequest {
    /// Build a request, sizing the value range as
    /// `max(min_value_range, length * value_range_factor)`.
    ///
    /// # Errors
    ///
    /// - [`InputError::LengthTooLarge`] above [`MAX_RANDOM_LENGTH`].
    /// - [`InputError::RandomRangeInfeasible`] when the range holds fewer
    ///   distinct values than requested.
    pub fn new(
        length: usize,
        min_value_range: usize,
        value_range_factor: usize,
    ) -> Result<Self, InputError> {
        if length > MAX_RANDOM_LENGTH {
            return Err(InputError::LengthTooLarge {
                requested: length,
                max: MAX_RANDOM_LENGTH,
            });
        }
        let value_range = min_value_range.max(length.saturating_mul(value_range_factor));
        if length > value_range {
            return Err(InputError::RandomRangeInfeasible {
                length,
                range: value_range,
            });
        }
        Ok(Self {
            length,
            value_range,
        })
    }

    /// Number of values to draw.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Exclusive upper bound for generated values.
    pub fn value_range(&self) -> usize {
        self.value_range
    }

    /// Draw `length` distinct values from `0..value_range`, sorted ascending.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<i64> {
        let mut values: Vec<i64> = rand::seq::index::sample(rng, self.value_range, self.length)
            .into_iter()
            .map(|v| v as i64)
            .collect();
        values.sort_unstable();
        values
    }
}

/// Preset after `current` (wrapping), or the first preset when `current`
/// is not a preset.
pub fn next_preset(current: usize) -> usize {
    match LENGTH_PRESETS.iter().position(|&p| p == current) {
        Some(i) => LENGTH_PRESETS[(i + 1) % LENGTH_PRESETS.len()],
        None => LENGTH_PRESETS[0],
    }
}

/// Preset before `current` (wrapping), or the last preset when `current`
/// is not a preset.
pub fn prev_preset(current: usize) -> usize {
    match LENGTH_PRESETS.iter().position(|&p| p == current) {
        Some(i) => LENGTH_PRESETS[(i + LENGTH_PRESETS.len() - 1) % LENGTH_PRESETS.len()],
        None => LENGTH_PRESETS[LENGTH_PRESETS.len() - 1],
    }
}

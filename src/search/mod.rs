//! Binary-search step generator (pure).
//!
//! [`generate`] turns a sorted slice and a target into a [`SearchTrace`]:
//! one `Continue` step per probed element, then exactly one terminal step.

use crate::model::{Comparison, SearchStep, SearchTrace, StepOutcome};

/// Produce the full step trace of a binary search for `target` in `array`.
///
/// `array` must be sorted ascending. The result depends only on the inputs.
///
/// - Empty `array`: a single `NotFound` step with `low = 0, high = -1`.
/// - Duplicates: the first probed index holding `target` is reported, which
///   need not be the leftmost or rightmost occurrence.
///
/// # Examples
///
/// ```
/// use bsviz::model::StepOutcome;
/// use bsviz::search::generate;
///
/// let trace = generate(&[1, 3, 5, 7, 9], 5);
/// assert_eq!(trace.len(), 2);
/// assert_eq!(trace.outcome(), StepOutcome::Found);
/// assert_eq!(trace.found_index(), Some(2));
/// ```
pub fn generate(array: &[i64], target: i64) -> SearchTrace {
    debug_assert!(
        array.windows(2).all(|w| w[0] <= w[1]),
        "generate requires an ascending array"
    );

    let mut steps = Vec::new();
    // Half-open [low, high_exclusive) in usize, reported as inclusive isize
    let mut low = 0usize;
    let mut high_exclusive = array.len();

    while low < high_exclusive {
        let high = high_exclusive - 1;
        // floor((low + high) / 2) without overflow
        let mid = low + (high - low) / 2;
        let value = array[mid];
        let comparison = Comparison::from(value.cmp(&target));

        steps.push(SearchStep {
            low: low as isize,
            high: high as isize,
            mid: Some(mid),
            message: narrate_probe(low, high, mid, value, target, comparison),
            outcome: StepOutcome::Continue,
            comparison: Some(comparison),
        });

        match comparison {
            Comparison::Equal => {
                steps.push(SearchStep {
                    low: low as isize,
                    high: high as isize,
                    mid: Some(mid),
                    message: format!("Target {target} found at index {mid}"),
                    outcome: StepOutcome::Found,
                    comparison: Some(comparison),
                });
                return SearchTrace::from_steps(target, array.len(), steps);
            }
            Comparison::Less => low = mid + 1,
            Comparison::Greater => high_exclusive = mid,
        }
    }

    steps.push(SearchStep {
        low: low as isize,
        high: high_exclusive as isize - 1,
        mid: None,
        message: format!("Target {target} not found in the array"),
        outcome: StepOutcome::NotFound,
        comparison: None,
    });
    SearchTrace::from_steps(target, array.len(), steps)
}

/// Narration for a `Continue` step.
fn narrate_probe(
    low: usize,
    high: usize,
    mid: usize,
    value: i64,
    target: i64,
    comparison: Comparison,
) -> String {
    let head = format!("low={low}, high={high}, mid={mid}, array[mid]={value}");
    match comparison {
        Comparison::Equal => format!("{head} == {target}"),
        Comparison::Less => format!("{head} < {target}, moving low to {}", mid + 1),
        // mid - 1 may be -1 when mid == 0
        Comparison::Greater => format!("{head} > {target}, moving high to {}", mid as isize - 1),
    }
}

/// Upper bound on `Continue` steps for an array of length `n`:
/// `floor(log2(n)) + 1`, and `0` for an empty array.
pub fn max_probes(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        n.ilog2() as usize + 1
    }
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;

//! Search step and trace types.
//!
//! A [`SearchTrace`] can only be built by the step generator in
//! [`crate::search`], so every trace observed elsewhere already satisfies
//! the terminal-step invariant.

use serde::Serialize;
use std::cmp::Ordering;

// ===== StepOutcome =====

/// Outcome of a single search step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    /// Range still non-empty, no match yet.
    Continue,
    /// `array[mid] == target`.
    Found,
    /// Range exhausted without a match.
    NotFound,
}

impl StepOutcome {
    /// Whether this outcome ends a trace.
    pub fn is_terminal(self) -> bool {
        !matches!(self, StepOutcome::Continue)
    }
}

// ===== Comparison =====

/// Result of comparing `array[mid]` against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// `array[mid] < target`; low moves right.
    Less,
    /// `array[mid] == target`.
    Equal,
    /// `array[mid] > target`; high moves left.
    Greater,
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Comparison::Less,
            Ordering::Equal => Comparison::Equal,
            Ordering::Greater => Comparison::Greater,
        }
    }
}

// ===== SearchStep =====

/// One displayed state of the search.
///
/// `high` is signed because an exhausted range (and the empty array) ends
/// with `high == -1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchStep {
    /// Inclusive lower bound of the range still searched.
    pub low: isize,
    /// Inclusive upper bound. Below `low` once the range is exhausted.
    pub high: isize,
    /// Index probed in this step, `None` for the not-found step.
    pub mid: Option<usize>,
    /// Narration shown under the array.
    pub message: String,
    /// Whether the search goes on, or how it ended.
    pub outcome: StepOutcome,
    /// Comparison made at `mid`, `None` for the not-found step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
}

impl SearchStep {
    /// Whether `index` lies inside the inclusive `[low, high]` window.
    ///
    /// Always false once the range is exhausted.
    pub fn in_range(&self, index: usize) -> bool {
        let index = index as isize;
        self.low <= self.high && index >= self.low && index <= self.high
    }

    /// Whether the search range is exhausted (`low > high`).
    pub fn is_exhausted(&self) -> bool {
        self.low > self.high
    }
}

// ===== SearchTrace =====

/// Immutable, non-empty sequence of steps for one search invocation.
///
/// Exactly the last step is terminal (`Found` or `NotFound`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchTrace {
    target: i64,
    array_len: usize,
    steps: Vec<SearchStep>,
}

#[allow(clippy::len_without_is_empty)]
impl SearchTrace {
    /// Assemble a trace from generator output.
    pub(crate) fn from_steps(target: i64, array_len: usize, steps: Vec<SearchStep>) -> Self {
        debug_assert!(!steps.is_empty(), "trace must contain a terminal step");
        debug_assert!(
            steps
                .iter()
                .rev()
                .skip(1)
                .all(|s| s.outcome == StepOutcome::Continue),
            "only the last step may be terminal"
        );
        Self {
            target,
            array_len,
            steps,
        }
    }

    /// Value searched for.
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Length of the array this trace was generated for.
    pub fn array_len(&self) -> usize {
        self.array_len
    }

    /// All steps in display order.
    pub fn steps(&self) -> &[SearchStep] {
        &self.steps
    }

    /// Number of steps, including the terminal one. Never zero.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Step at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&SearchStep> {
        self.steps.get(index)
    }

    /// The terminal step.
    pub fn last(&self) -> &SearchStep {
        // Non-empty by construction
        &self.steps[self.steps.len() - 1]
    }

    /// Outcome of the terminal step.
    pub fn outcome(&self) -> StepOutcome {
        self.last().outcome
    }

    /// Index where the target was found, if it was.
    pub fn found_index(&self) -> Option<usize> {
        match self.last().outcome {
            StepOutcome::Found => self.last().mid,
            _ => None,
        }
    }

    /// Number of `Continue` steps (one per probed element).
    pub fn probe_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.outcome == StepOutcome::Continue)
            .count()
    }

    /// Iterate over the steps in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, SearchStep> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a SearchTrace {
    type Item = &'a SearchStep;
    type IntoIter = std::slice::Iter<'a, SearchStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(low: isize, high: isize, mid: Option<usize>, outcome: StepOutcome) -> SearchStep {
        SearchStep {
            low,
            high,
            mid,
            message: String::new(),
            outcome,
            comparison: None,
        }
    }

    #[test]
    fn in_range_is_inclusive() {
        let s = step(2, 4, Some(3), StepOutcome::Continue);
        assert!(!s.in_range(1));
        assert!(s.in_range(2));
        assert!(s.in_range(4));
        assert!(!s.in_range(5));
    }

    #[test]
    fn in_range_false_when_exhausted() {
        let s = step(3, 2, None, StepOutcome::NotFound);
        assert!(s.is_exhausted());
        assert!(!s.in_range(2));
        assert!(!s.in_range(3));
    }

    #[test]
    fn found_index_only_for_found_outcome() {
        let found = SearchTrace::from_steps(
            5,
            3,
            vec![
                step(0, 2, Some(1), StepOutcome::Continue),
                step(0, 2, Some(1), StepOutcome::Found),
            ],
        );
        assert_eq!(found.found_index(), Some(1));
        assert_eq!(found.probe_count(), 1);

        let missing =
            SearchTrace::from_steps(5, 0, vec![step(0, -1, None, StepOutcome::NotFound)]);
        assert_eq!(missing.found_index(), None);
        assert_eq!(missing.outcome(), StepOutcome::NotFound);
    }

    #[test]
    fn outcome_serializes_snake_case() {
        let json = serde_json::to_string(&StepOutcome::NotFound).unwrap();
        assert_eq!(json, "\"not_found\"");
    }

    #[test]
    fn comparison_from_ordering() {
        assert_eq!(Comparison::from(Ordering::Less), Comparison::Less);
        assert_eq!(Comparison::from(Ordering::Equal), Comparison::Equal);
        assert_eq!(Comparison::from(Ordering::Greater), Comparison::Greater);
    }
}

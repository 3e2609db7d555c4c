//! Pure core integration functions.
//!
//! Glue between the input boundary and the step generator, shared by the
//! TUI and the headless `--print` mode. Testable without any I/O.

use crate::input;
use crate::model::{InputError, SearchTrace, StepOutcome};
use crate::search;

/// A validated search ready to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedSearch {
    /// Parsed, sorted array.
    pub array: Vec<i64>,
    /// Step trace for the array and target.
    pub trace: SearchTrace,
}

/// Parse the raw field text and generate the trace.
///
/// # Errors
///
/// [`InputError::EmptyArray`] takes priority over
/// [`InputError::MissingTarget`].
pub fn prepare_search(array_text: &str, target_text: &str) -> Result<PreparedSearch, InputError> {
    let array = input::parse_array(array_text);
    input::validate_array(&array)?;
    let target = input::parse_target(target_text)?;
    let trace = search::generate(&array, target);
    Ok(PreparedSearch { array, trace })
}

/// Plain-text rendering of a trace, one numbered line per step.
pub fn render_trace_text(prepared: &PreparedSearch) -> String {
    let trace = &prepared.trace;
    let mut out = format!(
        "array  = [{}]\ntarget = {}\n",
        input::format_array(&prepared.array),
        trace.target()
    );
    let width = trace.len().to_string().len();
    for (i, step) in trace.iter().enumerate() {
        let marker = match step.outcome {
            StepOutcome::Continue => ' ',
            StepOutcome::Found => '+',
            StepOutcome::NotFound => '-',
        };
        out.push_str(&format!(
            "{marker} step {:>width$}/{}: {}\n",
            i + 1,
            trace.len(),
            step.message
        ));
    }
    out
}

/// JSON rendering of a trace (pretty-printed).
pub fn render_trace_json(prepared: &PreparedSearch) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&prepared.trace)
}

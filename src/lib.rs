//! Binary Search Visualizer (bsviz)
//!
//! Terminal application that narrates a binary search step by step.
//!
//! Follows a Pure Core / Impure Shell architecture: [`search`], [`input`]
//! and [`state`] are pure and testable without a terminal, while [`view`]
//! owns the event loop and rendering.

pub mod config;
pub mod input;
pub mod logging;
pub mod model;
pub mod search;
pub mod state;
pub mod view;

// Shared by the TUI and headless printing
pub mod integration;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;

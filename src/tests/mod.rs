//! Internal test modules - whitebox tests with crate access
//!
//! Acceptance tests drive the full TUI through
//! [`crate::test_harness::AcceptanceTestHarness`] on a `TestBackend`.

mod crash_regression;

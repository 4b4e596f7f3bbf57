//! Async serving layer: single-owner query loop and handle.

/// Handle and command loop implementation.
pub mod handle;

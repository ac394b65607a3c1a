//! # Introduction
//!
//! BubbleTTY runs bubble sort on a small array, records a snapshot of the
//! array before and after every comparison and swap, and lets you step through
//! that history forward and backward in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input → Step Generator → Step Records → Sequencer → TUI
//! ```
//!
//! 1. [`input`] / [`algorithm::random`]: build the input array from typed
//!    text or random values.
//! 2. [`algorithm`]: runs the instrumented sort to completion and returns
//!    every [`algorithm::StepRecord`] up front.
//! 3. [`playback`]: a cursor over the records with play/pause, stepping in
//!    both directions and generation-tagged auto-advance ticks.
//! 4. [`controller`]: page-level actions: resize, regenerate, custom arrays,
//!    speed changes.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Sort semantics
//!
//! Comparisons use strict `>`, so equal elements are never swapped and the
//! sort is stable. A pass without swaps ends the run early.

pub mod algorithm;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod playback;
pub mod transcript;
pub mod ui;

pub use error::{Error, Result};

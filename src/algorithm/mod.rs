//! Step generation for the bubble sort visualization
//!
//! - [`step`]: the [`StepRecord`] snapshot type and its phase labels
//! - [`bubble`]: [`generate_steps`], the instrumented sort
//! - [`random`]: [`generate_random_array`] for building inputs

pub mod bubble;
pub mod random;
pub mod step;

pub use bubble::generate_steps;
pub use random::generate_random_array;
pub use step::{Highlight, RunStats, StepLabel, StepRecord};

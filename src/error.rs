//! Error types for the visualizer
//!
//! Input validation is the only real failure surface: navigation at the ends
//! of a run is a no-op, and the sort itself always terminates. The remaining
//! variants cover startup (terminal I/O, log file setup).

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A custom array string contained no positive integers
    #[error("no positive integers found in {input:?}")]
    EmptyCustomArray { input: String },

    /// Random value bounds are inverted
    #[error("invalid value bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: i64, max: i64 },

    /// Requested array size is outside the supported range
    #[error("array size {size} is outside {min}..={max}")]
    InvalidSize { size: usize, min: usize, max: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to install log subscriber: {message}")]
    LogInit { message: String },
}

impl Error {
    /// True for errors caused by user input that the UI reports and recovers from
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyCustomArray { .. } | Self::InvalidBounds { .. } | Self::InvalidSize { .. }
        )
    }
}

//! Step records: immutable snapshots of sort progress

use std::fmt;

/// Which adjacent pair, if any, is highlighted in a step.
///
/// A record can never be comparing and swapping at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    None,
    Comparing(usize, usize),
    Swapping(usize, usize),
}

/// Machine-stable phase tag of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepLabel {
    Ready,
    Comparing,
    Swapping,
    Swapped,
    PassComplete,
    Done,
}

impl StepLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            StepLabel::Ready => "ready",
            StepLabel::Comparing => "comparing",
            StepLabel::Swapping => "swapping",
            StepLabel::Swapped => "swapped",
            StepLabel::PassComplete => "pass-complete",
            StepLabel::Done => "done",
        }
    }
}

impl fmt::Display for StepLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One renderable snapshot of sort progress.
///
/// `array` is an owned copy of the array at this instant. `sorted` lists the
/// indices already in their final position, from the tail inward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub array: Vec<i64>,
    pub highlight: Highlight,
    pub sorted: Vec<usize>,
    pub current: Option<usize>,
    pub label: StepLabel,
    pub title: String,
    pub description: String,
}

impl StepRecord {
    /// The synthetic record shown before anything has executed
    pub fn ready(input: &[i64]) -> Self {
        StepRecord {
            array: input.to_vec(),
            highlight: Highlight::None,
            sorted: Vec::new(),
            current: None,
            label: StepLabel::Ready,
            title: "Ready to start bubble sort".to_string(),
            description: "Press play to begin the sorting process".to_string(),
        }
    }

    pub fn comparing(&self) -> Option<(usize, usize)> {
        match self.highlight {
            Highlight::Comparing(a, b) => Some((a, b)),
            _ => None,
        }
    }

    pub fn swapping(&self) -> Option<(usize, usize)> {
        match self.highlight {
            Highlight::Swapping(a, b) => Some((a, b)),
            _ => None,
        }
    }

    pub fn is_done(&self) -> bool {
        self.label == StepLabel::Done
    }
}

/// Counts of the work done in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStats {
    pub comparisons: usize,
    pub swaps: usize,
    pub passes: usize,
}

impl RunStats {
    pub fn from_steps(steps: &[StepRecord]) -> Self {
        steps.iter().fold(RunStats::default(), |mut stats, step| {
            match step.label {
                StepLabel::Comparing => stats.comparisons += 1,
                StepLabel::Swapped => stats.swaps += 1,
                StepLabel::PassComplete => stats.passes += 1,
                _ => {}
            }
            stats
        })
    }
}

//! Playback over a materialized run
//!
//! - [`sequencer`]: the cursor state machine (ready / stepping / finished,
//!   plus an orthogonal `playing` flag)
//! - [`timer`]: deadline-based auto-advance driven by the UI poll loop
//!
//! Stepping forward `k` times and back `k` times always lands on the same
//! cursor and record, since backward navigation only indexes into records
//! that were computed up front.

pub mod sequencer;
pub mod timer;

pub use sequencer::{PlaybackView, Sequencer};
pub use timer::PlaybackTimer;

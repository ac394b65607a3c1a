//! Autonomous playback ticks
//!
//! The poll loop owns a [`PlaybackTimer`] and feeds it the current time. The
//! timer arms a deadline one interval after it first sees a new sequencer
//! generation, so any change to the displayed record, `playing` or the speed
//! restarts the wait from zero. A tick that fires is tagged with the
//! generation it was armed under, and [`Sequencer::tick`] drops it if the
//! state has moved on since.

use std::time::{Duration, Instant};

use super::sequencer::Sequencer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Armed {
    generation: u64,
    deadline: Instant,
}

#[derive(Debug, Default)]
pub struct PlaybackTimer {
    armed: Option<Armed>,
}

impl PlaybackTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the sequencer if a tick is due. Returns `true` if it stepped.
    pub fn poll(&mut self, sequencer: &mut Sequencer, now: Instant) -> bool {
        if !sequencer.is_playing() || sequencer.is_finished() {
            self.armed = None;
            return false;
        }

        match self.armed {
            Some(armed) if armed.generation == sequencer.generation() => {
                if now < armed.deadline {
                    return false;
                }
                self.armed = None;
                let stepped = sequencer.tick(armed.generation);
                if stepped && sequencer.is_playing() {
                    self.arm(sequencer, now);
                }
                stepped
            }
            _ => {
                self.arm(sequencer, now);
                false
            }
        }
    }

    /// How long the poll loop may sleep before the armed tick is due
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.armed
            .map(|armed| armed.deadline.saturating_duration_since(now))
    }

    /// Disarm any pending tick
    pub fn cancel(&mut self) {
        self.armed = None;
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    fn arm(&mut self, sequencer: &Sequencer, now: Instant) {
        self.armed = Some(Armed {
            generation: sequencer.generation(),
            deadline: now + sequencer.speed(),
        });
    }
}

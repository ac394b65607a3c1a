//! Cursor-based navigation over a precomputed step sequence

use std::time::Duration;

use tracing::{debug, info};

use crate::algorithm::{generate_steps, StepRecord};
use crate::config::DEFAULT_SPEED_MS;

/// What the view should show after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackView<'a> {
    pub step: &'a StepRecord,
    pub finished: bool,
}

/// Holds one run of step records and a cursor into it.
///
/// The cursor counts executed steps: `0` shows the synthetic ready record,
/// `k` shows `steps[k - 1]`, and `len()` means the run is finished.
#[derive(Debug, Clone)]
pub struct Sequencer {
    /// Baseline input the current run was generated from
    input: Vec<i64>,

    /// Materialized run, never mutated after generation
    steps: Vec<StepRecord>,

    /// Record shown at cursor 0
    ready: StepRecord,

    cursor: usize,
    playing: bool,
    finished: bool,
    speed: Duration,

    /// Bumped on every change to the displayed record, `playing` or `speed`.
    /// A scheduled tick only applies if it still carries the current value.
    generation: u64,
}

impl Sequencer {
    pub fn new(input: Vec<i64>) -> Self {
        let steps = generate_steps(&input);
        let ready = StepRecord::ready(&input);
        Sequencer {
            input,
            steps,
            ready,
            cursor: 0,
            playing: false,
            finished: false,
            speed: Duration::from_millis(DEFAULT_SPEED_MS),
            generation: 0,
        }
    }

    /// Regenerate the run from `input` and rewind to the ready state
    pub fn initialize(&mut self, input: Vec<i64>) -> PlaybackView<'_> {
        self.steps = generate_steps(&input);
        self.ready = StepRecord::ready(&input);
        self.input = input;
        self.cursor = 0;
        self.playing = false;
        self.finished = false;
        self.bump();
        info!(
            len = self.input.len(),
            steps = self.steps.len(),
            "initialized run"
        );
        self.view()
    }

    /// Rewind and regenerate from the current input
    pub fn reset(&mut self) -> PlaybackView<'_> {
        let input = std::mem::take(&mut self.input);
        self.initialize(input)
    }

    pub fn step_forward(&mut self) -> PlaybackView<'_> {
        if self.cursor < self.steps.len() {
            self.cursor += 1;
            if self.cursor == self.steps.len() {
                self.finished = true;
                self.playing = false;
            }
            self.bump();
            debug!(cursor = self.cursor, label = %self.current().label, "step forward");
        }
        self.view()
    }

    pub fn step_backward(&mut self) -> PlaybackView<'_> {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.finished = false;
            self.bump();
            debug!(cursor = self.cursor, label = %self.current().label, "step backward");
        }
        self.view()
    }

    /// Step forward until the run is finished
    pub fn jump_to_end(&mut self) -> PlaybackView<'_> {
        while self.cursor < self.steps.len() {
            self.step_forward();
        }
        self.view()
    }

    /// Step backward to the ready record without regenerating the run
    pub fn jump_to_start(&mut self) -> PlaybackView<'_> {
        while self.cursor > 0 {
            self.step_backward();
        }
        self.view()
    }

    pub fn play(&mut self) -> PlaybackView<'_> {
        if !self.finished && !self.playing {
            self.playing = true;
            self.bump();
        }
        self.view()
    }

    pub fn pause(&mut self) -> PlaybackView<'_> {
        if self.playing {
            self.playing = false;
            self.bump();
        }
        self.view()
    }

    pub fn set_speed(&mut self, speed: Duration) -> PlaybackView<'_> {
        if self.speed != speed {
            self.speed = speed;
            self.bump();
        }
        self.view()
    }

    /// Apply a timer tick scheduled under `generation`.
    ///
    /// Returns `false` without touching state when the tick is stale or the
    /// sequencer is paused or finished.
    pub fn tick(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            debug!(generation, current = self.generation, "ignored stale tick");
            return false;
        }
        if self.finished {
            debug!(generation, "ignored tick after finish");
            return false;
        }
        if !self.playing {
            debug!(generation, "ignored tick while paused");
            return false;
        }
        self.step_forward();
        true
    }

    fn bump(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    // ========== Accessors ==========

    pub fn view(&self) -> PlaybackView<'_> {
        PlaybackView {
            step: self.current(),
            finished: self.finished,
        }
    }

    /// The record currently displayed
    pub fn current(&self) -> &StepRecord {
        match self.cursor {
            0 => &self.ready,
            k => &self.steps[k - 1],
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of records in the run (excluding the ready record)
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    pub fn input(&self) -> &[i64] {
        &self.input
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::algorithm::StepLabel;

    #[test]
    fn starts_at_ready_record() {
        let seq = Sequencer::new(vec![3, 1, 2]);
        assert_eq!(seq.cursor(), 0);
        assert_eq!(seq.current().label, StepLabel::Ready);
        assert!(!seq.is_finished());
        assert!(!seq.is_playing());
    }

    #[test]
    fn last_forward_step_finishes_and_pauses() {
        let mut seq = Sequencer::new(vec![2, 1]);
        seq.play();
        for _ in 0..seq.len() {
            seq.step_forward();
        }
        assert!(seq.is_finished());
        assert!(!seq.is_playing());
        assert!(seq.current().is_done());
    }

    #[test]
    fn backward_from_finished_clears_flag() {
        let mut seq = Sequencer::new(vec![2, 1]);
        seq.jump_to_end();
        let view = seq.step_backward();
        assert!(!view.finished);
        assert_eq!(view.step.label, StepLabel::PassComplete);
    }

    #[test]
    fn play_is_noop_when_finished() {
        let mut seq = Sequencer::new(vec![1]);
        seq.step_forward();
        assert!(seq.is_finished());
        let generation = seq.generation();
        seq.play();
        assert!(!seq.is_playing());
        assert_eq!(seq.generation(), generation);
    }

    #[test]
    fn stale_tick_is_ignored() {
        let mut seq = Sequencer::new(vec![3, 2, 1]);
        seq.play();
        let stale = seq.generation();
        seq.set_speed(Duration::from_millis(100));
        assert!(!seq.tick(stale));
        assert_eq!(seq.cursor(), 0);
        assert!(seq.tick(seq.generation()));
        assert_eq!(seq.cursor(), 1);
    }

    /// Collects formatted log output for assertions.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn with_logs(f: impl FnOnce()) -> String {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        logs.contents()
    }

    #[test]
    fn current_tick_is_rejected_when_paused_or_finished() {
        let mut seq = Sequencer::new(vec![3, 2, 1]);
        let logs = with_logs(|| {
            assert!(!seq.tick(seq.generation()));
        });
        assert_eq!(seq.cursor(), 0);
        assert!(logs.contains("ignored tick while paused"));
        assert!(!logs.contains("stale"));

        seq.jump_to_end();
        let logs = with_logs(|| {
            assert!(!seq.tick(seq.generation()));
        });
        assert_eq!(seq.cursor(), seq.len());
        assert!(logs.contains("ignored tick after finish"));
        assert!(!logs.contains("stale"));

        seq.jump_to_start();
        seq.play();
        let stale = seq.generation().wrapping_sub(1);
        let logs = with_logs(|| {
            assert!(!seq.tick(stale));
        });
        assert!(logs.contains("ignored stale tick"));
    }

    #[test]
    fn reset_keeps_input_and_rewinds() {
        let mut seq = Sequencer::new(vec![5, 3, 8, 1]);
        seq.step_forward();
        seq.step_forward();
        seq.play();
        seq.reset();
        assert_eq!(seq.input(), &[5, 3, 8, 1]);
        assert_eq!(seq.cursor(), 0);
        assert!(!seq.is_playing());
        assert_eq!(seq.current().array, vec![5, 3, 8, 1]);
    }
}

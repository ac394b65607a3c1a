//! Page-level actions around the sequencer
//!
//! The [`Controller`] owns the baseline array settings (size, value bounds,
//! random source) and turns control actions into sequencer transitions.
//! Every action that replaces the input regenerates the whole run.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::info;

use crate::algorithm::generate_random_array;
use crate::config::{clamp_array_size, clamp_speed_ms, Config, InitialArray};
use crate::error::Result;
use crate::input::parse_custom_array;
use crate::playback::{PlaybackView, Sequencer};

/// Which controls are currently usable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub can_step_back: bool,
    pub can_step_forward: bool,
    pub can_play: bool,
    pub can_pause: bool,
}

pub struct Controller {
    sequencer: Sequencer,
    array_size: usize,
    min_value: i64,
    max_value: i64,
    rng: SmallRng,
}

impl Controller {
    pub fn new(config: &Config) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let input = match &config.initial {
            InitialArray::Values(values) => values.clone(),
            InitialArray::Random(size) => {
                generate_random_array(&mut rng, *size, config.min_value, config.max_value)?
            }
        };

        let mut sequencer = Sequencer::new(input);
        sequencer.set_speed(Duration::from_millis(clamp_speed_ms(
            config.speed.as_millis() as u64,
        )));

        Ok(Controller {
            array_size: sequencer.input().len(),
            sequencer,
            min_value: config.min_value,
            max_value: config.max_value,
            rng,
        })
    }

    /// Replace the input with a fresh random array of the current size
    pub fn generate_array(&mut self) -> Result<PlaybackView<'_>> {
        let values =
            generate_random_array(&mut self.rng, self.array_size, self.min_value, self.max_value)?;
        info!(size = self.array_size, "generated random array");
        Ok(self.sequencer.initialize(values))
    }

    /// Resize and regenerate. Sizes outside the slider range are clamped.
    pub fn set_array_size(&mut self, size: usize) -> Result<PlaybackView<'_>> {
        self.array_size = clamp_array_size(size);
        self.generate_array()
    }

    pub fn grow_array(&mut self) -> Result<PlaybackView<'_>> {
        self.set_array_size(self.array_size.saturating_add(1))
    }

    pub fn shrink_array(&mut self) -> Result<PlaybackView<'_>> {
        self.set_array_size(self.array_size.saturating_sub(1))
    }

    /// Parse and apply a user-typed array.
    ///
    /// On error the previous array and playback position are kept.
    pub fn apply_custom_array(&mut self, text: &str) -> Result<PlaybackView<'_>> {
        let values = parse_custom_array(text)?;
        self.array_size = values.len();
        info!(size = values.len(), "applied custom array");
        Ok(self.sequencer.initialize(values))
    }

    /// Change the auto-play delay by `delta_ms`, snapped to the slider grid
    pub fn adjust_speed(&mut self, delta_ms: i64) -> PlaybackView<'_> {
        let current = self.speed_ms() as i64;
        let target = current.saturating_add(delta_ms).max(0) as u64;
        self.sequencer
            .set_speed(Duration::from_millis(clamp_speed_ms(target)))
    }

    pub fn toggle_play(&mut self) -> PlaybackView<'_> {
        if self.sequencer.is_playing() {
            self.sequencer.pause()
        } else {
            self.sequencer.play()
        }
    }

    pub fn controls(&self) -> ControlState {
        let playing = self.sequencer.is_playing();
        let finished = self.sequencer.is_finished();
        ControlState {
            can_step_back: !playing,
            can_step_forward: !playing && !finished,
            can_play: !playing && !finished,
            can_pause: playing,
        }
    }

    pub fn speed_ms(&self) -> u64 {
        self.sequencer.speed().as_millis() as u64
    }

    pub fn array_size(&self) -> usize {
        self.array_size
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn sequencer_mut(&mut self) -> &mut Sequencer {
        &mut self.sequencer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn seeded() -> Controller {
        let config = Config {
            seed: Some(11),
            ..Config::default()
        };
        Controller::new(&config).unwrap()
    }

    #[test]
    fn starts_with_default_array() {
        let controller = seeded();
        assert_eq!(controller.sequencer().input(), &[64, 34, 25, 12, 22, 11, 90]);
        assert_eq!(controller.array_size(), 7);
        assert_eq!(controller.speed_ms(), 500);
    }

    #[test]
    fn rejected_custom_array_keeps_previous_state() {
        let mut controller = seeded();
        controller.sequencer_mut().step_forward();
        let err = controller.apply_custom_array("nope, 0, -2").err();
        assert!(matches!(err, Some(Error::EmptyCustomArray { .. })));
        assert_eq!(controller.sequencer().input(), &[64, 34, 25, 12, 22, 11, 90]);
        assert_eq!(controller.sequencer().cursor(), 1);
        assert_eq!(controller.array_size(), 7);
    }

    #[test]
    fn oversized_custom_array_keeps_previous_state() {
        let mut controller = seeded();
        controller.sequencer_mut().step_forward();
        let text = (1..=51).rev().map(|v| v.to_string()).collect::<Vec<_>>().join(", ");
        let err = controller.apply_custom_array(&text).err();
        assert!(matches!(err, Some(Error::InvalidSize { size: 51, .. })));
        assert_eq!(controller.sequencer().input(), &[64, 34, 25, 12, 22, 11, 90]);
        assert_eq!(controller.sequencer().cursor(), 1);
        assert_eq!(controller.array_size(), 7);
    }

    #[test]
    fn custom_array_sets_size() {
        let mut controller = seeded();
        controller.apply_custom_array("4, 2, 9").unwrap();
        assert_eq!(controller.array_size(), 3);
        assert_eq!(controller.sequencer().input(), &[4, 2, 9]);
        assert_eq!(controller.sequencer().cursor(), 0);
    }

    #[test]
    fn resize_clamps_and_regenerates() {
        let mut controller = seeded();
        controller.set_array_size(80).unwrap();
        assert_eq!(controller.array_size(), 50);
        assert_eq!(controller.sequencer().input().len(), 50);
        controller.set_array_size(1).unwrap();
        assert_eq!(controller.sequencer().input().len(), 5);
        assert!(controller
            .sequencer()
            .input()
            .iter()
            .all(|v| (1..=99).contains(v)));
    }

    #[test]
    fn speed_adjustments_stay_on_grid() {
        let mut controller = seeded();
        controller.adjust_speed(-10_000);
        assert_eq!(controller.speed_ms(), 50);
        controller.adjust_speed(50);
        assert_eq!(controller.speed_ms(), 100);
        controller.adjust_speed(10_000);
        assert_eq!(controller.speed_ms(), 2000);
    }

    #[test]
    fn controls_follow_playback_state() {
        let mut controller = seeded();
        assert!(controller.controls().can_play);
        controller.toggle_play();
        let controls = controller.controls();
        assert!(controls.can_pause);
        assert!(!controls.can_step_back);
        assert!(!controls.can_step_forward);

        controller.toggle_play();
        controller.sequencer_mut().jump_to_end();
        let controls = controller.controls();
        assert!(!controls.can_play);
        assert!(!controls.can_step_forward);
        assert!(controls.can_step_back);
    }
}

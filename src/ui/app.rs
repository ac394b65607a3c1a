//! Main TUI application state and logic

use crate::algorithm::RunStats;
use crate::controller::Controller;
use crate::playback::PlaybackTimer;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::cmp::Ordering;
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Upper bound on how long the loop waits for input between redraws
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Which side pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Controls,
    Info,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Controls => FocusedPane::Info,
            FocusedPane::Info => FocusedPane::Controls,
        }
    }
}

/// The main application state
pub struct App {
    pub controller: Controller,

    /// Auto-play deadline, re-armed whenever the sequencer generation changes
    pub timer: PlaybackTimer,

    pub focused_pane: FocusedPane,

    /// Scroll offset of the info pane
    pub info_scroll: u16,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports an error
    pub is_error: bool,

    /// Text typed so far while entering a custom array
    pub custom_input: Option<String>,

    /// Counts for the loaded run, recomputed when the input changes
    pub stats: RunStats,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(controller: Controller) -> Self {
        let stats = RunStats::from_steps(controller.sequencer().steps());
        App {
            controller,
            timer: PlaybackTimer::new(),
            focused_pane: FocusedPane::Controls,
            info_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_error: false,
            custom_input: None,
            stats,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            if self
                .timer
                .poll(self.controller.sequencer_mut(), Instant::now())
            {
                self.on_auto_step();
            }

            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let timeout = self
                .timer
                .time_until_due(Instant::now())
                .map_or(POLL_INTERVAL, |due| due.min(POLL_INTERVAL));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        self.timer.cancel();
        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
            .split(main_chunks[0]);

        // Left column: Array (top) | Narration (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(5)])
            .split(columns[0]);

        // Right column: Controls (top) | Info (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(14), Constraint::Min(0)])
            .split(columns[1]);

        let sequencer = self.controller.sequencer();
        let view = sequencer.view();

        super::panes::render_bars_pane(frame, left_rows[0], view.step, view.finished);
        super::panes::render_narration_pane(frame, left_rows[1], view.step);

        super::panes::render_controls_pane(
            frame,
            right_rows[0],
            super::panes::ControlsRenderData {
                controls: self.controller.controls(),
                speed_ms: self.controller.speed_ms(),
                array_size: self.controller.array_size(),
                custom_input: self.custom_input.as_deref(),
            },
            self.focused_pane == FocusedPane::Controls,
        );

        super::panes::render_info_pane(
            frame,
            right_rows[1],
            self.stats,
            self.focused_pane == FocusedPane::Info,
            &mut self.info_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            super::panes::StatusRenderData {
                message: &self.status_message,
                cursor: sequencer.cursor(),
                total_steps: sequencer.len(),
                is_playing: sequencer.is_playing(),
                is_finished: view.finished,
                is_error: self.is_error,
                is_input_mode: self.custom_input.is_some(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.custom_input.is_some() {
            self.handle_input_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(reason) = self.forward_blocked_reason() {
                    self.set_status(format!("Cannot step forward: {}", reason));
                    return;
                }
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                while stepped < n && self.controller.controls().can_step_forward {
                    self.controller.sequencer_mut().step_forward();
                    stepped += 1;
                }
                self.set_status(format!("Stepped forward {} step(s)", stepped));
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => self.step_backward(),
            KeyCode::Right => self.step_forward(),
            KeyCode::Up => {
                if self.focused_pane == FocusedPane::Info {
                    self.info_scroll = self.info_scroll.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if self.focused_pane == FocusedPane::Info {
                    self.info_scroll = self.info_scroll.saturating_add(1);
                }
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Enter => {
                // Jump to end of the run
                let sequencer = self.controller.sequencer_mut();
                sequencer.pause();
                sequencer.jump_to_end();
                self.set_status("Jumped to end");
            }
            KeyCode::Backspace => {
                // Jump to the ready record
                let sequencer = self.controller.sequencer_mut();
                sequencer.pause();
                sequencer.jump_to_start();
                self.set_status("Jumped to start");
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.controller.sequencer_mut().reset();
                self.set_status("Reset");
            }
            KeyCode::Char('g') | KeyCode::Char('G') => {
                let result = self.controller.generate_array().map(|_| ());
                self.after_input_change(result, "Generated a random array");
            }
            KeyCode::Char('[') => {
                let before = self.controller.array_size();
                let result = self.controller.shrink_array().map(|_| ());
                let message = resize_message(before, self.controller.array_size());
                self.after_input_change(result, &message);
            }
            KeyCode::Char(']') => {
                let before = self.controller.array_size();
                let result = self.controller.grow_array().map(|_| ());
                let message = resize_message(before, self.controller.array_size());
                self.after_input_change(result, &message);
            }
            KeyCode::Char('-') => {
                self.controller.adjust_speed(-(crate::config::SPEED_STEP_MS as i64));
                self.set_status(format!("Delay {}ms", self.controller.speed_ms()));
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.controller.adjust_speed(crate::config::SPEED_STEP_MS as i64);
                self.set_status(format!("Delay {}ms", self.controller.speed_ms()));
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.controller.sequencer_mut().pause();
                self.custom_input = Some(String::new());
                self.set_status("Enter numbers, e.g. 64, 34, 25, 12");
            }
            _ => {}
        }
    }

    /// Keys while typing a custom array
    fn handle_input_key(&mut self, key: KeyEvent) {
        let Some(text) = self.custom_input.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.custom_input = None;
                self.set_status("Custom array cancelled");
            }
            KeyCode::Backspace => {
                text.pop();
            }
            KeyCode::Char(c) => {
                text.push(c);
            }
            KeyCode::Enter => {
                let text = text.clone();
                match self.controller.apply_custom_array(&text) {
                    Ok(view) => {
                        let count = view.step.array.len();
                        self.custom_input = None;
                        self.refresh_stats();
                        self.set_status(format!("Applied custom array ({} elements)", count));
                    }
                    Err(e) => {
                        // Keep the typed text so it can be corrected
                        self.status_message = e.to_string();
                        self.is_error = true;
                    }
                }
            }
            _ => {}
        }
    }

    fn forward_blocked_reason(&self) -> Option<&'static str> {
        if self.controller.controls().can_step_forward {
            None
        } else if self.controller.sequencer().is_finished() {
            Some("Sorting is complete")
        } else {
            Some("Pause playback to step")
        }
    }

    fn step_forward(&mut self) {
        if let Some(reason) = self.forward_blocked_reason() {
            self.set_status(format!("Cannot step forward: {}", reason));
            return;
        }
        let view = self.controller.sequencer_mut().step_forward();
        let message = if view.finished {
            "Sorting complete!".to_string()
        } else {
            "Stepped forward".to_string()
        };
        self.set_status(message);
    }

    fn step_backward(&mut self) {
        let controls = self.controller.controls();
        if !controls.can_step_back {
            self.set_status("Cannot step backward: Pause playback to step");
            return;
        }
        if self.controller.sequencer().cursor() == 0 {
            self.set_status("Cannot step backward: Already at the start");
            return;
        }
        self.controller.sequencer_mut().step_backward();
        self.set_status("Stepped backward");
    }

    fn toggle_play(&mut self) {
        if self.controller.sequencer().is_finished() {
            self.set_status("Sorting is complete, press r to reset");
            return;
        }
        self.controller.toggle_play();
        let playing = self.controller.sequencer().is_playing();
        self.set_status(if playing { "Playing..." } else { "Paused" });
    }

    fn on_auto_step(&mut self) {
        let sequencer = self.controller.sequencer();
        debug!(cursor = sequencer.cursor(), "auto step");
        if sequencer.is_finished() {
            self.set_status("Playback complete");
        } else {
            self.set_status("Playing...");
        }
    }

    fn after_input_change(&mut self, result: crate::error::Result<()>, message: &str) {
        match result {
            Ok(()) => {
                self.refresh_stats();
                self.set_status(message);
            }
            Err(e) => {
                warn!(error = %e, "input change failed");
                self.status_message = e.to_string();
                self.is_error = true;
            }
        }
    }

    fn refresh_stats(&mut self) {
        self.stats = RunStats::from_steps(self.controller.sequencer().steps());
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.is_error = false;
    }
}

/// Status text for a resize, worded from the size actually applied
fn resize_message(before: usize, after: usize) -> String {
    match after.cmp(&before) {
        Ordering::Less => format!("Array size decreased to {}", after),
        Ordering::Greater => format!("Array size increased to {}", after),
        Ordering::Equal => format!("Array size stays at {}", after),
    }
}

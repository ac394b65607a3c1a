//! TUI pane rendering modules
//!
//! Each pane is a stateless render function over data borrowed from the
//! [`App`](crate::ui::App).
//!
//! # Pane Modules
//!
//! - [`bars`]: the array as a bar chart, colored by comparing/swapping/sorted
//! - [`narration`]: headline and description of the displayed step
//! - [`controls`]: playback keys (greyed out when unavailable), speed, size and
//!   custom array entry
//! - [`info`]: algorithm summary and counts for the loaded run
//! - [`status`]: status bar with step counter and keybindings

pub mod bars;
pub mod controls;
pub mod info;
pub mod narration;
pub mod status;

// Re-export render functions for convenience
pub use bars::render_bars_pane;
pub use controls::{render_controls_pane, ControlsRenderData};
pub use info::render_info_pane;
pub use narration::render_narration_pane;
pub use status::{render_status_bar, StatusRenderData};

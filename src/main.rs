// BubbleTTY: Step-through Bubble Sort Visualizer

use std::fs::File;
use std::io;
use std::sync::Mutex;

use bubbletty::config::{Cli, Config};
use bubbletty::controller::Controller;
use bubbletty::error::{Error, Result};
use bubbletty::transcript::write_transcript;
use bubbletty::ui::App;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Send logs to `config.log_file` if one was given; otherwise logging stays off
/// so nothing is written over the TUI.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path).map_err(|source| Error::LogFile {
        path: path.clone(),
        source,
    })?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| Error::LogInit {
            message: e.to_string(),
        })
}

fn run(config: Config) -> Result<()> {
    init_logging(&config)?;
    let controller = Controller::new(&config)?;

    if config.transcript {
        let sequencer = controller.sequencer();
        let mut stdout = io::stdout().lock();
        write_transcript(&mut stdout, sequencer.input(), sequencer.steps())?;
        return Ok(());
    }

    info!(
        len = controller.sequencer().input().len(),
        steps = controller.sequencer().len(),
        "starting visualizer"
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(controller);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(Error::from)
}

fn main() {
    let config = match Config::from_cli(Cli::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = run(config) {
        eprintln!("Error: {}", e);
        std::process::exit(if e.is_input_error() { 2 } else { 1 });
    }
}
